use super::{ConfigError, ConfigInstance, DynSelector, GenericKey};
use crate::builder::Build;
use crate::klowest::config::KLowestConfig;
use crate::profiler::config::ProfilerConfig;
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::Serialize;

static CONFIGS: [&str; 2] = ["KLowestConfig", "ProfilerConfig"];

/// Private entry point to build a selector from a generic configuration.
///
/// The variant is chosen by the `id` field of the configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenericConfig {
    KLowest(KLowestConfig),
    Profiler(ProfilerConfig),
}

impl ConfigInstance for GenericConfig {
    /// Build a configuration from a toml value object.
    /// This function checks that:
    /// * The toml configuration is a toml `Table`,
    /// * The toml configuration contains an "id" field
    /// * The value of the "id" field is a supported value.
    /// * The target configuration identified by "id" is valid.
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        // Check toml value is a table.
        let table = match value {
            toml::Value::Table(t) => t,
            _ => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Selector configuration must be a toml table.",
                )))
            }
        };

        // Check config contain a valid 'id' field.
        let id = match table.get("id") {
            None => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Configuration must have an 'id' field.",
                )))
            }
            Some(toml::Value::String(s)) => s.as_str(),
            Some(_) => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Invalid id type, must be a string.",
                )))
            }
        };

        match id {
            "KLowestConfig" => {
                KLowestConfig::from_toml(value).map(GenericConfig::KLowest)
            }
            "ProfilerConfig" => {
                ProfilerConfig::from_toml(value).map(GenericConfig::Profiler)
            }
            s => Err(ConfigError::ConfigFormatError(format!(
                "Invalid selector configuration type: {}. \
                 Supported types are: {}",
                s,
                CONFIGS.join(", ")
            ))),
        }
    }
}

// Nested configurations are parsed through the same id checks as the
// top level configuration.
impl<'de> Deserialize<'de> for GenericConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = toml::Value::deserialize(deserializer)?;
        GenericConfig::from_toml(&value).map_err(D::Error::custom)
    }
}

impl<K: GenericKey> Build<DynSelector<K>> for GenericConfig {
    fn build(self) -> DynSelector<K> {
        match self {
            GenericConfig::KLowest(c) => c.build(),
            GenericConfig::Profiler(c) => c.build(),
        }
    }
}

impl From<KLowestConfig> for GenericConfig {
    fn from(config: KLowestConfig) -> Self {
        GenericConfig::KLowest(config)
    }
}

impl From<ProfilerConfig> for GenericConfig {
    fn from(config: ProfilerConfig) -> Self {
        GenericConfig::Profiler(config)
    }
}
