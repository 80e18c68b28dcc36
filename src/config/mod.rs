//! Module to instantiate a selector from a configuration file.
//!
//! Configuration file/strings are a way to instantiate selectors.
//! They describe selectors using the [`toml`](https://toml.io/en/)
//! format.
//! The [`ConfigBuilder`] structure is the entry point to create a
//! selector instance from a configuration string or file.
//! For instance, the selector described in the
//! [`builder`](../builder/index.html) module can be built as follow:
//! ```
//! use klowest::Selector;
//! use klowest::builder::Build;
//! use klowest::config::{ConfigBuilder, DynSelector};
//!
//! let config_str = "
//! id='ProfilerConfig'
//! name='example'
//! output.kind='None'
//! [container]
//! id='KLowestConfig'
//! capacity=2
//! ";
//! let mut selector: DynSelector<u64> =
//!            ConfigBuilder::from_string(config_str).unwrap().build();
//! selector.observe_all(vec![3, 1, 2]);
//! assert_eq!(selector.snapshot_ascending(), vec![1, 2]);
//! ```
//!
//! See the [`configs`](configs/index.html) module for the collection of
//! selectors configuration format.

use serde::Serialize;
use std::path::Path;

/// Key trait bound for values observed by a selector built from a
/// configuration.
///
/// Selectors built from a configuration are boxed trait objects.
/// Observed values must satisfy the bounds of every selector that a
/// configuration may describe, and outlive the box.
pub trait GenericKey: Ord + Clone + 'static {}
impl<T: Ord + Clone + 'static> GenericKey for T {}

/// A boxed [`Selector`](../trait.Selector.html) built from a
/// configuration.
pub type DynSelector<K> = Box<dyn crate::Selector<K>>;

/// Trait used to instantiate a configuration object from a toml
/// configuration.
///
/// The resulting configuration object can later be
/// [built](../builder/trait.Build.html) into a selector.
pub trait ConfigInstance: Sized {
    /// Method to create this configuration from a parsed toml
    /// [`toml::Value`].
    ///
    /// This method returns either Self on success to parse input toml
    /// into a valid configuration or an Error describing what went wrong.
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError>;

    /// Parse a configuration string in the `toml` format.
    fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value =
            toml::from_str(s).map_err(ConfigError::TomlFormatError)?;
        Self::from_toml(&value)
    }

    /// Read and parse a configuration file in the `toml` format.
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s =
            std::fs::read_to_string(path).map_err(ConfigError::IOError)?;
        Self::from_string(s.as_str())
    }

    /// Format this configuration as a `toml` string.
    fn to_toml_string(&self) -> Result<String, toml::ser::Error>
    where
        Self: Serialize,
    {
        toml::to_string(self)
    }

    /// Format this configuration as a pretty `toml` string.
    fn to_toml_string_pretty(&self) -> Result<String, toml::ser::Error>
    where
        Self: Serialize,
    {
        toml::to_string_pretty(self)
    }
}

/// Conversion of a [builder](../builder/index.html) into the
/// configuration describing the same selector.
pub trait IntoConfig {
    type Config: ConfigInstance + Serialize;
    fn into_config(&self) -> Self::Config;
}

// Check that a configuration table has the expected `id` field.
pub(crate) fn check_id(
    value: &toml::Value,
    id: &'static str,
) -> Result<(), ConfigError> {
    match value.get("id").and_then(toml::Value::as_str) {
        Some(s) if s == id => Ok(()),
        _ => Err(ConfigError::ConfigFormatError(format!(
            "Expected configuration with id '{}'.",
            id
        ))),
    }
}

mod error;
pub use error::ConfigError;
mod generic_config;
pub(crate) use generic_config::GenericConfig;
mod config_builder;
pub use config_builder::ConfigBuilder;

/// The collection of available configurations.
pub mod configs {
    pub use crate::klowest::config::KLowestConfig;
    pub use crate::profiler::config::ProfilerConfig;
}
