use super::{
    ConfigError, ConfigInstance, DynSelector, GenericConfig, GenericKey,
};
use crate::builder::Build;
use serde::Serialize;

/// `Selector` builder from a generic configuration.
///
/// This structure is the entry point to build a selector from a
/// configuration file/string. It is instantiated from a
/// [`toml`](../../toml/index.html) configuration string or file and
/// consumed to produce a selector. The produced selector comes as a
/// [`DynSelector`] implementing the
/// [`Selector`](../trait.Selector.html) trait.
///
/// In order to be valid, a configuration must be in a proper
/// [`toml`](../../toml/index.html) format where the root element is a
/// [`toml`](../../toml/index.html)
/// [`Table`](../../toml/value/type.Table.html).
/// The table must contain an "id" key identifying the type of selector
/// to build. Valid selector types are enumerated in the
/// [`configs`](configs/index.html) module.
///
/// If the configuration is not valid `toml`, a
/// [`ConfigError::TomlFormatError`] is returned. If it does not describe
/// a valid selector, for instance because its "id" is unknown or its
/// capacity is negative, a [`ConfigError::ConfigFormatError`] is
/// returned.
///
/// Because the configuration cannot be known at compile time,
/// [`ConfigBuilder`] objects are built into a [`DynSelector`] which is
/// merely an alias for
/// [`std::boxed::Box`]`<dyn` [`Selector`](../trait.Selector.html)`>`.
///
/// ## Examples
///
/// ```
/// use klowest::Selector;
/// use klowest::builder::Build;
/// use klowest::config::{ConfigBuilder, DynSelector};
///
/// let config_str = "
/// id='ProfilerConfig'
/// name='lowest'
/// output.kind='None'
/// [container]
/// id='KLowestConfig'
/// capacity=3
/// ";
/// let mut selector: DynSelector<u64> =
///            ConfigBuilder::from_string(config_str).unwrap().build();
/// for value in [8, 2, 5, 1] {
///     selector.observe(value);
/// }
/// assert_eq!(selector.snapshot_ascending(), vec![1, 2, 5]);
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigBuilder {
    config: GenericConfig,
}

impl ConfigBuilder {
    /// Build a [`ConfigBuilder`] from a string in the `toml` format.
    pub fn from_string(s: &str) -> Result<Self, ConfigError> {
        ConfigInstance::from_string(s)
    }

    /// Build a [`ConfigBuilder`] from a file in the `toml` format.
    pub fn from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, ConfigError> {
        ConfigInstance::from_file(path)
    }
}

impl ConfigInstance for ConfigBuilder {
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let config = GenericConfig::from_toml(value)?;
        log::debug!("Selector configuration: {:?}", config);
        Ok(ConfigBuilder { config })
    }
}

impl<K: GenericKey> Build<DynSelector<K>> for ConfigBuilder {
    fn build(self) -> DynSelector<K> {
        self.config.build()
    }
}
