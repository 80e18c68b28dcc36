use crate::builder::{Build, KLowestBuilder};
use crate::config::{
    check_id, ConfigError, ConfigInstance, DynSelector, GenericKey,
    IntoConfig,
};
use crate::KLowest;
use serde::{Deserialize, Serialize};

/// Configuration format for [`KLowest`](../../struct.KLowest.html)
/// selectors.
///
/// This configuration format is composed of two key/value fields that
/// must be present:
/// - `id = "KLowestConfig"` and
/// - `capacity = <int>`
///
/// The `id` field must be exactly "KLowestConfig" while the capacity
/// will set the maximum number of values that the selector retains.
/// A negative capacity is a configuration error.
/// ```
/// use klowest::Selector;
/// use klowest::builder::Build;
/// use klowest::config::{ConfigBuilder, DynSelector};
///
/// let config_str = "
/// id = 'KLowestConfig'
/// capacity = 10
/// ";
/// let selector: DynSelector<u64> =
///            ConfigBuilder::from_string(config_str)
///            .unwrap()
///            .build();
/// assert_eq!(selector.capacity(), 10);
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct KLowestConfig {
    #[allow(dead_code)]
    id: String,
    capacity: usize,
}

impl KLowestConfig {
    pub fn id() -> &'static str {
        "KLowestConfig"
    }
}

impl ConfigInstance for KLowestConfig {
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        check_id(value, Self::id())?;
        value.clone().try_into().map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid KLowestConfig: {}\n{}",
                value, e
            ))
        })
    }
}

impl<K: GenericKey> Build<DynSelector<K>> for KLowestConfig {
    fn build(self) -> DynSelector<K> {
        Box::new(KLowest::<K>::new(self.capacity))
    }
}

impl<K> IntoConfig for KLowestBuilder<K> {
    type Config = KLowestConfig;

    fn into_config(&self) -> KLowestConfig {
        KLowestConfig {
            id: String::from(KLowestConfig::id()),
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KLowestConfig;
    use crate::builder::{Build, KLowestBuilder};
    use crate::config::tests::test_config_builder;
    use crate::config::{ConfigError, ConfigInstance, DynSelector};
    use crate::Selector;

    #[test]
    fn test_valid_klowest_config() {
        let capacity = 10;
        let config_str =
            format!("id='KLowestConfig'\ncapacity={}", capacity);
        let value: toml::Value =
            toml::from_str(config_str.as_str()).unwrap();
        let config = KLowestConfig::from_toml(&value).unwrap();
        assert_eq!(config.capacity, capacity);
        let mut selector: DynSelector<u64> = config.build();
        assert_eq!(selector.capacity(), capacity);
        selector.observe(4);
        assert_eq!(selector.snapshot_ascending(), vec![4]);
    }

    #[test]
    fn test_zero_capacity_config() {
        let config =
            KLowestConfig::from_string("id='KLowestConfig'\ncapacity=0")
                .unwrap();
        let mut selector: DynSelector<u64> = config.build();
        assert!(!selector.observe(4).is_kept());
        assert_eq!(selector.size(), 0);
    }

    #[test]
    fn test_negative_capacity_config() {
        assert!(matches!(
            KLowestConfig::from_string("id='KLowestConfig'\ncapacity=-1"),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }

    #[test]
    fn test_invalid_klowest_config() {
        assert!(matches!(
            KLowestConfig::from_string("id='KLowestConfig'"),
            Err(ConfigError::ConfigFormatError(_))
        ));
        assert!(matches!(
            KLowestConfig::from_string("id='KLowestConfig'\ncapacity='ten'"),
            Err(ConfigError::ConfigFormatError(_))
        ));
        assert!(matches!(
            KLowestConfig::from_string("id='ProfilerConfig'\ncapacity=10"),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }

    #[test]
    fn test_builder_into_config() {
        let builder = KLowestBuilder::<u64>::new(10);
        test_config_builder(builder);
    }
}
