use crate::builder::{Build, ProfilerBuilder};
use crate::config::{
    check_id, ConfigError, ConfigInstance, DynSelector, GenericConfig,
    GenericKey, IntoConfig,
};
use crate::utils::profiler::ProfilerOutputKind;
use crate::Profiler;
use serde::{Deserialize, Serialize};

/// Configuration format for [`Profiler`](../../struct.Profiler.html)
/// selectors.
///
/// This configuration format is composed of an `id` field where the
/// `id` value must be "ProfilerConfig", `name` as the profiler name,
/// `output` as the destination where the profile information will be
/// written and the configuration in toml format of the selector to
/// profile.
///
/// Below is an example of the configuration of a
/// [`Profiler`](../../struct.Profiler.html) wrapping a
/// [`KLowest`](../../struct.KLowest.html) selector and writing the
/// profiler information to stdout.
/// ```
/// use klowest::Selector;
/// use klowest::builder::Build;
/// use klowest::config::{ConfigBuilder, DynSelector};
///
/// let config_str = "
/// id='ProfilerConfig'
/// name='test_profiler'
/// output.kind='Stdout'
/// [container]
/// id='KLowestConfig'
/// capacity=10
/// ";
///
/// // "output" fields could have also been:
/// // output.kind='File'
/// // output.filename='/dev/stdout'
///
/// let selector: DynSelector<u64> =
///                ConfigBuilder::from_string(config_str)
///                .unwrap()
///                .build();
/// assert_eq!(selector.capacity(), 10);
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ProfilerConfig {
    #[allow(dead_code)]
    id: String,
    name: String,
    output: ProfilerOutputKind,
    container: Box<GenericConfig>,
}

impl ProfilerConfig {
    pub fn id() -> &'static str {
        "ProfilerConfig"
    }
}

impl<C, B> IntoConfig for ProfilerBuilder<C, B>
where
    B: IntoConfig,
    B::Config: Into<GenericConfig>,
{
    type Config = ProfilerConfig;

    fn into_config(&self) -> ProfilerConfig {
        ProfilerConfig {
            id: String::from(ProfilerConfig::id()),
            name: self.name.clone(),
            output: self.output.clone(),
            container: Box::new(self.builder.into_config().into()),
        }
    }
}

impl ConfigInstance for ProfilerConfig {
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        check_id(value, Self::id())?;
        value.clone().try_into().map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid ProfilerConfig: {}\n{}",
                value, e
            ))
        })
    }
}

impl<K: GenericKey> Build<DynSelector<K>> for ProfilerConfig {
    fn build(self) -> DynSelector<K> {
        let selector: DynSelector<K> = self.container.build();
        Box::new(Profiler::new(&self.name, self.output, selector))
    }
}
