#![cfg(feature = "config")]
mod selector;

use klowest::builder::Build;
use klowest::config::{ConfigBuilder, ConfigError, DynSelector};
use std::io::Write;

fn klowest_config(k: usize) -> String {
    format!("id='KLowestConfig'\ncapacity={}", k)
}

fn profiler_config(k: usize) -> String {
    format!(
        "
id='ProfilerConfig'
name='test'
output.kind='None'
[container]
id='KLowestConfig'
capacity={}
",
        k
    )
}

#[test]
fn klowest_config_test() {
    selector::test_selector(|k| {
        let selector: DynSelector<u32> =
            ConfigBuilder::from_string(klowest_config(k).as_str())
                .unwrap()
                .build();
        selector
    });
}

#[test]
fn profiler_config_test() {
    selector::test_selector(|k| {
        let selector: DynSelector<u32> =
            ConfigBuilder::from_string(profiler_config(k).as_str())
                .unwrap()
                .build();
        selector
    });
}

#[test]
fn config_file_test() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(profiler_config(10).as_bytes()).unwrap();
    let selector: DynSelector<u32> =
        ConfigBuilder::from_file(file.path()).unwrap().build();
    selector::test_stream(selector, &selector::random_values(100, 1024, 3));
}

#[test]
fn invalid_config_test() {
    assert!(matches!(
        ConfigBuilder::from_string("id='KLowestConfig'\ncapacity=-1"),
        Err(ConfigError::ConfigFormatError(_))
    ));
    assert!(matches!(
        ConfigBuilder::from_string("id='KLowestConfig'\ncapacity"),
        Err(ConfigError::TomlFormatError(_))
    ));
    assert!(matches!(
        ConfigBuilder::from_string("id='KHighestConfig'\ncapacity=1"),
        Err(ConfigError::ConfigFormatError(_))
    ));
}
