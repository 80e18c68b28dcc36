#[allow(clippy::module_inception)]
mod klowest;
pub use klowest::KLowest;
mod error;
pub use error::InvalidCapacity;
mod selector;
pub(crate) mod builder;
#[cfg(feature = "config")]
pub(crate) mod config;
