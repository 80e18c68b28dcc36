mod stats;
use stats::Stats;
#[allow(clippy::module_inception)]
mod profiler;
pub use profiler::Profiler;
pub(crate) mod builder;
mod selector;
#[cfg(feature = "config")]
pub(crate) mod config;
