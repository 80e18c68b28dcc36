/// Consume a builder to produce a selector.
pub trait Build<C> {
    fn build(self) -> C;
}

#[allow(clippy::module_inception)]
mod builder;
pub use builder::Builder;

pub use crate::klowest::builder::KLowestBuilder;
pub use crate::profiler::builder::{ProfilerBuild, ProfilerBuilder};
