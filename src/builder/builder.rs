use crate::builder::KLowestBuilder;

/// Entry point to build a selector from builder pattern chain.
///
/// This builder can be consumed to produce the innermost
/// [selector](../../trait.Selector.html) of a chain of wrappers.
/// In order to start the chain, you have to call one of the
/// struct methods.
///
/// ## Examples
///
/// ```
/// use klowest::Selector;
/// use klowest::builder::{Build, Builder, ProfilerBuild};
/// use klowest::utils::profiler::ProfilerOutputKind;
///
/// // Keep the 10 lowest values and profile the selector.
/// let mut selector = Builder::klowest::<u16>(10)
///     .profile("lowest", ProfilerOutputKind::None)
///     .build();
/// selector.observe(1u16);
/// ```
pub struct Builder {}

impl Builder {
    pub fn klowest<K>(capacity: usize) -> KLowestBuilder<K> {
        KLowestBuilder::new(capacity)
    }
}
