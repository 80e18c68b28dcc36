use crate::builder::Build;
use crate::utils::profiler::ProfilerOutputKind;
use crate::Profiler;
use std::marker::PhantomData;

/// `Profiler` selector builder.
///
/// This builder can be consumed later to wrap some selector into a
/// [`Profiler`](../../struct.Profiler.html) selector.
///
/// ## Examples
///
/// ```
/// use klowest::Selector;
/// use klowest::builder::{Build, ProfilerBuild};
/// use klowest::builder::{KLowestBuilder, ProfilerBuilder};
/// use klowest::utils::profiler::ProfilerOutputKind;
///
/// let klowest_builder = KLowestBuilder::<i32>::new(2);
/// let mut selector = ProfilerBuilder::new(
///     "example",
///     ProfilerOutputKind::None,
///     klowest_builder,
/// )
/// .build();
/// selector.observe(1);
///
/// // You can also chain calls:
/// let mut selector = KLowestBuilder::<i32>::new(2)
///     .profile("example", ProfilerOutputKind::None)
///     .build();
/// selector.observe(1);
/// ```
pub struct ProfilerBuilder<C, B> {
    pub(crate) builder: B,
    pub(crate) name: String,
    pub(crate) output: ProfilerOutputKind,
    unused: PhantomData<C>,
}

impl<C, B> ProfilerBuilder<C, B> {
    pub fn new(name: &str, output: ProfilerOutputKind, builder: B) -> Self {
        ProfilerBuilder {
            builder,
            name: String::from(name),
            output,
            unused: PhantomData,
        }
    }
}

impl<C, B> Clone for ProfilerBuilder<C, B>
where
    B: Clone,
{
    fn clone(&self) -> Self {
        ProfilerBuilder {
            builder: self.builder.clone(),
            name: self.name.clone(),
            output: self.output.clone(),
            unused: PhantomData,
        }
    }
}

impl<C, B> Build<Profiler<C>> for ProfilerBuilder<C, B>
where
    B: Build<C>,
{
    fn build(self) -> Profiler<C> {
        Profiler::new(&self.name, self.output, self.builder.build())
    }
}

/// Add profiling to a selector [`Build`].
///
/// ```
/// use klowest::Selector;
/// use klowest::builder::{Build, Builder, ProfilerBuild};
/// use klowest::utils::profiler::ProfilerOutputKind;
///
/// let mut selector = Builder::klowest::<i32>(10)
///                    .profile("lowest", ProfilerOutputKind::None)
///                    .build();
/// selector.observe(1);
/// ```
pub trait ProfilerBuild<C>: Build<C> {
    /// [Profile](../../struct.Profiler.html) the preceding
    /// selector.
    ///
    /// The output profile will be identified by its `name` and will
    /// be available in `output` once the selector is dropped.
    fn profile(
        self,
        name: &str,
        output: ProfilerOutputKind,
    ) -> ProfilerBuilder<C, Self>
    where
        Self: Sized,
    {
        ProfilerBuilder::new(name, output, self)
    }
}

impl<C, B: Build<C>> ProfilerBuild<C> for B {}
