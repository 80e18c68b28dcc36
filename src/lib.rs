/// Selector interface for keeping the `k` smallest values of a stream.
///
/// `Selector` trait defines the primitives of a one pass selection
/// over a stream of values: values are [observed](#tymethod.observe)
/// one at a time and the selector retains at most
/// [`capacity()`](#tymethod.capacity) of them, the smallest seen so far.
/// At any point of the stream, the retained values can be
/// [snapshot](#tymethod.snapshot_ascending) in ascending order.
///
/// A selector is in one of two states:
/// * filling: it holds less than `capacity()` values and every
/// observed value is kept,
/// * full: it holds exactly `capacity()` values and an observed value is
/// either rejected or replaces the largest retained value.
/// Once full, a selector never goes back to filling. A selector with a
/// capacity of zero is full from the start and rejects everything.
///
/// See
/// [`Selector` implementors](trait.Selector.html#implementors)
/// for the available selectors and wrappers.
pub trait Selector<K> {
    /// Get the maximum number of values retained by the selector.
    fn capacity(&self) -> usize;

    /// Get the number of values currently retained.
    fn size(&self) -> usize;

    /// Feed the next value of the stream to the selector.
    ///
    /// The returned [`Observation`] tells whether the value was kept
    /// and, if so, which value left the selector to make room for it.
    /// Callers only interested in the final selection can ignore it.
    fn observe(&mut self, value: K) -> Observation<K>;

    /// Copy the retained values in ascending order.
    ///
    /// The returned vector is a copy and stays unchanged when more
    /// values are observed.
    fn snapshot_ascending(&self) -> Vec<K>;

    /// Get the largest retained value, or `None` if the selector is
    /// empty.
    fn max(&self) -> Option<&K>;

    /// Observe all the values of an iterator and return how many of them
    /// were kept.
    fn observe_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = K>,
        Self: Sized,
    {
        let mut kept = 0;
        for value in values {
            if self.observe(value).is_kept() {
                kept += 1;
            }
        }
        kept
    }
}

impl<K, S: Selector<K> + ?Sized> Selector<K> for Box<S> {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn observe(&mut self, value: K) -> Observation<K> {
        (**self).observe(value)
    }

    fn snapshot_ascending(&self) -> Vec<K> {
        (**self).snapshot_ascending()
    }

    fn max(&self) -> Option<&K> {
        (**self).max()
    }
}

/// Outcome of [observing](trait.Selector.html#tymethod.observe) a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation<K> {
    /// The selector was filling and the value was added.
    Kept,
    /// The value took the place of the previous largest value, which is
    /// returned. The retained values kept their arrangement.
    Replaced(K),
    /// The previous largest value, returned, was evicted and the value
    /// was inserted among the retained values.
    Evicted(K),
    /// The value is not among the smallest values and is returned.
    Rejected(K),
}

impl<K> Observation<K> {
    /// Whether the observed value is now retained in the selector.
    pub fn is_kept(&self) -> bool {
        !matches!(self, Observation::Rejected(_))
    }

    /// The value that is not retained after the observation, if any:
    /// either the evicted largest value or the rejected observed value.
    pub fn dropped(self) -> Option<K> {
        match self {
            Observation::Kept => None,
            Observation::Replaced(k)
            | Observation::Evicted(k)
            | Observation::Rejected(k) => Some(k),
        }
    }
}

/// Red-black tree with stable node handles.
///
/// This is the storage of the [`KLowest`] selector. It supports
/// insertion, deletion from a node handle, predecessor and successor
/// lookup and in-order walks.
pub mod rbtree;

mod klowest;
pub use klowest::{InvalidCapacity, KLowest};

mod profiler;
pub use profiler::Profiler;

/// Builder pattern to instantiate selectors.
///
/// Selectors can be built with [`Builder`](builder/struct.Builder.html)
/// as an entry point, chaining wrappers on top of a selector
/// builder and finally calling [`build()`](builder/trait.Build.html).
///
/// ```
/// use klowest::Selector;
/// use klowest::builder::{Build, Builder, ProfilerBuild};
/// use klowest::utils::profiler::ProfilerOutputKind;
///
/// let mut selector = Builder::klowest::<i32>(2)
///     .profile("example", ProfilerOutputKind::None)
///     .build();
/// selector.observe_all(vec![3, 1, 2]);
/// assert_eq!(selector.snapshot_ascending(), vec![1, 2]);
/// ```
pub mod builder;

/// Instantiate selectors from a configuration file.
#[cfg(feature = "config")]
pub mod config;

/// Public utils.
pub mod utils;

/// Public test module available at test time.
/// This module tests the expected behavior of
/// [`Selector`](../trait.Selector.html) implementers with
/// `test_selector()`.
#[cfg(test)]
mod tests;
