use super::Stats;
use crate::utils::profiler::ProfilerOutputKind;
use std::fs::File;
use std::io::{self, Write};

/// [`Selector`](trait.Selector.html) wrapper to collect call counts,
/// observation outcomes and time spent in methods.
///
/// [`Profiler`] is a selector wrapper forwarding every call to the
/// selector it wraps. The resulting profiled statistics is dumped when
/// the [`Profiler`] is dropped. The destination where to write the dump
/// is specified by a
/// [`ProfilerOutputKind`](utils/profiler/enum.ProfilerOutputKind.html)
/// enum. It can be either `stdout`, a file or nothing.
/// The dump has one line per statistic made of the profiler name,
/// the statistic name, the number of events and the total time in
/// nanoseconds.
///
/// When using the [`Profiler`] wrapper, the following events are counted:
/// * The time spent in methods:
/// [`observe()`](trait.Selector.html#tymethod.observe) and
/// [`snapshot_ascending()`](trait.Selector.html#tymethod.snapshot_ascending),
/// * the outcome of observations: kept, replaced, evicted or rejected,
/// with the time spent in the matching
/// [`observe()`](trait.Selector.html#tymethod.observe) calls.
///
/// This selector can also be built with a
/// [builder](builder/trait.ProfilerBuild.html#method.profile) pattern.
///
/// ## Examples
///
/// ```
/// use klowest::{KLowest, Profiler, Selector};
/// use klowest::utils::profiler::ProfilerOutputKind;
///
/// let mut c = Profiler::new(
///     "example",
///     ProfilerOutputKind::None,
///     KLowest::<i32>::new(2),
/// );
///
/// c.observe_all(vec![4, 2, 3, 9]);
/// assert_eq!(c.observe_stats().0, 4);
/// assert_eq!(c.kept_stats().0, 2);
/// assert_eq!(c.replaced_stats().0, 1);
/// assert_eq!(c.rejected_stats().0, 1);
///
/// c.snapshot_ascending();
/// assert_eq!(c.snapshot_stats().0, 1);
/// ```
pub struct Profiler<C> {
    pub(super) selector: C,
    pub(super) name: String,
    pub(super) output: ProfilerOutputKind,
    pub(super) stats: Stats,
}

impl<C> Drop for Profiler<C> {
    fn drop(&mut self) {
        match &self.output {
            ProfilerOutputKind::None => {}
            ProfilerOutputKind::Stdout => {
                if let Err(e) = self.dump(&mut io::stdout().lock()) {
                    log::error!("Failed to write profile {}: {}", self.name, e);
                }
            }
            ProfilerOutputKind::File(s) => {
                if let Err(e) = File::create(s).and_then(|mut f| self.dump(&mut f)) {
                    log::error!(
                        "Failed to write profile {} to file {}: {}",
                        self.name,
                        s,
                        e
                    );
                }
            }
        }
    }
}

impl<C> Profiler<C> {
    /// Wrap a selector into a `Profiler`.
    pub fn new(name: &str, output: ProfilerOutputKind, selector: C) -> Self {
        Profiler {
            selector,
            name: String::from(name),
            output,
            stats: Stats::new(),
        }
    }

    /// Write one line per statistic: name, statistic, count and time.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (field, stats) in self.stats.fields().iter() {
            let (n, time) = stats.read();
            writeln!(out, "{} {} {} {}", self.name, field, n, time)?;
        }
        Ok(())
    }

    /// Get a summary of (0) the number of
    /// [`observe()`](trait.Selector.html#tymethod.observe) method
    /// call and (1) the total time spent in nanoseconds in these calls.
    pub fn observe_stats(&self) -> (u64, u64) {
        self.stats.observe.read()
    }
    /// Get a summary of (0) the number of
    /// [`snapshot_ascending()`](trait.Selector.html#tymethod.snapshot_ascending)
    /// method call and (1) the total time spent in nanoseconds in these
    /// calls.
    pub fn snapshot_stats(&self) -> (u64, u64) {
        self.stats.snapshot.read()
    }
    /// Get the number of observed values added to a filling selector
    /// and the time spent observing them.
    pub fn kept_stats(&self) -> (u64, u64) {
        self.stats.kept.read()
    }
    /// Get the number of observed values that overwrote the maximum in
    /// place and the time spent observing them.
    pub fn replaced_stats(&self) -> (u64, u64) {
        self.stats.replaced.read()
    }
    /// Get the number of observed values that evicted the maximum
    /// and the time spent observing them.
    pub fn evicted_stats(&self) -> (u64, u64) {
        self.stats.evicted.read()
    }
    /// Get the number of rejected observed values and the time spent
    /// observing them.
    pub fn rejected_stats(&self) -> (u64, u64) {
        self.stats.rejected.read()
    }

    /// Get the total time spent in methods call so far.
    pub fn time_stats(&self) -> u64 {
        self.stats.observe.read().1 + self.stats.snapshot.read().1
    }
}
