use super::Profiler;
use crate::{Observation, Selector};
use std::time::Instant;

/// Time a function call and return `(time, output)`
/// where `time` is elapsed time in nanoseconds and
/// `output` is the function call output.
macro_rules! time_it {
    ($call:expr) => {{
        let t0 = Instant::now();
        let out = $call;
        (t0.elapsed().as_nanos(), out)
    }};
}

impl<K, C> Selector<K> for Profiler<C>
where
    C: Selector<K>,
{
    /// Get the capacity of the wrapped selector.
    /// At the moment no profiling is performed on this method.
    fn capacity(&self) -> usize {
        self.selector.capacity()
    }

    /// Get the size of the wrapped selector.
    /// At the moment no profiling is performed on this method.
    fn size(&self) -> usize {
        self.selector.size()
    }

    /// Observe a value with the wrapped selector.
    ///
    /// This function execution time is profiled and saved into
    /// the profiler statistics while incrementing the number of calls to
    /// this method. The counter of the observation outcome is also
    /// incremented.
    fn observe(&mut self, value: K) -> Observation<K> {
        let (time, out) = time_it!(self.selector.observe(value));
        self.stats.observe.add(1, time);
        let outcome = match &out {
            Observation::Kept => &self.stats.kept,
            Observation::Replaced(_) => &self.stats.replaced,
            Observation::Evicted(_) => &self.stats.evicted,
            Observation::Rejected(_) => &self.stats.rejected,
        };
        outcome.add(1, time);
        out
    }

    /// Snapshot the wrapped selector.
    ///
    /// This function execution time is profiled and saved into
    /// the profiler statistics while incrementing the number of calls to
    /// this method.
    fn snapshot_ascending(&self) -> Vec<K> {
        let (time, out) = time_it!(self.selector.snapshot_ascending());
        self.stats.snapshot.add(1, time);
        out
    }

    fn max(&self) -> Option<&K> {
        self.selector.max()
    }
}

#[cfg(test)]
mod tests {
    use super::Profiler;
    use crate::tests::test_selector;
    use crate::utils::profiler::ProfilerOutputKind;
    use crate::{KLowest, Selector};

    #[test]
    fn selector() {
        for k in [0, 10, 100] {
            test_selector(Profiler::new(
                "test",
                ProfilerOutputKind::None,
                KLowest::new(k),
            ));
        }
    }

    #[test]
    fn test_outcome_counts() {
        let mut c =
            Profiler::new("test", ProfilerOutputKind::None, KLowest::new(3));
        c.observe_all(vec![5, 1, 9, 0, 7, 3]);
        assert_eq!(c.observe_stats().0, 6);
        assert_eq!(c.kept_stats().0, 3);
        // 0 evicts 9, 7 is rejected, 3 replaces 5.
        assert_eq!(c.evicted_stats().0, 1);
        assert_eq!(c.rejected_stats().0, 1);
        assert_eq!(c.replaced_stats().0, 1);
        assert_eq!(c.snapshot_ascending(), vec![0, 1, 3]);
        assert_eq!(c.snapshot_stats().0, 1);
        assert!(c.time_stats() >= c.observe_stats().1);
    }

    #[test]
    fn test_dump() {
        let mut c =
            Profiler::new("dump", ProfilerOutputKind::None, KLowest::new(1));
        c.observe(1u8);
        let mut out = Vec::new();
        c.dump(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("dump observe 1 "));
        assert!(lines[2].starts_with("dump kept 1 "));
        assert!(lines[5].starts_with("dump rejected 0 "));
    }

    #[test]
    fn test_file_output() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let filename = file.path().to_string_lossy().into_owned();
        {
            let mut c = Profiler::new(
                "file",
                ProfilerOutputKind::File(filename.clone()),
                KLowest::new(2),
            );
            c.observe_all(vec![3u32, 2, 1]);
        }
        let out = std::fs::read_to_string(&filename).unwrap();
        assert!(out.lines().any(|l| l.starts_with("file observe 3 ")));
        assert!(out.lines().any(|l| l.starts_with("file evicted 1 ")));
    }
}
