use std::sync::atomic::{AtomicU64, Ordering};

/// Accumulator of call count and elapsed time.
pub(super) struct MethodStats {
    // The total number of call.
    count: AtomicU64,
    // The total elapsed time for the calls.
    elapsed: AtomicU64,
}

impl MethodStats {
    /// Create zeroed MethodStats.
    pub fn new() -> Self {
        MethodStats {
            count: AtomicU64::new(0),
            elapsed: AtomicU64::new(0),
        }
    }

    /// Accumulate count and elapsed time.
    pub fn add(&self, count: usize, elapsed: u128) {
        self.count.fetch_add(count as u64, Ordering::Relaxed);
        self.elapsed.fetch_add(elapsed as u64, Ordering::Relaxed);
    }

    /// Get (count, time) stats.
    pub fn read(&self) -> (u64, u64) {
        let count = self.count.load(Ordering::Relaxed);
        let elapsed = self.elapsed.load(Ordering::Relaxed);
        (count, elapsed)
    }
}

/// Accumulator of selector method stats and observation outcomes.
pub(super) struct Stats {
    pub observe: MethodStats,
    pub snapshot: MethodStats,
    pub kept: MethodStats,
    pub replaced: MethodStats,
    pub evicted: MethodStats,
    pub rejected: MethodStats,
}

impl Stats {
    /// Initialize zeroed method stats.
    pub fn new() -> Self {
        Stats {
            observe: MethodStats::new(),
            snapshot: MethodStats::new(),
            kept: MethodStats::new(),
            replaced: MethodStats::new(),
            evicted: MethodStats::new(),
            rejected: MethodStats::new(),
        }
    }

    /// Stats names and values in dump order.
    pub fn fields(&self) -> [(&'static str, &MethodStats); 6] {
        [
            ("observe", &self.observe),
            ("snapshot", &self.snapshot),
            ("kept", &self.kept),
            ("replaced", &self.replaced),
            ("evicted", &self.evicted),
            ("rejected", &self.rejected),
        ]
    }
}
