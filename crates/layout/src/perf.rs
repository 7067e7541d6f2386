use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Snapshot of what a profiler has collected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSummary {
    pub cache_hits: usize,
    pub cache_misses: usize,
    /// Accumulated time per key, sorted by key.
    pub timings: Vec<(String, Duration)>,
}

impl ProfileSummary {
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.cache_hits + self.cache_misses;
        (total > 0).then(|| self.cache_hits as f64 / total as f64)
    }
}

/// Trait for measuring layout performance.
///
/// The engine calls these on every pass; the default [`NoOpProfiler`]
/// compiles down to nothing.
pub trait Profiler: Send + Sync {
    fn record(&self, key: &str, duration: Duration);
    fn count_hit(&self);
    fn count_miss(&self);
    fn reset(&self);
    fn summary(&self) -> ProfileSummary;
}

/// A no-op profiler for production use.
/// The compiler will inline these and eliminate the overhead.
pub struct NoOpProfiler;

impl Profiler for NoOpProfiler {
    #[inline(always)]
    fn record(&self, _key: &str, _duration: Duration) {}
    #[inline(always)]
    fn count_hit(&self) {}
    #[inline(always)]
    fn count_miss(&self) {}
    #[inline(always)]
    fn reset(&self) {}
    fn summary(&self) -> ProfileSummary {
        ProfileSummary::default()
    }
}

/// Profiler that accumulates pass timings and measure-cache counters.
pub struct DebugProfiler {
    stats: Mutex<HashMap<String, Duration>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl DebugProfiler {
    pub fn new() -> Self {
        Self {
            stats: Mutex::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn log_summary(&self, label: &str) {
        let summary = self.summary();
        let Some(rate) = summary.hit_rate() else {
            return;
        };

        log::info!("=== Layout Profile ({}) ===", label);
        log::info!("Cache Hits: {} ({:.1}%)", summary.cache_hits, rate * 100.0);
        log::info!("Cache Misses: {}", summary.cache_misses);
        for (k, v) in &summary.timings {
            log::info!("{}: {:?}", k, v);
        }
    }
}

impl Default for DebugProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler for DebugProfiler {
    fn record(&self, key: &str, duration: Duration) {
        if let Ok(mut g) = self.stats.lock() {
            *g.entry(key.to_string()).or_default() += duration;
        }
    }

    fn count_hit(&self) {
        self.hits.fetch_add(1, Ordering::Release);
    }

    fn count_miss(&self) {
        self.misses.fetch_add(1, Ordering::Release);
    }

    fn reset(&self) {
        if let Ok(mut g) = self.stats.lock() {
            g.clear();
        }
        self.hits.store(0, Ordering::Release);
        self.misses.store(0, Ordering::Release);
    }

    fn summary(&self) -> ProfileSummary {
        let mut timings: Vec<(String, Duration)> = self
            .stats
            .lock()
            .map(|g| g.iter().map(|(k, v)| (k.clone(), *v)).collect())
            .unwrap_or_default();
        timings.sort_by(|a, b| a.0.cmp(&b.0));
        ProfileSummary {
            cache_hits: self.hits.load(Ordering::Acquire),
            cache_misses: self.misses.load(Ordering::Acquire),
            timings,
        }
    }
}
