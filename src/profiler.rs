use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cumulative wall-clock accounting for named engine phases, recorded only
/// when the `profiling` feature is enabled.
pub struct Profiler {
    phases: HashMap<&'static str, PhaseStats>,
}

#[derive(Clone, Copy, Default)]
pub struct PhaseStats {
    pub calls: u64,
    pub total: Duration,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            phases: HashMap::new(),
        }
    }

    pub fn finish(&mut self, guard: &PhaseGuard) {
        let stats = self.phases.entry(guard.name).or_default();
        stats.calls += 1;
        stats.total += guard.started.elapsed();
    }

    /// Phases sorted by total time, hottest first.
    pub fn report(&self) -> Vec<(&'static str, PhaseStats)> {
        let mut v: Vec<_> = self.phases.iter().map(|(n, s)| (*n, *s)).collect();
        v.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        v
    }

    pub fn clear(&mut self) {
        self.phases.clear();
    }

    pub fn print_and_clear(&mut self) {
        for (name, stats) in self.report() {
            println!(
                "{:<20} {:>6} calls  {:?} total",
                name, stats.calls, stats.total
            );
        }
        self.clear();
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PhaseGuard {
    name: &'static str,
    started: Instant,
}

/// Start timing a phase. The returned guard reports into the global
/// profiler when dropped.
pub fn start(name: &'static str) -> PhaseGuard {
    PhaseGuard {
        name,
        started: Instant::now(),
    }
}

#[cfg(feature = "profiling")]
impl Drop for PhaseGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Time the enclosing scope under `$name` when the `profiling` feature is
/// enabled; compiles to nothing otherwise.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}
