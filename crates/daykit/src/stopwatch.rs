//! Scope timing helper.

use std::time::{Duration, Instant};

use tracing::debug;

/// Measures how long a scope takes and logs the elapsed time on drop.
///
/// ```
/// use daykit::stopwatch::Stopwatch;
///
/// {
///     let _timer = Stopwatch::start("rebuild_index");
///     // ... work ...
/// } // logs "rebuild_index finished" with the elapsed duration
/// ```
#[derive(Debug)]
pub struct Stopwatch {
    label: &'static str,
    started: Instant,
}

impl Stopwatch {
    /// Start timing a labeled scope.
    pub fn start(label: &'static str) -> Self {
        Self { label, started: Instant::now() }
    }

    /// Elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        debug!(label = self.label, elapsed = ?self.started.elapsed(), "scope finished");
    }
}
