use std::time::{Duration, Instant};

/// Wall-clock stopwatch for a single labelled operation.
pub struct Telemetry {
    label: &'static str,
    start: Instant,
}

impl Telemetry {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Emits the elapsed time at debug level and returns it.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        tracing::debug!(
            operation = self.label,
            elapsed_ms = elapsed.as_millis() as u64,
            "operation finished"
        );
        elapsed
    }
}
