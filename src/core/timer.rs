// src/core/timer.rs
use std::time::{Duration, Instant};

/// Reports wall-clock time on stdout (and the log) when dropped.
///
/// ```ignore
/// let shown = {
///     let _timer = ScopedTimer::start("render");
///     render()
/// };
/// ```
pub struct ScopedTimer {
    label: String,
    started: Instant,
}

impl ScopedTimer {
    pub fn start(label: &str) -> Self {
        Self { label: s!(label), started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let line = report_line(self.elapsed());
        println!("{line}");
        logf!("{}: {line}", self.label);
    }
}

pub fn report_line(elapsed: Duration) -> String {
    format!("Execution time: {:.4} seconds", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_line_has_four_decimals() {
        assert_eq!(report_line(Duration::from_millis(1500)), "Execution time: 1.5000 seconds");
        assert_eq!(report_line(Duration::ZERO), "Execution time: 0.0000 seconds");
    }

    #[test]
    fn elapsed_grows_while_in_scope() {
        let timer = ScopedTimer::start("test");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
    }
}
