//! Construction observers for progress reporting and timing.
//!
//! [`RouteBuilder`](crate::constructive::RouteBuilder) reports what it does
//! through a [`BuildObserver`] handed in by the caller, so diagnostics never
//! live in process-wide state.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::models::Tour;

/// A logger callback receiving one formatted line per call.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Callbacks invoked by the route builder at key points of construction.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Examples
///
/// ```
/// use range_tour::observer::BuildObserver;
///
/// #[derive(Default)]
/// struct CountRecharges(usize);
///
/// impl BuildObserver for CountRecharges {
///     fn on_recharge(&mut self, _recharges: usize, _remaining: usize) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait BuildObserver {
    /// Called once before the first move, with the number of points to visit.
    fn on_start(&mut self, _points: usize, _capacity: f64) {}

    /// Called after moving to point `id` over a leg of length `leg`.
    fn on_visit(&mut self, _id: usize, _leg: f64, _remaining_charge: f64) {}

    /// Called after a forced return to the depot.
    ///
    /// `recharges` counts recharge stops so far (this one included);
    /// `remaining` is the number of points still to visit.
    fn on_recharge(&mut self, _recharges: usize, _remaining: usize) {}

    /// Called once with the finished tour and the wall-clock build time.
    fn on_finish(&mut self, _tour: &Tour, _elapsed: Duration) {}
}

/// A [`BuildObserver`] that does nothing.
pub struct NoopObserver;

impl BuildObserver for NoopObserver {}

/// Records build time and event counts.
#[derive(Debug, Clone, Default)]
pub struct TimingObserver {
    elapsed: Option<Duration>,
    visits: usize,
    recharges: usize,
}

impl TimingObserver {
    /// Creates an observer with nothing recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wall-clock construction time, once the build has finished.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Number of points visited.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Number of recharge stops made.
    pub fn recharges(&self) -> usize {
        self.recharges
    }
}

impl BuildObserver for TimingObserver {
    fn on_start(&mut self, _points: usize, _capacity: f64) {
        *self = Self::default();
    }

    fn on_visit(&mut self, _id: usize, _leg: f64, _remaining_charge: f64) {
        self.visits += 1;
    }

    fn on_recharge(&mut self, recharges: usize, _remaining: usize) {
        self.recharges = recharges;
    }

    fn on_finish(&mut self, _tour: &Tour, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }
}

/// Forwards progress lines to an [`InfoLogger`].
///
/// Start, every recharge and the final summary are always logged; individual
/// visits only when a visit interval is set.
pub struct LogObserver {
    logger: InfoLogger,
    visit_interval: Option<usize>,
    visits: usize,
}

impl LogObserver {
    /// Creates an observer that logs start, recharges and the summary.
    pub fn new(logger: InfoLogger) -> Self {
        Self {
            logger,
            visit_interval: None,
            visits: 0,
        }
    }

    /// Also logs every `interval`-th visit (0 disables visit logging).
    pub fn with_visit_interval(mut self, interval: usize) -> Self {
        self.visit_interval = (interval > 0).then_some(interval);
        self
    }

    fn log(&self, line: fmt::Arguments<'_>) {
        (self.logger)(&line.to_string());
    }
}

impl BuildObserver for LogObserver {
    fn on_start(&mut self, points: usize, capacity: f64) {
        self.visits = 0;
        self.log(format_args!(
            "building tour over {points} points, capacity {capacity}"
        ));
    }

    fn on_visit(&mut self, id: usize, leg: f64, remaining_charge: f64) {
        self.visits += 1;
        if let Some(interval) = self.visit_interval {
            if self.visits % interval == 0 {
                self.log(format_args!(
                    "visit #{} -> point {id} (leg {leg:.4}, charge left {remaining_charge:.4})",
                    self.visits
                ));
            }
        }
    }

    fn on_recharge(&mut self, recharges: usize, remaining: usize) {
        self.log(format_args!(
            "recharge #{recharges}, {remaining} points left"
        ));
    }

    fn on_finish(&mut self, tour: &Tour, elapsed: Duration) {
        self.log(format_args!(
            "tour built: {} entries, {} recharges in {:.3}s",
            tour.len(),
            tour.recharge_count(),
            elapsed.as_secs_f64()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn capture() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();
        let logger: InfoLogger = Arc::new(move |line: &str| {
            sink.lock().expect("lock").push(line.to_string());
        });
        (logger, lines)
    }

    #[test]
    fn test_timing_observer_counts() {
        let mut obs = TimingObserver::new();
        obs.on_start(3, 3.0);
        obs.on_visit(1, 0.5, 2.5);
        obs.on_visit(2, 0.5, 2.0);
        obs.on_recharge(1, 1);
        obs.on_visit(3, 0.5, 2.5);
        assert!(obs.elapsed().is_none());
        obs.on_finish(&Tour::from_ids(vec![0, 1, 2, 0, 3, 0]), Duration::from_millis(5));
        assert_eq!(obs.visits(), 3);
        assert_eq!(obs.recharges(), 1);
        assert_eq!(obs.elapsed(), Some(Duration::from_millis(5)));
    }

    #[test]
    fn test_timing_observer_resets_on_start() {
        let mut obs = TimingObserver::new();
        obs.on_visit(1, 0.5, 2.5);
        obs.on_start(1, 3.0);
        assert_eq!(obs.visits(), 0);
    }

    #[test]
    fn test_log_observer_lines() {
        let (logger, lines) = capture();
        let mut obs = LogObserver::new(logger);
        obs.on_start(2, 3.0);
        obs.on_visit(1, 0.5, 2.5);
        obs.on_recharge(1, 1);
        obs.on_finish(&Tour::from_ids(vec![0, 1, 0, 2, 0]), Duration::ZERO);

        let lines = lines.lock().expect("lock");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "building tour over 2 points, capacity 3");
        assert_eq!(lines[1], "recharge #1, 1 points left");
        assert!(lines[2].starts_with("tour built: 5 entries, 1 recharges"));
    }

    #[test]
    fn test_log_observer_visit_interval() {
        let (logger, lines) = capture();
        let mut obs = LogObserver::new(logger).with_visit_interval(2);
        for id in 1..=5 {
            obs.on_visit(id, 0.1, 1.0);
        }
        let lines = lines.lock().expect("lock");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("visit #2 -> point 2"));
        assert!(lines[1].starts_with("visit #4 -> point 4"));
    }
}
