//! Simulation clock shared by every scheduler.
//!
//! Time advances in exactly two ways: an idle jump to a future arrival,
//! or execution of a process for some number of ticks. Both transitions
//! are recorded so the resulting run carries a full Gantt trace.

use log::trace;

use crate::models::{ExecutionSlice, IdlePeriod, Process};

/// Discrete-time clock with slice and idle logs.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    clock: i64,
    slices: Vec<ExecutionSlice>,
    idle: Vec<IdlePeriod>,
}

impl Timeline {
    /// Creates a timeline at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.clock
    }

    /// Idle transition: jumps the clock forward to `time`.
    ///
    /// Does nothing if `time` is not in the future. Returns whether the
    /// clock moved.
    pub fn idle_until(&mut self, time: i64) -> bool {
        if time <= self.clock {
            return false;
        }
        trace!("idle [{}, {})", self.clock, time);
        self.idle.push(IdlePeriod {
            start: self.clock,
            end: time,
        });
        self.clock = time;
        true
    }

    /// Busy transition: runs `process` for `duration` ticks.
    ///
    /// Returns the time at which the slice ends.
    ///
    /// # Panics
    /// If the process has not arrived yet, `duration` is not positive, or
    /// the clock would overflow.
    pub fn execute(&mut self, process: &Process, duration: i64) -> i64 {
        assert!(
            process.is_ready_at(self.clock),
            "process '{}' dispatched at {} before its arrival {}",
            process.id,
            self.clock,
            process.arrival
        );
        assert!(
            duration > 0,
            "process '{}' dispatched for non-positive duration {}",
            process.id,
            duration
        );

        let start = self.clock;
        self.clock = start.checked_add(duration).unwrap_or_else(|| {
            panic!(
                "clock overflow running process '{}' for {} at {}",
                process.id, duration, start
            )
        });
        trace!("run {} [{}, {})", process.id, start, self.clock);
        self.slices
            .push(ExecutionSlice::new(process.id.as_str(), start, self.clock));
        self.clock
    }

    /// Consumes the timeline, returning its slice and idle logs.
    pub fn into_parts(self) -> (Vec<ExecutionSlice>, Vec<IdlePeriod>) {
        (self.slices, self.idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_jump_forward() {
        let mut tl = Timeline::new();
        assert!(tl.idle_until(4));
        assert_eq!(tl.now(), 4);
        let (slices, idle) = tl.into_parts();
        assert!(slices.is_empty());
        assert_eq!(idle, vec![IdlePeriod { start: 0, end: 4 }]);
    }

    #[test]
    fn test_idle_never_moves_backwards() {
        let mut tl = Timeline::new();
        tl.execute(&Process::new("P1", 5, 0), 5);
        assert!(!tl.idle_until(3));
        assert!(!tl.idle_until(5));
        assert_eq!(tl.now(), 5);
        let (_, idle) = tl.into_parts();
        assert!(idle.is_empty());
    }

    #[test]
    fn test_execute_records_slices() {
        let mut tl = Timeline::new();
        let p1 = Process::new("P1", 3, 0);
        let p2 = Process::new("P2", 2, 1);
        assert_eq!(tl.execute(&p1, 2), 2);
        assert_eq!(tl.execute(&p2, 2), 4);
        assert_eq!(tl.execute(&p1, 1), 5);

        let (slices, _) = tl.into_parts();
        assert_eq!(
            slices,
            vec![
                ExecutionSlice::new("P1", 0, 2),
                ExecutionSlice::new("P2", 2, 4),
                ExecutionSlice::new("P1", 4, 5),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "before its arrival")]
    fn test_execute_before_arrival_panics() {
        let mut tl = Timeline::new();
        tl.execute(&Process::new("P1", 3, 2), 3);
    }

    #[test]
    #[should_panic(expected = "clock overflow")]
    fn test_execute_clock_overflow_panics() {
        let mut tl = Timeline::new();
        tl.execute(&Process::new("P1", i64::MAX, 0), i64::MAX);
        tl.execute(&Process::new("P2", 1, 0), 1);
    }

    #[test]
    #[should_panic(expected = "non-positive duration")]
    fn test_execute_zero_duration_panics() {
        let mut tl = Timeline::new();
        tl.execute(&Process::new("P1", 3, 0), 0);
    }
}
