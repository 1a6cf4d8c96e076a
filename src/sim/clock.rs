//! Fixed-step flight clock
//!
//! Real frame times jitter, which makes the ball stutter and the time to
//! impact vary from run to run. The clock ignores wall time entirely: every
//! tick adds exactly one `step`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightClock {
    step: f64,
    elapsed: f64,
    ticks: u64,
}

impl FlightClock {
    pub fn new(step: f64) -> Self {
        Self {
            step,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Advance one fixed step, returning the new elapsed time
    pub fn tick(&mut self) -> f64 {
        self.ticks += 1;
        self.elapsed += self.step;
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.ticks = 0;
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_adds_fixed_step() {
        let mut clock = FlightClock::new(0.25);
        assert_eq!(clock.tick(), 0.25);
        assert_eq!(clock.tick(), 0.5);
        assert_eq!(clock.ticks(), 2);
        assert_eq!(clock.elapsed(), 0.5);
    }

    #[test]
    fn test_reset() {
        let mut clock = FlightClock::new(0.0171);
        for _ in 0..10 {
            clock.tick();
        }
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.ticks(), 0);
        assert_eq!(clock.step(), 0.0171);
    }

    #[test]
    fn test_same_ticks_same_time() {
        let mut a = FlightClock::new(0.0171);
        let mut b = FlightClock::new(0.0171);
        for _ in 0..129 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.elapsed(), b.elapsed());
    }
}
