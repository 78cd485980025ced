//! Tick-counted linear interpolation.
//!
//! Every animation in the application is a [`Tween`] advanced by the event
//! loop's `Tick` message: the handshake packet crossing the track and the
//! map fly-to both count the same ticks.

/// A fixed-duration linear tween between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: f64,
    end: f64,
    total_ticks: u32,
    elapsed: u32,
}

impl Tween {
    /// Create a tween running from `start` to `end` over `total_ticks` ticks.
    ///
    /// A zero duration is clamped to one tick so the end value is still
    /// reached through `tick()`.
    pub fn new(start: f64, end: f64, total_ticks: u32) -> Self {
        Self {
            start,
            end,
            total_ticks: total_ticks.max(1),
            elapsed: 0,
        }
    }

    /// Current interpolated value. Exactly `start` before the first tick and
    /// exactly `end` once finished.
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.end;
        }
        let t = f64::from(self.elapsed) / f64::from(self.total_ticks);
        self.start + (self.end - self.start) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_ticks
    }

    /// Advance one tick. Returns true on the tick that completes the tween,
    /// false before and after.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed += 1;
        self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_start_value() {
        let tween = Tween::new(10.0, 85.0, 15);
        assert_eq!(tween.value(), 10.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_reaches_end_exactly_on_final_tick() {
        let mut tween = Tween::new(10.0, 85.0, 15);
        for _ in 0..14 {
            assert!(!tween.tick());
        }
        assert!(tween.tick());
        assert_eq!(tween.value(), 85.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_midpoint_value() {
        let mut tween = Tween::new(0.0, 100.0, 10);
        for _ in 0..5 {
            tween.tick();
        }
        assert_eq!(tween.value(), 50.0);
    }

    #[test]
    fn test_descending_range() {
        let mut tween = Tween::new(85.0, 10.0, 15);
        while !tween.tick() {}
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn test_tick_after_finish_is_inert() {
        let mut tween = Tween::new(0.0, 1.0, 1);
        assert!(tween.tick());
        assert!(!tween.tick());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_clamps_to_one_tick() {
        let mut tween = Tween::new(3.0, 7.0, 0);
        assert!(!tween.is_finished());
        assert!(tween.tick());
        assert_eq!(tween.value(), 7.0);
    }
}
