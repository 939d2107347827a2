//! Transient "invalid word" signal
//!
//! The flash is armed at [`FLASH_DURATION`] and drains at
//! [`FLASH_DECAY_RATE`] times wall-clock speed.

use std::time::Duration;

/// How long the flash lasts when armed
pub const FLASH_DURATION: Duration = Duration::from_millis(1000);
/// Multiple of elapsed time drained per tick
pub const FLASH_DECAY_RATE: u32 = 3;

/// Countdown behind the invalid-word backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flash {
    remaining: Duration,
}

impl Flash {
    pub fn trigger(&mut self) {
        self.remaining = FLASH_DURATION;
    }

    pub fn clear(&mut self) {
        self.remaining = Duration::ZERO;
    }

    /// Advance by the real time elapsed since the previous frame
    pub fn tick(&mut self, elapsed: Duration) {
        let drained = elapsed.saturating_mul(FLASH_DECAY_RATE);
        self.remaining = self.remaining.saturating_sub(drained);
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.remaining.is_zero()
    }

    /// Strength in `0.0..=1.0`, 1.0 right after `trigger`
    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.remaining.as_secs_f64() / FLASH_DURATION.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_flash_is_inactive() {
        let flash = Flash::default();
        assert!(!flash.is_active());
        assert!(flash.intensity().abs() < f64::EPSILON);
    }

    #[test]
    fn trigger_sets_full_duration() {
        let mut flash = Flash::default();
        flash.trigger();
        assert_eq!(flash.remaining(), FLASH_DURATION);
        assert!((flash.intensity() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tick_drains_three_times_faster() {
        let mut flash = Flash::default();
        flash.trigger();
        flash.tick(Duration::from_millis(100));
        assert_eq!(flash.remaining(), Duration::from_millis(700));
    }

    #[test]
    fn decay_is_monotonic_and_stops_at_zero() {
        let mut flash = Flash::default();
        flash.trigger();

        let mut previous = flash.remaining();
        for _ in 0..40 {
            flash.tick(Duration::from_millis(16));
            assert!(flash.remaining() <= previous);
            previous = flash.remaining();
        }

        assert_eq!(flash.remaining(), Duration::ZERO);
        assert!(!flash.is_active());
    }

    #[test]
    fn huge_elapsed_time_saturates() {
        let mut flash = Flash::default();
        flash.trigger();
        flash.tick(Duration::MAX);
        assert_eq!(flash.remaining(), Duration::ZERO);
    }

    #[test]
    fn retrigger_restores_full_duration() {
        let mut flash = Flash::default();
        flash.trigger();
        flash.tick(Duration::from_millis(200));
        flash.trigger();
        assert_eq!(flash.remaining(), FLASH_DURATION);
    }
}
