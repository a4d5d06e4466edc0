//! L4 Atomic Layer: Interpolation and progress helpers
//!
//! Pure functions shared by the scroll loop, the carousel and the tweener.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
///
/// # Arguments
/// * `elapsed` - Time since the animation started
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
///
/// With `t` as a fixed per-frame factor this is exponential smoothing:
/// every call closes the same fraction of the remaining gap.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Clamp a value into [min, max], tolerating an inverted range by favouring `min`
#[inline]
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.1) - 10.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.0, 10.0, -5.0), 0.0);
        assert_eq!(clamp(0.0, 10.0, 15.0), 10.0);
        assert_eq!(clamp(0.0, 10.0, 5.0), 5.0);
        assert_eq!(clamp(0.0, -10.0, 5.0), 0.0);
    }

    #[test]
    fn test_progress() {
        let d = Duration::from_millis(1000);
        assert!((progress(Duration::from_millis(500), d) - 0.5).abs() < 0.001);
        assert!((progress(Duration::from_millis(1500), d) - 1.0).abs() < 0.001);
        assert!((progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < 0.001);
    }
}
