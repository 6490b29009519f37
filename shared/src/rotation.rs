use log::debug;

use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::geometry::{mid_angle, normalize_angle};

/// Remembers where the wheel came to rest so the next spin starts there.
///
/// The pointer is fixed and the wheel turns, so resting on sector `i` means
/// the container sits at `pointer - mid(i)`; with the pointer at 0 that is
/// `2π - mid(i)`. Values are kept in `[0, 2π)` between spins, which stops
/// the orientation from growing without bound over a long session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationTracker {
    rest_orientation: f64,
}

impl RotationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rest_orientation(&self) -> f64 {
        self.rest_orientation
    }

    pub fn settle(&mut self, index: usize, count: usize, pointer_angle: f64) -> f64 {
        self.rest_orientation = normalize_angle(pointer_angle - mid_angle(index, count));
        self.rest_orientation
    }

    pub fn rest_at(&mut self, orientation: f64) -> f64 {
        self.rest_orientation = normalize_angle(orientation);
        self.rest_orientation
    }

    pub fn reset(&mut self) {
        self.rest_orientation = 0.0;
    }
}

/// Absolute container rotation that lands `target_index` under the pointer
/// when starting from `rest`.
///
/// The result is `rest + base_spin + residual` with the residual in
/// `[0, 2π)`, so a spin never runs backwards and always makes at least the
/// configured number of whole turns.
pub fn resolve_spin(
    target_index: usize,
    count: usize,
    rest: f64,
    config: &WheelConfig,
) -> Result<f64, WheelError> {
    if target_index >= count {
        return Err(WheelError::InvalidSectorIndex {
            index: target_index,
            count,
        });
    }

    let mid = mid_angle(target_index, count);
    let base_spin = config.base_spin();
    let landing = config.pointer_angle - mid;
    let residual = normalize_angle(landing - rest - base_spin);
    let target = rest + base_spin + residual;

    debug!(
        "Resolved sector {}/{}: rest={:.4} mid={:.4} residual={:.4} target={:.4}",
        target_index, count, rest, mid, residual, target
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_BASE_TURNS, TOTAL_ANGLE};
    use crate::geometry::sector_at_pointer;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn congruent(a: f64, b: f64) -> bool {
        let diff = normalize_angle(a - b);
        diff < EPS || TOTAL_ANGLE - diff < EPS
    }

    #[test]
    fn test_tracker_stores_complement_of_mid_angle() {
        let mut tracker = RotationTracker::new();
        assert_eq!(tracker.rest_orientation(), 0.0);

        let rest = tracker.settle(0, 8, 0.0);
        assert!((rest - (2.0 * PI - PI / 8.0)).abs() < EPS);
        assert_eq!(tracker.rest_orientation(), rest);

        tracker.reset();
        assert_eq!(tracker.rest_orientation(), 0.0);
    }

    #[test]
    fn test_rest_at_normalizes() {
        let mut tracker = RotationTracker::new();
        let rest = tracker.rest_at(20.0 * PI + 1.0);
        assert!((rest - 1.0).abs() < EPS);
    }

    #[test]
    fn test_resolver_lands_every_sector() {
        let config = WheelConfig::default();
        for count in [1usize, 2, 3, 8, 13] {
            for rest in [0.0, 0.7, 2.0 * PI - PI / 8.0, 5.9] {
                for index in 0..count {
                    let target = resolve_spin(index, count, rest, &config).unwrap();
                    assert!(congruent(target, -mid_angle(index, count)));
                    assert_eq!(sector_at_pointer(target, count, 0.0), index);
                }
            }
        }
    }

    #[test]
    fn test_resolver_is_monotonic() {
        let config = WheelConfig::default();
        let mut tracker = RotationTracker::new();
        for index in [3usize, 3, 0, 7, 1, 6] {
            let rest = tracker.rest_orientation();
            let target = resolve_spin(index, 8, rest, &config).unwrap();
            assert!(target > rest);
            assert!(target >= rest + config.base_spin());
            assert!(target < rest + config.base_spin() + TOTAL_ANGLE);
            tracker.settle(index, 8, config.pointer_angle);
        }
    }

    #[test]
    fn test_resolver_lands_at_max_turns() {
        let config = WheelConfig {
            base_turns: MAX_BASE_TURNS,
            ..WheelConfig::default()
        };
        assert!(config.check().is_ok());
        for index in 0..8 {
            let target = resolve_spin(index, 8, 0.7, &config).unwrap();
            assert_eq!(sector_at_pointer(target, 8, 0.0), index);
        }
    }

    #[test]
    fn test_resolver_honours_pointer_angle() {
        let config = WheelConfig {
            pointer_angle: 3.0 * PI / 2.0,
            ..WheelConfig::default()
        };
        let target = resolve_spin(2, 6, 1.0, &config).unwrap();
        assert_eq!(sector_at_pointer(target, 6, config.pointer_angle), 2);
    }

    #[test]
    fn test_resolver_rejects_out_of_range() {
        let config = WheelConfig::default();
        assert_eq!(
            resolve_spin(8, 8, 0.0, &config),
            Err(WheelError::InvalidSectorIndex { index: 8, count: 8 })
        );
    }
}
