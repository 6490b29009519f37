//! Wedge and label placement. Angles are radians measured clockwise on
//! screen (canvas y grows downwards), with 0 pointing right.

use crate::constants::TOTAL_ANGLE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelTransform {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

pub fn wedge_bounds(index: usize, count: usize) -> (f64, f64) {
    let start = index as f64 / count as f64 * TOTAL_ANGLE;
    let end = (index + 1) as f64 / count as f64 * TOTAL_ANGLE;
    (start, end)
}

pub fn mid_angle(index: usize, count: usize) -> f64 {
    let (start, end) = wedge_bounds(index, count);
    (start + end) / 2.0
}

/// Label at `ratio` of the radius along the wedge bisector, turned to read radially.
pub fn label_transform(start: f64, end: f64, radius: f64, ratio: f64) -> LabelTransform {
    let mid = (start + end) / 2.0;
    LabelTransform {
        x: radius * ratio * mid.cos(),
        y: radius * ratio * mid.sin(),
        rotation: mid,
    }
}

/// Reduces an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TOTAL_ANGLE);
    // rem_euclid rounds tiny negatives up to exactly 2π
    if reduced >= TOTAL_ANGLE {
        0.0
    } else {
        reduced
    }
}

/// Index of the sector whose wedge sits under a fixed pointer once the
/// wheel's container has been rotated by `orientation`.
pub fn sector_at_pointer(orientation: f64, count: usize, pointer_angle: f64) -> usize {
    let local = normalize_angle(pointer_angle - orientation);
    let index = (local / TOTAL_ANGLE * count as f64).floor() as usize;
    index.min(count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_wedges_partition_the_circle() {
        for count in 1..=24 {
            let mut covered = 0.0;
            let mut previous_end = 0.0;
            for index in 0..count {
                let (start, end) = wedge_bounds(index, count);
                assert!((end - start - TOTAL_ANGLE / count as f64).abs() < EPS);
                assert!((start - previous_end).abs() < EPS, "gap before wedge {index}/{count}");
                covered += end - start;
                previous_end = end;
            }
            assert!((covered - TOTAL_ANGLE).abs() < EPS);
            assert!((previous_end - TOTAL_ANGLE).abs() < EPS);
        }
    }

    #[test]
    fn test_mid_angle() {
        assert!((mid_angle(0, 8) - PI / 8.0).abs() < EPS);
        assert!((mid_angle(7, 8) - 15.0 * PI / 8.0).abs() < EPS);
        assert!((mid_angle(0, 1) - PI).abs() < EPS);
    }

    #[test]
    fn test_label_sits_on_bisector() {
        let (start, end) = wedge_bounds(2, 8);
        let label = label_transform(start, end, 225.0, 0.8);
        let mid = mid_angle(2, 8);

        assert!((label.rotation - mid).abs() < EPS);
        assert!((label.x.hypot(label.y) - 180.0).abs() < EPS);
        assert!((label.y.atan2(label.x) - mid).abs() < EPS);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < EPS);
        assert!((normalize_angle(21.0 * PI) - PI).abs() < EPS);
        assert_eq!(normalize_angle(-1e-18), 0.0);
        assert!(normalize_angle(-1e-18) < TOTAL_ANGLE);
    }

    #[test]
    fn test_sector_at_pointer() {
        // Unrotated, the pointer at 0 touches the start of sector 0.
        assert_eq!(sector_at_pointer(0.0, 8, 0.0), 0);
        for index in 0..8 {
            let rest = TOTAL_ANGLE - mid_angle(index, 8);
            assert_eq!(sector_at_pointer(rest, 8, 0.0), index);
            assert_eq!(sector_at_pointer(rest + 40.0 * PI, 8, 0.0), index);
        }
        // Pointer at the top of the wheel.
        let top = 3.0 * PI / 2.0;
        assert_eq!(sector_at_pointer(top - mid_angle(5, 8), 8, top), 5);
    }
}
