//! Boundary sampling for circles
//!
//! Walks the circumference in fixed arc-length steps so every circle gets the
//! same point density regardless of its radius. Everything runs in f64 and
//! rounds half to even, so the pixel output is exact for a given radius.

use std::f64::consts::PI;

use glam::{DVec2, IVec2};

use crate::polar_to_cartesian;

/// Sample the boundary of a circle into integer pixel coordinates.
///
/// Points are spaced `spacing` units apart along the circumference, starting
/// at angle 0 and going counter-clockwise. A radius that is zero, negative or
/// not finite yields an empty boundary; a radius below `spacing / 2π` yields
/// at most one point.
pub fn sample(center: DVec2, radius: f64, spacing: f64) -> Vec<IVec2> {
    if !(radius > 0.0) || !radius.is_finite() || !(spacing > 0.0) {
        return Vec::new();
    }

    let circumference = radius * 2.0 * PI;
    let limit = circumference.ceil();
    // Degrees per unit of arc length
    let increment_degrees = 360.0 / circumference;

    let mut points = Vec::with_capacity((limit / spacing).ceil() as usize);
    let mut step = 0u32;
    loop {
        let theta = step as f64 * spacing;
        if theta >= limit {
            break;
        }
        let angle = (increment_degrees * theta) * (PI / 180.0);
        let p = polar_to_cartesian(center, radius, angle);
        points.push(IVec2::new(
            p.x.round_ties_even() as i32,
            p.y.round_ties_even() as i32,
        ));
        step += 1;
    }
    points
}

/// Expected point count for a non-degenerate radius
pub fn expected_len(radius: f64, spacing: f64) -> usize {
    if !(radius > 0.0) || !(spacing > 0.0) {
        return 0;
    }
    ((radius * 2.0 * PI).ceil() / spacing).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Radius after `steps` growth increments from a spawn radius of 1
    fn grown(steps: usize) -> f64 {
        let mut r = 1.0;
        for _ in 0..steps {
            r += 0.7;
        }
        r
    }

    #[test]
    fn test_sample_degenerate_radius_is_empty() {
        assert!(sample(DVec2::ZERO, 0.0, 3.0).is_empty());
        assert!(sample(DVec2::ZERO, -4.0, 3.0).is_empty());
        assert!(sample(DVec2::ZERO, f64::NAN, 3.0).is_empty());
    }

    #[test]
    fn test_sample_tiny_radius_at_most_one_point() {
        // Below spacing / 2π the walk stops after the first point
        let r = 3.0 / std::f64::consts::TAU * 0.9;
        assert!(sample(DVec2::new(5.0, 5.0), r, 3.0).len() <= 1);
    }

    #[test]
    fn test_sample_starts_at_angle_zero() {
        let points = sample(DVec2::new(100.0, 100.0), 100.0, 3.0);
        assert_eq!(points[0], IVec2::new(200, 100));
    }

    #[test]
    fn test_sample_radius_ten() {
        // circumference 62.83 -> ceil 63 -> thetas 0, 3, ..., 60
        let points = sample(DVec2::ZERO, 10.0, 3.0);
        assert_eq!(points.len(), 21);
        assert_eq!(points.len(), expected_len(10.0, 3.0));
        // A quarter turn is 15.7 units of arc; theta 15 lands just short of it
        assert_eq!(points[0], IVec2::new(10, 0));
        assert_eq!(points[5], IVec2::new(1, 10));
    }

    #[test]
    fn test_sample_rounds_half_to_even() {
        let points = sample(DVec2::ZERO, 2.5, 3.0);
        let expected = [(2, 0), (1, 2), (-2, 2), (-2, -1), (0, -2), (2, -1)];
        let expected: Vec<_> = expected.iter().map(|&(x, y)| IVec2::new(x, y)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_sample_grown_radius_exact_points() {
        // Five growth steps land on exactly 4.5, which rounds down to 4
        let points = sample(DVec2::ZERO, grown(5), 3.0);
        let expected = [
            (4, 0),
            (4, 3),
            (1, 4),
            (-2, 4),
            (-4, 2),
            (-4, -1),
            (-3, -3),
            (0, -4),
            (3, -4),
            (4, -1),
        ];
        let expected: Vec<_> = expected.iter().map(|&(x, y)| IVec2::new(x, y)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_sample_accumulated_radius_off_center() {
        // 13 steps accumulate to 10.099999999999998, not 10.1
        let r = grown(13);
        assert_eq!(r, 10.099999999999998);
        let points = sample(DVec2::new(7.0, 3.0), r, 3.0);
        let expected = [
            (17, 3),
            (17, 6),
            (15, 9),
            (13, 11),
            (11, 12),
            (8, 13),
            (5, 13),
            (2, 12),
            (0, 10),
            (-2, 8),
            (-3, 5),
            (-3, 2),
            (-2, -1),
            (-1, -4),
            (2, -6),
            (4, -7),
            (7, -7),
            (10, -7),
            (13, -5),
            (15, -3),
            (17, 0),
            (17, 3),
        ];
        let expected: Vec<_> = expected.iter().map(|&(x, y)| IVec2::new(x, y)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_sample_density_is_constant() {
        let small = sample(DVec2::ZERO, 20.0, 3.0).len() as f64 / 20.0;
        let large = sample(DVec2::ZERO, 200.0, 3.0).len() as f64 / 200.0;
        assert!((small - large).abs() < 0.05);
    }

    proptest! {
        #[test]
        fn prop_points_lie_on_circle(
            cx in -500.0f64..500.0,
            cy in -500.0f64..500.0,
            r in 1.0f64..400.0,
        ) {
            let center = DVec2::new(cx, cy);
            let points = sample(center, r, 3.0);
            prop_assert_eq!(points.len(), expected_len(r, 3.0));
            for p in points {
                let d = (p.as_dvec2() - center).length();
                prop_assert!((d - r).abs() <= 1.0, "point {:?} at distance {} for r={}", p, d, r);
            }
        }
    }
}
