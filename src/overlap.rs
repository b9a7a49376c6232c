use std::f64::consts::PI;

/// Largest possible overlap of two circles: the area of the smaller one.
#[inline]
pub fn max_overlap(radius_a: f64, radius_b: f64) -> f64 {
    PI * (radius_a * radius_a).min(radius_b * radius_b)
}

/// Area of the lens shared by two circles whose centers are `distance` apart.
///
/// Computed as the sum of the two circular segments cut off by the common chord.
/// Outside the proper-intersection range the result collapses to the boundary
/// values instead of failing:
/// - touching or disjoint circles (`distance >= radius_a + radius_b`) share nothing,
/// - concentric or contained circles (`distance <= |radius_a - radius_b|`) share
///   the whole of the smaller circle.
///
/// The function is non-increasing in `distance`, which is what the separation
/// search relies on.
pub fn overlap_area(distance: f64, radius_a: f64, radius_b: f64) -> f64 {
    let max = max_overlap(radius_a, radius_b);
    if distance == 0.0 {
        return max;
    }
    if distance >= radius_a + radius_b {
        return 0.0;
    }
    if distance <= (radius_a - radius_b).abs() {
        return max;
    }

    let ra_sq = radius_a * radius_a;
    let rb_sq = radius_b * radius_b;
    let d_sq = distance * distance;

    // Half-angles subtended by the chord at each center.
    let cos_b = (rb_sq + d_sq - ra_sq) / (2.0 * radius_b * distance);
    let cos_a = (ra_sq + d_sq - rb_sq) / (2.0 * radius_a * distance);
    if cos_b.is_nan() || cos_a.is_nan() {
        return f64::NAN;
    }
    // Rounding can push these a hair past 1 near the boundaries.
    let angle_b = 2.0 * cos_b.clamp(-1.0, 1.0).acos();
    let angle_a = 2.0 * cos_a.clamp(-1.0, 1.0).acos();

    0.5 * (angle_b * rb_sq - rb_sq * angle_b.sin() + angle_a * ra_sq - ra_sq * angle_a.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_distance_is_full_overlap() {
        for r in [0.5, 1.0, 10.0, 250.0] {
            assert_eq!(overlap_area(0.0, r, r), PI * r * r);
        }
        assert_eq!(overlap_area(0.0, 250.0, 100.0), PI * 100.0 * 100.0);
    }

    #[test]
    fn test_touching_circles_share_nothing() {
        assert_eq!(overlap_area(350.0, 250.0, 100.0), 0.0);
        assert_eq!(overlap_area(0.3, 0.1, 0.2), 0.0);
        assert_eq!(overlap_area(1000.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn test_contained_circle() {
        // Smaller circle sits fully inside the larger one.
        assert_eq!(overlap_area(100.0, 250.0, 100.0), PI * 100.0 * 100.0);
        assert_eq!(overlap_area(149.0, 250.0, 100.0), PI * 100.0 * 100.0);
    }

    #[test]
    fn test_equal_circles_half_radius_apart() {
        // Closed form for equal circles: 2 r^2 acos(d / 2r) - (d / 2) sqrt(4 r^2 - d^2)
        let r: f64 = 10.0;
        let d: f64 = 10.0;
        let expected =
            2.0 * r * r * (d / (2.0 * r)).acos() - 0.5 * d * (4.0 * r * r - d * d).sqrt();
        assert_relative_eq!(overlap_area(d, r, r), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetric_in_radii() {
        let a = overlap_area(300.0, 250.0, 150.0);
        let b = overlap_area(300.0, 150.0, 250.0);
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn test_monotone_over_full_range() {
        for (ra, rb) in [(250.0, 150.0), (10.0, 10.0), (3.0, 7.0), (0.25, 40.0)] {
            let max_d: f64 = ra + rb;
            let mut prev = f64::INFINITY;
            for k in 0..=2000 {
                let d = max_d * k as f64 / 2000.0;
                let area = overlap_area(d, ra, rb);
                assert!(area <= prev + 1e-9, "area rose at d = {} for ({}, {})", d, ra, rb);
                prev = area;
            }
        }
    }

    #[test]
    fn test_nan_radius_propagates() {
        assert!(overlap_area(0.5, 1.0, f64::NAN).is_nan());
    }
}
