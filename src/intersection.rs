use crate::circle::{check_center, check_radius};
use crate::error::{OverlapError, Result};
use geo::EuclideanDistance;
use geo_types::{Coord, Point};

/// Finds the two points where the boundaries of circle A and circle B cross.
///
/// Points are ordered as `[mid + h * n, mid - h * n]`, where `mid` is the foot of
/// the common chord on the line of centers and `n` is the left-hand normal of
/// A -> B.
///
/// Radii must be positive and finite and centers finite, otherwise the result is
/// `InvalidInput`. Disjoint circles are an error. When one circle contains the
/// other (or the centers coincide) there is no crossing; both points are
/// reported as `center_b` so a caller drawing arcs through them gets an empty
/// shape rather than a failure.
pub fn circle_intersection_points(
    center_a: Coord<f64>,
    radius_a: f64,
    center_b: Coord<f64>,
    radius_b: f64,
) -> Result<[Coord<f64>; 2]> {
    check_radius("radius_a", radius_a)?;
    check_radius("radius_b", radius_b)?;
    check_center("center_a", center_a)?;
    check_center("center_b", center_b)?;

    let dx = center_b.x - center_a.x;
    let dy = center_b.y - center_a.y;
    let distance = Point::from(center_a).euclidean_distance(&Point::from(center_b));

    if distance > radius_a + radius_b {
        return Err(OverlapError::NoIntersection {
            distance,
            radius_sum: radius_a + radius_b,
        });
    }
    if distance < (radius_a - radius_b).abs() || distance == 0.0 {
        log::debug!(
            "circles are nested (d = {}, |r0 - r1| = {}); collapsing intersection to center",
            distance,
            (radius_a - radius_b).abs()
        );
        return Ok([center_b, center_b]);
    }

    // Distance from A to the point where the chord crosses the line of centers.
    let a = (radius_a * radius_a - radius_b * radius_b + distance * distance) / (2.0 * distance);

    let mid = Coord {
        x: center_a.x + dx * a / distance,
        y: center_a.y + dy * a / distance,
    };

    // Half chord length. Tangent circles can leave a tiny negative radicand.
    let h = (radius_a * radius_a - a * a).max(0.0).sqrt();

    let rx = -dy * (h / distance);
    let ry = dx * (h / distance);

    Ok([
        Coord { x: mid.x + rx, y: mid.y + ry },
        Coord { x: mid.x - rx, y: mid.y - ry },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn test_crossing_circles() {
        // r=4 at origin, r=5 at (3,0): chord is the line x = 0.
        let pts = circle_intersection_points(coord(0.0, 0.0), 4.0, coord(3.0, 0.0), 5.0).unwrap();

        assert_abs_diff_eq!(pts[0].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[0].y, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1].y, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_points_lie_on_both_circles() {
        let ca = coord(12.0, -3.0);
        let cb = coord(20.0, 5.0);
        let pts = circle_intersection_points(ca, 9.0, cb, 6.0).unwrap();
        for p in pts {
            assert_abs_diff_eq!((p.x - ca.x).hypot(p.y - ca.y), 9.0, epsilon = 1e-9);
            assert_abs_diff_eq!((p.x - cb.x).hypot(p.y - cb.y), 6.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_disjoint_circles_error() {
        let res = circle_intersection_points(coord(0.0, 0.0), 10.0, coord(1000.0, 0.0), 10.0);
        match res {
            Err(OverlapError::NoIntersection { distance, radius_sum }) => {
                assert_eq!(distance, 1000.0);
                assert_eq!(radius_sum, 20.0);
            }
            other => panic!("Expected NoIntersection, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_radius_is_invalid_input() {
        for (ra, rb) in [(-5.0, 3.0), (0.0, 3.0), (5.0, f64::NAN), (5.0, f64::INFINITY)] {
            let res = circle_intersection_points(coord(0.0, 0.0), ra, coord(1.0, 0.0), rb);
            assert!(
                matches!(res, Err(OverlapError::InvalidInput(_))),
                "({}, {}) gave {:?}",
                ra,
                rb,
                res
            );
        }
    }

    #[test]
    fn test_non_finite_center_is_invalid_input() {
        let res = circle_intersection_points(coord(f64::NAN, 0.0), 5.0, coord(1.0, 0.0), 3.0);
        assert!(matches!(res, Err(OverlapError::InvalidInput(_))));
    }

    #[test]
    fn test_nested_circles_collapse_to_center_b() {
        let cb = coord(0.0, -20.0);
        let pts = circle_intersection_points(coord(0.0, 0.0), 250.0, cb, 50.0).unwrap();
        assert_eq!(pts, [cb, cb]);
    }

    #[test]
    fn test_concentric_equal_circles_collapse() {
        let c = coord(5.0, 5.0);
        let pts = circle_intersection_points(c, 3.0, c, 3.0).unwrap();
        assert_eq!(pts, [c, c]);
    }

    #[test]
    fn test_tangent_circles_meet_once() {
        let pts = circle_intersection_points(coord(0.0, 0.0), 2.0, coord(5.0, 0.0), 3.0).unwrap();
        for p in pts {
            assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-9);
        }
    }
}
