use crate::error::{OverlapError, Result};
use geo::EuclideanDistance;
use geo_types::{Coord, LineString, Point};
use serde::Serialize;
use std::f64::consts::{PI, TAU};

/// A circle positioned in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Coord<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Point on the boundary at `angle` radians from the +X axis.
    #[inline]
    pub fn point_at(&self, angle: f64) -> Coord<f64> {
        Coord {
            x: self.center.x + self.radius * angle.cos(),
            y: self.center.y + self.radius * angle.sin(),
        }
    }

    /// Polar angle of `p` around the center, in `(-PI, PI]`.
    #[inline]
    pub fn angle_of(&self, p: Coord<f64>) -> f64 {
        (p.y - self.center.y).atan2(p.x - self.center.x)
    }

    pub fn center_distance(&self, other: &Circle) -> f64 {
        Point::from(self.center).euclidean_distance(&Point::from(other.center))
    }

    /// Closed ring of `segments` evenly spaced boundary points.
    pub fn ring(&self, segments: usize) -> LineString<f64> {
        let mut coords: Vec<Coord<f64>> = (0..segments)
            .map(|k| self.point_at(TAU * k as f64 / segments as f64))
            .collect();
        coords.push(coords[0]);
        LineString::new(coords)
    }
}

/// Radii must be positive and finite.
pub(crate) fn check_radius(name: &str, radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(OverlapError::InvalidInput(format!(
            "{} must be a positive finite number, got {}",
            name, radius
        )));
    }
    Ok(())
}

pub(crate) fn check_center(name: &str, center: Coord<f64>) -> Result<()> {
    if !center.x.is_finite() || !center.y.is_finite() {
        return Err(OverlapError::InvalidInput(format!(
            "{} must have finite coordinates, got ({}, {})",
            name, center.x, center.y
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersection::circle_intersection_points;

    #[test]
    fn test_center_distance_agrees_with_intersection() {
        let a = Circle::new(Coord { x: 0.1, y: -7.3 }, 1.0);
        let b = Circle::new(Coord { x: 1e3 + 0.7, y: 3.3e2 }, 2.0);

        match circle_intersection_points(a.center, a.radius, b.center, b.radius) {
            Err(OverlapError::NoIntersection { distance, .. }) => {
                assert_eq!(distance, a.center_distance(&b));
                assert_eq!(distance, b.center_distance(&a));
            }
            other => panic!("Expected NoIntersection, got {:?}", other),
        }
    }

    #[test]
    fn test_ring_is_closed() {
        let c = Circle::new(Coord { x: 2.0, y: 3.0 }, 4.0);
        let ring = c.ring(8);
        assert_eq!(ring.0.len(), 9);
        assert_eq!(ring.0.first(), ring.0.last());
        assert_eq!(ring.0[0], Coord { x: 6.0, y: 3.0 });
    }

    #[test]
    fn test_checks_reject_bad_values() {
        assert!(check_radius("r", 1.0).is_ok());
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(check_radius("r", r), Err(OverlapError::InvalidInput(_))));
        }
        assert!(check_center("c", Coord { x: 1.0, y: f64::NEG_INFINITY }).is_err());
    }
}
