use crate::circle::{check_center, check_radius, Circle};
use crate::error::Result;
use crate::intersection::circle_intersection_points;
use geo_types::{Coord, LineString, Polygon};
use serde::Serialize;
use std::f64::consts::{PI, TAU};

/// A circular arc between two boundary points, with SVG elliptical-arc flags.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Arc {
    pub circle: Circle,
    pub start: Coord<f64>,
    pub end: Coord<f64>,
    /// Arc spans more than half the circle.
    pub large_arc: bool,
    /// Arc is traversed in the increasing-angle direction.
    pub sweep: bool,
}

impl Arc {
    /// The arc of `circle` from `start` to `end` that passes through `via`.
    /// All three points are expected to lie on the circle.
    pub fn through(circle: Circle, start: Coord<f64>, end: Coord<f64>, via: Coord<f64>) -> Self {
        let t0 = circle.angle_of(start);
        let ccw_span = (circle.angle_of(end) - t0).rem_euclid(TAU);
        let ccw_via = (circle.angle_of(via) - t0).rem_euclid(TAU);

        let sweep = ccw_via < ccw_span;
        let span = if sweep { ccw_span } else { TAU - ccw_span };
        Self { circle, start, end, large_arc: span > PI, sweep }
    }

    /// Unsigned angle covered by the arc.
    pub fn span(&self) -> f64 {
        let t0 = self.circle.angle_of(self.start);
        let ccw = (self.circle.angle_of(self.end) - t0).rem_euclid(TAU);
        if self.sweep { ccw } else { TAU - ccw }
    }

    /// `segments` evenly spaced points from `start` (inclusive) towards `end` (exclusive).
    pub fn sample(&self, segments: usize) -> Vec<Coord<f64>> {
        let t0 = self.circle.angle_of(self.start);
        let signed_span = if self.sweep { self.span() } else { -self.span() };
        let step = signed_span / segments as f64;
        let mut coords = Vec::with_capacity(segments);
        coords.push(self.start);
        for k in 1..segments {
            coords.push(self.circle.point_at(t0 + step * k as f64));
        }
        coords
    }

    fn path_command(&self) -> String {
        format!(
            "A{},{} 0 {} {} {},{}",
            self.circle.radius,
            self.circle.radius,
            self.large_arc as u8,
            self.sweep as u8,
            self.end.x,
            self.end.y
        )
    }
}

/// Boundary of one region of a two-circle diagram.
///
/// Crossing circles give two arcs meeting at the intersection points. When the
/// circles are apart or one holds the other, a region is a whole disk, a disk
/// with a circular hole, or nothing at all.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RegionOutline {
    /// The region has no area.
    Empty,
    Closed { start: Coord<f64>, first: Arc, second: Arc },
    /// A full circle.
    Disk { circle: Circle },
    /// `outer` minus the circle `hole` lying inside it.
    WithHole { outer: Circle, hole: Circle },
}

impl RegionOutline {
    pub fn is_empty(&self) -> bool {
        matches!(self, RegionOutline::Empty)
    }

    /// SVG path `d` attribute. An empty outline draws nothing.
    ///
    /// Full circles are drawn as two half arcs. A hole runs the opposite way
    /// round, so it is cut out under both fill rules.
    pub fn path_data(&self) -> String {
        match self {
            RegionOutline::Empty => "M0,0".to_string(),
            RegionOutline::Closed { start, first, second } => format!(
                "M{},{}{}{}",
                start.x,
                start.y,
                first.path_command(),
                second.path_command()
            ),
            RegionOutline::Disk { circle } => circle_path(circle, true),
            RegionOutline::WithHole { outer, hole } => {
                format!("{}{}", circle_path(outer, true), circle_path(hole, false))
            }
        }
    }

    /// Approximates the region with `segments_per_arc` straight edges per arc.
    /// A full circle counts as two arcs. Returns `None` for an empty outline.
    pub fn to_polygon(&self, segments_per_arc: usize) -> Option<Polygon<f64>> {
        let segments = segments_per_arc.max(2);
        match self {
            RegionOutline::Empty => None,
            RegionOutline::Closed { first, second, .. } => {
                let mut coords = first.sample(segments);
                coords.extend(second.sample(segments));
                // Polygon::new closes the ring.
                Some(Polygon::new(LineString::from(coords), vec![]))
            }
            RegionOutline::Disk { circle } => Some(Polygon::new(circle.ring(2 * segments), vec![])),
            RegionOutline::WithHole { outer, hole } => Some(Polygon::new(
                outer.ring(2 * segments),
                vec![hole.ring(2 * segments)],
            )),
        }
    }
}

/// How two circles sit relative to each other.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Placement {
    /// Touching from outside or further apart.
    Apart,
    /// One circle lies inside the other, touching at most at one point.
    Nested,
    /// Boundaries cross at `p0` and `p1`; `u` is the unit vector from `a` to `b`.
    Crossing { p0: Coord<f64>, p1: Coord<f64>, u: Coord<f64> },
}

/// Outline of the lens shared by `a` and `b`.
pub fn lens_outline(a: &Circle, b: &Circle) -> Result<RegionOutline> {
    let outline = match placement(a, b)? {
        Placement::Apart => RegionOutline::Empty,
        Placement::Nested => {
            let inner = if b.radius < a.radius { *b } else { *a };
            RegionOutline::Disk { circle: inner }
        }
        Placement::Crossing { p0, p1, u } => {
            // Each circle contributes the arc lying inside the other one.
            let first = Arc::through(*b, p0, p1, offset(b, -1.0, u));
            let second = Arc::through(*a, p1, p0, offset(a, 1.0, u));
            RegionOutline::Closed { start: p0, first, second }
        }
    };
    Ok(outline)
}

/// Outline of `keep` with the lens it shares with `cut` removed.
pub fn crescent_outline(keep: &Circle, cut: &Circle) -> Result<RegionOutline> {
    let outline = match placement(keep, cut)? {
        Placement::Apart => RegionOutline::Disk { circle: *keep },
        Placement::Nested if keep.radius <= cut.radius => RegionOutline::Empty,
        Placement::Nested => RegionOutline::WithHole { outer: *keep, hole: *cut },
        Placement::Crossing { p0, p1, u } => {
            // `u` points from keep towards cut.
            let first = Arc::through(*keep, p0, p1, offset(keep, -1.0, u));
            let second = Arc::through(*cut, p1, p0, offset(cut, -1.0, u));
            RegionOutline::Closed { start: p0, first, second }
        }
    };
    Ok(outline)
}

fn placement(a: &Circle, b: &Circle) -> Result<Placement> {
    check_center("a.center", a.center)?;
    check_radius("a.radius", a.radius)?;
    check_center("b.center", b.center)?;
    check_radius("b.radius", b.radius)?;

    let d = a.center_distance(b);
    if d >= a.radius + b.radius {
        return Ok(Placement::Apart);
    }
    if d <= (a.radius - b.radius).abs() {
        return Ok(Placement::Nested);
    }

    let [p0, p1] = circle_intersection_points(a.center, a.radius, b.center, b.radius)?;
    if p0 == p1 {
        // Tangent up to rounding: outside when neither center is covered.
        log::debug!("circles touch at ({}, {}) (d = {})", p0.x, p0.y, d);
        if d > a.radius.max(b.radius) {
            return Ok(Placement::Apart);
        }
        return Ok(Placement::Nested);
    }
    let u = Coord {
        x: (b.center.x - a.center.x) / d,
        y: (b.center.y - a.center.y) / d,
    };
    Ok(Placement::Crossing { p0, p1, u })
}

/// Closed subpath around `circle`: two half arcs through the rightmost point.
fn circle_path(circle: &Circle, sweep: bool) -> String {
    let Circle { center, radius } = *circle;
    let flag = sweep as u8;
    format!(
        "M{},{}A{},{} 0 1 {} {},{}A{},{} 0 1 {} {},{}Z",
        center.x - radius,
        center.y,
        radius,
        radius,
        flag,
        center.x + radius,
        center.y,
        radius,
        radius,
        flag,
        center.x - radius,
        center.y
    )
}

fn offset(circle: &Circle, sign: f64, u: Coord<f64>) -> Coord<f64> {
    Coord {
        x: circle.center.x + sign * circle.radius * u.x,
        y: circle.center.y + sign * circle.radius * u.y,
    }
}

#[cfg(test)]
#[path = "lens_tests.rs"]
mod tests;
