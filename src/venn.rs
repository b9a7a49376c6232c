//! Area-proportional two-circle Venn layout for a screened population.
//!
//! The "tested positive" circle has a fixed radius and everything else is
//! scaled against it, so areas stay proportional to head counts. The diseased
//! circle is placed straight above it (negative y, screen coordinates) at the
//! distance that gives the right overlap.

use crate::circle::Circle;
use crate::error::{OverlapError, Result};
use crate::lens::{crescent_outline, lens_outline, RegionOutline};
use crate::overlap::max_overlap;
use crate::population::PopulationBreakdown;
use crate::solver::SeparationSolver;
use geo_types::Coord;
use serde::Serialize;
use std::f64::consts::PI;

pub const DEFAULT_POSITIVE_RADIUS: f64 = 250.0;

/// Relative distance from full containment treated as rounding noise.
const OVERLAP_SNAP: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VennConfig {
    /// Radius of the tested-positive circle; the scale for all other circles.
    pub positive_radius: f64,
    pub solver: SeparationSolver,
}

impl Default for VennConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl VennConfig {
    pub fn new() -> Self {
        Self {
            positive_radius: DEFAULT_POSITIVE_RADIUS,
            solver: SeparationSolver::new(),
        }
    }

    pub fn with_positive_radius(mut self, radius: f64) -> Self {
        self.positive_radius = radius;
        self
    }

    pub fn with_solver(mut self, solver: SeparationSolver) -> Self {
        self.solver = solver;
        self
    }
}

/// The three drawn regions of the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// Diseased and tested positive: the lens.
    DiseasedTestPositive,
    /// Diseased but tested negative: diseased circle minus the lens.
    DiseasedTestNegative,
    /// Healthy but tested positive: positive circle minus the lens.
    HealthyTestPositive,
}

impl Region {
    pub const ALL: [Region; 3] = [
        Region::DiseasedTestPositive,
        Region::DiseasedTestNegative,
        Region::HealthyTestPositive,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Region::DiseasedTestPositive => "diseased--test-positive",
            Region::DiseasedTestNegative => "diseased--test-negative-diseased",
            Region::HealthyTestPositive => "healthy--test-positive",
        }
    }

    /// Head count the region stands for.
    pub fn count(&self, breakdown: &PopulationBreakdown) -> f64 {
        match self {
            Region::DiseasedTestPositive => breakdown.test_positive_diseased,
            Region::DiseasedTestNegative => breakdown.test_negative_diseased,
            Region::HealthyTestPositive => breakdown.test_positive_healthy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VennLayout {
    pub positive: Circle,
    pub diseased: Circle,
    /// Radius of the whole-population circle; drawn wherever the caller likes.
    pub population_radius: f64,
    /// Requested lens area.
    pub overlap: f64,
    /// Distance between the positive and diseased centers.
    pub separation: f64,
}

impl VennLayout {
    pub fn compute(breakdown: &PopulationBreakdown, config: &VennConfig) -> Result<Self> {
        let num_positive = breakdown.test_positive();
        let num_diseased = breakdown.diseased;
        if !(num_positive > 0.0) || !(num_diseased > 0.0) {
            return Err(OverlapError::InvalidInput(format!(
                "need both positives and diseased to lay out circles, got {} and {}",
                num_positive, num_diseased
            )));
        }

        let positive_radius = config.positive_radius;
        let diseased_radius = positive_radius * (num_diseased / num_positive).sqrt();
        let population_radius = positive_radius * (breakdown.total / num_positive).sqrt();

        let diseased_area = PI * diseased_radius * diseased_radius;
        // With nobody healthy the positive circle sits wholly inside the
        // diseased one. Rounding lands the overlap just either side of the
        // smaller circle's area, so snap it there.
        let full = max_overlap(positive_radius, diseased_radius);
        let mut overlap = (breakdown.test_positive_diseased / num_diseased) * diseased_area;
        if (overlap - full).abs() <= full * OVERLAP_SNAP {
            overlap = full;
        }
        let overlap = overlap.min(full);

        let separation = config.solver.find_separation(positive_radius, diseased_radius, overlap)?;
        log::debug!(
            "venn layout: r+ = {}, rd = {}, overlap = {}, separation = {}",
            positive_radius, diseased_radius, overlap, separation
        );

        Ok(Self {
            positive: Circle::new(Coord { x: 0.0, y: 0.0 }, positive_radius),
            diseased: Circle::new(Coord { x: 0.0, y: -separation }, diseased_radius),
            population_radius,
            overlap,
            separation,
        })
    }

    pub fn outline(&self, region: Region) -> Result<RegionOutline> {
        match region {
            Region::DiseasedTestPositive => lens_outline(&self.positive, &self.diseased),
            Region::DiseasedTestNegative => crescent_outline(&self.diseased, &self.positive),
            Region::HealthyTestPositive => crescent_outline(&self.positive, &self.diseased),
        }
    }

    /// Moves both circles by `(dx, dy)`, e.g. into chart coordinates.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let shift = |c: Circle| {
            Circle::new(Coord { x: c.center.x + dx, y: c.center.y + dy }, c.radius)
        };
        Self {
            positive: shift(self.positive),
            diseased: shift(self.diseased),
            ..*self
        }
    }
}
