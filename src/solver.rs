use crate::circle::check_radius;
use crate::error::{OverlapError, Result};
use crate::overlap::{max_overlap, overlap_area};
use crate::utils::parallel;
use serde::Serialize;

/// Absolute area tolerance the search stops at.
pub const DEFAULT_TOLERANCE: f64 = 0.05;
/// Bisection steps allowed before giving up.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Two radii and the overlap area they should share.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OverlapRequest {
    pub radius_a: f64,
    pub radius_b: f64,
    pub target_area: f64,
}

impl OverlapRequest {
    pub fn new(radius_a: f64, radius_b: f64, target_area: f64) -> Self {
        Self { radius_a, radius_b, target_area }
    }
}

/// Outcome of a successful separation search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Separation {
    /// Center-to-center distance.
    pub distance: f64,
    /// Overlap area actually produced at `distance`.
    pub area: f64,
    /// Bisection steps taken; 0 for the exact boundary cases.
    pub iterations: usize,
}

/// Finds how far apart two circles must sit to overlap by a given area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparationSolver {
    // Configuration
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SeparationSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SeparationSolver {
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Center distance at which circles of `radius_a` and `radius_b` overlap by
    /// `target_area` (within `tolerance`).
    pub fn find_separation(&self, radius_a: f64, radius_b: f64, target_area: f64) -> Result<f64> {
        self.solve(&OverlapRequest::new(radius_a, radius_b, target_area))
            .map(|s| s.distance)
    }

    /// Runs the separation search.
    ///
    /// Circle A sits at the origin and circle B starts `radius_a + radius_b` away,
    /// where they just touch. Overlap only grows as B moves closer, so the answer
    /// is bracketed by `[0, radius_a + radius_b]` and found by halving.
    pub fn solve(&self, request: &OverlapRequest) -> Result<Separation> {
        let OverlapRequest { radius_a, radius_b, target_area } = *request;
        validate(request)?;

        let max_distance = radius_a + radius_b;
        let max_area = max_overlap(radius_a, radius_b);

        // Exact boundaries need no search.
        if target_area == max_area {
            return Ok(Separation { distance: 0.0, area: max_area, iterations: 0 });
        }
        if target_area == 0.0 {
            return Ok(Separation { distance: max_distance, area: 0.0, iterations: 0 });
        }

        let mut lower = 0.0;
        let mut upper = max_distance;
        let mut guess = max_distance / 2.0;
        let mut area = overlap_area(guess, radius_a, radius_b);
        if area.is_nan() {
            return Err(OverlapError::InvalidInput(format!(
                "overlap area is NaN at distance {} for radii {} and {}",
                guess, radius_a, radius_b
            )));
        }

        let mut iterations = 0;
        while (target_area - area).abs() > self.tolerance {
            if iterations == self.max_iterations {
                log::warn!(
                    "separation search gave up: target = {}, max overlap = {}, range = [{}, {}]",
                    target_area, max_area, lower, upper
                );
                return Err(OverlapError::Convergence {
                    target: target_area,
                    iterations,
                    lower,
                    upper,
                });
            }
            iterations += 1;

            guess = if area > target_area {
                // Too much overlap: move apart.
                (upper + guess) / 2.0
            } else {
                (lower + guess) / 2.0
            };
            area = overlap_area(guess, radius_a, radius_b);
            if area > target_area {
                lower = guess;
            } else {
                upper = guess;
            }
            log::trace!("iteration {}: d = {}, area = {}", iterations, guess, area);
        }

        log::debug!(
            "separation for overlap {} (radii {}, {}) = {} after {} iterations",
            target_area, radius_a, radius_b, guess, iterations
        );
        Ok(Separation { distance: guess, area, iterations })
    }

    /// Solves every request independently; results keep the input order.
    pub fn solve_batch(&self, requests: &[OverlapRequest]) -> Vec<Result<Separation>> {
        parallel::map(requests, |req| self.solve(req))
    }
}

/// Free-function form of [`SeparationSolver::find_separation`] with the default tolerance and cap.
pub fn find_separation_for_overlap(radius_a: f64, radius_b: f64, target_area: f64) -> Result<f64> {
    SeparationSolver::new().find_separation(radius_a, radius_b, target_area)
}

fn validate(request: &OverlapRequest) -> Result<()> {
    let OverlapRequest { radius_a, radius_b, target_area } = *request;
    check_radius("radius_a", radius_a)?;
    check_radius("radius_b", radius_b)?;
    let max_area = max_overlap(radius_a, radius_b);
    if !target_area.is_finite() || target_area < 0.0 || target_area > max_area {
        return Err(OverlapError::InvalidInput(format!(
            "overlap {} is outside [0, {}]", target_area, max_area
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
