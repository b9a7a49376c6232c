use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlapError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Separation search did not converge for overlap {target} after {iterations} iterations. \
         Current range = [{lower}, {upper}]"
    )]
    Convergence {
        target: f64,
        iterations: usize,
        lower: f64,
        upper: f64,
    },

    #[error("No intersection: centers are {distance} apart but the radii only sum to {radius_sum}")]
    NoIntersection { distance: f64, radius_sum: f64 },
}

pub type Result<T> = std::result::Result<T, OverlapError>;
