pub mod circle;
pub mod error;
pub mod export;
pub mod intersection;
pub mod lens;
pub mod overlap;
pub mod population;
pub mod solver;
pub mod utils;
pub mod venn;
pub mod wasm;

pub use circle::Circle;
pub use error::{OverlapError, Result};
pub use intersection::circle_intersection_points;
pub use lens::{Arc, RegionOutline};
pub use overlap::{max_overlap, overlap_area};
pub use population::{DiseaseTest, PopulationBreakdown};
pub use solver::{find_separation_for_overlap, OverlapRequest, Separation, SeparationSolver};
pub use venn::{Region, VennConfig, VennLayout};
