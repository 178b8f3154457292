use serde::{Deserialize, Serialize};

/// Area and price of the floor actually built, which is never smaller than
/// the floor requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    pub actual_width: f64,
    pub actual_length: f64,
    pub total_area: f64,
    pub total_cost: f64,
}
