use serde::{Deserialize, Serialize};

use super::{CoverageResult, FloorRequest, GridDimensions};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub request: FloorRequest,
    pub dimensions: GridDimensions,
    pub coverage: CoverageResult,
}

impl FloorPlan {
    pub fn panel_count(&self) -> usize {
        self.dimensions.panel_count()
    }
}
