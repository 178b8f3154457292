use serde::{Deserialize, Serialize};

/// Most panels the planner will lay along one side of a floor.
pub const MAX_PANELS_PER_SIDE: usize = 4096;

/// Whole panels along each side of the floor. Planned grids never exceed
/// [`MAX_PANELS_PER_SIDE`] on either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn panel_count(&self) -> usize {
        self.checked_panel_count().unwrap_or(usize::MAX)
    }

    pub fn checked_panel_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl std::fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
