use serde::{Deserialize, Serialize};

use crate::error::{Axis, DesignerError, Result};

/// Floor size the customer asked for, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorRequest {
    pub width: f64,
    pub length: f64,
}

impl FloorRequest {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    /// Rejects non-positive and non-finite sides; width is checked first.
    pub fn validate(&self) -> Result<()> {
        check_side(Axis::Width, self.width)?;
        check_side(Axis::Length, self.length)?;
        Ok(())
    }
}

fn check_side(axis: Axis, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DesignerError::InvalidDimension { axis, value })
    }
}
