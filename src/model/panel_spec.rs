use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{DesignerError, Result};

pub const DEFAULT_PANEL_SIZE_INCHES: f64 = 20.0;
pub const DEFAULT_COST_PER_SQFT: f64 = 15.0;
pub const DEFAULT_CASE_CAPACITY: usize = 10;

const INCHES_PER_FOOT: f64 = 12.0;

/// Constants of one deployment: how big a panel is, what a square foot of
/// floor costs, and how many panels ship in a case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPanelSpec")]
pub struct PanelSpec {
    panel_size_ft: f64,
    cost_per_sqft: f64,
    case_capacity: NonZeroUsize,
}

#[derive(Deserialize)]
struct RawPanelSpec {
    panel_size_ft: f64,
    cost_per_sqft: f64,
    case_capacity: usize,
}

impl TryFrom<RawPanelSpec> for PanelSpec {
    type Error = DesignerError;

    fn try_from(raw: RawPanelSpec) -> Result<Self> {
        Self::new(raw.panel_size_ft, raw.cost_per_sqft, raw.case_capacity)
    }
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            panel_size_ft: DEFAULT_PANEL_SIZE_INCHES / INCHES_PER_FOOT,
            cost_per_sqft: DEFAULT_COST_PER_SQFT,
            case_capacity: NonZeroUsize::new(DEFAULT_CASE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl PanelSpec {
    pub fn new(panel_size_ft: f64, cost_per_sqft: f64, case_capacity: usize) -> Result<Self> {
        if !panel_size_ft.is_finite() || panel_size_ft <= 0.0 {
            return Err(DesignerError::InvalidSpec(format!(
                "panel size must be positive, got {} ft",
                panel_size_ft
            )));
        }
        if !cost_per_sqft.is_finite() || cost_per_sqft < 0.0 {
            return Err(DesignerError::InvalidSpec(format!(
                "cost per square foot must not be negative, got {}",
                cost_per_sqft
            )));
        }
        let case_capacity = NonZeroUsize::new(case_capacity).ok_or_else(|| {
            DesignerError::InvalidSpec("case capacity must be at least one panel".to_string())
        })?;

        Ok(Self {
            panel_size_ft,
            cost_per_sqft,
            case_capacity,
        })
    }

    pub fn from_inches(
        panel_size_inches: f64,
        cost_per_sqft: f64,
        case_capacity: usize,
    ) -> Result<Self> {
        Self::new(panel_size_inches / INCHES_PER_FOOT, cost_per_sqft, case_capacity)
    }

    pub fn panel_size_ft(&self) -> f64 {
        self.panel_size_ft
    }

    pub fn cost_per_sqft(&self) -> f64 {
        self.cost_per_sqft
    }

    pub fn case_capacity(&self) -> NonZeroUsize {
        self.case_capacity
    }
}
