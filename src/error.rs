use thiserror::Error;

/// Result type used across the designer.
pub type Result<T> = std::result::Result<T, DesignerError>;

/// Which side of the requested floor a dimension refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Length,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Length => write!(f, "length"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DesignerError {
    #[error("floor {axis} must be a positive number of feet, got {value}")]
    InvalidDimension { axis: Axis, value: f64 },
    #[error("floor {axis} of {value} ft needs more than {max_panels} panels")]
    FloorTooLarge {
        axis: Axis,
        value: f64,
        max_panels: usize,
    },
    #[error("panel ({row}, {col}) is outside the {rows}x{cols} pattern grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("invalid panel spec: {0}")]
    InvalidSpec(String),
    #[error("settings file error: {0}")]
    SettingsIo(#[from] std::io::Error),
    #[error("settings format error: {0}")]
    SettingsFormat(#[from] serde_json::Error),
}

impl DesignerError {
    /// Errors that indicate the host mapped an input to a cell that does not exist.
    pub fn is_programming_error(&self) -> bool {
        matches!(self, DesignerError::OutOfBounds { .. })
    }

    /// The side and value of a floor request the planner refused.
    pub fn rejected_request(&self) -> Option<(Axis, f64)> {
        match self {
            DesignerError::InvalidDimension { axis, value }
            | DesignerError::FloorTooLarge { axis, value, .. } => Some((*axis, *value)),
            _ => None,
        }
    }
}
