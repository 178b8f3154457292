use super::{FloorPlan, PatternGrid, Tally};
use crate::error::Axis;

/// Notifications a design session publishes after applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerEvent {
    PlanUpdated(FloorPlan),
    PatternUpdated { grid: PatternGrid, tally: Tally },
    RequestRejected {
        axis: Axis,
        value: f64,
        reason: String,
    },
}
