mod coverage;
mod designer_command;
mod designer_event;
mod floor_plan;
mod floor_request;
mod grid_dimensions;
mod panel_finish;
mod panel_spec;
mod pattern_grid;
mod summary;
mod tally;

pub use coverage::CoverageResult;
pub use designer_command::DesignerCommand;
pub use designer_event::DesignerEvent;
pub use floor_plan::FloorPlan;
pub use floor_request::FloorRequest;
pub use grid_dimensions::{GridDimensions, MAX_PANELS_PER_SIDE};
pub use panel_finish::PanelFinish;
pub use panel_spec::{
    PanelSpec, DEFAULT_CASE_CAPACITY, DEFAULT_COST_PER_SQFT, DEFAULT_PANEL_SIZE_INCHES,
};
pub use pattern_grid::PatternGrid;
pub use summary::DesignSummary;
pub use tally::Tally;
