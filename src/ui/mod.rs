pub mod floor_inputs_ui;
pub mod layout;
pub mod panel_button_ui;
pub mod pattern_grid_ui;
pub mod summary_ui;
pub mod window;
