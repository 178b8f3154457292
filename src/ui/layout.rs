pub const SPACING_SMALL: i32 = 4;
pub const SPACING_LARGE: i32 = 10;

/// Side of one panel button, in pixels.
pub const PANEL_BUTTON_SIZE: i32 = 28;

pub const MAX_FLOOR_SIDE_FT: f64 = 500.0;
