/// Requests the host sends to a design session.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    SetDimensions { width: f64, length: f64 },
    TogglePanel(usize, usize), // row, col
    ResetPattern,
    FillCheckerboard,
    InitDisplay,
}
