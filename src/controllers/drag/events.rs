/// Which button or touch started the drag. Touches count as primary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Normalized pointer event in surface-local pixel coordinates.
///
/// The input layer translates mouse and touch events into this one stream;
/// the controller never sees platform event types.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Press { x: f64, y: f64, button: PointerButton },
    Drag { x: f64, y: f64 },
    Release,
    Cancel,
}
