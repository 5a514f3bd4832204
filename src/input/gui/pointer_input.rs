use crate::controllers::drag::events::{PointerButton, PointerEvent};
use winit::event::{ElementState, MouseButton, TouchPhase};

/// Translates winit mouse/touch events into the normalized pointer stream.
///
/// winit reports mouse button changes without a position, so the last cursor
/// position is tracked here and attached to press events.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInput {
    cursor_x: f64,
    cursor_y: f64,
}

impl PointerInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> PointerEvent {
        self.cursor_x = x;
        self.cursor_y = y;
        PointerEvent::Drag { x, y }
    }

    pub fn on_mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
    ) -> Option<PointerEvent> {
        let button = match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            _ => return None,
        };

        match state {
            ElementState::Pressed => Some(PointerEvent::Press {
                x: self.cursor_x,
                y: self.cursor_y,
                button,
            }),
            ElementState::Released => Some(PointerEvent::Release),
        }
    }

    /// The pointer leaving the surface aborts any drag in progress.
    pub fn on_cursor_left(&mut self) -> PointerEvent {
        PointerEvent::Cancel
    }

    pub fn on_touch(&mut self, phase: TouchPhase, x: f64, y: f64) -> PointerEvent {
        match phase {
            TouchPhase::Started => {
                self.cursor_x = x;
                self.cursor_y = y;
                PointerEvent::Press {
                    x,
                    y,
                    button: PointerButton::Primary,
                }
            }
            TouchPhase::Moved => {
                self.cursor_x = x;
                self.cursor_y = y;
                PointerEvent::Drag { x, y }
            }
            TouchPhase::Ended => PointerEvent::Release,
            TouchPhase::Cancelled => PointerEvent::Cancel,
        }
    }
}
