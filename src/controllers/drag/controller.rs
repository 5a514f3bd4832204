use crate::controllers::drag::events::{PointerButton, PointerEvent};
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::evaluator::FrameMapping;
use crate::core::util::linear_map::SpanError;

/// Fraction of the pointer's plane offset applied as pan per frame.
pub const PAN_STEP: f64 = 0.01;
/// Half-width factor per frame while the primary button is held.
pub const ZOOM_IN_FACTOR: f64 = 0.99;
/// Half-width factor per frame while the secondary button is held.
pub const ZOOM_OUT_FACTOR: f64 = 1.01;

#[derive(Debug, Copy, Clone, PartialEq)]
struct DragState {
    button: PointerButton,
    last_x: f64,
    last_y: f64,
}

/// Press/drag/release state machine driving the per-frame pan/zoom step.
///
/// The step is computed from the held position relative to the viewport
/// center, not from pointer movement since the last frame, so holding the
/// pointer still keeps accelerating the view toward (or away from) it.
#[derive(Debug, Default)]
pub struct DragController {
    drag: Option<DragState>,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y, button } => {
                self.drag = Some(DragState {
                    button,
                    last_x: x,
                    last_y: y,
                });
            }
            PointerEvent::Drag { x, y } => {
                if let Some(drag) = &mut self.drag {
                    drag.last_x = x;
                    drag.last_y = y;
                }
            }
            PointerEvent::Release | PointerEvent::Cancel => {
                self.drag = None;
            }
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Applies one animation-frame pan/zoom step to `viewport`.
    ///
    /// Returns `Ok(true)` when the viewport was mutated and another frame
    /// should be scheduled; `Ok(false)` when no pointer is held.
    ///
    /// Primary button: pan 1% of the pointer's plane offset toward the
    /// pointer while shrinking the half-width. Secondary button: the exact
    /// mirror, panning away while growing the half-width.
    pub fn tick(&self, viewport: &mut Viewport) -> Result<bool, SpanError> {
        let Some(drag) = self.drag else {
            return Ok(false);
        };

        let mapping = FrameMapping::from_viewport(viewport)?;
        let pointer = mapping.complex_at(drag.last_x, drag.last_y);
        let offset_x = pointer.real - viewport.center_x();
        let offset_y = pointer.imag - viewport.center_y();

        match drag.button {
            PointerButton::Primary => {
                viewport.pan_by(PAN_STEP * offset_x, PAN_STEP * offset_y);
                viewport.zoom_by(ZOOM_IN_FACTOR);
            }
            PointerButton::Secondary => {
                viewport.pan_by(-PAN_STEP * offset_x, -PAN_STEP * offset_y);
                viewport.zoom_by(ZOOM_OUT_FACTOR);
            }
        }

        Ok(true)
    }
}
