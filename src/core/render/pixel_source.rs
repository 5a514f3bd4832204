use crate::core::data::colour::Colour;

/// Per-pixel colour computation, the seam between the escape-time evaluator
/// and the parallel frame renderer.
///
/// Implementations must be pure with respect to their inputs: the renderer
/// calls `colour_at` from many worker threads in arbitrary order.
pub trait PixelSource {
    fn colour_at(&self, px: u32, py: u32) -> Colour;
}
