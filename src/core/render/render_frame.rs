use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::evaluator::{EscapeTimeEvaluator, EvaluatorError};
use crate::core::render::pixel_source::PixelSource;
use rayon::prelude::*;

/// Fills a full colour grid from `source`, one rayon task per row.
///
/// Row-parallel dispatch keeps work units large enough to amortize
/// scheduling while still load-balancing across the slow in-set rows.
#[must_use]
pub fn render_frame<S>(source: &S, width: u32, height: u32) -> FrameBuffer
where
    S: PixelSource + Sync,
{
    let mut buffer = FrameBuffer::new(width, height);
    if width == 0 || height == 0 {
        return buffer;
    }

    let rows: Vec<&mut [u8]> = buffer.rows_mut().collect();
    rows.into_par_iter().enumerate().for_each(|(py, row)| {
        for (px, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let colour = source.colour_at(px as u32, py as u32);
            pixel.copy_from_slice(&colour.to_rgba_bytes());
        }
    });

    buffer
}

/// One full evaluator pass over the viewport's pixel grid.
///
/// The viewport is read once here to build the evaluator; later viewport
/// mutations cannot influence the in-flight frame.
pub fn render_viewport(viewport: &Viewport) -> Result<FrameBuffer, EvaluatorError> {
    let evaluator = EscapeTimeEvaluator::new(viewport)?;

    Ok(render_frame(
        &evaluator,
        viewport.pixel_width(),
        viewport.pixel_height(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::mandelbrot::palette::IN_SET_COLOUR;

    #[derive(Debug)]
    struct CoordinateStubSource;

    impl PixelSource for CoordinateStubSource {
        fn colour_at(&self, px: u32, py: u32) -> Colour {
            Colour {
                r: px as f32 / 255.0,
                g: py as f32 / 255.0,
                b: 0.0,
                a: 1.0,
            }
        }
    }

    #[test]
    fn test_render_frame_has_requested_dimensions() {
        let buffer = render_frame(&CoordinateStubSource, 16, 9);

        assert_eq!(buffer.width(), 16);
        assert_eq!(buffer.height(), 9);
        assert_eq!(buffer.as_bytes().len(), 16 * 9 * BYTES_PER_PIXEL);
    }

    #[test]
    fn test_render_frame_matches_sequential_reference() {
        let source = CoordinateStubSource;
        let parallel = render_frame(&source, 20, 15);

        let mut sequential = FrameBuffer::new(20, 15);
        for py in 0..15 {
            for px in 0..20 {
                sequential.set_pixel(px, py, source.colour_at(px, py)).unwrap();
            }
        }

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_render_frame_places_pixels_at_their_coordinates() {
        let buffer = render_frame(&CoordinateStubSource, 32, 32);

        assert_eq!(buffer.pixel_bytes(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(buffer.pixel_bytes(10, 20), Some([10, 20, 0, 255]));
        assert_eq!(buffer.pixel_bytes(31, 31), Some([31, 31, 0, 255]));
    }

    #[test]
    fn test_render_viewport_classifies_center_of_home_view_in_set() {
        let viewport = Viewport::new(-0.5, 0.0, 2.0, 80, 60).unwrap();

        let buffer = render_viewport(&viewport).unwrap();

        assert_eq!(buffer.pixel_bytes(40, 30), Some(IN_SET_COLOUR.to_rgba_bytes()));
    }

    #[test]
    fn test_render_viewport_is_deterministic() {
        let viewport = Viewport::new(-0.5, 0.0, 2.0, 64, 48).unwrap();

        let first = render_viewport(&viewport).unwrap();
        let second = render_viewport(&viewport).unwrap();

        assert_eq!(first, second);
    }
}
