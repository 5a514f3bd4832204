use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::escape_time::{EscapeClass, MAX_ITERATIONS, escape_time};
use crate::core::mandelbrot::palette::colour_for;
use crate::core::render::pixel_source::PixelSource;
use crate::core::util::linear_map::{Span, SpanError, linear_map};
use std::error::Error;
use std::fmt;

/// Pixel-space to plane-space mapping for one frame.
///
/// Built once from a Viewport snapshot so every pixel of a frame sees the
/// same view, regardless of controller mutations scheduled for later frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameMapping {
    pixel_x: Span,
    pixel_y: Span,
    plane_x: Span,
    plane_y: Span,
}

impl FrameMapping {
    pub fn from_viewport(viewport: &Viewport) -> Result<Self, SpanError> {
        let half_width = viewport.half_width();
        let half_height = viewport.half_height();

        Ok(Self {
            pixel_x: Span::new(0.0, f64::from(viewport.pixel_width()))?,
            pixel_y: Span::new(0.0, f64::from(viewport.pixel_height()))?,
            plane_x: Span::new(
                viewport.center_x() - half_width,
                viewport.center_x() + half_width,
            )?,
            plane_y: Span::new(
                viewport.center_y() - half_height,
                viewport.center_y() + half_height,
            )?,
        })
    }

    /// Maps a (possibly fractional, possibly out-of-surface) pixel position
    /// to its complex-plane coordinate.
    #[must_use]
    pub fn complex_at(&self, x: f64, y: f64) -> Complex {
        Complex {
            real: linear_map(x, self.pixel_x, self.plane_x),
            imag: linear_map(y, self.pixel_y, self.plane_y),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EvaluatorError {
    ZeroMaxIterations,
    Mapping(SpanError),
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::Mapping(err) => write!(f, "frame mapping invalid: {}", err),
        }
    }
}

impl Error for EvaluatorError {}

impl From<SpanError> for EvaluatorError {
    fn from(err: SpanError) -> Self {
        Self::Mapping(err)
    }
}

/// Escape-time evaluation of a full viewport, one pixel at a time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeEvaluator {
    mapping: FrameMapping,
    max_iterations: u32,
}

impl EscapeTimeEvaluator {
    pub fn new(viewport: &Viewport) -> Result<Self, EvaluatorError> {
        Self::with_max_iterations(viewport, MAX_ITERATIONS)
    }

    pub fn with_max_iterations(
        viewport: &Viewport,
        max_iterations: u32,
    ) -> Result<Self, EvaluatorError> {
        if max_iterations == 0 {
            return Err(EvaluatorError::ZeroMaxIterations);
        }

        Ok(Self {
            mapping: FrameMapping::from_viewport(viewport)?,
            max_iterations,
        })
    }

    #[must_use]
    pub fn classify(&self, px: u32, py: u32) -> EscapeClass {
        let c = self.mapping.complex_at(f64::from(px), f64::from(py));
        escape_time(c, self.max_iterations)
    }
}

impl PixelSource for EscapeTimeEvaluator {
    fn colour_at(&self, px: u32, py: u32) -> Colour {
        colour_for(self.classify(px, py))
    }
}
