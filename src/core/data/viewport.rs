use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidHalfWidth { half_width: f64 },
    InvalidPixelSize { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHalfWidth { half_width } => {
                write!(f, "viewport half-width must be positive and finite: {}", half_width)
            }
            Self::InvalidPixelSize { width, height } => {
                write!(f, "viewport pixel size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangular region of the complex plane currently mapped onto the
/// pixel surface.
///
/// The vertical extent is never stored: `half_height` is recomputed from
/// `half_width` and the pixel aspect ratio on every use, so pan/zoom and
/// resize cannot drive the two out of sync.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    half_width: f64,
    pixel_width: u32,
    pixel_height: u32,
}

/// Classic full-set framing used for the initial view.
pub const HOME_CENTER: (f64, f64) = (-0.5, 0.0);
pub const HOME_HALF_WIDTH: f64 = 2.0;

impl Viewport {
    pub fn new(
        center_x: f64,
        center_y: f64,
        half_width: f64,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<Self, ViewportError> {
        if !(half_width.is_finite() && half_width > 0.0) {
            return Err(ViewportError::InvalidHalfWidth { half_width });
        }
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ViewportError::InvalidPixelSize {
                width: pixel_width,
                height: pixel_height,
            });
        }

        Ok(Self {
            center_x,
            center_y,
            half_width,
            pixel_width,
            pixel_height,
        })
    }

    pub fn home_view(pixel_width: u32, pixel_height: u32) -> Result<Self, ViewportError> {
        Self::new(
            HOME_CENTER.0,
            HOME_CENTER.1,
            HOME_HALF_WIDTH,
            pixel_width,
            pixel_height,
        )
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.half_width * f64::from(self.pixel_height) / f64::from(self.pixel_width)
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Translates the center without changing scale.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.center_x += dx;
        self.center_y += dy;
    }

    /// Scales the half-width by `factor`. Callers pass fixed positive zoom
    /// constants; the positivity invariant survives any such factor.
    pub fn zoom_by(&mut self, factor: f64) {
        self.half_width *= factor;
    }

    /// Updates the pixel dimensions after a surface resize. The half-width is
    /// untouched, so the zoom level is unaffected and the derived half-height
    /// follows the new aspect ratio automatically.
    pub fn resize(&mut self, pixel_width: u32, pixel_height: u32) -> Result<(), ViewportError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ViewportError::InvalidPixelSize {
                width: pixel_width,
                height: pixel_height,
            });
        }

        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    #[test]
    fn test_new_valid_viewport() {
        let viewport = Viewport::new(-0.5, 0.0, 2.0, 800, 600).unwrap();

        assert_eq!(viewport.center_x(), -0.5);
        assert_eq!(viewport.center_y(), 0.0);
        assert_eq!(viewport.half_width(), 2.0);
        assert_eq!(viewport.pixel_width(), 800);
        assert_eq!(viewport.pixel_height(), 600);
    }

    #[test]
    fn test_half_width_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 100, 100),
            Err(ViewportError::InvalidHalfWidth { half_width: 0.0 })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, -1.5, 100, 100),
            Err(ViewportError::InvalidHalfWidth { half_width: -1.5 })
        );
    }

    #[test]
    fn test_half_width_must_be_finite() {
        assert!(Viewport::new(0.0, 0.0, f64::NAN, 100, 100).is_err());
        assert!(Viewport::new(0.0, 0.0, f64::INFINITY, 100, 100).is_err());
    }

    #[test]
    fn test_pixel_dimensions_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, 0, 100),
            Err(ViewportError::InvalidPixelSize {
                width: 0,
                height: 100
            })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, 100, 0),
            Err(ViewportError::InvalidPixelSize {
                width: 100,
                height: 0
            })
        );
    }

    #[test]
    fn test_half_height_preserves_aspect_ratio() {
        let viewport = Viewport::new(-0.5, 0.0, 2.0, 800, 600).unwrap();

        assert_approx_eq(viewport.half_height(), 1.5);
        assert_approx_eq(
            viewport.half_width() / f64::from(viewport.pixel_width()),
            viewport.half_height() / f64::from(viewport.pixel_height()),
        );
    }

    #[test]
    fn test_resize_preserves_zoom_and_recomputes_half_height() {
        let mut viewport = Viewport::new(-0.5, 0.0, 2.0, 800, 600).unwrap();

        viewport.resize(400, 400).unwrap();

        assert_eq!(viewport.half_width(), 2.0);
        assert_approx_eq(viewport.half_height(), 2.0);
        assert_approx_eq(
            viewport.half_width() / f64::from(viewport.pixel_width()),
            viewport.half_height() / f64::from(viewport.pixel_height()),
        );
    }

    #[test]
    fn test_resize_rejects_zero_dimensions() {
        let mut viewport = Viewport::new(-0.5, 0.0, 2.0, 800, 600).unwrap();

        let result = viewport.resize(0, 300);

        assert_eq!(
            result,
            Err(ViewportError::InvalidPixelSize {
                width: 0,
                height: 300
            })
        );
        assert_eq!(viewport.pixel_width(), 800);
        assert_eq!(viewport.pixel_height(), 600);
    }

    #[test]
    fn test_pan_by_translates_center_only() {
        let mut viewport = Viewport::new(-0.5, 0.0, 2.0, 800, 600).unwrap();

        viewport.pan_by(0.25, -0.125);

        assert_eq!(viewport.center_x(), -0.25);
        assert_eq!(viewport.center_y(), -0.125);
        assert_eq!(viewport.half_width(), 2.0);
    }

    #[test]
    fn test_repeated_zoom_contracts_exactly() {
        let mut viewport = Viewport::new(-0.5, 0.0, 2.0, 800, 600).unwrap();

        for _ in 0..10 {
            viewport.zoom_by(0.99);
        }

        let expected = 2.0 * 0.99_f64.powi(10);
        assert!((viewport.half_width() - expected).abs() <= 1e-12);
    }

    #[test]
    fn test_home_view_uses_classic_framing() {
        let viewport = Viewport::home_view(640, 480).unwrap();

        assert_eq!(viewport.center_x(), -0.5);
        assert_eq!(viewport.center_y(), 0.0);
        assert_eq!(viewport.half_width(), 2.0);
    }
}
