use crate::core::data::frame_buffer::FrameBuffer;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::error::Error;
use std::fmt;
use winit::window::Window;

#[derive(Debug)]
pub enum PresentError {
    DimensionMismatch {
        frame_width: u32,
        frame_height: u32,
        surface_width: u32,
        surface_height: u32,
    },
    Texture(TextureError),
    Render(pixels::Error),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                frame_width,
                frame_height,
                surface_width,
                surface_height,
            } => {
                write!(
                    f,
                    "frame size {}x{} does not match surface size {}x{}",
                    frame_width, frame_height, surface_width, surface_height
                )
            }
            Self::Texture(err) => write!(f, "surface resize failed: {}", err),
            Self::Render(err) => write!(f, "surface render failed: {}", err),
        }
    }
}

impl Error for PresentError {}

impl From<TextureError> for PresentError {
    fn from(err: TextureError) -> Self {
        Self::Texture(err)
    }
}

impl From<pixels::Error> for PresentError {
    fn from(err: pixels::Error) -> Self {
        Self::Render(err)
    }
}

/// Owns the `pixels` framebuffer tied to the window and pushes finished
/// frames into it.
pub struct SurfacePresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl SurfacePresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Recreates the surface and framebuffer for a new window size. Zero
    /// dimensions (minimized window) are skipped; the old buffer stays.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PresentError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Copies a finished frame into the framebuffer and presents it. The
    /// frame must match the current surface dimensions exactly.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), PresentError> {
        if frame.width() != self.width || frame.height() != self.height {
            return Err(PresentError::DimensionMismatch {
                frame_width: frame.width(),
                frame_height: frame.height(),
                surface_width: self.width,
                surface_height: self.height,
            });
        }

        self.pixels.frame_mut().copy_from_slice(frame.as_bytes());
        self.pixels.render()?;
        Ok(())
    }
}
