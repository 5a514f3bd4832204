use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} frame bounds",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Owned RGBA byte grid for one rendered frame.
///
/// Produced fresh by each render pass and handed to the presenter; never
/// retained across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let total_bytes = (width as usize) * (height as usize) * BYTES_PER_PIXEL;

        Self {
            width,
            height,
            bytes: vec![0; total_bytes],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[allow(dead_code)]
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), FrameBufferError> {
        if x >= self.width || y >= self.height {
            return Err(FrameBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let offset = ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL;
        self.bytes[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba_bytes());
        Ok(())
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn pixel_bytes(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL;
        let mut pixel = [0u8; BYTES_PER_PIXEL];
        pixel.copy_from_slice(&self.bytes[offset..offset + BYTES_PER_PIXEL]);
        Some(pixel)
    }

    /// Rows as independent mutable RGBA slices, for parallel row fills.
    /// Requires a non-zero width.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let row_bytes = (self.width as usize) * BYTES_PER_PIXEL;
        self.bytes.chunks_exact_mut(row_bytes)
    }
}
