//! Owned raster surface the render loop draws into.

use thiserror::Error;

/// Failure to obtain a usable 2D raster surface.
///
/// Without a surface nothing can be drawn, so callers treat this as fatal.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("cairo surface unavailable: {0}")]
    Surface(#[from] cairo::Error),

    #[error("surface pixels are still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// ARGB32 image surface with a fixed size.
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Allocates a transparent `width` x `height` surface.
    pub fn new(width: i32, height: i32) -> Result<Self, CanvasError> {
        if width <= 0 || height <= 0 {
            return Err(CanvasError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        log::debug!("Created {}x{} canvas", width, height);
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Creates a fresh drawing context targeting this canvas.
    ///
    /// Drop the context before reading pixels back.
    pub fn context(&self) -> Result<cairo::Context, CanvasError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Copies the raw ARGB32 pixel rows (stride-padded) out of the surface.
    pub fn pixels(&mut self) -> Result<Vec<u8>, CanvasError> {
        self.surface.flush();
        let data = self.surface.data()?;
        Ok(data.to_vec())
    }

    /// Bytes per pixel row in [`Canvas::pixels`].
    pub fn stride(&self) -> i32 {
        self.surface.stride()
    }

    /// Encodes the current surface contents as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, CanvasError> {
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            Canvas::new(0, 10),
            Err(CanvasError::InvalidSize {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn new_canvas_is_transparent() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        let pixels = canvas.pixels().unwrap();
        assert_eq!(pixels.len(), (canvas.stride() * 3) as usize);
        assert!(pixels.iter().all(|b| *b == 0));
    }

    #[test]
    fn png_has_signature() {
        let canvas = Canvas::new(2, 2).unwrap();
        let png = canvas.to_png().unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
