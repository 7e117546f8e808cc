use crate::format::PixelFormat;
use crate::region::RegionError;

/// Read-only image source for `Canvas::image`
///
/// Holds a borrowed pixel buffer in the same layout the format uses for
/// frames: page-packed rows for monochrome, row-major u16 for RGB565.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a, F: PixelFormat> {
    data: &'a [F::Unit],
    width: i32,
    height: i32,
}

impl<'a, F: PixelFormat> Bitmap<'a, F> {
    /// Bitmap over a pixel buffer, validating extent and data length
    pub fn new(data: &'a [F::Unit], width: i32, height: i32) -> Result<Self, RegionError> {
        if data.is_empty() {
            return Err(RegionError::BufferNotInit);
        }
        if width < 1 || height < 1 {
            return Err(RegionError::SizeTooSmall);
        }
        if F::buffer_len(width as usize, height as usize) > data.len() {
            return Err(RegionError::SizeTooLarge);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Backing pixel data
    pub fn data(&self) -> &'a [F::Unit] {
        self.data
    }

    /// Image width in pixels
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> i32 {
        self.height
    }
}
