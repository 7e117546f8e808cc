mod mono;
mod rgb565;

pub use mono::Monochrome;
pub use rgb565::Rgb565;

use std::cell::Cell;
use std::fmt::Debug;

use crate::palette::AnsiColor;

mod sealed {
    /// Closed set: Monochrome and Rgb565 are the only formats
    pub trait Sealed {}

    impl Sealed for super::Monochrome {}
    impl Sealed for super::Rgb565 {}
}

/// Storage layout and drawing primitives for one pixel format
///
/// Operations work on raw buffer slices in absolute coordinates. Except for
/// `copy`, which clips itself, coordinates must already be validated by the
/// caller (the region layer). Out-of-range input may panic on slice indexing;
/// it never writes anywhere else.
pub trait PixelFormat: sealed::Sealed + Copy + 'static {
    /// Storage element of the backing buffer
    type Unit: Copy + Default + PartialEq + Debug;
    /// Native color value
    type Color: Copy + PartialEq + Debug;

    /// Default draw color
    const DEFAULT_FG: Self::Color;
    /// Default background color
    const DEFAULT_BG: Self::Color;
    /// The 16 palette entries resolved to native colors
    const ANSI_COLORS: [Self::Color; 16];

    /// Storage units needed for a width x height frame
    fn buffer_len(width: usize, height: usize) -> usize;

    /// Resolve an 8-bit RGB triple to the native color
    fn from_rgb(r: u8, g: u8, b: u8) -> Self::Color;

    /// Write one pixel at absolute (x, y); coordinates must be in range
    fn set_pixel(buf: &[Cell<Self::Unit>], stride: usize, x: usize, y: usize, color: Self::Color);

    /// Fill the rectangle [ox, ox+w) x [oy, oy+h); bounds must be pre-clipped
    fn fill(
        buf: &[Cell<Self::Unit>],
        stride: usize,
        ox: usize,
        oy: usize,
        w: usize,
        h: usize,
        color: Self::Color,
    );

    /// Blit a whole source frame so its top-left lands at (dst_x, dst_y)
    ///
    /// The copy is clipped against the window [0, clip_w) x [0, clip_h);
    /// anchors at or beyond the window, and negative anchors, are discarded.
    /// Source data is `src_w` units per row (page-packed rows for monochrome).
    #[allow(clippy::too_many_arguments)]
    fn copy(
        src: &[Self::Unit],
        src_w: i32,
        src_h: i32,
        dst: &[Cell<Self::Unit>],
        dst_stride: i32,
        clip_w: i32,
        clip_h: i32,
        dst_x: i32,
        dst_y: i32,
    );

    /// Palette entry resolved to the native color
    fn ansi(color: AnsiColor) -> Self::Color {
        Self::ANSI_COLORS[color as usize]
    }
}
