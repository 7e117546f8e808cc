use std::cell::Cell;
use std::fmt;

use log::debug;
use thiserror::Error;

use crate::format::PixelFormat;

/// Why a region could not be constructed or derived
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    #[error("backing buffer is empty")]
    BufferNotInit,
    #[error("region extent must be at least 1x1")]
    SizeTooSmall,
    #[error("region extent exceeds the available space")]
    SizeTooLarge,
    #[error("region offset lies outside the parent extent")]
    OffsetOutOfBounds,
}

/// Non-owning rectangular window into a backing pixel buffer
///
/// A region borrows the buffer as a slice of cells so that sibling regions
/// (layout splits, nested subs) can coexist over one frame; monochrome
/// partitions share page bytes at unaligned seams, which rules out disjoint
/// exclusive borrows. Construction validates geometry and buffer capacity
/// once; every drawing call afterwards clips silently and cannot panic.
pub struct Region<'a, F: PixelFormat> {
    cells: &'a [Cell<F::Unit>],
    stride: i32,
    width: i32,
    height: i32,
    offset_x: i32,
    offset_y: i32,
}

impl<F: PixelFormat> Clone for Region<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: PixelFormat> Copy for Region<'_, F> {}

impl<F: PixelFormat> fmt::Debug for Region<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("stride", &self.stride)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .finish()
    }
}

impl<'a, F: PixelFormat> Region<'a, F> {
    /// Validated view over an exclusively borrowed buffer, no offset
    pub fn new(
        buffer: &'a mut [F::Unit],
        stride: i32,
        width: i32,
        height: i32,
    ) -> Result<Self, RegionError> {
        Self::with_offset(
            Cell::from_mut(buffer).as_slice_of_cells(),
            stride,
            width,
            height,
            0,
            0,
        )
    }

    /// Validated view over a shared cell buffer
    ///
    /// Checks, in order: the buffer is non-empty; stride and extent are at
    /// least 1; the offset lies inside the frame; the offset plus extent fits
    /// both the stride and the buffer capacity. A region that passes here can
    /// address every one of its pixels, so drawing never indexes out of
    /// bounds.
    pub fn with_offset(
        cells: &'a [Cell<F::Unit>],
        stride: i32,
        width: i32,
        height: i32,
        offset_x: i32,
        offset_y: i32,
    ) -> Result<Self, RegionError> {
        if cells.is_empty() {
            return Err(RegionError::BufferNotInit);
        }
        if stride < 1 || width < 1 || height < 1 {
            return Err(RegionError::SizeTooSmall);
        }
        if offset_x < 0 || offset_y < 0 || offset_x >= stride {
            return Err(RegionError::OffsetOutOfBounds);
        }
        let (Some(x_end), Some(y_end)) =
            (offset_x.checked_add(width), offset_y.checked_add(height))
        else {
            return Err(RegionError::SizeTooLarge);
        };
        if x_end > stride || F::buffer_len(stride as usize, y_end as usize) > cells.len() {
            debug!(
                "rejected region {width}x{height}+{offset_x}+{offset_y}: \
                 exceeds stride {stride} or {} buffer units",
                cells.len()
            );
            return Err(RegionError::SizeTooLarge);
        }
        Ok(Self {
            cells,
            stride,
            width,
            height,
            offset_x,
            offset_y,
        })
    }

    /// Derive a validated child window
    ///
    /// The child shares buffer and stride; its absolute offset accumulates
    /// additively, so a chain of nested subs can never address outside the
    /// original ancestor.
    pub fn sub(
        &self,
        sub_w: i32,
        sub_h: i32,
        sub_ox: i32,
        sub_oy: i32,
    ) -> Result<Self, RegionError> {
        if sub_ox < 0 || sub_oy < 0 || sub_ox >= self.width || sub_oy >= self.height {
            debug!(
                "rejected sub-region {sub_w}x{sub_h}+{sub_ox}+{sub_oy} of {}x{}: offset",
                self.width, self.height
            );
            return Err(RegionError::OffsetOutOfBounds);
        }
        if sub_w < 1 || sub_h < 1 {
            return Err(RegionError::SizeTooSmall);
        }
        if sub_w > self.width - sub_ox || sub_h > self.height - sub_oy {
            debug!(
                "rejected sub-region {sub_w}x{sub_h}+{sub_ox}+{sub_oy} of {}x{}: extent",
                self.width, self.height
            );
            return Err(RegionError::SizeTooLarge);
        }
        Ok(self.sub_unchecked(sub_w, sub_h, sub_ox, sub_oy))
    }

    /// Child window without validation; bounds must already be proven
    pub fn sub_unchecked(&self, sub_w: i32, sub_h: i32, sub_ox: i32, sub_oy: i32) -> Self {
        Self {
            cells: self.cells,
            stride: self.stride,
            width: sub_w,
            height: sub_h,
            offset_x: self.offset_x + sub_ox,
            offset_y: self.offset_y + sub_oy,
        }
    }

    /// Write one pixel in local coordinates; out-of-range is ignored
    pub fn set_pixel(&self, x: i32, y: i32, color: F::Color) {
        if !self.is_inside(x, y) {
            return;
        }
        F::set_pixel(
            self.cells,
            self.stride as usize,
            (self.offset_x + x) as usize,
            (self.offset_y + y) as usize,
            color,
        );
    }

    /// Fill the inclusive rectangle (x0, y0)..=(x1, y1), clipped to the region
    pub fn fill_rect(&self, x0: i32, y0: i32, x1: i32, y1: i32, color: F::Color) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width - 1);
        let y1 = y1.min(self.height - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }
        F::fill(
            self.cells,
            self.stride as usize,
            (self.offset_x + x0) as usize,
            (self.offset_y + y0) as usize,
            (x1 - x0 + 1) as usize,
            (y1 - y0 + 1) as usize,
            color,
        );
    }

    /// Fill the whole region
    pub fn fill(&self, color: F::Color) {
        self.fill_rect(0, 0, self.width - 1, self.height - 1, color);
    }

    /// Blit source data so its top-left lands at local (x, y)
    ///
    /// Overflow past the right or bottom edge truncates; anchors left of or
    /// above the region are discarded.
    pub fn draw_image(&self, src: &[F::Unit], src_w: i32, src_h: i32, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        F::copy(
            src,
            src_w,
            src_h,
            self.cells,
            self.stride,
            self.offset_x + self.width,
            self.offset_y + self.height,
            self.offset_x + x,
            self.offset_y + y,
        );
    }

    /// Whether a local x lies inside the region
    pub fn is_inside_x(&self, x: i32) -> bool {
        x >= 0 && x < self.width
    }

    /// Whether a local y lies inside the region
    pub fn is_inside_y(&self, y: i32) -> bool {
        y >= 0 && y < self.height
    }

    /// Whether a local point lies inside the region
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        self.is_inside_x(x) && self.is_inside_y(y)
    }

    /// Region width in pixels
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Region height in pixels
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Buffer stride in storage units
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Absolute x offset into the backing frame
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    /// Absolute y offset into the backing frame
    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Monochrome, Rgb565};

    #[test]
    fn create_rejects_empty_buffer_first() {
        let mut buf: [u8; 0] = [];
        let err = Region::<Monochrome>::new(&mut buf, 0, 0, 0).unwrap_err();
        assert_eq!(err, RegionError::BufferNotInit);
    }

    #[test]
    fn create_rejects_degenerate_extent() {
        let mut buf = [0u8; 16];
        let err = Region::<Monochrome>::new(&mut buf, 16, 0, 8).unwrap_err();
        assert_eq!(err, RegionError::SizeTooSmall);
        let err = Region::<Monochrome>::new(&mut buf, 16, 16, 0).unwrap_err();
        assert_eq!(err, RegionError::SizeTooSmall);
    }

    #[test]
    fn create_rejects_undersized_buffer() {
        let mut buf = [0u8; 16];
        // 16x16 monochrome needs two pages = 32 bytes
        let err = Region::<Monochrome>::new(&mut buf, 16, 16, 16).unwrap_err();
        assert_eq!(err, RegionError::SizeTooLarge);

        let mut buf = [0u16; 15];
        let err = Region::<Rgb565>::new(&mut buf, 4, 4, 4).unwrap_err();
        assert_eq!(err, RegionError::SizeTooLarge);
    }

    #[test]
    fn create_rejects_offset_outside_stride() {
        let mut buf = [0u8; 32];
        let cells = Cell::from_mut(buf.as_mut_slice()).as_slice_of_cells();
        let err = Region::<Monochrome>::with_offset(cells, 16, 4, 8, 16, 0).unwrap_err();
        assert_eq!(err, RegionError::OffsetOutOfBounds);
        let err = Region::<Monochrome>::with_offset(cells, 16, 4, 8, -1, 0).unwrap_err();
        assert_eq!(err, RegionError::OffsetOutOfBounds);
    }

    #[test]
    fn create_rejects_extent_past_integer_range() {
        let mut buf = [0u8; 64];
        let cells = Cell::from_mut(buf.as_mut_slice()).as_slice_of_cells();
        // offset plus extent has no i32 representation, so it cannot fit
        let err = Region::<Monochrome>::with_offset(cells, 8, 8, i32::MAX, 0, 1).unwrap_err();
        assert_eq!(err, RegionError::SizeTooLarge);
        let err = Region::<Monochrome>::with_offset(cells, 8, i32::MAX, 8, 1, 0).unwrap_err();
        assert_eq!(err, RegionError::SizeTooLarge);
    }

    #[test]
    fn create_accepts_exact_fit() {
        let mut buf = [0u8; 1024];
        assert!(Region::<Monochrome>::new(&mut buf, 128, 128, 64).is_ok());

        let mut buf = [0u16; 16];
        assert!(Region::<Rgb565>::new(&mut buf, 4, 4, 4).is_ok());
    }

    #[test]
    fn sub_validates_offset_and_extent() {
        let mut buf = [0u8; 128];
        let region = Region::<Monochrome>::new(&mut buf, 16, 16, 16).unwrap();

        assert_eq!(
            region.sub(4, 4, 16, 0).unwrap_err(),
            RegionError::OffsetOutOfBounds
        );
        assert_eq!(
            region.sub(0, 4, 2, 2).unwrap_err(),
            RegionError::SizeTooSmall
        );
        assert_eq!(
            region.sub(15, 4, 2, 2).unwrap_err(),
            RegionError::SizeTooLarge
        );
        assert!(region.sub(14, 14, 2, 2).is_ok());
    }

    #[test]
    fn sub_offsets_accumulate() {
        let mut buf = [0u8; 128];
        let region = Region::<Monochrome>::new(&mut buf, 16, 16, 16).unwrap();
        let child = region.sub(8, 8, 4, 4).unwrap();
        let grandchild = child.sub(2, 2, 3, 3).unwrap();

        assert_eq!(grandchild.offset_x(), 7);
        assert_eq!(grandchild.offset_y(), 7);
        assert_eq!(grandchild.width(), 2);
        assert_eq!(grandchild.height(), 2);
    }

    #[test]
    fn set_pixel_clips_silently() {
        let mut buf = [0u8; 16];
        let region = Region::<Monochrome>::new(&mut buf, 16, 16, 8).unwrap();
        region.set_pixel(-1, 0, true);
        region.set_pixel(16, 0, true);
        region.set_pixel(0, 8, true);
        drop(region);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_rect_clips_to_region() {
        let mut buf = [0u16; 4 * 4];
        let region = Region::<Rgb565>::new(&mut buf, 4, 4, 4).unwrap();
        region.fill_rect(-2, -2, 1, 1, 0xFFFF);
        drop(region);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x < 2 && y < 2 { 0xFFFF } else { 0 };
                assert_eq!(buf[y * 4 + x], expected);
            }
        }
    }

    #[test]
    fn sub_region_draws_through_offset() {
        let mut buf = [0u16; 8 * 4];
        let region = Region::<Rgb565>::new(&mut buf, 8, 8, 4).unwrap();
        let child = region.sub(4, 2, 2, 1).unwrap();
        child.fill(0x7777);
        drop(region);
        for y in 0..4 {
            for x in 0..8 {
                let inside = (2..6).contains(&x) && (1..3).contains(&y);
                let expected = if inside { 0x7777 } else { 0 };
                assert_eq!(buf[y * 8 + x], expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn draw_image_discards_negative_anchor() {
        let mut buf = [0u8; 16];
        let region = Region::<Monochrome>::new(&mut buf, 16, 16, 8).unwrap();
        region.draw_image(&[0xFF; 4], 4, 8, -1, 0);
        region.draw_image(&[0xFF; 4], 4, 8, 0, -1);
        drop(region);
        assert!(buf.iter().all(|&b| b == 0));
    }
}
