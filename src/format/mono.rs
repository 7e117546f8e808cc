use std::cell::Cell;

use super::PixelFormat;
use crate::palette::ANSI_RGB;

/// Rows per page: one buffer byte covers 8 vertically stacked pixels
const PAGE_HEIGHT: usize = 8;

/// 1-bit-per-pixel page-packed format (SSD1306-style bit planes)
///
/// The buffer is organized in pages: 8-row horizontal bands with one byte
/// per column, bit 0 on top. Byte index for (x, y) is `(y / 8) * stride + x`.
#[derive(Debug, Clone, Copy)]
pub struct Monochrome;

/// Bit mask covering bits start..=end of one page byte
const fn span_mask(start: u8, end: u8) -> u8 {
    ((((1u16) << (end + 1)) - 1) ^ (((1u16) << start) - 1)) as u8
}

/// Mask of the rows inside `page` covered by a fill of [oy, oy+h)
fn page_mask(page: usize, oy: usize, h: usize) -> u8 {
    let page_start = page * PAGE_HEIGHT;
    let page_end = page_start + PAGE_HEIGHT - 1;

    let first = oy.max(page_start);
    let last = (oy + h - 1).min(page_end);
    if first > last {
        return 0;
    }

    span_mask((first - page_start) as u8, (last - page_start) as u8)
}

impl PixelFormat for Monochrome {
    type Unit = u8;
    type Color = bool;

    const DEFAULT_FG: bool = true;
    const DEFAULT_BG: bool = false;
    const ANSI_COLORS: [bool; 16] = resolve_table();

    fn buffer_len(width: usize, height: usize) -> usize {
        height.div_ceil(PAGE_HEIGHT) * width
    }

    fn from_rgb(r: u8, g: u8, b: u8) -> bool {
        // only pure black maps to "off": a 1-bit display must not render
        // mid-intensity palette entries as blank
        r != 0 || g != 0 || b != 0
    }

    fn set_pixel(buf: &[Cell<u8>], stride: usize, x: usize, y: usize, color: bool) {
        let cell = &buf[(y / PAGE_HEIGHT) * stride + x];
        let bit = 1u8 << (y % PAGE_HEIGHT);
        if color {
            cell.set(cell.get() | bit);
        } else {
            cell.set(cell.get() & !bit);
        }
    }

    fn fill(buf: &[Cell<u8>], stride: usize, ox: usize, oy: usize, w: usize, h: usize, color: bool) {
        if w == 0 || h == 0 {
            return;
        }

        let fill_byte: u8 = if color { 0xFF } else { 0x00 };
        let start_page = oy / PAGE_HEIGHT;
        let end_page = (oy + h).div_ceil(PAGE_HEIGHT);

        for page in start_page..end_page {
            let mask = page_mask(page, oy, h);
            if mask == 0 {
                continue;
            }

            let row = page * stride;
            for cell in &buf[row + ox..row + ox + w] {
                cell.set((cell.get() & !mask) | (fill_byte & mask));
            }
        }
    }

    fn copy(
        src: &[u8],
        src_w: i32,
        src_h: i32,
        dst: &[Cell<u8>],
        dst_stride: i32,
        clip_w: i32,
        clip_h: i32,
        dst_x: i32,
        dst_y: i32,
    ) {
        if dst_x < 0 || dst_y < 0 || dst_x >= clip_w || dst_y >= clip_h {
            return;
        }

        let copy_w = src_w.min(clip_w - dst_x);
        let copy_h = src_h.min(clip_h - dst_y);
        if copy_w <= 0 || copy_h <= 0 {
            return;
        }

        let source_pages = (src_h as usize).div_ceil(PAGE_HEIGHT);

        for source_page in 0..source_pages as i32 {
            let src_y_start = source_page * PAGE_HEIGHT as i32;
            let rows_in_page = (src_y_start + PAGE_HEIGHT as i32).min(copy_h) - src_y_start;
            if rows_in_page <= 0 {
                continue;
            }

            // destination rows for this page may straddle two destination
            // pages when dst_y is unaligned; a 16-bit window carries the
            // overflow bits into the following page
            let dest_y_start = dst_y + src_y_start;
            let dest_page = dest_y_start / PAGE_HEIGHT as i32;
            let dest_bit = (dest_y_start % PAGE_HEIGHT as i32) as u32;

            let mask = ((1u16 << rows_in_page) - 1) << dest_bit;
            let lo_mask = mask as u8;
            let hi_mask = (mask >> 8) as u8;

            let src_row = (source_page * src_w) as usize;
            let lo_row = (dest_page * dst_stride) as usize;
            let hi_row = ((dest_page + 1) * dst_stride) as usize;

            for x in 0..copy_w {
                let source_byte = src[src_row + x as usize];

                let mut window: u16 = 0;
                for row in 0..rows_in_page as u32 {
                    if source_byte & (1u8 << row) != 0 {
                        window |= 1u16 << (dest_bit + row);
                    }
                }

                let col = (dst_x + x) as usize;
                let lo = &dst[lo_row + col];
                lo.set((lo.get() & !lo_mask) | (window as u8 & lo_mask));

                if hi_mask != 0 {
                    let hi = &dst[hi_row + col];
                    hi.set((hi.get() & !hi_mask) | ((window >> 8) as u8 & hi_mask));
                }
            }
        }
    }
}

/// Compile-time `from_rgb` applied to the shared palette table
const fn resolve_table() -> [bool; 16] {
    let mut out = [false; 16];
    let mut i = 0;
    while i < 16 {
        let (r, g, b) = ANSI_RGB[i];
        out[i] = r != 0 || g != 0 || b != 0;
        i += 1;
    }
    out
}
