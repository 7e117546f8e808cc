use std::cell::Cell;

use super::PixelFormat;
use crate::palette::ANSI_RGB;

/// 16-bit RGB565 linear format: one u16 per pixel, row-major
#[derive(Debug, Clone, Copy)]
pub struct Rgb565;

/// Pack an 8-bit RGB triple into 5-6-5 bits
const fn pack(r: u8, g: u8, b: u8) -> u16 {
    (((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16)
}

impl PixelFormat for Rgb565 {
    type Unit = u16;
    type Color = u16;

    const DEFAULT_FG: u16 = 0xFFFF;
    const DEFAULT_BG: u16 = 0x0000;
    const ANSI_COLORS: [u16; 16] = resolve_table();

    fn buffer_len(width: usize, height: usize) -> usize {
        width * height
    }

    fn from_rgb(r: u8, g: u8, b: u8) -> u16 {
        pack(r, g, b)
    }

    fn set_pixel(buf: &[Cell<u16>], stride: usize, x: usize, y: usize, color: u16) {
        buf[y * stride + x].set(color);
    }

    fn fill(buf: &[Cell<u16>], stride: usize, ox: usize, oy: usize, w: usize, h: usize, color: u16) {
        for y in oy..oy + h {
            let row = y * stride;
            for cell in &buf[row + ox..row + ox + w] {
                cell.set(color);
            }
        }
    }

    fn copy(
        src: &[u16],
        src_w: i32,
        src_h: i32,
        dst: &[Cell<u16>],
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

        for y in 0..copy_h {
            let src_row = (y * src_w) as usize;
            let dst_row = ((dst_y + y) * dst_stride + dst_x) as usize;
            for x in 0..copy_w as usize {
                dst[dst_row + x].set(src[src_row + x]);
            }
        }
    }
}

/// Resolve the shared RGB palette definitions through pack at compile time
const fn resolve_table() -> [u16; 16] {
    let mut out = [0u16; 16];
    let mut i = 0;
    while i < 16 {
        let (r, g, b) = ANSI_RGB[i];
        out[i] = pack(r, g, b);
        i += 1;
    }
    out
}
