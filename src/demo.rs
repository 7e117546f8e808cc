use chrono::Local;

use crate::canvas::Canvas;
use crate::fonts::MONO_5X7;
use crate::format::PixelFormat;
use crate::palette::AnsiColor;
use crate::text::control;

// ============================================================================
// Scene Painters - Draw showcase content onto a canvas
// ============================================================================

/// Shape primitives: border, diagonals, concentric circles, a dotted axis
pub fn render_shapes<F: PixelFormat>(canvas: &mut Canvas<'_, F>) {
    canvas.clear();
    canvas.rect(0, 0, canvas.max_x(), canvas.max_y(), false);

    canvas.line(2, 2, canvas.max_x() - 2, canvas.max_y() - 2);
    canvas.line(2, canvas.max_y() - 2, canvas.max_x() - 2, 2);

    let cx = canvas.center_x();
    let cy = canvas.center_y();
    let r = cx.min(cy) - 4;
    canvas.circle(cx, cy, r, false);
    canvas.circle(cx, cy, r / 2, true);

    for x in (4..canvas.max_x() - 3).step_by(8) {
        canvas.dot(x, cy);
    }
}

/// Font sample with color attributes, inversion and wrapping
pub fn render_text_specimen<F: PixelFormat>(canvas: &mut Canvas<'_, F>) {
    canvas.set_font(&MONO_5X7);
    canvas.set_auto_wrap(true);
    canvas.clear();

    let mut sample = Vec::new();
    sample.extend_from_slice(b"The quick brown fox\n");
    sample.push(control::fg(AnsiColor::YellowBright));
    sample.extend_from_slice(b"jumps over\n");
    sample.push(control::INVERT);
    sample.extend_from_slice(b" the lazy dog ");
    sample.push(control::RESET);
    sample.extend_from_slice(b"\n0123456789 !?#$%&*");
    canvas.text(1, 1, &sample);
}

/// All 16 palette entries as two rows of bordered swatches
pub fn render_palette<F: PixelFormat>(canvas: &mut Canvas<'_, F>) {
    canvas.clear();

    let rows = canvas.split([1, 1], false);
    for (row_index, row) in rows.into_iter().enumerate() {
        let mut swatches = row.split([1; 8], true);
        for (col, swatch) in swatches.iter_mut().enumerate() {
            let color = AnsiColor::from_index((row_index * 8 + col) as u8);
            swatch.fill(F::ansi(color));
            swatch.rect(0, 0, swatch.max_x(), swatch.max_y(), false);
        }
    }
}

/// Wall clock centered in a frame
pub fn render_clock<F: PixelFormat>(canvas: &mut Canvas<'_, F>) {
    canvas.set_font(&MONO_5X7);
    canvas.clear();
    canvas.rect(0, 0, canvas.max_x(), canvas.max_y(), false);

    let line = Local::now().format("%H:%M:%S").to_string();
    let text_w = line.len() as i32 * canvas.font().width_total() as i32;
    let x = (canvas.width() - text_w).max(0) / 2;
    let y = (canvas.height() - canvas.glyph_height()).max(0) / 2;
    canvas.text(x, y, line.as_bytes());
}

/// Split-layout status page: colored header, three gauge lanes, timestamp
pub fn render_dashboard<F: PixelFormat>(canvas: &mut Canvas<'_, F>) {
    canvas.set_font(&MONO_5X7);
    canvas.clear();

    let [mut header, body, mut footer] = canvas.split([1, 4, 1], false);

    header.set_background(F::ansi(AnsiColor::Blue));
    header.set_foreground(F::ansi(AnsiColor::WhiteBright));
    header.clear();
    header.text(1, 1, b"SYSTEM STATUS");

    let readings: [(&[u8], i32); 3] = [(b"CPU", 72), (b"MEM", 45), (b"NET", 91)];
    let mut lanes = body.split([1; 3], false);
    for (lane, (label, level)) in lanes.iter_mut().zip(readings) {
        lane.text(1, 1, label);

        let bar_x = lane.glyph_width() * 5;
        let bar_w = lane.max_x() - bar_x - 1;
        if bar_w <= 0 {
            continue;
        }
        lane.rect(bar_x, 1, bar_x + bar_w, lane.max_y() - 1, false);
        let filled = bar_w * level / 100;
        if filled > 0 {
            lane.rect(bar_x, 1, bar_x + filled, lane.max_y() - 1, true);
        }
    }

    let stamp = Local::now().format("%Y-%m-%d %H:%M").to_string();
    footer.text(1, 1, stamp.as_bytes());
}

// ============================================================================
// Terminal Dumpers - Print a finished frame as ANSI art
// ============================================================================

/// Render a monochrome frame with half-block characters, two rows per line
pub fn dump_mono(buffer: &[u8], width: usize, height: usize) -> String {
    let mut out = String::with_capacity((width + 1) * height.div_ceil(2));
    let mut y = 0;
    while y < height {
        for x in 0..width {
            let top = mono_bit(buffer, width, x, y);
            let bottom = y + 1 < height && mono_bit(buffer, width, x, y + 1);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
        y += 2;
    }
    out
}

/// Render an RGB565 frame with truecolor escapes, two rows per line
pub fn dump_rgb565(buffer: &[u16], width: usize, height: usize) -> String {
    let mut out = String::new();
    let mut y = 0;
    while y < height {
        for x in 0..width {
            let (tr, tg, tb) = unpack_565(buffer[y * width + x]);
            let (br, bg, bb) = if y + 1 < height {
                unpack_565(buffer[(y + 1) * width + x])
            } else {
                (0, 0, 0)
            };
            out.push_str(&format!(
                "\x1b[38;2;{tr};{tg};{tb}m\x1b[48;2;{br};{bg};{bb}m\u{2580}"
            ));
        }
        out.push_str("\x1b[0m\n");
        y += 2;
    }
    out
}

fn mono_bit(buffer: &[u8], stride: usize, x: usize, y: usize) -> bool {
    buffer[(y / 8) * stride + x] >> (y % 8) & 1 != 0
}

/// Expand a 565 pixel to 888 by replicating the high bits
fn unpack_565(pixel: u16) -> (u8, u8, u8) {
    let r = ((pixel >> 11) & 0x1F) as u8;
    let g = ((pixel >> 5) & 0x3F) as u8;
    let b = (pixel & 0x1F) as u8;
    (r << 3 | r >> 2, g << 2 | g >> 4, b << 3 | b >> 2)
}
