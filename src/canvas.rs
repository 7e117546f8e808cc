use crate::bitmap::Bitmap;
use crate::font::Font;
use crate::format::PixelFormat;
use crate::palette::AnsiColor;
use crate::region::{Region, RegionError};
use crate::text::{TextPen, TextToken};

/// Stateful drawing context over a region
///
/// Combines a region with a font, a foreground/background color pair and a
/// wrap flag; provides shape primitives, layout splitting and the attributed
/// text interpreter. All drawing is infallible: requests reaching outside the
/// region are clipped or truncated silently. `sub` is the only fallible call.
pub struct Canvas<'a, F: PixelFormat> {
    frame: Region<'a, F>,
    font: &'a Font,
    foreground: F::Color,
    background: F::Color,
    auto_wrap: bool,
}

impl<F: PixelFormat> Clone for Canvas<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: PixelFormat> Copy for Canvas<'_, F> {}

impl<'a, F: PixelFormat> Canvas<'a, F> {
    /// Canvas over a region with the default font and palette colors
    pub fn new(frame: Region<'a, F>) -> Self {
        Self {
            frame,
            font: &Font::BLANK,
            foreground: F::ansi(AnsiColor::WhiteBright),
            background: F::ansi(AnsiColor::Black),
            auto_wrap: false,
        }
    }

    /// Replace the font
    pub fn with_font(mut self, font: &'a Font) -> Self {
        self.font = font;
        self
    }

    /// Replace both colors
    pub fn with_colors(mut self, foreground: F::Color, background: F::Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Enable or disable automatic line wrapping for text
    pub fn with_auto_wrap(mut self, enabled: bool) -> Self {
        self.auto_wrap = enabled;
        self
    }

    // === Attributes ===

    /// Canvas width in pixels
    pub fn width(&self) -> i32 {
        self.frame.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> i32 {
        self.frame.height()
    }

    /// Largest valid x coordinate
    pub fn max_x(&self) -> i32 {
        self.frame.width() - 1
    }

    /// Largest valid y coordinate
    pub fn max_y(&self) -> i32 {
        self.frame.height() - 1
    }

    /// Midpoint of the valid x range, `max_x() / 2`
    pub fn center_x(&self) -> i32 {
        self.max_x() / 2
    }

    /// Midpoint of the valid y range, `max_y() / 2`
    pub fn center_y(&self) -> i32 {
        self.max_y() / 2
    }

    /// Current font
    pub fn font(&self) -> &'a Font {
        self.font
    }

    /// Configured foreground color
    pub fn foreground(&self) -> F::Color {
        self.foreground
    }

    /// Configured background color
    pub fn background(&self) -> F::Color {
        self.background
    }

    /// Whether text wraps at the right edge
    pub fn auto_wrap(&self) -> bool {
        self.auto_wrap
    }

    /// Glyph width of the current font
    pub fn glyph_width(&self) -> i32 {
        self.font.glyph_width as i32
    }

    /// Glyph height of the current font
    pub fn glyph_height(&self) -> i32 {
        self.font.glyph_height as i32
    }

    /// Tab width: four glyph advance widths
    pub fn tab_width(&self) -> i32 {
        self.font.width_total() as i32 * 4
    }

    /// How many glyphs fit in one row
    pub fn width_in_glyphs(&self) -> i32 {
        self.frame.width() / self.font.width_total() as i32
    }

    /// How many text lines fit in the canvas
    pub fn height_in_glyphs(&self) -> i32 {
        self.frame.height() / self.font.height_total() as i32
    }

    // === Setters ===

    /// Switch to another font
    pub fn set_font(&mut self, font: &'a Font) {
        self.font = font;
    }

    /// Set the foreground color
    pub fn set_foreground(&mut self, color: F::Color) {
        self.foreground = color;
    }

    /// Set the background color
    pub fn set_background(&mut self, color: F::Color) {
        self.background = color;
    }

    /// Exchange foreground and background
    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.foreground, &mut self.background);
    }

    /// Enable or disable automatic line wrapping for text
    pub fn set_auto_wrap(&mut self, enabled: bool) {
        self.auto_wrap = enabled;
    }

    // === Layout ===

    /// Derive a canvas over a validated sub-region
    ///
    /// The child inherits font, colors and the wrap flag.
    pub fn sub(
        &self,
        width: i32,
        height: i32,
        offset_x: i32,
        offset_y: i32,
    ) -> Result<Canvas<'a, F>, RegionError> {
        Ok(Canvas {
            frame: self.frame.sub(width, height, offset_x, offset_y)?,
            font: self.font,
            foreground: self.foreground,
            background: self.background,
            auto_wrap: self.auto_wrap,
        })
    }

    /// Partition into N adjacent canvases sized proportional to weights
    ///
    /// A weight of 0 counts as 1. Partition sizes come from the fixed weight
    /// total; the last partition absorbs the integer-division remainder, so
    /// the children tile the parent exactly with no gap or overlap.
    pub fn split<const N: usize>(&self, weights: [u8; N], horizontal: bool) -> [Canvas<'a, F>; N] {
        let mut total_weight: i32 = 0;
        for weight in weights {
            total_weight += weight.max(1) as i32;
        }

        let total_size = if horizontal { self.width() } else { self.height() };

        let mut sizes = [0i32; N];
        let mut offsets = [0i32; N];
        let mut used = 0;
        for i in 0..N {
            offsets[i] = used;
            sizes[i] = if i == N - 1 {
                total_size - used
            } else {
                total_size * weights[i].max(1) as i32 / total_weight
            };
            used += sizes[i];
        }

        std::array::from_fn(|i| {
            let frame = if horizontal {
                self.frame.sub_unchecked(sizes[i], self.height(), offsets[i], 0)
            } else {
                self.frame.sub_unchecked(self.width(), sizes[i], 0, offsets[i])
            };
            Canvas {
                frame,
                font: self.font,
                foreground: self.foreground,
                background: self.background,
                auto_wrap: self.auto_wrap,
            }
        })
    }

    // === Shapes ===

    /// Single foreground pixel
    pub fn dot(&mut self, x: i32, y: i32) {
        self.frame.set_pixel(x, y, self.foreground);
    }

    /// Fill the whole canvas with a color
    pub fn fill(&mut self, color: F::Color) {
        self.frame.fill(color);
    }

    /// Fill the whole canvas with the background color
    pub fn clear(&mut self) {
        self.frame.fill(self.background);
    }

    /// Line between two points in the foreground color
    ///
    /// Purely horizontal and vertical lines collapse into one fill; the
    /// general case walks an integer Bresenham and stops exactly at the
    /// second endpoint.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        if y0 == y1 {
            self.hline(x0, x1, y0, self.foreground);
            return;
        }
        if x0 == x1 {
            self.vline(x0, y0, y1, self.foreground);
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.frame.set_pixel(x, y, self.foreground);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x == x1 {
                    break;
                }
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                if y == y1 {
                    break;
                }
                err += dx;
                y += sy;
            }
        }
    }

    /// Axis-aligned rectangle, filled or outlined, in the foreground color
    ///
    /// Corners may be given in any order. The outline paints the top and
    /// bottom rows full-width and the side columns strictly between them, so
    /// every border pixel is touched once.
    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, fill: bool) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        if fill {
            self.frame.fill_rect(x0, y0, x1, y1, self.foreground);
            return;
        }

        self.frame.fill_rect(x0, y0, x1, y0, self.foreground);
        self.frame.fill_rect(x0, y1, x1, y1, self.foreground);
        if y1 - y0 > 1 {
            self.frame.fill_rect(x0, y0 + 1, x0, y1 - 1, self.foreground);
            self.frame.fill_rect(x1, y0 + 1, x1, y1 - 1, self.foreground);
        }
    }

    /// Circle around a center, filled or outlined, in the foreground color
    ///
    /// A negative radius draws nothing; radius 0 draws the center pixel.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, fill: bool) {
        if r < 0 {
            return;
        }

        if fill {
            // squares exceed i32 for radii past 46340; scan only region rows
            let rr = r as i64 * r as i64;
            let top = (cy as i64 - r as i64).max(0);
            let bottom = (cy as i64 + r as i64).min(self.max_y() as i64);
            for row in top..=bottom {
                let dy = row - cy as i64;
                let half = ((rr - dy * dy) as u64).isqrt() as i64;
                let left = (cx as i64 - half).max(i32::MIN as i64) as i32;
                let right = (cx as i64 + half).min(i32::MAX as i64) as i32;
                self.hline(left, right, row as i32, self.foreground);
            }
            return;
        }

        let mut x = r;
        let mut y = 0;
        let mut err = 0;
        while x >= y {
            self.circle_points(cx, cy, x, y);
            y += 1;
            err += 2 * y - 1;
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }
    }

    /// Blit a bitmap so its top-left lands at (x, y)
    ///
    /// Never fails; overflow past the region truncates.
    pub fn image(&mut self, x: i32, y: i32, source: &Bitmap<'_, F>) {
        self.frame
            .draw_image(source.data(), source.width(), source.height(), x, y);
    }

    // === Text ===

    /// Interpret a byte string with cursor, wrapping and color attributes
    ///
    /// Reserved high bytes change the current colors (see [`crate::text::control`]);
    /// `\n` and `\t` move the cursor, clearing the skipped span in the
    /// current background; everything else renders as a glyph with one pixel
    /// of separator spacing. Output stops at the bottom edge, and at the
    /// right edge unless auto-wrap is on.
    pub fn text(&mut self, start_x: i32, start_y: i32, content: &[u8]) {
        let glyph_w = self.font.glyph_width as i32;
        let glyph_h = self.font.glyph_height as i32;
        let line_h = self.font.height_total() as i32;

        let configured = TextPen::<F>::new(self.foreground, self.background);
        let mut pen = configured;
        let mut cursor_x = start_x;
        let mut cursor_y = start_y;

        for &byte in content {
            match TextToken::classify(byte) {
                TextToken::Newline => {
                    self.clear_row_remainder(cursor_x, cursor_y, self.max_x(), pen.bg);
                    cursor_x = start_x;
                    cursor_y += line_h;
                }
                TextToken::Tab => {
                    let tab = self.tab_width();
                    let next_x = (cursor_x / tab + 1) * tab;
                    self.clear_row_remainder(cursor_x, cursor_y, next_x, pen.bg);
                    cursor_x = next_x;
                }
                TextToken::Glyph(c) => {
                    if cursor_x > self.width() - glyph_w {
                        self.clear_row_remainder(cursor_x, cursor_y, self.max_x(), pen.bg);
                        if !self.auto_wrap {
                            return;
                        }
                        cursor_x = 0;
                        cursor_y += line_h;
                    }
                    if cursor_y > self.height() - glyph_h {
                        return;
                    }

                    self.draw_glyph(cursor_x, cursor_y, self.font.glyph(c), pen.fg, pen.bg);
                    cursor_x += glyph_w;
                    if cursor_x < self.width() {
                        self.vline(cursor_x, cursor_y, cursor_y + glyph_h, pen.bg);
                    }
                    cursor_x += 1;
                }
                token => {
                    pen.apply(token, &configured);
                }
            }
        }
    }

    // === Internals ===

    /// Horizontal line via one fill; endpoints in any order
    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: F::Color) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.frame.fill_rect(x0, y, x1, y, color);
    }

    /// Vertical line via one fill; endpoints in any order
    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: F::Color) {
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.frame.fill_rect(x, y0, x, y1, color);
    }

    /// The 8 symmetric octant points of the midpoint circle walk
    fn circle_points(&mut self, cx: i32, cy: i32, x: i32, y: i32) {
        let color = self.foreground;
        self.frame.set_pixel(cx + x, cy + y, color);
        self.frame.set_pixel(cx - x, cy + y, color);
        self.frame.set_pixel(cx + x, cy - y, color);
        self.frame.set_pixel(cx - x, cy - y, color);
        if x != y {
            self.frame.set_pixel(cx + y, cy + x, color);
            self.frame.set_pixel(cx - y, cy + x, color);
            self.frame.set_pixel(cx + y, cy - x, color);
            self.frame.set_pixel(cx - y, cy - x, color);
        }
    }

    /// Fill a line-height band from from_x to to_x, used by \n, \t and wraps
    fn clear_row_remainder(&mut self, from_x: i32, y: i32, to_x: i32, color: F::Color) {
        if from_x < to_x {
            let band = self.font.height_total() as i32;
            self.frame.fill_rect(from_x, y, to_x, y + band, color);
        }
    }

    /// Rasterize one glyph column by column, or a placeholder box on a miss
    fn draw_glyph(&mut self, x: i32, y: i32, glyph: Option<&[u8]>, fg: F::Color, bg: F::Color) {
        let w = self.font.glyph_width as i32;
        let h = self.font.glyph_height as i32;

        match glyph {
            None => {
                let x1 = x + w - 1;
                let y1 = y + h - 1;
                self.hline(x, x1, y, fg);
                self.hline(x, x1, y1, fg);
                self.vline(x, y, y1, fg);
                self.vline(x1, y, y1, fg);
            }
            Some(columns) => {
                for (col, &bits) in columns.iter().enumerate() {
                    let px = x + col as i32;
                    for row in 0..h {
                        let color = if (bits >> row) & 1 != 0 { fg } else { bg };
                        self.frame.set_pixel(px, y + row, color);
                    }
                    // separator row below the glyph
                    self.frame.set_pixel(px, y + h, bg);
                }
            }
        }
    }
}
