/// Monospaced bitmap font over a contiguous glyph table
///
/// A glyph is `glyph_width` consecutive bytes; byte *i* is column *i*, bit
/// *b* of a byte is row *b* counted from the top. Glyphs for the printable
/// ASCII range are stored back to back in character order.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    data: Option<&'static [u8]>,
    pub glyph_width: u8,
    pub glyph_height: u8,
}

impl Font {
    /// First covered character, inclusive
    pub const START_CHAR: u8 = 32;
    /// One past the last covered character
    pub const END_CHAR: u8 = 127;

    /// Safe default: no glyph data, every lookup misses
    pub const BLANK: Font = Font {
        data: None,
        glyph_width: 3,
        glyph_height: 5,
    };

    /// Font over a glyph table
    ///
    /// Glyph height is capped at 8 because a column lives in one byte.
    pub const fn new(data: &'static [u8], glyph_width: u8, glyph_height: u8) -> Self {
        assert!(glyph_width >= 1, "glyph width must be at least 1");
        assert!(
            glyph_height >= 1 && glyph_height <= 8,
            "glyph height must be 1..=8"
        );
        Self {
            data: Some(data),
            glyph_width,
            glyph_height,
        }
    }

    /// Column bytes for a character; None when the lookup misses
    ///
    /// Misses on fonts without data, characters outside the covered range,
    /// and tables too short to hold the computed glyph.
    pub fn glyph(&self, c: u8) -> Option<&'static [u8]> {
        let data = self.data?;
        if !(Self::START_CHAR..Self::END_CHAR).contains(&c) {
            return None;
        }
        let w = self.glyph_width as usize;
        let start = (c - Self::START_CHAR) as usize * w;
        data.get(start..start + w)
    }

    /// Glyph advance width including one pixel of spacing
    pub const fn width_total(&self) -> u8 {
        self.glyph_width + 1
    }

    /// Line height including one pixel of spacing
    pub const fn height_total(&self) -> u8 {
        self.glyph_height + 1
    }
}
