use crate::format::PixelFormat;
use crate::palette::AnsiColor;

/// Control bytes understood by `Canvas::text`
///
/// The bytes sit in the high, non-ASCII range so printable text passes
/// through untouched. Compose them into byte strings directly
/// (`b"\x81inverted\x80normal"`) or through the helpers here.
pub mod control {
    use super::AnsiColor;

    /// Reset current colors to the configured ones
    pub const RESET: u8 = 0x80;
    /// Render with configured colors swapped
    pub const INVERT: u8 = 0x81;
    /// Swap the two current colors in place
    pub const SWAP: u8 = 0x82;
    /// First byte of the background palette range
    pub const BG_BASE: u8 = 0xB0;
    /// First byte of the foreground palette range
    pub const FG_BASE: u8 = 0xF0;

    /// Control byte selecting a foreground palette entry
    pub const fn fg(color: AnsiColor) -> u8 {
        FG_BASE | color as u8
    }

    /// Control byte selecting a background palette entry
    pub const fn bg(color: AnsiColor) -> u8 {
        BG_BASE | color as u8
    }
}

/// One classified byte of a text stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextToken {
    Reset,
    Invert,
    SwapColors,
    Foreground(AnsiColor),
    Background(AnsiColor),
    Newline,
    Tab,
    Glyph(u8),
}

impl TextToken {
    pub(crate) fn classify(byte: u8) -> Self {
        match byte {
            control::RESET => Self::Reset,
            control::INVERT => Self::Invert,
            control::SWAP => Self::SwapColors,
            b'\n' => Self::Newline,
            b'\t' => Self::Tab,
            0xF0..=0xFF => Self::Foreground(AnsiColor::from_index(byte)),
            0xB0..=0xBF => Self::Background(AnsiColor::from_index(byte)),
            other => Self::Glyph(other),
        }
    }
}

/// Current color state while interpreting a text stream
///
/// Color tokens mutate the pen; layout tokens (newline, tab, glyphs) are left
/// to the caller, which owns the cursor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextPen<F: PixelFormat> {
    pub fg: F::Color,
    pub bg: F::Color,
}

impl<F: PixelFormat> TextPen<F> {
    pub(crate) fn new(fg: F::Color, bg: F::Color) -> Self {
        Self { fg, bg }
    }

    /// Apply a color token; false means the token is layout and not consumed
    pub(crate) fn apply(&mut self, token: TextToken, configured: &TextPen<F>) -> bool {
        match token {
            TextToken::Reset => {
                *self = *configured;
                true
            }
            TextToken::Invert => {
                self.fg = configured.bg;
                self.bg = configured.fg;
                true
            }
            TextToken::SwapColors => {
                std::mem::swap(&mut self.fg, &mut self.bg);
                true
            }
            TextToken::Foreground(color) => {
                self.fg = F::ansi(color);
                true
            }
            TextToken::Background(color) => {
                self.bg = F::ansi(color);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Rgb565;

    #[test]
    fn classify_control_range() {
        assert_eq!(TextToken::classify(0x80), TextToken::Reset);
        assert_eq!(TextToken::classify(0x81), TextToken::Invert);
        assert_eq!(TextToken::classify(0x82), TextToken::SwapColors);
        assert_eq!(TextToken::classify(b'\n'), TextToken::Newline);
        assert_eq!(TextToken::classify(b'\t'), TextToken::Tab);
        assert_eq!(
            TextToken::classify(0xF3),
            TextToken::Foreground(AnsiColor::Yellow)
        );
        assert_eq!(
            TextToken::classify(0xBF),
            TextToken::Background(AnsiColor::WhiteBright)
        );
    }

    #[test]
    fn classify_passes_printable_through() {
        for byte in 32..127u8 {
            assert_eq!(TextToken::classify(byte), TextToken::Glyph(byte));
        }
        // unassigned high bytes are glyph requests too (and will miss)
        assert_eq!(TextToken::classify(0x90), TextToken::Glyph(0x90));
    }

    #[test]
    fn control_helpers_compose_bytes() {
        assert_eq!(control::fg(AnsiColor::Red), 0xF1);
        assert_eq!(control::bg(AnsiColor::Blue), 0xB4);
        assert_eq!(
            TextToken::classify(control::fg(AnsiColor::Red)),
            TextToken::Foreground(AnsiColor::Red)
        );
    }

    #[test]
    fn pen_reset_and_invert_use_configured_colors() {
        let configured = TextPen::<Rgb565>::new(0x1111, 0x2222);
        let mut pen = configured;

        assert!(pen.apply(TextToken::Invert, &configured));
        assert_eq!((pen.fg, pen.bg), (0x2222, 0x1111));

        assert!(pen.apply(TextToken::Foreground(AnsiColor::WhiteBright), &configured));
        assert_eq!(pen.fg, 0xFFFF);

        assert!(pen.apply(TextToken::Reset, &configured));
        assert_eq!((pen.fg, pen.bg), (0x1111, 0x2222));
    }

    #[test]
    fn pen_swap_operates_on_current_colors() {
        let configured = TextPen::<Rgb565>::new(0x1111, 0x2222);
        let mut pen = configured;
        pen.apply(TextToken::Foreground(AnsiColor::WhiteBright), &configured);

        pen.apply(TextToken::SwapColors, &configured);
        assert_eq!((pen.fg, pen.bg), (0x2222, 0xFFFF));
    }

    #[test]
    fn pen_leaves_layout_tokens_alone() {
        let configured = TextPen::<Rgb565>::new(1, 2);
        let mut pen = configured;
        assert!(!pen.apply(TextToken::Newline, &configured));
        assert!(!pen.apply(TextToken::Tab, &configured));
        assert!(!pen.apply(TextToken::Glyph(b'x'), &configured));
        assert_eq!((pen.fg, pen.bg), (1, 2));
    }
}
