/// The 16 indexed palette entries, ANSI terminal order
///
/// Values are the palette index; formats resolve an entry to a native color
/// through `PixelFormat::ansi` using the shared RGB definitions below.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Black = 0x0,
    Red = 0x1,
    Green = 0x2,
    Yellow = 0x3,
    Blue = 0x4,
    Magenta = 0x5,
    Cyan = 0x6,
    White = 0x7,
    Gray = 0x8,
    RedBright = 0x9,
    GreenBright = 0xA,
    YellowBright = 0xB,
    BlueBright = 0xC,
    MagentaBright = 0xD,
    CyanBright = 0xE,
    WhiteBright = 0xF,
}

/// RGB definitions of the palette entries, indexed by AnsiColor
pub(crate) const ANSI_RGB: [(u8, u8, u8); 16] = [
    (0x00, 0x00, 0x00), // Black
    (0x80, 0x00, 0x00), // Red
    (0x00, 0x80, 0x00), // Green
    (0x80, 0x80, 0x00), // Yellow
    (0x00, 0x00, 0x80), // Blue
    (0x80, 0x00, 0x80), // Magenta
    (0x00, 0x70, 0x80), // Cyan
    (0x80, 0x80, 0x80), // White
    (0x60, 0x60, 0x60), // Gray
    (0xFF, 0x20, 0x20), // RedBright
    (0x20, 0xCF, 0x20), // GreenBright
    (0xFF, 0xFF, 0x00), // YellowBright
    (0x20, 0x20, 0xFF), // BlueBright
    (0xFF, 0x20, 0xFF), // MagentaBright
    (0x00, 0xDF, 0xCF), // CyanBright
    (0xFF, 0xFF, 0xFF), // WhiteBright
];

impl AnsiColor {
    /// Entry for a palette index; only the low nibble is significant
    pub fn from_index(index: u8) -> Self {
        const TABLE: [AnsiColor; 16] = [
            AnsiColor::Black,
            AnsiColor::Red,
            AnsiColor::Green,
            AnsiColor::Yellow,
            AnsiColor::Blue,
            AnsiColor::Magenta,
            AnsiColor::Cyan,
            AnsiColor::White,
            AnsiColor::Gray,
            AnsiColor::RedBright,
            AnsiColor::GreenBright,
            AnsiColor::YellowBright,
            AnsiColor::BlueBright,
            AnsiColor::MagentaBright,
            AnsiColor::CyanBright,
            AnsiColor::WhiteBright,
        ];
        TABLE[(index & 0x0F) as usize]
    }

    /// RGB definition of this entry
    pub fn rgb(self) -> (u8, u8, u8) {
        ANSI_RGB[self as usize]
    }
}
