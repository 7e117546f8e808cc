pub mod bitmap;
pub mod canvas;
pub mod cli;
pub mod demo;
pub mod font;
pub mod fonts;
pub mod format;
pub mod palette;
pub mod region;
pub mod text;

// Re-export the drawing types so callers can import them flat
pub use bitmap::Bitmap;
pub use canvas::Canvas;
pub use font::Font;
pub use format::{Monochrome, PixelFormat, Rgb565};
pub use palette::AnsiColor;
pub use region::{Region, RegionError};
