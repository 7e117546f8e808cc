// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-canvas")]
#[command(about = "Pixel buffer demo renderer", long_about = None)]
pub struct Cli {
    /// Scene to render
    #[arg(long, value_enum, default_value = "dashboard")]
    pub scene: Scene,

    /// Frame width in pixels
    #[arg(long, default_value = "128")]
    pub width: i32,

    /// Frame height in pixels
    #[arg(long, default_value = "64")]
    pub height: i32,

    /// Pixel format of the backing buffer
    #[arg(long, value_enum, default_value = "mono")]
    pub format: Format,

    /// Swap foreground and background before rendering
    #[arg(long, default_value = "false")]
    pub invert: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Shapes,
    Text,
    Palette,
    Clock,
    Dashboard,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Mono,
    Rgb565,
}
