use anyhow::Context;
use clap::Parser;
use log::info;

use pixel_canvas::cli::{Cli, Format, Scene};
use pixel_canvas::demo;
use pixel_canvas::{Canvas, Monochrome, PixelFormat, Region, Rgb565};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.width < 1 || cli.height < 1 {
        anyhow::bail!(
            "frame size must be at least 1x1, got {}x{}",
            cli.width,
            cli.height
        );
    }

    info!(
        "rendering {:?} at {}x{} as {:?}",
        cli.scene, cli.width, cli.height, cli.format
    );

    let art = match cli.format {
        Format::Mono => render_mono(&cli),
        Format::Rgb565 => render_rgb565(&cli),
    }?;
    print!("{art}");

    Ok(())
}

/// Paint the selected scene into a monochrome frame and dump it as ANSI art
fn render_mono(cli: &Cli) -> anyhow::Result<String> {
    let (width, height) = (cli.width as usize, cli.height as usize);
    let mut buffer = vec![0u8; Monochrome::buffer_len(width, height)];

    let region = Region::<Monochrome>::new(&mut buffer, cli.width, cli.width, cli.height)
        .context("monochrome frame setup")?;
    let mut canvas = Canvas::new(region);
    if cli.invert {
        canvas.swap_colors();
    }
    paint(&mut canvas, cli.scene);
    drop(canvas);

    Ok(demo::dump_mono(&buffer, width, height))
}

/// Paint the selected scene into an RGB565 frame and dump it as ANSI art
fn render_rgb565(cli: &Cli) -> anyhow::Result<String> {
    let (width, height) = (cli.width as usize, cli.height as usize);
    let mut buffer = vec![0u16; Rgb565::buffer_len(width, height)];

    let region = Region::<Rgb565>::new(&mut buffer, cli.width, cli.width, cli.height)
        .context("rgb565 frame setup")?;
    let mut canvas = Canvas::new(region);
    if cli.invert {
        canvas.swap_colors();
    }
    paint(&mut canvas, cli.scene);
    drop(canvas);

    Ok(demo::dump_rgb565(&buffer, width, height))
}

fn paint<F: PixelFormat>(canvas: &mut Canvas<'_, F>, scene: Scene) {
    match scene {
        Scene::Shapes => demo::render_shapes(canvas),
        Scene::Text => demo::render_text_specimen(canvas),
        Scene::Palette => demo::render_palette(canvas),
        Scene::Clock => demo::render_clock(canvas),
        Scene::Dashboard => demo::render_dashboard(canvas),
    }
}
