//! Example demonstrating split layouts and attributed text
//!
//! Builds a small status dashboard on a monochrome frame: an inverted title
//! band, three gauge lanes and a clock footer, then prints the finished
//! frame to the terminal as half-block characters.

use chrono::Local;

use pixel_canvas::demo::dump_mono;
use pixel_canvas::fonts::MONO_5X7;
use pixel_canvas::text::control;
use pixel_canvas::{Canvas, Monochrome, PixelFormat, Region};

const WIDTH: i32 = 128;
const HEIGHT: i32 = 64;

fn main() {
    let mut buffer = vec![0u8; Monochrome::buffer_len(WIDTH as usize, HEIGHT as usize)];
    {
        let canvas = Canvas::new(
            Region::<Monochrome>::new(&mut buffer, WIDTH, WIDTH, HEIGHT)
                .expect("buffer matches the frame size"),
        )
        .with_font(&MONO_5X7);

        let [mut header, body, mut footer] = canvas.split([1, 4, 1], false);

        // Title band: white fill, glyphs drawn inverted on top of it
        header.fill(true);
        let mut title = vec![control::INVERT];
        title.extend_from_slice(b" PIXEL DASHBOARD ");
        header.text(1, 1, &title);

        let readings: [(&[u8], i32); 3] = [(b"CPU", 72), (b"MEM", 45), (b"NET", 91)];
        let mut lanes = body.split([1; 3], false);
        for (lane, (label, level)) in lanes.iter_mut().zip(readings) {
            lane.text(1, 2, label);

            let bar_x = lane.glyph_width() * 5;
            let bar_w = lane.max_x() - bar_x - 1;
            lane.rect(bar_x, 2, bar_x + bar_w, lane.max_y() - 2, false);
            let filled = bar_w * level / 100;
            if filled > 0 {
                lane.rect(bar_x, 2, bar_x + filled, lane.max_y() - 2, true);
            }
        }

        let stamp = Local::now().format("%H:%M:%S").to_string();
        footer.text(1, 1, stamp.as_bytes());
    }

    print!("{}", dump_mono(&buffer, WIDTH as usize, HEIGHT as usize));
}
