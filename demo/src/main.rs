use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lamp_palettes::Palette16;

// Renders each entry as a `scale`-pixel wide column of an indexed image.
fn save_strip(path: &str, palette: &Palette16, scale: usize) -> Result<(), Box<dyn std::error::Error>> {
    let width = palette.len() * scale;
    let height = scale;

    let mut indexes = Vec::with_capacity(width * height);
    for _ in 0..height {
        for i in 0..palette.len() {
            indexes.extend(std::iter::repeat_n(i as u8, scale));
        }
    }

    let file = File::create(Path::new(path))?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width as u32, height as u32);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette.to_bytes().to_vec());
    let mut writer = encoder.write_header()?;

    writer.write_image_data(&indexes)?;

    Ok(())
}

fn save_raw(path: &str, palette: &Palette16) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(Path::new(path))?;
    file.write_all(&palette.to_bytes())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        println!("Usage: lamp_palettes_demo <palette> <dst_path> [scale]");
        println!("Palettes: {}", lamp_palettes::NAMES.join(", "));
        std::process::exit(1)
    }

    let Some(palette) = lamp_palettes::by_name(&args[1]) else {
        println!("Unknown palette: {}", args[1]);
        std::process::exit(1)
    };
    let dst_path = &args[2];
    let scale = match args.get(3) {
        Some(s) => s.parse::<usize>()?.max(1),
        None => 8,
    };

    // `.pal` gets the bare 48-byte layout, anything else a PNG strip
    if dst_path.ends_with(".pal") {
        save_raw(dst_path, palette)?;
    } else {
        save_strip(dst_path, palette, scale)?;
    }

    println!("Wrote {} ({} colors)", dst_path, palette.len());

    Ok(())
}
