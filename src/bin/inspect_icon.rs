use anyhow::{Context, Result};
use doc_icon::{config::DEFAULT_APP_TARGET, icon::DOCUMENT_COLOR};
use ico::IconDir;
use std::fs::File;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_APP_TARGET.to_string());

    let file = File::open(&path).with_context(|| format!("Failed to open {}", path))?;
    let icon_dir = IconDir::read(file).with_context(|| format!("Failed to read ICO {}", path))?;

    println!("Checking icon: {}", path);
    println!("Entries: {}", icon_dir.entries().len());
    for entry in icon_dir.entries() {
        println!(
            "  {}x{} {}bpp {}",
            entry.width(),
            entry.height(),
            entry.bits_per_pixel(),
            if entry.is_png() { "png" } else { "bmp" }
        );
    }

    let largest = icon_dir
        .entries()
        .iter()
        .max_by_key(|entry| entry.width())
        .context("Icon has no entries")?;
    let image = largest.decode().context("Failed to decode largest entry")?;
    let (width, height) = (image.width(), image.height());
    let rgba = image.rgba_data();

    let pixel_at = |x: u32, y: u32| -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
    };

    let center = pixel_at(width / 2, height / 2);
    let corner = pixel_at(0, 0);

    println!("\nLargest entry {}x{}:", width, height);
    println!("  center RGBA: {:?}", center);
    println!("  corner RGBA: {:?}", corner);

    if center == DOCUMENT_COLOR.0 {
        println!("✓ Document body found at center");
    } else {
        println!("⚠ Center pixel is not the document body color");
    }

    if corner[3] == 0 {
        println!("✓ Corner is transparent");
    } else {
        println!("⚠ Corner is not transparent");
    }

    Ok(())
}
