use crate::draw::{fill_ellipse, fill_polygon, fill_rect, BoundingBox};
use anyhow::{Context, Result};
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    imageops::{self, FilterType},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{io::Write, path::Path};

pub const CANVAS_SIZE: u32 = 256;
pub const BADGE_MARGIN: i32 = 20;

pub const DOC_WIDTH: i32 = 100;
pub const DOC_HEIGHT: i32 = 140;
pub const FOLD_SIZE: i32 = 30;

pub const LINE_HEIGHT: i32 = 10;
pub const LINE_GAP: i32 = 18;
pub const LINE_TOP_OFFSET: i32 = 40;
pub const LINE_INSET: i32 = 20;
pub const LINE_COUNT: i32 = 3;

/// #2563EB
pub const BADGE_COLOR: Rgba<u8> = Rgba([37, 99, 235, 255]);
pub const DOCUMENT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const FOLD_COLOR: Rgba<u8> = Rgba([220, 220, 220, 255]);
pub const TEXT_LINE_COLOR: Rgba<u8> = Rgba([37, 99, 235, 200]);

/// Frame sizes embedded in the ICO container, largest first
pub const ICO_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

const CANVAS: i32 = CANVAS_SIZE as i32;

/// Top-left corner of the document body, centered on the canvas
pub const fn document_origin() -> (i32, i32) {
    ((CANVAS - DOC_WIDTH) / 2, (CANVAS - DOC_HEIGHT) / 2)
}

/// Box the circular badge is inscribed in
pub const fn badge_bounds() -> BoundingBox {
    BoundingBox::new(
        BADGE_MARGIN,
        BADGE_MARGIN,
        CANVAS - BADGE_MARGIN,
        CANVAS - BADGE_MARGIN,
    )
}

/// Document body with the top-right corner cut diagonally by `FOLD_SIZE`
pub const fn document_outline() -> [(i32, i32); 5] {
    let (x, y) = document_origin();
    [
        (x, y),
        (x + DOC_WIDTH - FOLD_SIZE, y),
        (x + DOC_WIDTH, y + FOLD_SIZE),
        (x + DOC_WIDTH, y + DOC_HEIGHT),
        (x, y + DOC_HEIGHT),
    ]
}

/// The folded flap filling the cut corner
pub const fn fold_triangle() -> [(i32, i32); 3] {
    let (x, y) = document_origin();
    [
        (x + DOC_WIDTH - FOLD_SIZE, y),
        (x + DOC_WIDTH - FOLD_SIZE, y + FOLD_SIZE),
        (x + DOC_WIDTH, y + FOLD_SIZE),
    ]
}

/// Bars standing in for lines of text on the document
pub fn text_lines() -> Vec<BoundingBox> {
    let (x, y) = document_origin();
    let start_y = y + LINE_TOP_OFFSET;

    (0..LINE_COUNT)
        .map(|i| {
            let top = start_y + i * LINE_GAP;
            BoundingBox::new(
                x + LINE_INSET,
                top,
                x + DOC_WIDTH - LINE_INSET,
                top + LINE_HEIGHT,
            )
        })
        .collect()
}

/// Draw the full-size icon onto a fresh transparent canvas
pub fn render_canvas() -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgba([0, 0, 0, 0]));

    let badge = badge_bounds();
    log::debug!("badge ellipse: {:?}", badge);
    fill_ellipse(&mut canvas, badge, BADGE_COLOR);

    let outline = document_outline();
    log::debug!("document outline: {:?}", outline);
    fill_polygon(&mut canvas, &outline, DOCUMENT_COLOR);

    let fold = fold_triangle();
    log::debug!("fold triangle: {:?}", fold);
    fill_polygon(&mut canvas, &fold, FOLD_COLOR);

    for line in text_lines() {
        log::debug!("text line: {:?}", line);
        fill_rect(&mut canvas, line, TEXT_LINE_COLOR);
    }

    canvas
}

/// One image per entry of `ICO_SIZES`. The full-size frame is the canvas
/// itself; smaller ones are down-sampled from it.
pub fn render_frames(canvas: &RgbaImage) -> Vec<RgbaImage> {
    ICO_SIZES
        .iter()
        .map(|&size| {
            if size == canvas.width() && size == canvas.height() {
                canvas.clone()
            } else {
                imageops::resize(canvas, size, size, FilterType::Lanczos3)
            }
        })
        .collect()
}

/// Encode the canvas as an ICO container holding every size in `ICO_SIZES`
pub fn encode_ico(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut frames = Vec::new();

    for frame in render_frames(canvas) {
        let size = frame.width();
        log::debug!("encoding {size}x{size} ico frame");

        // 256px layer gets maximum PNG compression
        if size == 256 {
            let mut buf = Vec::new();
            write_png(frame.as_raw(), &mut buf, size)?;
            frames.push(IcoFrame::with_encoded(buf, size, size, ColorType::Rgba8)?);
        } else {
            frames.push(IcoFrame::as_png(
                frame.as_raw(),
                size,
                size,
                ColorType::Rgba8,
            )?);
        }
    }

    let mut out = Vec::new();
    IcoEncoder::new(&mut out)
        .encode_images(&frames)
        .context("Failed to encode ICO container")?;
    Ok(out)
}

/// Render the icon and write it as a multi-resolution ICO file at `path`.
///
/// The parent directory must already exist; it is never created here.
pub fn create_icon(path: &Path) -> Result<()> {
    let canvas = render_canvas();
    let bytes = encode_ico(&canvas)?;

    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write icon to {}", path.display()))?;

    println!("✓ Icon created at: {}", path.display());
    Ok(())
}

/// Write the full-size canvas as a PNG
pub fn write_preview(path: &Path) -> Result<()> {
    let canvas = render_canvas();
    let mut buf = Vec::new();
    write_png(canvas.as_raw(), &mut buf, CANVAS_SIZE)?;

    std::fs::write(path, buf)
        .with_context(|| format!("Failed to write preview to {}", path.display()))?;

    println!("✓ Preview created at: {}", path.display());
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
