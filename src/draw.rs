//! Filled raster primitives for building the icon on an RGBA canvas.
//!
//! Coordinates are integer pixel positions and boxes are inclusive on both
//! ends. Fills replace the target pixel outright, so a translucent color
//! leaves a translucent pixel behind rather than being composited.

use image::{Rgba, RgbaImage};

/// Inclusive axis-aligned box: `(x0, y0)` and `(x1, y1)` are both covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Clamp an inclusive span to `0..len`, returning `None` when nothing is left.
fn clip_span(lo: i32, hi: i32, len: u32) -> Option<(u32, u32)> {
    let lo = lo.max(0);
    let hi = hi.min(len as i32 - 1);
    if lo > hi {
        return None;
    }
    Some((lo as u32, hi as u32))
}

/// Fill the ellipse inscribed in `bbox`
pub fn fill_ellipse(img: &mut RgbaImage, bbox: BoundingBox, color: Rgba<u8>) {
    let rx = (bbox.x1 - bbox.x0) as f32 / 2.0;
    let ry = (bbox.y1 - bbox.y0) as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let center_x = (bbox.x0 + bbox.x1) as f32 / 2.0;
    let center_y = (bbox.y0 + bbox.y1) as f32 / 2.0;

    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        clip_span(bbox.x0, bbox.x1, img.width()),
        clip_span(bbox.y0, bbox.y1, img.height()),
    ) else {
        return;
    };

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let dx = (x as f32 - center_x) / rx;
            let dy = (y as f32 - center_y) / ry;
            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a convex polygon. Points may wind either way; pixels lying exactly on
/// an edge are filled.
pub fn fill_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
    let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
    for &(x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        clip_span(min_x, max_x, img.width()),
        clip_span(min_y, max_y, img.height()),
    ) else {
        return;
    };

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            if inside_convex(points, x as i64, y as i64) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn inside_convex(points: &[(i32, i32)], px: i64, py: i64) -> bool {
    let mut has_pos = false;
    let mut has_neg = false;

    for (i, &(ax, ay)) in points.iter().enumerate() {
        let (bx, by) = points[(i + 1) % points.len()];
        let (ax, ay, bx, by) = (ax as i64, ay as i64, bx as i64, by as i64);
        let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
        if cross > 0 {
            has_pos = true;
        } else if cross < 0 {
            has_neg = true;
        }
        if has_pos && has_neg {
            return false;
        }
    }

    true
}

/// Fill every pixel covered by `bbox`
pub fn fill_rect(img: &mut RgbaImage, bbox: BoundingBox, color: Rgba<u8>) {
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        clip_span(bbox.x0, bbox.x1, img.width()),
        clip_span(bbox.y0, bbox.y1, img.height()),
    ) else {
        return;
    };

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            img.put_pixel(x, y, color);
        }
    }
}
