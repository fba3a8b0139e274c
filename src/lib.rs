pub mod config;
pub mod draw;
pub mod icon;

pub use icon::{create_icon, encode_ico, render_canvas, render_frames, write_preview};
