//! Minimal 2D software rasterizer
//!
//! Features:
//! - Bounds-checked RGBA framebuffer (out-of-range writes are silent no-ops)
//! - DDA line drawing (major-axis stepping, both endpoints always painted)
//! - Edge-function triangle fill with a top-left fill rule
//! - Scan-fill and stroked axis-aligned rectangles

mod types;
mod render;

pub use types::*;
pub use render::*;

/// Default canvas dimensions
pub const WIDTH: usize = 400;
pub const HEIGHT: usize = 400;
