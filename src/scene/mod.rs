//! Scene: shape collection, per-tick simulation, and draw orchestration
//!
//! One tick runs clear -> update -> draw to completion against the
//! scene's owned framebuffer; the host presents the bytes afterwards.
//! Randomness is injected so tests can supply fixed sequences.

mod shapes;

pub use shapes::Shape;

use crate::config::DemoConfig;
use crate::rasterizer::{Color, Framebuffer, Point};

/// Uniform random integers in [min, max], both bounds inclusive.
/// The host backs this with macroquad's RNG; tests use canned sequences.
pub trait RandomSource {
    fn gen_range(&mut self, min: i32, max: i32) -> i32;
}

/// A fixed set of shapes bouncing inside an owned framebuffer.
/// Shape order is draw order: later shapes paint over earlier ones.
pub struct Scene {
    framebuffer: Framebuffer,
    shapes: Vec<Shape>,
    palette: Vec<Color>,
    background: Color,
    rng: Box<dyn RandomSource>,
}

impl Scene {
    pub fn new(
        width: usize,
        height: usize,
        palette: Vec<Color>,
        background: Color,
        shapes: Vec<Shape>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            shapes,
            palette,
            background,
            rng,
        }
    }

    /// Build a scene with randomized shape placement per the config
    pub fn from_config(cfg: &DemoConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let w = cfg.width as i32;
        let h = cfg.height as i32;
        let mut shapes = Vec::new();

        for _ in 0..cfg.boxes {
            let size = rng.gen_range(10, 40) as f32;
            let x = rng.gen_range(0, (w - size as i32).max(0)) as f32;
            let y = rng.gen_range(0, (h - size as i32).max(0)) as f32;
            let speed = rng.gen_range(1, 8) as f32;
            shapes.push(Shape::new_box(x, y, size, size, speed, cfg.friction));
        }

        for _ in 0..cfg.triangles {
            let cx = rng.gen_range(30, (w - 30).max(30)) as f32;
            let cy = rng.gen_range(30, (h - 30).max(30)) as f32;
            let r = rng.gen_range(10, 30) as f32;
            let v = [
                Point::new(cx, cy - r),
                Point::new(cx + r, cy + r),
                Point::new(cx - r, cy + r),
            ];
            let speed = rng.gen_range(1, 6) as f32;
            let filled = rng.gen_range(0, 1) == 1;
            shapes.push(Shape::new_triangle(v, speed, filled));
        }

        for _ in 0..cfg.lines {
            let a = Point::new(rng.gen_range(0, w - 1) as f32, rng.gen_range(0, h - 1) as f32);
            let b = Point::new(rng.gen_range(0, w - 1) as f32, rng.gen_range(0, h - 1) as f32);
            shapes.push(Shape::new_line(a, b));
        }

        Self::new(
            cfg.width,
            cfg.height,
            cfg.palette.clone(),
            cfg.background,
            shapes,
            rng,
        )
    }

    /// Run one tick: clear to the background, advance every shape and
    /// assign it a fresh palette color, then draw them in order.
    pub fn tick(&mut self) {
        self.framebuffer.clear(self.background);

        let w = self.framebuffer.width as f32;
        let h = self.framebuffer.height as f32;
        for shape in self.shapes.iter_mut() {
            shape.advance(w, h);
            if !self.palette.is_empty() {
                let idx = self.rng.gen_range(0, self.palette.len() as i32 - 1) as usize;
                shape.set_color(self.palette[idx]);
            }
        }

        for shape in &self.shapes {
            shape.draw(&mut self.framebuffer);
        }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
