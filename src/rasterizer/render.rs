//! Framebuffer and drawing primitives
//!
//! All writes funnel through `Framebuffer::set_pixel`, which silently
//! ignores out-of-range coordinates. The drawing routines rely on that
//! contract and never clip themselves.

use super::types::{Color, Point};

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel, row-major
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    /// Byte offset of the pixel at (x, y). Callers must bounds-check first.
    pub fn pixel_index(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    /// Inverse of `pixel_index`
    pub fn pixel_location(&self, index: usize) -> (usize, usize) {
        let pixel = index / 4;
        (pixel % self.width, pixel / self.width)
    }

    /// Write a color at (x, y). Out-of-range coordinates are a no-op,
    /// never a fault; the drawing routines call this with coordinates
    /// outside the canvas on purpose.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = self.pixel_index(x as usize, y as usize);
        let bytes = color.to_bytes();
        self.pixels[idx] = bytes[0];
        self.pixels[idx + 1] = bytes[1];
        self.pixels[idx + 2] = bytes[2];
        self.pixels[idx + 3] = bytes[3];
    }

    /// Fill every pixel, used to clear to a background color
    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for i in 0..(self.width * self.height) {
            self.pixels[i * 4] = bytes[0];
            self.pixels[i * 4 + 1] = bytes[1];
            self.pixels[i * 4 + 2] = bytes[2];
            self.pixels[i * 4 + 3] = bytes[3];
        }
    }

    /// Raw RGBA bytes for presentation
    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Draw a line from `a` to `b` by stepping the major axis (the one
    /// with the larger coordinate delta) in whole-pixel increments and
    /// interpolating the other. Both endpoints are always painted.
    pub fn draw_line(&mut self, a: Point, b: Point, color: Color) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;

        if dx == 0.0 && dy == 0.0 {
            let (px, py) = a.rounded();
            self.set_pixel(px, py, color);
            return;
        }

        let x_major = dx.abs() >= dy.abs();

        // Reorder so the major coordinate is non-decreasing, which keeps
        // the stepping loop moving forward regardless of input order.
        let (start, end) = if (x_major && dx < 0.0) || (!x_major && dy < 0.0) {
            (b, a)
        } else {
            (a, b)
        };

        let (major0, major1, minor0) = if x_major {
            (start.x, end.x, start.y)
        } else {
            (start.y, end.y, start.x)
        };
        let slope = if x_major {
            (end.y - start.y) / (end.x - start.x)
        } else {
            (end.x - start.x) / (end.y - start.y)
        };

        let mut steps = 0;
        let mut major = major0;
        let mut last = None;
        while major < major1 {
            let minor = minor0 + slope * steps as f32;
            let (px, py) = if x_major { (major, minor) } else { (minor, major) };
            let cell = (px.round() as i32, py.round() as i32);
            self.set_pixel(cell.0, cell.1, color);
            last = Some(cell);
            steps += 1;
            major = major0 + steps as f32;
        }

        // The strict `<` bound above stops short of the destination, and
        // the last step's rounding can land in a neighboring cell on
        // either axis; make sure the far endpoint is painted.
        if last != Some(end.rounded()) {
            let (px, py) = end.rounded();
            self.set_pixel(px, py, color);
        }
    }

    /// Fill every pixel in [x0, x0+w) x [y0, y0+h). Rectangles are
    /// axis-aligned, so a dense scan is exact.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, color: Color) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Outline the border of the rectangle filled by `fill_rect` with the
    /// same arguments: four segments connecting the corners in order.
    pub fn stroke_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, color: Color) {
        let (x1, y1) = ((x0 + w - 1) as f32, (y0 + h - 1) as f32);
        let (x0, y0) = (x0 as f32, y0 as f32);
        let corners = [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ];
        for i in 0..4 {
            self.draw_line(corners[i], corners[(i + 1) % 4], color);
        }
    }
}

/// Signed area (x2) of the triangle (a, b, p); the sign tells which
/// half-plane p lies in relative to the directed edge a -> b.
fn edge(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Top-left classification for the directed edge a -> b: exactly
/// horizontal and pointing toward +x, or strictly pointing toward -y.
/// Top-left edges own the pixels that land exactly on them; the other
/// edges give them up, so triangles sharing an edge never double-paint
/// or leave a gap along the shared boundary.
fn is_top_left(a: Point, b: Point) -> bool {
    (a.y == b.y && b.x > a.x) || b.y < a.y
}

/// Fill a triangle with half-space (edge function) rasterization and a
/// top-left fill rule. Accepts any winding; collinear vertices paint
/// nothing. Cost is proportional to the bounding-box area, not the
/// canvas.
pub fn fill_triangle(fb: &mut Framebuffer, v0: Point, v1: Point, v2: Point, color: Color) {
    // Normalize winding so the interior is where all edge values are >= 0
    let (v1, v2) = if edge(v0, v1, v2) < 0.0 { (v2, v1) } else { (v1, v2) };

    if edge(v0, v1, v2) == 0.0 {
        return; // degenerate
    }

    let min_x = v0.x.min(v1.x).min(v2.x).floor() as i32;
    let max_x = v0.x.max(v1.x).max(v2.x).ceil() as i32;
    let min_y = v0.y.min(v1.y).min(v2.y).floor() as i32;
    let max_y = v0.y.max(v1.y).max(v2.y).ceil() as i32;

    let bias = |a: Point, b: Point| if is_top_left(a, b) { 0.0 } else { -1.0 };

    // Edge values at the bounding box corner, one per edge, each
    // evaluated against the opposite vertex's edge
    let origin = Point::new(min_x as f32, min_y as f32);
    let mut w0_row = edge(v1, v2, origin) + bias(v1, v2);
    let mut w1_row = edge(v2, v0, origin) + bias(v2, v0);
    let mut w2_row = edge(v0, v1, origin) + bias(v0, v1);

    // Per-pixel steps: +1 in x adds (a.y - b.y), +1 in y adds (b.x - a.x)
    let (w0_dx, w0_dy) = (v1.y - v2.y, v2.x - v1.x);
    let (w1_dx, w1_dy) = (v2.y - v0.y, v0.x - v2.x);
    let (w2_dx, w2_dy) = (v0.y - v1.y, v1.x - v0.x);

    for y in min_y..=max_y {
        let mut w0 = w0_row;
        let mut w1 = w1_row;
        let mut w2 = w2_row;
        for x in min_x..=max_x {
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                fb.set_pixel(x, y, color);
            }
            w0 += w0_dx;
            w1 += w1_dx;
            w2 += w2_dx;
        }
        w0_row += w0_dy;
        w1_row += w1_dy;
        w2_row += w2_dy;
    }
}

/// Outline a triangle with the line rasterizer, no interior fill
pub fn stroke_triangle(fb: &mut Framebuffer, v0: Point, v1: Point, v2: Point, color: Color) {
    fb.draw_line(v0, v1, color);
    fb.draw_line(v1, v2, color);
    fb.draw_line(v2, v0, color);
}
