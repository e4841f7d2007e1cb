//! Shape variants and bounce motion
//!
//! A tagged sum type keeps the scene loop variant-agnostic without
//! virtual dispatch: each variant carries its own geometry payload and
//! answers `advance` and `draw` through a match.

use crate::rasterizer::{fill_triangle, stroke_triangle, Color, Framebuffer, Point};

/// A live shape: geometry, velocity, and the color it was last assigned
#[derive(Debug, Clone)]
pub enum Shape {
    /// Axis-aligned box; friction in (0, 1] damps the speed on every
    /// bounce (1.0 = no damping)
    Box {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        vx: f32,
        vy: f32,
        friction: f32,
        color: Color,
    },
    Triangle {
        v: [Point; 3],
        vx: f32,
        vy: f32,
        filled: bool,
        color: Color,
    },
    /// Static decoration; recolored each tick but never moves
    Line { a: Point, b: Point, color: Color },
}

/// Advance one axis of motion by one step. If the projected position
/// would leave [0, bound) the velocity is damped by `friction` and
/// reflected, then the step is taken with the new velocity, so the
/// shape never travels past the wall it hit.
fn bounce_axis(pos: &mut f32, vel: &mut f32, extent: f32, bound: f32, friction: f32) {
    if vel.abs() <= f32::EPSILON {
        return; // stationary
    }
    let next = *pos + *vel;
    if next < 0.0 || next + extent > bound {
        *vel = -(*vel * friction);
    }
    *pos += *vel;
}

impl Shape {
    /// Box seeded with a scalar speed along both axes
    pub fn new_box(x: f32, y: f32, w: f32, h: f32, speed: f32, friction: f32) -> Self {
        Shape::Box {
            x,
            y,
            w,
            h,
            vx: speed,
            vy: speed,
            friction,
            color: Color::WHITE,
        }
    }

    pub fn new_triangle(v: [Point; 3], speed: f32, filled: bool) -> Self {
        Shape::Triangle {
            v,
            vx: speed,
            vy: speed,
            filled,
            color: Color::WHITE,
        }
    }

    pub fn new_line(a: Point, b: Point) -> Self {
        Shape::Line {
            a,
            b,
            color: Color::WHITE,
        }
    }

    /// Current bounding extent as (top-left, bottom-right)
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            Shape::Box { x, y, w, h, .. } => {
                (Point::new(*x, *y), Point::new(*x + *w, *y + *h))
            }
            Shape::Triangle { v, .. } => {
                let min_x = v[0].x.min(v[1].x).min(v[2].x);
                let max_x = v[0].x.max(v[1].x).max(v[2].x);
                let min_y = v[0].y.min(v[1].y).min(v[2].y);
                let max_y = v[0].y.max(v[1].y).max(v[2].y);
                (Point::new(min_x, min_y), Point::new(max_x, max_y))
            }
            Shape::Line { a, b, .. } => (
                Point::new(a.x.min(b.x), a.y.min(b.y)),
                Point::new(a.x.max(b.x), a.y.max(b.y)),
            ),
        }
    }

    /// Advance motion by one step, bouncing off the canvas walls
    pub fn advance(&mut self, width: f32, height: f32) {
        match self {
            Shape::Box {
                x,
                y,
                w,
                h,
                vx,
                vy,
                friction,
                ..
            } => {
                bounce_axis(x, vx, *w, width, *friction);
                bounce_axis(y, vy, *h, height, *friction);
            }
            Shape::Triangle { v, vx, vy, .. } => {
                let min_x = v[0].x.min(v[1].x).min(v[2].x);
                let max_x = v[0].x.max(v[1].x).max(v[2].x);
                let min_y = v[0].y.min(v[1].y).min(v[2].y);
                let max_y = v[0].y.max(v[1].y).max(v[2].y);
                // bounce the bounding box, then translate the vertices
                // by however far it actually moved
                let mut nx = min_x;
                bounce_axis(&mut nx, vx, max_x - min_x, width, 1.0);
                let mut ny = min_y;
                bounce_axis(&mut ny, vy, max_y - min_y, height, 1.0);
                let (dx, dy) = (nx - min_x, ny - min_y);
                for p in v.iter_mut() {
                    p.x += dx;
                    p.y += dy;
                }
            }
            Shape::Line { .. } => {}
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Box { color, .. }
            | Shape::Triangle { color, .. }
            | Shape::Line { color, .. } => *color,
        }
    }

    pub fn set_color(&mut self, new: Color) {
        match self {
            Shape::Box { color, .. }
            | Shape::Triangle { color, .. }
            | Shape::Line { color, .. } => *color = new,
        }
    }

    pub fn draw(&self, fb: &mut Framebuffer) {
        match self {
            Shape::Box {
                x, y, w, h, color, ..
            } => {
                fb.fill_rect(
                    x.round() as i32,
                    y.round() as i32,
                    w.round() as i32,
                    h.round() as i32,
                    *color,
                );
            }
            Shape::Triangle {
                v, filled, color, ..
            } => {
                if *filled {
                    fill_triangle(fb, v[0], v[1], v[2], *color);
                } else {
                    stroke_triangle(fb, v[0], v[1], v[2], *color);
                }
            }
            Shape::Line { a, b, color } => {
                fb.draw_line(*a, *b, *color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_x(shape: &Shape) -> f32 {
        shape.bounds().0.x
    }

    fn box_vx(shape: &Shape) -> f32 {
        match shape {
            Shape::Box { vx, .. } => *vx,
            _ => panic!("not a box"),
        }
    }

    #[test]
    fn test_left_wall_reflection() {
        let mut shape = Shape::new_box(0.0, 20.0, 4.0, 4.0, 0.0, 1.0);
        if let Shape::Box { vx, vy, .. } = &mut shape {
            *vx = -5.0;
            *vy = 0.0;
        }
        shape.advance(100.0, 100.0);
        assert_eq!(box_vx(&shape), 5.0);
    }

    #[test]
    fn test_reflection_applies_friction() {
        let mut shape = Shape::new_box(0.0, 20.0, 4.0, 4.0, 0.0, 0.5);
        if let Shape::Box { vx, vy, .. } = &mut shape {
            *vx = -5.0;
            *vy = 0.0;
        }
        shape.advance(100.0, 100.0);
        assert_eq!(box_vx(&shape), 2.5);
    }

    #[test]
    fn test_bounce_sequence_on_small_canvas() {
        // 10x10 canvas, 4x4 box at (0,0), speed +3 along x only
        let mut shape = Shape::new_box(0.0, 0.0, 4.0, 4.0, 3.0, 1.0);
        if let Shape::Box { vy, .. } = &mut shape {
            *vy = 0.0;
        }

        let mut positions = Vec::new();
        let mut flip_tick = None;
        for tick in 1..=6 {
            let before = box_vx(&shape);
            shape.advance(10.0, 10.0);
            positions.push(box_x(&shape));
            if flip_tick.is_none() && box_vx(&shape) != before {
                flip_tick = Some(tick);
            }
        }

        // 0 -> 3 -> 6, then 6+3+4 would exit, so the speed flips to -3
        // and the box walks back down
        assert_eq!(positions, vec![3.0, 6.0, 3.0, 0.0, 3.0, 6.0]);
        assert_eq!(flip_tick, Some(3));
        assert_eq!(box_vx(&shape).abs(), 3.0);
    }

    #[test]
    fn test_stationary_box_stays_put() {
        let mut shape = Shape::new_box(5.0, 5.0, 4.0, 4.0, 0.0, 1.0);
        shape.advance(100.0, 100.0);
        assert_eq!(box_x(&shape), 5.0);
    }

    #[test]
    fn test_triangle_bounces_as_a_unit() {
        let v = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 4.0),
        ];
        let mut shape = Shape::new_triangle(v, -2.0, true);
        shape.advance(100.0, 100.0);
        // both axes reflect off the top-left corner, so the whole
        // triangle translates by (+2, +2)
        if let Shape::Triangle { v, .. } = &shape {
            assert_eq!(v[0], Point::new(2.0, 2.0));
            assert_eq!(v[1], Point::new(6.0, 2.0));
            assert_eq!(v[2], Point::new(4.0, 6.0));
        }
    }

    #[test]
    fn test_line_never_moves() {
        let mut shape = Shape::new_line(Point::new(1.0, 1.0), Point::new(9.0, 9.0));
        let before = shape.bounds();
        shape.advance(100.0, 100.0);
        assert_eq!(shape.bounds(), before);
    }
}
