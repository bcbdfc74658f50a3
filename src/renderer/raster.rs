//! Integer rasterisers: line, rectangle, full-canvas clear.
//!
//! Everything here writes through [`Canvas::put_pixel`] and performs no
//! clipping. Callers keep coordinates inside the canvas.

use crate::renderer::{Color, Rect, image::Image};

/// Anything a rasteriser can write pixels into.
pub trait Canvas {
    fn put_pixel(&mut self, x: i32, y: i32, color: Color);
    fn width(&self) -> i32;
    fn height(&self) -> i32;
}

impl Canvas for Image {
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        Image::put_pixel(self, x, y, color);
    }

    fn width(&self) -> i32 {
        Image::width(self) as i32
    }

    fn height(&self) -> i32 {
        Image::height(self) as i32
    }
}

/// Integer Bresenham line from `(x0, y0)` to `(x1, y1)`, both ends included.
///
/// Error term starts at half the major delta (negated when `dy` dominates),
/// so the walk is octant independent and hits exactly
/// `max(|dx|, |dy|) + 1` pixels. Deltas are kept in `i64`, so any pair of
/// `i32` endpoints works.
pub fn draw_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    for (x, y) in line_points(x0, y0, x1, y1) {
        canvas.put_pixel(x, y, color);
    }
}

/// Pixels visited by [`draw_line`], in drawing order.
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> LinePoints {
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    LinePoints {
        x: x0,
        y: y0,
        x1,
        y1,
        dx,
        dy,
        sx: if x0 < x1 { 1 } else { -1 },
        sy: if y0 < y1 { 1 } else { -1 },
        err: (if dx > dy { dx } else { -dy }) / 2,
        remaining: dx.max(dy) as u64 + 1,
    }
}

/// Iterator state of one Bresenham walk.
#[derive(Clone, Debug)]
pub struct LinePoints {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    remaining: u64,
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // every visited coordinate lies between two i32 endpoints
        let here = (self.x as i32, self.y as i32);
        self.remaining -= 1;
        if self.x == self.x1 && self.y == self.y1 {
            self.remaining = 0;
            return Some(here);
        }
        let e2 = self.err;
        if e2 > -self.dx {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dy {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(here)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Fill `rect` row by row. Non-positive width or height draws nothing.
pub fn fill_rect<C: Canvas + ?Sized>(canvas: &mut C, rect: &Rect) {
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            canvas.put_pixel(x, y, rect.color);
        }
    }
}

/// Paint every pixel of the canvas with `color`.
pub fn fill_background<C: Canvas + ?Sized>(canvas: &mut C, color: Color) {
    let (w, h) = (canvas.width(), canvas.height());
    fill_rect(
        canvas,
        &Rect {
            x: 0,
            y: 0,
            width: w,
            height: h,
            color,
        },
    );
}

/*──────────────────────────────── Tests ───────────────────────────────*/
