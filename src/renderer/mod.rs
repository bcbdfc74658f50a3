//! Rendering abstraction layer.
//!
//! *Nothing outside this module touches pixel bytes directly.*
//! The scene is a list of [`DrawCall`]s (back-to-front) handed to a type
//! that implements [`Renderer`].
//!
//! * Primitives are rasterised with the integer routines in [`raster`].
//! * A blanket-impl [`RendererExt`] adds `draw_frame` so call-sites stay
//!   short.

/// Pixel colour as handed to the window (0x00RRGGBB).
pub type Color = u32;

/// Axis-aligned filled rectangle covering `[x, x+width) × [y, y+height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

/// One-pixel-wide segment, both endpoints inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub color: Color,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Rect(Rect),
    Line(Line),
}

/// A renderer that owns an internal image for the whole frame.
///
/// `end_frame` lends the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// Clear the internal image to `background`.
    fn begin_frame(&mut self, background: Color);

    /// Fill one rectangle into the internal image.
    fn draw_rect(&mut self, rect: &Rect);

    /// Rasterise one line into the internal image.
    fn draw_line(&mut self, line: &Line);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Color], w, h)` runs exactly once per frame.
    /// * Window callers pass `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Color], usize, usize) -> T;
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F, T>(&mut self, background: Color, calls: &[DrawCall], submit: F) -> T
    where
        F: FnOnce(&[Color], usize, usize) -> T,
    {
        self.begin_frame(background);
        for c in calls {
            match c {
                DrawCall::Rect(r) => self.draw_rect(r),
                DrawCall::Line(l) => self.draw_line(l),
            }
        }
        self.end_frame(submit)
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod image;
pub mod raster;
pub mod software;

pub use image::{Endian, Image, ImageError};
pub use software::Software;
