//! ---------------------------------------------------------------------------
//! CPU renderer
//!
//! * Draws into an [`Image`] whose depth and byte order are picked at
//!   start-up, exactly like a display server hands out an XImage.
//! * `end_frame` converts that image to 0x00RRGGBB once per frame into a
//!   scratch buffer that survives across frames.
//! ---------------------------------------------------------------------------

use crate::renderer::{
    Color, Line, Rect, Renderer,
    image::Image,
    raster::{draw_line, fill_background, fill_rect},
};

pub struct Software {
    image: Image,
    scratch: Vec<Color>,
}

impl Software {
    pub fn new(image: Image) -> Self {
        let scratch = Vec::with_capacity(image.width() * image.height());
        Self { image, scratch }
    }

    /// Borrow the off-screen image as last drawn.
    pub fn image(&self) -> &Image {
        &self.image
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, background: Color) {
        fill_background(&mut self.image, background);
    }

    fn draw_rect(&mut self, rect: &Rect) {
        fill_rect(&mut self.image, rect);
    }

    fn draw_line(&mut self, line: &Line) {
        let (x0, y0) = line.from;
        let (x1, y1) = line.to;
        draw_line(&mut self.image, x0, y0, x1, y1, line.color);
    }

    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Color], usize, usize) -> T,
    {
        self.image.to_rgb(&mut self.scratch);
        submit(&self.scratch, self.image.width(), self.image.height())
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
