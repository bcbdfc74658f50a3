// What ends up on screen: white background, red square top-left, green
// square bottom-right, blue diagonal across the whole window.

use crate::renderer::{Color, DrawCall, Line, Rect, RendererExt};

pub const WINDOW_WIDTH: usize = 600;
pub const WINDOW_HEIGHT: usize = 300;
pub const WINDOW_TITLE: &str = "my window";

pub const RED_PIXEL: Color = 0xFF_0000;
pub const GREEN_PIXEL: Color = 0x00_FF00;
pub const WHITE_PIXEL: Color = 0xFF_FFFF;
pub const BLUE_PIXEL: Color = 0x00_00FF;

/// Side of both corner squares.
const SQUARE: i32 = 100;

/// Immutable frame description, drawn identically every frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    pub background: Color,
    pub calls: Vec<DrawCall>,
}

impl Scene {
    /// The demo picture for a `width × height` window.
    ///
    /// Corner squares shrink to fit windows smaller than 100 pixels.
    pub fn demo(width: usize, height: usize) -> Self {
        let (w, h) = (width as i32, height as i32);
        let side = SQUARE.min(w).min(h);
        Self {
            background: WHITE_PIXEL,
            calls: vec![
                DrawCall::Rect(Rect {
                    x: w - side,
                    y: h - side,
                    width: side,
                    height: side,
                    color: GREEN_PIXEL,
                }),
                DrawCall::Rect(Rect {
                    x: 0,
                    y: 0,
                    width: side,
                    height: side,
                    color: RED_PIXEL,
                }),
                DrawCall::Line(Line {
                    from: (0, 0),
                    to: (w - 1, h - 1),
                    color: BLUE_PIXEL,
                }),
            ],
        }
    }

    /// Compose one frame with `renderer` and hand it to `submit`.
    pub fn render<R, F, T>(&self, renderer: &mut R, submit: F) -> T
    where
        R: RendererExt + ?Sized,
        F: FnOnce(&[Color], usize, usize) -> T,
    {
        renderer.draw_frame(self.background, &self.calls, submit)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::demo(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_DEPTHS;
    use crate::renderer::{Endian, Image, Software};

    fn frame_of(scene: &Scene, w: usize, h: usize, bpp: u32, endian: Endian) -> Vec<Color> {
        let mut sw = Software::new(Image::new(w, h, bpp, endian).unwrap());
        scene.render(&mut sw, |fb, fw, fh| {
            assert_eq!((fw, fh), (w, h));
            fb.to_vec()
        })
    }

    fn frame(bpp: u32, endian: Endian) -> Vec<Color> {
        frame_of(&Scene::default(), WINDOW_WIDTH, WINDOW_HEIGHT, bpp, endian)
    }

    fn at(fb: &[Color], x: usize, y: usize) -> Color {
        fb[y * WINDOW_WIDTH + x]
    }

    #[test]
    fn demo_frame_layout() {
        for (bpp, endian) in [(32, Endian::Little), (32, Endian::Big), (24, Endian::Big)] {
            let fb = frame(bpp, endian);

            // line is drawn last, so both corners belong to it
            assert_eq!(at(&fb, 0, 0), BLUE_PIXEL);
            assert_eq!(at(&fb, 599, 299), BLUE_PIXEL);

            assert_eq!(at(&fb, 50, 10), RED_PIXEL);
            assert_eq!(at(&fb, 99, 99), RED_PIXEL);
            assert_eq!(at(&fb, 100, 10), WHITE_PIXEL);

            assert_eq!(at(&fb, 520, 290), GREEN_PIXEL);
            assert_eq!(at(&fb, 500, 200), GREEN_PIXEL);
            assert_eq!(at(&fb, 499, 290), WHITE_PIXEL);

            assert_eq!(at(&fb, 300, 10), WHITE_PIXEL);
        }
    }

    #[test]
    fn every_selectable_depth_shows_true_colours() {
        for bpp in SCREEN_DEPTHS {
            for endian in [Endian::Little, Endian::Big] {
                let fb = frame(bpp, endian);
                assert_eq!(at(&fb, 0, 0), BLUE_PIXEL, "{bpp} bpp {endian:?}");
                assert_eq!(at(&fb, 50, 10), RED_PIXEL, "{bpp} bpp {endian:?}");
                assert_eq!(at(&fb, 520, 290), GREEN_PIXEL, "{bpp} bpp {endian:?}");
                assert_eq!(at(&fb, 300, 10), WHITE_PIXEL, "{bpp} bpp {endian:?}");
            }
        }
    }

    #[test]
    fn small_window_shrinks_squares() {
        let fb = frame_of(&Scene::demo(50, 30), 50, 30, 32, Endian::Little);
        let px = |x: usize, y: usize| fb[y * 50 + x];

        assert_eq!(px(5, 25), RED_PIXEL);
        assert_eq!(px(45, 5), GREEN_PIXEL);
        assert_eq!(px(49, 29), BLUE_PIXEL);
        assert!(!fb.contains(&WHITE_PIXEL), "squares cover the whole 50x30 window");
    }

    #[test]
    fn diagonal_has_one_pixel_per_column() {
        let fb = frame(32, Endian::native());
        let blue = fb.iter().filter(|&&c| c == BLUE_PIXEL).count();
        assert_eq!(blue, WINDOW_WIDTH);
    }

    #[test]
    fn draw_order_is_green_red_line() {
        let kinds: Vec<_> = Scene::default()
            .calls
            .iter()
            .map(|c| match c {
                DrawCall::Rect(r) => r.color,
                DrawCall::Line(l) => l.color,
            })
            .collect();
        assert_eq!(kinds, vec![GREEN_PIXEL, RED_PIXEL, BLUE_PIXEL]);
    }
}
