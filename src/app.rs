//! Window lifetime and the event loop.
//!
//! The session owns the window as an `Option`: `Some` while it is open,
//! `None` once a handler tore it down. The loop keeps rendering until no
//! window is left.

use minifb::{Key, KeyRepeat, Window};
use tracing::{debug, info, trace};

use crate::renderer::{Color, Software};
use crate::scene::Scene;

/// Something that can show a finished frame and report input.
pub trait Surface {
    /// `false` once the user asked the window manager to close it.
    fn is_open(&self) -> bool;

    /// Keys that went down since the last presented frame.
    fn keys_pressed(&self) -> Vec<Key>;

    /// Blit `fb` (0x00RRGGBB, row-major) and pump the platform event queue.
    fn present(&mut self, fb: &[Color], width: usize, height: usize)
    -> Result<(), minifb::Error>;
}

impl Surface for Window {
    fn is_open(&self) -> bool {
        Window::is_open(self)
    }

    fn keys_pressed(&self) -> Vec<Key> {
        self.get_keys_pressed(KeyRepeat::No)
    }

    fn present(
        &mut self,
        fb: &[Color],
        width: usize,
        height: usize,
    ) -> Result<(), minifb::Error> {
        self.update_with_buffer(fb, width, height)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The window manager destroyed (or is about to destroy) the window.
    DestroyNotify,
    KeyPress(Key),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}

pub struct Session<S: Surface> {
    surface: Option<S>,
    renderer: Software,
    scene: Scene,
    events: Vec<Event>,
    frames: u64,
}

impl<S: Surface> Session<S> {
    pub fn new(surface: S, renderer: Software, scene: Scene) -> Self {
        Self {
            surface: Some(surface),
            renderer,
            scene,
            events: Vec::new(),
            frames: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_some()
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /*──────────────────────────── handlers ───────────────────────────*/

    pub fn handle_destroy_notify(&mut self) {
        if self.surface.take().is_some() {
            info!("window closed by the window manager");
        }
    }

    pub fn handle_keypress(&mut self, key: Key) {
        if key == Key::Escape && self.surface.take().is_some() {
            info!("escape pressed, destroying window");
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        debug!(?event, "dispatch");
        match event {
            Event::DestroyNotify => self.handle_destroy_notify(),
            Event::KeyPress(key) => self.handle_keypress(key),
        }
    }

    /*──────────────────────────── frame ──────────────────────────────*/

    /// Compose and present one frame. `Ok(false)` when there is no window.
    pub fn render(&mut self) -> Result<bool, AppError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };
        self.scene
            .render(&mut self.renderer, |fb, w, h| surface.present(fb, w, h))?;
        self.frames += 1;
        trace!(frame = self.frames, "presented");
        Ok(true)
    }

    /// Translate the surface state into events, in the order they apply.
    fn poll_events(&mut self) {
        self.events.clear();
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        if !surface.is_open() {
            self.events.push(Event::DestroyNotify);
        }
        self.events
            .extend(surface.keys_pressed().into_iter().map(Event::KeyPress));
    }

    /// Render / poll / dispatch until the window is gone.
    ///
    /// Returns the number of frames presented.
    pub fn run(&mut self) -> Result<u64, AppError> {
        while self.render()? {
            self.poll_events();
            let events = std::mem::take(&mut self.events);
            for &ev in &events {
                self.dispatch(ev);
            }
            self.events = events;
        }
        info!(frames = self.frames, "event loop finished");
        Ok(self.frames)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Endian, Image};
    use crate::scene::{BLUE_PIXEL, WINDOW_HEIGHT, WINDOW_WIDTH};
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    /// What the fake window saw, shared with the test after the session
    /// dropped the surface.
    #[derive(Default)]
    struct Log {
        presented: usize,
        first_pixel: Option<Color>,
        dropped: bool,
    }

    /// Scripted window: one entry per presented frame, giving the close
    /// flag and keys reported after that frame.
    struct FakeSurface {
        script: VecDeque<(bool, Vec<Key>)>,
        current: (bool, Vec<Key>),
        log: Rc<RefCell<Log>>,
    }

    impl FakeSurface {
        fn new(script: Vec<(bool, Vec<Key>)>, log: Rc<RefCell<Log>>) -> Self {
            Self {
                script: script.into(),
                current: (true, Vec::new()),
                log,
            }
        }
    }

    impl Drop for FakeSurface {
        fn drop(&mut self) {
            self.log.borrow_mut().dropped = true;
        }
    }

    impl Surface for FakeSurface {
        fn is_open(&self) -> bool {
            self.current.0
        }

        fn keys_pressed(&self) -> Vec<Key> {
            self.current.1.clone()
        }

        fn present(&mut self, fb: &[Color], w: usize, h: usize) -> Result<(), minifb::Error> {
            assert_eq!(fb.len(), w * h);
            let mut log = self.log.borrow_mut();
            log.presented += 1;
            log.first_pixel.get_or_insert(fb[0]);
            // unscripted frames keep the window open with no input
            self.current = self.script.pop_front().unwrap_or((true, Vec::new()));
            Ok(())
        }
    }

    fn session(script: Vec<(bool, Vec<Key>)>) -> (Session<FakeSurface>, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let img = Image::new(WINDOW_WIDTH, WINDOW_HEIGHT, 32, Endian::Little).unwrap();
        let s = Session::new(
            FakeSurface::new(script, log.clone()),
            Software::new(img),
            Scene::default(),
        );
        (s, log)
    }

    #[test]
    fn escape_tears_window_down() {
        let (mut s, log) = session(vec![
            (true, vec![]),
            (true, vec![Key::A, Key::Space]),
            (true, vec![Key::Escape]),
        ]);
        assert_eq!(s.run().unwrap(), 3);
        assert!(!s.is_open());

        let log = log.borrow();
        assert!(log.dropped, "surface should be dropped on teardown");
        assert_eq!(log.presented, 3);
        assert_eq!(log.first_pixel, Some(BLUE_PIXEL));
    }

    #[test]
    fn destroy_notify_ends_loop() {
        let (mut s, log) = session(vec![(true, vec![]), (false, vec![])]);
        assert_eq!(s.run().unwrap(), 2);
        assert!(log.borrow().dropped);
    }

    #[test]
    fn other_keys_are_ignored() {
        let (mut s, log) = session(vec![]);
        s.handle_keypress(Key::Enter);
        assert!(s.is_open());
        assert!(!log.borrow().dropped);
    }

    #[test]
    fn render_after_teardown_is_a_no_op() {
        let (mut s, log) = session(vec![]);
        assert!(s.render().unwrap());
        s.dispatch(Event::DestroyNotify);
        assert!(!s.render().unwrap());
        assert_eq!(log.borrow().presented, 1);
        assert_eq!(s.frames(), 1);

        // a second teardown is harmless
        s.dispatch(Event::KeyPress(Key::Escape));
        assert!(!s.is_open());
    }
}
