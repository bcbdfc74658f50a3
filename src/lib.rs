//! Fixed-size software framebuffer window.
//!
//! Draws a white background, two solid squares and a diagonal line into an
//! off-screen [`renderer::image::Image`] every frame and blits it to a
//! `minifb` window. Escape or closing the window tears it down.

pub mod app;
pub mod config;
pub mod renderer;
pub mod scene;
