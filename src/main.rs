//! Fixed-size window showing two squares and a diagonal.
//!
//! ```bash
//! cargo run --release -- [--bpp 24] [--endian big]
//! RUST_LOG=debug cargo run      # log every dispatched event
//! ```
//!
//! Controls: Esc = quit (closing the window works too)

use clap::Parser;
use minifb::{Window, WindowOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pixwin::{
    app::Session,
    config::Opts,
    renderer::{Endian, Image, Software},
    scene::{Scene, WINDOW_HEIGHT, WINDOW_WIDTH},
};

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ─────────── off-screen image ────────────
    let image = Image::new(
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        opts.bpp,
        Endian::from(opts.endian),
    )?;
    info!(
        width = image.width(),
        height = image.height(),
        bpp = image.bpp(),
        line_len = image.line_len(),
        endian = ?image.endian(),
        "image allocated"
    );

    // ─────────── window ────────────
    let mut window = Window::new(
        &opts.title,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WindowOptions::default(),
    )?;
    window.set_target_fps(opts.fps);

    let mut session = Session::new(window, Software::new(image), Scene::default());
    let frames = session.run()?;

    info!(frames, "bye");
    Ok(())
}
