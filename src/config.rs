//! Command-line options, parsed with `clap` derive.
//!
//! Window size and picture are fixed; only the window title, frame pacing
//! and the off-screen pixel layout can be picked at start-up.

use clap::{Parser, ValueEnum};

use crate::renderer::Endian;
use crate::scene::WINDOW_TITLE;

/// Byte order requested on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ByteOrder {
    Little,
    Big,
    /// Whatever the host CPU uses.
    Native,
}

impl From<ByteOrder> for Endian {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Endian::Little,
            ByteOrder::Big => Endian::Big,
            ByteOrder::Native => Endian::native(),
        }
    }
}

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Opts {
    /// Window title
    #[arg(long, default_value = WINDOW_TITLE)]
    pub title: String,

    /// Frame-rate cap handed to the window
    #[arg(long, value_name = "N", default_value_t = 60)]
    pub fps: usize,

    /// Bits per pixel of the off-screen image
    #[arg(long, value_name = "24|32", default_value_t = 32, value_parser = parse_depth)]
    pub bpp: u32,

    /// Byte order of multi-byte pixels in the off-screen image
    #[arg(long, value_enum, default_value_t = ByteOrder::Native)]
    pub endian: ByteOrder,
}

/// Depths the window can show in true colour.
pub const SCREEN_DEPTHS: [u32; 2] = [24, 32];

fn parse_depth(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(bpp) if SCREEN_DEPTHS.contains(&bpp) => Ok(bpp),
        _ => Err(format!("`{s}` is not one of 24, 32")),
    }
}
