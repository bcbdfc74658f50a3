// Raw off-screen framebuffer with a runtime pixel layout.
// Writers go through `put_pixel`; the window only ever sees `to_rgb`.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::renderer::Color;

/// Byte order of a multi-byte pixel inside the buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endian {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endian {
    /// Byte order of the host CPU.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }
}

/// Things that can go wrong when describing an image.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("unsupported depth: {0} bits per pixel (expected 8, 16, 24 or 32)")]
    UnsupportedDepth(u32),

    #[error("row stride {line_len} is smaller than the {min} bytes a row needs")]
    StrideTooSmall { line_len: usize, min: usize },

    #[error("image has zero width or height")]
    ZeroSized,
}

/// Framebuffer descriptor plus the bytes it describes.
///
/// * `bpp`      – bits per pixel, a multiple of 8 up to 32.
/// * `line_len` – bytes between the start of two consecutive rows; may be
///   larger than `width * bpp / 8` when rows are padded.
/// * `endian`   – order in which the bytes of one pixel are stored.
#[derive(Clone, Debug)]
pub struct Image {
    data: Vec<u8>,
    width: usize,
    height: usize,
    bpp: u32,
    line_len: usize,
    endian: Endian,
}

impl Image {
    /// Allocate a zeroed image with tightly packed rows.
    pub fn new(
        width: usize,
        height: usize,
        bpp: u32,
        endian: Endian,
    ) -> Result<Self, ImageError> {
        let packed = width * (bpp as usize / 8);
        Self::with_stride(width, height, bpp, packed, endian)
    }

    /// Allocate a zeroed image whose rows are `line_len` bytes apart.
    pub fn with_stride(
        width: usize,
        height: usize,
        bpp: u32,
        line_len: usize,
        endian: Endian,
    ) -> Result<Self, ImageError> {
        if !matches!(bpp, 8 | 16 | 24 | 32) {
            return Err(ImageError::UnsupportedDepth(bpp));
        }
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroSized);
        }
        let min = width * (bpp as usize / 8);
        if line_len < min {
            return Err(ImageError::StrideTooSmall { line_len, min });
        }
        Ok(Self {
            data: vec![0; line_len * height],
            width,
            height,
            bpp,
            line_len,
            endian,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bpp(&self) -> u32 {
        self.bpp
    }

    pub fn line_len(&self) -> usize {
        self.line_len
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Raw pixel bytes, `line_len * height` of them.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn bytes_per_pixel(&self) -> usize {
        self.bpp as usize / 8
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y),
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.line_len + x as usize * self.bytes_per_pixel()
    }

    /// Store `color` at `(x, y)`.
    ///
    /// Writes `bpp / 8` bytes starting at `y * line_len + x * bpp / 8`; bits
    /// above `bpp` are dropped. The caller guarantees `0 <= x < width` and
    /// `0 <= y < height`; nothing but the slice guard checks it.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        let n = self.bytes_per_pixel();
        let at = self.offset(x, y);
        let value = u64::from(color & depth_mask(self.bpp));
        let dst = &mut self.data[at..at + n];
        match self.endian {
            Endian::Big => BigEndian::write_uint(dst, value, n),
            Endian::Little => LittleEndian::write_uint(dst, value, n),
        }
    }

    /// Read back the value stored at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        let n = self.bytes_per_pixel();
        let at = self.offset(x, y);
        let src = &self.data[at..at + n];
        let value = match self.endian {
            Endian::Big => BigEndian::read_uint(src, n),
            Endian::Little => LittleEndian::read_uint(src, n),
        };
        value as Color
    }

    /// Convert to row-major `0x00RRGGBB`, the layout `minifb` wants.
    pub fn to_rgb(&self, out: &mut Vec<Color>) {
        out.clear();
        out.reserve(self.width * self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                out.push(self.pixel(x, y) & 0x00FF_FFFF);
            }
        }
    }
}

#[inline]
fn depth_mask(bpp: u32) -> u32 {
    if bpp >= 32 { u32::MAX } else { (1 << bpp) - 1 }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
