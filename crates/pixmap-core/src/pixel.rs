//! BGRA32 - The fixed 4-byte pixel
//!
//! # Byte layout
//!
//! Every pixel is exactly four bytes in the order blue, green, red, alpha,
//! with no padding between channels or between pixels. Callers that read a
//! buffer as raw bytes depend on this order, so the struct is `#[repr(C)]`
//! with `u8` fields only (size 4, alignment 1).

/// Channel offsets within a pixel's four bytes.
pub mod channel {
    /// Blue channel (byte 0)
    pub const BLUE: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Red channel (byte 2)
    pub const RED: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;
}

/// Number of bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A 32-bit pixel stored as blue, green, red, alpha.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bgra32 {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
    /// Alpha channel
    pub a: u8,
}

impl Bgra32 {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a pixel from channels given in storage order (b, g, r, a).
    #[inline]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Create a pixel from channels given in r, g, b, a order.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Create an opaque gray pixel.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v, 255)
    }

    /// Build a pixel from its four storage bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self::new(
            bytes[channel::BLUE],
            bytes[channel::GREEN],
            bytes[channel::RED],
            bytes[channel::ALPHA],
        )
    }

    /// The four storage bytes of this pixel.
    #[inline]
    pub const fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.b, self.g, self.r, self.a]
    }

    /// Largest per-channel absolute difference between two pixels.
    pub fn max_channel_diff(self, other: Self) -> u8 {
        self.to_bytes()
            .iter()
            .zip(other.to_bytes())
            .map(|(&x, y)| x.abs_diff(y))
            .max()
            .unwrap_or(0)
    }
}

impl From<[u8; BYTES_PER_PIXEL]> for Bgra32 {
    fn from(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Bgra32> for [u8; BYTES_PER_PIXEL] {
    fn from(px: Bgra32) -> Self {
        px.to_bytes()
    }
}
