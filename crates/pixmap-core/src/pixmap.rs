//! Pixmap - The owned BGRA pixel buffer
//!
//! # Memory layout
//!
//! - Pixels are [`Bgra32`], four bytes each, no padding
//! - Rows are stored top to bottom, each row left to right
//! - The row stride is exactly `width` pixels
//!
//! # Ownership model
//!
//! A `Pixmap` owns its storage outright. It is released when the value is
//! dropped, or earlier through [`Pixmap::release`], which leaves an empty
//! pixmap behind and may be called any number of times.
//!
//! A pixmap with a zero width or height is the canonical empty state: it
//! holds no storage and the resampling engine refuses to read or write it.

use crate::error::{Error, Result};
use crate::pixel::{BYTES_PER_PIXEL, Bgra32};
use crate::rect::Rect;

/// Owned 2D array of BGRA pixels
///
/// # Examples
///
/// ```
/// use pixmap_core::{Bgra32, Pixmap};
///
/// let mut pm = Pixmap::new(64, 48).unwrap();
/// pm.set_pixel(3, 2, Bgra32::gray(200)).unwrap();
/// assert_eq!(pm.get_pixel(3, 2), Some(Bgra32::gray(200)));
/// assert_eq!(pm.full_rect().width(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<Bgra32>,
}

impl Pixmap {
    /// Create a pixmap initialized to transparent black.
    ///
    /// A zero `width` or `height` produces an empty pixmap without storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows and
    /// [`Error::AllocationFailed`] if the storage cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Bgra32::TRANSPARENT)
    }

    /// Create a pixmap with every pixel set to `px`.
    ///
    /// # Errors
    ///
    /// Same as [`Pixmap::new`].
    pub fn filled(width: u32, height: u32, px: Bgra32) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed { width, height })?;
        data.resize(len, px);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// An empty pixmap (0x0).
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Wrap existing pixel data laid out row-major with stride `width`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `data.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Bgra32>) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a pixmap from raw B,G,R,A bytes, four per pixel, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `bytes.len() != width * height * 4`.
    pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        let expected = len
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(Error::InvalidDimension { width, height })?;
        if bytes.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed { width, height })?;
        data.extend(
            bytes
                .chunks_exact(BYTES_PER_PIXEL)
                .map(|c| Bgra32::new(c[0], c[1], c[2], c[3])),
        );
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if the pixmap has no pixels to read or write.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    /// Free the pixel storage and return to the empty state.
    ///
    /// Releasing an already empty pixmap does nothing.
    pub fn release(&mut self) {
        *self = Self::empty();
    }

    /// The rect covering the whole pixmap.
    ///
    /// For an empty pixmap the rect is null.
    pub fn full_rect(&self) -> Rect {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        Rect::from_size(0, 0, w, h)
    }

    /// Index of pixel (x, y) in [`Pixmap::data`].
    ///
    /// No bounds check; the caller guarantees `x < width` and `y < height`.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        x as usize + self.width as usize * y as usize
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[Bgra32] {
        &self.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Bgra32] {
        &mut self.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Bgra32] {
        let start = self.index_of(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Get one row of pixels, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Bgra32] {
        let start = self.index_of(0, y);
        let w = self.width as usize;
        &mut self.data[start..start + w]
    }

    /// Get the pixel at (x, y), or `None` outside the pixmap.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Bgra32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(self.index_of(x, y)).copied()
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if (x, y) is outside the pixmap.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Bgra32) -> Result<()> {
        let (width, height) = (self.width, self.height);
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        let idx = self.index_of(x, y);
        self.data[idx] = px;
        Ok(())
    }

    /// Set every pixel to `px`.
    pub fn fill(&mut self, px: Bgra32) {
        self.data.fill(px);
    }

    /// Copy the pixels out as raw B,G,R,A bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.to_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let pm = Pixmap::new(3, 2).unwrap();
        assert_eq!(pm.data().len(), 6);
        assert!(pm.data().iter().all(|&p| p == Bgra32::TRANSPARENT));
        assert!(!pm.is_empty());
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        let pm = Pixmap::new(0, 5).unwrap();
        assert!(pm.is_empty());
        assert!(pm.data().is_empty());
        assert!(pm.full_rect().is_null());
        assert!(Pixmap::empty().is_empty());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut pm = Pixmap::filled(4, 4, Bgra32::gray(9)).unwrap();
        pm.release();
        assert!(pm.is_empty());
        pm.release();
        assert_eq!(pm, Pixmap::empty());
    }

    #[test]
    fn test_oversized_dimensions_fail() {
        let err = Pixmap::new(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimension { .. } | Error::AllocationFailed { .. }
        ));
    }

    #[test]
    fn test_pixel_access_bounds() {
        let mut pm = Pixmap::new(2, 2).unwrap();
        assert!(pm.set_pixel(1, 1, Bgra32::gray(7)).is_ok());
        assert_eq!(pm.get_pixel(1, 1), Some(Bgra32::gray(7)));
        assert_eq!(pm.get_pixel(2, 0), None);
        assert!(matches!(
            pm.set_pixel(0, 2, Bgra32::gray(1)),
            Err(Error::IndexOutOfBounds { x: 0, y: 2, .. })
        ));
    }

    #[test]
    fn test_rows_use_width_stride() {
        let mut pm = Pixmap::new(3, 2).unwrap();
        pm.row_mut(1).fill(Bgra32::gray(50));
        assert_eq!(pm.index_of(0, 1), 3);
        assert!(pm.row(0).iter().all(|&p| p == Bgra32::TRANSPARENT));
        assert!(pm.row(1).iter().all(|&p| p == Bgra32::gray(50)));
    }

    #[test]
    fn test_fill_and_data_mut() {
        let mut pm = Pixmap::new(3, 2).unwrap();
        pm.fill(Bgra32::gray(12));
        assert!(pm.data().iter().all(|&p| p == Bgra32::gray(12)));

        let idx = pm.index_of(2, 1);
        pm.data_mut()[idx] = Bgra32::new(1, 2, 3, 4);
        assert_eq!(pm.get_pixel(2, 1), Some(Bgra32::new(1, 2, 3, 4)));
        assert_eq!(pm.to_bytes()[idx * BYTES_PER_PIXEL..], [1, 2, 3, 4]);

        let mut empty = Pixmap::empty();
        empty.fill(Bgra32::gray(1));
        assert!(empty.data_mut().is_empty());
    }

    #[test]
    fn test_from_pixels_size_mismatch() {
        let err = Pixmap::from_pixels(2, 2, vec![Bgra32::default(); 3]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }
}
