//! Error types for pixmap-core
//!
//! Provides a unified error type for buffer construction and pixel access.
//! Geometry on [`Rect`](crate::Rect) is infallible and never produces one
//! of these.

use thiserror::Error;

/// pixmap-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width times height does not fit in the address space
    #[error("invalid pixmap dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Supplied pixel or byte data does not match the requested dimensions
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} pixmap")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Pixel storage could not be reserved
    #[error("memory allocation failed for {width}x{height} pixmap")]
    AllocationFailed { width: u32, height: u32 },
}

/// Result type alias for pixmap-core operations
pub type Result<T> = std::result::Result<T, Error>;
