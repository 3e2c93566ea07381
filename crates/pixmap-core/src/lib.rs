//! pixmap-core - Basic data structures for BGRA resampling
//!
//! This crate provides the fundamental data structures used by the
//! resampling engine:
//!
//! - [`Bgra32`] - The fixed 4-byte pixel (blue, green, red, alpha)
//! - [`Pixmap`] - An owned, row-major buffer of [`Bgra32`] pixels
//! - [`Rect`] - An inclusive integer rectangle
//!
//! Buffers are plain owned values: no reference counting, no interior
//! mutability. Dropping a [`Pixmap`] releases its storage.

pub mod error;
pub mod pixel;
pub mod pixmap;
pub mod rect;

pub use error::{Error, Result};
pub use pixel::{BYTES_PER_PIXEL, Bgra32, channel};
pub use pixmap::Pixmap;
pub use rect::Rect;
