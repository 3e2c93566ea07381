//! pixmap - BGRA pixel buffers with rectangle-to-rectangle resampling
//!
//! # Overview
//!
//! - [`Pixmap`]: an owned, row-major buffer of 32-bit BGRA pixels
//! - [`Rect`]: an inclusive integer rectangle, possibly off-screen
//! - [`scale`]: copy or resample a rect of one pixmap into a rect of
//!   another, clipping both against their buffers first
//!
//! Stretching uses linear interpolation, shrinking uses a box filter, and
//! the two axes are handled independently.
//!
//! # Example
//!
//! ```
//! use pixmap::{Bgra32, Pixmap, Rect, scale};
//!
//! let src = Pixmap::from_pixels(
//!     2,
//!     1,
//!     vec![Bgra32::new(0, 0, 0, 0), Bgra32::new(255, 255, 255, 255)],
//! )
//! .unwrap();
//! let mut dst = Pixmap::new(4, 1).unwrap();
//!
//! assert!(scale(&mut dst, &Rect::new(0, 0, 3, 0), &src, &src.full_rect()));
//! let blue: Vec<u8> = dst.data().iter().map(|p| p.b).collect();
//! assert_eq!(blue, [0, 84, 169, 255]);
//! ```

// Re-export core types (used by every call)
pub use pixmap_core::*;

// Resampling internals stay behind a module to keep the root small
pub use pixmap_scale as resample;

pub use pixmap_scale::{ScaleError, ScalePath, ScaleResult, scale, try_scale};
