//! pixmap-scale - Clipped rect-to-rect resampling
//!
//! This crate copies or resamples a rectangle of one [`Pixmap`] into a
//! rectangle of another:
//!
//! - Clipping of rect pairs against both pixmaps, 1:1 or proportional
//! - Linear interpolation for stretching (12-bit fixed point)
//! - Box filtering for shrinking (11-bit fixed point)
//! - Independent horizontal and vertical factors, composed through a
//!   temporary pixmap when both axes change
//!
//! [`scale`] is the entry point; it reports plain success or failure.
//! [`try_scale`] returns the kernel sequence or the reason it failed.
//!
//! [`Pixmap`]: pixmap_core::Pixmap

pub mod clip;
mod error;
pub mod resample;
pub mod scale;
pub mod taps;

pub use clip::{clip_direct, clip_scale};
pub use error::{ScaleError, ScaleResult};
pub use resample::{copy_rect, scale_down_x, scale_down_y, scale_up_x, scale_up_y};
pub use scale::{ScalePath, scale, try_scale};
pub use taps::{BoxTap, BoxTaps, DOWN_SCALE, LinearTap, LinearTaps, UP_SCALE};
