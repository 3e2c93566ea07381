//! Rect-to-rect scaling
//!
//! [`try_scale`] decides how a source rect maps onto a destination rect and
//! runs the matching kernels:
//!
//! 1. Equal sizes: clip 1:1 and copy. A pair clipped to nothing, an empty
//!    pixmap or a null rect is still a success.
//! 2. Different sizes: clip proportionally, then classify each axis as
//!    up, down, or unchanged and run one kernel, or two kernels through a
//!    temporary pixmap. Shrinking always happens in the first pass.
//!
//! | x \ y | up | down | same |
//! |---|---|---|---|
//! | up | up-x, up-y | down-y, up-x | up-x |
//! | down | down-x, up-y | down-x, down-y | down-x |
//! | same | up-y | down-y | unsupported |
//!
//! The temporary pixmap is owned by the call and dropped on every exit.

use crate::clip::{clip_direct, clip_scale};
use crate::error::{ScaleError, ScaleResult};
use crate::resample::{copy_rect, scale_down_x, scale_down_y, scale_up_x, scale_up_y};
use pixmap_core::{Pixmap, Rect};
use std::cmp::Ordering;

/// The kernel sequence a scale call ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalePath {
    /// Equal sizes, nothing to copy: empty input or clipped to nothing
    ClippedAway,
    /// Equal sizes, row copy
    Direct,
    /// Horizontal stretch only
    UpX,
    /// Horizontal shrink only
    DownX,
    /// Vertical stretch only
    UpY,
    /// Vertical shrink only
    DownY,
    /// Stretch x into a temporary, then stretch y
    UpXUpY,
    /// Shrink x into a temporary, then shrink y
    DownXDownY,
    /// Shrink x into a temporary, then stretch y
    DownXUpY,
    /// Shrink y into a temporary, then stretch x
    DownYUpX,
}

impl ScalePath {
    /// Number of temporary pixmaps the path allocates.
    pub fn temporaries(self) -> usize {
        match self {
            Self::UpXUpY | Self::DownXDownY | Self::DownXUpY | Self::DownYUpX => 1,
            _ => 0,
        }
    }
}

/// Scale `src_rect` of `src` into `dst_rect` of `dst`.
///
/// Returns `true` on success, including an equal-sized pair with nothing
/// to copy. On `false` the destination must not be
/// trusted: a two-pass scale may have written nothing or everything.
/// The rects are never modified.
///
/// # Examples
///
/// ```
/// use pixmap_core::{Bgra32, Pixmap};
/// use pixmap_scale::scale;
///
/// let src = Pixmap::filled(4, 4, Bgra32::new(10, 20, 30, 255)).unwrap();
/// let mut dst = Pixmap::new(2, 2).unwrap();
/// let (dr, sr) = (dst.full_rect(), src.full_rect());
/// assert!(scale(&mut dst, &dr, &src, &sr));
/// assert!(dst.data().iter().all(|&p| p == Bgra32::new(10, 20, 30, 255)));
/// ```
pub fn scale(dst: &mut Pixmap, dst_rect: &Rect, src: &Pixmap, src_rect: &Rect) -> bool {
    match try_scale(dst, dst_rect, src, src_rect) {
        Ok(path) => {
            log::trace!("scale {dst_rect:?} <- {src_rect:?}: {path:?}");
            true
        }
        Err(err) => {
            log::debug!("scale {dst_rect:?} <- {src_rect:?} failed: {err}");
            false
        }
    }
}

/// Scale `src_rect` of `src` into `dst_rect` of `dst`, reporting the path.
///
/// # Errors
///
/// - [`ScaleError::EmptyInput`] if a pixmap is empty or a rect is null and
///   the rects differ in size; equal-sized rects report
///   [`ScalePath::ClippedAway`] instead
/// - [`ScaleError::RectTooLarge`] if a rect is wider or taller than `i32::MAX`
/// - [`ScaleError::ClippedAway`] if proportional clipping leaves nothing
/// - [`ScaleError::UnsupportedCombination`] if clipping makes both axes equal
/// - [`ScaleError::Core`] if the temporary pixmap cannot be allocated
pub fn try_scale(
    dst: &mut Pixmap,
    dst_rect: &Rect,
    src: &Pixmap,
    src_rect: &Rect,
) -> ScaleResult<ScalePath> {
    let same_size = dst_rect.extent() == src_rect.extent();
    if let Some(what) = empty_input(dst, dst_rect, src, src_rect) {
        if same_size {
            return Ok(ScalePath::ClippedAway);
        }
        return Err(ScaleError::EmptyInput(what));
    }
    for rect in [dst_rect, src_rect] {
        if !rect.fits_i32() {
            return Err(ScaleError::RectTooLarge(*rect));
        }
    }

    let mut dr = *dst_rect;
    let mut sr = *src_rect;

    if same_size {
        if !clip_direct(dst, &mut dr, src, &mut sr) {
            return Ok(ScalePath::ClippedAway);
        }
        copy_rect(dst, &dr, src, &sr);
        return Ok(ScalePath::Direct);
    }

    if !clip_scale(dst, &mut dr, src, &mut sr) {
        return Err(ScaleError::ClippedAway { dst: dr, src: sr });
    }

    let x = dr.width().cmp(&sr.width());
    let y = dr.height().cmp(&sr.height());
    let path = match (x, y) {
        (Ordering::Greater, Ordering::Greater) => {
            let (tmp, tr) = temporary(dr.width(), sr.height())?;
            two_pass(dst, &dr, src, &sr, tmp, &tr, scale_up_x, scale_up_y);
            ScalePath::UpXUpY
        }
        (Ordering::Less, Ordering::Less) => {
            let (tmp, tr) = temporary(dr.width(), sr.height())?;
            two_pass(dst, &dr, src, &sr, tmp, &tr, scale_down_x, scale_down_y);
            ScalePath::DownXDownY
        }
        (Ordering::Less, Ordering::Greater) => {
            let (tmp, tr) = temporary(dr.width(), sr.height())?;
            two_pass(dst, &dr, src, &sr, tmp, &tr, scale_down_x, scale_up_y);
            ScalePath::DownXUpY
        }
        (Ordering::Greater, Ordering::Less) => {
            let (tmp, tr) = temporary(sr.width(), dr.height())?;
            two_pass(dst, &dr, src, &sr, tmp, &tr, scale_down_y, scale_up_x);
            ScalePath::DownYUpX
        }
        (Ordering::Greater, Ordering::Equal) => {
            scale_up_x(dst, &dr, src, &sr);
            ScalePath::UpX
        }
        (Ordering::Less, Ordering::Equal) => {
            scale_down_x(dst, &dr, src, &sr);
            ScalePath::DownX
        }
        (Ordering::Equal, Ordering::Greater) => {
            scale_up_y(dst, &dr, src, &sr);
            ScalePath::UpY
        }
        (Ordering::Equal, Ordering::Less) => {
            scale_down_y(dst, &dr, src, &sr);
            ScalePath::DownY
        }
        (Ordering::Equal, Ordering::Equal) => {
            return Err(ScaleError::UnsupportedCombination {
                dst_w: dr.width(),
                dst_h: dr.height(),
                src_w: sr.width(),
                src_h: sr.height(),
            });
        }
    };
    Ok(path)
}

type Kernel = fn(&mut Pixmap, &Rect, &Pixmap, &Rect);

/// Name the first empty pixmap or null rect, if any.
fn empty_input(
    dst: &Pixmap,
    dst_rect: &Rect,
    src: &Pixmap,
    src_rect: &Rect,
) -> Option<&'static str> {
    if dst.is_empty() {
        Some("destination pixmap")
    } else if src.is_empty() {
        Some("source pixmap")
    } else if dst_rect.is_null() {
        Some("destination rect")
    } else if src_rect.is_null() {
        Some("source rect")
    } else {
        None
    }
}

/// A `width` x `height` scratch pixmap and the rect covering it.
fn temporary(width: i32, height: i32) -> ScaleResult<(Pixmap, Rect)> {
    let tmp = Pixmap::new(width as u32, height as u32)?;
    let rect = tmp.full_rect();
    Ok((tmp, rect))
}

/// `first` from source into the temporary, `second` from it into the
/// destination. The temporary is dropped on return.
#[allow(clippy::too_many_arguments)]
fn two_pass(
    dst: &mut Pixmap,
    dst_rect: &Rect,
    src: &Pixmap,
    src_rect: &Rect,
    mut tmp: Pixmap,
    tmp_rect: &Rect,
    first: Kernel,
    second: Kernel,
) {
    first(&mut tmp, tmp_rect, src, src_rect);
    second(dst, dst_rect, &tmp, tmp_rect);
}
