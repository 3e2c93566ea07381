//! Clipping of (destination, source) rect pairs against their buffers
//!
//! Both clippers walk the same edges in the same order: negative starts
//! first (destination, then source), then ends running past the buffer
//! (destination, then source). Moving one rect's edge moves the matching
//! edge of the other rect by the equivalent amount, so the pixel
//! correspondence between the two rects survives the clip.
//!
//! - [`clip_direct`] keeps a 1:1 correspondence (equal-sized rects).
//! - [`clip_scale`] keeps a proportional correspondence: a shift of `n`
//!   pixels becomes `n * other_len / this_len` on the other rect, truncated
//!   toward zero, with lengths taken before any edge moves.
//!
//! Each axis is clipped independently. Both functions are idempotent.

use pixmap_core::{Pixmap, Rect};

/// One axis of a rect, with the extent of the buffer it lives in.
struct Span<'a> {
    lo: &'a mut i32,
    hi: &'a mut i32,
    extent: u32,
}

/// How far `hi` runs past the last index of a buffer of `extent` pixels.
fn overrun(hi: i32, extent: u32) -> i32 {
    let over = i64::from(hi) - i64::from(extent) + 1;
    over.clamp(0, i64::from(i32::MAX)) as i32
}

fn clip_span(
    dst: Span<'_>,
    src: Span<'_>,
    to_src: impl Fn(i32) -> i32,
    to_dst: impl Fn(i32) -> i32,
) {
    if *dst.lo < 0 {
        *src.lo = src.lo.saturating_sub(to_src(*dst.lo));
        *dst.lo = 0;
    }
    if *src.lo < 0 {
        *dst.lo = dst.lo.saturating_sub(to_dst(*src.lo));
        *src.lo = 0;
    }

    let over = overrun(*dst.hi, dst.extent);
    if over > 0 {
        *dst.hi -= over;
        *src.hi = src.hi.saturating_sub(to_src(over));
    }
    let over = overrun(*src.hi, src.extent);
    if over > 0 {
        *src.hi -= over;
        *dst.hi = dst.hi.saturating_sub(to_dst(over));
    }
}

/// `n * num / den` truncated toward zero, clamped to `i32`.
///
/// `num` and `den` are exact rect extents, which may exceed `i32`.
fn proportional(n: i32, num: i64, den: i64) -> i32 {
    let v = i128::from(n) * i128::from(num) / i128::from(den);
    v.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

fn usable(dst: &Pixmap, dst_rect: &Rect, src: &Pixmap, src_rect: &Rect) -> bool {
    !dst.is_empty() && !src.is_empty() && !dst_rect.is_null() && !src_rect.is_null()
}

/// Clip an equal-sized rect pair, shrinking both by the same pixel amounts.
///
/// Returns `true` if both rects are still non-null. Rects that start out
/// null, or buffers that are empty, are left alone and yield `false`.
pub fn clip_direct(
    dst: &Pixmap,
    dst_rect: &mut Rect,
    src: &Pixmap,
    src_rect: &mut Rect,
) -> bool {
    if !usable(dst, dst_rect, src, src_rect) {
        return false;
    }

    clip_span(
        Span {
            lo: &mut dst_rect.x0,
            hi: &mut dst_rect.x1,
            extent: dst.width(),
        },
        Span {
            lo: &mut src_rect.x0,
            hi: &mut src_rect.x1,
            extent: src.width(),
        },
        |n| n,
        |n| n,
    );
    clip_span(
        Span {
            lo: &mut dst_rect.y0,
            hi: &mut dst_rect.y1,
            extent: dst.height(),
        },
        Span {
            lo: &mut src_rect.y0,
            hi: &mut src_rect.y1,
            extent: src.height(),
        },
        |n| n,
        |n| n,
    );

    !dst_rect.is_null() && !src_rect.is_null()
}

/// Clip a differently-sized rect pair, keeping the scale ratio per axis.
///
/// Returns `true` if both rects are still non-null. Rects that start out
/// null, or buffers that are empty, are left alone and yield `false`.
pub fn clip_scale(
    dst: &Pixmap,
    dst_rect: &mut Rect,
    src: &Pixmap,
    src_rect: &mut Rect,
) -> bool {
    if !usable(dst, dst_rect, src, src_rect) {
        return false;
    }

    let (dst_w, dst_h) = dst_rect.extent();
    let (src_w, src_h) = src_rect.extent();

    clip_span(
        Span {
            lo: &mut dst_rect.x0,
            hi: &mut dst_rect.x1,
            extent: dst.width(),
        },
        Span {
            lo: &mut src_rect.x0,
            hi: &mut src_rect.x1,
            extent: src.width(),
        },
        |n| proportional(n, src_w, dst_w),
        |n| proportional(n, dst_w, src_w),
    );
    clip_span(
        Span {
            lo: &mut dst_rect.y0,
            hi: &mut dst_rect.y1,
            extent: dst.height(),
        },
        Span {
            lo: &mut src_rect.y0,
            hi: &mut src_rect.y1,
            extent: src.height(),
        },
        |n| proportional(n, src_h, dst_h),
        |n| proportional(n, dst_h, src_h),
    );

    !dst_rect.is_null() && !src_rect.is_null()
}
