//! Single-axis resampling kernels
//!
//! Each kernel reads `src_rect` of `src` and writes `dst_rect` of `dst`,
//! changing the size along one axis only.
//!
//! # Preconditions
//!
//! All kernels assume what the orchestrator guarantees after clipping:
//!
//! - both rects are non-null and lie inside their buffers
//! - the rects agree in size along the axis the kernel does not scale
//!
//! A rect outside its buffer makes the kernel panic on slice indexing; it
//! never reads or writes outside the buffers.
//!
//! | Kernel | Axis | Filter | Walk |
//! |---|---|---|---|
//! | [`scale_up_x`] | x | linear, 1/4096 | rows top to bottom, left to right |
//! | [`scale_up_y`] | y | linear, 1/4096 | rows bottom to top |
//! | [`scale_down_x`] | x | box, 1/2048 | rows top to bottom |
//! | [`scale_down_y`] | y | box, 1/2048 | rows top to bottom |
//! | [`copy_rect`] | none | copy | rows top to bottom |

use crate::taps::{BoxSum, BoxTaps, LinearTaps};
use pixmap_core::{Pixmap, Rect};

/// Origin and size of a clipped rect in buffer indices.
#[derive(Debug, Clone, Copy)]
struct Extent {
    x: usize,
    y: u32,
    w: usize,
    h: u32,
}

impl Extent {
    fn of(r: &Rect) -> Self {
        debug_assert!(!r.is_null() && r.x0 >= 0 && r.y0 >= 0, "unclipped rect {r:?}");
        Self {
            x: r.x0 as usize,
            y: r.y0 as u32,
            w: r.width() as usize,
            h: r.height() as u32,
        }
    }

    /// Column range of this rect within one buffer row.
    fn cols(&self) -> std::ops::Range<usize> {
        self.x..self.x + self.w
    }

    /// Buffer row of the `i`-th rect row counted from the bottom.
    fn row_from_bottom(&self, i: usize) -> u32 {
        self.y + self.h - 1 - i as u32
    }
}

/// Copy `src_rect` into an equal-sized `dst_rect`, row by row.
///
/// # Panics
///
/// Panics if either rect lies outside its buffer.
pub fn copy_rect(dst: &mut Pixmap, dst_rect: &Rect, src: &Pixmap, src_rect: &Rect) {
    let d = Extent::of(dst_rect);
    let s = Extent::of(src_rect);
    debug_assert_eq!((d.w, d.h), (s.w, s.h));

    for i in 0..d.h {
        dst.row_mut(d.y + i)[d.cols()].copy_from_slice(&src.row(s.y + i)[s.cols()]);
    }
}

/// Stretch horizontally with linear interpolation.
///
/// Each destination row starts with an exact copy of the first source
/// column and ends with an exact copy of the last one.
///
/// # Panics
///
/// Panics if either rect lies outside its buffer.
pub fn scale_up_x(dst: &mut Pixmap, dst_rect: &Rect, src: &Pixmap, src_rect: &Rect) {
    let d = Extent::of(dst_rect);
    let s = Extent::of(src_rect);
    debug_assert_eq!(d.h, s.h);

    let taps = LinearTaps::new(s.w, d.w);
    for i in 0..d.h {
        let src_line = &src.row(s.y + i)[s.cols()];
        let dst_line = &mut dst.row_mut(d.y + i)[d.cols()];
        for (out, tap) in dst_line.iter_mut().zip(taps.taps()) {
            *out = if tap.frac == 0 {
                src_line[tap.index]
            } else {
                tap.blend(src_line[tap.index], src_line[tap.index + 1])
            };
        }
    }
}

/// Stretch vertically with linear interpolation.
///
/// Rows are produced from the bottom of the rect upward, blending each
/// source row with the row above it, so the bottom destination row is an
/// exact copy of the bottom source row. The top destination row is an
/// exact copy of the top source row.
///
/// # Panics
///
/// Panics if either rect lies outside its buffer.
pub fn scale_up_y(dst: &mut Pixmap, dst_rect: &Rect, src: &Pixmap, src_rect: &Rect) {
    let d = Extent::of(dst_rect);
    let s = Extent::of(src_rect);
    debug_assert_eq!(d.w, s.w);

    let taps = LinearTaps::new(s.h as usize, d.h as usize);
    for (i, tap) in taps.taps().iter().enumerate() {
        let src_y = s.row_from_bottom(tap.index);
        let dst_line = &mut dst.row_mut(d.row_from_bottom(i))[d.cols()];
        let src_line = &src.row(src_y)[s.cols()];
        if tap.frac == 0 {
            dst_line.copy_from_slice(src_line);
            continue;
        }
        let above = &src.row(src_y - 1)[s.cols()];
        for ((out, &a), &b) in dst_line.iter_mut().zip(src_line).zip(above) {
            *out = tap.blend(a, b);
        }
    }
}

/// Shrink horizontally with a box filter.
///
/// # Panics
///
/// Panics if either rect lies outside its buffer.
pub fn scale_down_x(dst: &mut Pixmap, dst_rect: &Rect, src: &Pixmap, src_rect: &Rect) {
    let d = Extent::of(dst_rect);
    let s = Extent::of(src_rect);
    debug_assert_eq!(d.h, s.h);

    let taps = BoxTaps::new(s.w, d.w);
    for i in 0..d.h {
        let src_line = &src.row(s.y + i)[s.cols()];
        let dst_line = &mut dst.row_mut(d.y + i)[d.cols()];
        for (out, span) in dst_line.iter_mut().zip(taps.spans()) {
            let mut sum = BoxSum::default();
            for tap in span {
                sum.add(src_line[tap.index], tap.weight);
            }
            *out = sum.average(taps.step());
        }
    }
}

/// Shrink vertically with a box filter.
///
/// # Panics
///
/// Panics if either rect lies outside its buffer.
pub fn scale_down_y(dst: &mut Pixmap, dst_rect: &Rect, src: &Pixmap, src_rect: &Rect) {
    let d = Extent::of(dst_rect);
    let s = Extent::of(src_rect);
    debug_assert_eq!(d.w, s.w);

    let taps = BoxTaps::new(s.h as usize, d.h as usize);
    let mut sums = vec![BoxSum::default(); d.w];
    for (i, span) in (0u32..).zip(taps.spans()) {
        sums.fill(BoxSum::default());
        for tap in span {
            let src_line = &src.row(s.y + tap.index as u32)[s.cols()];
            for (sum, &px) in sums.iter_mut().zip(src_line) {
                sum.add(px, tap.weight);
            }
        }
        let dst_line = &mut dst.row_mut(d.y + i)[d.cols()];
        for (out, sum) in dst_line.iter_mut().zip(&sums) {
            *out = sum.average(taps.step());
        }
    }
}
