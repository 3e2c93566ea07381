//! Fixed-point sample tables for one resampling axis
//!
//! The digital differential analyzer that walks a source axis depends only
//! on the two axis lengths, so it is run once per pass and the resulting
//! taps are applied to every row (or column).
//!
//! # Upscale: linear interpolation, 12-bit fraction
//!
//! The step per destination sample is `((src_len - 1) << 12) / (dst_len - 1)`.
//! The accumulator starts at 0 and grows by one step per sample; each time it
//! reaches 4096 it drops by 4096 and the source index advances. A sample whose
//! fraction is 0 is a verbatim copy. The last destination sample is pinned to
//! the last source sample so both ends of the axis are exact copies.
//!
//! # Downscale: box filter, 11-bit coverage
//!
//! The step per destination sample is `(src_len << 11) / dst_len`. A
//! destination sample takes the unused part of the source sample carried over
//! from its predecessor, then whole source samples at weight 2048, then the
//! leading part of the next source sample, which it carries forward. The
//! weights of every destination sample add up to exactly one step.

use pixmap_core::Bgra32;

/// Fraction bits of the upscale accumulator.
pub const UP_SCALE_BITS: u32 = 12;
/// One whole source sample in upscale units (4096).
pub const UP_SCALE: u32 = 1 << UP_SCALE_BITS;
/// Fraction bits of the downscale accumulator.
pub const DOWN_SCALE_BITS: u32 = 11;
/// One whole source sample in downscale units (2048).
pub const DOWN_SCALE: u32 = 1 << DOWN_SCALE_BITS;

/// One interpolated destination sample: `src[index]` blended toward
/// `src[index + 1]` by `frac / 4096`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearTap {
    /// Source sample offset from the start of the axis
    pub index: usize,
    /// Weight of the next sample, in 1/4096 units; 0 means copy
    pub frac: u32,
}

impl LinearTap {
    /// Blend `a` (this sample) toward `b` (its neighbor).
    #[inline]
    pub fn blend(&self, a: Bgra32, b: Bgra32) -> Bgra32 {
        let inv = UP_SCALE - self.frac;
        let frac = self.frac;
        let mix =
            |p: u8, q: u8| ((u32::from(p) * inv + u32::from(q) * frac) >> UP_SCALE_BITS) as u8;
        Bgra32::new(mix(a.b, b.b), mix(a.g, b.g), mix(a.r, b.r), mix(a.a, b.a))
    }
}

/// Linear interpolation taps for stretching `src_len` samples to `dst_len`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearTaps {
    step: u32,
    taps: Vec<LinearTap>,
}

impl LinearTaps {
    /// Build the taps for one axis.
    ///
    /// Intended for `dst_len > src_len >= 1`. No tap with a non-zero
    /// fraction ever points at the last source sample, so a reader never
    /// looks past `src_len - 1`.
    pub fn new(src_len: usize, dst_len: usize) -> Self {
        if dst_len == 0 || src_len == 0 {
            return Self {
                step: 0,
                taps: Vec::new(),
            };
        }
        let step = if dst_len > 1 {
            let s = ((src_len as u64 - 1) << UP_SCALE_BITS) / (dst_len as u64 - 1);
            u32::try_from(s).unwrap_or(u32::MAX)
        } else {
            0
        };

        let mut taps = Vec::with_capacity(dst_len);
        let mut acc: u64 = 0;
        let mut index = 0usize;
        for _ in 0..dst_len {
            taps.push(LinearTap {
                index,
                frac: acc as u32,
            });
            acc += u64::from(step);
            while acc >= u64::from(UP_SCALE) {
                acc -= u64::from(UP_SCALE);
                index += 1;
            }
        }
        if dst_len > 1 {
            taps[dst_len - 1] = LinearTap {
                index: src_len - 1,
                frac: 0,
            };
        }

        Self { step, taps }
    }

    /// Accumulator increment per destination sample.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// One tap per destination sample.
    pub fn taps(&self) -> &[LinearTap] {
        &self.taps
    }
}

/// One weighted source sample inside a box-filter span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxTap {
    /// Source sample offset from the start of the axis
    pub index: usize,
    /// Coverage in 1/2048 units (at most 2048)
    pub weight: u32,
}

/// Box-filter spans for shrinking `src_len` samples to `dst_len`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxTaps {
    step: u64,
    taps: Vec<BoxTap>,
    /// `ends[k]` is one past the last tap of destination sample `k`
    ends: Vec<usize>,
}

impl BoxTaps {
    /// Build the spans for one axis.
    ///
    /// Intended for `dst_len <= src_len`; every span covers a positive
    /// weight and no tap points past `src_len - 1`.
    pub fn new(src_len: usize, dst_len: usize) -> Self {
        debug_assert!(dst_len <= src_len, "box filter only shrinks");
        let mut taps = Vec::new();
        let mut ends = Vec::with_capacity(dst_len);
        if dst_len == 0 {
            return Self {
                step: 0,
                taps,
                ends,
            };
        }

        let whole = u64::from(DOWN_SCALE);
        let step = ((src_len as u64) << DOWN_SCALE_BITS) / dst_len as u64;
        // Coverage of source sample `index` already taken by the previous span
        let mut acc: u64 = 0;
        let mut index = 0usize;
        for _ in 0..dst_len {
            let mut need = step;
            if acc != 0 {
                let carried = whole - acc;
                taps.push(BoxTap {
                    index,
                    weight: carried as u32,
                });
                need -= carried;
                index += 1;
            }
            while need >= whole {
                taps.push(BoxTap {
                    index,
                    weight: DOWN_SCALE,
                });
                need -= whole;
                index += 1;
            }
            if need != 0 {
                taps.push(BoxTap {
                    index,
                    weight: need as u32,
                });
            }
            acc = need;
            ends.push(taps.len());
        }
        debug_assert!(taps.iter().all(|t| t.index < src_len));

        Self { step, taps, ends }
    }

    /// Total weight of every span.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Number of destination samples.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Check if there are no destination samples.
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The weighted source samples of each destination sample, in order.
    pub fn spans(&self) -> impl Iterator<Item = &[BoxTap]> + '_ {
        let starts = std::iter::once(0).chain(self.ends.iter().copied());
        starts.zip(self.ends.iter().copied()).map(|(s, e)| &self.taps[s..e])
    }
}

/// Per-channel weighted sums for one box-filtered destination sample.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BoxSum {
    channels: [u64; 4],
}

impl BoxSum {
    #[inline]
    pub(crate) fn add(&mut self, px: Bgra32, weight: u32) {
        let w = u64::from(weight);
        for (sum, v) in self.channels.iter_mut().zip(px.to_bytes()) {
            *sum += u64::from(v) * w;
        }
    }

    /// Divide by `total` with the half-unit bias, truncating to 8 bits.
    #[inline]
    pub(crate) fn average(&self, total: u64) -> Bgra32 {
        let half = u64::from(DOWN_SCALE / 2);
        Bgra32::from_bytes(self.channels.map(|s| ((s + half) / total) as u8))
    }
}
