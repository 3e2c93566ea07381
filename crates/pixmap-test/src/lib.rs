//! pixmap-test - Regression test framework for pixmap
//!
//! Provides the [`RegParams`] comparison tracker used by the `*_reg`
//! integration tests, plus a few deterministic fixture builders.
//!
//! # Usage
//!
//! ```ignore
//! use pixmap_test::{RegParams, uniform};
//!
//! let mut rp = RegParams::new("scale");
//! rp.compare_pixmaps(&expected, &actual);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode, dump_pixmap};

use pixmap_core::{Bgra32, Pixmap};

fn build(
    name: &'static str,
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> Bgra32,
) -> TestResult<Pixmap> {
    let mut pm = Pixmap::new(width, height).map_err(|source| TestError::Fixture { name, source })?;
    for y in 0..height {
        for (x, px) in (0u32..).zip(pm.row_mut(y).iter_mut()) {
            *px = f(x, y);
        }
    }
    Ok(pm)
}

/// A pixmap with every pixel set to `px`.
pub fn uniform(width: u32, height: u32, px: Bgra32) -> TestResult<Pixmap> {
    build("uniform", width, height, |_, _| px)
}

/// Opaque gray ramp along x: pixel value `start + step * x`, clamped.
pub fn gradient_x(width: u32, height: u32, start: u8, step: u8) -> TestResult<Pixmap> {
    build("gradient_x", width, height, |x, _| {
        Bgra32::gray(ramp(start, step, x))
    })
}

/// Opaque gray ramp along y: pixel value `start + step * y`, clamped.
pub fn gradient_y(width: u32, height: u32, start: u8, step: u8) -> TestResult<Pixmap> {
    build("gradient_y", width, height, |_, y| {
        Bgra32::gray(ramp(start, step, y))
    })
}

/// Checkerboard of `cell` x `cell` squares alternating `a` and `b`.
pub fn checker(width: u32, height: u32, cell: u32, a: Bgra32, b: Bgra32) -> TestResult<Pixmap> {
    let cell = cell.max(1);
    build("checker", width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
}

/// Every pixel distinct: b = x, g = y, r = x ^ y, a = 255 (low 8 bits).
pub fn coordinates(width: u32, height: u32) -> TestResult<Pixmap> {
    build("coordinates", width, height, |x, y| {
        Bgra32::new(x as u8, y as u8, (x ^ y) as u8, 255)
    })
}

fn ramp(start: u8, step: u8, i: u32) -> u8 {
    let v = u32::from(start) + u32::from(step) * i;
    v.min(255) as u8
}
