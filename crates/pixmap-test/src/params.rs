//! Regression test parameters and operations

use crate::error::TestError;
use pixmap_core::Pixmap;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and report failures (default)
    #[default]
    Compare,
    /// Compare, and also dump both pixmaps of every failed comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "scale")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, err: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, err);
        self.failures.push(err);
    }

    /// Compare two numeric values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if (expected - actual).abs() > delta {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two pixmaps for exact equality
    pub fn compare_pixmaps(&mut self, expected: &Pixmap, actual: &Pixmap) -> bool {
        self.compare_pixmaps_within(expected, actual, 0)
    }

    /// Compare two pixmaps allowing each channel to differ by `tolerance`
    ///
    /// Dimensions must match exactly.
    pub fn compare_pixmaps_within(
        &mut self,
        expected: &Pixmap,
        actual: &Pixmap,
        tolerance: u8,
    ) -> bool {
        self.index += 1;

        let same_size =
            expected.width() == actual.width() && expected.height() == actual.height();
        let mismatch = if same_size {
            expected
                .data()
                .iter()
                .zip(actual.data())
                .position(|(e, a)| e.max_channel_diff(*a) > tolerance)
        } else {
            Some(0)
        };

        let Some(pos) = mismatch else {
            return true;
        };

        if same_size {
            let w = expected.width().max(1) as usize;
            eprintln!(
                "  first mismatch at ({}, {}): expected {:?}, got {:?}",
                pos % w,
                pos / w,
                expected.data()[pos],
                actual.data()[pos]
            );
        } else {
            eprintln!(
                "  dimension mismatch: expected {}x{}, got {}x{}",
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
        }
        if self.display() {
            eprintln!("  expected:\n{}", dump_pixmap(expected));
            eprintln!("  actual:\n{}", dump_pixmap(actual));
        }
        self.fail(TestError::PixmapMismatch { index: self.index });
        false
    }

    /// Compare two byte strings
    pub fn compare_bytes(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;
        if expected == actual {
            return true;
        }
        eprintln!("  sizes: {} vs {}", expected.len(), actual.len());
        self.fail(TestError::ValueMismatch {
            index: self.index,
            expected: expected.len() as f64,
            actual: actual.len() as f64,
            delta: 0.0,
        });
        false
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        let success = self.failures.is_empty();
        if success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();
        success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}

/// Render a pixmap as one line per row of `b,g,r,a` tuples.
pub fn dump_pixmap(pm: &Pixmap) -> String {
    (0..pm.height())
        .map(|y| {
            pm.row(y)
                .iter()
                .map(|p| format!("{:3},{:3},{:3},{:3}", p.b, p.g, p.r, p.a))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmap_core::Bgra32;

    #[test]
    fn test_mode_from_env() {
        // Can't safely clear the env var here; just check the parse is total
        let mode = RegTestMode::from_env();
        assert!(matches!(mode, RegTestMode::Compare | RegTestMode::Display));
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert!(matches!(
            rp.failures()[0],
            TestError::ValueMismatch { index: 2, .. }
        ));
    }

    #[test]
    fn test_compare_pixmaps_tolerance() {
        let a = Pixmap::filled(2, 2, Bgra32::gray(100)).unwrap();
        let b = Pixmap::filled(2, 2, Bgra32::gray(101)).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_pixmaps_within(&a, &b, 1));
        assert!(!rp.compare_pixmaps(&a, &b));
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_pixmaps_dimension_mismatch() {
        let a = Pixmap::new(2, 2).unwrap();
        let b = Pixmap::new(2, 3).unwrap();
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_pixmaps_within(&a, &b, 255));
    }

    #[test]
    fn test_dump_pixmap_rows() {
        let pm = Pixmap::filled(2, 3, Bgra32::new(1, 2, 3, 4)).unwrap();
        let dump = dump_pixmap(&pm);
        assert_eq!(dump.lines().count(), 3);
        assert!(dump.starts_with("  1,  2,  3,  4 |"));
    }
}
