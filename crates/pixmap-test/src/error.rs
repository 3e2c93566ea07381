//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture pixmap could not be created
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: pixmap_core::Error,
    },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Pixmap comparison failed
    #[error("pixmap comparison failed at index {index}")]
    PixmapMismatch { index: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
