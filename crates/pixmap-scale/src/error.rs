//! Error types for pixmap-scale

use thiserror::Error;

/// Errors that can occur while scaling one rect into another
///
/// [`scale`](crate::scale) collapses all of these to `false`; use
/// [`try_scale`](crate::try_scale) to see which one happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Core library error (temporary buffer allocation)
    #[error("core error: {0}")]
    Core(#[from] pixmap_core::Error),

    /// A buffer is empty or a rect is null
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A rect's width or height does not fit in an `i32`
    #[error("rect too large: {0:?}")]
    RectTooLarge(pixmap_core::Rect),

    /// Proportional clipping left nothing to scale
    #[error("rects clipped away: dst {dst:?}, src {src:?}")]
    ClippedAway {
        dst: pixmap_core::Rect,
        src: pixmap_core::Rect,
    },

    /// Both axes came out equal after proportional clipping
    #[error("unsupported scale combination: dst {dst_w}x{dst_h} from src {src_w}x{src_h}")]
    UnsupportedCombination {
        dst_w: i32,
        dst_h: i32,
        src_w: i32,
        src_h: i32,
    },
}

/// Result type for scale operations
pub type ScaleResult<T> = Result<T, ScaleError>;
