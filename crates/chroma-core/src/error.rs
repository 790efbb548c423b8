//! Error types for chroma-core.
//!
//! Arithmetic never fails in this crate: out-of-range channel values are
//! clamped, and unsupported color space pairs do not type-check. The errors
//! below only arise where a color space or channel count arrives at runtime:
//!
//! - parsing a [`ColorSpaceId`] from text
//! - narrowing an [`AnyPixel`](crate::AnyPixel) to a typed [`Pixel`](crate::Pixel)
//! - building a pixel from a slice
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro for the error enum

use crate::colorspace::ColorSpaceId;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at runtime color space boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text did not name a supported color space.
    ///
    /// ```rust
    /// use chroma_core::{ColorSpaceId, Error};
    ///
    /// let err = "xyz".parse::<ColorSpaceId>().unwrap_err();
    /// assert!(matches!(err, Error::UnknownColorSpace(_)));
    /// ```
    #[error("unknown color space '{0}' (expected RGB or YCbCr)")]
    UnknownColorSpace(String),

    /// A runtime-tagged pixel was in a different space than requested.
    #[error("expected a {expected} pixel, found {found}")]
    SpaceMismatch {
        /// Space the caller asked for
        expected: ColorSpaceId,
        /// Space the pixel is in
        found: ColorSpaceId,
    },

    /// Wrong number of channel values.
    #[error("expected {expected} channel values, found {found}")]
    ChannelCount {
        /// Channels per pixel
        expected: usize,
        /// Values supplied
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::SpaceMismatch {
            expected: ColorSpaceId::Rgb,
            found: ColorSpaceId::YCbCr,
        };
        assert_eq!(err.to_string(), "expected a RGB pixel, found YCbCr");

        let err = Error::ChannelCount { expected: 3, found: 4 };
        assert!(err.to_string().contains('4'));
    }
}
