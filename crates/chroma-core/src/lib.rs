//! # chroma-core
//!
//! Typed pixel values with compile-time RGB / YCbCr conversion.
//!
//! - [`ValueClamp`], [`ChannelValue`] - per-storage-type clamping policy and
//!   the `f64` bridge used by conversion math
//! - [`ColorSpace`], [`Rgb`], [`YCbCr`] - sealed color space markers
//! - [`Pixel`] - three-channel pixel tracking storage type and color space
//! - [`ConversionRule`] - conversion selected at compile time from the
//!   `(From, To)` pair
//! - [`AnyPixel`] - pixel whose color space is only known at runtime
//!
//! ## Design Philosophy
//!
//! A pixel's color space is part of its type. An RGB pixel cannot be handed
//! to code expecting YCbCr without an explicit conversion, and conversions
//! only exist for supported pairs:
//!
//! ```
//! use chroma_core::prelude::*;
//!
//! let rgb: Pixel<u8, Rgb> = Pixel::new(100, 150, 200);
//! let ycc: Pixel<u8, YCbCr> = rgb.convert_to();
//! let back: Pixel<u8, Rgb> = ycc.convert_to();
//!
//! for (a, b) in rgb.to_array().into_iter().zip(back.to_array()) {
//!     assert!(a.abs_diff(b) <= 5);
//! }
//! ```
//!
//! Out-of-range arithmetic is never an error. Conversion results and setter
//! inputs are clamped to the storage type's range (`[0, MAX]` for integers,
//! `[0.0, 1.0]` for floats).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod any;
pub mod colorspace;
pub mod convert;
pub mod error;
pub mod pixel;
pub mod value;

// Re-exports for convenience
pub use any::AnyPixel;
pub use colorspace::{ColorSpace, ColorSpaceId, Rgb, YCbCr};
pub use convert::{ConversionRule, RGB_TO_YCBCR, YCBCR_TO_RGB};
pub use error::{Error, Result};
pub use pixel::Pixel;
pub use value::{clamp_value, ChannelValue, NumericKind, ValueClamp};

/// Re-export of the half-precision float type usable as channel storage.
pub use half::f16;

/// Prelude module for convenient imports.
///
/// ```
/// use chroma_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::any::AnyPixel;
    pub use crate::colorspace::{ColorSpace, ColorSpaceId, Rgb, YCbCr};
    pub use crate::convert::ConversionRule;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::Pixel;
    pub use crate::value::{clamp_value, ChannelValue, NumericKind, ValueClamp};
}
