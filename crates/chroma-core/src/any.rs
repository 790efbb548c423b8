//! Runtime-tagged pixels.
//!
//! [`Pixel`] fixes its color space in the type. When the space is only known
//! at runtime (parsed from a flag, read from a header), wrap the pixel in
//! [`AnyPixel`]. Its [`convert_to`](AnyPixel::convert_to) matches on both
//! spaces and forwards to the typed conversion rules, so the numeric results
//! are identical to the compile-time path.
//!
//! ```
//! use chroma_core::prelude::*;
//!
//! let px = AnyPixel::new(ColorSpaceId::Rgb, [100u8, 150, 200]);
//! let ycc = px.convert_to(ColorSpaceId::YCbCr);
//! assert_eq!(ycc.to_array(), [142, 158, 100]);
//!
//! let typed: Pixel<u8, YCbCr> = ycc.try_into().unwrap();
//! assert_eq!(typed.cb(), 158);
//! ```

use crate::colorspace::{ColorSpaceId, Rgb, YCbCr};
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::value::{ChannelValue, ValueClamp};
use std::fmt;
use tracing::trace;

/// A pixel whose color space is a runtime value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnyPixel<T: ValueClamp> {
    /// RGB pixel.
    Rgb(Pixel<T, Rgb>),
    /// YCbCr pixel.
    YCbCr(Pixel<T, YCbCr>),
}

impl<T: ValueClamp> AnyPixel<T> {
    /// Create from a runtime space and raw channels. No clamping.
    pub fn new(space: ColorSpaceId, channels: [T; 3]) -> Self {
        match space {
            ColorSpaceId::Rgb => AnyPixel::Rgb(Pixel::from_array(channels)),
            ColorSpaceId::YCbCr => AnyPixel::YCbCr(Pixel::from_array(channels)),
        }
    }

    /// Create from a runtime space and a slice of channel values.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelCount`] if `values` is not three long.
    pub fn try_from_slice(space: ColorSpaceId, values: &[T]) -> Result<Self> {
        let channels: [T; 3] = values.try_into().map_err(|_| Error::ChannelCount {
            expected: 3,
            found: values.len(),
        })?;
        Ok(Self::new(space, channels))
    }

    /// Color space of the wrapped pixel.
    pub fn space(&self) -> ColorSpaceId {
        match self {
            AnyPixel::Rgb(p) => p.space(),
            AnyPixel::YCbCr(p) => p.space(),
        }
    }

    /// Channel values in storage order.
    pub fn to_array(self) -> [T; 3] {
        match self {
            AnyPixel::Rgb(p) => p.to_array(),
            AnyPixel::YCbCr(p) => p.to_array(),
        }
    }

    /// Copy with every channel clamped to the storage range.
    pub fn clamped(self) -> Self {
        match self {
            AnyPixel::Rgb(p) => AnyPixel::Rgb(p.clamped()),
            AnyPixel::YCbCr(p) => AnyPixel::YCbCr(p.clamped()),
        }
    }
}

impl<T: ChannelValue> AnyPixel<T> {
    /// Convert to the space named by `to`.
    pub fn convert_to(self, to: ColorSpaceId) -> Self {
        trace!(from = %self.space(), %to, "AnyPixel::convert_to");
        match (self, to) {
            (AnyPixel::Rgb(p), ColorSpaceId::Rgb) => AnyPixel::Rgb(p.convert_to::<Rgb>()),
            (AnyPixel::Rgb(p), ColorSpaceId::YCbCr) => AnyPixel::YCbCr(p.convert_to::<YCbCr>()),
            (AnyPixel::YCbCr(p), ColorSpaceId::Rgb) => AnyPixel::Rgb(p.convert_to::<Rgb>()),
            (AnyPixel::YCbCr(p), ColorSpaceId::YCbCr) => AnyPixel::YCbCr(p.convert_to::<YCbCr>()),
        }
    }
}

impl<T: ValueClamp> From<Pixel<T, Rgb>> for AnyPixel<T> {
    fn from(pixel: Pixel<T, Rgb>) -> Self {
        AnyPixel::Rgb(pixel)
    }
}

impl<T: ValueClamp> From<Pixel<T, YCbCr>> for AnyPixel<T> {
    fn from(pixel: Pixel<T, YCbCr>) -> Self {
        AnyPixel::YCbCr(pixel)
    }
}

impl<T: ValueClamp> TryFrom<AnyPixel<T>> for Pixel<T, Rgb> {
    type Error = Error;

    fn try_from(pixel: AnyPixel<T>) -> Result<Self> {
        match pixel {
            AnyPixel::Rgb(p) => Ok(p),
            other => Err(Error::SpaceMismatch {
                expected: ColorSpaceId::Rgb,
                found: other.space(),
            }),
        }
    }
}

impl<T: ValueClamp> TryFrom<AnyPixel<T>> for Pixel<T, YCbCr> {
    type Error = Error;

    fn try_from(pixel: AnyPixel<T>) -> Result<Self> {
        match pixel {
            AnyPixel::YCbCr(p) => Ok(p),
            other => Err(Error::SpaceMismatch {
                expected: ColorSpaceId::YCbCr,
                found: other.space(),
            }),
        }
    }
}

impl<T: ValueClamp + fmt::Display> fmt::Display for AnyPixel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPixel::Rgb(p) => fmt::Display::fmt(p, f),
            AnyPixel::YCbCr(p) => fmt::Display::fmt(p, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_space() {
        let px = AnyPixel::new(ColorSpaceId::YCbCr, [16u8, 128, 128]);
        assert_eq!(px.space(), ColorSpaceId::YCbCr);
        assert_eq!(px.to_array(), [16, 128, 128]);
    }

    #[test]
    fn test_matches_typed_conversion() {
        let typed: Pixel<u8, Rgb> = Pixel::new(30, 60, 90);
        let any = AnyPixel::from(typed).convert_to(ColorSpaceId::YCbCr);
        assert_eq!(any.to_array(), typed.convert_to::<YCbCr>().to_array());

        let back = any.convert_to(ColorSpaceId::Rgb);
        let expected = typed.convert_to::<YCbCr>().convert_to::<Rgb>();
        assert_eq!(back, AnyPixel::Rgb(expected));
    }

    #[test]
    fn test_same_space_is_identity() {
        let px = AnyPixel::new(ColorSpaceId::Rgb, [0.2f32, 0.4, 0.6]);
        assert_eq!(px.convert_to(ColorSpaceId::Rgb), px);
    }

    #[test]
    fn test_try_into_typed() {
        let px = AnyPixel::new(ColorSpaceId::Rgb, [1u16, 2, 3]);
        let rgb: Pixel<u16, Rgb> = px.try_into().unwrap();
        assert_eq!(rgb.b(), 3);

        let err = Pixel::<u16, YCbCr>::try_from(px).unwrap_err();
        assert_eq!(
            err,
            Error::SpaceMismatch {
                expected: ColorSpaceId::YCbCr,
                found: ColorSpaceId::Rgb,
            }
        );
    }

    #[test]
    fn test_try_from_slice() {
        let px = AnyPixel::try_from_slice(ColorSpaceId::Rgb, &[1u8, 2, 3]).unwrap();
        assert_eq!(px.to_array(), [1, 2, 3]);
        assert!(AnyPixel::<u8>::try_from_slice(ColorSpaceId::Rgb, &[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_clamped_and_display() {
        let px = AnyPixel::new(ColorSpaceId::Rgb, [1.5f32, -1.0, 0.5]).clamped();
        assert_eq!(px.to_array(), [1.0, 0.0, 0.5]);
        assert_eq!(px.to_string(), "RGB(1, 0, 0.5)");
    }
}
