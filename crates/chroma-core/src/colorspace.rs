//! Color space tags and compile-time color space safety.
//!
//! Color spaces are zero-sized marker types implementing the sealed
//! [`ColorSpace`] trait. A [`Pixel`](crate::Pixel) carries its marker as a type
//! parameter, so an RGB pixel and a YCbCr pixel are different types and can
//! only be turned into each other through an explicit conversion.
//!
//! # Supported Color Spaces
//!
//! - [`Rgb`] - red, green, blue
//! - [`YCbCr`] - luma, blue-difference chroma, red-difference chroma
//!
//! The set is closed. [`ColorSpace`] cannot be implemented outside this crate:
//!
//! ```compile_fail
//! use chroma_core::{ColorSpace, ColorSpaceId};
//!
//! #[derive(Copy, Clone, Debug, Default)]
//! struct Lab;
//!
//! impl ColorSpace for Lab {
//!     const ID: ColorSpaceId = ColorSpaceId::Rgb;
//!     const NAME: &'static str = "Lab";
//!     const CHANNELS: [&'static str; 3] = ["L", "a", "b"];
//! }
//! ```
//!
//! # Runtime identification
//!
//! [`ColorSpaceId`] is the runtime mirror of the marker types, returned by
//! [`Pixel::space`](crate::Pixel::space) and parsed from user input.
//!
//! ```
//! use chroma_core::prelude::*;
//!
//! let id: ColorSpaceId = "ycbcr".parse().unwrap();
//! assert_eq!(id, YCbCr::ID);
//! assert_eq!(id.to_string(), "YCbCr");
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Rgb {}
    impl Sealed for super::YCbCr {}
}

/// Trait for color space marker types.
///
/// Sealed: [`Rgb`] and [`YCbCr`] are the only implementors.
pub trait ColorSpace:
    sealed::Sealed + Copy + Clone + Default + Send + Sync + fmt::Debug + 'static
{
    /// Runtime identifier of this space.
    const ID: ColorSpaceId;

    /// Human-readable name, used for display and logging.
    const NAME: &'static str;

    /// Short channel names in storage order.
    const CHANNELS: [&'static str; 3];
}

/// RGB - additive red, green, blue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb;

impl ColorSpace for Rgb {
    const ID: ColorSpaceId = ColorSpaceId::Rgb;
    const NAME: &'static str = "RGB";
    const CHANNELS: [&'static str; 3] = ["R", "G", "B"];
}

/// YCbCr - luma plus blue-difference and red-difference chroma.
///
/// Chroma channels are centered on [`ChannelValue::CHROMA_BIAS`]
/// (128 for the built-in storage types).
///
/// [`ChannelValue::CHROMA_BIAS`]: crate::value::ChannelValue::CHROMA_BIAS
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct YCbCr;

impl ColorSpace for YCbCr {
    const ID: ColorSpaceId = ColorSpaceId::YCbCr;
    const NAME: &'static str = "YCbCr";
    const CHANNELS: [&'static str; 3] = ["Y", "Cb", "Cr"];
}

/// Runtime identifier for a color space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpaceId {
    /// See [`Rgb`].
    Rgb,
    /// See [`YCbCr`].
    YCbCr,
}

impl ColorSpaceId {
    /// Every supported color space.
    pub const ALL: [ColorSpaceId; 2] = [ColorSpaceId::Rgb, ColorSpaceId::YCbCr];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorSpaceId::Rgb => Rgb::NAME,
            ColorSpaceId::YCbCr => YCbCr::NAME,
        }
    }

    /// Short channel names in storage order.
    pub const fn channel_names(self) -> [&'static str; 3] {
        match self {
            ColorSpaceId::Rgb => Rgb::CHANNELS,
            ColorSpaceId::YCbCr => YCbCr::CHANNELS,
        }
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    /// Case-insensitive; accepts `rgb`, `ycbcr` and `ycc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpaceId::Rgb),
            "ycbcr" | "ycc" => Ok(ColorSpaceId::YCbCr),
            _ => Err(Error::UnknownColorSpace(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorspace_names() {
        assert_eq!(Rgb::NAME, "RGB");
        assert_eq!(YCbCr::NAME, "YCbCr");
        assert_eq!(ColorSpaceId::Rgb.name(), Rgb::NAME);
        assert_eq!(ColorSpaceId::YCbCr.to_string(), "YCbCr");
    }

    #[test]
    fn test_marker_ids() {
        assert_eq!(Rgb::ID, ColorSpaceId::Rgb);
        assert_eq!(YCbCr::ID, ColorSpaceId::YCbCr);
        assert_eq!(ColorSpaceId::ALL.len(), 2);
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(ColorSpaceId::Rgb.channel_names(), ["R", "G", "B"]);
        assert_eq!(ColorSpaceId::YCbCr.channel_names(), ["Y", "Cb", "Cr"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("RGB".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Rgb);
        assert_eq!(" YCbCr ".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::YCbCr);
        assert_eq!("ycc".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::YCbCr);

        let err = "hsv".parse::<ColorSpaceId>().unwrap_err();
        assert_eq!(err, Error::UnknownColorSpace("hsv".into()));
    }
}
