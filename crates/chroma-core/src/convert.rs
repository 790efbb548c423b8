//! Compile-time color space conversion rules.
//!
//! [`ConversionRule<T, To>`] is implemented by the *source* space marker. The
//! trait resolver picks the rule from the `(From, To)` pair, so there is no
//! runtime branching and no rule exists for a pair that is not listed here:
//!
//! | From | To | Rule |
//! |------|----|------|
//! | `S` | `S` | identity copy |
//! | [`Rgb`] | [`YCbCr`] | [`RGB_TO_YCBCR`] plus chroma bias |
//! | [`YCbCr`] | [`Rgb`] | chroma bias removed, then [`YCBCR_TO_RGB`] |
//!
//! Callers normally go through [`Pixel::convert_to`].
//!
//! # Precision
//!
//! Channels are widened to `f64` before the 3x3 multiply regardless of the
//! storage type. Each output channel is then narrowed with
//! [`ChannelValue::from_f64`] (truncating for integers) and clamped with
//! [`ValueClamp::clamp_value`]. Truncation means 8-bit results can sit up
//! to one step below the exact value.
//!
//! # Chroma bias
//!
//! The bias is [`ChannelValue::CHROMA_BIAS`], 128 for all built-in types.
//! For float storage in `[0, 1]` that bias saturates Cb and Cr at 1.0 for
//! almost every input.

use crate::colorspace::{ColorSpace, Rgb, YCbCr};
use crate::pixel::Pixel;
use crate::value::{ChannelValue, ValueClamp};

/// RGB to YCbCr matrix (rows: Y, Cb, Cr). Chroma bias is added afterwards.
pub const RGB_TO_YCBCR: [[f64; 3]; 3] = [
    [0.2126, 0.7152, 0.0722],
    [-0.1146, -0.3854, 0.5000],
    [0.5000, -0.4542, -0.0458],
];

/// YCbCr to RGB matrix (columns: Y, Cb, Cr). Applied after removing the chroma bias.
pub const YCBCR_TO_RGB: [[f64; 3]; 3] = [
    [1.0, 0.0, 1.5748],
    [1.0, -0.1873, -0.4681],
    [1.0, 1.8556, 0.0],
];

/// Conversion from the implementing space to `To`, for storage type `T`.
pub trait ConversionRule<T: ValueClamp, To: ColorSpace>: ColorSpace {
    /// Produce a new pixel in `To`.
    fn convert(src: &Pixel<T, Self>) -> Pixel<T, To>;
}

impl<T: ValueClamp, S: ColorSpace> ConversionRule<T, S> for S {
    #[inline]
    fn convert(src: &Pixel<T, S>) -> Pixel<T, S> {
        *src
    }
}

impl<T: ChannelValue> ConversionRule<T, YCbCr> for Rgb {
    #[inline]
    fn convert(src: &Pixel<T, Rgb>) -> Pixel<T, YCbCr> {
        let bias = T::CHROMA_BIAS;
        let [y, cb, cr] = mul3(RGB_TO_YCBCR, src.to_array().map(T::to_f64));
        Pixel::from_array([y, cb + bias, cr + bias].map(narrow::<T>))
    }
}

impl<T: ChannelValue> ConversionRule<T, Rgb> for YCbCr {
    #[inline]
    fn convert(src: &Pixel<T, YCbCr>) -> Pixel<T, Rgb> {
        let bias = T::CHROMA_BIAS;
        let [y, cb, cr] = src.to_array().map(T::to_f64);
        let rgb = mul3(YCBCR_TO_RGB, [y, cb - bias, cr - bias]);
        Pixel::from_array(rgb.map(narrow::<T>))
    }
}

#[inline]
fn mul3(m: [[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

/// Cast back to storage, then clamp.
#[inline]
fn narrow<T: ChannelValue>(v: f64) -> T {
    T::from_f64(v).clamp_value()
}
