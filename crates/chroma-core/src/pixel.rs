//! Pixel values tagged with storage type and color space.
//!
//! # Design
//!
//! [`Pixel`] is parameterized by:
//! 1. **Storage** (`T: ValueClamp`) - the numeric type of each channel
//! 2. **Color Space** (`S: ColorSpace`) - [`Rgb`] or [`YCbCr`], fixed for the
//!    lifetime of the value
//!
//! Channel accessors are named after the space: an RGB pixel has
//! `r`/`g`/`b`, a YCbCr pixel has `y`/`cb`/`cr`. Calling `cb()` on an RGB
//! pixel is a compile error.
//!
//! ```
//! use chroma_core::prelude::*;
//!
//! let mut rgb: Pixel<u8, Rgb> = Pixel::new(100, 150, 200);
//! rgb.set_g(90);
//!
//! let ycc: Pixel<u8, YCbCr> = rgb.convert_to::<YCbCr>();
//! assert_eq!(ycc.space(), ColorSpaceId::YCbCr);
//! ```
//!
//! # Clamping
//!
//! Setters run the value through [`ValueClamp`] before storing it. The
//! constructors ([`Pixel::new`], [`Pixel::from_array`]) store raw values as
//! given; use [`Pixel::clamped`] to normalize a constructed pixel.
//!
//! # Memory Layout
//!
//! `#[repr(C)]`, three channels in storage order followed by a zero-sized
//! space marker.

use crate::colorspace::{ColorSpace, ColorSpaceId, Rgb, YCbCr};
use crate::convert::ConversionRule;
use crate::error::{Error, Result};
use crate::value::ValueClamp;
use std::fmt;
use std::marker::PhantomData;

/// Three-channel pixel with color space tracking.
///
/// # Type Parameters
///
/// - `T: ValueClamp` - channel storage (u8, u16, f16, f32, ...)
/// - `S: ColorSpace` - [`Rgb`] or [`YCbCr`]
///
/// # Example
///
/// ```
/// use chroma_core::prelude::*;
///
/// let black: Pixel<u8, Rgb> = Pixel::default();
/// assert_eq!(black.to_array(), [0, 0, 0]);
/// assert_eq!(black.space(), ColorSpaceId::Rgb);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Pixel<T: ValueClamp, S: ColorSpace> {
    channels: [T; 3],
    _space: PhantomData<S>,
}

impl<T: ValueClamp, S: ColorSpace> Pixel<T, S> {
    /// Create a pixel from its three channels in storage order. No clamping.
    ///
    /// The space comes from the target type: `(r, g, b)` for
    /// `Pixel<T, Rgb>`, `(y, cb, cr)` for `Pixel<T, YCbCr>`.
    #[inline]
    pub const fn new(c0: T, c1: T, c2: T) -> Self {
        Self::from_array([c0, c1, c2])
    }

    /// Create from channel values in storage order. No clamping.
    #[inline]
    pub const fn from_array(channels: [T; 3]) -> Self {
        Self {
            channels,
            _space: PhantomData,
        }
    }

    /// Create from a slice of exactly three values. No clamping.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelCount`] if `values` is not three long.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        let channels: [T; 3] = values.try_into().map_err(|_| Error::ChannelCount {
            expected: 3,
            found: values.len(),
        })?;
        Ok(Self::from_array(channels))
    }

    /// Channel values in storage order.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.channels
    }

    /// Borrow the channel values in storage order.
    #[inline]
    pub fn channels(&self) -> &[T; 3] {
        &self.channels
    }

    /// Runtime identifier of this pixel's color space.
    #[inline]
    pub fn space(&self) -> ColorSpaceId {
        S::ID
    }

    /// Apply a function to each channel. The result is not clamped.
    #[inline]
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self::from_array(self.channels.map(f))
    }

    /// Copy with every channel passed through [`ValueClamp::clamp_value`].
    #[inline]
    pub fn clamped(self) -> Self {
        self.map(T::clamp_value)
    }

    /// Convert to another color space.
    ///
    /// Only compiles for supported pairs. Converting to the pixel's own space
    /// returns an identical copy.
    ///
    /// ```
    /// use chroma_core::prelude::*;
    ///
    /// let rgb: Pixel<u8, Rgb> = Pixel::new(100, 150, 200);
    /// assert_eq!(rgb.convert_to::<Rgb>(), rgb);
    ///
    /// let ycc = rgb.convert_to::<YCbCr>();
    /// assert_eq!(ycc.to_array(), [142, 158, 100]);
    /// ```
    #[inline]
    pub fn convert_to<To: ColorSpace>(&self) -> Pixel<T, To>
    where
        S: ConversionRule<T, To>,
    {
        <S as ConversionRule<T, To>>::convert(self)
    }

    #[inline]
    fn store(&mut self, index: usize, value: T) {
        self.channels[index] = value.clamp_value();
    }
}

// ============================================================================
// RGB
// ============================================================================

impl<T: ValueClamp> Pixel<T, Rgb> {
    /// Red channel.
    #[inline]
    pub fn r(&self) -> T {
        self.channels[0]
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> T {
        self.channels[1]
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> T {
        self.channels[2]
    }

    /// Set red, clamped to the storage range.
    #[inline]
    pub fn set_r(&mut self, r: T) {
        self.store(0, r);
    }

    /// Set green, clamped to the storage range.
    #[inline]
    pub fn set_g(&mut self, g: T) {
        self.store(1, g);
    }

    /// Set blue, clamped to the storage range.
    #[inline]
    pub fn set_b(&mut self, b: T) {
        self.store(2, b);
    }
}

// ============================================================================
// YCbCr
// ============================================================================

impl<T: ValueClamp> Pixel<T, YCbCr> {
    /// Luma.
    #[inline]
    pub fn y(&self) -> T {
        self.channels[0]
    }

    /// Blue-difference chroma.
    #[inline]
    pub fn cb(&self) -> T {
        self.channels[1]
    }

    /// Red-difference chroma.
    #[inline]
    pub fn cr(&self) -> T {
        self.channels[2]
    }

    /// Set luma, clamped to the storage range.
    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.store(0, y);
    }

    /// Set blue-difference chroma, clamped to the storage range.
    #[inline]
    pub fn set_cb(&mut self, cb: T) {
        self.store(1, cb);
    }

    /// Set red-difference chroma, clamped to the storage range.
    #[inline]
    pub fn set_cr(&mut self, cr: T) {
        self.store(2, cr);
    }
}

impl<T: ValueClamp, S: ColorSpace> From<[T; 3]> for Pixel<T, S> {
    #[inline]
    fn from(channels: [T; 3]) -> Self {
        Self::from_array(channels)
    }
}

impl<T: ValueClamp, S: ColorSpace> From<Pixel<T, S>> for [T; 3] {
    #[inline]
    fn from(pixel: Pixel<T, S>) -> Self {
        pixel.channels
    }
}

impl<T: ValueClamp + fmt::Debug, S: ColorSpace> fmt::Debug for Pixel<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = S::CHANNELS;
        f.debug_struct(&format!("Pixel<{}>", S::NAME))
            .field(c0, &self.channels[0])
            .field(c1, &self.channels[1])
            .field(c2, &self.channels[2])
            .finish()
    }
}

impl<T: ValueClamp + fmt::Display, S: ColorSpace> fmt::Display for Pixel<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = &self.channels;
        write!(f, "{}({}, {}, {})", S::NAME, c0, c1, c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;

    #[test]
    fn test_rgb_creation() {
        let pixel: Pixel<u8, Rgb> = Pixel::new(100, 150, 200);
        assert_eq!(pixel.r(), 100);
        assert_eq!(pixel.g(), 150);
        assert_eq!(pixel.b(), 200);
        assert_eq!(pixel.space(), ColorSpaceId::Rgb);
    }

    #[test]
    fn test_ycbcr_creation() {
        let pixel: Pixel<u8, YCbCr> = Pixel::new(100, 150, 200);
        assert_eq!(pixel.y(), 100);
        assert_eq!(pixel.cb(), 150);
        assert_eq!(pixel.cr(), 200);
        assert_eq!(pixel.space(), ColorSpaceId::YCbCr);
    }

    #[test]
    fn test_new_takes_space_from_target_type() {
        let rgb: Pixel<u8, Rgb> = Pixel::new(10, 20, 30);
        let ycc: Pixel<u8, YCbCr> = Pixel::new(10, 20, 30);
        assert_eq!(rgb.to_array(), ycc.to_array());
        assert_eq!(rgb.space(), ColorSpaceId::Rgb);
        assert_eq!(ycc.space(), ColorSpaceId::YCbCr);

        const WHITE: Pixel<u8, Rgb> = Pixel::new(255, 255, 255);
        assert_eq!(WHITE, Pixel::<u8, Rgb>::from_array([255; 3]));
    }

    #[test]
    fn test_default_is_zero() {
        let rgb: Pixel<u8, Rgb> = Pixel::default();
        assert_eq!(rgb.to_array(), [0, 0, 0]);
        assert_eq!(rgb.space(), ColorSpaceId::Rgb);

        let ycc: Pixel<u8, YCbCr> = Pixel::default();
        assert_eq!(ycc.to_array(), [0, 0, 0]);
        assert_eq!(ycc.space(), ColorSpaceId::YCbCr);
    }

    #[test]
    fn test_set_get() {
        let mut rgb: Pixel<u8, Rgb> = Pixel::default();
        rgb.set_r(10);
        rgb.set_g(100);
        rgb.set_b(91);
        assert_eq!(rgb.to_array(), [10, 100, 91]);

        let mut ycc: Pixel<u8, YCbCr> = Pixel::default();
        ycc.set_y(11);
        ycc.set_cb(254);
        ycc.set_cr(100);
        assert_eq!(ycc.to_array(), [11, 254, 100]);
    }

    #[test]
    fn test_float_setters_clamp() {
        let mut pixel: Pixel<f32, Rgb> = Pixel::default();
        pixel.set_r(1.5);
        assert_eq!(pixel.r(), 1.0);
        pixel.set_r(-0.3);
        assert_eq!(pixel.r(), 0.0);
        pixel.set_g(0.25);
        assert_eq!(pixel.g(), 0.25);

        let mut half: Pixel<f16, YCbCr> = Pixel::default();
        half.set_cr(f16::from_f32(3.0));
        assert_eq!(half.cr(), f16::ONE);
    }

    #[test]
    fn test_integer_setters_clamp() {
        let mut pixel: Pixel<i16, Rgb> = Pixel::default();
        pixel.set_r(-40);
        assert_eq!(pixel.r(), 0);
        pixel.set_b(i16::MAX);
        assert_eq!(pixel.b(), i16::MAX);

        let mut ycc: Pixel<i32, YCbCr> = Pixel::default();
        ycc.set_cb(-1);
        assert_eq!(ycc.cb(), 0);
    }

    #[test]
    fn test_constructor_does_not_clamp() {
        let pixel: Pixel<f32, Rgb> = Pixel::new(1.5, -0.3, 0.5);
        assert_eq!(pixel.to_array(), [1.5, -0.3, 0.5]);
        assert_eq!(pixel.clamped().to_array(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_try_from_slice() {
        let pixel = Pixel::<u16, Rgb>::try_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(pixel.to_array(), [1, 2, 3]);

        let err = Pixel::<u16, YCbCr>::try_from_slice(&[1, 2]).unwrap_err();
        assert_eq!(err, Error::ChannelCount { expected: 3, found: 2 });
    }

    #[test]
    fn test_array_conversions() {
        let pixel: Pixel<u8, YCbCr> = [16, 128, 128].into();
        assert_eq!(pixel.y(), 16);
        let back: [u8; 3] = pixel.into();
        assert_eq!(back, [16, 128, 128]);
        assert_eq!(pixel.channels(), &[16, 128, 128]);
    }

    #[test]
    fn test_map() {
        let pixel: Pixel<u8, Rgb> = Pixel::new(1, 2, 3);
        assert_eq!(pixel.map(|c| c * 2).to_array(), [2, 4, 6]);
    }

    #[test]
    fn test_formatting() {
        let pixel: Pixel<u8, YCbCr> = Pixel::new(142, 158, 100);
        assert_eq!(pixel.to_string(), "YCbCr(142, 158, 100)");
        assert_eq!(
            format!("{:?}", pixel),
            "Pixel<YCbCr> { Y: 142, Cb: 158, Cr: 100 }"
        );
    }
}
