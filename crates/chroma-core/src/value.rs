//! Channel storage types and their clamping policy.
//!
//! Every pixel channel is stored as some numeric type `T`. This module
//! decides what "in range" means for each `T`:
//!
//! | Category | Types | Valid range |
//! |----------|-------|-------------|
//! | Floating | `f32`, `f64`, `f16` | `[0.0, 1.0]` |
//! | Integral | `u8`..`u64`, `i8`..`i64`, `usize`, `isize` | `[0, T::MAX]` |
//! | Opaque | user types without bounds | unchanged |
//!
//! # Traits
//!
//! - [`ValueClamp`] - clamping policy, used by pixel setters
//! - [`ChannelValue`] - adds the `f64` bridge used by color conversion
//!
//! # Example
//!
//! ```
//! use chroma_core::value::{clamp_value, ValueClamp};
//!
//! assert_eq!(clamp_value(1.5_f32), 1.0);
//! assert_eq!(clamp_value(-0.3_f64), 0.0);
//! assert_eq!((-40_i16).clamp_value(), 0);
//! assert_eq!(u8::bounds(), Some((0, 255)));
//! ```
//!
//! # NaN
//!
//! NaN compares false against both bounds, so clamping a floating NaN
//! returns NaN unchanged.
//!
//! # Dependencies
//!
//! - `half` crate for `f16` support

use half::f16;

/// Numeric category of a channel storage type.
///
/// Drives which range [`ValueClamp::bounds`] reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Integer storage, clamped to `[0, MAX]`.
    Integral,
    /// Floating-point storage, clamped to the normalized `[0.0, 1.0]` range.
    Floating,
    /// Anything else. Values pass through unchanged.
    Opaque,
}

/// Clamping policy for a channel storage type.
///
/// Implementors describe their valid range through [`bounds`](Self::bounds);
/// [`clamp_value`](Self::clamp_value) is provided on top of it. A type that
/// keeps the default `bounds` (`None`) is treated as already valid and is
/// never modified.
///
/// # Implementing for custom storage
///
/// ```
/// use chroma_core::value::{NumericKind, ValueClamp};
///
/// #[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
/// struct Tagged(u32);
///
/// impl ValueClamp for Tagged {}
///
/// assert_eq!(Tagged::KIND, NumericKind::Opaque);
/// assert_eq!(Tagged(7).clamp_value(), Tagged(7));
/// ```
pub trait ValueClamp: Copy + PartialOrd {
    /// Numeric category of this type.
    const KIND: NumericKind = NumericKind::Opaque;

    /// Inclusive `(low, high)` range, or `None` for pass-through types.
    #[inline]
    fn bounds() -> Option<(Self, Self)> {
        None
    }

    /// Returns `self` restricted to [`bounds`](Self::bounds).
    #[inline]
    fn clamp_value(self) -> Self {
        match Self::bounds() {
            Some((low, _)) if self < low => low,
            Some((_, high)) if self > high => high,
            _ => self,
        }
    }
}

/// Function form of [`ValueClamp::clamp_value`].
#[inline]
pub fn clamp_value<T: ValueClamp>(value: T) -> T {
    value.clamp_value()
}

/// Storage types that can take part in color conversion.
///
/// Conversion math always runs in `f64`; this trait moves channel values in
/// and out of that intermediate.
///
/// # Casting
///
/// [`from_f64`](Self::from_f64) follows Rust's `as` semantics:
///
/// - integers truncate toward zero and saturate at the type's range
///   (`142.98 -> 142`, `300.0 -> 255u8`, `-4.0 -> 0u8`, NaN `-> 0`)
/// - `f32` and `f16` round to nearest
/// - `f64` is unchanged
///
/// The result is not clamped; callers run [`ValueClamp::clamp_value`] after.
pub trait ChannelValue: ValueClamp + Default + Send + Sync + 'static {
    /// Mid-point added to (and subtracted from) the chroma channels.
    ///
    /// 128 for every built-in type. This is the 8-bit convention and is kept
    /// for float storage too, where it pushes most chroma values past 1.0.
    const CHROMA_BIAS: f64 = 128.0;

    /// Widen to the `f64` conversion intermediate.
    fn to_f64(self) -> f64;

    /// Narrow from the `f64` conversion intermediate.
    fn from_f64(v: f64) -> Self;
}

// ============================================================================
// Integral storage
// ============================================================================

macro_rules! impl_integral {
    ($($t:ty),* $(,)?) => {
        $(
            impl ValueClamp for $t {
                const KIND: NumericKind = NumericKind::Integral;

                #[inline]
                fn bounds() -> Option<(Self, Self)> {
                    Some((0, <$t>::MAX))
                }

                #[inline]
                fn clamp_value(self) -> Self {
                    Ord::clamp(self, 0, <$t>::MAX)
                }
            }

            impl ChannelValue for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_integral!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// ============================================================================
// Floating storage
// ============================================================================

impl ValueClamp for f32 {
    const KIND: NumericKind = NumericKind::Floating;

    #[inline]
    fn bounds() -> Option<(Self, Self)> {
        Some((0.0, 1.0))
    }
}

impl ChannelValue for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl ValueClamp for f64 {
    const KIND: NumericKind = NumericKind::Floating;

    #[inline]
    fn bounds() -> Option<(Self, Self)> {
        Some((0.0, 1.0))
    }
}

impl ChannelValue for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl ValueClamp for f16 {
    const KIND: NumericKind = NumericKind::Floating;

    #[inline]
    fn bounds() -> Option<(Self, Self)> {
        Some((f16::ZERO, f16::ONE))
    }
}

impl ChannelValue for f16 {
    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        f16::from_f64(v)
    }
}
