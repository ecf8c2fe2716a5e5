//! The named conversion operations between arithmetic types.
//!
//! Each operation is a free function dispatching through a pair trait
//! implemented only for the (source, destination) combinations the
//! operation admits. Checked forms verify exact representability when
//! [`OVERFLOW_CHECKING`](crate::OVERFLOW_CHECKING) is set and signal the
//! single overflow condition otherwise; `_cast` forms never verify.

use std::convert::TryFrom;
use std::fmt;

use crate::scalar::{Floating, SignedInt, UnsignedInt};
use crate::OVERFLOW_CHECKING;

#[cold]
#[inline(never)]
fn overflow<T: fmt::Display>(original: T, dest: &'static str) -> ! {
    panic!("overflow converting {} to `{}`", original, dest)
}

/// Unsigned-to-signed conversion. Implemented for every (unsigned
/// source, signed destination) integer pair, regardless of width.
pub trait ToSigned<Dst>: Sized {
    /// Converts, verifying the value survives when checking is compiled in.
    fn to_signed(self) -> Dst;
    /// Converts with no verification; out-of-range bits reinterpret.
    fn to_signed_cast(self) -> Dst;
}

/// Signed-to-unsigned conversion. Implemented for every (signed source,
/// unsigned destination) integer pair, regardless of width.
pub trait ToUnsigned<Dst>: Sized {
    /// Converts, verifying the value survives when checking is compiled in.
    fn to_unsigned(self) -> Dst;
    /// Converts with no verification; negative values wrap.
    fn to_unsigned_cast(self) -> Dst;
}

/// Integral narrowing. Implemented only for same-signedness pairs whose
/// destination is strictly smaller than the source.
pub trait NarrowTo<Dst>: Sized {
    /// Narrows, verifying the value round-trips when checking is compiled in.
    fn narrow(self) -> Dst;
    /// Narrows by truncation, no verification.
    fn narrow_cast(self) -> Dst;
}

/// Floating point to integral conversion, with the rounding policy
/// chosen by name at the call site.
pub trait FloatToIntegral<Dst>: Floating {
    /// Drops the fractional part, toward zero.
    fn truncate(self) -> Dst;
    /// Rounds to nearest, ties away from zero.
    fn round(self) -> Dst;
}

/// Approximate conversion into a floating point type no wider than the
/// source. The precision loss is the named, accepted risk.
pub trait ApproxTo<Dst: Floating>: Sized {
    fn approx(self) -> Dst;
}

/// Converts an unsigned integer to its same-width signed counterpart.
///
/// Signals overflow when the value exceeds the signed maximum and
/// checking is compiled in.
///
/// # Examples
///
/// ```
/// use smartcast::to_signed;
///
/// assert_eq!(to_signed(7u32), 7i32);
/// assert_eq!(to_signed(42usize), 42isize);
/// ```
#[inline]
pub fn to_signed<Src>(v: Src) -> Src::Signed
where
    Src: UnsignedInt + ToSigned<<Src as UnsignedInt>::Signed>,
{
    ToSigned::to_signed(v)
}

/// Converts an unsigned integer to its same-width signed counterpart
/// with no verification.
///
/// # Examples
///
/// ```
/// use smartcast::to_signed_cast;
///
/// assert_eq!(to_signed_cast(u32::MAX), -1i32);
/// ```
#[inline]
pub fn to_signed_cast<Src>(v: Src) -> Src::Signed
where
    Src: UnsignedInt + ToSigned<<Src as UnsignedInt>::Signed>,
{
    ToSigned::to_signed_cast(v)
}

/// Converts an unsigned integer to a caller-chosen signed destination.
///
/// # Examples
///
/// ```
/// use smartcast::to_signed_as;
///
/// let wide: i64 = to_signed_as(u32::MAX);
/// assert_eq!(wide, 4_294_967_295);
/// ```
///
/// A signed source does not compile:
///
/// ```compile_fail
/// let _: i64 = smartcast::to_signed_as(1i32);
/// ```
#[inline]
pub fn to_signed_as<Dst, Src: ToSigned<Dst>>(v: Src) -> Dst {
    v.to_signed()
}

/// Converts an unsigned integer to a caller-chosen signed destination
/// with no verification.
#[inline]
pub fn to_signed_cast_as<Dst, Src: ToSigned<Dst>>(v: Src) -> Dst {
    v.to_signed_cast()
}

/// Converts a signed integer to its same-width unsigned counterpart.
///
/// Signals overflow when the value is negative and checking is
/// compiled in.
///
/// # Examples
///
/// ```
/// use smartcast::to_unsigned;
///
/// assert_eq!(to_unsigned(7i32), 7u32);
/// ```
#[inline]
pub fn to_unsigned<Src>(v: Src) -> Src::Unsigned
where
    Src: SignedInt + ToUnsigned<<Src as SignedInt>::Unsigned>,
{
    ToUnsigned::to_unsigned(v)
}

/// Converts a signed integer to its same-width unsigned counterpart
/// with no verification.
///
/// # Examples
///
/// ```
/// use smartcast::to_unsigned_cast;
///
/// assert_eq!(to_unsigned_cast(-1i32), u32::MAX);
/// ```
#[inline]
pub fn to_unsigned_cast<Src>(v: Src) -> Src::Unsigned
where
    Src: SignedInt + ToUnsigned<<Src as SignedInt>::Unsigned>,
{
    ToUnsigned::to_unsigned_cast(v)
}

/// Converts a signed integer to a caller-chosen unsigned destination.
#[inline]
pub fn to_unsigned_as<Dst, Src: ToUnsigned<Dst>>(v: Src) -> Dst {
    v.to_unsigned()
}

/// Converts a signed integer to a caller-chosen unsigned destination
/// with no verification.
#[inline]
pub fn to_unsigned_cast_as<Dst, Src: ToUnsigned<Dst>>(v: Src) -> Dst {
    v.to_unsigned_cast()
}

/// Narrows an integer to a strictly smaller type of the same
/// signedness.
///
/// Signals overflow when the value does not round-trip and checking is
/// compiled in.
///
/// # Examples
///
/// ```
/// use smartcast::narrow_to;
///
/// let small: u8 = narrow_to(200u32);
/// assert_eq!(small, 200);
/// ```
///
/// Mixed signedness is rejected at compile time; compose with the sign
/// conversions instead:
///
/// ```compile_fail
/// let _: u8 = smartcast::narrow_to(200i32);
/// ```
///
/// So is a destination that does not shrink:
///
/// ```compile_fail
/// let _: u32 = smartcast::narrow_to(1u32);
/// ```
#[inline]
pub fn narrow_to<Dst, Src: NarrowTo<Dst>>(v: Src) -> Dst {
    v.narrow()
}

/// Narrows an integer by truncation, no verification.
///
/// # Examples
///
/// ```
/// use smartcast::narrow_cast_to;
///
/// assert_eq!(narrow_cast_to::<u8, _>(300u32), 44);
/// ```
#[inline]
pub fn narrow_cast_to<Dst, Src: NarrowTo<Dst>>(v: Src) -> Dst {
    v.narrow_cast()
}

/// Converts a floating point value to an integral type, dropping the
/// fractional part toward zero.
///
/// When checking is compiled in, a value outside the destination's
/// `[MIN, MAX]` range (or NaN) signals overflow before converting.
///
/// # Examples
///
/// ```
/// use smartcast::truncate_to;
///
/// assert_eq!(truncate_to::<i32, _>(2.9), 2);
/// assert_eq!(truncate_to::<i32, _>(-2.9), -2);
/// ```
#[inline]
pub fn truncate_to<Dst, Src: FloatToIntegral<Dst>>(v: Src) -> Dst {
    v.truncate()
}

/// Converts a floating point value to an integral type, rounding to
/// nearest with ties away from zero.
///
/// The same range check as [`truncate_to`] applies before rounding.
///
/// # Examples
///
/// ```
/// use smartcast::round_to;
///
/// assert_eq!(round_to::<i32, _>(2.5), 3);
/// assert_eq!(round_to::<i32, _>(-2.5), -3);
/// assert_eq!(round_to::<i32, _>(2.4), 2);
/// assert_eq!(round_to::<i32, _>(-2.4), -2);
/// ```
#[inline]
pub fn round_to<Dst, Src: FloatToIntegral<Dst>>(v: Src) -> Dst {
    v.round()
}

/// Converts into a floating point type no wider than the source,
/// accepting the precision loss by name.
///
/// Never checked: every source value maps to the nearest representable
/// destination value.
///
/// # Examples
///
/// ```
/// use smartcast::approx_to;
///
/// // Exact when the value fits the mantissa...
/// assert_eq!(approx_to::<f32, _>(1_000_000i32), 1_000_000.0);
/// // ...and explicitly approximate when it does not.
/// assert_eq!(approx_to::<f32, _>(16_777_217i32), 16_777_216.0);
/// ```
///
/// Widening a small integer this way is rejected; that is
/// [`promote_to`](crate::promote_to)'s job:
///
/// ```compile_fail
/// let _: f64 = smartcast::approx_to(1u8);
/// ```
#[inline]
pub fn approx_to<Dst: Floating, Src: ApproxTo<Dst>>(v: Src) -> Dst {
    v.approx()
}

macro_rules! impl_to_signed {
    ($src:ty => $($dst:ty),+) => {$(
        impl ToSigned<$dst> for $src {
            #[inline]
            fn to_signed(self) -> $dst {
                if OVERFLOW_CHECKING {
                    match <$dst>::try_from(self) {
                        Ok(v) => v,
                        Err(_) => overflow(self, stringify!($dst)),
                    }
                } else {
                    self as $dst
                }
            }
            #[inline]
            fn to_signed_cast(self) -> $dst {
                self as $dst
            }
        }
    )+};
}

macro_rules! impl_to_unsigned {
    ($src:ty => $($dst:ty),+) => {$(
        impl ToUnsigned<$dst> for $src {
            #[inline]
            fn to_unsigned(self) -> $dst {
                if OVERFLOW_CHECKING {
                    match <$dst>::try_from(self) {
                        Ok(v) => v,
                        Err(_) => overflow(self, stringify!($dst)),
                    }
                } else {
                    self as $dst
                }
            }
            #[inline]
            fn to_unsigned_cast(self) -> $dst {
                self as $dst
            }
        }
    )+};
}

macro_rules! impl_narrow {
    ($src:ty => $($dst:ty),+) => {$(
        impl NarrowTo<$dst> for $src {
            #[inline]
            fn narrow(self) -> $dst {
                if OVERFLOW_CHECKING {
                    match <$dst>::try_from(self) {
                        Ok(v) => v,
                        Err(_) => overflow(self, stringify!($dst)),
                    }
                } else {
                    self as $dst
                }
            }
            #[inline]
            fn narrow_cast(self) -> $dst {
                self as $dst
            }
        }
    )+};
}

macro_rules! impl_float_to_int {
    ($src:ty => $($dst:ty),+) => {$(
        impl FloatToIntegral<$dst> for $src {
            #[inline]
            fn truncate(self) -> $dst {
                // Bounds compared in the source float type; NaN fails
                // both comparisons and signals overflow.
                if OVERFLOW_CHECKING
                    && !(self >= <$dst>::MIN as $src && self <= <$dst>::MAX as $src)
                {
                    overflow(self, stringify!($dst));
                }
                self as $dst
            }
            #[inline]
            fn round(self) -> $dst {
                if OVERFLOW_CHECKING
                    && !(self >= <$dst>::MIN as $src && self <= <$dst>::MAX as $src)
                {
                    overflow(self, stringify!($dst));
                }
                let nudged = if self < 0.0 { self - 0.5 } else { self + 0.5 };
                nudged as $dst
            }
        }
    )+};
}

macro_rules! impl_approx {
    ($dst:ty: $($src:ty),+) => {$(
        impl ApproxTo<$dst> for $src {
            #[inline]
            fn approx(self) -> $dst {
                self as $dst
            }
        }
    )+};
}

impl_to_signed!(u8 => i8, i16, i32, i64, i128, isize);
impl_to_signed!(u16 => i8, i16, i32, i64, i128, isize);
impl_to_signed!(u32 => i8, i16, i32, i64, i128, isize);
impl_to_signed!(u64 => i8, i16, i32, i64, i128, isize);
impl_to_signed!(u128 => i8, i16, i32, i64, i128, isize);
impl_to_signed!(usize => i8, i16, i32, i64, i128, isize);

impl_to_unsigned!(i8 => u8, u16, u32, u64, u128, usize);
impl_to_unsigned!(i16 => u8, u16, u32, u64, u128, usize);
impl_to_unsigned!(i32 => u8, u16, u32, u64, u128, usize);
impl_to_unsigned!(i64 => u8, u16, u32, u64, u128, usize);
impl_to_unsigned!(i128 => u8, u16, u32, u64, u128, usize);
impl_to_unsigned!(isize => u8, u16, u32, u64, u128, usize);

impl_narrow!(i16 => i8);
impl_narrow!(i32 => i8, i16);
impl_narrow!(i64 => i8, i16, i32);
impl_narrow!(i128 => i8, i16, i32, i64);
impl_narrow!(u16 => u8);
impl_narrow!(u32 => u8, u16);
impl_narrow!(u64 => u8, u16, u32);
impl_narrow!(u128 => u8, u16, u32, u64);

#[cfg(target_pointer_width = "64")]
impl_narrow!(isize => i8, i16, i32);
#[cfg(target_pointer_width = "64")]
impl_narrow!(usize => u8, u16, u32);
#[cfg(target_pointer_width = "64")]
impl_narrow!(i128 => isize);
#[cfg(target_pointer_width = "64")]
impl_narrow!(u128 => usize);

#[cfg(target_pointer_width = "32")]
impl_narrow!(isize => i8, i16);
#[cfg(target_pointer_width = "32")]
impl_narrow!(usize => u8, u16);
#[cfg(target_pointer_width = "32")]
impl_narrow!(i64 => isize);
#[cfg(target_pointer_width = "32")]
impl_narrow!(i128 => isize);
#[cfg(target_pointer_width = "32")]
impl_narrow!(u64 => usize);
#[cfg(target_pointer_width = "32")]
impl_narrow!(u128 => usize);

impl_float_to_int!(f32 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_to_int!(f64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl_approx!(f32: f64, i32, u32, i64, u64, i128, u128);
impl_approx!(f64: i64, u64, i128, u128);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_approx!(f32: isize, usize);
#[cfg(target_pointer_width = "64")]
impl_approx!(f64: isize, usize);
