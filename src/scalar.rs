//! Type-level classification of the arithmetic primitives.
//!
//! Every supported primitive carries its category and bit width as
//! types, so conversion predicates are resolved by trait bounds alone.

use typenum::{U128, U16, U32, U64, U8};

mod internal {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for i128 {}
    impl Sealed for isize {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
    impl Sealed for usize {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Category tag for signed integer types.
pub struct Signed;

/// Category tag for unsigned integer types.
pub struct Unsigned;

/// Category tag for floating point types.
pub struct Float;

/// An arithmetic primitive, classified at the type level.
///
/// Sealed: the impls for the built-in numeric types are the only ones.
///
/// # Examples
///
/// ```
/// use smartcast::Scalar;
///
/// fn width_bits<T: Scalar>() -> usize {
///     <T::Width as typenum::Unsigned>::USIZE
/// }
/// assert_eq!(width_bits::<i32>(), 32);
/// assert_eq!(width_bits::<f64>(), 64);
/// ```
pub trait Scalar: internal::Sealed + Copy {
    /// One of [`Signed`], [`Unsigned`] or [`Float`].
    type Kind;
    /// Bit width as a `typenum` unsigned.
    type Width: typenum::Unsigned;
}

/// A signed integer type, with its same-width unsigned counterpart.
pub trait SignedInt: Scalar<Kind = Signed> {
    type Unsigned: UnsignedInt<Signed = Self>;
}

/// An unsigned integer type, with its same-width signed counterpart.
pub trait UnsignedInt: Scalar<Kind = Unsigned> {
    type Signed: SignedInt<Unsigned = Self>;
}

/// A floating point type.
pub trait Floating: Scalar<Kind = Float> {}

macro_rules! impl_signed {
    ($($t:ty => $u:ty, $w:ty;)+) => {$(
        impl Scalar for $t {
            type Kind = Signed;
            type Width = $w;
        }
        impl SignedInt for $t {
            type Unsigned = $u;
        }
    )+};
}

macro_rules! impl_unsigned {
    ($($t:ty => $s:ty, $w:ty;)+) => {$(
        impl Scalar for $t {
            type Kind = Unsigned;
            type Width = $w;
        }
        impl UnsignedInt for $t {
            type Signed = $s;
        }
    )+};
}

macro_rules! impl_float {
    ($($t:ty => $w:ty;)+) => {$(
        impl Scalar for $t {
            type Kind = Float;
            type Width = $w;
        }
        impl Floating for $t {}
    )+};
}

impl_signed! {
    i8 => u8, U8;
    i16 => u16, U16;
    i32 => u32, U32;
    i64 => u64, U64;
    i128 => u128, U128;
}

impl_unsigned! {
    u8 => i8, U8;
    u16 => i16, U16;
    u32 => i32, U32;
    u64 => i64, U64;
    u128 => i128, U128;
}

impl_float! {
    f32 => U32;
    f64 => U64;
}

#[cfg(target_pointer_width = "16")]
impl_signed! { isize => usize, U16; }
#[cfg(target_pointer_width = "16")]
impl_unsigned! { usize => isize, U16; }

#[cfg(target_pointer_width = "32")]
impl_signed! { isize => usize, U32; }
#[cfg(target_pointer_width = "32")]
impl_unsigned! { usize => isize, U32; }

#[cfg(target_pointer_width = "64")]
impl_signed! { isize => usize, U64; }
#[cfg(target_pointer_width = "64")]
impl_unsigned! { usize => isize, U64; }
