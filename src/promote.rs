//! Lossless widening and the single-use promotion guard.
//!
//! Unlike the conversions in [`convert`](crate::convert), nothing here
//! is ever checked at runtime: the type-level predicates only admit
//! pairs where every source value is exactly representable in the
//! destination.

use typenum::{IsLess, IsLessOrEqual, True};

use crate::scalar::{Float, Scalar, Signed, Unsigned};

/// The (source kind, destination kind) pairs admitted for lossless
/// widening.
///
/// Any arithmetic source may widen into a float; integers keep their
/// signedness rule: any integer may widen into a signed destination,
/// only unsigned integers into an unsigned one. Signed-to-unsigned is
/// never lossless and is left to the sign conversions.
pub trait PromotionRule {}
impl PromotionRule for (Signed, Float) {}
impl PromotionRule for (Unsigned, Float) {}
impl PromotionRule for (Float, Float) {}
impl PromotionRule for (Signed, Signed) {}
impl PromotionRule for (Unsigned, Signed) {}
impl PromotionRule for (Unsigned, Unsigned) {}

/// Widening into a strictly wider type, lossless by construction.
///
/// Implemented once, for every pair whose kinds satisfy
/// [`PromotionRule`], whose destination width is strictly greater, and
/// where the standard library vouches for losslessness with an
/// `Into` impl.
pub trait PromoteTo<Dst>: Sized {
    fn promote(self) -> Dst;
}

impl<Src, Dst> PromoteTo<Dst> for Src
where
    Src: Scalar + Into<Dst>,
    Dst: Scalar,
    (<Src as Scalar>::Kind, <Dst as Scalar>::Kind): PromotionRule,
    <Src as Scalar>::Width: IsLess<<Dst as Scalar>::Width, Output = True>,
{
    #[inline]
    fn promote(self) -> Dst {
        self.into()
    }
}

/// Widens a value into a strictly wider type. Always exact, never
/// signals.
///
/// # Examples
///
/// ```
/// use smartcast::promote_to;
///
/// let wide: i64 = promote_to(i32::MIN);
/// assert_eq!(wide, -2_147_483_648);
/// let real: f64 = promote_to(u32::MAX);
/// assert_eq!(real, 4_294_967_295.0);
/// ```
///
/// Pairs that could lose value do not compile:
///
/// ```compile_fail
/// // Same width is not strictly wider.
/// let _: i32 = smartcast::promote_to(1i32);
/// ```
///
/// ```compile_fail
/// // Signed into unsigned is never lossless.
/// let _: u32 = smartcast::promote_to(1i8);
/// ```
#[inline]
pub fn promote_to<Dst, Src: PromoteTo<Dst>>(v: Src) -> Dst {
    v.promote()
}

/// The relaxation of [`PromoteTo`] used by [`PromoteHere`]: the same
/// kind and `Into` rules, but an identical source and destination type
/// is also admitted.
pub trait Promotable<Dst>: Sized {
    fn widen(self) -> Dst;
}

impl<Src, Dst> Promotable<Dst> for Src
where
    Src: Scalar + Into<Dst>,
    Dst: Scalar,
    (<Src as Scalar>::Kind, <Dst as Scalar>::Kind): PromotionRule,
    <Src as Scalar>::Width: IsLessOrEqual<<Dst as Scalar>::Width, Output = True>,
{
    #[inline]
    fn widen(self) -> Dst {
        self.into()
    }
}

/// A single-use guard forcing an explicit promotion step.
///
/// Constructed exactly once from a value no wider than `Dst` under the
/// [`Promotable`] rules, and read back exactly once — both the
/// [`From`] conversion and [`get`](PromoteHere::get) consume the
/// guard, so a value can neither be used unpromoted nor promoted
/// twice. There is no `Default`, `Clone` or `Copy`.
///
/// # Examples
///
/// ```
/// use smartcast::{F64Here, PromoteHere};
///
/// fn mean(sum: F64Here, count: F64Here) -> f64 {
///     sum.get() / count.get()
/// }
/// assert_eq!(mean(PromoteHere::new(9u16), PromoteHere::new(2u8)), 4.5);
/// ```
///
/// Reading the guard as anything but its declared destination fails to
/// compile:
///
/// ```compile_fail
/// use smartcast::PromoteHere;
///
/// let guarded = PromoteHere::<f64>::new(1u8);
/// let _: i32 = guarded.into();
/// ```
///
/// So does copying it to smuggle out a second read:
///
/// ```compile_fail
/// use smartcast::PromoteHere;
///
/// let guarded = PromoteHere::<f64>::new(1u8);
/// let first = guarded.get();
/// let second = guarded.get();
/// ```
///
/// And so does conjuring one from nothing:
///
/// ```compile_fail
/// use smartcast::PromoteHere;
///
/// let guarded = PromoteHere::<f64>::default();
/// ```
pub struct PromoteHere<Dst: Scalar> {
    v: Dst,
}

impl<Dst: Scalar> PromoteHere<Dst> {
    /// Promotes `v` into the guard. The only way to obtain one.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcast::PromoteHere;
    ///
    /// // A destination-typed source is allowed; it is already promoted.
    /// let same = PromoteHere::<f64>::new(2.5f64);
    /// assert_eq!(same.get(), 2.5);
    /// ```
    ///
    /// ```compile_fail
    /// // Narrowing can never construct the guard.
    /// let _ = smartcast::PromoteHere::<f32>::new(1.5f64);
    /// ```
    #[inline]
    pub fn new<Src: Promotable<Dst>>(v: Src) -> Self {
        PromoteHere { v: v.widen() }
    }

    /// Call-style accessor; consumes the guard.
    #[inline]
    pub fn get(self) -> Dst {
        self.v
    }
}

macro_rules! impl_unwrap {
    ($($t:ty),+) => {$(
        impl From<PromoteHere<$t>> for $t {
            #[inline]
            fn from(guard: PromoteHere<$t>) -> $t {
                guard.v
            }
        }
    )+};
}

impl_unwrap!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Guarded promotion to `f64`, the widest float.
pub type F64Here = PromoteHere<f64>;
/// Guarded promotion to `i64`.
pub type I64Here = PromoteHere<i64>;
/// Guarded promotion to `i128`, the widest integer.
pub type I128Here = PromoteHere<i128>;
