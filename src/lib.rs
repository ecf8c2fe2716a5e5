//! Compile-time constrained numeric conversions.
//!
//! Every conversion between two arithmetic types is spelled by name —
//! sign-flip, narrow, truncate, round, approximate, promote — and is only
//! callable for (source, destination) pairs that satisfy the operation's
//! type-level predicate. An ill-formed pair is a compile error, never a
//! silent coercion.
//!
//! Each fallible operation comes in two flavors:
//!
//! * a **checked** form that verifies the destination can represent the
//!   source value exactly and signals an overflow (a panic naming the
//!   value and destination) otherwise;
//! * an **unchecked** `_cast` form that performs the raw reinterpretation
//!   or truncation with no safety net, for call sites that have already
//!   proven the value in range.
//!
//! Whether the checked forms actually verify is decided at build time by
//! [`OVERFLOW_CHECKING`]: on under `debug_assertions`, off in optimized
//! builds, overridable either way through the `checked` and `unchecked`
//! cargo features. The unchecked branch compiles down to a plain `as`
//! conversion, so release builds pay nothing for the safety of debug
//! builds.
//!
//! # Examples
//!
//! ```
//! use smartcast::*;
//!
//! // Natural counterpart inference: u32 flips to i32.
//! let n: i32 = to_signed(7u32);
//! assert_eq!(n, 7);
//!
//! // Explicit destinations.
//! let wide: i64 = to_signed_as(u32::MAX);
//! assert_eq!(wide, 4_294_967_295);
//! let byte: u8 = narrow_to(200u32);
//! assert_eq!(byte, 200);
//!
//! // Floating point to integral, with a named policy.
//! assert_eq!(round_to::<i32, _>(2.5), 3);
//! assert_eq!(truncate_to::<i32, _>(2.9), 2);
//!
//! // Lossless widening never needs a check.
//! let exact: f64 = promote_to(i32::MAX);
//! assert_eq!(exact, 2_147_483_647.0);
//! ```
//!
//! A pair that violates an operation's predicate does not compile:
//!
//! ```compile_fail
//! use smartcast::*;
//!
//! // Narrowing must shrink: i8 -> i16 is not a narrowing conversion.
//! let _: i16 = narrow_to(1i8);
//! ```

pub mod convert;
pub mod promote;
pub mod scalar;

pub use crate::convert::{
    approx_to, narrow_cast_to, narrow_to, round_to, to_signed, to_signed_as, to_signed_cast,
    to_signed_cast_as, to_unsigned, to_unsigned_as, to_unsigned_cast, to_unsigned_cast_as,
    truncate_to, ApproxTo, FloatToIntegral, NarrowTo, ToSigned, ToUnsigned,
};
pub use crate::promote::{
    promote_to, F64Here, I128Here, I64Here, Promotable, PromoteHere, PromoteTo, PromotionRule,
};
pub use crate::scalar::{Float, Floating, Scalar, Signed, SignedInt, Unsigned, UnsignedInt};

/// Set when the checked conversions verify their result in this build.
///
/// Defaults to the build profile (`true` when `debug_assertions` are
/// enabled), pinned by the `checked` or `unchecked` cargo feature;
/// `checked` wins when both are enabled. The constant folds away, so
/// every conversion compiles to a single branch-free path.
pub const OVERFLOW_CHECKING: bool = if cfg!(feature = "checked") {
    true
} else if cfg!(feature = "unchecked") {
    false
} else {
    cfg!(debug_assertions)
};
