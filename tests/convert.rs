use smartcast::*;

#[test]
fn unsigned_to_signed_round_trips_in_range() {
    for &u in &[0u32, 1, 42, i32::MAX as u32] {
        let s: i32 = to_signed(u);
        assert_eq!(to_unsigned(s), u);
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "overflow converting")]
fn unsigned_above_signed_max_signals_overflow() {
    let _ = to_signed(u32::MAX);
}

#[test]
fn unsigned_above_signed_max_casts_to_bit_pattern() {
    assert_eq!(to_signed_cast(u32::MAX), -1);
    assert_eq!(to_signed_cast(0x8000_0000u32), i32::MIN);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "overflow converting")]
fn negative_to_unsigned_signals_overflow() {
    let _ = to_unsigned(-1i32);
}

#[test]
fn negative_to_unsigned_cast_wraps() {
    assert_eq!(to_unsigned_cast(-5i32), u32::MAX - 4);
    assert_eq!(to_unsigned_cast(-1isize), usize::MAX);
}

#[test]
fn explicit_destination_sign_conversions() {
    assert_eq!(to_signed_as::<i64, _>(u32::MAX), 4_294_967_295i64);
    assert_eq!(to_signed_cast_as::<i8, _>(255u8), -1i8);
    assert_eq!(to_unsigned_as::<u64, _>(5i8), 5u64);
    assert_eq!(to_unsigned_cast_as::<u8, _>(-1i8), 255u8);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "overflow converting")]
fn explicit_destination_checked_form_still_signals() {
    let _ = to_signed_as::<i8, _>(200u8);
}

#[test]
fn narrowing_round_trips_when_in_range() {
    let narrowed: u8 = narrow_to(200u32);
    assert_eq!(u32::from(narrowed), 200);
    let negative: i8 = narrow_to(-100i64);
    assert_eq!(i64::from(negative), -100);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "overflow converting")]
fn narrowing_out_of_range_signals_overflow() {
    let _: i8 = narrow_to(300i32);
}

#[test]
fn narrow_cast_truncates_silently() {
    assert_eq!(narrow_cast_to::<u8, _>(300u32), 44);
    assert_eq!(narrow_cast_to::<i8, _>(-300i32), -44);
}

#[test]
fn rounding_resolves_ties_away_from_zero() {
    assert_eq!(round_to::<i32, _>(2.5f64), 3);
    assert_eq!(round_to::<i32, _>(-2.5f64), -3);
    assert_eq!(round_to::<i32, _>(2.4f64), 2);
    assert_eq!(round_to::<i32, _>(-2.4f64), -2);
    assert_eq!(round_to::<u8, _>(0.5f32), 1);
}

#[test]
fn truncation_drops_fraction_toward_zero() {
    assert_eq!(truncate_to::<i32, _>(2.9f64), 2);
    assert_eq!(truncate_to::<i32, _>(-2.9f64), -2);
    assert_eq!(truncate_to::<u16, _>(65_534.99f64), 65_534);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "overflow converting")]
fn fraction_above_destination_max_signals_before_truncating() {
    // 65535.99 exceeds u16::MAX; the range test fires before the
    // fractional part could be dropped.
    let _ = truncate_to::<u16, _>(65_535.99f64);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "overflow converting")]
fn float_above_destination_max_signals_overflow() {
    let _ = truncate_to::<i8, _>(300.0f64);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "overflow converting")]
fn negative_float_into_unsigned_signals_overflow() {
    let _ = round_to::<u8, _>(-0.5f64);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "overflow converting")]
fn nan_signals_overflow_when_checked() {
    let _ = truncate_to::<i32, _>(f64::NAN);
}

#[test]
fn float_boundary_is_inclusive_of_the_rounded_bound() {
    // i64::MAX as f64 rounds up to 2^63; that one value is admitted by
    // the checked comparison and the conversion saturates to MAX.
    let boundary = i64::MAX as f64;
    assert_eq!(truncate_to::<i64, _>(boundary), i64::MAX);
}

#[test]
fn float_destinations_are_classified() {
    // `Floating` bounds the float-facing operations, so a generic
    // caller can require it alone.
    fn nearest<Dst: Floating, Src: ApproxTo<Dst>>(v: Src) -> Dst {
        approx_to(v)
    }
    assert_eq!(nearest::<f32, _>(2.5f64), 2.5f32);
}

#[test]
fn approx_keeps_the_nearest_representable_value() {
    assert_eq!(approx_to::<f32, _>(2.5f64), 2.5f32);
    assert_eq!(approx_to::<f32, _>(16_777_217i32), 16_777_216.0);
    assert_eq!(approx_to::<f64, _>(u64::MAX), 1.844_674_407_370_955_2e19);
}
