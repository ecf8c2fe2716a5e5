use smartcast::*;

#[test]
fn integral_promotion_is_exact() {
    assert_eq!(promote_to::<i64, _>(i32::MIN), -2_147_483_648i64);
    assert_eq!(promote_to::<u32, _>(u16::MAX), 65_535u32);
    assert_eq!(promote_to::<i16, _>(200u8), 200i16);
    assert_eq!(
        promote_to::<i128, _>(u64::MAX),
        18_446_744_073_709_551_615i128
    );
}

#[test]
fn promotion_into_float_is_exact() {
    // 2^24 + 1 does not fit an f32 mantissa but fits f64 exactly.
    assert_eq!(promote_to::<f64, _>(16_777_217i32), 16_777_217.0);
    assert_eq!(promote_to::<f64, _>(1.5f32), 1.5);
    assert_eq!(promote_to::<f32, _>(u16::MAX), 65_535.0);
}

#[test]
fn guard_returns_the_promoted_value() {
    assert_eq!(F64Here::new(3u16).get(), 3.0);
    assert_eq!(I64Here::new(-7i32).get(), -7);
    assert_eq!(
        I128Here::new(u64::MAX).get(),
        18_446_744_073_709_551_615i128
    );

    let by_conversion: f64 = PromoteHere::new(255u8).into();
    assert_eq!(by_conversion, 255.0);
}

#[test]
fn guard_accepts_its_own_destination_type() {
    assert_eq!(F64Here::new(2.5f64).get(), 2.5);
    assert_eq!(I64Here::new(i64::MIN).get(), i64::MIN);
}
