use super::*;

#[test]
fn integers_drop_the_fraction() {
    assert_eq!(format_general(0.0, 6), "0");
    assert_eq!(format_general(1.0, 6), "1");
    assert_eq!(format_general(255.0, 6), "255");
}

#[test]
fn fractions_keep_six_significant_digits() {
    assert_eq!(format_general(f64::from(32767.0f32 / 65535.0), 6), "0.499992");
    assert_eq!(format_general(f64::from(16383.0f32 / 65535.0), 6), "0.249989");
    assert_eq!(format_general(0.5, 6), "0.5");
    assert_eq!(format_general(0.001, 6), "0.001");
}

#[test]
fn rounding_carries_into_the_exponent() {
    assert_eq!(format_general(0.999_999_7, 6), "1");
    assert_eq!(format_general(999_999.7, 6), "1e+06");
}

#[test]
fn small_values_switch_to_scientific() {
    assert_eq!(format_general(1.0 / 65535.0, 6), "1.5259e-05");
    assert_eq!(format_general(0.0001, 6), "0.0001");
}
