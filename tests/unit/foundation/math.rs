use super::*;

#[test]
fn mul_div_matches_8bit_reference() {
    for x in [0u32, 1, 127, 255] {
        for y in [0u32, 1, 127, 255] {
            assert_eq!(mul_div(x, y, 255), (x * y + 127) / 255);
        }
    }
}

#[test]
fn mul_div_identity_at_max() {
    for v in [0u32, 1, 32767, 65534, 65535] {
        assert_eq!(mul_div(v, 65535, 65535), v);
        assert_eq!(mul_div(65535, v, 65535), v);
    }
}

#[test]
fn div_norm_saturates_and_handles_zero() {
    assert_eq!(div_norm(65535, 0, 65535), 65535);
    assert_eq!(div_norm(65535, 32768, 65535), 65535);
    assert_eq!(div_norm(32768, 65535, 65535), 32768);
    assert_eq!(div_norm(100, 200, 255), 128);
}

#[test]
fn blend_endpoints_are_exact() {
    assert_eq!(blend(60000, 1000, 0, 65535), 1000);
    assert_eq!(blend(60000, 1000, 65535, 65535), 60000);
    assert_eq!(blend(1000, 60000, 65535, 65535), 1000);
    assert_eq!(blend(255, 0, 128, 255), 128);
    assert_eq!(blend(0, 255, 128, 255), 127);
}

#[test]
fn div_round_rounds_half_up() {
    assert_eq!(div_round(7, 2), 4);
    assert_eq!(div_round(5, 3), 2);
    assert_eq!(div_round(42164, 255), 165);
}
