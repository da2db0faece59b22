use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    for x in [0u16, 1, 127, 255] {
        assert_eq!(mul_div255_u16(x, 255), x);
        assert_eq!(mul_div255_u16(x, 0), 0);
    }
    assert_eq!(mul_div255_u16(1, 127), 0);
    assert_eq!(mul_div255_u16(2, 128), 1);
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(128, 255), 128);
}

#[test]
fn round_to_px_rounds_half_away_from_zero() {
    assert_eq!(round_to_px(2.5), Some(3));
    assert_eq!(round_to_px(2.49), Some(2));
    assert_eq!(round_to_px(0.5), Some(1));
}

#[test]
fn round_to_px_clamps_small_positive_values_to_one() {
    assert_eq!(round_to_px(0.49), Some(1));
    assert_eq!(round_to_px(0.001), Some(1));
}

#[test]
fn round_to_px_rejects_degenerate_values() {
    assert_eq!(round_to_px(0.0), None);
    assert_eq!(round_to_px(-3.0), None);
    assert_eq!(round_to_px(f64::NAN), None);
    assert_eq!(round_to_px(f64::INFINITY), None);
    assert_eq!(round_to_px(1e12), None);
}
