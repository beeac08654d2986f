use super::*;

#[test]
fn seed_hash_is_stable_and_distinguishes_seeds() {
    assert_eq!(hash_seed("remotion"), hash_seed("remotion"));
    assert_ne!(hash_seed("remotion"), hash_seed("remotion3d"));
    assert_eq!(hash_seed(""), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    for _ in 0..100 {
        assert!(a.next_below(7) < 7);
    }
}

#[test]
fn safe_ratio_guards_zero_denominator() {
    assert_eq!(safe_ratio(5.0, 0.0), 0.0);
    assert_eq!(safe_ratio(0.0, 0.0), 0.0);
    assert_eq!(safe_ratio(5.0, 2.0), 2.5);
}

#[test]
fn css_num_drops_trailing_zero_and_negative_zero() {
    assert_eq!(css_num(100.0), "100");
    assert_eq!(css_num(12.5), "12.5");
    assert_eq!(css_num(-0.0), "0");
    assert_eq!(fixed(-0.0001, 2), "0.00");
    assert_eq!(fixed(2.345, 1), "2.3");
}
