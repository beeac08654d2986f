use super::*;
use crate::animation::ease::Curve;

#[test]
fn clamped_midpoint_is_exact() {
    let opts = InterpolateOpts::clamped();
    let v = interpolate(30.0, &[10.0, 50.0], &[0.0, 200.0], opts).unwrap();
    assert_eq!(v, 100.0);
}

#[test]
fn clamp_holds_boundaries() {
    let opts = InterpolateOpts::clamped();
    for f in [-50.0, 0.0, 9.0, 10.0] {
        assert_eq!(
            interpolate(f, &[10.0, 50.0], &[0.0, 200.0], opts).unwrap(),
            0.0
        );
    }
    for f in [50.0, 51.0, 500.0] {
        assert_eq!(
            interpolate(f, &[10.0, 50.0], &[0.0, 200.0], opts).unwrap(),
            200.0
        );
    }
}

#[test]
fn extend_continues_linearly_even_with_easing() {
    let opts = InterpolateOpts::default().with_easing(Ease::IN_QUAD);
    assert_eq!(
        interpolate(20.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap(),
        200.0
    );
    assert_eq!(
        interpolate(-5.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap(),
        -50.0
    );
    assert_eq!(
        interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap(),
        25.0
    );
}

#[test]
fn identity_passes_input_through() {
    let opts = InterpolateOpts {
        left: Extrapolate::Identity,
        right: Extrapolate::Identity,
        ..InterpolateOpts::default()
    };
    assert_eq!(
        interpolate(-7.0, &[0.0, 10.0], &[100.0, 200.0], opts).unwrap(),
        -7.0
    );
    assert_eq!(
        interpolate(42.0, &[0.0, 10.0], &[100.0, 200.0], opts).unwrap(),
        42.0
    );
    assert_eq!(
        interpolate(5.0, &[0.0, 10.0], &[100.0, 200.0], opts).unwrap(),
        150.0
    );
}

#[test]
fn wrap_repeats_the_range() {
    let opts = InterpolateOpts {
        left: Extrapolate::Wrap,
        right: Extrapolate::Wrap,
        ..InterpolateOpts::default()
    };
    assert_eq!(
        interpolate(15.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(),
        0.5
    );
    assert_eq!(
        interpolate(-2.5, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(),
        0.75
    );
}

#[test]
fn wrap_uses_the_full_width_of_multi_stop_ranges() {
    let opts = InterpolateOpts {
        left: Extrapolate::Wrap,
        right: Extrapolate::Wrap,
        ..InterpolateOpts::default()
    };
    let input = [0.0, 10.0, 20.0];
    let output = [0.0, 100.0, 300.0];
    let at = |x: f64| interpolate(x, &input, &output, opts).unwrap();
    assert_eq!(at(25.0), 50.0, "25 wraps to 5 over 0..20");
    assert_eq!(at(-5.0), 200.0, "-5 wraps to 15 over 0..20");
    assert_eq!(at(35.0), at(15.0));
    assert_eq!(at(40.0), 0.0);
    assert_eq!(at(20.0), 300.0);
}

#[test]
fn wrap_over_a_zero_width_range_stays_finite() {
    let opts = InterpolateOpts {
        left: Extrapolate::Wrap,
        right: Extrapolate::Wrap,
        ..InterpolateOpts::default()
    };
    let v = interpolate(9.0, &[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0], opts).unwrap();
    assert!(v.is_finite());
}

#[test]
fn multi_segment_ranges_pick_the_right_segment() {
    let opts = InterpolateOpts::clamped();
    let input = [0.0, 10.0, 20.0];
    let output = [0.0, 100.0, 0.0];
    assert_eq!(interpolate(5.0, &input, &output, opts).unwrap(), 50.0);
    assert_eq!(interpolate(10.0, &input, &output, opts).unwrap(), 100.0);
    assert_eq!(interpolate(15.0, &input, &output, opts).unwrap(), 50.0);
    assert_eq!(interpolate(25.0, &input, &output, opts).unwrap(), 0.0);
}

#[test]
fn zero_width_range_is_a_step_without_nan() {
    let opts = InterpolateOpts::default();
    let before = interpolate(4.0, &[5.0, 5.0], &[1.0, 9.0], opts).unwrap();
    let at = interpolate(5.0, &[5.0, 5.0], &[1.0, 9.0], opts).unwrap();
    assert_eq!(before, 1.0);
    assert_eq!(at, 9.0);
    let clamped = InterpolateOpts::clamped();
    assert_eq!(
        interpolate(4.0, &[5.0, 5.0], &[1.0, 9.0], clamped).unwrap(),
        1.0
    );
    assert_eq!(
        interpolate(6.0, &[5.0, 5.0], &[1.0, 9.0], clamped).unwrap(),
        9.0
    );
}

#[test]
fn easing_shapes_in_range_values() {
    let opts = InterpolateOpts::clamped().with_easing(Ease::in_(Curve::Quad));
    assert_eq!(
        interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap(),
        25.0
    );
}

#[test]
fn invalid_ranges_are_rejected() {
    let opts = InterpolateOpts::default();
    assert!(interpolate(1.0, &[0.0, 1.0], &[0.0], opts).is_err());
    assert!(interpolate(1.0, &[0.0], &[0.0], opts).is_err());
    assert!(interpolate(1.0, &[10.0, 0.0], &[0.0, 1.0], opts).is_err());
    assert!(
        interpolate(1.0, &[0.0, f64::NAN], &[0.0, 1.0], opts).is_err()
    );
    assert!(
        interpolate(f64::INFINITY, &[0.0, 1.0], &[0.0, 1.0], opts).is_err()
    );
}

#[test]
fn opts_code_is_compact_for_clamped() {
    assert_eq!(
        InterpolateOpts::clamped().code(),
        "InterpolateOpts::clamped()"
    );
    let custom = InterpolateOpts {
        left: Extrapolate::Identity,
        ..InterpolateOpts::clamped()
    };
    assert!(custom.code().contains("left: Extrapolate::Identity"));
    assert_eq!(
        "EXTEND".parse::<Extrapolate>().unwrap(),
        Extrapolate::Extend
    );
}
