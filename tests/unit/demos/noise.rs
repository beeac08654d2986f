use super::*;

fn set(demo: &NoiseDemo, pairs: &[(&str, &str)]) -> ParamSet {
    let schema = demo.schema();
    let mut params = demo.defaults();
    for (path, raw) in pairs {
        params.set_raw(&schema, path, raw).unwrap();
    }
    params
}

#[test]
fn schema_grows_with_dimensions() {
    let keys = |d: &NoiseDemo| {
        d.schema()
            .fields()
            .iter()
            .map(|f| f.key)
            .collect::<Vec<_>>()
    };
    assert!(keys(&NOISE_2D).contains(&"animateY"));
    assert!(!keys(&NOISE_2D).contains(&"z"));
    assert!(keys(&NOISE_3D).contains(&"animateZ"));
    assert!(!keys(&NOISE_3D).contains(&"w"));
    assert!(keys(&NOISE_4D).contains(&"animateW"));

    let seed = |d: &NoiseDemo| {
        let defaults = d.defaults();
        defaults.get("seed")?.as_str().map(str::to_owned)
    };
    assert_eq!(seed(&NOISE_2D).as_deref(), Some("remotion"));
    assert_eq!(seed(&NOISE_4D).as_deref(), Some("remotion4d"));
}

#[test]
fn value_matches_field_at_animated_coordinates() {
    let params = NOISE_2D.defaults();
    // Defaults: x = y = 0, timeScale 0.1, scale 100, both axes animated.
    let v = NOISE_2D.evaluate(50, &params).unwrap().value;
    let expected = NoiseField::new("remotion").noise2(0.05, 0.05);
    assert_eq!(v, expected);
}

#[test]
fn frozen_axes_do_not_move() {
    let params = set(
        &NOISE_2D,
        &[("animateX", "false"), ("animateY", "false"), ("x", "40")],
    );
    let a = NOISE_2D.evaluate(0, &params).unwrap();
    let b = NOISE_2D.evaluate(90, &params).unwrap();
    assert_eq!(a.value, b.value);
    assert_eq!(a.readout("x"), Some("0.400"));
}

#[test]
fn four_d_axes_advance_at_different_rates() {
    let params = NOISE_4D.defaults();
    let p = NOISE_4D.evaluate(100, &params).unwrap();
    // timeScale 0.03 * 100 frames, rates 1 / 0.7 / 1.3 / 0.5, divided by scale 100.
    assert_eq!(p.readout("x"), Some("0.030"));
    assert_eq!(p.readout("y"), Some("0.021"));
    assert_eq!(p.readout("z"), Some("0.039"));
    assert_eq!(p.readout("w"), Some("0.015"));
    for label in ["Position", "Rotation", "Scale", "Color", "Opacity"] {
        assert!(p.readout(label).is_some(), "{label}");
    }
}

#[test]
fn values_stay_in_unit_range() {
    for demo in [&NOISE_2D, &NOISE_3D, &NOISE_4D] {
        let params = set(demo, &[("octaves", "4")]);
        for frame in (0..120).step_by(7) {
            let v = demo.evaluate(frame, &params).unwrap().value;
            assert!((-1.0..=1.0).contains(&v), "{} @ {frame}: {v}", demo.kind());
        }
    }
}

#[test]
fn grid_shapes_follow_dimensions() {
    let g2 = NOISE_2D.grid(0, &NOISE_2D.defaults()).unwrap();
    assert_eq!((g2.slices, g2.size, g2.values.len()), (1, 20, 400));
    let g3 = NOISE_3D.grid(0, &NOISE_3D.defaults()).unwrap();
    assert_eq!((g3.slices, g3.size, g3.values.len()), (5, 10, 500));
    let g4 = NOISE_4D.grid(0, &NOISE_4D.defaults()).unwrap();
    assert_eq!((g4.slices, g4.size, g4.values.len()), (4, 8, 256));

    // Cell (0, 0) of the first slice is the preview sample.
    let v = NOISE_3D.evaluate(0, &NOISE_3D.defaults()).unwrap().value;
    assert_eq!(g3.get(0, 0, 0), Some(v));
    assert_eq!(g3.get(0, 10, 0), None);
}

#[test]
fn grid_is_only_available_for_noise_demos() {
    let params = DemoKind::Fade.demo().defaults();
    assert!(noise_grid(DemoKind::Fade, 0, &params).is_err());
    let params = NOISE_2D.defaults();
    assert!(noise_grid(DemoKind::Noise2d, 3, &params).is_ok());
}

#[test]
fn code_mentions_seed_and_call() {
    let code = NOISE_3D.code(0, &NOISE_3D.defaults()).unwrap();
    assert!(code.contains("NoiseField::new(\"remotion3d\")"), "{code}");
    assert!(code.contains("noise3(0.000, 0.000, 0.000)"), "{code}");

    let params = set(&NOISE_2D, &[("octaves", "3")]);
    let code = NOISE_2D.code(0, &params).unwrap();
    assert!(
        code.contains("fbm2(0.000, 0.000, Octaves::new(3))"),
        "{code}"
    );
}
