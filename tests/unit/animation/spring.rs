use super::*;

fn args(frame: f64) -> SpringArgs {
    SpringArgs {
        frame,
        fps: 30.0,
        from: 0.0,
        to: 300.0,
        config: SpringConfig::default(),
    }
}

#[test]
fn starts_at_from_and_settles_at_to() {
    assert_eq!(spring(args(0.0)).unwrap(), 0.0);
    assert_eq!(spring(args(-5.0)).unwrap(), 0.0);
    let end = simulate(args(120.0)).unwrap();
    assert!(end.at_rest);
    assert_eq!(end.value, 300.0);
}

#[test]
fn underdamped_spring_overshoots_unless_clamped() {
    let peak = (0..120)
        .map(|f| spring(args(f as f64)).unwrap())
        .fold(f64::MIN, f64::max);
    assert!(peak > 300.0, "{peak}");

    let mut clamped = args(0.0);
    clamped.config.overshoot_clamping = true;
    for f in 0..120 {
        let v = spring(SpringArgs {
            frame: f as f64,
            ..clamped
        })
        .unwrap();
        assert!(v <= 300.0, "frame {f}: {v}");
    }
}

#[test]
fn clamping_respects_downward_springs() {
    let mut a = args(0.0);
    a.from = 300.0;
    a.to = 0.0;
    a.config.overshoot_clamping = true;
    for f in 0..90 {
        a.frame = f as f64;
        let v = spring(a).unwrap();
        assert!(v >= 0.0);
    }
}

#[test]
fn overdamped_and_critical_springs_approach_monotonically() {
    for damping in [20.0, 50.0] {
        let mut a = args(0.0);
        a.config.damping = damping;
        let mut prev = 0.0;
        for f in 1..150 {
            a.frame = f as f64;
        let v = spring(a).unwrap();
            assert!(v >= prev - 1e-9, "damping {damping} frame {f}");
            assert!(v <= 300.0 + 1e-9);
            prev = v;
        }
    }
}

#[test]
fn fractional_frames_sit_between_neighbours() {
    let a = spring(args(3.0)).unwrap();
    let b = spring(args(3.5)).unwrap();
    let c = spring(args(4.0)).unwrap();
    assert!(a < b && b < c);
}

#[test]
fn settle_frame_is_found_for_default_config() {
    let f = settle_frame(args(0.0), 300).unwrap().unwrap();
    assert!(f > 10 && f <= 120, "{f}");
}

#[test]
fn invalid_config_is_rejected() {
    let mut a = args(10.0);
    a.config.mass = 0.0;
    assert!(spring(a).is_err());

    let mut a = args(10.0);
    a.fps = 0.0;
    assert!(spring(a).is_err());

    let mut a = args(10.0);
    a.config.damping = -1.0;
    assert!(spring(a).is_err());
}

#[test]
fn code_lists_every_config_field() {
    let code = args(12.0).code();
    for needle in [
        "frame: 12.0",
        "fps: 30.0",
        "stiffness: 100.0",
        "overshoot_clamping: false",
    ] {
        assert!(code.contains(needle), "{needle}");
    }
}
