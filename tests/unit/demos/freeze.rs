use super::*;

fn params(pairs: &[(&str, &str)]) -> ParamSet {
    let schema = FreezeDemo.schema();
    let mut params = FreezeDemo.defaults();
    for (path, raw) in pairs {
        params.set_raw(&schema, path, raw).unwrap();
    }
    params
}

fn value(frame: u64, p: &ParamSet) -> f64 {
    FreezeDemo.evaluate(frame, p).unwrap().value
}

#[test]
fn clamp_holds_value_from_freeze_frame_on() {
    let p = params(&[("animationType", "opacity")]);
    assert_eq!(value(0, &p), 0.0);
    assert_eq!(value(15, &p), 0.5);
    for f in [30, 45, 60, 61, 119] {
        assert_eq!(value(f, &p), 1.0, "frame {f}");
    }
    let held = FreezeDemo.evaluate(45, &p).unwrap();
    assert_eq!(held.readout("Frozen"), Some("yes"));
    assert_eq!(held.readout("Frame"), Some("45 -> 30"));
}

#[test]
fn loop_replays_the_start_segment() {
    let p = params(&[("animationType", "position"), ("freezeType", "loop")]);
    assert_eq!(value(40, &p), value(10, &p));
    let at = FreezeDemo.evaluate(40, &p).unwrap();
    assert_eq!(at.readout("Frame"), Some("40 -> 10"));
    assert_eq!(at.readout("Frozen"), Some("no"));
}

#[test]
fn reverse_bounces_back() {
    let p = params(&[("animationType", "rotation"), ("freezeType", "reverse")]);
    // Window 0..30: frame 40 sits 20 frames into a 60 frame bounce.
    assert_eq!(
        FreezeDemo.evaluate(40, &p).unwrap().readout("Frame"),
        Some("40 -> 20")
    );
    assert_eq!(value(40, &p), value(20, &p));
}

#[test]
fn outside_the_window_shows_the_freeze_frame() {
    let p = params(&[("animationStartFrame", "20"), ("freezeFrame", "40")]);
    // scale = 0.5 + 1.5 * progress; freeze frame has progress 1.
    assert_eq!(value(5, &p), 2.0);
    assert_eq!(value(30, &p), 1.25);
}

#[test]
fn zero_width_window_does_not_fail() {
    let p = params(&[("animationStartFrame", "30"), ("freezeType", "loop")]);
    for f in 0..120 {
        assert!(value(f, &p).is_finite());
    }
}

#[test]
fn code_shows_window_and_mode() {
    let p = params(&[("freezeType", "reverse")]);
    let code = FreezeDemo.code(40, &p).unwrap();
    assert!(
        code.contains("window.remap(frame, FreezeMode::Reverse); // 40 -> 20"),
        "{code}"
    );
    assert!(code.contains("&[0.0, 30.0]"), "{code}");
}
