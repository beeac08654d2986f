use super::*;

fn set(path: &str, raw: &str) -> Action {
    Action::SetField {
        path: path.to_owned(),
        raw: raw.to_owned(),
    }
}

#[test]
fn new_session_is_paused_at_zero() {
    let s = DemoSession::new(DemoKind::Fade).unwrap();
    assert_eq!(s.current_frame(), 0);
    assert!(!s.timeline().is_playing());
    assert_eq!(s.timeline().total_frames(), 60);
}

#[test]
fn ticks_only_advance_while_playing() {
    let mut s = DemoSession::new(DemoKind::Loop).unwrap();
    s.dispatch(Action::Tick).unwrap();
    assert_eq!(s.current_frame(), 0);
    s.dispatch(Action::TogglePlay).unwrap();
    for _ in 0..5 {
        s.dispatch(Action::Tick).unwrap();
    }
    assert_eq!(s.current_frame(), 5);
}

#[test]
fn shrinking_total_frames_pulls_the_playhead_back() {
    let mut s = DemoSession::new(DemoKind::Sequence).unwrap();
    s.dispatch(Action::Seek(110)).unwrap();
    assert_eq!(s.current_frame(), 110);
    s.dispatch(set("totalFrames", "80")).unwrap();
    assert_eq!(s.timeline().total_frames(), 80);
    assert_eq!(s.current_frame(), 79);

    s.dispatch(Action::Seek(-4)).unwrap();
    assert_eq!(s.current_frame(), 0);
    s.dispatch(Action::Seek(1_000)).unwrap();
    assert_eq!(s.current_frame(), 79);
}

#[test]
fn set_field_changes_the_preview() {
    let mut s = DemoSession::new(DemoKind::Fade).unwrap();
    s.dispatch(Action::Seek(25)).unwrap();
    assert_eq!(s.preview().unwrap().value, 0.5);
    s.dispatch(set("fadeType", "out")).unwrap();
    s.dispatch(Action::Seek(35)).unwrap();
    assert_eq!(s.preview().unwrap().value, 0.5);
    assert!(s.code().unwrap().contains("&[1.0, 0.0]"));
    assert!(s.dispatch(set("fadeType", "sideways")).is_err());
    assert!(s.dispatch(set("nope", "1")).is_err());
}

#[test]
fn add_item_prefers_the_demo_item() {
    let mut s = DemoSession::new(DemoKind::Sequence).unwrap();
    s.dispatch(Action::AddItem {
        path: "sequences".to_owned(),
    })
    .unwrap();
    assert_eq!(
        s.params().get("sequences.3.name").and_then(|v| v.as_str()),
        Some("Sequence 4")
    );

    let mut s = DemoSession::new(DemoKind::InterpolateColors).unwrap();
    s.dispatch(Action::AddItem {
        path: "colors".to_owned(),
    })
    .unwrap();
    assert_eq!(
        s.params().get("colors.3").and_then(|v| v.as_str()),
        Some("#ffffff")
    );
    assert!(s
        .dispatch(Action::AddItem {
            path: "totalFrames".to_owned()
        })
        .is_err());
}

#[test]
fn remove_item_respects_minimum() {
    let mut s = DemoSession::new(DemoKind::InterpolateColors).unwrap();
    let remove = || Action::RemoveItem {
        path: "colors".to_owned(),
        index: 0,
    };
    s.dispatch(remove()).unwrap();
    assert!(s.dispatch(remove()).is_err());
    let colors = s.params().get("colors").and_then(|v| v.as_list());
    assert_eq!(colors.map(<[_]>::len), Some(2));
}

#[test]
fn preset_round_trip_restores_state() {
    let mut s = DemoSession::new(DemoKind::Spring).unwrap();
    s.dispatch(set("config.damping", "4")).unwrap();
    s.dispatch(Action::Seek(17)).unwrap();
    s.dispatch(Action::TogglePlay).unwrap();

    let preset = s.to_preset().unwrap();
    let restored = DemoSession::from_preset(&preset).unwrap();
    assert_eq!(restored.current_frame(), 17);
    assert!(restored.timeline().is_playing());
    assert_eq!(restored.params(), s.params());
    assert_eq!(restored.preview().unwrap(), s.preview().unwrap());
}

#[test]
fn preset_for_another_demo_is_rejected() {
    let mut s = DemoSession::new(DemoKind::Fade).unwrap();
    assert!(s.apply_preset(&Preset::new(DemoKind::Wipe)).is_err());
}

#[test]
fn preset_frame_is_clamped() {
    let mut preset = Preset::new(DemoKind::Fade);
    preset.frame = 5_000;
    preset
        .params
        .insert("totalFrames".to_owned(), serde_json::json!(40));
    let s = DemoSession::from_preset(&preset).unwrap();
    assert_eq!(s.timeline().total_frames(), 40);
    assert_eq!(s.current_frame(), 39);
}
