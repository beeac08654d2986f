use super::*;

#[test]
fn zero_frames_is_rejected() {
    assert!(TimelineState::new(0).is_err());
    let mut t = TimelineState::new(10).unwrap();
    assert!(t.set_total_frames(0).is_err());
    assert_eq!(t.total_frames(), 10);
}

#[test]
fn tick_is_noop_while_paused() {
    let mut t = TimelineState::new(10).unwrap();
    t.tick();
    assert_eq!(t.current_frame(), 0);
}

#[test]
fn tick_wraps_at_total_frames() {
    let mut t = TimelineState::new(3).unwrap();
    t.toggle();
    let frames: Vec<u64> = (0..5)
        .map(|_| {
            t.tick();
            t.current_frame()
        })
        .collect();
    assert_eq!(frames, vec![1, 2, 0, 1, 2]);
}

#[test]
fn seek_clamps_into_range() {
    let mut t = TimelineState::new(60).unwrap();
    t.seek(-5);
    assert_eq!(t.current_frame(), 0);
    t.seek(500);
    assert_eq!(t.current_frame(), 59);
    t.seek(12);
    assert_eq!(t.current_frame(), 12);
}

#[test]
fn seek_then_play_resumes_from_seeked_frame() {
    let mut t = TimelineState::new(60).unwrap();
    for target in [0_i64, 17, 58, 59] {
        t.set_playing(false);
        t.apply(TimelineAction::Seek(target));
        t.apply(TimelineAction::TogglePlay);
        t.apply(TimelineAction::Tick);
        assert_eq!(t.current_frame(), (target as u64 + 1) % 60);
    }
}

#[test]
fn shrinking_reclamps_current_frame() {
    let mut t = TimelineState::new(120).unwrap();
    t.seek(100);
    t.set_total_frames(60).unwrap();
    assert_eq!(t.current_frame(), 59);
    t.set_total_frames(200).unwrap();
    assert_eq!(t.current_frame(), 59);
}

#[test]
fn toggle_flips_playing() {
    let mut t = TimelineState::new(5).unwrap();
    assert!(!t.is_playing());
    t.toggle();
    assert!(t.is_playing());
    t.toggle();
    assert!(!t.is_playing());
}
