use super::*;

#[test]
fn clip_path_per_direction() {
    assert_eq!(wipe_clip_path(Direction::Left, 0.25), "inset(0 75% 0 0)");
    assert_eq!(wipe_clip_path(Direction::Right, 0.25), "inset(0 0 0 75%)");
    assert_eq!(wipe_clip_path(Direction::Up, 0.25), "inset(75% 0 0 0)");
    assert_eq!(wipe_clip_path(Direction::Down, 0.25), "inset(0 0 75% 0)");
}

#[test]
fn fully_hidden_before_and_revealed_after() {
    let params = WipeDemo.defaults();
    let before = WipeDemo.evaluate(0, &params).unwrap();
    assert_eq!(before.style("clipPath"), Some("inset(0 100% 0 0)"));
    let after = WipeDemo.evaluate(59, &params).unwrap();
    assert_eq!(after.style("clipPath"), Some("inset(0 0% 0 0)"));
    let mid = WipeDemo.evaluate(30, &params).unwrap();
    assert_eq!(mid.value, 0.5);
    assert_eq!(mid.readout("Progress"), Some("50.0%"));
}

#[test]
fn code_uses_direction_template() {
    let schema = WipeDemo.schema();
    let mut params = WipeDemo.defaults();
    params.set_raw(&schema, "direction", "down").unwrap();
    let code = WipeDemo.code(0, &params).unwrap();
    assert!(code.contains("inset(0 0 {hidden}% 0)"), "{code}");
    assert!(code.contains("&[15.0, 45.0]"), "{code}");
}
