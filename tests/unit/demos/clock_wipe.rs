use super::*;

fn clip(frame: u64, params: &ParamSet) -> String {
    ClockWipeDemo
        .evaluate(frame, params)
        .unwrap()
        .style("clipPath")
        .unwrap()
        .to_owned()
}

#[test]
fn degenerate_before_start_and_full_after_end() {
    let params = ClockWipeDemo.defaults();
    assert_eq!(
        clip(0, &params),
        "polygon(150px 100px, 150px 100px, 150px 100px)"
    );
    assert_eq!(clip(50, &params), FULL_RECT);
    assert_eq!(clip(59, &params), FULL_RECT);
}

#[test]
fn quarter_turn_reaches_three_o_clock() {
    let params = ClockWipeDemo.defaults();
    // Frame 20 of [10, 50] is a quarter of the sweep: two arc steps.
    let path = clip(20, &params);
    assert_eq!(
        path,
        "polygon(150px 100px, 150px -100px, 291.421px -41.421px, 350px 100px)"
    );
}

#[test]
fn counter_clockwise_mirrors_the_sweep() {
    let schema = ClockWipeDemo.schema();
    let mut params = ClockWipeDemo.defaults();
    params.set_raw(&schema, "clockwise", "false").unwrap();
    let p = ClockWipeDemo.evaluate(20, &params).unwrap();
    assert_eq!(p.value, -90.0);
    assert!(p.style("clipPath").unwrap().ends_with("-50px 100px)"));
}

#[test]
fn arc_steps_grow_with_progress() {
    let center = Point::new(0.0, 0.0);
    assert_eq!(sector(center, 0.0, 1.0, 0.05).unwrap().len(), 3);
    assert_eq!(sector(center, 0.0, 1.0, 0.5).unwrap().len(), 6);
    assert_eq!(sector(center, 0.0, 1.0, 0.99).unwrap().len(), 10);
    assert!(sector(center, 0.0, 1.0, 1.0).is_none());
}

#[test]
fn start_angle_offsets_the_hand() {
    let schema = ClockWipeDemo.schema();
    let mut params = ClockWipeDemo.defaults();
    params.set_raw(&schema, "startAngle", "90").unwrap();
    let p = ClockWipeDemo.evaluate(30, &params).unwrap();
    assert_eq!(p.value, 270.0);
    assert_eq!(p.readout("Angle"), Some("270.0°"));
}
