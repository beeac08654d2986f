use super::*;

#[test]
fn rotates_through_full_degrees() {
    let params = FlipDemo.defaults();
    let start = FlipDemo.evaluate(0, &params).unwrap();
    assert_eq!(
        start.style("transform"),
        Some("perspective(1000px) rotateY(0deg)")
    );
    let mid = FlipDemo.evaluate(30, &params).unwrap();
    assert_eq!(mid.value, 90.0);
    let end = FlipDemo.evaluate(45, &params).unwrap();
    assert_eq!(
        end.style("transform"),
        Some("perspective(1000px) rotateY(180deg)")
    );
}

#[test]
fn vertical_axis_uses_rotate_x() {
    let schema = FlipDemo.schema();
    let mut params = FlipDemo.defaults();
    params.set_raw(&schema, "axis", "vertical").unwrap();
    params.set_raw(&schema, "degrees", "360").unwrap();
    let end = FlipDemo.evaluate(59, &params).unwrap();
    assert_eq!(
        end.style("transform"),
        Some("perspective(1000px) rotateX(360deg)")
    );
    let code = FlipDemo.code(0, &params).unwrap();
    assert!(code.contains("rotateX({rotation}deg)"));
}

#[test]
fn degrees_are_clamped_to_slider_range() {
    let schema = FlipDemo.schema();
    let mut params = FlipDemo.defaults();
    params.set_raw(&schema, "degrees", "10").unwrap();
    assert_eq!(params.number("degrees"), Some(90.0));
}
