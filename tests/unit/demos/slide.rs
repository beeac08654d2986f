use super::*;

fn with(direction: &str, easing: &str) -> ParamSet {
    let schema = SlideDemo.schema();
    let mut params = SlideDemo.defaults();
    params.set_raw(&schema, "direction", direction).unwrap();
    params.set_raw(&schema, "easing", easing).unwrap();
    params
}

#[test]
fn starts_offscreen_and_lands_at_rest() {
    let params = with("left", "ease");
    let first = SlideDemo.evaluate(0, &params).unwrap();
    assert_eq!(first.style("transform"), Some("translateX(-300px)"));
    let last = SlideDemo.evaluate(50, &params).unwrap();
    assert_eq!(last.value, 0.0);
    assert_eq!(last.style("transform"), Some("translateX(0)"));
}

#[test]
fn direction_picks_axis_and_sign() {
    let at_start = |dir| {
        SlideDemo
            .evaluate(0, &with(dir, "linear"))
            .unwrap()
            .style("transform")
            .map(str::to_owned)
    };
    assert_eq!(at_start("right").as_deref(), Some("translateX(300px)"));
    assert_eq!(at_start("up").as_deref(), Some("translateY(-300px)"));
    assert_eq!(at_start("down").as_deref(), Some("translateY(300px)"));
}

#[test]
fn easings_shape_the_midpoint() {
    let mid = |easing| SlideDemo.evaluate(30, &with("left", easing)).unwrap().value;
    assert_eq!(mid("linear"), 150.0);
    assert_eq!(mid("ease"), 150.0);
    assert_eq!(mid("easeIn"), 225.0);
    assert_eq!(mid("easeOut"), 75.0);
}

#[test]
fn code_mentions_axis() {
    let code = SlideDemo.code(0, &with("up", "easeIn")).unwrap();
    assert!(code.contains("translateY(-{offset}px)"), "{code}");
    assert!(code.contains("Ease::in_(Curve::Quad)"), "{code}");
}
