use super::*;

#[test]
fn preview_builder_collects_style_and_readouts() {
    let p = Preview::new(0.5)
        .with_style("opacity", "0.5")
        .with_readout("Opacity", "0.50")
        .with_readout("Frame", "3");
    assert_eq!(p.style("opacity"), Some("0.5"));
    assert_eq!(p.style("transform"), None);
    assert_eq!(p.readout("Frame"), Some("3"));
    assert_eq!(p.readouts.len(), 2);
}

#[test]
fn demo_ids_round_trip() {
    for kind in DemoKind::ALL {
        assert_eq!(kind.id().parse::<DemoKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.id());
        assert_eq!(kind.demo().kind(), kind);
    }
    assert!("noise-5d".parse::<DemoKind>().is_err());
}

#[test]
fn every_demo_evaluates_across_its_timeline() {
    for kind in DemoKind::ALL {
        let demo = kind.demo();
        let params = demo.defaults();
        let total = demo.total_frames(&params);
        assert!(total > 1, "{kind}");
        for frame in 0..total {
            let preview = demo
                .evaluate(frame, &params)
                .unwrap_or_else(|e| panic!("{kind} @ {frame}: {e}"));
            assert!(preview.value.is_finite(), "{kind} @ {frame}");
        }
        let code = demo.code(total / 2, &params).unwrap();
        assert!(!code.is_empty(), "{kind}");
    }
}

#[test]
fn every_default_is_valid_for_its_schema() {
    for kind in DemoKind::ALL {
        let schema = kind.demo().schema();
        for spec in schema.fields() {
            let coerced = spec.kind.coerce(spec.default.clone()).unwrap();
            assert_eq!(coerced, spec.default, "{kind}.{}", spec.key);
        }
    }
}

#[test]
fn failed_values_fall_back_to_zero() {
    let err = Err(TweenlabError::evaluation("boom"));
    assert_eq!(or_zero(DemoKind::Fade, "opacity", err), 0.0);
    assert_eq!(or_zero(DemoKind::Fade, "opacity", Ok(0.25)), 0.25);
}

#[test]
fn window_progress_is_clamped() {
    assert_eq!(window_progress(-5.0, 0.0, 10.0).unwrap(), 0.0);
    assert_eq!(window_progress(5.0, 0.0, 10.0).unwrap(), 0.5);
    assert_eq!(window_progress(50.0, 0.0, 10.0).unwrap(), 1.0);
}

#[test]
fn number_helpers_render_compactly() {
    assert_eq!(css3(12.34567), "12.346");
    assert_eq!(css3(-0.0001), "0");
    assert_eq!(slice_lit(&[0.0, 60.5]), "0.0, 60.5");
}
