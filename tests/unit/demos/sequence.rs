use super::*;

fn readout(frame: u64, label: &str) -> String {
    let defaults = SequenceDemo.defaults();
    let preview = SequenceDemo.evaluate(frame, &defaults).unwrap();
    preview.readout(label).unwrap().to_owned()
}

#[test]
fn active_set_uses_half_open_ranges() {
    let params = SequenceDemo.defaults();
    let count = |f| SequenceDemo.evaluate(f, &params).unwrap().value;
    assert_eq!(count(0), 1.0);
    assert_eq!(count(27), 2.0); // Intro and Main overlap on 25..30
    assert_eq!(count(30), 1.0);
    assert_eq!(count(89), 1.0);
    assert_eq!(count(90), 0.0);
    assert_eq!(readout(27, "Active"), "Intro, Main");
    assert_eq!(readout(100, "Active"), "none");
}

#[test]
fn per_sequence_progress_is_zero_ratio_one() {
    assert_eq!(readout(15, "Intro"), "active 50%");
    assert_eq!(readout(15, "Main"), "pending 0%");
    assert_eq!(readout(45, "Main"), "active 50%");
    assert_eq!(readout(45, "Intro"), "done 100%");
}

#[test]
fn new_item_starts_after_the_last_sequence() {
    let params = SequenceDemo.defaults();
    let item = SequenceDemo.new_item("sequences", &params).unwrap();
    let ParamValue::Record(fields) = &item else {
        panic!("expected record, got {item:?}");
    };
    assert_eq!(fields["name"].as_str(), Some("Sequence 4"));
    assert_eq!(fields["from"].as_f64(), Some(90.0));
    assert_eq!(fields["durationInFrames"].as_f64(), Some(30.0));
    let color = fields["color"].as_str().unwrap();
    assert!(color.starts_with("hsl("), "{color}");

    // Deterministic and valid for the schema.
    assert_eq!(
        SequenceDemo.new_item("sequences", &params),
        Some(item.clone())
    );
    let mut params = params;
    params
        .push_item(&SequenceDemo.schema(), "sequences", item)
        .unwrap();
    assert_eq!(
        params.get("sequences.3.name").and_then(|v| v.as_str()),
        Some("Sequence 4")
    );
    assert_eq!(SequenceDemo.new_item("other", &params), None);
}

#[test]
fn last_sequence_cannot_be_removed() {
    let schema = SequenceDemo.schema();
    let mut params = SequenceDemo.defaults();
    params.remove_item(&schema, "sequences", 0).unwrap();
    params.remove_item(&schema, "sequences", 0).unwrap();
    assert!(params.remove_item(&schema, "sequences", 0).is_err());
}

#[test]
fn code_lists_ranges_and_active_names() {
    let code = SequenceDemo.code(27, &SequenceDemo.defaults()).unwrap();
    assert!(code.contains("// Main: frames 25-64 (40 frames)"), "{code}");
    assert!(code.contains("FrameRange::from_len(60, 30)"), "{code}");
    assert!(
        code.contains("// active at frame 27: Intro, Main"),
        "{code}"
    );
}
