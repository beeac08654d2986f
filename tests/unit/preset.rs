use super::*;

fn temp_file(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "tweenlab_{name}_{}_{}.json",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn minimal_preset_uses_defaults() {
    let p = Preset::from_json_str(r#"{ "demo": "noise-3d" }"#).unwrap();
    assert_eq!(p, Preset::new(DemoKind::Noise3d));
}

#[test]
fn unknown_demo_and_fields_are_rejected() {
    assert!(Preset::from_json_str(r#"{ "demo": "blur" }"#).is_err());
    assert!(
        Preset::from_json_str(r#"{ "demo": "fade", "fps": 60 }"#).is_err()
    );
}

#[test]
fn save_then_load_keeps_everything() {
    let mut preset = Preset::new(DemoKind::Spring);
    preset.frame = 12;
    preset.playing = true;
    preset
        .params
        .insert("to".to_owned(), serde_json::json!(150.0));

    let path = temp_file("save_load");
    preset.save(&path).unwrap();
    let loaded = Preset::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, preset);
}

#[test]
fn missing_file_reports_the_path() {
    let path = temp_file("missing");
    let err = Preset::load(&path).unwrap_err().to_string();
    assert!(err.contains("read preset"), "{err}");
}
