use super::*;
use crate::params::schema::ParamSpec;

fn schema() -> ParamSchema {
    ParamSchema::new(vec![
        ParamSpec::new(
            "totalFrames",
            "Total frames",
            ParamKind::frames(600.0),
            60.0,
        ),
        ParamSpec::new("mode", "Mode", ParamKind::choice(&["a", "b"]), "a"),
        ParamSpec::new(
            "colors",
            "Colors",
            ParamKind::List {
                item: Box::new(ParamKind::Color),
                min_len: 2,
                max_len: 3,
                new_item: ParamValue::text("#ffffff"),
            },
            vec!["#ff0000", "#0000ff"],
        ),
    ])
}

#[test]
fn defaults_follow_schema() {
    let set = ParamSet::defaults(&schema());
    assert_eq!(set.number("totalFrames"), Some(60.0));
    assert_eq!(set.get("mode"), Some(&ParamValue::text("a")));
    assert_eq!(set.get("colors.1"), Some(&ParamValue::text("#0000ff")));
    assert_eq!(set.get("colors.7"), None);
}

#[test]
fn set_raw_addresses_nested_items() {
    let s = schema();
    let mut set = ParamSet::defaults(&s);
    set.set_raw(&s, "colors.1", "#00ff00").unwrap();
    assert_eq!(set.get("colors.1"), Some(&ParamValue::text("#00ff00")));
    assert!(set.set_raw(&s, "colors.5", "#00ff00").is_err());
    set.set_raw(&s, "totalFrames", "nonsense").unwrap();
    assert_eq!(set.number("totalFrames"), Some(0.0));
}

#[test]
fn rejected_input_leaves_value_untouched() {
    let s = schema();
    let mut set = ParamSet::defaults(&s);
    assert!(set.set_raw(&s, "mode", "c").is_err());
    assert_eq!(set.get("mode"), Some(&ParamValue::text("a")));
}

#[test]
fn list_length_is_bounded_both_ways() {
    let s = schema();
    let mut set = ParamSet::defaults(&s);
    assert!(set.remove_item(&s, "colors", 0).is_err());
    let white = || ParamValue::text("#ffffff");
    assert_eq!(set.push_item(&s, "colors", white()).unwrap(), 3);
    assert!(set.push_item(&s, "colors", white()).is_err());
    assert!(set.remove_item(&s, "colors", 9).is_err());
    assert_eq!(
        set.remove_item(&s, "colors", 0).unwrap(),
        ParamValue::text("#ff0000")
    );
    assert_eq!(set.get("colors.0"), Some(&ParamValue::text("#0000ff")));
    assert!(set.push_item(&s, "mode", ParamValue::text("a")).is_err());
}

#[test]
fn merge_json_is_partial() {
    let s = schema();
    let mut set = ParamSet::defaults(&s);
    let partial = serde_json::json!({ "mode": "b", "totalFrames": 9000 });
    set.merge_json(&s, partial.as_object().unwrap()).unwrap();
    assert_eq!(set.get("mode"), Some(&ParamValue::text("b")));
    assert_eq!(set.number("totalFrames"), Some(600.0));
    assert_eq!(set.get("colors.0"), Some(&ParamValue::text("#ff0000")));
}

#[test]
fn converts_to_typed_struct() {
    #[derive(serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Typed {
        total_frames: f64,
        mode: String,
        colors: Vec<String>,
    }

    let set = ParamSet::defaults(&schema());
    let t: Typed = set.to_typed().unwrap();
    assert_eq!(t.total_frames, 60.0);
    assert_eq!(t.mode, "a");
    assert_eq!(t.colors.len(), 2);
}
