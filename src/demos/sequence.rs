use std::collections::BTreeMap;

use crate::demos::{Demo, DemoKind, Preview, total_frames_spec};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::{Rng64, fixed, hash_seed};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec, ParamValue};
use crate::params::set::ParamSet;

const SEQUENCES: &str = "sequences";
const NEW_ITEM_LEN: u64 = 30;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Item {
    name: String,
    from: f64,
    duration_in_frames: f64,
    color: String,
}

impl Item {
    fn range(&self) -> FrameRange {
        FrameRange::from_len(
            self.from.max(0.0).round() as u64,
            self.duration_in_frames.max(0.0).round() as u64,
        )
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    total_frames: f64,
    sequences: Vec<Item>,
}

fn item(name: &str, from: f64, duration: f64, color: &str) -> ParamValue {
    ParamValue::Record(BTreeMap::from([
        ("name".to_owned(), ParamValue::text(name)),
        ("from".to_owned(), ParamValue::Number(from)),
        ("durationInFrames".to_owned(), ParamValue::Number(duration)),
        ("color".to_owned(), ParamValue::text(color)),
    ]))
}

/// Frame-ranged segments on a shared timeline, each with its own local progress.
pub struct SequenceDemo;

impl Demo for SequenceDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Sequence
    }

    fn schema(&self) -> ParamSchema {
        let fields = vec![
            ParamSpec::new("name", "Name", ParamKind::Text, "Sequence"),
            ParamSpec::new("from", "From", ParamKind::frames(300.0), 0.0),
            ParamSpec::new(
                "durationInFrames",
                "Duration",
                ParamKind::Number {
                    min: 1.0,
                    max: 300.0,
                    step: 1.0,
                    unit: Some("frames"),
                },
                NEW_ITEM_LEN as f64,
            ),
            ParamSpec::new("color", "Color", ParamKind::Color, "#3b82f6"),
        ];
        ParamSchema::new(vec![
            total_frames_spec(120.0, 60.0, 300.0),
            ParamSpec::new(
                SEQUENCES,
                "Sequences",
                ParamKind::List {
                    item: Box::new(ParamKind::Record { fields }),
                    min_len: 1,
                    max_len: 12,
                    new_item: item("Sequence", 0.0, NEW_ITEM_LEN as f64, "#3b82f6"),
                },
                ParamValue::List(vec![
                    item("Intro", 0.0, 30.0, "#3b82f6"),
                    item("Main", 25.0, 40.0, "#10b981"),
                    item("Outro", 60.0, 30.0, "#f59e0b"),
                ]),
            ),
        ])
    }

    #[tracing::instrument(level = "trace", skip(self, params))]
    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let at = FrameIndex(frame);
        let mut active = 0usize;
        let mut preview = Preview::new(0.0);
        for seq in &p.sequences {
            let range = seq.range();
            let progress = range.progress(at);
            let state = if range.contains(at) {
                active += 1;
                "active"
            } else if at < range.start {
                "pending"
            } else {
                "done"
            };
            preview = preview.with_readout(
                &seq.name,
                format!("{state} {}%", fixed(progress * 100.0, 0)),
            );
        }
        preview.value = active as f64;
        Ok(preview
            .with_style("activeCount", active.to_string())
            .with_readout("Active", active_names(&p.sequences, at)))
    }

    fn code(&self, frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let mut out = String::from("let sequences = [\n");
        for seq in &p.sequences {
            let range = seq.range();
            out.push_str(&format!(
                "    // {}: frames {}-{} ({} frames)\n    FrameRange::from_len({}, {}),\n",
                seq.name,
                range.start.0,
                range.end.0.saturating_sub(1),
                range.len_frames(),
                range.start.0,
                range.len_frames()
            ));
        }
        out.push_str(&format!(
            "];\n// total: {} frames\n// active at frame {frame}: {}",
            p.total_frames,
            active_names(&p.sequences, FrameIndex(frame))
        ));
        Ok(out)
    }

    /// Appends after the last sequence, with a color derived from the item count.
    fn new_item(&self, path: &str, params: &ParamSet) -> Option<ParamValue> {
        if path != SEQUENCES {
            return None;
        }
        let p: Params = params.to_typed().ok()?;
        let from = p
            .sequences
            .iter()
            .map(|s| s.range().end.0)
            .max()
            .unwrap_or(0);
        let n = p.sequences.len() + 1;
        let mut rng = Rng64::new(hash_seed(&format!("sequence-{n}")));
        let hue = rng.next_below(360);
        Some(item(
            &format!("Sequence {n}"),
            from as f64,
            NEW_ITEM_LEN as f64,
            &format!("hsl({hue}, 70%, 50%)"),
        ))
    }
}

/// Comma-separated names of the sequences covering `at`, or `none`.
fn active_names(sequences: &[Item], at: FrameIndex) -> String {
    let names: Vec<&str> = sequences
        .iter()
        .filter(|s| s.range().contains(at))
        .map(|s| s.name.as_str())
        .collect();
    if names.is_empty() {
        "none".to_owned()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/sequence.rs"]
mod tests;
