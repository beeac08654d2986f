//! The demo catalog: one pure `(frame, params) -> Preview` function per animation primitive.
//!
//! Every demo declares a [`ParamSchema`], deserializes its [`ParamSet`] into a typed struct and
//! evaluates without keeping state. A [`DemoSession`](session::DemoSession) adds the timeline.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::foundation::error::{TweenlabError, TweenlabResult};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec, ParamValue};
use crate::params::set::ParamSet;

pub(crate) mod catalog;
pub(crate) mod clock_wipe;
pub(crate) mod colors;
pub(crate) mod easing;
pub(crate) mod fade;
pub(crate) mod flip;
pub(crate) mod freeze;
pub(crate) mod interpolate;
pub(crate) mod iris;
pub(crate) mod looping;
pub(crate) mod noise;
pub(crate) mod sequence;
pub(crate) mod session;
pub(crate) mod slide;
pub(crate) mod spring;
pub(crate) mod wipe;

/// Parameter key every demo uses for its timeline length.
pub const TOTAL_FRAMES: &str = "totalFrames";

/// Labelled text shown next to a preview.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Readout {
    pub label: String,
    pub value: String,
}

/// Output of a demo at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Preview {
    /// The primary numeric result (interpolated value, opacity, noise sample, ...).
    pub value: f64,
    /// CSS-like style properties derived from `value`.
    pub style: BTreeMap<String, String>,
    pub readouts: Vec<Readout>,
}

impl Preview {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            style: BTreeMap::new(),
            readouts: Vec::new(),
        }
    }

    pub fn with_style(mut self, key: &str, value: impl Into<String>) -> Self {
        self.style.insert(key.to_owned(), value.into());
        self
    }

    pub fn with_readout(mut self, label: &str, value: impl Into<String>) -> Self {
        self.readouts.push(Readout {
            label: label.to_owned(),
            value: value.into(),
        });
        self
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        self.style.get(key).map(String::as_str)
    }

    pub fn readout(&self, label: &str) -> Option<&str> {
        self.readouts
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

/// A parameter-adjustable illustration of one animation primitive.
pub trait Demo: Sync {
    fn kind(&self) -> DemoKind;

    fn schema(&self) -> ParamSchema;

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview>;

    /// Rust snippet reproducing the primitive call with the arguments in use.
    fn code(&self, frame: u64, params: &ParamSet) -> TweenlabResult<String>;

    fn total_frames(&self, params: &ParamSet) -> u64 {
        params
            .number(TOTAL_FRAMES)
            .map_or(1, |v| v.max(1.0).round() as u64)
    }

    /// Item appended by `AddItem` on list `path`; `None` uses the schema's default item.
    fn new_item(&self, _path: &str, _params: &ParamSet) -> Option<ParamValue> {
        None
    }

    fn defaults(&self) -> ParamSet {
        ParamSet::defaults(&self.schema())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DemoKind {
    Interpolate,
    InterpolateColors,
    Easing,
    Spring,
    Fade,
    Slide,
    Wipe,
    Flip,
    Iris,
    ClockWipe,
    Noise2d,
    Noise3d,
    Noise4d,
    Sequence,
    Loop,
    Freeze,
}

impl DemoKind {
    pub const ALL: [DemoKind; 16] = [
        Self::Interpolate,
        Self::InterpolateColors,
        Self::Easing,
        Self::Spring,
        Self::Fade,
        Self::Slide,
        Self::Wipe,
        Self::Flip,
        Self::Iris,
        Self::ClockWipe,
        Self::Noise2d,
        Self::Noise3d,
        Self::Noise4d,
        Self::Sequence,
        Self::Loop,
        Self::Freeze,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Interpolate => "interpolate",
            Self::InterpolateColors => "interpolate-colors",
            Self::Easing => "easing",
            Self::Spring => "spring",
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Wipe => "wipe",
            Self::Flip => "flip",
            Self::Iris => "iris",
            Self::ClockWipe => "clock-wipe",
            Self::Noise2d => "noise-2d",
            Self::Noise3d => "noise-3d",
            Self::Noise4d => "noise-4d",
            Self::Sequence => "sequence",
            Self::Loop => "loop",
            Self::Freeze => "freeze",
        }
    }

    pub fn demo(self) -> &'static dyn Demo {
        match self {
            Self::Interpolate => &interpolate::InterpolateDemo,
            Self::InterpolateColors => &colors::InterpolateColorsDemo,
            Self::Easing => &easing::EasingDemo,
            Self::Spring => &spring::SpringDemo,
            Self::Fade => &fade::FadeDemo,
            Self::Slide => &slide::SlideDemo,
            Self::Wipe => &wipe::WipeDemo,
            Self::Flip => &flip::FlipDemo,
            Self::Iris => &iris::IrisDemo,
            Self::ClockWipe => &clock_wipe::ClockWipeDemo,
            Self::Noise2d => &noise::NOISE_2D,
            Self::Noise3d => &noise::NOISE_3D,
            Self::Noise4d => &noise::NOISE_4D,
            Self::Sequence => &sequence::SequenceDemo,
            Self::Loop => &looping::LoopDemo,
            Self::Freeze => &freeze::FreezeDemo,
        }
    }
}

impl FromStr for DemoKind {
    type Err = TweenlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| TweenlabError::validation(format!("unknown demo '{s}'")))
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl serde::Serialize for DemoKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> serde::Deserialize<'de> for DemoKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

pub(crate) fn total_frames_spec(default: f64, min: f64, max: f64) -> ParamSpec {
    ParamSpec::new(
        TOTAL_FRAMES,
        "Total Frames",
        ParamKind::Number {
            min,
            max,
            step: 1.0,
            unit: Some("frames"),
        },
        default,
    )
}

/// `startFrame` / `endFrame` pair of an animation window.
pub(crate) fn window_specs(start: f64, end: f64) -> [ParamSpec; 2] {
    [
        ParamSpec::new("startFrame", "Start Frame", ParamKind::frames(300.0), start),
        ParamSpec::new("endFrame", "End Frame", ParamKind::frames(300.0), end),
    ]
}

/// Edge a slide or wipe moves from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub(crate) const NAMES: &'static [&'static str] = &["left", "right", "up", "down"];
}

/// Demo values degrade to 0 instead of failing the preview.
pub(crate) fn or_zero(demo: DemoKind, what: &str, res: TweenlabResult<f64>) -> f64 {
    match res {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(%demo, what, %err, "evaluation failed, showing 0");
            0.0
        }
    }
}

/// Clamped `[start, end] -> [0, 1]` progress of `frame`.
pub(crate) fn window_progress(frame: f64, start: f64, end: f64) -> TweenlabResult<f64> {
    interpolate(
        frame,
        &[start, end],
        &[0.0, 1.0],
        InterpolateOpts::clamped(),
    )
}

/// CSS number rounded to 3 decimals.
pub(crate) fn css3(v: f64) -> String {
    crate::foundation::math::css_num((v * 1000.0).round() / 1000.0)
}

/// `Vec<f64>` rendered as a Rust slice literal body, e.g. `0.0, 60.0`.
pub(crate) fn slice_lit(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/demos/mod.rs"]
mod tests;
