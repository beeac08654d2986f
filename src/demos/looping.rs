use std::f64::consts::TAU;

use crate::animation::color::Color;
use crate::animation::ops::{LoopMode, loop_cycle, loop_frame};
use crate::demos::{Demo, DemoKind, Preview, css3, total_frames_spec};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::{fixed, safe_ratio};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum Animation {
    Rotation,
    Scale,
    Position,
    Color,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    loop_duration: f64,
    loop_type: LoopMode,
    animation_type: Animation,
    intensity: f64,
}

impl Params {
    fn duration(&self) -> u64 {
        self.loop_duration.max(0.0).round() as u64
    }

    fn progress(&self, frame: u64) -> (u64, f64) {
        let lf = loop_frame(frame, self.duration(), self.loop_type);
        (lf, safe_ratio(lf as f64, self.duration() as f64))
    }
}

fn mode_path(mode: LoopMode) -> &'static str {
    match mode {
        LoopMode::Restart => "LoopMode::Restart",
        LoopMode::Reverse => "LoopMode::Reverse",
        LoopMode::PingPong => "LoopMode::PingPong",
    }
}

/// A short animation repeated over a longer timeline.
pub struct LoopDemo;

impl Demo for LoopDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Loop
    }

    fn schema(&self) -> ParamSchema {
        ParamSchema::new(vec![
            total_frames_spec(120.0, 60.0, 300.0),
            ParamSpec::new(
                "loopDuration",
                "Loop Duration",
                ParamKind::Number {
                    min: 10.0,
                    max: 60.0,
                    step: 1.0,
                    unit: Some("frames"),
                },
                30.0,
            ),
            ParamSpec::new(
                "loopType",
                "Loop Type",
                ParamKind::choice(&["restart", "reverse", "pingpong"]),
                "restart",
            ),
            ParamSpec::new(
                "animationType",
                "Animation",
                ParamKind::choice(&["rotation", "scale", "position", "color"]),
                "rotation",
            ),
            ParamSpec::new(
                "intensity",
                "Intensity",
                ParamKind::number(0.1, 3.0, 0.1),
                1.0,
            ),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let (lf, progress) = p.progress(frame);
        let wave = (progress * TAU).sin();

        let preview = match p.animation_type {
            Animation::Rotation => {
                let deg = progress * 360.0 * p.intensity;
                Preview::new(deg).with_style("transform", format!("rotate({}deg)", css3(deg)))
            }
            Animation::Scale => {
                let scale = 0.5 + (wave * 0.5 + 0.5) * p.intensity;
                Preview::new(scale).with_style("transform", format!("scale({})", css3(scale)))
            }
            Animation::Position => {
                let x = wave * 100.0 * p.intensity;
                Preview::new(x).with_style("transform", format!("translateX({}px)", css3(x)))
            }
            Animation::Color => {
                let hue = progress * 360.0;
                let css = Color::from_hsla(hue, 0.7, 0.5, 1.0).to_css();
                Preview::new(hue).with_style("backgroundColor", css)
            }
        };

        Ok(preview
            .with_readout("Loop Frame", format!("{lf} / {}", p.duration()))
            .with_readout("Cycle", loop_cycle(frame, p.duration()).to_string())
            .with_readout("Progress", format!("{}%", fixed(progress * 100.0, 1))))
    }

    fn code(&self, frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let (lf, _) = p.progress(frame);
        let value = match p.animation_type {
            Animation::Rotation => format!("let rotation = progress * 360.0 * {:?};", p.intensity),
            Animation::Scale => format!(
                "let scale = 0.5 + ((progress * TAU).sin() * 0.5 + 0.5) * {:?};",
                p.intensity
            ),
            Animation::Position => format!(
                "let x = (progress * TAU).sin() * 100.0 * {:?};",
                p.intensity
            ),
            Animation::Color => {
                "let color = Color::from_hsla(progress * 360.0, 0.7, 0.5, 1.0);".to_owned()
            }
        };
        Ok(format!(
            "let loop_frame = loop_frame(frame, {d}, {mode}); // {lf}\nlet progress = loop_frame as f64 / {d}.0;\n{value}",
            d = p.duration(),
            mode = mode_path(p.loop_type),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/looping.rs"]
mod tests;
