use crate::animation::ops::{FreezeMode, FreezeWindow};
use crate::demos::{Demo, DemoKind, Preview, css3, or_zero, total_frames_spec, window_progress};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::fixed;
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum Animation {
    Scale,
    Rotation,
    Position,
    Opacity,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    freeze_frame: f64,
    animation_start_frame: f64,
    animation_end_frame: f64,
    animation_type: Animation,
    freeze_type: FreezeMode,
}

impl Params {
    fn window(&self) -> FreezeWindow {
        let frame = |v: f64| v.max(0.0).round() as u64;
        FreezeWindow {
            anim_start: frame(self.animation_start_frame),
            anim_end: frame(self.animation_end_frame),
            freeze_at: frame(self.freeze_frame),
        }
    }
}

/// An animation over `[start, freeze]` held, looped or bounced once the freeze frame is reached.
pub struct FreezeDemo;

impl Demo for FreezeDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Freeze
    }

    fn schema(&self) -> ParamSchema {
        ParamSchema::new(vec![
            total_frames_spec(120.0, 60.0, 200.0),
            ParamSpec::new(
                "animationStartFrame",
                "Animation Start Frame",
                ParamKind::frames(190.0),
                0.0,
            ),
            ParamSpec::new(
                "freezeFrame",
                "Freeze Frame",
                ParamKind::frames(200.0),
                30.0,
            ),
            ParamSpec::new(
                "animationEndFrame",
                "Animation End Frame",
                ParamKind::frames(200.0),
                60.0,
            ),
            ParamSpec::new(
                "animationType",
                "Animation",
                ParamKind::choice(&["scale", "rotation", "position", "opacity"]),
                "scale",
            ),
            ParamSpec::new(
                "freezeType",
                "Freeze Type",
                ParamKind::choice(&["clamp", "loop", "reverse"]),
                "clamp",
            ),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let window = p.window();
        let effective = window.remap(frame, p.freeze_type);
        let progress = or_zero(
            self.kind(),
            "progress",
            window_progress(
                effective as f64,
                window.anim_start as f64,
                window.freeze_at as f64,
            ),
        );

        let preview = match p.animation_type {
            Animation::Scale => {
                let s = 0.5 + progress * 1.5;
                Preview::new(s).with_style("transform", format!("scale({})", css3(s)))
            }
            Animation::Rotation => {
                let deg = progress * 360.0;
                Preview::new(deg).with_style("transform", format!("rotate({}deg)", css3(deg)))
            }
            Animation::Position => {
                let x = progress * 200.0;
                Preview::new(x).with_style("transform", format!("translateX({}px)", css3(x)))
            }
            Animation::Opacity => Preview::new(progress).with_style("opacity", css3(progress)),
        };

        let frozen = window.is_frozen(frame, p.freeze_type);
        Ok(preview
            .with_readout("Frame", format!("{frame} -> {effective}"))
            .with_readout("Progress", fixed(progress, 3))
            .with_readout("Frozen", if frozen { "yes" } else { "no" }))
    }

    fn code(&self, frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let w = p.window();
        let mode = match p.freeze_type {
            FreezeMode::Clamp => "FreezeMode::Clamp",
            FreezeMode::Loop => "FreezeMode::Loop",
            FreezeMode::Reverse => "FreezeMode::Reverse",
        };
        let value = match p.animation_type {
            Animation::Scale => "let scale = 0.5 + progress * 1.5;",
            Animation::Rotation => "let rotation = progress * 360.0;",
            Animation::Position => "let x = progress * 200.0;",
            Animation::Opacity => "let opacity = progress;",
        };
        Ok(format!(
            "let window = FreezeWindow {{\n    anim_start: {},\n    anim_end: {},\n    freeze_at: {},\n}};\nlet effective = window.remap(frame, {mode}); // {frame} -> {}\nlet progress = interpolate(\n    effective as f64,\n    &[{:?}, {:?}],\n    &[0.0, 1.0],\n    InterpolateOpts::clamped(),\n)?;\n{value}",
            w.anim_start,
            w.anim_end,
            w.freeze_at,
            w.remap(frame, p.freeze_type),
            w.anim_start as f64,
            w.freeze_at as f64,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/freeze.rs"]
mod tests;
