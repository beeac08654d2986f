use crate::demos::{
    Demo, DemoKind, Preview, css3, or_zero, total_frames_spec, window_progress, window_specs,
};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::fixed;
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn rotate_fn(self) -> &'static str {
        match self {
            Self::Horizontal => "rotateY",
            Self::Vertical => "rotateX",
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    start_frame: f64,
    end_frame: f64,
    axis: Axis,
    degrees: f64,
    perspective: f64,
}

/// Rotation around the vertical or horizontal axis under perspective.
pub struct FlipDemo;

impl Demo for FlipDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Flip
    }

    fn schema(&self) -> ParamSchema {
        let [start, end] = window_specs(15.0, 45.0);
        ParamSchema::new(vec![
            start,
            end,
            total_frames_spec(60.0, 30.0, 300.0),
            ParamSpec::new(
                "axis",
                "Axis",
                ParamKind::choice(&["horizontal", "vertical"]),
                "horizontal",
            ),
            ParamSpec::new(
                "degrees",
                "Degrees",
                ParamKind::Number {
                    min: 90.0,
                    max: 720.0,
                    step: 15.0,
                    unit: Some("deg"),
                },
                180.0,
            ),
            ParamSpec::new(
                "perspective",
                "Perspective",
                ParamKind::Number {
                    min: 300.0,
                    max: 2000.0,
                    step: 50.0,
                    unit: Some("px"),
                },
                1000.0,
            ),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let progress = or_zero(
            self.kind(),
            "progress",
            window_progress(frame as f64, p.start_frame, p.end_frame),
        );
        let rotation = progress * p.degrees;
        Ok(Preview::new(rotation)
            .with_style(
                "transform",
                format!(
                    "perspective({}px) {}({}deg)",
                    css3(p.perspective),
                    p.axis.rotate_fn(),
                    css3(rotation)
                ),
            )
            .with_readout("Rotation", format!("{}°", fixed(rotation, 1)))
            .with_readout("Progress", format!("{}%", fixed(progress * 100.0, 1))))
    }

    fn code(&self, _frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        Ok(format!(
            "let progress = interpolate(frame, &[{:?}, {:?}], &[0.0, 1.0], InterpolateOpts::clamped())?;\nlet rotation = progress * {:?};\nlet transform = format!(\"perspective({}px) {}({{rotation}}deg)\");",
            p.start_frame,
            p.end_frame,
            p.degrees,
            css3(p.perspective),
            p.axis.rotate_fn()
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/flip.rs"]
mod tests;
