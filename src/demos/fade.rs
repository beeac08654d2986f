use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::demos::{Demo, DemoKind, Preview, or_zero, total_frames_spec, window_specs};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::{css_num, fixed};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
enum FadeType {
    In,
    Out,
    InOut,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    start_frame: f64,
    end_frame: f64,
    fade_type: FadeType,
    duration: f64,
}

/// One clamped opacity ramp.
struct Ramp {
    input: [f64; 2],
    output: [f64; 2],
}

impl Ramp {
    const FADE_IN: [f64; 2] = [0.0, 1.0];
    const FADE_OUT: [f64; 2] = [1.0, 0.0];

    fn code(&self) -> String {
        format!(
            "interpolate(frame, &[{:?}, {:?}], &[{:?}, {:?}], InterpolateOpts::clamped())",
            self.input[0], self.input[1], self.output[0], self.output[1]
        )
    }
}

impl Params {
    fn fade_in(&self, len: f64) -> Ramp {
        Ramp {
            input: [self.start_frame, self.start_frame + len],
            output: Ramp::FADE_IN,
        }
    }

    fn fade_out(&self, len: f64) -> Ramp {
        Ramp {
            input: [self.end_frame - len, self.end_frame],
            output: Ramp::FADE_OUT,
        }
    }

    /// Frame at which `inOut` switches from the in ramp to the out ramp.
    fn midpoint(&self) -> f64 {
        self.start_frame + self.duration / 2.0
    }

    fn ramp(&self, frame: f64) -> Ramp {
        match self.fade_type {
            FadeType::In => self.fade_in(self.duration),
            FadeType::Out => self.fade_out(self.duration),
            FadeType::InOut if frame < self.midpoint() => self.fade_in(self.duration / 2.0),
            FadeType::InOut => self.fade_out(self.duration / 2.0),
        }
    }
}

/// Opacity ramps in, out, or in then out.
pub struct FadeDemo;

impl Demo for FadeDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Fade
    }

    fn schema(&self) -> ParamSchema {
        let [start, end] = window_specs(10.0, 50.0);
        ParamSchema::new(vec![
            start,
            end,
            total_frames_spec(60.0, 30.0, 300.0),
            ParamSpec::new(
                "fadeType",
                "Fade Type",
                ParamKind::choice(&["in", "out", "inOut"]),
                "in",
            ),
            ParamSpec::new("duration", "Duration", ParamKind::frames(120.0), 30.0),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let f = frame as f64;
        let ramp = p.ramp(f);
        let opacity = or_zero(
            self.kind(),
            "opacity",
            interpolate(f, &ramp.input, &ramp.output, InterpolateOpts::clamped()),
        );
        Ok(Preview::new(opacity)
            .with_style("opacity", css_num(opacity))
            .with_readout("Opacity", fixed(opacity, 2)))
    }

    fn code(&self, _frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let body = match p.fade_type {
            FadeType::In => format!("let opacity = {}?;", p.fade_in(p.duration).code()),
            FadeType::Out => format!("let opacity = {}?;", p.fade_out(p.duration).code()),
            FadeType::InOut => format!(
                "let opacity = if frame < {:?} {{\n    {}?\n}} else {{\n    {}?\n}};",
                p.midpoint(),
                p.fade_in(p.duration / 2.0).code(),
                p.fade_out(p.duration / 2.0).code()
            ),
        };
        Ok(body)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/fade.rs"]
mod tests;
