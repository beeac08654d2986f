use crate::animation::interpolate::{Extrapolate, InterpolateOpts, interpolate};
use crate::demos::{Demo, DemoKind, Preview, or_zero, slice_lit, total_frames_spec};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::{css_num, fixed};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec, ParamValue};
use crate::params::set::ParamSet;

const EXTRAPOLATIONS: &[&str] = &["clamp", "extend", "identity"];

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    input_range: Vec<f64>,
    output_range: Vec<f64>,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
}

impl Params {
    fn opts(&self) -> InterpolateOpts {
        InterpolateOpts {
            left: self.extrapolate_left,
            right: self.extrapolate_right,
            ..InterpolateOpts::default()
        }
    }
}

fn pair(lo: f64, hi: f64) -> ParamKind {
    ParamKind::List {
        item: Box::new(ParamKind::number(lo, hi, 1.0)),
        min_len: 2,
        max_len: 2,
        new_item: ParamValue::Number(0.0),
    }
}

/// Frame mapped onto an output range with independent left/right extrapolation.
pub struct InterpolateDemo;

impl Demo for InterpolateDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Interpolate
    }

    fn schema(&self) -> ParamSchema {
        ParamSchema::new(vec![
            ParamSpec::new(
                "inputRange",
                "Input Range",
                pair(0.0, 200.0),
                vec![0.0, 60.0],
            ),
            ParamSpec::new(
                "outputRange",
                "Output Range",
                pair(-200.0, 400.0),
                vec![0.0, 200.0],
            ),
            total_frames_spec(60.0, 30.0, 300.0),
            ParamSpec::new(
                "extrapolateLeft",
                "Extrapolate Left",
                ParamKind::choice(EXTRAPOLATIONS),
                "clamp",
            ),
            ParamSpec::new(
                "extrapolateRight",
                "Extrapolate Right",
                ParamKind::choice(EXTRAPOLATIONS),
                "clamp",
            ),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let value = or_zero(
            self.kind(),
            "interpolate",
            interpolate(frame as f64, &p.input_range, &p.output_range, p.opts()),
        );
        let marker = (value / 200.0 * 100.0).clamp(0.0, 100.0);
        Ok(Preview::new(value)
            .with_style("left", format!("{}%", css_num(marker)))
            .with_readout("Frame", frame.to_string())
            .with_readout("Value", fixed(value, 2)))
    }

    fn code(&self, _frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        Ok(format!(
            "let value = interpolate(\n    frame,\n    &[{}],\n    &[{}],\n    {},\n)?;",
            slice_lit(&p.input_range),
            slice_lit(&p.output_range),
            p.opts().code()
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/interpolate.rs"]
mod tests;
