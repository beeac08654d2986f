use crate::animation::ease::{EASING_PRESETS, Ease, preset};
use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::demos::{Demo, DemoKind, Preview, or_zero, total_frames_spec};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::{css_num, fixed};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec, ParamValue};
use crate::params::set::ParamSet;

const TRAVEL: f64 = 300.0;
const CURVE_POINTS: usize = 100;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    start_frame: f64,
    end_frame: f64,
    easing_type: String,
    custom_bezier: Vec<f64>,
}

impl Params {
    fn ease(&self) -> TweenlabResult<Ease> {
        let mut control = [0.25, 0.1, 0.25, 1.0];
        for (slot, v) in control.iter_mut().zip(&self.custom_bezier) {
            *slot = *v;
        }
        preset(&self.easing_type, control)
    }

    fn opts(&self) -> TweenlabResult<InterpolateOpts> {
        Ok(InterpolateOpts::clamped().with_easing(self.ease()?))
    }
}

/// SVG path of the easing curve in a 100x100 box, y pointing down.
pub fn curve_path(ease: Ease) -> String {
    let points = (0..=CURVE_POINTS)
        .map(|i| {
            let t = i as f64 / CURVE_POINTS as f64;
            let y = (1.0 - ease.apply(t)) * 100.0;
            format!("{i},{}", css_num((y * 1000.0).round() / 1000.0))
        })
        .collect::<Vec<_>>();
    format!("M {}", points.join(" L "))
}

/// A 300px travel shaped by one of the easing presets.
pub struct EasingDemo;

impl Demo for EasingDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Easing
    }

    fn schema(&self) -> ParamSchema {
        ParamSchema::new(vec![
            ParamSpec::new("startFrame", "Start Frame", ParamKind::frames(300.0), 0.0),
            ParamSpec::new("endFrame", "End Frame", ParamKind::frames(300.0), 60.0),
            total_frames_spec(60.0, 30.0, 300.0),
            ParamSpec::new(
                "easingType",
                "Easing",
                ParamKind::choice(&EASING_PRESETS),
                "linear",
            ),
            ParamSpec::new(
                "customBezier",
                "Bezier Points",
                ParamKind::List {
                    item: Box::new(ParamKind::number(0.0, 1.0, 0.01)),
                    min_len: 4,
                    max_len: 4,
                    new_item: ParamValue::Number(0.0),
                },
                vec![0.25, 0.1, 0.25, 1.0],
            ),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let opts = p.opts()?;
        let range = [p.start_frame, p.end_frame];
        let f = frame as f64;
        let value = or_zero(
            self.kind(),
            "value",
            interpolate(f, &range, &[0.0, TRAVEL], opts),
        );
        let progress = or_zero(
            self.kind(),
            "progress",
            interpolate(f, &range, &[0.0, 1.0], opts),
        );
        Ok(Preview::new(value)
            .with_style("transform", format!("translateX({}px)", css_num(value)))
            .with_style("curve", curve_path(opts.easing))
            .with_readout("Value", fixed(value, 2))
            .with_readout("Progress", format!("{}%", fixed(progress * 100.0, 1))))
    }

    fn code(&self, _frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        Ok(format!(
            "let value = interpolate(\n    frame,\n    &[{:?}, {:?}],\n    &[0.0, {TRAVEL:?}],\n    InterpolateOpts::clamped().with_easing({}),\n)?;",
            p.start_frame,
            p.end_frame,
            p.ease()?.code()
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/easing.rs"]
mod tests;
