use std::collections::BTreeMap;

use crate::animation::spring::{SpringArgs, SpringConfig, simulate};
use crate::demos::{Demo, DemoKind, Preview, css3, total_frames_spec};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::{fixed, safe_ratio};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec, ParamValue};
use crate::params::set::ParamSet;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    fps: f64,
    from: f64,
    to: f64,
    config: SpringConfig,
}

impl Params {
    fn args(&self, frame: u64) -> SpringArgs {
        SpringArgs {
            frame: frame as f64,
            fps: self.fps,
            from: self.from,
            to: self.to,
            config: self.config,
        }
    }
}

fn config_kind() -> ParamKind {
    let threshold = || ParamKind::number(0.001, 0.1, 0.001);
    ParamKind::Record {
        fields: vec![
            ParamSpec::new(
                "damping",
                "Damping",
                ParamKind::number(1.0, 50.0, 0.1),
                10.0,
            ),
            ParamSpec::new(
                "stiffness",
                "Stiffness",
                ParamKind::number(10.0, 500.0, 1.0),
                100.0,
            ),
            ParamSpec::new("mass", "Mass", ParamKind::number(0.1, 5.0, 0.1), 1.0),
            ParamSpec::new(
                "overshootClamping",
                "Overshoot Clamping",
                ParamKind::Flag,
                false,
            ),
            ParamSpec::new(
                "restDisplacementThreshold",
                "Rest Displacement Threshold",
                threshold(),
                0.01,
            ),
            ParamSpec::new(
                "restSpeedThreshold",
                "Rest Speed Threshold",
                threshold(),
                0.01,
            ),
        ],
    }
}

fn config_default(kind: &ParamKind) -> ParamValue {
    let ParamKind::Record { fields } = kind else {
        return ParamValue::Record(BTreeMap::new());
    };
    ParamValue::Record(
        fields
            .iter()
            .map(|f| (f.key.to_owned(), f.default.clone()))
            .collect(),
    )
}

/// Damped spring released at `from` and pulled toward `to`.
pub struct SpringDemo;

impl Demo for SpringDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Spring
    }

    fn schema(&self) -> ParamSchema {
        let config = config_kind();
        let config_default = config_default(&config);
        ParamSchema::new(vec![
            ParamSpec::new("fps", "FPS", ParamKind::number(15.0, 60.0, 1.0), 30.0),
            total_frames_spec(120.0, 30.0, 600.0),
            ParamSpec::new("from", "From", ParamKind::pixels(-200.0, 200.0), 0.0),
            ParamSpec::new("to", "To", ParamKind::pixels(-200.0, 500.0), 300.0),
            ParamSpec::new("config", "Config", config, config_default),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let sample = simulate(p.args(frame))?;
        let ratio = safe_ratio(sample.value - p.from, p.to - p.from);
        let left = (ratio * 84.0 + 8.0).clamp(8.0, 92.0);
        Ok(Preview::new(sample.value)
            .with_style("left", format!("{}%", css3(left)))
            .with_readout("Value", fixed(sample.value, 2))
            .with_readout("Velocity", fixed(sample.velocity, 2))
            .with_readout("At Rest", sample.at_rest.to_string())
            .with_readout("Damping Ratio", fixed(p.config.damping_ratio(), 3)))
    }

    fn code(&self, frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        Ok(format!("let value = {}?;", p.args(frame).code()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/spring.rs"]
mod tests;
