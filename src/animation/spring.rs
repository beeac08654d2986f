use crate::foundation::error::{TweenlabError, TweenlabResult};

/// Longest physics step; longer frame gaps are shortened to this.
const MAX_STEP_SECS: f64 = 0.064;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
    pub overshoot_clamping: bool,
    pub rest_displacement_threshold: f64,
    pub rest_speed_threshold: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 0.01,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> TweenlabResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(TweenlabError::validation("spring mass must be > 0"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(TweenlabError::validation("spring stiffness must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(TweenlabError::validation("spring damping must be >= 0"));
        }
        if self.rest_displacement_threshold < 0.0 || self.rest_speed_threshold < 0.0 {
            return Err(TweenlabError::validation(
                "spring rest thresholds must be >= 0",
            ));
        }
        Ok(())
    }

    /// Damping ratio: below 1 the spring oscillates.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_freq(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringArgs {
    pub frame: f64,
    pub fps: f64,
    pub from: f64,
    pub to: f64,
    pub config: SpringConfig,
}

impl SpringArgs {
    /// Rust expression that rebuilds these arguments.
    pub fn code(&self) -> String {
        let c = &self.config;
        format!(
            "spring(SpringArgs {{\n    frame: {:?},\n    fps: {:?},\n    from: {:?},\n    to: {:?},\n    config: SpringConfig {{\n        damping: {:?},\n        stiffness: {:?},\n        mass: {:?},\n        overshoot_clamping: {},\n        rest_displacement_threshold: {:?},\n        rest_speed_threshold: {:?},\n    }},\n}})",
            self.frame,
            self.fps,
            self.from,
            self.to,
            c.damping,
            c.stiffness,
            c.mass,
            c.overshoot_clamping,
            c.rest_displacement_threshold,
            c.rest_speed_threshold
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpringSample {
    pub value: f64,
    pub velocity: f64,
    pub at_rest: bool,
}

/// Value of a damped spring released at `from` with zero velocity, pulled toward `to`.
pub fn spring(args: SpringArgs) -> TweenlabResult<f64> {
    Ok(simulate(args)?.value)
}

/// Step the spring frame by frame up to `args.frame` (fractional frames allowed).
pub fn simulate(args: SpringArgs) -> TweenlabResult<SpringSample> {
    args.config.validate()?;
    if !(args.fps.is_finite() && args.fps > 0.0) {
        return Err(TweenlabError::validation("spring fps must be > 0"));
    }
    if !(args.frame.is_finite() && args.from.is_finite() && args.to.is_finite()) {
        return Err(TweenlabError::validation(
            "spring frame, from and to must be finite",
        ));
    }

    let cfg = &args.config;
    let frame = args.frame.max(0.0);
    let whole = frame.floor() as u64;
    let rest = frame - frame.floor();

    let mut position = args.from;
    let mut velocity = 0.0;
    let mut last_secs = 0.0;
    let mut at_rest = false;

    for f in 0..=whole {
        let mut f = f as f64;
        if f as u64 == whole {
            f += rest;
        }
        let now = f / args.fps;
        let dt = (now - last_secs).min(MAX_STEP_SECS);
        last_secs = now;

        (position, velocity) = step(position, velocity, args.to, dt, cfg);

        if (args.to - position).abs() < cfg.rest_displacement_threshold
            && velocity.abs() < cfg.rest_speed_threshold
        {
            position = args.to;
            velocity = 0.0;
            at_rest = true;
            break;
        }
    }

    if cfg.overshoot_clamping {
        position = if args.to >= args.from {
            position.min(args.to)
        } else {
            position.max(args.to)
        };
    }

    Ok(SpringSample {
        value: position,
        velocity,
        at_rest,
    })
}

/// First frame at which the spring is at rest, searching up to `max_frames`.
pub fn settle_frame(args: SpringArgs, max_frames: u64) -> TweenlabResult<Option<u64>> {
    for f in 0..=max_frames {
        let s = simulate(SpringArgs {
            frame: f as f64,
            ..args
        })?;
        if s.at_rest {
            return Ok(Some(f));
        }
    }
    Ok(None)
}

/// Advance displacement from `target` analytically by `dt` seconds.
fn step(position: f64, velocity: f64, target: f64, dt: f64, cfg: &SpringConfig) -> (f64, f64) {
    if dt <= 0.0 {
        return (position, velocity);
    }

    let d0 = position - target;
    let v0 = velocity;
    let zeta = cfg.damping_ratio();
    let w0 = cfg.natural_freq();

    let (d, v) = if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let alpha = zeta * w0;
        let b = (v0 + alpha * d0) / wd;
        let env = (-alpha * dt).exp();
        let (sin, cos) = (wd * dt).sin_cos();
        let d = env * (d0 * cos + b * sin);
        let v = -alpha * d + env * (-d0 * wd * sin + b * wd * cos);
        (d, v)
    } else if zeta == 1.0 {
        let env = (-w0 * dt).exp();
        let k = v0 + w0 * d0;
        let d = env * (d0 + k * dt);
        let v = -w0 * d + env * k;
        (d, v)
    } else {
        let s = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - s);
        let r2 = -w0 * (zeta + s);
        let c2 = (v0 - r1 * d0) / (r2 - r1);
        let c1 = d0 - c2;
        let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    };

    (target + d, v)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
