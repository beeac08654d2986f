use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{TweenlabError, TweenlabResult};

/// Base easing curve, evaluated in its "in" orientation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum Curve {
    /// Identity.
    Linear,
    /// The library's `Easing.ease`, `bezier(0.42, 0, 1, 1)`.
    Ease,
    /// `t^2`.
    Quad,
    /// `t^3`.
    Cubic,
    /// `t^n`.
    Poly { n: f64 },
    /// Quarter cosine.
    Sin,
    /// Quarter circle.
    Circle,
    /// `2^(10(t-1))`.
    Exp,
    /// Damped cosine overshoot.
    Elastic { bounciness: f64 },
    /// Pull back by `s` before moving forward.
    Back { s: f64 },
    /// Decaying parabolic bounces.
    Bounce,
    /// Cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    Bezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// How a [`Curve`] is oriented over `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseMode {
    #[default]
    In,
    Out,
    InOut,
}

/// Easing function used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ease {
    #[serde(flatten)]
    pub curve: Curve,
    #[serde(default)]
    pub mode: EaseMode,
}

impl Ease {
    pub const LINEAR: Ease = Ease::in_(Curve::Linear);
    pub const IN_QUAD: Ease = Ease::in_(Curve::Quad);
    pub const OUT_QUAD: Ease = Ease::out(Curve::Quad);
    pub const IN_OUT_QUAD: Ease = Ease::in_out(Curve::Quad);
    pub const IN_CUBIC: Ease = Ease::in_(Curve::Cubic);
    pub const OUT_CUBIC: Ease = Ease::out(Curve::Cubic);
    pub const IN_OUT_CUBIC: Ease = Ease::in_out(Curve::Cubic);

    pub const fn in_(curve: Curve) -> Self {
        Self {
            curve,
            mode: EaseMode::In,
        }
    }

    pub const fn out(curve: Curve) -> Self {
        Self {
            curve,
            mode: EaseMode::Out,
        }
    }

    pub const fn in_out(curve: Curve) -> Self {
        Self {
            curve,
            mode: EaseMode::InOut,
        }
    }

    /// Apply this easing to progress `t`. Input is clamped to `[0, 1]` and both endpoints are
    /// exact for every curve.
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.mode {
            EaseMode::In => self.curve.eval(t),
            EaseMode::Out => 1.0 - self.curve.eval(1.0 - t),
            EaseMode::InOut => {
                if t < 0.5 {
                    self.curve.eval(t * 2.0) / 2.0
                } else {
                    1.0 - self.curve.eval((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }

    /// Rust expression that rebuilds this easing.
    pub fn code(self) -> String {
        let curve = self.curve.code();
        match self.mode {
            EaseMode::In => format!("Ease::in_({curve})"),
            EaseMode::Out => format!("Ease::out({curve})"),
            EaseMode::InOut => format!("Ease::in_out({curve})"),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::LINEAR
    }
}

impl Curve {
    /// Raw curve value on `[0, 1]`.
    pub fn eval(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::Quad => t * t,
            Self::Cubic => t * t * t,
            Self::Poly { n } => t.powf(n),
            Self::Sin => 1.0 - (t * PI / 2.0).cos(),
            Self::Circle => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Self::Exp => 2f64.powf(10.0 * (t - 1.0)),
            Self::Elastic { bounciness } => {
                let p = bounciness * PI;
                1.0 - (t * PI / 2.0).cos().powi(3) * (t * p).cos()
            }
            Self::Back { s } => t * t * ((s + 1.0) * t - s),
            Self::Bounce => bounce(t),
            Self::Bezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    fn code(self) -> String {
        match self {
            Self::Linear => "Curve::Linear".to_owned(),
            Self::Ease => "Curve::Ease".to_owned(),
            Self::Quad => "Curve::Quad".to_owned(),
            Self::Cubic => "Curve::Cubic".to_owned(),
            Self::Poly { n } => format!("Curve::Poly {{ n: {n:?} }}"),
            Self::Sin => "Curve::Sin".to_owned(),
            Self::Circle => "Curve::Circle".to_owned(),
            Self::Exp => "Curve::Exp".to_owned(),
            Self::Elastic { bounciness } => {
                format!("Curve::Elastic {{ bounciness: {bounciness:?} }}")
            }
            Self::Back { s } => format!("Curve::Back {{ s: {s:?} }}"),
            Self::Bounce => "Curve::Bounce".to_owned(),
            Self::Bezier { x1, y1, x2, y2 } => {
                format!("Curve::Bezier {{ x1: {x1:?}, y1: {y1:?}, x2: {x2:?}, y2: {y2:?} }}")
            }
        }
    }
}

fn bounce(t: f64) -> f64 {
    const K: f64 = 7.5625;
    if t < 1.0 / 2.75 {
        K * t * t
    } else if t < 2.0 / 2.75 {
        let t2 = t - 1.5 / 2.75;
        K * t2 * t2 + 0.75
    } else if t < 2.5 / 2.75 {
        let t2 = t - 2.25 / 2.75;
        K * t2 * t2 + 0.9375
    } else {
        let t2 = t - 2.625 / 2.75;
        K * t2 * t2 + 0.984375
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    // Control x values outside [0, 1] would make the curve non-monotonic in x.
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);
    if x1 == y1 && x2 == y2 {
        return x;
    }
    let u = solve_bezier_param(x, x1, x2);
    bezier_coord(u, y1, y2)
}

fn bezier_coord(u: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * u + b) * u + c) * u
}

fn bezier_slope(u: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    3.0 * a * u * u + 2.0 * b * u + c
}

fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier_coord(u, x1, x2) - x;
        if err.abs() < EPS {
            return u;
        }
        let slope = bezier_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..64 {
        let v = bezier_coord(u, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    u
}

/// The named easing presets offered by the easing demo.
pub const EASING_PRESETS: [&str; 15] = [
    "linear",
    "ease",
    "easeIn",
    "easeOut",
    "easeInOut",
    "quad",
    "cubic",
    "poly",
    "sin",
    "circle",
    "exp",
    "elastic",
    "back",
    "bounce",
    "bezier",
];

/// Resolve a preset name. `bezier` uses `control` as its four control values.
pub fn preset(name: &str, control: [f64; 4]) -> TweenlabResult<Ease> {
    let ease = match name {
        "linear" => Ease::LINEAR,
        "ease" | "easeIn" => Ease::in_(Curve::Ease),
        "easeOut" => Ease::out(Curve::Ease),
        "easeInOut" => Ease::in_out(Curve::Ease),
        "quad" => Ease::in_(Curve::Quad),
        "cubic" => Ease::in_(Curve::Cubic),
        "poly" => Ease::in_(Curve::Poly { n: 4.0 }),
        "sin" => Ease::in_(Curve::Sin),
        "circle" => Ease::in_(Curve::Circle),
        "exp" => Ease::in_(Curve::Exp),
        "elastic" => Ease::in_(Curve::Elastic { bounciness: 1.0 }),
        "back" => Ease::in_(Curve::Back { s: 1.7 }),
        "bounce" => Ease::in_(Curve::Bounce),
        "bezier" => Ease::in_(Curve::Bezier {
            x1: control[0],
            y1: control[1],
            x2: control[2],
            y2: control[3],
        }),
        other => {
            return Err(TweenlabError::validation(format!(
                "unknown easing preset '{other}'"
            )));
        }
    };
    Ok(ease)
}

impl FromStr for Ease {
    type Err = TweenlabError;

    /// Parses `name`, `in:name`, `out:name` or `in_out:name`, e.g. `out:cubic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (mode, name) = match s.split_once(':') {
            None => (None, s),
            Some(("in", n)) => (Some(EaseMode::In), n),
            Some(("out", n)) => (Some(EaseMode::Out), n),
            Some(("in_out" | "inout", n)) => (Some(EaseMode::InOut), n),
            Some((m, _)) => {
                return Err(TweenlabError::validation(format!(
                    "unknown easing mode '{m}'"
                )));
            }
        };
        let base = preset(name, [0.25, 0.1, 0.25, 1.0])?;
        Ok(match mode {
            Some(mode) => Ease { mode, ..base },
            None => base,
        })
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
