use std::str::FromStr;

use crate::animation::ease::Ease;
use crate::foundation::error::{TweenlabError, TweenlabResult};

/// Policy for inputs outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output.
    Clamp,
    /// Continue the boundary segment's linear formula.
    #[default]
    Extend,
    /// Return the input unchanged.
    Identity,
    /// Repeat the whole input range modulo its width.
    Wrap,
}

impl Extrapolate {
    pub const ALL: [&'static str; 4] = ["clamp", "extend", "identity", "wrap"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Extend => "extend",
            Self::Identity => "identity",
            Self::Wrap => "wrap",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Clamp => "Extrapolate::Clamp",
            Self::Extend => "Extrapolate::Extend",
            Self::Identity => "Extrapolate::Identity",
            Self::Wrap => "Extrapolate::Wrap",
        }
    }
}

impl FromStr for Extrapolate {
    type Err = TweenlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "extend" => Ok(Self::Extend),
            "identity" => Ok(Self::Identity),
            "wrap" => Ok(Self::Wrap),
            other => Err(TweenlabError::validation(format!(
                "unknown extrapolation '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    #[serde(default)]
    pub easing: Ease,
    #[serde(default)]
    pub left: Extrapolate,
    #[serde(default)]
    pub right: Extrapolate,
}

impl Default for InterpolateOpts {
    fn default() -> Self {
        Self {
            easing: Ease::LINEAR,
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
        }
    }
}

impl InterpolateOpts {
    /// Linear, clamped on both sides.
    pub fn clamped() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    pub fn with_easing(self, easing: Ease) -> Self {
        Self { easing, ..self }
    }

    /// Rust expression that rebuilds these options.
    pub fn code(&self) -> String {
        if *self == Self::clamped() {
            return "InterpolateOpts::clamped()".to_owned();
        }
        format!(
            "InterpolateOpts {{ easing: {}, left: {}, right: {} }}",
            self.easing.code(),
            self.left.code(),
            self.right.code()
        )
    }
}

/// Map `input` from `input_range` onto `output_range`.
///
/// Both ranges must have the same length (at least 2) and finite values; `input_range` must be
/// non-decreasing. A zero-width segment is a step: its start output before the stop, its end
/// output at or after it.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> TweenlabResult<f64> {
    validate_ranges(input_range, output_range)?;
    if !input.is_finite() {
        return Err(TweenlabError::validation(
            "interpolate input must be finite",
        ));
    }

    let first = input_range[0];
    let last = input_range[input_range.len() - 1];
    // Wrap repeats the whole range, so it applies before a segment is picked.
    let wraps = (input < first && opts.left == Extrapolate::Wrap)
        || (input > last && opts.right == Extrapolate::Wrap);
    let x = if wraps {
        wrap(input, first, last)
    } else {
        input
    };

    let seg = find_segment(x, input_range);
    Ok(interpolate_segment(
        x,
        [input_range[seg], input_range[seg + 1]],
        [output_range[seg], output_range[seg + 1]],
        opts,
    ))
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> TweenlabResult<()> {
    if input_range.len() != output_range.len() {
        return Err(TweenlabError::validation(format!(
            "input range has {} stops but output range has {}",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(TweenlabError::validation(
            "interpolate ranges need at least 2 stops",
        ));
    }
    if !input_range
        .iter()
        .chain(output_range)
        .all(|v| v.is_finite())
    {
        return Err(TweenlabError::validation(
            "interpolate ranges must be finite",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] <= w[1]) {
        return Err(TweenlabError::validation(format!(
            "input range must be non-decreasing, got {input_range:?}"
        )));
    }
    Ok(())
}

fn find_segment(input: f64, input_range: &[f64]) -> usize {
    let last_seg = input_range.len() - 2;
    (1..input_range.len())
        .find(|&i| input_range[i] >= input)
        .map_or(last_seg, |i| i - 1)
        .min(last_seg)
}

/// `x` is already wrapped, so only the boundary segments see out-of-range inputs here.
fn interpolate_segment(x: f64, [a, b]: [f64; 2], [c, d]: [f64; 2], opts: InterpolateOpts) -> f64 {
    if x < a {
        match opts.left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => return c,
            Extrapolate::Wrap | Extrapolate::Extend => {}
        }
    }
    if x > b {
        match opts.right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => return d,
            Extrapolate::Wrap | Extrapolate::Extend => {}
        }
    }

    if c == d {
        return c;
    }
    let width = b - a;
    if width == 0.0 {
        return if x < a { c } else { d };
    }

    let t = (x - a) / width;
    // Easing only shapes the in-range part; extension stays linear.
    let t = if (0.0..=1.0).contains(&t) {
        opts.easing.apply(t)
    } else {
        t
    };
    c + (d - c) * t
}

fn wrap(x: f64, a: f64, b: f64) -> f64 {
    let width = b - a;
    if width == 0.0 {
        return a;
    }
    a + (x - a).rem_euclid(width)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
