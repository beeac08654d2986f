use std::str::FromStr;

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::foundation::error::{TweenlabError, TweenlabResult};
use crate::foundation::math::{css_num, lerp};

/// Straight-alpha color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// CSS `rgba(r, g, b, a)` with integer channels.
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.rgba8();
        let a = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        format!("rgba({r}, {g}, {b}, {})", css_num(a))
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let (r, g, b) = (self.r, self.g, self.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return (0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h * 60.0, s, l)
    }

    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::rgba(l, l, l, a);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Self::rgba(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
            a,
        )
    }
}

impl FromStr for Color {
    type Err = TweenlabError;

    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()/rgba()` and `hsl()/hsla()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, &["rgba", "rgb"]) {
            let v = parse_args(&args, s)?;
            let a = v.get(3).copied().unwrap_or(1.0);
            return Ok(Self::rgba(v[0] / 255.0, v[1] / 255.0, v[2] / 255.0, a));
        }
        if let Some(args) = function_args(&lower, &["hsla", "hsl"]) {
            let v = parse_args(&args, s)?;
            let a = v.get(3).copied().unwrap_or(1.0);
            return Ok(Self::from_hsla(v[0], v[1] / 100.0, v[2] / 100.0, a));
        }
        Err(TweenlabError::validation(format!(
            "unrecognised color '{s}'"
        )))
    }
}

fn parse_hex(hex: &str) -> TweenlabResult<Color> {
    fn nibble(c: u8) -> Option<u8> {
        (c as char).to_digit(16).map(|d| d as u8)
    }

    let bytes = hex.as_bytes();
    let channels: Option<Vec<u8>> = match bytes.len() {
        3 | 4 => bytes.iter().map(|&c| nibble(c).map(|n| n * 17)).collect(),
        6 | 8 => bytes
            .chunks(2)
            .map(|p| Some(nibble(p[0])? * 16 + nibble(p[1])?))
            .collect(),
        _ => None,
    };
    let c = channels.ok_or_else(|| {
        TweenlabError::validation(format!(
            "hex color must be #rgb, #rrggbb or #rrggbbaa, got '#{hex}'"
        ))
    })?;
    let a = c.get(3).copied().unwrap_or(255);
    Ok(Color::rgba(
        f64::from(c[0]) / 255.0,
        f64::from(c[1]) / 255.0,
        f64::from(c[2]) / 255.0,
        f64::from(a) / 255.0,
    ))
}

fn function_args(s: &str, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        s.strip_prefix(name)
            .and_then(|rest| rest.trim_start().strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .map(str::to_owned)
    })
}

fn parse_args(args: &str, original: &str) -> TweenlabResult<Vec<f64>> {
    let values = args
        .split(',')
        .map(|part| part.trim().trim_end_matches('%').trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| TweenlabError::validation(format!("bad color arguments in '{original}'")))?;
    if !(3..=4).contains(&values.len()) || !values.iter().all(|v| v.is_finite()) {
        return Err(TweenlabError::validation(format!(
            "color '{original}' needs 3 or 4 finite arguments"
        )));
    }
    Ok(values)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsl,
}

impl FromStr for ColorSpace {
    type Err = TweenlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(TweenlabError::validation(format!(
                "unknown color space '{other}'"
            ))),
        }
    }
}

/// `n` stops spread evenly over `[0, 1]`.
pub fn even_stops(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

/// Interpolate between `colors` placed at `input_range`, clamped at both ends.
pub fn interpolate_colors(
    input: f64,
    input_range: &[f64],
    colors: &[Color],
    space: ColorSpace,
) -> TweenlabResult<Color> {
    if input_range.len() != colors.len() {
        return Err(TweenlabError::validation(format!(
            "input range has {} stops but {} colors were given",
            input_range.len(),
            colors.len()
        )));
    }
    // Position within the stop list: segment index + fraction.
    let positions: Vec<f64> = (0..colors.len()).map(|i| i as f64).collect();
    let pos = interpolate(input, input_range, &positions, InterpolateOpts::clamped())?;
    let seg = (pos.floor() as usize).min(colors.len().saturating_sub(2));
    let t = pos - seg as f64;
    let (c0, c1) = (colors[seg], colors[seg + 1]);

    let mixed = match space {
        ColorSpace::Rgb => Color::rgba(
            lerp(c0.r, c1.r, t),
            lerp(c0.g, c1.g, t),
            lerp(c0.b, c1.b, t),
            lerp(c0.a, c1.a, t),
        ),
        ColorSpace::Hsl => {
            let (h0, s0, l0) = c0.to_hsl();
            let (h1, s1, l1) = c1.to_hsl();
            // Shortest way around the hue circle.
            let mut dh = h1 - h0;
            if dh > 180.0 {
                dh -= 360.0;
            } else if dh < -180.0 {
                dh += 360.0;
            }
            Color::from_hsla(
                h0 + dh * t,
                lerp(s0, s1, t),
                lerp(l0, l1, t),
                lerp(c0.a, c1.a, t),
            )
        }
    };
    Ok(mixed)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/color.rs"]
mod tests;
