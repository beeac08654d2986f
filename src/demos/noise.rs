use crate::animation::noise::{NoiseField, Octaves};
use crate::demos::{Demo, DemoKind, Preview, css3, total_frames_spec};
use crate::foundation::error::{TweenlabError, TweenlabResult};
use crate::foundation::math::fixed;
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

const AXES: [&str; 4] = ["x", "y", "z", "w"];
const ANIMATE_KEYS: [&str; 4] = ["animateX", "animateY", "animateZ", "animateW"];
const ANIMATE_LABELS: [&str; 4] = ["Animate X", "Animate Y", "Animate Z", "Animate W"];

const POSITIVE: &str = "#3b82f6";
const NEGATIVE: &str = "#ef4444";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dims {
    Two,
    Three,
    Four,
}

impl Dims {
    fn count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Per-axis multiplier of the time scale.
    fn rates(self) -> [f64; 4] {
        match self {
            Self::Four => [1.0, 0.7, 1.3, 0.5],
            _ => [1.0; 4],
        }
    }
}

/// Grid of noise samples laid out as `slices` square `size x size` tiles.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NoiseGrid {
    pub slices: usize,
    pub size: usize,
    /// Row-major per slice: `values[slice * size * size + i * size + j]`.
    pub values: Vec<f64>,
}

impl NoiseGrid {
    pub fn get(&self, slice: usize, i: usize, j: usize) -> Option<f64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        self.values
            .get(slice * self.size * self.size + i * self.size + j)
            .copied()
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    seed: String,
    x: f64,
    y: f64,
    #[serde(default)]
    z: f64,
    #[serde(default)]
    w: f64,
    scale: f64,
    animate_x: bool,
    animate_y: bool,
    #[serde(default)]
    animate_z: bool,
    #[serde(default)]
    animate_w: bool,
    time_scale: f64,
    octaves: f64,
}

impl Params {
    fn octaves(&self) -> TweenlabResult<Octaves> {
        let octaves = Octaves::new(self.octaves.round().max(1.0) as u32);
        octaves.validate()?;
        Ok(octaves)
    }

    /// Coordinates after time animation, before dividing by `scale`.
    fn animated(&self, frame: u64, dims: Dims) -> [f64; 4] {
        let base = [self.x, self.y, self.z, self.w];
        let animate = [
            self.animate_x,
            self.animate_y,
            self.animate_z,
            self.animate_w,
        ];
        let rates = dims.rates();
        let mut out = [0.0; 4];
        for axis in 0..dims.count() {
            out[axis] = if animate[axis] {
                base[axis] + frame as f64 * self.time_scale * rates[axis]
            } else {
                base[axis]
            };
        }
        out
    }
}

struct Sampler {
    field: NoiseField,
    octaves: Octaves,
    dims: Dims,
    scale: f64,
}

impl Sampler {
    /// Noise at unscaled coordinates `c`.
    fn at(&self, c: [f64; 4]) -> f64 {
        let [x, y, z, w] = c.map(|v| v / self.scale);
        match self.dims {
            Dims::Two => self.field.fbm2(x, y, self.octaves),
            Dims::Three => self.field.fbm3(x, y, z, self.octaves),
            Dims::Four => self.field.fbm4(x, y, z, w, self.octaves),
        }
    }

    fn offset(&self, c: [f64; 4], by: f64) -> f64 {
        self.at(c.map(|v| v + by))
    }
}

/// Seeded coherent noise sampled at time-animated coordinates.
pub struct NoiseDemo {
    dims: Dims,
}

pub(crate) static NOISE_2D: NoiseDemo = NoiseDemo { dims: Dims::Two };
pub(crate) static NOISE_3D: NoiseDemo = NoiseDemo { dims: Dims::Three };
pub(crate) static NOISE_4D: NoiseDemo = NoiseDemo { dims: Dims::Four };

impl NoiseDemo {
    fn default_seed(&self) -> &'static str {
        match self.dims {
            Dims::Two => "remotion",
            Dims::Three => "remotion3d",
            Dims::Four => "remotion4d",
        }
    }

    /// Default and maximum time scale.
    fn time_scale(&self) -> (f64, f64) {
        match self.dims {
            Dims::Two => (0.1, 1.0),
            Dims::Three => (0.05, 0.5),
            Dims::Four => (0.03, 0.2),
        }
    }

    fn sampler(&self, p: &Params) -> TweenlabResult<Sampler> {
        if !(p.scale.is_finite() && p.scale > 0.0) {
            return Err(TweenlabError::validation("noise scale must be > 0"));
        }
        Ok(Sampler {
            field: NoiseField::new(&p.seed),
            octaves: p.octaves()?,
            dims: self.dims,
            scale: p.scale,
        })
    }

    /// Sample grid shown next to the preview: 20x20 in 2D, five 10x10 z-layers in 3D and four
    /// 8x8 w-slices in 4D.
    pub fn grid(&self, frame: u64, params: &ParamSet) -> TweenlabResult<NoiseGrid> {
        let p: Params = params.to_typed()?;
        let sampler = self.sampler(&p)?;
        let [ax, ay, az, aw] = p.animated(frame, self.dims);
        let (slices, size, step) = match self.dims {
            Dims::Two => (1, 20, 10.0),
            Dims::Three => (5, 10, 10.0),
            Dims::Four => (4, 8, 15.0),
        };
        let mut values = Vec::with_capacity(slices * size * size);
        for slice in 0..slices {
            let s = slice as f64;
            for i in 0..size {
                for j in 0..size {
                    let x = ax + i as f64 * step;
                    let y = ay + j as f64 * step;
                    let c = match self.dims {
                        Dims::Two => [x, y, 0.0, 0.0],
                        Dims::Three => [x, y, az + s * 20.0, 0.0],
                        Dims::Four => [x, y, az, aw + s * 30.0],
                    };
                    values.push(sampler.at(c));
                }
            }
        }
        Ok(NoiseGrid {
            slices,
            size,
            values,
        })
    }
}

/// Sample grid of a noise demo; other demos have none.
pub fn noise_grid(kind: DemoKind, frame: u64, params: &ParamSet) -> TweenlabResult<NoiseGrid> {
    let demo = match kind {
        DemoKind::Noise2d => &NOISE_2D,
        DemoKind::Noise3d => &NOISE_3D,
        DemoKind::Noise4d => &NOISE_4D,
        other => {
            return Err(TweenlabError::validation(format!(
                "demo '{other}' has no noise grid"
            )));
        }
    };
    demo.grid(frame, params)
}

impl Demo for NoiseDemo {
    fn kind(&self) -> DemoKind {
        match self.dims {
            Dims::Two => DemoKind::Noise2d,
            Dims::Three => DemoKind::Noise3d,
            Dims::Four => DemoKind::Noise4d,
        }
    }

    fn schema(&self) -> ParamSchema {
        let n = self.dims.count();
        let (time_default, time_max) = self.time_scale();
        let mut fields = vec![ParamSpec::new(
            "seed",
            "Seed",
            ParamKind::Text,
            self.default_seed(),
        )];
        for &axis in AXES.iter().take(n) {
            fields.push(ParamSpec::new(
                axis,
                axis,
                ParamKind::number(-500.0, 500.0, 1.0),
                0.0,
            ));
        }
        fields.push(ParamSpec::new(
            "scale",
            "Scale",
            ParamKind::number(10.0, 500.0, 1.0),
            100.0,
        ));
        fields.push(total_frames_spec(120.0, 30.0, 600.0));
        for (key, label) in ANIMATE_KEYS.into_iter().zip(ANIMATE_LABELS).take(n) {
            fields.push(ParamSpec::new(key, label, ParamKind::Flag, true));
        }
        fields.push(ParamSpec::new(
            "timeScale",
            "Time Scale",
            ParamKind::number(0.01, time_max, 0.01),
            time_default,
        ));
        fields.push(ParamSpec::new(
            "octaves",
            "Octaves",
            ParamKind::number(1.0, 8.0, 1.0),
            1.0,
        ));
        ParamSchema::new(fields)
    }

    #[tracing::instrument(level = "trace", skip(self, params), fields(demo = %self.kind()))]
    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let sampler = self.sampler(&p)?;
        let c = p.animated(frame, self.dims);
        let v = sampler.at(c);
        let fill = if v >= 0.0 { POSITIVE } else { NEGATIVE };

        let mut preview = Preview::new(v)
            .with_style("width", format!("{}%", css3(v.abs() * 100.0)))
            .with_style("backgroundColor", fill)
            .with_readout("Value", fixed(v, 4));
        for (axis, coord) in AXES.into_iter().zip(c).take(self.dims.count()) {
            preview = preview.with_readout(axis, fixed(coord / p.scale, 3));
        }

        preview = match self.dims {
            Dims::Two => {
                let [x, y, _, _] = c;
                let cross = sampler.at([y + 100.0, x + 100.0, 0.0, 0.0]);
                preview
                    .with_style("left", format!("{}%", css3(50.0 + v * 40.0)))
                    .with_style("top", format!("{}%", css3(50.0 + cross * 40.0)))
            }
            Dims::Three => preview
                .with_style("opacity", css3((v + 1.0) / 2.0))
                .with_style(
                    "transform",
                    format!(
                        "translateX({}px) rotate({}deg) scale({})",
                        css3(v * 100.0),
                        css3(v * 180.0),
                        css3(0.5 + v * 0.5)
                    ),
                ),
            Dims::Four => {
                let apps = [
                    ("Position", 0.0),
                    ("Rotation", 100.0),
                    ("Scale", 200.0),
                    ("Color", 300.0),
                    ("Opacity", 400.0),
                ];
                apps.into_iter().fold(preview, |pv, (label, by)| {
                    pv.with_readout(label, fixed(sampler.offset(c, by), 4))
                })
            }
        };
        Ok(preview)
    }

    fn code(&self, frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let sampler = self.sampler(&p)?;
        let c = p.animated(frame, self.dims);
        let n = self.dims.count();
        let coords = c
            .iter()
            .take(n)
            .map(|v| fixed(v / p.scale, 3))
            .collect::<Vec<_>>()
            .join(", ");
        let call = if sampler.octaves.count > 1 {
            format!("fbm{n}({coords}, Octaves::new({}))", sampler.octaves.count)
        } else {
            format!("noise{n}({coords})")
        };
        Ok(format!(
            "let field = NoiseField::new({:?});\nlet value = field.{call};\n// value: {} (range -1 to 1)\nlet opacity = (value + 1.0) / 2.0;\nlet offset = value * 100.0;",
            p.seed,
            fixed(sampler.at(c), 4)
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/noise.rs"]
mod tests;
