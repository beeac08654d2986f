use crate::animation::color::{Color, ColorSpace, even_stops, interpolate_colors};
use crate::demos::{Demo, DemoKind, Preview, slice_lit, total_frames_spec};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::{fixed, safe_ratio};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec, ParamValue};
use crate::params::set::ParamSet;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    colors: Vec<String>,
    total_frames: f64,
    color_space: ColorSpace,
}

impl Params {
    fn progress(&self, frame: u64) -> f64 {
        safe_ratio(frame as f64, self.total_frames - 1.0)
    }
}

/// Color blended across 2 to 10 evenly spaced stops over the whole timeline.
pub struct InterpolateColorsDemo;

impl Demo for InterpolateColorsDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::InterpolateColors
    }

    fn schema(&self) -> ParamSchema {
        ParamSchema::new(vec![
            ParamSpec::new(
                "colors",
                "Colors",
                ParamKind::List {
                    item: Box::new(ParamKind::Color),
                    min_len: 2,
                    max_len: 10,
                    new_item: ParamValue::text("#ffffff"),
                },
                vec!["#ff0000", "#00ff00", "#0000ff"],
            ),
            total_frames_spec(60.0, 2.0, 300.0),
            ParamSpec::new(
                "colorSpace",
                "Color Space",
                ParamKind::choice(&["rgb", "hsl"]),
                "rgb",
            ),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let colors = p
            .colors
            .iter()
            .map(|c| c.parse::<Color>())
            .collect::<TweenlabResult<Vec<_>>>()?;
        let progress = p.progress(frame);
        let color =
            interpolate_colors(progress, &even_stops(colors.len()), &colors, p.color_space)?;
        let css = color.to_css();
        Ok(Preview::new(progress)
            .with_style("backgroundColor", css.clone())
            .with_readout("Progress", fixed(progress, 3))
            .with_readout("Color", css))
    }

    fn code(&self, frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let space = match p.color_space {
            ColorSpace::Rgb => "ColorSpace::Rgb",
            ColorSpace::Hsl => "ColorSpace::Hsl",
        };
        let colors = p
            .colors
            .iter()
            .map(|c| format!("{c:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!(
            "let progress = {};\nlet colors = [{colors}]\n    .iter()\n    .map(|c| c.parse::<Color>())\n    .collect::<Result<Vec<_>, _>>()?;\nlet color = interpolate_colors(\n    progress,\n    &[{}],\n    &colors,\n    {space},\n)?;",
            fixed(p.progress(frame), 3),
            slice_lit(&even_stops(p.colors.len())),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/colors.rs"]
mod tests;
