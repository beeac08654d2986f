use kurbo::Point;

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::demos::{Demo, DemoKind, Preview, css3, or_zero, total_frames_spec, window_specs};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::fixed;
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum Shape {
    Circle,
    Ellipse,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    start_frame: f64,
    end_frame: f64,
    center_x: f64,
    center_y: f64,
    start_radius: f64,
    end_radius: f64,
    shape: Shape,
    ellipse_ratio_x: f64,
    ellipse_ratio_y: f64,
}

impl Params {
    fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// `circle()` / `ellipse()` clip-path of `radius` around `center`.
fn iris_clip_path(shape: Shape, radius: f64, ratio: (f64, f64), center: Point) -> String {
    let at = format!("at {}px {}px", css3(center.x), css3(center.y));
    match shape {
        Shape::Circle => format!("circle({}px {at})", css3(radius)),
        Shape::Ellipse => format!(
            "ellipse({}px {}px {at})",
            css3(radius * ratio.0),
            css3(radius * ratio.1)
        ),
    }
}

/// A circular or elliptical opening grows from the center point.
pub struct IrisDemo;

impl Demo for IrisDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Iris
    }

    fn schema(&self) -> ParamSchema {
        let [start, end] = window_specs(10.0, 50.0);
        let ratio = || ParamKind::number(0.3, 2.0, 0.1);
        ParamSchema::new(vec![
            start,
            end,
            total_frames_spec(60.0, 30.0, 300.0),
            ParamSpec::new("centerX", "Center X", ParamKind::pixels(50.0, 250.0), 150.0),
            ParamSpec::new("centerY", "Center Y", ParamKind::pixels(50.0, 150.0), 100.0),
            ParamSpec::new(
                "startRadius",
                "Start Radius",
                ParamKind::pixels(0.0, 100.0),
                0.0,
            ),
            ParamSpec::new(
                "endRadius",
                "End Radius",
                ParamKind::pixels(50.0, 400.0),
                250.0,
            ),
            ParamSpec::new(
                "shape",
                "Shape",
                ParamKind::choice(&["circle", "ellipse"]),
                "circle",
            ),
            ParamSpec::new("ellipseRatioX", "Ellipse Ratio X", ratio(), 1.0),
            ParamSpec::new("ellipseRatioY", "Ellipse Ratio Y", ratio(), 0.7),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let radius = or_zero(
            self.kind(),
            "radius",
            interpolate(
                frame as f64,
                &[p.start_frame, p.end_frame],
                &[p.start_radius, p.end_radius],
                InterpolateOpts::clamped(),
            ),
        );
        let clip = iris_clip_path(
            p.shape,
            radius,
            (p.ellipse_ratio_x, p.ellipse_ratio_y),
            p.center(),
        );
        Ok(Preview::new(radius)
            .with_style("clipPath", clip)
            .with_readout("Radius", format!("{}px", fixed(radius, 1))))
    }

    fn code(&self, _frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let center = p.center();
        let clip = match p.shape {
            Shape::Circle => format!(
                "format!(\"circle({{radius}}px at {}px {}px)\")",
                css3(center.x),
                css3(center.y)
            ),
            Shape::Ellipse => format!(
                "format!(\"ellipse({{}}px {{}}px at {}px {}px)\", radius * {:?}, radius * {:?})",
                css3(center.x),
                css3(center.y),
                p.ellipse_ratio_x,
                p.ellipse_ratio_y
            ),
        };
        Ok(format!(
            "let radius = interpolate(\n    frame,\n    &[{:?}, {:?}],\n    &[{:?}, {:?}],\n    InterpolateOpts::clamped(),\n)?;\nlet clip_path = {clip};",
            p.start_frame, p.end_frame, p.start_radius, p.end_radius
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/iris.rs"]
mod tests;
