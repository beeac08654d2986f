use kurbo::{Point, Vec2};

use crate::demos::{
    Demo, DemoKind, Preview, css3, or_zero, total_frames_spec, window_progress, window_specs,
};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::fixed;
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

/// Distance from the center to the swept edge, large enough to cover the preview.
const SWEEP_RADIUS: f64 = 200.0;
/// Arc segments used for a full turn.
const ARC_STEPS: f64 = 8.0;
const FULL_RECT: &str = "polygon(0 0, 100% 0, 100% 100%, 0 100%)";

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    start_frame: f64,
    end_frame: f64,
    start_angle: f64,
    clockwise: bool,
    center_x: f64,
    center_y: f64,
}

impl Params {
    fn direction(&self) -> f64 {
        if self.clockwise { 1.0 } else { -1.0 }
    }

    /// Hand angle in degrees, 0 pointing up.
    fn angle(&self, progress: f64) -> f64 {
        self.start_angle + self.direction() * progress * 360.0
    }
}

/// Point on the sweep circle at `degrees` (0 = 12 o'clock, clockwise positive).
fn rim(center: Point, degrees: f64) -> Point {
    center + Vec2::from_angle((degrees - 90.0).to_radians()) * SWEEP_RADIUS
}

/// Vertices of the revealed sector: the center, then the rim from the start angle to the hand.
///
/// Returns `None` once the sweep is complete and the whole area is revealed.
fn sector(center: Point, start_angle: f64, direction: f64, progress: f64) -> Option<Vec<Point>> {
    if progress >= 1.0 {
        return None;
    }
    if progress <= 0.0 {
        return Some(vec![center; 3]);
    }
    let steps = (progress * ARC_STEPS).ceil() as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    points.push(rim(center, start_angle));
    points.extend((1..=steps).map(|i| {
        let swept = i as f64 / steps as f64 * progress * 360.0;
        rim(center, start_angle + direction * swept)
    }));
    Some(points)
}

fn polygon_css(points: &[Point]) -> String {
    let body = points
        .iter()
        .map(|p| format!("{}px {}px", css3(p.x), css3(p.y)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("polygon({body})")
}

/// A clock hand sweeps around the center, revealing the area behind it.
pub struct ClockWipeDemo;

impl Demo for ClockWipeDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::ClockWipe
    }

    fn schema(&self) -> ParamSchema {
        let [start, end] = window_specs(10.0, 50.0);
        ParamSchema::new(vec![
            start,
            end,
            total_frames_spec(60.0, 30.0, 300.0),
            ParamSpec::new(
                "startAngle",
                "Start Angle",
                ParamKind::Number {
                    min: 0.0,
                    max: 360.0,
                    step: 15.0,
                    unit: Some("deg"),
                },
                0.0,
            ),
            ParamSpec::new("clockwise", "Clockwise", ParamKind::Flag, true),
            ParamSpec::new("centerX", "Center X", ParamKind::pixels(50.0, 250.0), 150.0),
            ParamSpec::new("centerY", "Center Y", ParamKind::pixels(50.0, 150.0), 100.0),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let progress = or_zero(
            self.kind(),
            "progress",
            window_progress(frame as f64, p.start_frame, p.end_frame),
        );
        let angle = p.angle(progress);
        let center = Point::new(p.center_x, p.center_y);
        let clip = sector(center, p.start_angle, p.direction(), progress)
            .map_or_else(|| FULL_RECT.to_owned(), |pts| polygon_css(&pts));
        Ok(Preview::new(angle)
            .with_style("clipPath", clip)
            .with_readout("Angle", format!("{}°", fixed(angle, 1)))
            .with_readout("Progress", format!("{}%", fixed(progress * 100.0, 1))))
    }

    fn code(&self, frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let current = self.evaluate(frame, params)?;
        let sign = if p.clockwise { "+" } else { "-" };
        Ok(format!(
            "let progress = interpolate(frame, &[{:?}, {:?}], &[0.0, 1.0], InterpolateOpts::clamped())?;\nlet angle = {:?} {sign} progress * 360.0;\nlet center = Point::new({:?}, {:?});\n// clip-path at frame {frame}: {}",
            p.start_frame,
            p.end_frame,
            p.start_angle,
            p.center_x,
            p.center_y,
            current.style("clipPath").unwrap_or_default()
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/clock_wipe.rs"]
mod tests;
