use crate::demos::{
    Demo, DemoKind, Direction, Preview, css3, or_zero, total_frames_spec, window_progress,
    window_specs,
};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::fixed;
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    start_frame: f64,
    end_frame: f64,
    direction: Direction,
    width: f64,
    height: f64,
}

/// `inset()` clip-path hiding `100 - progress*100` percent from the trailing edge.
pub fn wipe_clip_path(direction: Direction, progress: f64) -> String {
    let hidden = format!("{}%", css3(100.0 - progress * 100.0));
    match direction {
        Direction::Left => format!("inset(0 {hidden} 0 0)"),
        Direction::Right => format!("inset(0 0 0 {hidden})"),
        Direction::Up => format!("inset({hidden} 0 0 0)"),
        Direction::Down => format!("inset(0 0 {hidden} 0)"),
    }
}

/// A straight edge reveals the content across the window.
pub struct WipeDemo;

impl Demo for WipeDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Wipe
    }

    fn schema(&self) -> ParamSchema {
        let [start, end] = window_specs(15.0, 45.0);
        ParamSchema::new(vec![
            start,
            end,
            total_frames_spec(60.0, 30.0, 300.0),
            ParamSpec::new(
                "direction",
                "Direction",
                ParamKind::choice(Direction::NAMES),
                "left",
            ),
            ParamSpec::new("width", "Width", ParamKind::pixels(150.0, 400.0), 300.0),
            ParamSpec::new("height", "Height", ParamKind::pixels(100.0, 300.0), 200.0),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let progress = or_zero(
            self.kind(),
            "progress",
            window_progress(frame as f64, p.start_frame, p.end_frame),
        );
        Ok(Preview::new(progress)
            .with_style("clipPath", wipe_clip_path(p.direction, progress))
            .with_style("width", format!("{}px", css3(p.width)))
            .with_style("height", format!("{}px", css3(p.height)))
            .with_readout("Progress", format!("{}%", fixed(progress * 100.0, 1))))
    }

    fn code(&self, _frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let inset = match p.direction {
            Direction::Left => "0 {hidden}% 0 0",
            Direction::Right => "0 0 0 {hidden}%",
            Direction::Up => "{hidden}% 0 0 0",
            Direction::Down => "0 0 {hidden}% 0",
        };
        Ok(format!(
            "let progress = interpolate(frame, &[{:?}, {:?}], &[0.0, 1.0], InterpolateOpts::clamped())?;\nlet hidden = 100.0 - progress * 100.0;\nlet clip_path = format!(\"inset({inset})\");",
            p.start_frame, p.end_frame
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/wipe.rs"]
mod tests;
