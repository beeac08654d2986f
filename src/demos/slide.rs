use crate::animation::ease::Ease;
use crate::demos::{
    Demo, DemoKind, Direction, Preview, or_zero, total_frames_spec, window_progress, window_specs,
};
use crate::foundation::error::TweenlabResult;
use crate::foundation::math::{css_num, fixed};
use crate::params::schema::{ParamKind, ParamSchema, ParamSpec};
use crate::params::set::ParamSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
enum SlideEasing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
}

impl SlideEasing {
    fn ease(self) -> Ease {
        match self {
            Self::Linear => Ease::LINEAR,
            Self::Ease => Ease::IN_OUT_QUAD,
            Self::EaseIn => Ease::IN_QUAD,
            Self::EaseOut => Ease::OUT_QUAD,
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    start_frame: f64,
    end_frame: f64,
    direction: Direction,
    distance: f64,
    easing: SlideEasing,
}

/// CSS transform placing the element `offset` px away from its rest position.
fn slide_transform(direction: Direction, offset: f64) -> String {
    let d = css_num(offset);
    if offset == 0.0 {
        return match direction {
            Direction::Left | Direction::Right => "translateX(0)".to_owned(),
            Direction::Up | Direction::Down => "translateY(0)".to_owned(),
        };
    }
    match direction {
        Direction::Left => format!("translateX(-{d}px)"),
        Direction::Right => format!("translateX({d}px)"),
        Direction::Up => format!("translateY(-{d}px)"),
        Direction::Down => format!("translateY({d}px)"),
    }
}

/// Element slides in from an edge over the animation window.
pub struct SlideDemo;

impl Demo for SlideDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Slide
    }

    fn schema(&self) -> ParamSchema {
        let [start, end] = window_specs(10.0, 50.0);
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
            ParamSpec::new(
                "distance",
                "Distance",
                ParamKind::pixels(50.0, 500.0),
                300.0,
            ),
            ParamSpec::new(
                "easing",
                "Easing",
                ParamKind::choice(&["linear", "ease", "easeIn", "easeOut"]),
                "ease",
            ),
        ])
    }

    fn evaluate(&self, frame: u64, params: &ParamSet) -> TweenlabResult<Preview> {
        let p: Params = params.to_typed()?;
        let progress = or_zero(
            self.kind(),
            "progress",
            window_progress(frame as f64, p.start_frame, p.end_frame),
        );
        let eased = p.easing.ease().apply(progress);
        let offset = p.distance * (1.0 - eased);
        Ok(Preview::new(offset)
            .with_style("transform", slide_transform(p.direction, offset))
            .with_readout("Progress", format!("{}%", fixed(progress * 100.0, 1)))
            .with_readout("Offset", format!("{}px", fixed(offset, 1))))
    }

    fn code(&self, _frame: u64, params: &ParamSet) -> TweenlabResult<String> {
        let p: Params = params.to_typed()?;
        let (axis, sign) = match p.direction {
            Direction::Left => ("X", "-"),
            Direction::Right => ("X", ""),
            Direction::Up => ("Y", "-"),
            Direction::Down => ("Y", ""),
        };
        Ok(format!(
            "let progress = interpolate(frame, &[{:?}, {:?}], &[0.0, 1.0], InterpolateOpts::clamped())?;\nlet offset = {:?} * (1.0 - {}.apply(progress));\nlet transform = format!(\"translate{axis}({sign}{{offset}}px)\");",
            p.start_frame,
            p.end_frame,
            p.distance,
            p.easing.ease().code()
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/slide.rs"]
mod tests;
