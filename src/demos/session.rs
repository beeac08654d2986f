use crate::demos::{DemoKind, Preview, TOTAL_FRAMES};
use crate::foundation::error::{TweenlabError, TweenlabResult};
use crate::params::schema::{ParamKind, ParamSchema, ParamValue};
use crate::params::set::ParamSet;
use crate::preset::Preset;
use crate::timeline::state::{TimelineAction, TimelineState};

/// User input handled by a [`DemoSession`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Parse `raw` into the field at dotted `path`.
    SetField { path: String, raw: String },
    Seek(i64),
    TogglePlay,
    Tick,
    /// Append the demo's new item to the list at `path`.
    AddItem { path: String },
    RemoveItem { path: String, index: usize },
}

/// One open demo: its parameters plus a playback timeline sized by `totalFrames`.
#[derive(Clone, Debug)]
pub struct DemoSession {
    kind: DemoKind,
    schema: ParamSchema,
    params: ParamSet,
    timeline: TimelineState,
}

impl DemoSession {
    /// Defaults, paused at frame 0.
    pub fn new(kind: DemoKind) -> TweenlabResult<Self> {
        let demo = kind.demo();
        let params = demo.defaults();
        let timeline = TimelineState::new(demo.total_frames(&params))?;
        Ok(Self {
            kind,
            schema: demo.schema(),
            params,
            timeline,
        })
    }

    /// Session restored from a saved preset.
    pub fn from_preset(preset: &Preset) -> TweenlabResult<Self> {
        let mut session = Self::new(preset.demo)?;
        session.apply_preset(preset)?;
        Ok(session)
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn schema(&self) -> &ParamSchema {
        &self.schema
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn timeline(&self) -> &TimelineState {
        &self.timeline
    }

    pub fn current_frame(&self) -> u64 {
        self.timeline.current_frame()
    }

    #[tracing::instrument(level = "debug", skip(self), fields(demo = %self.kind))]
    pub fn dispatch(&mut self, action: Action) -> TweenlabResult<()> {
        match action {
            Action::SetField { path, raw } => {
                self.params.set_raw(&self.schema, &path, &raw)?;
                if path == TOTAL_FRAMES {
                    self.resize_timeline()?;
                }
            }
            Action::Seek(frame) => self.timeline.apply(TimelineAction::Seek(frame)),
            Action::TogglePlay => self.timeline.apply(TimelineAction::TogglePlay),
            Action::Tick => self.timeline.apply(TimelineAction::Tick),
            Action::AddItem { path } => {
                let demo = self.kind.demo();
                let item = match demo.new_item(&path, &self.params) {
                    Some(item) => item,
                    None => self.schema.resolve(&path).and_then(default_item)?,
                };
                let len = self.params.push_item(&self.schema, &path, item)?;
                tracing::debug!(path = %path, len, "item added");
            }
            Action::RemoveItem { path, index } => {
                self.params.remove_item(&self.schema, &path, index)?;
            }
        }
        Ok(())
    }

    /// Replace parameters and playback state with the preset's.
    pub fn apply_preset(&mut self, preset: &Preset) -> TweenlabResult<()> {
        if preset.demo != self.kind {
            return Err(TweenlabError::validation(format!(
                "preset is for '{}', session shows '{}'",
                preset.demo, self.kind
            )));
        }
        let mut params = self.kind.demo().defaults();
        params.merge_json(&self.schema, &preset.params)?;
        self.params = params;
        self.resize_timeline()?;
        let frame = i64::try_from(preset.frame).unwrap_or(i64::MAX);
        self.timeline.seek(frame);
        self.timeline.set_playing(preset.playing);
        Ok(())
    }

    /// Snapshot of the current state as a preset.
    pub fn to_preset(&self) -> TweenlabResult<Preset> {
        let params = match serde_json::to_value(&self.params)? {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(TweenlabError::serde(format!(
                    "parameters serialized to {other}, expected an object"
                )));
            }
        };
        Ok(Preset {
            demo: self.kind,
            frame: self.current_frame(),
            playing: self.timeline.is_playing(),
            params,
        })
    }

    #[tracing::instrument(
        level = "trace",
        skip(self),
        fields(demo = %self.kind, frame = self.current_frame())
    )]
    pub fn preview(&self) -> TweenlabResult<Preview> {
        let demo = self.kind.demo();
        demo.evaluate(self.current_frame(), &self.params)
    }

    pub fn code(&self) -> TweenlabResult<String> {
        self.kind.demo().code(self.current_frame(), &self.params)
    }

    fn resize_timeline(&mut self) -> TweenlabResult<()> {
        let total = self.kind.demo().total_frames(&self.params);
        self.timeline.set_total_frames(total)
    }
}

fn default_item(kind: &ParamKind) -> TweenlabResult<ParamValue> {
    match kind {
        ParamKind::List { new_item, .. } => Ok(new_item.clone()),
        _ => Err(TweenlabError::parameter("items can only be added to lists")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/session.rs"]
mod tests;
