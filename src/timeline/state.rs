use crate::foundation::error::{TweenlabError, TweenlabResult};

/// Playback position of one demo.
///
/// `current_frame` always stays in `[0, total_frames)`. While playing it wraps back to 0 after
/// the last frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineState {
    current_frame: u64,
    total_frames: u64,
    is_playing: bool,
}

/// State transitions of a [`TimelineState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineAction {
    Seek(i64),
    TogglePlay,
    Tick,
}

impl TimelineState {
    /// Paused at frame 0.
    pub fn new(total_frames: u64) -> TweenlabResult<Self> {
        if total_frames == 0 {
            return Err(TweenlabError::validation(
                "timeline total_frames must be > 0",
            ));
        }
        Ok(Self {
            current_frame: 0,
            total_frames,
            is_playing: false,
        })
    }

    pub fn current_frame(&self) -> u64 {
        self.current_frame
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn last_frame(&self) -> u64 {
        self.total_frames - 1
    }

    /// Advance one frame when playing; no-op when paused.
    pub fn tick(&mut self) {
        if self.is_playing {
            self.current_frame = (self.current_frame + 1) % self.total_frames;
        }
    }

    /// Jump to `frame`, clamped into range. Negative frames land on 0.
    pub fn seek(&mut self, frame: i64) {
        let frame = u64::try_from(frame).unwrap_or(0);
        self.current_frame = frame.min(self.last_frame());
    }

    pub fn toggle(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Resize the timeline, pulling the current frame back into range.
    pub fn set_total_frames(&mut self, total_frames: u64) -> TweenlabResult<()> {
        if total_frames == 0 {
            return Err(TweenlabError::validation(
                "timeline total_frames must be > 0",
            ));
        }
        self.total_frames = total_frames;
        self.current_frame = self.current_frame.min(self.last_frame());
        Ok(())
    }

    pub fn apply(&mut self, action: TimelineAction) {
        match action {
            TimelineAction::Seek(frame) => self.seek(frame),
            TimelineAction::TogglePlay => self.toggle(),
            TimelineAction::Tick => self.tick(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/state.rs"]
mod tests;
