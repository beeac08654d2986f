//! Frame remapping used by looping and freezing playback.
//!
//! Both operations take an absolute frame and return the frame the animation should be evaluated
//! at, so any primitive can be looped or frozen without knowing about it.

use std::str::FromStr;

use crate::foundation::error::TweenlabError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Jump back to the first frame after each cycle.
    #[default]
    Restart,
    /// Odd cycles play backwards.
    Reverse,
    /// Forward then backward within a double-length period.
    PingPong,
}

impl FromStr for LoopMode {
    type Err = TweenlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "restart" => Ok(Self::Restart),
            "reverse" => Ok(Self::Reverse),
            "pingpong" | "ping_pong" => Ok(Self::PingPong),
            other => Err(TweenlabError::validation(format!(
                "unknown loop mode '{other}'"
            ))),
        }
    }
}

/// Frame within the loop for absolute `frame`. A zero `duration` always yields 0.
pub fn loop_frame(frame: u64, duration: u64, mode: LoopMode) -> u64 {
    if duration == 0 {
        return 0;
    }
    match mode {
        LoopMode::Restart => frame % duration,
        LoopMode::Reverse => {
            let lp = frame % duration;
            if (frame / duration) % 2 == 1 {
                duration - 1 - lp
            } else {
                lp
            }
        }
        LoopMode::PingPong => {
            let pp = frame % (duration * 2);
            if pp < duration { pp } else { duration * 2 - pp }
        }
    }
}

/// 1-based cycle number containing `frame`.
pub fn loop_cycle(frame: u64, duration: u64) -> u64 {
    if duration == 0 {
        return 1;
    }
    frame / duration + 1
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreezeMode {
    /// Hold the freeze frame.
    #[default]
    Clamp,
    /// Replay `[start, freeze)` after the freeze point.
    Loop,
    /// Bounce between start and the freeze point.
    Reverse,
}

impl FromStr for FreezeMode {
    type Err = TweenlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "clamp" => Ok(Self::Clamp),
            "loop" => Ok(Self::Loop),
            "reverse" => Ok(Self::Reverse),
            other => Err(TweenlabError::validation(format!(
                "unknown freeze mode '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FreezeWindow {
    pub anim_start: u64,
    pub anim_end: u64,
    pub freeze_at: u64,
}

impl FreezeWindow {
    /// Frame to evaluate for absolute `frame`.
    ///
    /// Outside `[anim_start, anim_end]` the freeze frame is shown. Inside, frames before the
    /// freeze point play normally and later ones follow `mode`.
    pub fn remap(&self, frame: u64, mode: FreezeMode) -> u64 {
        if frame < self.anim_start || frame > self.anim_end {
            return self.freeze_at;
        }
        if frame < self.freeze_at {
            return frame;
        }
        let span = self.freeze_at.saturating_sub(self.anim_start);
        if span == 0 {
            return self.freeze_at;
        }
        let offset = frame - self.anim_start;
        match mode {
            FreezeMode::Clamp => self.freeze_at,
            FreezeMode::Loop => self.anim_start + offset % span,
            FreezeMode::Reverse => {
                let period = span * 2;
                let rp = offset % period;
                if rp < span {
                    self.anim_start + rp
                } else {
                    self.anim_start + (period - rp)
                }
            }
        }
    }

    /// Whether `frame` is held still by a clamp freeze.
    pub fn is_frozen(&self, frame: u64, mode: FreezeMode) -> bool {
        mode == FreezeMode::Clamp && frame >= self.freeze_at
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
