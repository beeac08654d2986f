use std::time::Duration;

use crate::foundation::error::{TweenlabError, TweenlabResult};

pub use kurbo::{Point, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> TweenlabResult<Self> {
        if start.0 > end.0 {
            return Err(TweenlabError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range covering `len` frames starting at `start`.
    pub fn from_len(start: u64, len: u64) -> Self {
        Self {
            start: FrameIndex(start),
            end: FrameIndex(start.saturating_add(len)),
        }
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Fraction of the range elapsed at `f`: 0 before the start, 1 at or after the end.
    pub fn progress(self, f: FrameIndex) -> f64 {
        if f.0 < self.start.0 {
            return 0.0;
        }
        if f.0 >= self.end.0 {
            return 1.0;
        }
        crate::foundation::math::safe_ratio((f.0 - self.start.0) as f64, self.len_frames() as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    /// Rate of the demo play timer.
    pub const DEMO: Fps = Fps { num: 30, den: 1 };

    pub fn new(num: u32, den: u32) -> TweenlabResult<Self> {
        if den == 0 {
            return Err(TweenlabError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(TweenlabError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Wall-clock period of one frame (1000/fps ms).
    pub fn frame_period(self) -> Duration {
        Duration::from_nanos(1_000_000_000 * u64::from(self.den) / u64::from(self.num))
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::DEMO
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
