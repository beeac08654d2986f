use std::path::Path;

use anyhow::Context;

use crate::demos::DemoKind;
use crate::foundation::error::TweenlabResult;

/// Saved demo state: which demo, where the playhead is and the non-default parameters.
///
/// ```json
/// { "demo": "spring", "frame": 12, "params": { "config": { "damping": 4 } } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub demo: DemoKind,
    #[serde(default)]
    pub frame: u64,
    #[serde(default)]
    pub playing: bool,
    /// Top-level parameter overrides; omitted keys keep their defaults.
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

impl Preset {
    pub fn new(demo: DemoKind) -> Self {
        Self {
            demo,
            frame: 0,
            playing: false,
            params: serde_json::Map::new(),
        }
    }

    pub fn from_json_str(s: &str) -> TweenlabResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> TweenlabResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> TweenlabResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read preset '{}'", path.display()))?;
        let preset = Self::from_json_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            demo = %preset.demo,
            frame = preset.frame,
            "preset loaded"
        );
        Ok(preset)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> TweenlabResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?)
            .with_context(|| format!("write preset '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/preset.rs"]
mod tests;
