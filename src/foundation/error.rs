/// Convenience result type used across tweenlab.
pub type TweenlabResult<T> = Result<T, TweenlabError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum TweenlabError {
    /// Invalid ranges, frame counts or other structural input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A parameter path or value rejected by a demo's schema.
    #[error("parameter error: {0}")]
    Parameter(String),

    /// Errors while evaluating a demo preview.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing presets and parameter sets.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TweenlabError {
    /// Build a [`TweenlabError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TweenlabError::Parameter`] value.
    pub fn parameter(msg: impl Into<String>) -> Self {
        Self::Parameter(msg.into())
    }

    /// Build a [`TweenlabError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`TweenlabError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TweenlabError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
