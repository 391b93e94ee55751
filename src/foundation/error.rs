/// Convenience result type used across frameplay.
pub type FrameplayResult<T> = Result<T, FrameplayError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FrameplayError {
    /// Baked data was produced for a major version this engine does not play.
    #[error("incompatible data version \"{found}\" (supported major version: {supported})")]
    IncompatibleVersion {
        /// Version string found in the data.
        found: String,
        /// Major version supported by the engine.
        supported: u64,
    },

    /// An action name that is not present in the registry.
    #[error("unknown action \"{0}\"")]
    UnknownAction(String),

    /// The host did not supply a render target for the session.
    #[error("missing host target: {0}")]
    MissingHostTarget(String),

    /// Invalid baked data or user-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while turning a posed tree into pixels or markup.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameplayError {
    /// Build a [`FrameplayError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FrameplayError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FrameplayError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FrameplayError::UnknownAction`] value.
    pub fn unknown_action(name: impl Into<String>) -> Self {
        Self::UnknownAction(name.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
