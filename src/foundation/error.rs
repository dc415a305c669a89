/// Convenience result type used across tourline.
pub type TourlineResult<T> = Result<T, TourlineError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Sequencing boundaries (running off either end of a step list) are not errors; they are
/// reported as [`Nav`](crate::Nav) values and consumed by the flow controller.
#[derive(thiserror::Error, Debug)]
pub enum TourlineError {
    /// Invalid user-provided content or model data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A timeline descriptor was rejected at construction.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// An external collaborator (clipboard, link opener) refused the request.
    ///
    /// Built by host implementations of `Clipboard` and `LinkOpener`; the session turns it into
    /// a `Failed` outcome.
    #[error("collaborator error: {0}")]
    Collaborator(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TourlineError {
    /// Build a [`TourlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TourlineError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`TourlineError::Collaborator`] value.
    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::Collaborator(msg.into())
    }

    /// Build a [`TourlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
