use crate::schema::validate::ContainerInvalid;

/// Convenience result type used across eventline.
pub type EventlineResult<T> = Result<T, EventlineError>;

/// Top-level error taxonomy used by widget and codec APIs.
#[derive(thiserror::Error, Debug)]
pub enum EventlineError {
    /// A semantic-field identifier was misconfigured (empty or colliding).
    ///
    /// Raised immediately by registry mutation; identifiers are load-bearing
    /// keys and are never optional themselves.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The attached event container was rejected wholesale.
    ///
    /// Carries every violation found; the previous attachment stays in place.
    #[error("invalid event container: {0}")]
    Container(#[from] ContainerInvalid),

    /// A decode pass failed (unknown wire field, malformed cells or payloads).
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EventlineError {
    /// Build a [`EventlineError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`EventlineError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
