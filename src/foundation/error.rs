/// Convenience result type used across treeframes.
pub type TreeframesResult<T> = Result<T, TreeframesError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum TreeframesError {
    /// Invalid user-provided configuration or graph input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The graph is not a tree rooted at the render root (shared child, cycle, missing start).
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    /// A caller broke an API precondition, e.g. an out-of-range edge index.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Errors while handing frames to an encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TreeframesError {
    /// Build a [`TreeframesError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TreeframesError::MalformedGraph`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedGraph(msg.into())
    }

    /// Build a [`TreeframesError::Precondition`] value.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Build a [`TreeframesError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
