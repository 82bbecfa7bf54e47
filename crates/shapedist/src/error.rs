//! Error type shared by every fallible operation in the crate.
//!
//! All operations are deterministic, so an error is permanent for its input:
//! callers surface it, they never retry.

/// Failure modes of ring construction, turning functions and distances.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Too few vertices, zero-length edges, non-finite coordinates.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A caller-supplied option outside its closed set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal consistency check failed (e.g. turn angles do not close
    /// to ±360°, which signals a self-intersecting ring).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Error::DegenerateGeometry(msg.into())
    }
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }
}
