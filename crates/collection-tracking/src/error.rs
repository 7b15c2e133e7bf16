use thiserror::Error;

/// Errors raised while replaying an edit script or converting it to another
/// representation.
///
/// The diff itself is infallible; every failure is detected when positions
/// or payloads are checked against a live list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackingError {
    /// A position is outside the current bounds of the list being mutated.
    #[error("INDEX_OUT_OF_RANGE: index {index}, len {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The operation cannot be expressed in the requested form, e.g. a
    /// `Replace` without a previous item or a `Move` without an origin.
    #[error("UNSUPPORTED_OPERATION: {0}")]
    UnsupportedOperation(String),
}

pub type TrackingResult<T> = Result<T, TrackingError>;
