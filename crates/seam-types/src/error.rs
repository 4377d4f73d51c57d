use thiserror::Error;

/// A position outside the valid `[0, len]` range of a sequence.
///
/// Returned by position-based queries. Callers are expected to clamp
/// positions before querying; an out-of-range position is a caller mistake,
/// not an engine state worth recovering from with anything but clamping.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("position {position} out of range for sequence of length {len}")]
pub struct RangeError {
    /// The offending position.
    pub position: usize,
    /// The length of the sequence that was queried.
    pub len: usize,
}
