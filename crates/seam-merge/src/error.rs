use seam_types::DeltaKind;
use thiserror::Error;

/// Errors produced by merge operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// The delta's chunk does not fit the sequence it is being applied to.
    /// The revision that produced the delta is stale, or describes a
    /// different pair of sequences.
    #[error("chunk [{anchor}, {end}) out of bounds for sequence of length {len}")]
    ChunkOutOfBounds {
        anchor: usize,
        end: usize,
        len: usize,
    },

    /// `apply_delete` on a delta that still has content on the opposite
    /// side. Only pure insertions/deletions can be removed outright.
    #[error("cannot delete one side of a {kind:?} delta")]
    NotDeletable { kind: DeltaKind },
}
