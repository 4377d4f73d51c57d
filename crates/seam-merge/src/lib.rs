//! Merge operations for Seam.
//!
//! Applies one delta's content across the two sequences of a comparison:
//! copying the span from one side over the corresponding span of the other,
//! or removing an inserted/deleted span outright.
//!
//! Both operations mutate the underlying sequences only. The revision that
//! described the pair is stale the moment either operation returns; the
//! caller discards it and computes a fresh one. Recomputation never happens
//! here, keeping mutation and analysis separated, and callers must serialize
//! merges against concurrent diffs over the same pair.

mod error;

pub use error::MergeError;

use seam_types::{Chunk, Delta, Side};
use tracing::debug;

/// Replace the span opposite `from` with the content of the `from` side's
/// chunk.
///
/// `source` is the sequence `from` refers to; `target` is the other one.
/// `target` grows or shrinks as needed. Copying from the empty side of an
/// add/delete delta removes the counterpart span, which is how "revert this
/// insertion via the other pane" behaves.
pub fn apply_change<E: Clone>(
    delta: &Delta,
    from: Side,
    source: &[E],
    target: &mut Vec<E>,
) -> Result<(), MergeError> {
    let from_chunk = delta.chunk(from);
    let to_chunk = delta.chunk(from.opposite());
    check_bounds(from_chunk, source.len())?;
    check_bounds(to_chunk, target.len())?;

    target.splice(to_chunk.range(), source[from_chunk.range()].iter().cloned());
    debug!(
        ?from,
        copied = from_chunk.size,
        replaced = to_chunk.size,
        "applied change"
    );
    Ok(())
}

/// Remove the `from` side's chunk from `sequence`.
///
/// Valid only for deltas whose opposite chunk is empty (pure insertions or
/// deletions); removing one side of a `Change` would lose content that has no
/// counterpart anywhere else.
pub fn apply_delete<E>(delta: &Delta, from: Side, sequence: &mut Vec<E>) -> Result<(), MergeError> {
    if !delta.chunk(from.opposite()).is_empty() {
        return Err(MergeError::NotDeletable { kind: delta.kind() });
    }
    let from_chunk = delta.chunk(from);
    check_bounds(from_chunk, sequence.len())?;

    sequence.drain(from_chunk.range());
    debug!(?from, removed = from_chunk.size, "applied delete");
    Ok(())
}

fn check_bounds(chunk: Chunk, len: usize) -> Result<(), MergeError> {
    if chunk.end() > len {
        return Err(MergeError::ChunkOutOfBounds {
            anchor: chunk.anchor,
            end: chunk.end(),
            len,
        });
    }
    Ok(())
}
