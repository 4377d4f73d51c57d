//! The ordered set of deltas produced by one comparison, with the lookup
//! queries that drive highlighting and next/previous-change navigation.

use serde::{Deserialize, Serialize};

use crate::delta::{Delta, DeltaKind};
use crate::error::RangeError;
use crate::side::Side;

/// The complete, ordered description of how one sequence differs from
/// another.
///
/// Deltas are non-overlapping, strictly ascending by anchor on both sides,
/// and separated by at least one matched element. An empty revision means the
/// two sequences are element-wise identical.
///
/// A revision is an immutable snapshot of one comparison. When either
/// underlying sequence changes (after a merge operation or an external edit)
/// the whole revision is discarded and a fresh one computed; it is never
/// patched in place. Consumers may therefore share a revision freely across
/// threads and swap in a replacement atomically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    deltas: Vec<Delta>,
    original_len: usize,
    revised_len: usize,
}

impl Revision {
    /// Assemble a revision from already-ordered deltas.
    ///
    /// Panics if consecutive deltas overlap or are out of order on either
    /// side; that indicates a bug in the builder, not a recoverable state.
    pub fn new(deltas: Vec<Delta>, original_len: usize, revised_len: usize) -> Self {
        for pair in deltas.windows(2) {
            assert!(
                pair[0].original().end() <= pair[1].original().anchor
                    && pair[0].revised().end() <= pair[1].revised().anchor,
                "deltas overlap or are out of order"
            );
        }
        Self {
            deltas,
            original_len,
            revised_len,
        }
    }

    /// Anchor-ascending read-only view of the deltas.
    pub fn deltas(&self) -> &[Delta] {
        &self.deltas
    }

    /// Number of deltas.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Returns `true` if the two sequences are element-wise identical.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Length of the underlying sequence on the given side.
    pub fn sequence_len(&self, side: Side) -> usize {
        match side {
            Side::Original => self.original_len,
            Side::Revised => self.revised_len,
        }
    }

    /// Number of `Add` deltas.
    pub fn additions(&self) -> usize {
        self.count_kind(DeltaKind::Add)
    }

    /// Number of `Delete` deltas.
    pub fn deletions(&self) -> usize {
        self.count_kind(DeltaKind::Delete)
    }

    /// Number of `Change` deltas.
    pub fn changes(&self) -> usize {
        self.count_kind(DeltaKind::Change)
    }

    fn count_kind(&self, kind: DeltaKind) -> usize {
        self.deltas.iter().filter(|d| d.kind() == kind).count()
    }

    /// The delta whose chunk on `side` contains `position`, if any.
    ///
    /// `position` may be anywhere in `[0, sequence_len]`; anything beyond
    /// fails with [`RangeError`].
    pub fn delta_containing(
        &self,
        side: Side,
        position: usize,
    ) -> Result<Option<&Delta>, RangeError> {
        self.check_position(side, position)?;

        // Only the last delta anchored at or before `position` can contain
        // it; every earlier one ends at or before that delta's anchor.
        let idx = self
            .deltas
            .partition_point(|d| d.chunk(side).anchor <= position);
        Ok(idx
            .checked_sub(1)
            .map(|i| &self.deltas[i])
            .filter(|d| d.chunk(side).contains(position)))
    }

    /// The nearest delta whose anchor on `side` is strictly greater than
    /// `position`. Drives "jump to next change".
    pub fn delta_after(&self, side: Side, position: usize) -> Option<&Delta> {
        let idx = self
            .deltas
            .partition_point(|d| d.chunk(side).anchor <= position);
        self.deltas.get(idx)
    }

    /// The nearest delta whose anchor on `side` is strictly less than
    /// `position`. Drives "jump to previous change".
    pub fn delta_before(&self, side: Side, position: usize) -> Option<&Delta> {
        let idx = self
            .deltas
            .partition_point(|d| d.chunk(side).anchor < position);
        idx.checked_sub(1).map(|i| &self.deltas[i])
    }

    fn check_position(&self, side: Side, position: usize) -> Result<(), RangeError> {
        let len = self.sequence_len(side);
        if position > len {
            return Err(RangeError { position, len });
        }
        Ok(())
    }
}
