use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;
use crate::revision::Revision;
use crate::side::Side;

/// Classification of one difference region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeltaKind {
    /// Content present only on the revised side.
    Add,
    /// Content present only on the original side.
    Delete,
    /// Content replaced; both sides are non-empty.
    Change,
}

/// One classified difference region between two sequences.
///
/// The two chunks describe the unmatched spans on each side; at most one of
/// them may be empty, and which one determines the kind. A `Change` delta may
/// carry a nested revision describing the same region at a finer granularity
/// (characters within changed lines); its anchors are relative to the chunk
/// starts, and it is never itself refined further.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    original: Chunk,
    revised: Chunk,
    kind: DeltaKind,
    change_revision: Option<Revision>,
}

impl Delta {
    /// Build a delta from its two chunks; the kind is derived from the chunk
    /// sizes.
    ///
    /// Panics if both chunks are empty: a delta must describe at least one
    /// unmatched element, and producing one that doesn't is a builder bug.
    pub fn new(original: Chunk, revised: Chunk) -> Self {
        let kind = match (original.is_empty(), revised.is_empty()) {
            (true, false) => DeltaKind::Add,
            (false, true) => DeltaKind::Delete,
            (false, false) => DeltaKind::Change,
            (true, true) => panic!("delta with two empty chunks"),
        };
        Self {
            original,
            revised,
            kind,
            change_revision: None,
        }
    }

    /// The unmatched span on the original side.
    pub fn original(&self) -> Chunk {
        self.original
    }

    /// The unmatched span on the revised side.
    pub fn revised(&self) -> Chunk {
        self.revised
    }

    /// The unmatched span on the given side.
    pub fn chunk(&self, side: Side) -> Chunk {
        match side {
            Side::Original => self.original,
            Side::Revised => self.revised,
        }
    }

    pub fn kind(&self) -> DeltaKind {
        self.kind
    }

    /// The finer-granularity revision of this region, if one was built.
    pub fn change_revision(&self) -> Option<&Revision> {
        self.change_revision.as_ref()
    }

    /// Attach a finer-granularity revision. Only meaningful for `Change`
    /// deltas; the refiner enforces that.
    pub fn set_change_revision(&mut self, revision: Revision) {
        self.change_revision = Some(revision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_derived_from_chunk_sizes() {
        let add = Delta::new(Chunk::new(1, 0), Chunk::new(1, 2));
        assert_eq!(add.kind(), DeltaKind::Add);

        let delete = Delta::new(Chunk::new(1, 2), Chunk::new(1, 0));
        assert_eq!(delete.kind(), DeltaKind::Delete);

        let change = Delta::new(Chunk::new(1, 1), Chunk::new(1, 3));
        assert_eq!(change.kind(), DeltaKind::Change);
    }

    #[test]
    #[should_panic(expected = "two empty chunks")]
    fn both_chunks_empty_is_a_bug() {
        Delta::new(Chunk::new(1, 0), Chunk::new(1, 0));
    }

    #[test]
    fn chunk_by_side() {
        let delta = Delta::new(Chunk::new(2, 1), Chunk::new(3, 4));
        assert_eq!(delta.chunk(Side::Original), delta.original());
        assert_eq!(delta.chunk(Side::Revised), delta.revised());
    }

    #[test]
    fn fresh_delta_has_no_nested_revision() {
        let delta = Delta::new(Chunk::new(0, 1), Chunk::new(0, 1));
        assert!(delta.change_revision().is_none());
    }
}
