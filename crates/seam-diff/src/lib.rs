//! Diff engine for Seam.
//!
//! Computes the alignment between two element sequences, folds it into a
//! navigable [`Revision`] of classified deltas, optionally refines changed
//! regions at a finer granularity, and maps positions between the two
//! coordinate spaces.
//!
//! The engine is generic over the element type: instantiated once over lines
//! and once over characters it yields the classic two-level text diff (see
//! [`diff_lines`]), but any `Eq` element works. It is pure computation:
//! inputs are immutable for the duration of a call, results are immutable
//! snapshots, and there is no internal concurrency or cancellation.
//!
//! # Key Operations
//!
//! - [`diff`] / [`diff_refined`] — compute a [`Revision`] for two sequences
//! - [`diff_lines`] — the line/character text instantiation
//! - [`map_position`] — translate a position across the two coordinate spaces
//! - [`refine_delta`] — re-diff one changed region at a finer granularity

pub mod builder;
pub mod map;
pub mod myers;
pub mod refine;
pub mod text;

pub use builder::build_revision;
pub use map::{map_position, original_to_revised, revised_to_original};
pub use myers::lcs_alignment;
pub use refine::refine_delta;
pub use text::{diff_lines, diff_lines_with};

use seam_types::Revision;
use tracing::debug;

/// Options controlling a diff computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    /// Change regions whose chunk reaches this many elements on either side
    /// are not refined into a nested revision.
    pub sub_diff_threshold: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            sub_diff_threshold: 1000,
        }
    }
}

/// Diff two sequences of opaque elements.
///
/// Produces the revision only: opaque elements cannot be exploded into finer
/// atoms, so no nested refinement takes place. Use [`diff_refined`] to
/// refine changed regions, or [`diff_lines`] for text.
pub fn diff<E: Eq>(original: &[E], revised: &[E]) -> Revision {
    let alignment = myers::lcs_alignment(original, revised);
    let revision = builder::build_revision(original, revised, &alignment);
    debug!(
        original = original.len(),
        revised = revised.len(),
        deltas = revision.len(),
        "computed revision"
    );
    revision
}

/// Diff two sequences and refine every qualifying change region at the
/// finer granularity provided by `atoms`.
///
/// Change regions at or above `options.sub_diff_threshold` on either side
/// keep an empty refinement slot; that is a normal outcome, not an error.
pub fn diff_refined<E, A, F>(
    original: &[E],
    revised: &[E],
    options: &DiffOptions,
    atoms: F,
) -> Revision
where
    E: Eq,
    A: Eq,
    F: Fn(&E) -> Vec<A>,
{
    let alignment = myers::lcs_alignment(original, revised);
    let mut deltas = builder::build_deltas(original, revised, &alignment);

    for delta in &mut deltas {
        if let Some(nested) =
            refine::refine_delta(delta, original, revised, options.sub_diff_threshold, &atoms)
        {
            delta.set_change_revision(nested);
        }
    }

    let revision = Revision::new(deltas, original.len(), revised.len());
    debug!(
        original = original.len(),
        revised = revised.len(),
        deltas = revision.len(),
        "computed refined revision"
    );
    revision
}

#[cfg(test)]
mod tests {
    use super::*;
    use seam_types::{Chunk, DeltaKind};

    #[test]
    fn identity_yields_empty_revision() {
        let a = ["a", "b", "c"];
        let revision = diff(&a, &a);
        assert!(revision.is_empty());
        assert_eq!(revision.sequence_len(seam_types::Side::Original), 3);
    }

    #[test]
    fn empty_inputs_yield_empty_revision() {
        let a: [&str; 0] = [];
        assert!(diff(&a, &a).is_empty());
    }

    #[test]
    fn single_change() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        let revision = diff(&a, &b);

        assert_eq!(revision.len(), 1);
        let delta = &revision.deltas()[0];
        assert_eq!(delta.kind(), DeltaKind::Change);
        assert_eq!(delta.original(), Chunk::new(1, 1));
        assert_eq!(delta.revised(), Chunk::new(1, 1));
    }

    #[test]
    fn single_delete() {
        let a = ["a", "b"];
        let b = ["a"];
        let revision = diff(&a, &b);

        assert_eq!(revision.len(), 1);
        let delta = &revision.deltas()[0];
        assert_eq!(delta.kind(), DeltaKind::Delete);
        assert_eq!(delta.original(), Chunk::new(1, 1));
        assert_eq!(delta.revised(), Chunk::new(1, 0));
    }

    #[test]
    fn single_add() {
        let a = ["a"];
        let b = ["a", "b"];
        let revision = diff(&a, &b);

        assert_eq!(revision.len(), 1);
        let delta = &revision.deltas()[0];
        assert_eq!(delta.kind(), DeltaKind::Add);
        assert_eq!(delta.original(), Chunk::new(1, 0));
        assert_eq!(delta.revised(), Chunk::new(1, 1));
    }

    #[test]
    fn add_into_empty_original() {
        let a: [&str; 0] = [];
        let b = ["a", "b"];
        let revision = diff(&a, &b);

        assert_eq!(revision.len(), 1);
        let delta = &revision.deltas()[0];
        assert_eq!(delta.kind(), DeltaKind::Add);
        assert_eq!(delta.original(), Chunk::new(0, 0));
        assert_eq!(delta.revised(), Chunk::new(0, 2));
    }

    #[test]
    fn symmetry_on_the_canonical_scenarios() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        let ab = diff(&a, &b);
        let ba = diff(&b, &a);

        assert_eq!(ab.len(), ba.len());
        for (d_ab, d_ba) in ab.deltas().iter().zip(ba.deltas()) {
            assert_eq!(d_ab.original(), d_ba.revised());
            assert_eq!(d_ab.revised(), d_ba.original());
            assert_eq!(d_ab.kind(), DeltaKind::Change);
            assert_eq!(d_ba.kind(), DeltaKind::Change);
        }

        let a = ["a", "b"];
        let b = ["a"];
        let ab = diff(&a, &b);
        let ba = diff(&b, &a);
        assert_eq!(ab.deltas()[0].kind(), DeltaKind::Delete);
        assert_eq!(ba.deltas()[0].kind(), DeltaKind::Add);
        assert_eq!(ab.deltas()[0].original(), ba.deltas()[0].revised());
        assert_eq!(ab.deltas()[0].revised(), ba.deltas()[0].original());
    }

    #[test]
    fn refined_diff_attaches_nested_revisions_only_to_changes() {
        let a = ["abc", "keep", "gone"];
        let b = ["axc", "keep"];
        let revision = diff_refined(&a, &b, &DiffOptions::default(), |s: &&str| {
            s.chars().collect()
        });

        assert_eq!(revision.len(), 2);
        let change = &revision.deltas()[0];
        assert_eq!(change.kind(), DeltaKind::Change);
        assert!(change.change_revision().is_some());

        let delete = &revision.deltas()[1];
        assert_eq!(delete.kind(), DeltaKind::Delete);
        assert!(delete.change_revision().is_none());
    }
}
