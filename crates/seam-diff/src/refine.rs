//! One-level refinement of changed regions at a finer granularity.
//!
//! A `Change` delta tells a consumer *which* lines differ; refinement tells
//! it *where inside them*. The region's content on both sides is exploded
//! into finer-grained atoms and re-aligned from scratch, producing a nested
//! revision whose anchors are relative to the chunk starts. Refinement is
//! exactly one level deep: nested revisions are never refined again.

use seam_types::{Delta, DeltaKind, Revision};

use crate::builder::build_revision;
use crate::myers::lcs_alignment;

/// Re-diff the contents of a `Change` delta at the next finer granularity.
///
/// `original` and `revised` are the full outer sequences the delta was
/// computed over; `atoms` explodes one outer element into its constituent
/// atoms (a line into its characters, say).
///
/// Returns `None` for non-`Change` deltas, and for regions whose chunk size
/// reaches `threshold` on either side; large rewritten blocks are
/// deliberately not decomposed, which keeps the worst case bounded. An
/// over-threshold region is a normal outcome, not an error.
pub fn refine_delta<E, A, F>(
    delta: &Delta,
    original: &[E],
    revised: &[E],
    threshold: usize,
    atoms: F,
) -> Option<Revision>
where
    A: Eq,
    F: Fn(&E) -> Vec<A>,
{
    if delta.kind() != DeltaKind::Change {
        return None;
    }
    if delta.original().size >= threshold || delta.revised().size >= threshold {
        return None;
    }

    let original_atoms: Vec<A> = original[delta.original().range()]
        .iter()
        .flat_map(|e| atoms(e))
        .collect();
    let revised_atoms: Vec<A> = revised[delta.revised().range()]
        .iter()
        .flat_map(|e| atoms(e))
        .collect();

    let alignment = lcs_alignment(&original_atoms, &revised_atoms);
    Some(build_revision(&original_atoms, &revised_atoms, &alignment))
}
