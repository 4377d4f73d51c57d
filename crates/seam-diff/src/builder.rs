//! Revision construction from an alignment.
//!
//! Walks both sequences in parallel, using the matched pairs as
//! synchronization points. Every maximal unmatched run between two
//! consecutive matches (or before the first / after the last) becomes
//! exactly one classified delta; a single matching element always terminates
//! a delta and lets the next one start.

use seam_types::{Chunk, Delta, Revision};

/// Fold an alignment into a [`Revision`].
///
/// Panics if the alignment is not strictly increasing in both coordinates or
/// points outside the sequences; that is a comparator bug, never a
/// recoverable condition.
pub fn build_revision<E>(original: &[E], revised: &[E], alignment: &[(usize, usize)]) -> Revision {
    Revision::new(
        build_deltas(original, revised, alignment),
        original.len(),
        revised.len(),
    )
}

/// The delta list of [`build_revision`], before assembly. The refining entry
/// points use this to attach nested revisions prior to sealing the result.
pub(crate) fn build_deltas<E>(
    original: &[E],
    revised: &[E],
    alignment: &[(usize, usize)],
) -> Vec<Delta> {
    let mut deltas = Vec::new();
    let mut next_original = 0;
    let mut next_revised = 0;

    for &(i, j) in alignment {
        assert!(
            i >= next_original && j >= next_revised && i < original.len() && j < revised.len(),
            "alignment is not strictly increasing within bounds"
        );

        if i > next_original || j > next_revised {
            deltas.push(Delta::new(
                Chunk::new(next_original, i - next_original),
                Chunk::new(next_revised, j - next_revised),
            ));
        }

        next_original = i + 1;
        next_revised = j + 1;
    }

    // Trailing unmatched run, if any.
    if next_original < original.len() || next_revised < revised.len() {
        deltas.push(Delta::new(
            Chunk::new(next_original, original.len() - next_original),
            Chunk::new(next_revised, revised.len() - next_revised),
        ));
    }

    deltas
}
