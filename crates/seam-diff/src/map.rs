//! Position mapping between the two coordinate spaces of a revision.
//!
//! Drives synchronized scrolling and cursor correspondence: a position in
//! one sequence is translated to its best corresponding position in the
//! other, using only the revision. The sequences themselves are never
//! touched.

use seam_types::{RangeError, Revision, Side};

/// Map `position` from one side's coordinate space to the other's.
///
/// Positions ahead of all deltas shift by the accumulated length difference
/// (the skew) of the deltas passed over. A position inside a changed region
/// snaps to the start of the corresponding region on the other side;
/// changed regions of unequal size are not interpolated. The result is
/// monotone in `position`, so synchronized scrolling never moves backward.
///
/// `position` may be anywhere in `[0, sequence_len]`; anything outside fails
/// with [`RangeError`], and callers are expected to clamp first.
pub fn map_position(revision: &Revision, from: Side, position: usize) -> Result<usize, RangeError> {
    let len = revision.sequence_len(from);
    if position > len {
        return Err(RangeError { position, len });
    }

    let to = from.opposite();
    let mut skew = 0isize;

    for delta in revision.deltas() {
        let from_chunk = delta.chunk(from);
        let to_chunk = delta.chunk(to);

        if from_chunk.end() <= position {
            skew += to_chunk.size as isize - from_chunk.size as isize;
        } else if from_chunk.contains(position) {
            return Ok(to_chunk.anchor);
        } else {
            break;
        }
    }

    Ok((position as isize + skew) as usize)
}

/// Map a line in the original sequence to its revised counterpart.
pub fn original_to_revised(revision: &Revision, line: usize) -> Result<usize, RangeError> {
    map_position(revision, Side::Original, line)
}

/// Map a line in the revised sequence to its original counterpart.
pub fn revised_to_original(revision: &Revision, line: usize) -> Result<usize, RangeError> {
    map_position(revision, Side::Revised, line)
}
