//! Line-and-character instantiation of the generic engine.
//!
//! The outer diff runs over lines; every qualifying change region is then
//! refined into a character-level nested revision, which is what lets a
//! consumer highlight the exact changed characters inside a changed line.
//! Each line is exploded with a trailing `'\n'` atom so that character
//! anchors stay stable across line boundaries within a multi-line region.

use seam_types::Revision;

use crate::{diff_refined, DiffOptions};

/// Diff two line sequences with default options.
pub fn diff_lines<S: AsRef<str>>(original: &[S], revised: &[S]) -> Revision {
    diff_lines_with(original, revised, &DiffOptions::default())
}

/// Diff two line sequences, refining changed regions into characters.
pub fn diff_lines_with<S: AsRef<str>>(
    original: &[S],
    revised: &[S],
    options: &DiffOptions,
) -> Revision {
    let original: Vec<&str> = original.iter().map(AsRef::as_ref).collect();
    let revised: Vec<&str> = revised.iter().map(AsRef::as_ref).collect();

    diff_refined(&original, &revised, options, |line: &&str| {
        line.chars().chain(std::iter::once('\n')).collect()
    })
}
