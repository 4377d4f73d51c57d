//! Longest common subsequence alignment.
//!
//! Implements Eugene Myers' greedy algorithm from "An O(ND) Difference
//! Algorithm and Its Variations" (1986), with common prefix and suffix
//! trimming. The cost is bounded by `O((N+M)·D)` where `D` is the size of
//! the minimal edit script, so near-identical sequences stay fast no matter
//! how long they are.

/// Compute the matched index pairs of a longest common subsequence.
///
/// The result is strictly increasing in both coordinates and maximal in
/// length. Ties between equal-length subsequences are resolved by the
/// algorithm's scan order, never by element content.
///
/// Granularity is entirely the caller's choice: the elements may be lines,
/// characters, or anything else with an equality contract.
pub fn lcs_alignment<E: Eq>(original: &[E], revised: &[E]) -> Vec<(usize, usize)> {
    // Trim the common prefix and suffix; the search only runs on the
    // differing core.
    let prefix = original
        .iter()
        .zip(revised.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = original[prefix..]
        .iter()
        .rev()
        .zip(revised[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mut pairs: Vec<(usize, usize)> = (0..prefix).map(|i| (i, i)).collect();

    middle_alignment(
        &original[prefix..original.len() - suffix],
        &revised[prefix..revised.len() - suffix],
        prefix,
        &mut pairs,
    );

    for i in 0..suffix {
        pairs.push((original.len() - suffix + i, revised.len() - suffix + i));
    }

    pairs
}

/// Greedy forward search over the edit graph of the trimmed cores.
///
/// Records the furthest-reaching `x` per diagonal for every edit distance,
/// then backtracks through the recorded rounds to recover the matched pairs.
/// `offset` shifts the reported indices back into untrimmed coordinates.
fn middle_alignment<E: Eq>(a: &[E], b: &[E], offset: usize, pairs: &mut Vec<(usize, usize)>) {
    if a.is_empty() || b.is_empty() {
        return;
    }

    let n = a.len() as isize;
    let m = b.len() as isize;
    let bound = n + m;
    let idx = |k: isize| (k + bound) as usize;

    // v[idx(k)] is the furthest-reaching x on diagonal k = x - y. One round
    // of distance d only touches diagonals of d's parity, so the in-place
    // array can serve rounds d-1 and d at once.
    let mut v = vec![0isize; 2 * bound as usize + 1];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    for d in 0..=bound {
        trace.push(v.clone());

        let mut k = -d;
        while k <= d {
            // Step from whichever neighbouring diagonal reaches further:
            // down (keep x, consume from b) or right (advance x).
            let mut x = if k == -d || (k != d && v[idx(k - 1)] < v[idx(k + 1)]) {
                v[idx(k + 1)]
            } else {
                v[idx(k - 1)] + 1
            };
            let mut y = x - k;

            // Follow the snake: the run of equal elements on this diagonal.
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }

            v[idx(k)] = x;

            if x >= n && y >= m {
                backtrack(&trace, d, n, m, bound, offset, pairs);
                return;
            }

            k += 2;
        }
    }

    unreachable!("edit distance exceeded the N+M bound");
}

/// Walk the recorded rounds backwards from `(n, m)`, re-making each round's
/// down-or-right decision and collecting the diagonal runs as matched pairs.
fn backtrack(
    trace: &[Vec<isize>],
    d_final: isize,
    n: isize,
    m: isize,
    bound: isize,
    offset: usize,
    pairs: &mut Vec<(usize, usize)>,
) {
    let idx = |k: isize| (k + bound) as usize;
    let start = pairs.len();
    let mut x = n;
    let mut y = m;

    for d in (0..=d_final).rev() {
        let v = &trace[d as usize];
        let k = x - y;

        let prev_k = if k == -d || (k != d && v[idx(k - 1)] < v[idx(k + 1)]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[idx(prev_k)];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            pairs.push((x as usize + offset, y as usize + offset));
        }

        if d > 0 {
            x = prev_x;
            y = prev_y;
        }
    }

    // The walk collected pairs in descending order.
    pairs[start..].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_match_everywhere() {
        let a = ["a", "b", "c"];
        let pairs = lcs_alignment(&a, &a);
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn disjoint_sequences_match_nowhere() {
        let a = ["a", "b"];
        let b = ["c", "d"];
        assert!(lcs_alignment(&a, &b).is_empty());
    }

    #[test]
    fn empty_sides() {
        let a: [&str; 0] = [];
        let b = ["a", "b"];
        assert!(lcs_alignment(&a, &b).is_empty());
        assert!(lcs_alignment(&b, &a).is_empty());
        assert!(lcs_alignment(&a, &a).is_empty());
    }

    #[test]
    fn single_change_in_the_middle() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        assert_eq!(lcs_alignment(&a, &b), vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn deletion_keeps_surrounding_matches() {
        let a = ["a", "b", "c"];
        let b = ["a", "c"];
        assert_eq!(lcs_alignment(&a, &b), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn insertion_at_the_end() {
        let a = ["a", "b"];
        let b = ["a", "b", "c"];
        assert_eq!(lcs_alignment(&a, &b), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn finds_a_maximal_subsequence_across_displacement() {
        let a = ["x", "a", "b", "c"];
        let b = ["a", "b", "c", "y"];
        assert_eq!(lcs_alignment(&a, &b), vec![(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn alignment_is_strictly_increasing() {
        let a = [1, 3, 1, 3, 1, 3, 2, 2];
        let b = [3, 1, 3, 2, 1, 2, 3, 1];
        let pairs = lcs_alignment(&a, &b);
        for w in pairs.windows(2) {
            assert!(w[0].0 < w[1].0, "original indices must ascend: {:?}", pairs);
            assert!(w[0].1 < w[1].1, "revised indices must ascend: {:?}", pairs);
        }
        for &(i, j) in &pairs {
            assert_eq!(a[i], b[j], "pair ({i}, {j}) must match");
        }
    }

    #[test]
    fn repeated_elements_still_align_maximally() {
        let a = ["a", "a", "b"];
        let b = ["b", "a", "a"];
        // Best possible is two matches ("a", "a").
        let pairs = lcs_alignment(&a, &b);
        assert_eq!(pairs.len(), 2);
        for &(i, j) in &pairs {
            assert_eq!(a[i], b[j]);
        }
    }
}
