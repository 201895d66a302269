//! Ratcliff/Obershelp similarity ratio.
//!
//! The ratio is `2 * M / (|a| + |b|)` where `M` is the number of characters
//! covered by matching blocks. Blocks are found by taking the longest common
//! run of characters, then recursing on the pieces to its left and right.
//! This is not an edit distance: transpositions cost more than a single edit.
//!
//! ## Complexity
//!
//! Each longest-match search is `O(|a| * |b|)` in the worst case, and there is
//! at most one search per matching block, so a full ratio is `O(|a|^2 * |b|)`
//! in the pathological case and close to `O(|a| * |b|)` for typical sample
//! identifiers. [`length_bound`] is `O(1)` beyond counting characters and
//! [`multiset_bound`] is `O(|a| + |b|)`, which is why callers check them first.

use std::collections::HashMap;

#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Normalize a matched-character count into a ratio.
///
/// Two empty strings are identical, so the ratio is 1.0.
fn to_ratio(matched: usize, total_len: usize) -> f64 {
    if total_len == 0 {
        1.0
    } else {
        2.0 * count_to_f64(matched) / count_to_f64(total_len)
    }
}

/// Similarity ratio in `[0, 1]` between two strings.
///
/// Compares Unicode scalar values as-is; no case folding is applied.
/// The result is symmetric: `ratio(a, b) == ratio(b, a)`.
///
/// # Examples
///
/// ```
/// use sample_reconcile::matching::similarity::ratio;
///
/// assert!((ratio("Smith", "Smyth") - 0.8).abs() < 1e-9);
/// assert!((ratio("abc", "abc") - 1.0).abs() < 1e-9);
/// assert!(ratio("Zzqx", "Abcdef") < 0.6);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();

    // Longest-match tie-breaking depends on argument order, so the pair is
    // always decomposed in one canonical order.
    if (a.len(), &a) > (b.len(), &b) {
        std::mem::swap(&mut a, &mut b);
    }

    to_ratio(matching_characters(&a, &b), a.len() + b.len())
}

/// Upper bound on [`ratio`] from lengths alone.
#[must_use]
pub fn length_bound(a: &str, b: &str) -> f64 {
    let la = a.chars().count();
    let lb = b.chars().count();
    to_ratio(la.min(lb), la + lb)
}

/// Upper bound on [`ratio`] from the shared character multiset, ignoring order.
#[must_use]
pub fn multiset_bound(a: &str, b: &str) -> f64 {
    let mut available: HashMap<char, usize> = HashMap::new();
    let mut lb = 0usize;
    for c in b.chars() {
        *available.entry(c).or_insert(0) += 1;
        lb += 1;
    }

    let mut la = 0usize;
    let mut shared = 0usize;
    for c in a.chars() {
        la += 1;
        if let Some(n) = available.get_mut(&c) {
            if *n > 0 {
                *n -= 1;
                shared += 1;
            }
        }
    }

    to_ratio(shared, la + lb)
}

/// Total size of all matching blocks between `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    // Positions of each character in b, ascending
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = find_longest_match(a, &b2j, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, k)` with `a[i..i+k] == b[j..j+k]`. Among runs of maximal
/// length, the one starting earliest in `a` wins, then earliest in `b`.
/// `k == 0` means the ranges share no character.
fn find_longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);

    // j2len[j] = length of the run ending at a[i-1] and b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_j2len.insert(j, k);
                if k > best_k {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_k = k;
                }
            }
        }
        j2len = next_j2len;
    }

    (best_i, best_j, best_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_ratio_known_values() {
        // "Sm" + "th" = 4 matched of 10 total characters
        assert_close(ratio("Smith", "Smyth"), 0.8);
        // "bcd" = 3 of 8
        assert_close(ratio("abcd", "bcde"), 0.75);
        assert_close(ratio("sample01", "sample01"), 1.0);
        assert_close(ratio("Zzqx", "Abcdef"), 0.0);
    }

    #[test]
    fn test_ratio_empty_strings() {
        assert_close(ratio("", ""), 1.0);
        assert_close(ratio("abc", ""), 0.0);
        assert_close(ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_ratio_is_case_sensitive() {
        assert_close(ratio("ABC", "abc"), 0.0);
    }

    #[test]
    fn test_ratio_counts_chars_not_bytes() {
        // 'é' is two bytes but one character
        assert_close(ratio("café", "cafe"), 0.75);
    }

    #[test]
    fn test_ratio_recurses_on_both_sides() {
        // Blocks "ACDE" then "G" from the right-hand remainder
        assert_close(ratio("xACDEyG", "ACDEzG"), 2.0 * 5.0 / 13.0);
    }

    #[test]
    fn test_ratio_symmetric() {
        let pairs = [
            ("Smith", "Smyth"),
            ("abcd", "dcba"),
            ("Sample_01", "Sample-02"),
            ("aab", "abb"),
            ("GENO_12a", "geno12A"),
            ("xyxyxy", "yxyx"),
        ];
        for (a, b) in pairs {
            assert_eq!(ratio(a, b), ratio(b, a), "asymmetric for {a:?} / {b:?}");
        }
    }

    #[test]
    fn test_bounds_are_upper_bounds() {
        let pairs = [
            ("Smith", "Smyth"),
            ("abcd", "dcba"),
            ("Sample_01", "sample-1"),
            ("Zzqx", "Abcdef"),
            ("", "x"),
        ];
        for (a, b) in pairs {
            let r = ratio(a, b);
            assert!(multiset_bound(a, b) >= r, "multiset bound for {a:?} / {b:?}");
            assert!(length_bound(a, b) >= multiset_bound(a, b));
        }
    }

    #[test]
    fn test_multiset_bound_ignores_order() {
        assert_close(multiset_bound("abcd", "dcba"), 1.0);
        assert!(ratio("abcd", "dcba") < 1.0);
    }

    #[test]
    fn test_find_longest_match_prefers_earliest() {
        let a: Vec<char> = "abab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        assert_eq!(find_longest_match(&a, &b2j, 0, 4, 0, 2), (0, 0, 2));
        assert_eq!(find_longest_match(&a, &b2j, 1, 4, 0, 2), (2, 0, 2));
    }
}
