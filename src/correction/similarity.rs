//! Matching-block similarity ratio
//!
//! The score is `2 * M / T`, where `T` is the combined length of both strings
//! and `M` is the number of characters covered by matching blocks. Blocks are
//! found by taking the longest common run, then recursing into the pieces on
//! either side of it. Lengths are counted in chars, not bytes.

/// Similarity of `a` and `b` in `[0, 1]`; `1.0` only for identical strings.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total size of all matching blocks between `a` and `b`
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }

        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
///
/// Ties go to the run starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    // run[col] is the length of the run ending at b[blo + col - 1]
    let width = bhi.saturating_sub(blo);
    let mut prev = vec![0usize; width + 1];
    let mut run = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            run[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };

            if run[col] > best_size {
                best_size = run[col];
                best_i = i + 1 - best_size;
                best_j = j + 1 - best_size;
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn identical_strings_score_one() {
        assert_close(ratio("clawdbot", "clawdbot"), 1.0);
        assert_close(ratio("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_close(ratio("xyz", "media"), 0.0);
        assert_close(ratio("", "media"), 0.0);
    }

    #[test]
    fn known_ratios() {
        assert_close(ratio("abcd", "bcde"), 0.75);
        assert_close(ratio("clawdbat", "clawdbot"), 0.875);
        assert_close(ratio("inbond", "inbound"), 12.0 / 13.0);
        assert_close(ratio("meda", "media"), 8.0 / 9.0);
    }

    #[test]
    fn blocks_do_not_cross() {
        // "ab" then "ba": only one block of size 1 fits on either side
        assert_close(ratio("ab", "ba"), 0.5);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_close(ratio("帮我", "帮你"), 0.5);
    }
}
