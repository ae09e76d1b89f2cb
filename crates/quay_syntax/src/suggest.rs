//! "Did you mean?" fuzzy matching for diagnostics.
//!
//! When a parse fails on a misspelled term, the diagnostics layer proposes corrections from the
//! vocabulary that was legal at that point. Matching uses Levenshtein edit distance with a fixed
//! threshold: anything further than [`MAX_SUGGEST_DISTANCE`] edits away is not a plausible typo
//! and the full vocabulary is listed instead.

/// Maximum edit distance for a term to count as a near miss.
pub const MAX_SUGGEST_DISTANCE: usize = 2;

/// Calculate Levenshtein edit distance between two strings: the minimum number of
/// single-character insertions, deletions, or substitutions turning one into the other.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two-row optimization instead of the full matrix.
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// The candidates within [`MAX_SUGGEST_DISTANCE`] of `term`, best first (ties alphabetical).
pub fn similar_terms<'a>(term: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    if term.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(&str, usize)> = candidates
        .iter()
        .filter_map(|candidate| {
            // A length difference beyond the threshold can never be within it.
            if term.len().abs_diff(candidate.len()) > MAX_SUGGEST_DISTANCE {
                return None;
            }
            let distance = edit_distance(term, candidate);
            (distance <= MAX_SUGGEST_DISTANCE).then_some((*candidate, distance))
        })
        .collect();

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    matches.into_iter().map(|(s, _)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_basics() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", "abc"), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("concurent", "concurrent"), 1);
        assert_eq!(edit_distance("locaton", "location"), 1);
    }

    #[test]
    fn test_similar_terms_respects_threshold() {
        let vocab = ["concurrent", "sequential", "single"];
        assert_eq!(similar_terms("concurent", &vocab), vec!["concurrent"]);
        assert_eq!(similar_terms("singel", &vocab), vec!["single"]);
        // Distance 3 or more from everything: no suggestion at all.
        assert!(similar_terms("xyz", &vocab).is_empty());
        assert!(similar_terms("", &vocab).is_empty());
    }

    #[test]
    fn test_similar_terms_orders_best_first() {
        let vocab = ["import", "imports", "from"];
        let near = similar_terms("imprt", &vocab);
        assert_eq!(near, vec!["import", "imports"]);
    }
}
