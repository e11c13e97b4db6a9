//! Similarity scoring between a normalized query and a normalized catalog name.
//!
//! The score is a single scalar in `0.0..=1.0`, the maximum of several signals. Each signal
//! has a fixed weight so a complete but partial match never outranks an exact one.

use crate::matcher::normalize::NormalizedName;

/// Score of two identical normalized strings.
pub const EXACT_SCORE: f64 = 1.0;
/// Strings are equal once spaces and hyphens are ignored (`"voidstaff"`).
pub const COMPACT_EQUAL_SCORE: f64 = 0.95;
/// One compact form contains the other (`"deathcap"` in `"rabadonsdeathcap"`).
pub const CONTAINMENT_SCORE: f64 = 0.80;
/// Weight of the Dice coefficient over shared tokens.
pub const TOKEN_OVERLAP_WEIGHT: f64 = 0.85;
/// Weight of the normalized Levenshtein similarity of the compact forms.
pub const EDIT_SIMILARITY_WEIGHT: f64 = 0.90;
/// Lowest score a fuzzy match needs before it is accepted.
pub const MIN_ACCEPT_SCORE: f64 = 0.70;

/// Shortest side of a containment check, shorter fragments match too much.
pub const MIN_CONTAINMENT_LEN: usize = 3;
/// Shortest token that counts as a prefix of another token.
pub const MIN_PREFIX_LEN: usize = 3;
/// Shortest token eligible for typo tolerance.
pub const MIN_TYPO_TOKEN_LEN: usize = 4;
/// Levenshtein similarity at which two tokens count as the same word.
pub const TOKEN_SIMILARITY: f64 = 0.80;

/// Scores a query against one catalog name.
pub fn score(query: &NormalizedName, candidate: &NormalizedName) -> f64 {
    if query.compact.is_empty() || candidate.compact.is_empty() {
        return 0.0;
    }
    if query.normalized == candidate.normalized {
        return EXACT_SCORE;
    }
    if query.compact == candidate.compact {
        return COMPACT_EQUAL_SCORE;
    }

    let containment = containment(&query.compact, &candidate.compact);
    let overlap = TOKEN_OVERLAP_WEIGHT * token_overlap(&query.tokens, &candidate.tokens);
    let edit = EDIT_SIMILARITY_WEIGHT
        * strsim::normalized_levenshtein(&query.compact, &candidate.compact);

    containment.max(overlap).max(edit)
}

fn containment(a: &str, b: &str) -> f64 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    if shorter.chars().count() >= MIN_CONTAINMENT_LEN && longer.contains(shorter) {
        CONTAINMENT_SCORE
    } else {
        0.0
    }
}

/// Dice coefficient over tokens, each candidate token can be claimed once.
fn token_overlap(query: &[String], candidate: &[String]) -> f64 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let mut claimed = vec![false; candidate.len()];
    let mut shared = 0usize;

    for token in query {
        let found =
            (0..candidate.len()).find(|&i| !claimed[i] && tokens_match(token, &candidate[i]));

        if let Some(i) = found {
            claimed[i] = true;
            shared += 1;
        }
    }

    (2 * shared) as f64 / (query.len() + candidate.len()) as f64
}

fn tokens_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    let (shorter, longer, shorter_len) = if a_len <= b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };

    if shorter_len >= MIN_PREFIX_LEN && longer.starts_with(shorter) {
        return true;
    }

    shorter_len >= MIN_TYPO_TOKEN_LEN && strsim::normalized_levenshtein(a, b) >= TOKEN_SIMILARITY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::normalize::Normalizer;

    fn name(raw: &str) -> NormalizedName {
        NormalizedName::new(Normalizer::default().normalize(raw))
    }

    #[test]
    fn exact_strings_score_highest() {
        assert_eq!(score(&name("Void Staff"), &name("void staff")), EXACT_SCORE);
    }

    #[test]
    fn joined_words_score_as_compact_equal() {
        assert_eq!(score(&name("voidstaff"), &name("Void Staff")), COMPACT_EQUAL_SCORE);
    }

    #[test]
    fn partial_name_scores_as_containment() {
        assert_eq!(score(&name("deathcap"), &name("Rabadon's Deathcap")), CONTAINMENT_SCORE);
        assert_eq!(score(&name("void"), &name("Void Staff")), CONTAINMENT_SCORE);
    }

    #[test]
    fn short_fragments_do_not_count_as_containment() {
        assert!(score(&name("vo"), &name("Void Staff")) < MIN_ACCEPT_SCORE);
    }

    #[test]
    fn abbreviated_words_share_tokens() {
        let s = score(&name("merc treads"), &name("Mercury's Treads"));

        assert!((s - TOKEN_OVERLAP_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn typos_are_tolerated() {
        assert!(score(&name("infinty edge"), &name("Infinity Edge")) >= MIN_ACCEPT_SCORE);
        assert!(score(&name("voud staff"), &name("Void Staff")) >= MIN_ACCEPT_SCORE);
    }

    #[test]
    fn unrelated_names_score_below_threshold() {
        assert!(score(&name("xyzzy"), &name("Void Staff")) < MIN_ACCEPT_SCORE);
        assert!(score(&name("sword"), &name("Mercury's Treads")) < MIN_ACCEPT_SCORE);
    }

    #[test]
    fn empty_query_scores_zero() {
        assert_eq!(score(&name(""), &name("Void Staff")), 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let a = score(&name("staff"), &name("Void Staff"));
        let b = score(&name("staff"), &name("Archangel's Staff"));

        assert_eq!(a, b);
    }
}
