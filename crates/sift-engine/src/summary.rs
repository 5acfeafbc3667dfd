//! Keyword coverage and summary generation.
//!
//! For each candidate this stage reports which reference keywords the
//! candidate's normalized tokens contain, which are absent, the coverage
//! percentage over the full keyword list, and a one-line narrative
//! summary. Matching is exact membership of the lemma in the candidate's
//! token set; there is no partial or fuzzy matching.

use std::collections::HashSet;

use crate::{keyword::KeywordList, normalize::TokenSet};

/// Summary used when no keywords matched at all.
const WEAK_OVERLAP_SUMMARY: &str =
    "Weak keyword overlap with the job description; resume may not match well.";

/// Keyword-overlap profile for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchProfile {
    /// Matched keywords in keyword-list order, truncated to `top_k`.
    pub matched: Vec<String>,
    /// Missing keywords in keyword-list order, truncated to `top_missing`.
    pub missing: Vec<String>,
    /// Percentage of the full keyword list present, rounded to one
    /// decimal.
    pub coverage_percent: f64,
    /// One-line narrative summary.
    pub summary: String,
}

/// Builds the match profile of one candidate against the keyword list.
///
/// Coverage is computed over the full keyword list; the `matched` and
/// `missing` fields are display views truncated to `top_k` and
/// `top_missing` respectively. Both views preserve keyword-list order, so
/// the most salient terms come first.
pub fn build_profile(
    keywords: &KeywordList,
    tokens: &TokenSet,
    top_k: usize,
    top_missing: usize,
) -> MatchProfile {
    let token_set: HashSet<&str> = tokens.tokens().iter().map(String::as_str).collect();

    let mut matched_count = 0usize;
    let mut matched: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();

    for term in keywords.terms() {
        if token_set.contains(term) {
            matched_count += 1;
            if matched.len() < top_k {
                matched.push(term.to_string());
            }
        } else if missing.len() < top_missing {
            missing.push(term.to_string());
        }
    }

    let any_missing = matched_count < keywords.len();
    let coverage_percent = round_one_decimal(100.0 * matched_count as f64 / keywords.len().max(1) as f64);
    let summary = build_summary(&matched, &missing, matched_count, any_missing);

    MatchProfile {
        matched,
        missing,
        coverage_percent,
        summary,
    }
}

/// Applies the three-tier summary policy.
///
/// Zero matches beats everything; otherwise missing keywords get called
/// out; a candidate covering the full list gets the strong-match form.
fn build_summary(
    matched: &[String],
    missing: &[String],
    matched_count: usize,
    any_missing: bool,
) -> String {
    if matched_count == 0 {
        return WEAK_OVERLAP_SUMMARY.to_string();
    }

    let strengths = matched.join(", ");
    if any_missing {
        format!(
            "Strengths: {strengths}. Missing keywords: {}.",
            missing.join(", ")
        )
    } else {
        format!("Strong match on keywords: {strengths}.")
    }
}

/// Rounds to one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::keyword::{KeywordList, ScoredKeyword};

    fn keywords(terms: &[&str]) -> KeywordList {
        let entries = terms
            .iter()
            .map(|t| ScoredKeyword::new(*t, 1.0))
            .collect();
        KeywordList::from_ranked(entries, usize::MAX)
    }

    fn tokens(words: &[&str]) -> TokenSet {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn full_coverage_gives_strong_match() {
        let kw = keywords(&["python", "panda"]);
        let profile = build_profile(&kw, &tokens(&["python", "panda", "extra"]), 5, 3);

        assert_eq!(profile.matched, ["python", "panda"]);
        assert!(profile.missing.is_empty());
        assert_eq!(profile.coverage_percent, 100.0);
        assert_eq!(profile.summary, "Strong match on keywords: python, panda.");
    }

    #[test]
    fn partial_coverage_lists_missing() {
        let kw = keywords(&["python", "panda", "numpy", "machine", "learning"]);
        let profile = build_profile(&kw, &tokens(&["python", "java"]), 5, 3);

        assert_eq!(profile.matched, ["python"]);
        assert_eq!(profile.missing, ["panda", "numpy", "machine"]);
        assert_eq!(profile.coverage_percent, 20.0);
        assert_eq!(
            profile.summary,
            "Strengths: python. Missing keywords: panda, numpy, machine."
        );
    }

    #[test]
    fn no_matches_gives_weak_overlap() {
        let kw = keywords(&["python", "panda"]);
        let profile = build_profile(&kw, &tokens(&["java", "spring"]), 5, 3);

        assert!(profile.matched.is_empty());
        assert_eq!(profile.missing, ["python", "panda"]);
        assert_eq!(profile.coverage_percent, 0.0);
        assert_eq!(profile.summary, WEAK_OVERLAP_SUMMARY);
    }

    #[test]
    fn empty_tokens_give_weak_overlap() {
        let kw = keywords(&["python"]);
        let profile = build_profile(&kw, &TokenSet::default(), 5, 3);

        assert!(profile.matched.is_empty());
        assert_eq!(profile.coverage_percent, 0.0);
        assert_eq!(profile.summary, WEAK_OVERLAP_SUMMARY);
    }

    #[test]
    fn empty_keyword_list_has_zero_coverage() {
        // max(1, |keywords|) guards the division
        let kw = keywords(&[]);
        let profile = build_profile(&kw, &tokens(&["anything"]), 5, 3);

        assert_eq!(profile.coverage_percent, 0.0);
        assert_eq!(profile.summary, WEAK_OVERLAP_SUMMARY);
    }

    #[test]
    fn matched_view_truncates_but_coverage_does_not() {
        let kw = keywords(&["a", "b", "c", "d"]);
        let profile = build_profile(&kw, &tokens(&["a", "b", "c", "d"]), 2, 3);

        // Display view holds 2, coverage counts all 4
        assert_eq!(profile.matched, ["a", "b"]);
        assert_eq!(profile.coverage_percent, 100.0);
        assert_eq!(profile.summary, "Strong match on keywords: a, b.");
    }

    #[test]
    fn missing_view_truncates() {
        let kw = keywords(&["a", "b", "c", "d", "e"]);
        let profile = build_profile(&kw, &tokens(&["a"]), 5, 2);

        assert_eq!(profile.missing, ["b", "c"]);
    }

    #[test]
    fn order_follows_keyword_list() {
        let kw = keywords(&["first", "second", "third"]);
        // Token order must not leak into the views
        let profile = build_profile(&kw, &tokens(&["third", "first"]), 5, 3);

        assert_eq!(profile.matched, ["first", "third"]);
        assert_eq!(profile.missing, ["second"]);
    }

    #[test]
    fn coverage_rounds_to_one_decimal() {
        let kw = keywords(&["a", "b", "c"]);
        let profile = build_profile(&kw, &tokens(&["a"]), 5, 3);

        // 1/3 → 33.333... → 33.3
        assert_eq!(profile.coverage_percent, 33.3);

        let profile = build_profile(&kw, &tokens(&["a", "b"]), 5, 3);
        // 2/3 → 66.666... → 66.7
        assert_eq!(profile.coverage_percent, 66.7);
    }

    #[test]
    fn matching_is_exact_membership() {
        let kw = keywords(&["python"]);
        // "pythonic" must not match "python"
        let profile = build_profile(&kw, &tokens(&["pythonic"]), 5, 3);

        assert!(profile.matched.is_empty());
        assert_eq!(profile.summary, WEAK_OVERLAP_SUMMARY);
    }
}
