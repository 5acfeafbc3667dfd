//! Vector space scoring.
//!
//! Builds TF-IDF vectors over the reference document and all candidates
//! jointly, then scores each candidate by cosine similarity against the
//! reference. Joint vectorization is a structural requirement, not an
//! optimization: IDF weighting must reflect the actual comparison set, so
//! the vocabulary is the union of terms across [reference, candidates...]
//! and re-deriving vectors per candidate would change the scores.
//!
//! All arithmetic is `f64`; scores for identical input are bit-identical
//! across runs, comfortably stable to 4 decimal digits.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use sift_lex::Lexicon;

use crate::normalize::TokenSet;

/// A sparse TF-IDF vector for one document.
///
/// Weights are keyed by vocabulary index and kept sorted for a merge-join
/// dot product. The Euclidean norm is precomputed; a document with no
/// in-vocabulary terms has a zero norm and scores 0.0 against everything.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector {
    /// (vocabulary index, tf × idf) pairs sorted by index.
    weights: Vec<(usize, f64)>,
    /// Euclidean norm of the weights.
    norm: f64,
}

impl ScoreVector {
    /// Builds a vector from sorted (index, weight) pairs.
    fn new(weights: Vec<(usize, f64)>) -> Self {
        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        Self { weights, norm }
    }

    /// Returns the number of non-zero entries.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the vector has no non-zero entries.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Dot product with another vector over the shared vocabulary.
    fn dot(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        let mut left = self.weights.iter().peekable();
        let mut right = other.weights.iter().peekable();

        while let (Some(&&(li, lw)), Some(&&(ri, rw))) = (left.peek(), right.peek()) {
            match li.cmp(&ri) {
                Ordering::Less => {
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    sum += lw * rw;
                    left.next();
                    right.next();
                }
            }
        }

        sum
    }
}

/// Cosine similarity between two vectors sharing one vocabulary.
///
/// Dot product divided by the product of Euclidean norms, clamped into
/// [0, 1]. A zero-norm vector on either side yields 0.0 by definition
/// rather than a division fault; this covers degraded candidates and the
/// all-empty corpus.
pub fn cosine_similarity(a: &ScoreVector, b: &ScoreVector) -> f64 {
    if a.norm == 0.0 || b.norm == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (a.norm * b.norm)).clamp(0.0, 1.0)
}

/// TF-IDF model fitted over one corpus.
///
/// The vocabulary and IDF values are shared by every vector the model
/// produces; that is what makes the per-pair similarities comparable.
pub struct TfidfModel {
    /// Vocabulary terms in index order (alphabetical).
    vocabulary: Vec<String>,
    /// Term → vocabulary index.
    index: HashMap<String, usize>,
    /// Smoothed inverse document frequency per vocabulary term.
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fits a model over the whole corpus.
    ///
    /// The vocabulary is the union of corpus terms minus stopwords. When it
    /// exceeds `max_vocabulary`, it is truncated to the terms most frequent
    /// across the corpus, ties broken alphabetically — the overflow is
    /// recovered here, never surfaced as an error. IDF uses the smoothed
    /// form `ln((1 + n) / (1 + df)) + 1`, which keeps every kept term at a
    /// positive weight.
    pub fn fit<L: Lexicon>(corpus: &[&TokenSet], max_vocabulary: usize, lexicon: &L) -> Self {
        let doc_count = corpus.len();

        // Corpus-wide term frequency and document frequency
        let mut term_freq: HashMap<&str, u64> = HashMap::new();
        let mut doc_freq: HashMap<&str, u32> = HashMap::new();
        for doc in corpus {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in doc.tokens() {
                *term_freq.entry(token).or_insert(0) += 1;
                seen.insert(token);
            }
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<(&str, u64)> = term_freq
            .into_iter()
            .filter(|(term, _)| !lexicon.is_stopword(term))
            .collect();

        // Cap to the most informative terms by corpus frequency
        terms.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(max_vocabulary);

        let mut vocabulary: Vec<String> = terms.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort_unstable();

        let index: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        let idf = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0);
                ((1 + doc_count) as f64 / f64::from(1 + df)).ln() + 1.0
            })
            .collect();

        Self {
            vocabulary,
            index,
            idf,
        }
    }

    /// Produces the TF-IDF vector for one document.
    ///
    /// Out-of-vocabulary tokens contribute nothing; a document whose tokens
    /// are all out of vocabulary (or that has none) maps to the zero
    /// vector.
    pub fn transform(&self, doc: &TokenSet) -> ScoreVector {
        let mut counts: HashMap<usize, u64> = HashMap::new();
        for token in doc.tokens() {
            if let Some(&idx) = self.index.get(token) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }

        let mut weights: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| (idx, count as f64 * self.idf[idx]))
            .collect();
        weights.sort_unstable_by_key(|&(idx, _)| idx);

        ScoreVector::new(weights)
    }

    /// Returns the fitted vocabulary in index order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

/// Scores every candidate against the reference.
///
/// Fits one model over [reference, candidates...] and returns the cosine
/// similarity per candidate, in input order.
pub fn score_candidates<L: Lexicon>(
    reference: &TokenSet,
    candidates: &[TokenSet],
    max_vocabulary: usize,
    lexicon: &L,
) -> Vec<f64> {
    let mut corpus: Vec<&TokenSet> = Vec::with_capacity(candidates.len() + 1);
    corpus.push(reference);
    corpus.extend(candidates.iter());

    let model = TfidfModel::fit(&corpus, max_vocabulary, lexicon);
    let reference_vector = model.transform(reference);

    candidates
        .iter()
        .map(|candidate| cosine_similarity(&reference_vector, &model.transform(candidate)))
        .collect()
}

#[cfg(test)]
mod test {
    use sift_lex::SnowballLexicon;

    use super::*;

    fn tokens(words: &[&str]) -> TokenSet {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn identical_documents_score_one() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["python", "panda", "numpi"]);
        let candidate = reference.clone();

        let scores = score_candidates(&reference, &[candidate], 5000, &lexicon);

        assert_eq!(scores.len(), 1);
        assert!((scores[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_documents_score_zero() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["python", "panda"]);
        let candidate = tokens(&["java", "spring"]);

        let scores = score_candidates(&reference, &[candidate], 5000, &lexicon);

        assert_eq!(scores[0], 0.0);
    }

    #[test]
    fn partial_overlap_scores_between() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["python", "panda", "numpi", "learn"]);
        let candidate = tokens(&["python", "java"]);

        let scores = score_candidates(&reference, &[candidate], 5000, &lexicon);

        assert!(scores[0] > 0.0);
        assert!(scores[0] < 1.0);
    }

    #[test]
    fn empty_candidate_scores_zero() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["python"]);
        let candidate = TokenSet::default();

        let scores = score_candidates(&reference, &[candidate], 5000, &lexicon);

        assert_eq!(scores[0], 0.0);
    }

    #[test]
    fn all_empty_corpus_scores_zero() {
        let lexicon = SnowballLexicon::new();
        let reference = TokenSet::default();
        let candidates = vec![TokenSet::default(), TokenSet::default()];

        let scores = score_candidates(&reference, &candidates, 5000, &lexicon);

        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["alpha", "beta", "gamma", "delta"]);
        let candidates = vec![
            tokens(&["alpha", "alpha", "alpha", "beta"]),
            tokens(&["gamma"]),
            tokens(&["unrelated"]),
        ];

        let scores = score_candidates(&reference, &candidates, 5000, &lexicon);

        for score in scores {
            assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
        }
    }

    #[test]
    fn vocabulary_cap_keeps_most_frequent_terms() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["common", "common", "common", "rare"]);
        let candidate = tokens(&["common", "rare", "rare"]);

        let corpus = [&reference, &candidate];
        let model = TfidfModel::fit(&corpus, 1, &lexicon);

        // "common" has corpus frequency 4 vs 3 for "rare"
        assert_eq!(model.vocabulary(), ["common"]);
    }

    #[test]
    fn vocabulary_cap_ties_break_alphabetically() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["zebra", "apple"]);
        let candidate = tokens(&["zebra", "apple"]);

        let corpus = [&reference, &candidate];
        let model = TfidfModel::fit(&corpus, 1, &lexicon);

        assert_eq!(model.vocabulary(), ["apple"]);
    }

    #[test]
    fn stopwords_are_excluded_from_vocabulary() {
        let lexicon = SnowballLexicon::new();
        // "the" survives a hand-built token set but not the vocabulary
        let reference = tokens(&["the", "python"]);
        let candidate = tokens(&["the", "python"]);

        let corpus = [&reference, &candidate];
        let model = TfidfModel::fit(&corpus, 5000, &lexicon);

        assert_eq!(model.vocabulary(), ["python"]);
    }

    #[test]
    fn scoring_is_deterministic() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["python", "panda", "learn", "model"]);
        let candidates = vec![
            tokens(&["python", "learn"]),
            tokens(&["model", "model", "panda"]),
        ];

        let first = score_candidates(&reference, &candidates, 5000, &lexicon);
        let second = score_candidates(&reference, &candidates, 5000, &lexicon);

        // Bit-identical, not merely close
        assert_eq!(first, second);
    }

    #[test]
    fn transform_ignores_out_of_vocabulary_tokens() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["python"]);
        let corpus = [&reference];
        let model = TfidfModel::fit(&corpus, 5000, &lexicon);

        let vector = model.transform(&tokens(&["python", "java"]));
        assert_eq!(vector.len(), 1);

        let vector = model.transform(&tokens(&["java"]));
        assert!(vector.is_empty());
    }

    #[test]
    fn higher_overlap_scores_higher() {
        let lexicon = SnowballLexicon::new();
        let reference = tokens(&["python", "panda", "numpi", "learn"]);
        let candidates = vec![
            tokens(&["python", "panda", "numpi"]),
            tokens(&["python"]),
        ];

        let scores = score_candidates(&reference, &candidates, 5000, &lexicon);

        assert!(scores[0] > scores[1]);
    }
}
