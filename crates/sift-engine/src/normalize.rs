//! Text normalization.
//!
//! Converts raw document text into a canonical token sequence: whitespace
//! and punctuation collapse away during tokenization, tokens are
//! case-folded, non-alphabetic tokens are dropped, stopwords are filtered
//! on their surface form, and survivors are reduced to their lemma by the
//! injected linguistic backend.
//!
//! Normalization never fails: empty input (or input that normalizes to
//! nothing) yields an empty [`TokenSet`]. Identical input always yields an
//! identical `TokenSet` for the same backend.

use sift_lex::Lexicon;

/// An ordered sequence of normalized tokens derived from one document.
///
/// May be empty when the source text was empty or nothing survived
/// filtering. Owned by the pipeline stage that produced it and treated as
/// immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    /// Normalized tokens in source order.
    tokens: Vec<String>,
}

impl TokenSet {
    /// Returns the tokens in source order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens survived normalization.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks membership of a normalized term.
    pub fn contains(&self, term: &str) -> bool {
        self.tokens.iter().any(|t| t == term)
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// Normalizes raw text into a [`TokenSet`].
///
/// Tokens are kept only if they are purely alphabetic and not stopwords;
/// the stopword check runs on the surface form before lemmatization, so an
/// inflected stopword is dropped as written rather than via its lemma.
pub fn normalize<L: Lexicon>(text: &str, lexicon: &L) -> TokenSet {
    lexicon
        .tokenize(text)
        .into_iter()
        .filter(|token| token.chars().all(char::is_alphabetic))
        .filter(|token| !lexicon.is_stopword(token))
        .map(|token| lexicon.lemmatize(&token))
        .collect()
}

#[cfg(test)]
mod test {
    use sift_lex::SnowballLexicon;

    use super::*;

    #[test]
    fn empty_input_yields_empty_token_set() {
        let lexicon = SnowballLexicon::new();
        assert!(normalize("", &lexicon).is_empty());
        assert!(normalize("   \n\r\n\t ", &lexicon).is_empty());
    }

    #[test]
    fn collapses_whitespace_and_case_folds() {
        let lexicon = SnowballLexicon::new();
        let tokens = normalize("Python\n\n   PYTHON  python", &lexicon);
        assert_eq!(tokens.tokens(), ["python", "python", "python"]);
    }

    #[test]
    fn drops_non_alphabetic_tokens() {
        let lexicon = SnowballLexicon::new();
        let tokens = normalize("python3 2024 rust c99 embedded", &lexicon);
        // "python3", "2024", "c99" contain digits and are dropped
        assert_eq!(tokens.tokens(), ["rust", "embed"]);
    }

    #[test]
    fn filters_stopwords() {
        let lexicon = SnowballLexicon::new();
        let tokens = normalize("the engineer and the compiler", &lexicon);
        assert_eq!(tokens.tokens(), ["engin", "compil"]);
    }

    #[test]
    fn lemmatizes_tokens() {
        let lexicon = SnowballLexicon::new();
        let tokens = normalize("testing databases", &lexicon);
        assert_eq!(tokens.tokens(), ["test", "databas"]);
    }

    #[test]
    fn normalization_is_deterministic() {
        let lexicon = SnowballLexicon::new();
        let text = "Senior Rust engineer building distributed storage systems";
        assert_eq!(normalize(text, &lexicon), normalize(text, &lexicon));
    }

    #[test]
    fn token_set_membership() {
        let lexicon = SnowballLexicon::new();
        let tokens = normalize("python java", &lexicon);
        assert!(tokens.contains("python"));
        assert!(tokens.contains("java"));
        assert!(!tokens.contains("rust"));
    }
}
