//! Text normalization for the scoring engine

/// Normalized view of a resume shared by the category analyzers.
///
/// No stemming, no locale awareness: analysis is substring and token based,
/// so normalization is deliberately simple and reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Lower-cased copy of the full text for case-insensitive matching.
    pub lowered: String,
    /// Sentences split on `.`, `!`, `?` runs, trimmed, empties discarded.
    /// Original casing is preserved for per-sentence word counts.
    pub sentences: Vec<String>,
    /// Word tokens: ASCII punctuation stripped, then whitespace split.
    pub words: Vec<String>,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let lowered = raw.to_lowercase();

        let sentences = raw
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        // Punctuation characters are removed, not replaced, so "node.js"
        // tokenizes as "nodejs".
        let stripped: String = lowered
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();
        let words = stripped
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Self {
            lowered,
            sentences,
            words,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn unique_word_count(&self) -> usize {
        let unique: std::collections::HashSet<&str> =
            self.words.iter().map(String::as_str).collect();
        unique.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_sequences() {
        let text = NormalizedText::new("");
        assert!(text.sentences.is_empty());
        assert!(text.words.is_empty());
        assert_eq!(text.word_count(), 0);
        assert_eq!(text.unique_word_count(), 0);
    }

    #[test]
    fn test_sentence_splitting_collapses_terminator_runs() {
        let text = NormalizedText::new("First sentence... Second one! Third?");
        assert_eq!(
            text.sentences,
            vec!["First sentence", "Second one", "Third"]
        );
    }

    #[test]
    fn test_whitespace_only_sentences_discarded() {
        let text = NormalizedText::new(".  . ! ?");
        assert!(text.sentences.is_empty());
    }

    #[test]
    fn test_tokenization_strips_punctuation() {
        let text = NormalizedText::new("Shipped Node.js micro-services, twice!");
        assert_eq!(
            text.words,
            vec!["shipped", "nodejs", "microservices", "twice"]
        );
    }

    #[test]
    fn test_unique_word_count() {
        let text = NormalizedText::new("rust rust RUST go");
        assert_eq!(text.word_count(), 4);
        assert_eq!(text.unique_word_count(), 2);
    }
}
