//! Content-quality analysis

use crate::scoring::patterns;
use crate::scoring::text::NormalizedText;
use crate::scoring::vocabulary::ScoringVocabulary;
use crate::scoring::weighted_score;
use regex::Regex;

const WORD_COUNT_WEIGHT: f64 = 0.2;
const READABILITY_WEIGHT: f64 = 0.3;
const ACHIEVEMENT_WEIGHT: f64 = 0.25;
const PROFESSIONAL_WEIGHT: f64 = 0.25;

pub struct ContentAnalyzer {
    number: Regex,
    percentage: Regex,
    professional_verbs: Vec<String>,
}

impl ContentAnalyzer {
    pub fn new(vocabulary: &ScoringVocabulary) -> Self {
        Self {
            number: patterns::number(),
            percentage: patterns::percentage(),
            professional_verbs: vocabulary.professional_verbs.clone(),
        }
    }

    pub fn score(&self, text: &str, normalized: &NormalizedText) -> u8 {
        weighted_score(&[
            (WORD_COUNT_WEIGHT, word_count_score(normalized.word_count())),
            (READABILITY_WEIGHT, readability_score(&normalized.sentences)),
            (ACHIEVEMENT_WEIGHT, self.achievement_score(text)),
            (PROFESSIONAL_WEIGHT, self.professional_score(normalized)),
        ])
    }

    /// Count of plain numeric tokens plus double-weighted percentage tokens,
    /// 10 points per unit. Digits forming a `NN%` token count only in the
    /// percentage bucket.
    fn achievement_score(&self, text: &str) -> f64 {
        let digit_runs = self.number.find_iter(text).count();
        let percentages = self.percentage.find_iter(text).count();
        let plain_numbers = digit_runs.saturating_sub(percentages);
        ((plain_numbers + percentages * 2) as f64 * 10.0).min(100.0)
    }

    fn professional_score(&self, normalized: &NormalizedText) -> f64 {
        let found = self
            .professional_verbs
            .iter()
            .filter(|verb| normalized.lowered.contains(verb.as_str()))
            .count();
        (found as f64 * 20.0).min(100.0)
    }
}

/// 100 inside [200,800] words, linear ramp below, gentle decay above
/// floored at 50.
fn word_count_score(word_count: usize) -> f64 {
    if (200..=800).contains(&word_count) {
        100.0
    } else if word_count < 200 {
        word_count as f64 / 200.0 * 100.0
    } else {
        (100.0 - (word_count as f64 - 800.0) / 20.0).max(50.0)
    }
}

/// Mean words-per-sentence mapped to [0,100]: ideal range is [10,25].
/// Zero sentences contributes nothing.
fn readability_score(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total_words: usize = sentences
        .iter()
        .map(|sentence| sentence.split_whitespace().count())
        .sum();
    let average = total_words as f64 / sentences.len() as f64;

    if (10.0..=25.0).contains(&average) {
        100.0
    } else if average < 10.0 {
        average / 10.0 * 100.0
    } else {
        (100.0 - (average - 25.0) * 3.0).max(40.0)
    }
}
