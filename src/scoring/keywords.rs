//! Keyword and skills analysis

use crate::error::{Result, ResumeScreenerError};
use crate::scoring::text::NormalizedText;
use crate::scoring::vocabulary::ScoringVocabulary;
use crate::scoring::weighted_score;
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

const SKILLS_WEIGHT: f64 = 0.4;
const ACTION_VERB_WEIGHT: f64 = 0.3;
const DENSITY_WEIGHT: f64 = 0.3;

pub struct KeywordAnalyzer {
    skill_matcher: AhoCorasick,
    skill_count: usize,
    action_verbs: Vec<String>,
}

impl KeywordAnalyzer {
    pub fn new(vocabulary: &ScoringVocabulary) -> Result<Self> {
        let terms: Vec<&str> = vocabulary.skill_terms().collect();
        let skill_matcher = AhoCorasick::new(&terms).map_err(|e| {
            ResumeScreenerError::TextProcessing(format!("Failed to build skill matcher: {}", e))
        })?;

        Ok(Self {
            skill_matcher,
            skill_count: terms.len(),
            action_verbs: vocabulary.action_verbs.clone(),
        })
    }

    /// Weighted sum of skill coverage, action-verb coverage, and vocabulary
    /// density. Zero word tokens short-circuits to 0.
    pub fn score(&self, text: &NormalizedText) -> u8 {
        let word_count = text.word_count();
        if word_count == 0 {
            return 0;
        }

        // Overlapping matches so "java" is still found inside "javascript",
        // the same way a plain substring probe would find it.
        let mut found = HashSet::new();
        for mat in self.skill_matcher.find_overlapping_iter(&text.lowered) {
            found.insert(mat.pattern());
        }
        let skills_coverage = if self.skill_count == 0 {
            0.0
        } else {
            (found.len() as f64 / self.skill_count as f64 * 100.0).min(100.0)
        };

        let verbs_found = self
            .action_verbs
            .iter()
            .filter(|verb| text.lowered.contains(verb.as_str()))
            .count();
        let verb_coverage = if self.action_verbs.is_empty() {
            0.0
        } else {
            (verbs_found as f64 / self.action_verbs.len() as f64 * 100.0).min(100.0)
        };

        let density = text.unique_word_count() as f64 / word_count as f64 * 100.0;
        let density_score = (density * 2.0).min(100.0);

        weighted_score(&[
            (SKILLS_WEIGHT, skills_coverage),
            (ACTION_VERB_WEIGHT, verb_coverage),
            (DENSITY_WEIGHT, density_score),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> KeywordAnalyzer {
        KeywordAnalyzer::new(&ScoringVocabulary::default()).unwrap()
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(analyzer().score(&NormalizedText::new("")), 0);
    }

    #[test]
    fn test_punctuation_only_text_scores_zero() {
        assert_eq!(analyzer().score(&NormalizedText::new("... !!! ???")), 0);
    }

    #[test]
    fn test_skill_terms_found_as_substrings() {
        let with_skills = analyzer().score(&NormalizedText::new(
            "Developed Python and JavaScript services, managed SQL pipelines, \
             improved React frontends and led Agile ceremonies.",
        ));
        let without_skills = analyzer().score(&NormalizedText::new(
            "A plain paragraph describing gardening and cooking hobbies at length.",
        ));
        assert!(with_skills > without_skills);
    }

    #[test]
    fn test_substring_term_inside_longer_word_counts() {
        // "javascript" contains both "java" and "javascript" from the catalog
        let engine = analyzer();
        let one_term = engine.score(&NormalizedText::new("knows javascript deeply"));
        let shorter = engine.score(&NormalizedText::new("knows typescript deeply"));
        assert!(one_term > shorter);
    }

    #[test]
    fn test_score_within_bounds() {
        let score = analyzer().score(&NormalizedText::new(
            "python java javascript c++ sql html css react angular node.js \
             machine learning data analysis pandas numpy tensorflow pytorch \
             achieved managed led developed implemented improved increased",
        ));
        assert!(score <= 100);
    }
}
