//! Structure and organization analysis

use crate::scoring::patterns;
use crate::scoring::text::NormalizedText;
use crate::scoring::vocabulary::ScoringVocabulary;
use crate::scoring::weighted_score;
use regex::Regex;

const SECTION_WEIGHT: f64 = 0.6;
const CONTACT_WEIGHT: f64 = 0.2;
const FLOW_WEIGHT: f64 = 0.2;

pub struct StructureAnalyzer {
    email: Regex,
    expected_sections: Vec<String>,
}

impl StructureAnalyzer {
    pub fn new(vocabulary: &ScoringVocabulary) -> Self {
        Self {
            email: patterns::email(),
            expected_sections: vocabulary.expected_sections.clone(),
        }
    }

    pub fn score(&self, normalized: &NormalizedText) -> u8 {
        let lowered = &normalized.lowered;

        let found = self
            .expected_sections
            .iter()
            .filter(|section| lowered.contains(section.as_str()))
            .count();
        let section_score = if self.expected_sections.is_empty() {
            0.0
        } else {
            found as f64 / self.expected_sections.len() as f64 * 100.0
        };

        let contact_score = if self.email.is_match(&first_quarter(lowered)) {
            100.0
        } else {
            50.0
        };

        let has_experience = lowered.contains("experience");
        let has_education = lowered.contains("education");
        let flow_score = match (has_experience, has_education) {
            (true, true) => 100.0,
            (false, false) => 30.0,
            _ => 70.0,
        };

        weighted_score(&[
            (SECTION_WEIGHT, section_score),
            (CONTACT_WEIGHT, contact_score),
            (FLOW_WEIGHT, flow_score),
        ])
    }
}

/// First quarter of the text by character count. Contact information is
/// expected near the top of a resume.
fn first_quarter(text: &str) -> String {
    let quarter = text.chars().count() / 4;
    text.chars().take(quarter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> StructureAnalyzer {
        StructureAnalyzer::new(&ScoringVocabulary::default())
    }

    #[test]
    fn test_all_sections_with_early_contact_scores_full() {
        let text = "jane@example.com padding padding padding padding padding padding \
                    padding padding padding padding padding padding padding padding \
                    summary objective experience education skills projects \
                    certifications achievements awards";
        let score = analyzer().score(&NormalizedText::new(text));
        // 0.6*100 + 0.2*100 + 0.2*100
        assert_eq!(score, 100);
    }

    #[test]
    fn test_no_sections_no_contact() {
        let score = analyzer().score(&NormalizedText::new("just a paragraph about hobbies"));
        // 0.6*0 + 0.2*50 + 0.2*30 = 16
        assert_eq!(score, 16);
    }

    #[test]
    fn test_flow_score_with_one_of_two_sections() {
        let with_one = analyzer().score(&NormalizedText::new("experience only here"));
        // sections: 1/9 * 100 * 0.6 + 50*0.2 + 70*0.2 = 6.66 + 10 + 14 = 30
        assert_eq!(with_one, 30);
    }

    #[test]
    fn test_contact_must_be_in_first_quarter() {
        let early = format!("jane@example.com {}", "filler ".repeat(100));
        let late = format!("{} jane@example.com", "filler ".repeat(100));
        let early_score = analyzer().score(&NormalizedText::new(&early));
        let late_score = analyzer().score(&NormalizedText::new(&late));
        assert!(early_score > late_score);
    }

    #[test]
    fn test_empty_input_does_not_panic() {
        let score = analyzer().score(&NormalizedText::new(""));
        // 0 sections, no early contact, neither flow anchor
        assert_eq!(score, 16);
    }
}
