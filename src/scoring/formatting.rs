//! Formatting and ATS-parseability analysis

use crate::scoring::patterns;
use regex::Regex;

const MAX_LINE_LENGTH: usize = 120;

pub struct FormattingAnalyzer {
    special_chars: Regex,
    excessive_caps: Regex,
    email: Regex,
    phone: Regex,
}

impl Default for FormattingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormattingAnalyzer {
    pub fn new() -> Self {
        Self {
            special_chars: patterns::special_chars(),
            excessive_caps: patterns::excessive_caps(),
            email: patterns::email(),
            phone: patterns::phone(),
        }
    }

    /// Starts at 100 and subtracts capped penalties for characters and
    /// layout that commonly break ATS parsers. Never goes below 0.
    pub fn score(&self, text: &str) -> u8 {
        let mut score: i32 = 100;

        let special_count = self.special_chars.find_iter(text).count() as i32;
        score -= (special_count * 2).min(20);

        let caps_count = self.excessive_caps.find_iter(text).count() as i32;
        score -= (caps_count * 5).min(15);

        if !self.email.is_match(text) {
            score -= 10;
        }
        if !self.phone.is_match(text) {
            score -= 10;
        }

        let long_lines = text
            .lines()
            .filter(|line| line.chars().count() > MAX_LINE_LENGTH)
            .count() as i32;
        score -= (long_lines * 2).min(15);

        score.max(0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTACT: &str = "jane@example.com (555) 123-4567";

    #[test]
    fn test_clean_text_with_contact_scores_full() {
        let analyzer = FormattingAnalyzer::new();
        assert_eq!(analyzer.score(&format!("Jane Doe\n{}\nExperience", CONTACT)), 100);
    }

    #[test]
    fn test_missing_contact_penalties() {
        let analyzer = FormattingAnalyzer::new();
        assert_eq!(analyzer.score("Jane Doe\nExperience and Education"), 80);
        assert_eq!(analyzer.score("Jane Doe jane@example.com"), 90);
    }

    #[test]
    fn test_adding_contact_never_decreases_score() {
        let analyzer = FormattingAnalyzer::new();
        let base = "Jane Doe\nSoftware Engineer\nExperience at a startup";
        let with_contact = format!("{}\n{}", base, CONTACT);
        assert!(analyzer.score(&with_contact) >= analyzer.score(base));
    }

    #[test]
    fn test_special_character_penalty_is_capped() {
        let analyzer = FormattingAnalyzer::new();
        let noisy = format!("{} {}", CONTACT, "\u{2022}".repeat(50));
        // 50 bullets would be -100 uncapped; the cap holds it to -20
        assert_eq!(analyzer.score(&noisy), 80);
    }

    #[test]
    fn test_excessive_caps_penalty() {
        let analyzer = FormattingAnalyzer::new();
        let shouty = format!("WORKED EXTREMELY HARD ALWAYS EVERYWHERE\n{}", CONTACT);
        // five runs of 4+ caps: -25 uncapped, capped at -15
        assert_eq!(analyzer.score(&shouty), 85);
    }

    #[test]
    fn test_long_line_penalty() {
        let analyzer = FormattingAnalyzer::new();
        let long_line = "x".repeat(200);
        let text = format!("{}\n{}", CONTACT, long_line);
        assert_eq!(analyzer.score(&text), 98);
    }

    #[test]
    fn test_empty_input_does_not_panic() {
        let analyzer = FormattingAnalyzer::new();
        // only the two missing-contact penalties apply
        assert_eq!(analyzer.score(""), 80);
    }
}
