//! Screening report combining deterministic scores with AI narrative

use crate::ai::analyzer::{AiFeedback, AiSummary, PersonalDetails};
use crate::scoring::report::ScoreReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final report handed to the formatters.
///
/// The deterministic `score` is computed first and stands on its own; the
/// AI fields are optional additions merged alongside it. Nothing here ever
/// rewrites a deterministic value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub score: ScoreReport,
    pub personal_details: Option<PersonalDetails>,
    pub ai_summary: Option<AiSummary>,
    pub ai_feedback: Option<AiFeedback>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub screener_version: String,
    pub resume_file: String,
    pub word_count: usize,
    pub processing_time_ms: u64,
    /// Model that produced the narrative sections, when AI ran.
    pub ai_model: Option<String>,
}

impl ScreeningReport {
    pub fn new(score: ScoreReport, metadata: ReportMetadata) -> Self {
        Self {
            score,
            personal_details: None,
            ai_summary: None,
            ai_feedback: None,
            metadata,
        }
    }

    pub fn with_personal_details(mut self, details: PersonalDetails) -> Self {
        self.personal_details = Some(details);
        self
    }

    pub fn with_ai_summary(mut self, summary: AiSummary) -> Self {
        self.ai_summary = Some(summary);
        self
    }

    pub fn with_ai_feedback(mut self, feedback: AiFeedback) -> Self {
        self.ai_feedback = Some(feedback);
        self
    }

    pub fn has_ai_insights(&self) -> bool {
        self.personal_details.is_some() || self.ai_summary.is_some() || self.ai_feedback.is_some()
    }

    /// One-line interpretation of the overall score.
    pub fn verdict(&self) -> &'static str {
        match self.score.overall_score {
            90..=100 => "Excellent ATS compatibility - ready to submit",
            80..=89 => "Very good ATS compatibility - minor improvements could help",
            70..=79 => "Good ATS compatibility - some targeted improvements recommended",
            60..=69 => "Fair ATS compatibility - several improvements needed",
            50..=59 => "Below average ATS compatibility - significant improvements required",
            _ => "Poor ATS compatibility - major revisions needed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::ScoringEngine;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            generated_at: Utc::now(),
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: "resume.txt".to_string(),
            word_count: 300,
            processing_time_ms: 2,
            ai_model: None,
        }
    }

    #[test]
    fn test_ai_sections_are_additive() {
        let engine = ScoringEngine::new().unwrap();
        let score = engine.analyze("experience education skills jane@example.com");
        let deterministic = score.clone();

        let report = ScreeningReport::new(score, metadata())
            .with_ai_summary(AiSummary::fallback())
            .with_ai_feedback(AiFeedback::default());

        // merging narrative output must not touch the deterministic report
        assert_eq!(report.score, deterministic);
        assert!(report.has_ai_insights());
    }

    #[test]
    fn test_verdict_bands() {
        let engine = ScoringEngine::new().unwrap();
        let mut report = ScreeningReport::new(engine.analyze(""), metadata());
        report.score.overall_score = 95;
        assert!(report.verdict().starts_with("Excellent"));
        report.score.overall_score = 41;
        assert!(report.verdict().starts_with("Poor"));
    }
}
