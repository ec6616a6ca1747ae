//! Scoring engine coordinating normalization, the four category analyzers,
//! and feedback derivation

use crate::error::Result;
use crate::scoring::content::ContentAnalyzer;
use crate::scoring::feedback::FeedbackBuilder;
use crate::scoring::formatting::FormattingAnalyzer;
use crate::scoring::keywords::KeywordAnalyzer;
use crate::scoring::report::{CategoryScores, ScoreReport, Severity};
use crate::scoring::structure::StructureAnalyzer;
use crate::scoring::text::NormalizedText;
use crate::scoring::vocabulary::ScoringVocabulary;

/// Deterministic resume scorer.
///
/// Holds only read-only reference tables and compiled patterns, so one
/// engine can score any number of resumes and is safe to share across
/// threads. `analyze` is total: it never fails or panics for any string
/// input, including empty or binary-garbage text.
pub struct ScoringEngine {
    keywords: KeywordAnalyzer,
    formatting: FormattingAnalyzer,
    content: ContentAnalyzer,
    structure: StructureAnalyzer,
    feedback: FeedbackBuilder,
}

impl ScoringEngine {
    pub fn new() -> Result<Self> {
        Self::with_vocabulary(ScoringVocabulary::default())
    }

    /// Build an engine over a custom vocabulary.
    pub fn with_vocabulary(vocabulary: ScoringVocabulary) -> Result<Self> {
        Ok(Self {
            keywords: KeywordAnalyzer::new(&vocabulary)?,
            formatting: FormattingAnalyzer::new(),
            content: ContentAnalyzer::new(&vocabulary),
            structure: StructureAnalyzer::new(&vocabulary),
            feedback: FeedbackBuilder::new(),
        })
    }

    /// Score a resume. Same input text always yields the same report.
    pub fn analyze(&self, resume_text: &str) -> ScoreReport {
        let normalized = NormalizedText::new(resume_text);

        let category_scores = CategoryScores {
            keywords_skills: self.keywords.score(&normalized),
            formatting: self.formatting.score(resume_text),
            content_quality: self.content.score(resume_text, &normalized),
            structure_organization: self.structure.score(&normalized),
        };

        let recommendations = self.feedback.recommendations(&category_scores);
        let strengths = self.feedback.strengths(resume_text, &category_scores);
        let optimization_tips = self.feedback.optimization_tips(&category_scores);

        let critical_issues = recommendations
            .iter()
            .filter(|r| r.severity == Severity::High)
            .count();

        ScoreReport {
            overall_score: category_scores.overall(),
            category_scores,
            total_issues: recommendations.len(),
            critical_issues,
            recommendations,
            strengths,
            optimization_tips,
        }
    }
}
