//! Prompt templates for the Groq narrative calls

use crate::scoring::report::CategoryScores;
use unicode_segmentation::UnicodeSegmentation;

/// Longest resume excerpt sent with the content-aware prompts.
const MAX_RESUME_EXCERPT: usize = 2000;

pub const PARSER_SYSTEM: &str =
    "You are an expert resume parser. Extract information accurately and return only valid JSON.";

pub const COACH_SYSTEM: &str =
    "You are an expert career coach and resume writer. Provide insightful, actionable advice.";

pub const OPTIMIZER_SYSTEM: &str =
    "You are an expert ATS resume analyzer. Provide specific, actionable advice based on actual resume content.";

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    personal_details: String,
    summary: String,
    dynamic_feedback: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            personal_details: PERSONAL_DETAILS_TEMPLATE.to_string(),
            summary: SUMMARY_TEMPLATE.to_string(),
            dynamic_feedback: DYNAMIC_FEEDBACK_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_personal_details(&self, resume_text: &str) -> String {
        self.personal_details.replace("{resume}", resume_text)
    }

    pub fn render_summary(&self, resume_text: &str, overall_score: u8) -> String {
        self.summary
            .replace("{score}", &overall_score.to_string())
            .replace("{resume}", resume_text)
    }

    pub fn render_dynamic_feedback(&self, resume_text: &str, scores: &CategoryScores) -> String {
        self.dynamic_feedback
            .replace("{keywords_score}", &scores.keywords_skills.to_string())
            .replace("{formatting_score}", &scores.formatting.to_string())
            .replace("{content_score}", &scores.content_quality.to_string())
            .replace("{structure_score}", &scores.structure_organization.to_string())
            .replace("{resume}", &truncate_graphemes(resume_text, MAX_RESUME_EXCERPT))
    }
}

/// Grapheme-safe truncation so multi-byte characters never get split.
fn truncate_graphemes(text: &str, max: usize) -> String {
    text.graphemes(true).take(max).collect()
}

const PERSONAL_DETAILS_TEMPLATE: &str = r#"Analyze the following resume text and extract the personal details in JSON format.

Resume Text:
{resume}

Please extract and return ONLY a valid JSON object with these fields:
{
    "name": "Full name of the person",
    "email": "Email address",
    "phone": "Phone or contact number",
    "current_company": "Current company or most recent company",
    "job_role": "Current job title or most recent role",
    "last_education": "Most recent education (degree, institution, year)"
}

If any information is not found, use "Not specified" as the value.
Return only the JSON object, no additional text."#;

const SUMMARY_TEMPLATE: &str = r#"Analyze this resume and provide insights based on the ATS score of {score}/100.

Resume Text:
{resume}

Please provide:
1. A concise professional summary (2-3 sentences) highlighting the candidate's key strengths and experience
2. Specific, actionable suggestions for improvement based on the ATS score

Return your response in this exact JSON format:
{
    "professional_summary": "2-3 sentence summary highlighting key strengths and experience",
    "improvement_suggestions": "Specific actionable suggestions for improving the resume and ATS score"
}

Make suggestions specific and practical. Consider the ATS score context.
Return only the JSON object, no additional text."#;

const DYNAMIC_FEEDBACK_TEMPLATE: &str = r#"Analyze this resume and provide specific, actionable recommendations based on the actual content and ATS scores:

Category Scores:
- Keywords & Skills: {keywords_score}/100
- Formatting: {formatting_score}/100
- Content Quality: {content_score}/100
- Structure & Organization: {structure_score}/100

Resume Text:
{resume}

Generate specific recommendations in JSON format:
{
    "recommendations": [
        {
            "category": "specific category name",
            "issue": "specific issue found in this resume",
            "impact": "specific impact on ATS compatibility",
            "recommendation": "specific actionable recommendation",
            "severity": "High"
        }
    ],
    "strengths": ["specific strength 1", "specific strength 2"],
    "optimization_tips": ["specific tip 1", "specific tip 2"]
}

Base recommendations on actual resume content, not generic advice.
Return only JSON, no additional text."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_placeholders() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_summary("RESUME BODY", 73);
        assert!(prompt.contains("73/100"));
        assert!(prompt.contains("RESUME BODY"));
        assert!(!prompt.contains("{score}"));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_dynamic_feedback_includes_all_scores() {
        let templates = PromptTemplates::default();
        let scores = CategoryScores {
            keywords_skills: 11,
            formatting: 22,
            content_quality: 33,
            structure_organization: 44,
        };
        let prompt = templates.render_dynamic_feedback("text", &scores);
        for value in ["11/100", "22/100", "33/100", "44/100"] {
            assert!(prompt.contains(value));
        }
    }

    #[test]
    fn test_long_resumes_are_truncated() {
        let templates = PromptTemplates::default();
        let long_resume = "x".repeat(10_000);
        let scores = CategoryScores {
            keywords_skills: 0,
            formatting: 0,
            content_quality: 0,
            structure_organization: 0,
        };
        let prompt = templates.render_dynamic_feedback(&long_resume, &scores);
        assert!(prompt.len() < 5_000);
    }

    #[test]
    fn test_truncate_graphemes_respects_boundaries() {
        assert_eq!(truncate_graphemes("héllo", 2), "hé");
        assert_eq!(truncate_graphemes("short", 100), "short");
    }
}
