//! AI-powered resume analysis via the Groq API

use crate::ai::client::GroqClient;
use crate::ai::prompts::{self, PromptTemplates};
use crate::config::AiConfig;
use crate::error::Result;
use crate::scoring::report::CategoryScores;
use serde::{Deserialize, Serialize};

/// Personal details extracted from the resume by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(default = "not_specified")]
    pub name: String,
    #[serde(default = "not_specified")]
    pub email: String,
    #[serde(default = "not_specified")]
    pub phone: String,
    #[serde(default = "not_specified")]
    pub current_company: String,
    #[serde(default = "not_specified")]
    pub job_role: String,
    #[serde(default = "not_specified")]
    pub last_education: String,
}

/// Narrative summary and improvement advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    #[serde(default)]
    pub professional_summary: String,
    #[serde(default)]
    pub improvement_suggestions: String,
}

impl AiSummary {
    /// Generic text used when the AI service is unavailable.
    pub fn fallback() -> Self {
        Self {
            professional_summary: "Professional with diverse experience and demonstrated skills \
                                   across multiple domains."
                .to_string(),
            improvement_suggestions: "Consider quantifying achievements with specific numbers, \
                                      adding relevant technical skills, and ensuring clear section \
                                      organization for better ATS compatibility."
                .to_string(),
        }
    }
}

/// Content-aware recommendations generated by the model. Unlike the
/// deterministic templates these reference actual resume content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiFeedback {
    #[serde(default)]
    pub recommendations: Vec<AiRecommendation>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub optimization_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiRecommendation {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default = "default_severity")]
    pub severity: String,
}

fn not_specified() -> String {
    "Not specified".to_string()
}

fn default_severity() -> String {
    "Medium".to_string()
}

impl Default for PersonalDetails {
    fn default() -> Self {
        Self {
            name: not_specified(),
            email: not_specified(),
            phone: not_specified(),
            current_company: not_specified(),
            job_role: not_specified(),
            last_education: not_specified(),
        }
    }
}

/// Narrative analyzer wrapping the Groq client with the three analysis
/// contracts. Each call degrades independently at the call site.
pub struct AiAnalyzer {
    client: GroqClient,
    templates: PromptTemplates,
}

impl AiAnalyzer {
    pub fn new(api_key: String, config: &AiConfig) -> Self {
        Self {
            client: GroqClient::new(api_key, config),
            templates: PromptTemplates::default(),
        }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub async fn extract_personal_details(&self, resume_text: &str) -> Result<PersonalDetails> {
        let prompt = self.templates.render_personal_details(resume_text);
        self.client
            .complete_json(prompts::PARSER_SYSTEM, &prompt, 0.1, 500)
            .await
    }

    pub async fn summarize(&self, resume_text: &str, overall_score: u8) -> Result<AiSummary> {
        let prompt = self.templates.render_summary(resume_text, overall_score);
        self.client
            .complete_json(prompts::COACH_SYSTEM, &prompt, 0.3, 800)
            .await
    }

    pub async fn dynamic_feedback(
        &self,
        resume_text: &str,
        scores: &CategoryScores,
    ) -> Result<AiFeedback> {
        let prompt = self.templates.render_dynamic_feedback(resume_text, scores);
        self.client
            .complete_json(prompts::OPTIMIZER_SYSTEM, &prompt, 0.2, 1500)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_details_defaults_missing_fields() {
        let details: PersonalDetails =
            serde_json::from_str(r#"{"name": "Jane Doe", "email": "jane@example.com"}"#).unwrap();
        assert_eq!(details.name, "Jane Doe");
        assert_eq!(details.current_company, "Not specified");
        assert_eq!(details.last_education, "Not specified");
    }

    #[test]
    fn test_ai_feedback_tolerates_partial_payloads() {
        let feedback: AiFeedback =
            serde_json::from_str(r#"{"strengths": ["clear history"]}"#).unwrap();
        assert!(feedback.recommendations.is_empty());
        assert_eq!(feedback.strengths, vec!["clear history"]);
        assert!(feedback.optimization_tips.is_empty());
    }

    #[test]
    fn test_ai_recommendation_defaults_severity() {
        let rec: AiRecommendation =
            serde_json::from_str(r#"{"category": "Formatting", "issue": "dense layout"}"#).unwrap();
        assert_eq!(rec.severity, "Medium");
    }

    #[test]
    fn test_summary_fallback_is_nonempty() {
        let fallback = AiSummary::fallback();
        assert!(!fallback.professional_summary.is_empty());
        assert!(!fallback.improvement_suggestions.is_empty());
    }
}
