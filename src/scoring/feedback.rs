//! Template-based recommendation, strength, and tip derivation
//!
//! Pure data lookup over static template tables, evaluated in the fixed
//! category order so output ordering is deterministic. Content-aware
//! suggestions are the AI collaborator's job, never this module's.

use crate::scoring::patterns;
use crate::scoring::report::{Category, CategoryScores, Recommendation, Severity};
use regex::Regex;

const RECOMMENDATION_THRESHOLD: u8 = 70;
const HIGH_SEVERITY_THRESHOLD: u8 = 50;
const STRENGTH_THRESHOLD: u8 = 80;
const TIP_THRESHOLD: u8 = 80;

struct RecommendationTemplate {
    category: Category,
    issue: &'static str,
    impact: &'static str,
    recommendation: &'static str,
    /// `Some` pins the severity regardless of score.
    fixed_severity: Option<Severity>,
}

const RECOMMENDATION_TEMPLATES: [RecommendationTemplate; 4] = [
    RecommendationTemplate {
        category: Category::KeywordsSkills,
        issue: "Limited relevant keywords and technical skills detected",
        impact: "ATS systems may not identify your resume as a match for relevant positions",
        recommendation: "Add more industry-specific keywords, technical skills, and action verbs. \
                         Research job descriptions for target roles and incorporate relevant terminology.",
        fixed_severity: None,
    },
    RecommendationTemplate {
        category: Category::Formatting,
        issue: "Formatting issues that may interfere with ATS parsing",
        impact: "Poor formatting can cause ATS systems to misread or skip important information",
        recommendation: "Use standard fonts, avoid special characters, ensure consistent formatting, \
                         and include clear contact information at the top.",
        fixed_severity: None,
    },
    RecommendationTemplate {
        category: Category::ContentQuality,
        issue: "Content lacks quantified achievements or professional language",
        impact: "Resume may not effectively demonstrate your value and impact",
        recommendation: "Include specific numbers, percentages, and measurable achievements. \
                         Use professional action verbs and maintain appropriate length (300-600 words).",
        fixed_severity: Some(Severity::Medium),
    },
    RecommendationTemplate {
        category: Category::StructureOrganization,
        issue: "Missing key sections or poor organization",
        impact: "ATS systems expect standard resume sections in logical order",
        recommendation: "Include standard sections: Contact Info, Summary/Objective, Experience, \
                         Education, Skills. Organize information in a logical, chronological order.",
        fixed_severity: None,
    },
];

const STRENGTH_MESSAGES: [(Category, &str); 4] = [
    (
        Category::KeywordsSkills,
        "Strong keyword optimization with relevant technical skills",
    ),
    (
        Category::Formatting,
        "Clean, ATS-friendly formatting and structure",
    ),
    (
        Category::ContentQuality,
        "High-quality content with quantified achievements",
    ),
    (
        Category::StructureOrganization,
        "Well-organized with all essential resume sections",
    ),
];

const BASELINE_TIPS: [&str; 5] = [
    "Use standard section headings like 'Experience', 'Education', 'Skills'",
    "Save your resume as both PDF and Word formats for different ATS systems",
    "Tailor your resume keywords to match specific job descriptions",
    "Keep formatting simple and avoid tables, graphics, or columns",
    "Use bullet points for easy scanning and parsing",
];

pub struct FeedbackBuilder {
    percentage: Regex,
    email: Regex,
    phone: Regex,
}

impl Default for FeedbackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackBuilder {
    pub fn new() -> Self {
        Self {
            percentage: patterns::percentage(),
            email: patterns::email(),
            phone: patterns::phone(),
        }
    }

    /// At most one recommendation per category scoring below 70.
    pub fn recommendations(&self, scores: &CategoryScores) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        for template in &RECOMMENDATION_TEMPLATES {
            let score = scores.get(template.category);
            if score >= RECOMMENDATION_THRESHOLD {
                continue;
            }
            let severity = template.fixed_severity.unwrap_or_else(|| {
                if score < HIGH_SEVERITY_THRESHOLD {
                    Severity::High
                } else {
                    Severity::Medium
                }
            });
            recommendations.push(Recommendation {
                category: template.category,
                severity,
                issue: template.issue.to_string(),
                impact: template.impact.to_string(),
                recommendation: template.recommendation.to_string(),
            });
        }

        recommendations
    }

    /// One fixed message per category scoring 80 or above, plus two
    /// content-derived strengths.
    pub fn strengths(&self, text: &str, scores: &CategoryScores) -> Vec<String> {
        let mut strengths = Vec::new();

        for (category, message) in &STRENGTH_MESSAGES {
            if scores.get(*category) >= STRENGTH_THRESHOLD {
                strengths.push(message.to_string());
            }
        }

        if self.percentage.is_match(text) {
            strengths.push("Includes quantified achievements with percentages".to_string());
        }
        if self.email.is_match(text) && self.phone.is_match(text) {
            strengths.push("Complete contact information provided".to_string());
        }

        strengths
    }

    /// Five baseline tips plus up to two score-conditioned additions.
    pub fn optimization_tips(&self, scores: &CategoryScores) -> Vec<String> {
        let mut tips: Vec<String> = BASELINE_TIPS.iter().map(|tip| tip.to_string()).collect();

        if scores.keywords_skills < TIP_THRESHOLD {
            tips.push("Research industry-specific keywords and incorporate them naturally".to_string());
        }
        if scores.content_quality < TIP_THRESHOLD {
            tips.push("Quantify your achievements with specific numbers and percentages".to_string());
        }

        tips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(keywords: u8, formatting: u8, content: u8, structure: u8) -> CategoryScores {
        CategoryScores {
            keywords_skills: keywords,
            formatting,
            content_quality: content,
            structure_organization: structure,
        }
    }

    #[test]
    fn test_no_recommendations_at_threshold() {
        let builder = FeedbackBuilder::new();
        assert!(builder.recommendations(&scores(70, 70, 70, 70)).is_empty());
    }

    #[test]
    fn test_one_recommendation_just_below_threshold() {
        let builder = FeedbackBuilder::new();
        let recommendations = builder.recommendations(&scores(69, 100, 100, 100));
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].category, Category::KeywordsSkills);
        assert_eq!(recommendations[0].severity, Severity::Medium);
    }

    #[test]
    fn test_severity_boundary() {
        let builder = FeedbackBuilder::new();
        let high = builder.recommendations(&scores(100, 49, 100, 100));
        assert_eq!(high[0].severity, Severity::High);

        let medium = builder.recommendations(&scores(100, 50, 100, 100));
        assert_eq!(medium[0].severity, Severity::Medium);
    }

    #[test]
    fn test_content_quality_is_always_medium() {
        let builder = FeedbackBuilder::new();
        let recommendations = builder.recommendations(&scores(100, 100, 10, 100));
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].severity, Severity::Medium);
    }

    #[test]
    fn test_recommendations_follow_category_order() {
        let builder = FeedbackBuilder::new();
        let recommendations = builder.recommendations(&scores(10, 10, 10, 10));
        let categories: Vec<Category> = recommendations.iter().map(|r| r.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_strengths_for_high_scores_and_content() {
        let builder = FeedbackBuilder::new();
        let text = "Cut costs by 30%. Reach me at jane@example.com or (555) 123-4567.";
        let strengths = builder.strengths(text, &scores(80, 79, 85, 10));
        assert_eq!(strengths.len(), 4);
        assert!(strengths[0].contains("keyword optimization"));
        assert!(strengths.iter().any(|s| s.contains("percentages")));
        assert!(strengths.iter().any(|s| s.contains("contact information")));
    }

    #[test]
    fn test_tips_baseline_plus_conditional() {
        let builder = FeedbackBuilder::new();
        assert_eq!(builder.optimization_tips(&scores(80, 80, 80, 80)).len(), 5);
        assert_eq!(builder.optimization_tips(&scores(79, 80, 79, 80)).len(), 7);
    }
}
