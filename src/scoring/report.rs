//! Deterministic score report structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four scoring categories, in their fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    KeywordsSkills,
    Formatting,
    ContentQuality,
    StructureOrganization,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::KeywordsSkills,
        Category::Formatting,
        Category::ContentQuality,
        Category::StructureOrganization,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::KeywordsSkills => "keywords_skills",
            Category::Formatting => "formatting",
            Category::ContentQuality => "content_quality",
            Category::StructureOrganization => "structure_organization",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::KeywordsSkills => "Keywords & Skills",
            Category::Formatting => "Formatting",
            Category::ContentQuality => "Content Quality",
            Category::StructureOrganization => "Structure & Organization",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Urgency of a recommendation, derived from score thresholds.
///
/// Deliberately a closed two-variant enum: `critical_issues` counts `High`
/// only, so introducing a third severity forces every match to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    pub severity: Severity,
    pub issue: String,
    pub impact: String,
    pub recommendation: String,
}

/// One 0-100 score per category. Independently computed; no category
/// depends on another's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub keywords_skills: u8,
    pub formatting: u8,
    pub content_quality: u8,
    pub structure_organization: u8,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::KeywordsSkills => self.keywords_skills,
            Category::Formatting => self.formatting,
            Category::ContentQuality => self.content_quality,
            Category::StructureOrganization => self.structure_organization,
        }
    }

    /// Category/score pairs in the fixed evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Truncating integer mean over exactly four categories.
    pub fn overall(&self) -> u8 {
        let sum = self.keywords_skills as u32
            + self.formatting as u32
            + self.content_quality as u32
            + self.structure_organization as u32;
        (sum / 4) as u8
    }
}

/// Complete output of one analysis call. Constructed atomically and never
/// mutated afterwards; a new analysis produces a new report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u8,
    pub category_scores: CategoryScores,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub recommendations: Vec<Recommendation>,
    pub strengths: Vec<String>,
    pub optimization_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_score_truncates() {
        let scores = CategoryScores {
            keywords_skills: 70,
            formatting: 71,
            content_quality: 71,
            structure_organization: 71,
        };
        // 283 / 4 = 70.75 truncates to 70
        assert_eq!(scores.overall(), 70);
    }

    #[test]
    fn test_iter_preserves_category_order() {
        let scores = CategoryScores {
            keywords_skills: 1,
            formatting: 2,
            content_quality: 3,
            structure_organization: 4,
        };
        let values: Vec<u8> = scores.iter().map(|(_, s)| s).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_scores_serialize_with_fixed_keys() {
        let scores = CategoryScores {
            keywords_skills: 10,
            formatting: 20,
            content_quality: 30,
            structure_organization: 40,
        };
        let json = serde_json::to_value(scores).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for category in Category::ALL {
            assert!(object.contains_key(category.key()));
        }
    }
}
