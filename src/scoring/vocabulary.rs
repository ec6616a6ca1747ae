//! Reference vocabularies for the scoring heuristics
//!
//! Immutable configuration data injected into the engine at construction.
//! Alternate vocabularies can be substituted for testing without touching
//! analyzer logic.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringVocabulary {
    /// Technical/domain skill terms grouped by discipline.
    pub skill_groups: Vec<SkillGroup>,
    /// Achievement verbs that strengthen resumes.
    pub action_verbs: Vec<String>,
    /// Section headers an ATS expects to find.
    pub expected_sections: Vec<String>,
    /// Verbs signalling professional language in descriptions.
    pub professional_verbs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: String,
    pub terms: Vec<String>,
}

impl ScoringVocabulary {
    /// All skill terms across every group, in group order.
    pub fn skill_terms(&self) -> impl Iterator<Item = &str> {
        self.skill_groups
            .iter()
            .flat_map(|group| group.terms.iter().map(String::as_str))
    }

    pub fn total_skill_terms(&self) -> usize {
        self.skill_groups.iter().map(|group| group.terms.len()).sum()
    }
}

impl Default for ScoringVocabulary {
    fn default() -> Self {
        Self {
            skill_groups: vec![
                skill_group(
                    "programming",
                    &[
                        "python", "java", "javascript", "c++", "sql", "html", "css", "react",
                        "angular", "node.js",
                    ],
                ),
                skill_group(
                    "data_science",
                    &[
                        "machine learning", "data analysis", "pandas", "numpy", "tensorflow",
                        "pytorch", "scikit-learn",
                    ],
                ),
                skill_group(
                    "business",
                    &[
                        "project management", "agile", "scrum", "leadership",
                        "strategic planning", "business analysis",
                    ],
                ),
                skill_group(
                    "design",
                    &[
                        "photoshop", "illustrator", "figma", "sketch", "ui/ux",
                        "graphic design", "web design",
                    ],
                ),
                skill_group(
                    "marketing",
                    &[
                        "seo", "sem", "google analytics", "social media", "content marketing",
                        "email marketing",
                    ],
                ),
            ],
            action_verbs: to_strings(&[
                "achieved", "managed", "led", "developed", "implemented", "improved",
                "increased", "decreased", "created", "designed", "analyzed", "coordinated",
            ]),
            expected_sections: to_strings(&[
                "experience", "education", "skills", "summary", "objective", "projects",
                "certifications", "achievements", "awards",
            ]),
            professional_verbs: to_strings(&[
                "responsible", "manage", "develop", "analyze", "coordinate", "implement",
            ]),
        }
    }
}

fn skill_group(name: &str, terms: &[&str]) -> SkillGroup {
    SkillGroup {
        name: name.to_string(),
        terms: to_strings(terms),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
