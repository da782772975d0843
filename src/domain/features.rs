//! Feature extraction. Pure functions over a joined snapshot.
//!
//! Produces the summaries, the inferred skill set and the profile-completion score
//! that the advice endpoints and the fallback generators consume.

use crate::domain::entities::{FeatureSet, JoinedSnapshot, Record, fields};
use std::collections::BTreeSet;

/// Recognized technology terms, scanned case-insensitively against internship descriptions.
/// Matches are recorded with the spelling used here, not the one found in the text.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Java",
    "Kotlin",
    "Android",
    "iOS",
    "Swift",
    "Python",
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "AWS",
    "Azure",
    "GCP",
    "Cloud",
    "DevOps",
    "CI/CD",
    "Git",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "AI",
    "Deep Learning",
    "SQL",
    "NoSQL",
    "MongoDB",
    "Firebase",
    "REST API",
    "GraphQL",
    "Agile",
    "Scrum",
];

/// Substituted when no vocabulary term is found in any description.
pub const DEFAULT_SKILLS: &[&str] = &["Android", "Kotlin", "Mobile Development", "UI/UX"];

/// Weight earned when the user has at least one internship.
pub const INTERNSHIPS_WEIGHT: u32 = 30;
/// Weight earned when the user has at least one milestone.
pub const MILESTONES_WEIGHT: u32 = 30;
/// Weight every account earns.
pub const BASELINE_WEIGHT: u32 = 40;

const SUMMARY_SEPARATOR: &str = ", ";

/// Scoring policy for `completion_percent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionWeights {
    pub internships: u32,
    pub milestones: u32,
    pub baseline: u32,
}

impl Default for CompletionWeights {
    fn default() -> Self {
        Self {
            internships: INTERNSHIPS_WEIGHT,
            milestones: MILESTONES_WEIGHT,
            baseline: BASELINE_WEIGHT,
        }
    }
}

impl CompletionWeights {
    fn total(&self) -> u32 {
        self.internships + self.milestones + self.baseline
    }
}

/// Derives a [`FeatureSet`] from a [`JoinedSnapshot`]. Stateless apart from its weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor {
    weights: CompletionWeights,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: CompletionWeights) -> Self {
        Self { weights }
    }

    /// Total over every snapshot, including one where both fetches failed.
    pub fn extract(&self, snapshot: &JoinedSnapshot) -> FeatureSet {
        FeatureSet {
            internship_summary: internship_summary(&snapshot.internships),
            milestone_summary: milestone_summary(&snapshot.milestones),
            skills: extract_skills(&snapshot.internships),
            completion_percent: self.completion_percent(
                !snapshot.internships.is_empty(),
                !snapshot.milestones.is_empty(),
            ),
        }
    }

    fn completion_percent(&self, has_internships: bool, has_milestones: bool) -> u8 {
        let total = self.weights.total();
        if total == 0 {
            return 0;
        }
        let mut earned = self.weights.baseline;
        if has_internships {
            earned += self.weights.internships;
        }
        if has_milestones {
            earned += self.weights.milestones;
        }
        ((earned * 100) / total).min(100) as u8
    }
}

/// "<role> at <company>" for every internship that has both fields.
pub fn internship_summary(internships: &[Record]) -> String {
    internships
        .iter()
        .filter_map(|r| {
            let role = r.get(fields::ROLE)?;
            let company = r.get(fields::COMPANY)?;
            Some(format!("{} at {}", role, company))
        })
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}

pub fn milestone_summary(milestones: &[Record]) -> String {
    milestones
        .iter()
        .filter_map(|r| r.get(fields::TITLE))
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}

/// Vocabulary terms found in internship descriptions; never empty.
pub fn extract_skills(internships: &[Record]) -> BTreeSet<String> {
    let mut skills: BTreeSet<String> = internships
        .iter()
        .filter_map(Record::description)
        .flat_map(|description| {
            let lower = description.to_lowercase();
            SKILL_VOCABULARY
                .iter()
                .filter(move |term| lower.contains(&term.to_lowercase()))
        })
        .map(|term| term.to_string())
        .collect();

    if skills.is_empty() {
        skills.extend(DEFAULT_SKILLS.iter().map(|s| s.to_string()));
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FetchOutcome;
    use chrono::Utc;

    fn snapshot(internships: Vec<Record>, milestones: Vec<Record>) -> JoinedSnapshot {
        JoinedSnapshot {
            generation: 1,
            internships,
            milestones,
            internships_outcome: FetchOutcome::Succeeded,
            milestones_outcome: FetchOutcome::Succeeded,
            joined_at: Utc::now(),
        }
    }

    fn internship(role: &str, company: &str, description: &str) -> Record {
        Record::internship()
            .with(fields::ROLE, role)
            .with(fields::COMPANY, company)
            .with(fields::DESCRIPTION, description)
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_skills_without_internships() {
        let features = FeatureExtractor::new().extract(&snapshot(vec![], vec![]));
        assert_eq!(
            features.skills,
            set(&["Android", "Kotlin", "Mobile Development", "UI/UX"])
        );
        assert_eq!(features.internship_summary, "");
        assert_eq!(features.milestone_summary, "");
    }

    #[test]
    fn test_keyword_matching_uses_vocabulary_spelling() {
        let snap = snapshot(
            vec![internship(
                "Intern",
                "Contoso",
                "Worked on Azure cloud infrastructure and Kubernetes deployment",
            )],
            vec![],
        );
        let features = FeatureExtractor::new().extract(&snap);
        assert_eq!(features.skills, set(&["Azure", "Cloud", "Kubernetes"]));
        assert!(!features.skills.contains("infrastructure"));
        assert!(!features.skills.contains("cloud"));
    }

    #[test]
    fn test_skills_are_deduplicated_across_internships() {
        let snap = snapshot(
            vec![
                internship("A", "X", "python scripts"),
                internship("B", "Y", "More PYTHON and docker"),
            ],
            vec![],
        );
        let features = FeatureExtractor::new().extract(&snap);
        assert_eq!(features.skills, set(&["Docker", "Python"]));
        assert_eq!(features.skills_text(), "Docker, Python");
    }

    #[test]
    fn test_unmatched_descriptions_fall_back_to_defaults() {
        let snap = snapshot(vec![internship("A", "X", "Made coffee")], vec![]);
        let features = FeatureExtractor::new().extract(&snap);
        assert_eq!(features.skills.len(), DEFAULT_SKILLS.len());
        assert!(features.skills.contains("Mobile Development"));
    }

    #[test]
    fn test_internship_summary_skips_incomplete_records() {
        let records = vec![
            internship("Android Intern", "Acme", ""),
            Record::internship().with(fields::ROLE, "No Company"),
            Record::internship().with(fields::COMPANY, "No Role"),
            Record::internship()
                .with(fields::ROLE, "  ")
                .with(fields::COMPANY, "Blank Role"),
            internship("Data Intern", "Globex", ""),
        ];
        assert_eq!(
            internship_summary(&records),
            "Android Intern at Acme, Data Intern at Globex"
        );
    }

    #[test]
    fn test_milestone_summary_joins_titles() {
        let records = vec![
            Record::milestone().with(fields::TITLE, "Hackathon win"),
            Record::milestone().with(fields::DATE, "2024-05-01"),
            Record::milestone().with(fields::TITLE, "Published app"),
        ];
        assert_eq!(milestone_summary(&records), "Hackathon win, Published app");
    }

    #[test]
    fn test_completion_percent() {
        let extractor = FeatureExtractor::new();
        let i = || vec![internship("A", "X", "")];
        let m = || vec![Record::milestone().with(fields::TITLE, "T")];

        assert_eq!(extractor.extract(&snapshot(vec![], vec![])).completion_percent, 40);
        assert_eq!(extractor.extract(&snapshot(i(), vec![])).completion_percent, 70);
        assert_eq!(extractor.extract(&snapshot(vec![], m())).completion_percent, 70);
        assert_eq!(extractor.extract(&snapshot(i(), m())).completion_percent, 100);
    }

    #[test]
    fn test_custom_weights() {
        let extractor = FeatureExtractor::with_weights(CompletionWeights {
            internships: 50,
            milestones: 25,
            baseline: 25,
        });
        let snap = snapshot(vec![internship("A", "X", "")], vec![]);
        assert_eq!(extractor.extract(&snap).completion_percent, 75);

        let zero = FeatureExtractor::with_weights(CompletionWeights {
            internships: 0,
            milestones: 0,
            baseline: 0,
        });
        assert_eq!(zero.extract(&snap).completion_percent, 0);
    }
}
