//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/JSON transport types here — these are mapped from adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Identifies the user whose data is aggregated. The backend keys every read by e-mail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Internship,
    Milestone,
}

/// Field names shared by both record kinds.
pub mod fields {
    pub const ID: &str = "id";
    pub const FILENAME: &str = "filename";
    pub const DESCRIPTION: &str = "description";
    pub const COMPANY: &str = "company";
    pub const ROLE: &str = "role";
    pub const DATES: &str = "dates";
    pub const TITLE: &str = "title";
    pub const DATE: &str = "date";
}

/// One internship or milestone entry: a flat string-keyed field mapping.
///
/// Blank values are treated as absent by [`Record::get`], so callers never have to
/// distinguish a missing key from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub kind: RecordKind,
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
        }
    }

    pub fn internship() -> Self {
        Self::new(RecordKind::Internship)
    }

    pub fn milestone() -> Self {
        Self::new(RecordKind::Milestone)
    }

    /// Builder-style setter, mostly used by the mock source and tests.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Field value, `None` when missing or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn id(&self) -> Option<&str> {
        self.get(fields::ID)
    }

    pub fn attachment(&self) -> Option<&str> {
        self.get(fields::FILENAME)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(fields::DESCRIPTION)
    }
}

/// Whether a single fetch finished with data or was recovered as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchOutcome {
    Succeeded,
    Failed,
}

/// Both collections after the join. Only built once both fetches have reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedSnapshot {
    /// Monotonic per `fetch_all` invocation on one aggregator.
    pub generation: u64,
    pub internships: Vec<Record>,
    pub milestones: Vec<Record>,
    pub internships_outcome: FetchOutcome,
    pub milestones_outcome: FetchOutcome,
    pub joined_at: DateTime<Utc>,
}

impl JoinedSnapshot {
    /// True when at least one side was recovered from a failed fetch.
    pub fn is_partial(&self) -> bool {
        self.internships_outcome == FetchOutcome::Failed
            || self.milestones_outcome == FetchOutcome::Failed
    }
}

/// Signals derived from one snapshot. Recomputed for every join, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub internship_summary: String,
    pub milestone_summary: String,
    pub skills: BTreeSet<String>,
    pub completion_percent: u8,
}

impl FeatureSet {
    /// Skills joined with ", " in deterministic order.
    pub fn skills_text(&self) -> String {
        self.skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdviceKind {
    CareerAdvice,
    ResumeFeedback,
    Roadmap,
}

impl AdviceKind {
    pub const ALL: [AdviceKind; 3] = [
        AdviceKind::CareerAdvice,
        AdviceKind::ResumeFeedback,
        AdviceKind::Roadmap,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            AdviceKind::CareerAdvice => "career-advice",
            AdviceKind::ResumeFeedback => "resume-feedback",
            AdviceKind::Roadmap => "roadmap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdviceKind::CareerAdvice => "Career advice",
            AdviceKind::ResumeFeedback => "Resume feedback",
            AdviceKind::Roadmap => "Career roadmap",
        }
    }
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Section names expected in remote advice maps.
pub mod sections {
    pub const CERTIFICATIONS: &str = "certifications";
    pub const SKILLS: &str = "skills";
    pub const TIPS: &str = "tips";
    pub const GENERAL: &str = "general";
    pub const STRENGTHS: &str = "strengths";
    pub const IMPROVEMENTS: &str = "improvements";
    pub const STAGES: &str = "stages";
}

/// One step of a career roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStage {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl RoadmapStage {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AdviceContent {
    CareerAdvice {
        certifications: String,
        skills: String,
        tips: String,
    },
    ResumeFeedback {
        general: String,
        strengths: String,
        improvements: String,
    },
    Roadmap { stages: Vec<RoadmapStage> },
}

impl AdviceContent {
    pub fn kind(&self) -> AdviceKind {
        match self {
            AdviceContent::CareerAdvice { .. } => AdviceKind::CareerAdvice,
            AdviceContent::ResumeFeedback { .. } => AdviceKind::ResumeFeedback,
            AdviceContent::Roadmap { .. } => AdviceKind::Roadmap,
        }
    }
}

/// Where the sections of an advice result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceOrigin {
    /// Every section from the remote service.
    Remote,
    /// Remote answered but some sections were filled locally.
    Partial,
    /// Remote call failed; everything is local.
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceResult {
    pub kind: AdviceKind,
    pub content: AdviceContent,
    pub origin: AdviceOrigin,
    /// Names of the sections that came from the fallback generator.
    pub fallback_sections: Vec<&'static str>,
    /// At least one section is local content.
    pub degraded: bool,
}

/// Request body sent to the advice endpoints.
pub type AdvicePayload = BTreeMap<String, String>;
