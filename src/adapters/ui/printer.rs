//! Implements InsightsListener. Prints aggregation and advice results to stdout.
//!
//! Output goes through the shared `MultiProgress` so a ticking spinner is hidden while a
//! block is printed.

use crate::domain::{AdviceContent, AdviceKind, FeatureSet};
use crate::ports::InsightsListener;
use indicatif::MultiProgress;

/// Shown when any section of an advice result is local content.
pub fn degraded_notice(kind: AdviceKind) -> &'static str {
    match kind {
        AdviceKind::CareerAdvice => "Couldn't load live advice. Showing sample advice.",
        AdviceKind::ResumeFeedback => "Couldn't load live feedback. Showing sample feedback.",
        AdviceKind::Roadmap => "Couldn't load live roadmap. Showing sample roadmap.",
    }
}

/// Console consumer. Safe to call from any task.
#[derive(Debug, Default, Clone)]
pub struct ConsoleListener {
    progress: MultiProgress,
}

impl ConsoleListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spinners added here are suspended while the listener prints.
    pub fn progress(&self) -> MultiProgress {
        self.progress.clone()
    }
}

impl InsightsListener for ConsoleListener {
    fn on_data_ready(&self, features: &FeatureSet) {
        let block = render_features(features);
        self.progress.suspend(|| println!("{}", block));
    }

    fn on_advice_ready(&self, kind: AdviceKind, content: &AdviceContent, degraded: bool) {
        let block = render_advice(kind, content, degraded);
        self.progress.suspend(|| println!("{}", block));
    }

    fn on_error(&self, message: &str) {
        self.progress
            .suspend(|| eprintln!("Error loading user data: {}", message));
    }
}

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("\n== {} ==\n", title));
}

fn section(out: &mut String, title: &str, body: &str) {
    out.push_str(&format!("\n{}\n{}\n", title, body));
}

fn or_none(text: &str) -> &str {
    if text.is_empty() { "(none)" } else { text }
}

pub fn render_features(features: &FeatureSet) -> String {
    let mut out = String::new();
    heading(&mut out, "Your profile");
    out.push_str(&format!(
        "Internships: {}\nMilestones:  {}\nSkills:      {}\nProfile completion: {}%\n",
        or_none(&features.internship_summary),
        or_none(&features.milestone_summary),
        features.skills_text(),
        features.completion_percent
    ));
    out
}

pub fn render_advice(kind: AdviceKind, content: &AdviceContent, degraded: bool) -> String {
    let mut out = String::new();
    heading(&mut out, kind.label());
    if degraded {
        out.push_str(&format!("({})\n", degraded_notice(kind)));
    }
    match content {
        AdviceContent::CareerAdvice {
            certifications,
            skills,
            tips,
        } => {
            section(&mut out, "Recommended certifications", certifications);
            section(&mut out, "Skills to develop", skills);
            section(&mut out, "Job search tips", tips);
        }
        AdviceContent::ResumeFeedback {
            general,
            strengths,
            improvements,
        } => {
            section(&mut out, "General feedback", general);
            section(&mut out, "Strengths", strengths);
            section(&mut out, "Improvements", improvements);
        }
        AdviceContent::Roadmap { stages } => {
            for (i, stage) in stages.iter().enumerate() {
                section(
                    &mut out,
                    &format!("{}. {}", i + 1, stage.title),
                    &stage.description,
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoadmapStage;
    use indicatif::{ProgressBar, ProgressDrawTarget};
    use std::time::Duration;

    #[test]
    fn test_render_features() {
        let features = FeatureSet {
            internship_summary: String::new(),
            milestone_summary: "Talk".to_string(),
            skills: ["Git".to_string(), "SQL".to_string()].into_iter().collect(),
            completion_percent: 60,
        };
        let out = render_features(&features);
        assert!(out.contains("Internships: (none)"));
        assert!(out.contains("Skills:      Git, SQL"));
        assert!(out.contains("Profile completion: 60%"));
    }

    #[test]
    fn test_degraded_notice_only_when_degraded() {
        let content = AdviceContent::Roadmap {
            stages: vec![RoadmapStage::new("Junior", "Learn")],
        };
        let degraded = render_advice(AdviceKind::Roadmap, &content, true);
        let live = render_advice(AdviceKind::Roadmap, &content, false);
        assert!(degraded.contains("Couldn't load live roadmap. Showing sample roadmap."));
        assert!(!live.contains("Showing sample"));
        assert!(live.contains("1. Junior\nLearn"));
    }

    #[test]
    fn test_degraded_notice_names_the_advice_kind() {
        let content = AdviceContent::ResumeFeedback {
            general: "g".to_string(),
            strengths: "s".to_string(),
            improvements: "i".to_string(),
        };
        let out = render_advice(AdviceKind::ResumeFeedback, &content, true);
        assert!(out.contains("(Couldn't load live feedback. Showing sample feedback.)"));
        assert_eq!(
            degraded_notice(AdviceKind::CareerAdvice),
            "Couldn't load live advice. Showing sample advice."
        );
    }

    #[test]
    fn test_printing_suspends_shared_spinner() {
        let listener = ConsoleListener::new();
        let progress = listener.progress();
        progress.set_draw_target(ProgressDrawTarget::hidden());
        let pb = progress.add(ProgressBar::new_spinner());
        pb.enable_steady_tick(Duration::from_millis(5));

        listener.on_data_ready(&FeatureSet {
            internship_summary: "Intern at Acme".to_string(),
            milestone_summary: String::new(),
            skills: ["Git".to_string()].into_iter().collect(),
            completion_percent: 70,
        });
        listener.on_advice_ready(
            AdviceKind::Roadmap,
            &AdviceContent::Roadmap { stages: Vec::new() },
            true,
        );

        assert!(!pb.is_finished());
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }
}
