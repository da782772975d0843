//! Advice service. Synthesizes career advice, resume feedback and roadmaps.
//!
//! Each request makes one remote call. Sections the remote leaves out (or an unreachable
//! remote) are filled from the deterministic fallback trees in `domain::fallback`.
//! `synthesize` never fails; degradation is reported through the result.

use crate::domain::entities::sections;
use crate::domain::fallback;
use crate::domain::{
    AdviceContent, AdviceKind, AdviceOrigin, AdvicePayload, AdviceResult, FeatureSet, RoadmapStage,
    UserId,
};
use crate::ports::{InsightsListener, RemoteDataSource};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Service for advice synthesis with local fallback.
pub struct AdviceService {
    source: Arc<dyn RemoteDataSource>,
    listener: Arc<dyn InsightsListener>,
}

/// Collects sections, remembering which ones came from the fallback generator.
#[derive(Default)]
struct SectionFill {
    fallback: Vec<&'static str>,
}

impl SectionFill {
    /// Remote value when present and non-blank, else the fallback.
    fn take(
        &mut self,
        remote: &HashMap<String, String>,
        name: &'static str,
        fallback: impl FnOnce() -> String,
    ) -> String {
        match remote.get(name).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.clone(),
            None => {
                debug!(section = name, "section missing from remote response");
                self.fallback.push(name);
                fallback()
            }
        }
    }
}

impl AdviceService {
    pub fn new(source: Arc<dyn RemoteDataSource>, listener: Arc<dyn InsightsListener>) -> Self {
        Self { source, listener }
    }

    /// Produce advice of `kind` for `user` from `features`.
    ///
    /// Fires `on_advice_ready` exactly once before returning.
    pub async fn synthesize(
        &self,
        kind: AdviceKind,
        user: &UserId,
        features: &FeatureSet,
    ) -> AdviceResult {
        let payload = Self::payload(kind, user, features);
        info!(user = %user, kind = %kind, "requesting advice");

        let result = match kind {
            AdviceKind::CareerAdvice | AdviceKind::ResumeFeedback => {
                match self.source.request_advice(kind, &payload).await {
                    Ok(remote) => Self::from_sections(kind, features, &remote),
                    Err(e) => {
                        warn!(
                            kind = %kind,
                            error = %e,
                            "advice request failed; using local advice"
                        );
                        Self::offline(kind, features)
                    }
                }
            }
            AdviceKind::Roadmap => match self.source.request_roadmap(&payload).await {
                Ok(stages) => Self::from_stages(features, stages),
                Err(e) => {
                    warn!(kind = %kind, error = %e, "roadmap request failed; using local roadmap");
                    Self::offline(kind, features)
                }
            },
        };

        info!(
            kind = %kind,
            origin = ?result.origin,
            fallback_sections = ?result.fallback_sections,
            "advice ready"
        );
        self.listener
            .on_advice_ready(kind, &result.content, result.degraded);
        result
    }

    /// All three kinds, requested concurrently. Results are in [`AdviceKind::ALL`] order.
    pub async fn synthesize_all(&self, user: &UserId, features: &FeatureSet) -> Vec<AdviceResult> {
        let (career, resume, roadmap) = tokio::join!(
            self.synthesize(AdviceKind::CareerAdvice, user, features),
            self.synthesize(AdviceKind::ResumeFeedback, user, features),
            self.synthesize(AdviceKind::Roadmap, user, features),
        );
        vec![career, resume, roadmap]
    }

    /// Request body for `kind`, using the field names the backend reads.
    pub fn payload(kind: AdviceKind, user: &UserId, features: &FeatureSet) -> AdvicePayload {
        let skills = features.skills_text();
        let mut payload = AdvicePayload::new();
        payload.insert("email".to_string(), user.as_str().to_string());
        payload.insert("skills".to_string(), skills.clone());
        match kind {
            AdviceKind::CareerAdvice => {
                payload.insert("internships".to_string(), features.internship_summary.clone());
                payload.insert("goals".to_string(), features.milestone_summary.clone());
            }
            AdviceKind::ResumeFeedback => {
                payload.insert("internships".to_string(), features.internship_summary.clone());
                payload.insert("milestones".to_string(), features.milestone_summary.clone());
            }
            AdviceKind::Roadmap => {
                let goal = fallback::infer_goal(&features.internship_summary, &skills);
                payload.insert("goals".to_string(), goal.to_string());
            }
        }
        payload
    }

    /// Everything local; used when the remote call failed.
    fn offline(kind: AdviceKind, features: &FeatureSet) -> AdviceResult {
        let mut result = match kind {
            AdviceKind::Roadmap => Self::from_stages(features, Vec::new()),
            _ => Self::from_sections(kind, features, &HashMap::new()),
        };
        result.origin = AdviceOrigin::Offline;
        result
    }

    fn from_sections(
        kind: AdviceKind,
        features: &FeatureSet,
        remote: &HashMap<String, String>,
    ) -> AdviceResult {
        let skills = features.skills_text();
        let mut fill = SectionFill::default();

        let content = match kind {
            AdviceKind::CareerAdvice => {
                let (category, template) = fallback::career_template(&skills);
                debug!(category = %category, "career advice fallback category");
                AdviceContent::CareerAdvice {
                    certifications: fill.take(remote, sections::CERTIFICATIONS, || {
                        template.certifications.to_string()
                    }),
                    skills: fill.take(remote, sections::SKILLS, || template.skills.to_string()),
                    tips: fill.take(remote, sections::TIPS, || template.tips.to_string()),
                }
            }
            AdviceKind::ResumeFeedback => {
                let (category, template) = fallback::resume_template(&skills);
                debug!(category = %category, "resume feedback fallback category");
                let render = |text: &str| {
                    fallback::render(text, &skills, &features.internship_summary)
                };
                AdviceContent::ResumeFeedback {
                    general: fill.take(remote, sections::GENERAL, || render(template.general)),
                    strengths: fill.take(remote, sections::STRENGTHS, || {
                        render(template.strengths)
                    }),
                    improvements: fill.take(remote, sections::IMPROVEMENTS, || {
                        render(template.improvements)
                    }),
                }
            }
            AdviceKind::Roadmap => return Self::from_stages(features, Vec::new()),
        };

        Self::finish(kind, content, fill.fallback, AdviceOrigin::Remote)
    }

    /// Remote stages without a title are dropped; if none remain the fallback sequence is used.
    fn from_stages(features: &FeatureSet, stages: Vec<RoadmapStage>) -> AdviceResult {
        let received = stages.len();
        let stages: Vec<RoadmapStage> = stages
            .into_iter()
            .filter(|s| !s.title.trim().is_empty())
            .collect();
        if stages.len() < received {
            debug!(
                dropped = received - stages.len(),
                "discarded roadmap stages without a title"
            );
        }

        if !stages.is_empty() {
            return Self::finish(
                AdviceKind::Roadmap,
                AdviceContent::Roadmap { stages },
                Vec::new(),
                AdviceOrigin::Remote,
            );
        }

        let skills = features.skills_text();
        let goal = fallback::infer_goal(&features.internship_summary, &skills);
        let (category, stages) = fallback::roadmap_stages(goal, &skills);
        debug!(goal, category = %category, "roadmap fallback");
        Self::finish(
            AdviceKind::Roadmap,
            AdviceContent::Roadmap { stages },
            vec![sections::STAGES],
            AdviceOrigin::Remote,
        )
    }

    fn finish(
        kind: AdviceKind,
        content: AdviceContent,
        fallback_sections: Vec<&'static str>,
        origin: AdviceOrigin,
    ) -> AdviceResult {
        let origin = if fallback_sections.is_empty() {
            origin
        } else {
            AdviceOrigin::Partial
        };
        AdviceResult {
            kind,
            content,
            degraded: !fallback_sections.is_empty(),
            fallback_sections,
            origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::remote::MockDataSource;
    use crate::domain::fallback::{CAREER_TREE, ROADMAP_TREE};
    use crate::domain::Category;
    use std::collections::BTreeSet;
    use std::sync::Mutex;

    #[derive(Default)]
    struct AdviceRecorder {
        events: Mutex<Vec<(AdviceKind, bool)>>,
    }

    impl InsightsListener for AdviceRecorder {
        fn on_data_ready(&self, _features: &FeatureSet) {}

        fn on_advice_ready(&self, kind: AdviceKind, _content: &AdviceContent, degraded: bool) {
            self.events.lock().unwrap().push((kind, degraded));
        }
    }

    fn features(skills: &[&str], internships: &str) -> FeatureSet {
        FeatureSet {
            internship_summary: internships.to_string(),
            milestone_summary: "Hackathon win".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            completion_percent: 100,
        }
    }

    fn service(source: MockDataSource) -> (AdviceService, Arc<AdviceRecorder>) {
        let recorder = Arc::new(AdviceRecorder::default());
        (
            AdviceService::new(Arc::new(source), recorder.clone()),
            recorder,
        )
    }

    fn user() -> UserId {
        UserId::new("student@example.com")
    }

    fn expected_stages(category: Category) -> Vec<RoadmapStage> {
        let branch = ROADMAP_TREE
            .branches
            .iter()
            .find(|b| b.category == category)
            .unwrap();
        branch
            .content
            .iter()
            .map(|(t, d)| RoadmapStage::new(*t, *d))
            .collect()
    }

    #[tokio::test]
    async fn test_roadmap_fallback_for_data_profile() {
        let (svc, recorder) = service(MockDataSource::empty());
        let f = features(&["Python", "Machine Learning"], "");

        let result = svc.synthesize(AdviceKind::Roadmap, &user(), &f).await;

        assert!(result.degraded);
        assert_eq!(result.origin, AdviceOrigin::Offline);
        assert_eq!(
            result.content,
            AdviceContent::Roadmap {
                stages: expected_stages(Category::DataMl)
            }
        );
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec![(AdviceKind::Roadmap, true)]
        );
    }

    #[tokio::test]
    async fn test_mobile_wins_over_data() {
        let (svc, _) = service(MockDataSource::empty());
        let f = features(&["Android", "Python"], "");

        let roadmap = svc.synthesize(AdviceKind::Roadmap, &user(), &f).await;
        assert_eq!(
            roadmap.content,
            AdviceContent::Roadmap {
                stages: expected_stages(Category::Mobile)
            }
        );

        let career = svc.synthesize(AdviceKind::CareerAdvice, &user(), &f).await;
        let mobile = &CAREER_TREE.branches[0].content;
        match career.content {
            AdviceContent::CareerAdvice { certifications, .. } => {
                assert_eq!(certifications, mobile.certifications)
            }
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_section_level_fallback_keeps_remote_values() {
        let remote = HashMap::from([(sections::CERTIFICATIONS.to_string(), "X".to_string())]);
        let (svc, recorder) =
            service(MockDataSource::empty().with_advice(AdviceKind::CareerAdvice, remote));
        let f = features(&["Azure", "Cloud", "Kubernetes"], "Intern at Contoso");

        let result = svc.synthesize(AdviceKind::CareerAdvice, &user(), &f).await;

        let (category, template) = fallback::career_template(&f.skills_text());
        assert_eq!(category, Category::Cloud);
        assert_eq!(
            result.content,
            AdviceContent::CareerAdvice {
                certifications: "X".to_string(),
                skills: template.skills.to_string(),
                tips: template.tips.to_string(),
            }
        );
        assert_eq!(result.origin, AdviceOrigin::Partial);
        assert_eq!(
            result.fallback_sections,
            vec![sections::SKILLS, sections::TIPS]
        );
        assert!(result.degraded);
        assert_eq!(recorder.events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_remote_section_counts_as_missing() {
        let remote = HashMap::from([
            (sections::GENERAL.to_string(), "Great start".to_string()),
            (sections::STRENGTHS.to_string(), "   ".to_string()),
            (sections::IMPROVEMENTS.to_string(), "More metrics".to_string()),
        ]);
        let (svc, _) =
            service(MockDataSource::empty().with_advice(AdviceKind::ResumeFeedback, remote));
        let f = features(&["Git"], "Intern at Initech");

        let result = svc.synthesize(AdviceKind::ResumeFeedback, &user(), &f).await;

        assert_eq!(result.fallback_sections, vec![sections::STRENGTHS]);
        match result.content {
            AdviceContent::ResumeFeedback {
                general,
                strengths,
                improvements,
            } => {
                assert_eq!(general, "Great start");
                assert_eq!(improvements, "More metrics");
                assert!(strengths.contains("Your experience with Git"));
                assert!(strengths.contains("Intern at Initech"));
            }
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_remote_response_is_not_degraded() {
        let (svc, recorder) = service(MockDataSource::with_delay(0));
        let f = features(&["Kotlin"], "Android Intern at Acme");

        let result = svc.synthesize(AdviceKind::CareerAdvice, &user(), &f).await;

        assert!(!result.degraded);
        assert_eq!(result.origin, AdviceOrigin::Remote);
        assert!(result.fallback_sections.is_empty());
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec![(AdviceKind::CareerAdvice, false)]
        );
    }

    #[tokio::test]
    async fn test_remote_roadmap_used_verbatim() {
        let stages = vec![
            RoadmapStage::new("Associate", "Learn"),
            RoadmapStage::new("", "no title"),
            RoadmapStage::new("Principal", ""),
        ];
        let (svc, _) = service(MockDataSource::empty().with_roadmap(stages));
        let f = features(&["Python"], "");

        let result = svc.synthesize(AdviceKind::Roadmap, &user(), &f).await;

        assert!(!result.degraded);
        assert_eq!(
            result.content,
            AdviceContent::Roadmap {
                stages: vec![
                    RoadmapStage::new("Associate", "Learn"),
                    RoadmapStage::new("Principal", ""),
                ]
            }
        );
    }

    #[tokio::test]
    async fn test_empty_remote_roadmap_falls_back_as_partial() {
        let (svc, _) = service(MockDataSource::empty().with_roadmap(Vec::new()));
        let f = features(&["React"], "");

        let result = svc.synthesize(AdviceKind::Roadmap, &user(), &f).await;

        assert!(result.degraded);
        assert_eq!(result.origin, AdviceOrigin::Partial);
        assert_eq!(result.fallback_sections, vec![sections::STAGES]);
        assert_eq!(
            result.content,
            AdviceContent::Roadmap {
                stages: expected_stages(Category::Web)
            }
        );
    }

    #[tokio::test]
    async fn test_offline_fills_every_section() {
        let source = MockDataSource::empty();
        let (svc, recorder) = service(source);
        let f = features(&["Docker", "Git"], "");

        let results = svc.synthesize_all(&user(), &f).await;

        assert_eq!(results.len(), 3);
        for (result, kind) in results.iter().zip(AdviceKind::ALL) {
            assert_eq!(result.kind, kind);
            assert_eq!(result.content.kind(), kind);
            assert_eq!(result.origin, AdviceOrigin::Offline);
            assert!(result.degraded);
        }
        assert_eq!(results[0].fallback_sections.len(), 3);
        assert_eq!(results[1].fallback_sections.len(), 3);
        assert_eq!(results[2].fallback_sections, vec![sections::STAGES]);
        assert_eq!(recorder.events.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_one_remote_call_per_synthesize() {
        let source = Arc::new(MockDataSource::empty());
        let svc = AdviceService::new(source.clone(), Arc::new(AdviceRecorder::default()));
        let f = features(&["Git"], "");

        svc.synthesize_all(&user(), &f).await;

        assert_eq!(source.advice_calls(), 3);
    }

    #[test]
    fn test_payload_fields_per_kind() {
        let f = features(&["Python", "Machine Learning"], "ML Intern at Globex");
        let u = user();

        let career = AdviceService::payload(AdviceKind::CareerAdvice, &u, &f);
        assert_eq!(career["email"], "student@example.com");
        assert_eq!(career["skills"], "Machine Learning, Python");
        assert_eq!(career["internships"], "ML Intern at Globex");
        assert_eq!(career["goals"], "Hackathon win");

        let resume = AdviceService::payload(AdviceKind::ResumeFeedback, &u, &f);
        assert_eq!(resume["milestones"], "Hackathon win");
        assert!(!resume.contains_key("goals"));

        let roadmap = AdviceService::payload(AdviceKind::Roadmap, &u, &f);
        assert_eq!(roadmap["goals"], "Data Scientist");
        assert!(!roadmap.contains_key("internships"));
    }
}
