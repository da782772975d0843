//! Implements InputPort. Inquire-based prompts with an indicatif spinner.
//!
//! Asks for the user e-mail (unless configured) and the advice kinds, then drives the
//! aggregator and the advice service. Output is printed by the listener.

use crate::domain::{AdviceKind, DomainError, UserId};
use crate::ports::InputPort;
use crate::usecases::{AdviceService, Aggregator};
use async_trait::async_trait;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use inquire::{MultiSelect, Text};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::warn;

fn spinner(progress: &MultiProgress, message: &str) -> ProgressBar {
    let pb = progress.add(ProgressBar::new_spinner());
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Console adapter. Inquire prompts.
pub struct ConsoleInputPort {
    aggregator: Arc<Aggregator>,
    advice: Arc<AdviceService>,
    user: Option<UserId>,
    interactive: bool,
    progress: MultiProgress,
}

impl ConsoleInputPort {
    /// `user` skips the e-mail prompt. Non-interactive runs require it and request every
    /// advice kind. Spinners are drawn on `progress`, which the listener shares.
    pub fn new(
        aggregator: Arc<Aggregator>,
        advice: Arc<AdviceService>,
        user: Option<UserId>,
        interactive: bool,
        progress: MultiProgress,
    ) -> Self {
        Self {
            aggregator,
            advice,
            user,
            interactive,
            progress,
        }
    }

    fn resolve_user(&self) -> Result<UserId, DomainError> {
        if let Some(user) = &self.user {
            return Ok(user.clone());
        }
        if !self.interactive {
            return Err(DomainError::Config(
                "set CAREER_INSIGHTS_USER_EMAIL for non-interactive runs".to_string(),
            ));
        }
        let email = Text::new("Your account e-mail:")
            .prompt()
            .map_err(|e| DomainError::Ui(e.to_string()))?;
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::Ui(
                "Unable to identify user. Please login again.".to_string(),
            ));
        }
        Ok(UserId::new(email))
    }

    fn select_kinds(&self) -> Result<Vec<AdviceKind>, DomainError> {
        if !self.interactive {
            return Ok(AdviceKind::ALL.to_vec());
        }
        let options: Vec<&str> = AdviceKind::ALL.iter().map(|k| k.label()).collect();
        let selected = MultiSelect::new("Which insights do you want?", options)
            .with_all_selected_by_default()
            .prompt()
            .map_err(|e| DomainError::Ui(e.to_string()))?;
        Ok(AdviceKind::ALL
            .into_iter()
            .filter(|k| selected.contains(&k.label()))
            .collect())
    }
}

#[async_trait]
impl InputPort for ConsoleInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let user = self.resolve_user()?;

        let pb = spinner(&self.progress, "Loading your internships and milestones...");
        let fetched = self.aggregator.fetch_all(&user).await;
        pb.finish_and_clear();
        let features = fetched?;

        let kinds = self.select_kinds()?;
        if kinds.is_empty() {
            return Ok(());
        }

        let pb = spinner(&self.progress, "Preparing your insights...");
        let mut tasks = JoinSet::new();
        for kind in kinds {
            let advice = Arc::clone(&self.advice);
            let user = user.clone();
            let features = features.clone();
            tasks.spawn(async move { advice.synthesize(kind, &user, &features).await });
        }
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "advice task failed");
            }
        }
        pb.finish_and_clear();
        Ok(())
    }
}
