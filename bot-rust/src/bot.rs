use crate::{state::PollState, BotError, BotParams};
use practicum_sdk::{validate, Notifier, ReviewApi, StatusMessages};
use std::{sync::Arc, time::Duration};
use tracing::{debug, error, info, warn};

/// What a successful cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The review API reported no homework updates.
    NoHomeworks,
    /// The latest status differs from the last reported one and was sent.
    StatusChanged(String),
    /// The latest status equals the last reported one.
    Unchanged,
}

/// Polls the review API and reports status changes, one cycle at a time.
pub struct HomeworkBot {
    review_api: Arc<dyn ReviewApi>,
    notifier: Arc<dyn Notifier>,
    messages: StatusMessages,
    retry_period: Duration,
    notify_unchanged: bool,
    state: PollState,
}

impl HomeworkBot {
    #[must_use]
    pub fn new(params: BotParams) -> Self {
        let watermark = params
            .watermark
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        Self {
            review_api: params.review_api,
            notifier: params.notifier,
            messages: params.messages,
            retry_period: params.retry_period,
            notify_unchanged: params.notify_unchanged,
            state: PollState::new(watermark),
        }
    }

    pub fn builder(review_api: Arc<dyn ReviewApi>, notifier: Arc<dyn Notifier>) -> BotParams {
        BotParams::new(review_api, notifier)
    }

    #[must_use]
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Poll forever. Every cycle is followed by a pause of `retry_period`,
    /// whatever its result.
    pub async fn run(&mut self) {
        info!(
            endpoint = self.review_api.endpoint(),
            channel = self.notifier.channel(),
            retry_period_secs = self.retry_period.as_secs(),
            "homework bot started"
        );

        loop {
            self.tick().await;
        }
    }

    /// One cycle followed by the pause.
    pub async fn tick(&mut self) {
        match self.run_cycle().await {
            Ok(outcome) => debug!(?outcome, "cycle finished"),
            Err(error) if error.is_upstream_drift() => {
                warn!(%error, "review API response no longer matches the expected format");
            }
            Err(error) => error!(%error, "cycle failed"),
        }

        tokio::time::sleep(self.retry_period).await;
    }

    /// Fetch, validate, extract and notify once.
    ///
    /// The watermark advances as soon as a response passes validation. The
    /// last reported status only changes once its message was delivered.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, BotError> {
        let from_date = self.state.watermark();
        info!(from_date, "requesting homework statuses");

        let response = self.review_api.homework_statuses(from_date).await?;
        let statuses = validate(&response)?;
        info!(
            homeworks = statuses.homeworks.len(),
            current_date = ?statuses.current_date,
            "response validated"
        );

        if let Some(current_date) = statuses.current_date {
            self.state.advance(current_date);
        }

        let Some(latest) = statuses.latest() else {
            self.send(&self.messages.no_homeworks).await?;
            return Ok(CycleOutcome::NoHomeworks);
        };

        let status = self.messages.parse_status(latest)?;
        info!(%status, "status computed");

        if self.state.is_unchanged(&status) {
            if self.notify_unchanged {
                self.send(&self.messages.unchanged).await?;
            } else {
                debug!("status unchanged, nothing sent");
            }
            return Ok(CycleOutcome::Unchanged);
        }

        self.send(&status).await?;
        self.state.record(status.clone());

        Ok(CycleOutcome::StatusChanged(status))
    }

    async fn send(&self, text: &str) -> Result<(), BotError> {
        self.notifier.notify(text).await?;
        info!(channel = self.notifier.channel(), text, "message sent");
        Ok(())
    }
}
