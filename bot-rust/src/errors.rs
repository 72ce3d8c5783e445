use practicum_sdk::{NotifyError, PracticumError};
use thiserror::Error;

/// A failure that aborts one polling cycle.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Review API error: {0}")]
    Api(#[from] PracticumError),
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

impl BotError {
    /// Whether the failure comes from the review API changing its response
    /// format. Retrying will keep failing until the bot is updated, unlike
    /// network or delivery failures which usually clear up by the next cycle.
    #[must_use]
    pub fn is_upstream_drift(&self) -> bool {
        matches!(
            self,
            Self::Api(PracticumError::Schema(_) | PracticumError::InvalidRecord(_))
        )
    }
}
