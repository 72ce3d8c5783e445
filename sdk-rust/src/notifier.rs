use crate::NotifyResult;

/// A channel the bot reports to.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    fn channel(&self) -> &'static str;
    /// Deliver one plain-text message.
    ///
    /// # Errors
    ///
    /// Any [`crate::NotifyError`] means the message was not delivered.
    async fn notify(&self, text: &str) -> NotifyResult<()>;
}
