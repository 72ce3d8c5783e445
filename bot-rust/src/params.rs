use crate::{config::BotConfig, BotError, HomeworkBot};
use practicum_sdk::{
    Notifier, PracticumClient, PracticumClientOptions, ReviewApi, StatusMessages, TelegramBot,
    TelegramBotOptions,
};
use std::{sync::Arc, time::Duration};

/// Parameters required to create a new bot.
/// # Default Values
/// - `messages`: `StatusMessages::english()`
/// - `retry_period`: 600 seconds
/// - `watermark`: `None` (the current time when the bot is built)
/// - `notify_unchanged`: `true`
pub struct BotParams {
    /// Where homework statuses are fetched from.
    pub review_api: Arc<dyn ReviewApi>,
    /// Where status messages are sent.
    pub notifier: Arc<dyn Notifier>,
    /// Texts used for every message the bot sends.
    pub messages: StatusMessages,
    /// Pause between two cycles, whether the cycle succeeded or not.
    pub retry_period: Duration,
    /// Initial `from_date` for the first request, in Unix seconds.
    pub watermark: Option<i64>,
    /// Send the "unchanged" message when the latest status equals the last
    /// reported one. When disabled nothing is sent in that case.
    pub notify_unchanged: bool,
}

impl BotParams {
    pub fn new(review_api: Arc<dyn ReviewApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            review_api,
            notifier,
            messages: StatusMessages::english(),
            retry_period: crate::config::DEFAULT_RETRY_PERIOD,
            watermark: None,
            notify_unchanged: true,
        }
    }

    /// Build the Practicum and Telegram clients described by `config`.
    pub fn from_config(config: &BotConfig) -> Result<Self, BotError> {
        let review_api = PracticumClient::new(PracticumClientOptions {
            token: config.practicum_token.clone(),
            endpoint: config.practicum_endpoint.clone(),
            timeout: Some(config.request_timeout),
            ..Default::default()
        })?;

        let notifier = TelegramBot::new(TelegramBotOptions {
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
            api_url: config.telegram_api_url.clone(),
            timeout: Some(config.request_timeout),
            ..Default::default()
        })?;

        Ok(Self::new(Arc::new(review_api), Arc::new(notifier))
            .messages(config.messages())
            .retry_period(config.retry_period)
            .notify_unchanged(config.notify_unchanged))
    }

    /// Set the message table
    #[must_use]
    pub fn messages(mut self, messages: StatusMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Set the pause between cycles
    #[must_use]
    pub fn retry_period(mut self, retry_period: Duration) -> Self {
        self.retry_period = retry_period;
        self
    }

    /// Set the initial watermark
    #[must_use]
    pub fn watermark(mut self, watermark: i64) -> Self {
        self.watermark = Some(watermark);
        self
    }

    /// Choose whether unchanged statuses are reported
    #[must_use]
    pub fn notify_unchanged(mut self, notify_unchanged: bool) -> Self {
        self.notify_unchanged = notify_unchanged;
        self
    }

    #[must_use]
    pub fn build(self) -> HomeworkBot {
        HomeworkBot::new(self)
    }
}
