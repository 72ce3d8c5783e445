use crate::{Notifier, NotifyError, NotifyResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Sends messages to a single chat through the Telegram Bot API.
pub struct TelegramBot {
    api_url: String,
    token: String,
    chat_id: String,
    client: Client,
    timeout: Option<Duration>,
}

#[derive(Clone, Default)]
pub struct TelegramBotOptions {
    pub token: String,
    pub chat_id: String,
    pub api_url: Option<String>,
    /// Upper bound for each request, applied on top of `client`. No timeout
    /// when `None`.
    pub timeout: Option<Duration>,
    pub client: Option<Client>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramBot {
    /// # Errors
    ///
    /// [`NotifyError::InvalidInput`] for an empty `chat_id`,
    /// [`NotifyError::Transport`] when the default HTTP client cannot be
    /// built.
    pub fn new(options: TelegramBotOptions) -> NotifyResult<Self> {
        let TelegramBotOptions {
            token,
            chat_id,
            api_url,
            timeout,
            client,
        } = options;

        if chat_id.trim().is_empty() {
            return Err(NotifyError::InvalidInput("chat_id must not be empty".to_string()));
        }

        let client = match client {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        let api_url = api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_url,
            token,
            chat_id,
            client,
            timeout,
        })
    }

    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramBot {
    fn channel(&self) -> &'static str {
        "telegram"
    }

    async fn notify(&self, text: &str) -> NotifyResult<()> {
        debug!(chat_id = %self.chat_id, "sending telegram message");

        let mut request = self
            .client
            .post(format!("{}/bot{}/sendMessage", self.api_url, self.token))
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            });
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Telegram explains failures in `description`; fall back to the raw body.
            let reason = serde_json::from_str::<ApiResponse>(&body)
                .ok()
                .and_then(|api_response| api_response.description)
                .unwrap_or(body);
            return Err(NotifyError::StatusCode(status, reason));
        }

        let api_response: ApiResponse = serde_json::from_str(&body).map_err(|error| {
            NotifyError::Rejected(format!("unexpected sendMessage response: {error}"))
        })?;

        if !api_response.ok {
            return Err(NotifyError::Rejected(
                api_response
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }
}
