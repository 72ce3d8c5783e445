use practicum_sdk::StatusMessages;
use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;

pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Language of the messages sent to the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageLocale {
    #[default]
    English,
    Russian,
}

impl FromStr for MessageLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            other => Err(format!("unsupported locale '{other}', expected 'en' or 'ru'")),
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct BotConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    /// Overrides the review API endpoint.
    pub practicum_endpoint: Option<String>,
    /// Overrides the Telegram Bot API base URL.
    pub telegram_api_url: Option<String>,
    /// Pause between two polling cycles.
    pub retry_period: Duration,
    /// Applied to every outbound HTTP request.
    pub request_timeout: Duration,
    /// Send a message even when the status did not change.
    pub notify_unchanged: bool,
    pub locale: MessageLocale,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .field("notify_unchanged", &self.notify_unchanged)
            .field("locale", &self.locale)
            .finish()
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |key: &'static str| get(key).ok_or_else(|| ConfigError::Missing(vec![key]));

        let retry_period = get("RETRY_PERIOD")
            .map(|value| parse_seconds("RETRY_PERIOD", &value))
            .transpose()?
            .unwrap_or(DEFAULT_RETRY_PERIOD);

        let request_timeout = get("REQUEST_TIMEOUT")
            .map(|value| parse_seconds("REQUEST_TIMEOUT", &value))
            .transpose()?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let notify_unchanged = get("NOTIFY_UNCHANGED")
            .map(|value| parse_bool("NOTIFY_UNCHANGED", &value))
            .transpose()?
            .unwrap_or(true);

        let locale = get("MESSAGE_LOCALE")
            .map(|value| {
                value
                    .parse::<MessageLocale>()
                    .map_err(|reason| ConfigError::Invalid("MESSAGE_LOCALE", reason))
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            practicum_endpoint: get("PRACTICUM_ENDPOINT"),
            telegram_api_url: get("TELEGRAM_API_URL"),
            retry_period,
            request_timeout,
            notify_unchanged,
            locale,
        })
    }

    #[must_use]
    pub fn messages(&self) -> StatusMessages {
        match self.locale {
            MessageLocale::English => StatusMessages::english(),
            MessageLocale::Russian => StatusMessages::russian(),
        }
    }
}

fn parse_seconds(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid(key, "must be greater than zero".to_string())),
        Ok(seconds) => Ok(Duration::from_secs(seconds)),
        Err(error) => Err(ConfigError::Invalid(key, error.to_string())),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(key, format!("'{other}' is not a boolean"))),
    }
}
