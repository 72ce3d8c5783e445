mod errors;
mod notifier;
mod practicum;
mod response;
mod review_api;
mod status;
mod telegram;

pub use errors::*;
pub use notifier::Notifier;
pub use practicum::{
    PracticumClient, PracticumClientOptions, DEFAULT_ENDPOINT as DEFAULT_PRACTICUM_ENDPOINT,
};
pub use response::{validate, HomeworkStatuses};
pub use reqwest::StatusCode;
pub use review_api::ReviewApi;
pub use status::{HomeworkRecord, HomeworkStatus, StatusMessages};
pub use telegram::{TelegramBot, TelegramBotOptions, DEFAULT_API_URL as DEFAULT_TELEGRAM_API_URL};
