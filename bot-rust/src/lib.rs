mod bot;
pub mod config;
mod errors;
mod params;
mod state;

pub use bot::{CycleOutcome, HomeworkBot};
pub use config::{BotConfig, ConfigError, MessageLocale};
pub use errors::BotError;
pub use params::BotParams;
pub use state::PollState;
