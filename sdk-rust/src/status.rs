use crate::{PracticumError, PracticumResult};
use serde::Deserialize;
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Review status codes recognized by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = PracticumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PracticumError::InvalidRecord(format!("unknown status: {s}")))
    }
}

/// The fields of a homework record the bot reads. Everything else the API
/// sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkRecord {
    /// # Errors
    ///
    /// [`PracticumError::InvalidRecord`] when `record` is not a mapping or
    /// its fields have the wrong types.
    pub fn from_value(record: &Value) -> PracticumResult<Self> {
        if !record.is_object() {
            return Err(PracticumError::InvalidRecord(format!(
                "homework record is not a mapping: {record}"
            )));
        }
        Self::deserialize(record).map_err(|error| {
            PracticumError::InvalidRecord(format!("malformed homework record: {error}"))
        })
    }
}

/// User-facing texts sent by the bot.
///
/// `status_changed` is a template: `{homework_name}` and `{verdict}` are
/// substituted when a status change is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessages {
    pub approved: String,
    pub reviewing: String,
    pub rejected: String,
    pub status_changed: String,
    /// Sent when the API reports no homework updates.
    pub no_homeworks: String,
    /// Sent when the latest status equals the last one reported.
    pub unchanged: String,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self::english()
    }
}

impl StatusMessages {
    #[must_use]
    pub fn english() -> Self {
        Self {
            approved: "Reviewed: the reviewer liked everything. Hooray!".to_string(),
            reviewing: "Taken for review by the reviewer.".to_string(),
            rejected: "Reviewed: the reviewer has comments.".to_string(),
            status_changed: "Changed review status of \"{homework_name}\": {verdict}".to_string(),
            no_homeworks: "No homeworks to review yet.".to_string(),
            unchanged: "Homework status has not changed.".to_string(),
        }
    }

    #[must_use]
    pub fn russian() -> Self {
        Self {
            approved: "Работа проверена: ревьюеру всё понравилось. Ура!".to_string(),
            reviewing: "Работа взята на проверку ревьюером.".to_string(),
            rejected: "Работа проверена: у ревьюера есть замечания.".to_string(),
            status_changed: "Изменился статус проверки работы \"{homework_name}\". {verdict}"
                .to_string(),
            no_homeworks: "Нет работ на проверке.".to_string(),
            unchanged: "Статус работы не изменился.".to_string(),
        }
    }

    #[must_use]
    pub fn verdict(&self, status: HomeworkStatus) -> &str {
        match status {
            HomeworkStatus::Approved => &self.approved,
            HomeworkStatus::Reviewing => &self.reviewing,
            HomeworkStatus::Rejected => &self.rejected,
        }
    }

    #[must_use]
    pub fn status_changed(&self, homework_name: &str, status: HomeworkStatus) -> String {
        let verdict = self.verdict(status);
        self.status_changed
            .split("{homework_name}")
            .map(|piece| piece.replace("{verdict}", verdict))
            .collect::<Vec<_>>()
            .join(homework_name)
    }

    /// Turn a single homework record into the status-change message.
    ///
    /// Fails with [`PracticumError::InvalidRecord`] when the record is not a
    /// mapping, has no `status` or an unrecognized one, or has no
    /// `homework_name`.
    ///
    /// # Errors
    ///
    /// [`PracticumError::InvalidRecord`] naming the offending field or value.
    pub fn parse_status(&self, record: &Value) -> PracticumResult<String> {
        let HomeworkRecord {
            homework_name,
            status,
        } = HomeworkRecord::from_value(record)?;

        let status: HomeworkStatus = status
            .ok_or_else(|| PracticumError::InvalidRecord("missing status".to_string()))?
            .parse()?;

        let homework_name = homework_name
            .ok_or_else(|| PracticumError::InvalidRecord("missing homework_name".to_string()))?;

        Ok(self.status_changed(&homework_name, status))
    }
}
