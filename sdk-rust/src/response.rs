use crate::{PracticumError, PracticumResult};
use serde_json::Value;

/// A review API response whose shape has been checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeworkStatuses {
    /// Homework records, most relevant first. Individual records are not
    /// validated here.
    pub homeworks: Vec<Value>,
    /// Server clock at the time of the response, in Unix seconds.
    pub current_date: Option<i64>,
}

impl HomeworkStatuses {
    /// The record the server considers most relevant, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

/// Check that a review API response is a mapping holding a `homeworks` list.
///
/// `current_date` is optional, but when present it must be a non-negative
/// integer so it can safely become the next watermark.
///
/// # Errors
///
/// [`PracticumError::Schema`] describing the first shape violation found.
pub fn validate(response: &Value) -> PracticumResult<HomeworkStatuses> {
    let Value::Object(map) = response else {
        return Err(PracticumError::Schema("not a mapping".to_string()));
    };

    let homeworks = match map.get("homeworks") {
        Some(Value::Array(homeworks)) => homeworks.clone(),
        _ => return Err(PracticumError::Schema("homeworks is not a list".to_string())),
    };

    let current_date = match map.get("current_date") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_i64().filter(|date| *date >= 0).ok_or_else(|| {
            PracticumError::Schema(format!(
                "current_date is not a non-negative integer: {value}"
            ))
        })?),
    };

    Ok(HomeworkStatuses {
        homeworks,
        current_date,
    })
}
