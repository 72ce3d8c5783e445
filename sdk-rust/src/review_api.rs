use crate::PracticumResult;
use serde_json::Value;

/// A source of homework review statuses.
#[async_trait::async_trait]
pub trait ReviewApi: Send + Sync {
    fn endpoint(&self) -> &str;
    /// Fetch the review statuses of homeworks updated since `from_date`
    /// (Unix seconds). Returns the parsed response body untouched; use
    /// [`crate::validate`] to check its shape.
    ///
    /// # Errors
    ///
    /// `Transport` when no response arrives, `StatusCode` for anything but
    /// 200, `Schema` when the body is not JSON.
    async fn homework_statuses(&self, from_date: i64) -> PracticumResult<Value>;
}
