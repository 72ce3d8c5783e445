/// What the bot remembers between cycles. Kept in memory only, so a restart
/// forgets the last reported status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    watermark: i64,
    last_status: Option<String>,
}

impl PollState {
    #[must_use]
    pub fn new(watermark: i64) -> Self {
        Self {
            watermark,
            last_status: None,
        }
    }

    /// Only homeworks updated after this Unix timestamp are requested.
    #[must_use]
    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    #[must_use]
    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    /// Move the watermark to the server clock. Never moves backwards.
    pub fn advance(&mut self, current_date: i64) {
        self.watermark = self.watermark.max(current_date);
    }

    #[must_use]
    pub fn is_unchanged(&self, status: &str) -> bool {
        self.last_status.as_deref() == Some(status)
    }

    pub fn record(&mut self, status: String) {
        self.last_status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watermark_only_moves_forward() {
        let mut state = PollState::new(1000);

        state.advance(2000);
        assert_eq!(state.watermark(), 2000);

        state.advance(1500);
        assert_eq!(state.watermark(), 2000);
    }

    #[test]
    fn tracks_last_status() {
        let mut state = PollState::new(0);
        assert_eq!(state.last_status(), None);
        assert!(!state.is_unchanged("approved"));

        state.record("approved".to_string());
        assert!(state.is_unchanged("approved"));
        assert!(!state.is_unchanged("rejected"));
    }
}
