//! Operation Result
//!
//! Success flag plus a free-text message, returned by write operations that
//! report failures instead of raising them.

/// Outcome of a write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub succeeded: bool,
    pub message: Option<String>,
}

impl OperationResult {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: Some(message.into()),
        }
    }

    /// Message text, empty when none was recorded
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
