//! Error types for dutylog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for dutylog operations.
pub type Result<T> = std::result::Result<T, DutyLogError>;

/// Core error type for dutylog operations.
#[derive(Debug, Error)]
pub enum DutyLogError {
    /// Key-value storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted blob exists but cannot be decoded
    #[error("Corrupted local data under \"{key}\": {reason}")]
    CorruptedData { key: String, reason: String },

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing to export or back up
    #[error("{0}")]
    NoRecords(String),

    /// Spreadsheet generation or delivery failed
    #[error("Export error: {0}")]
    Export(String),
}

impl DutyLogError {
    pub fn corrupted(key: impl Into<String>, reason: impl ToString) -> Self {
        DutyLogError::CorruptedData {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for DutyLogError {
    fn from(err: std::io::Error) -> Self {
        DutyLogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DutyLogError {
    fn from(err: serde_json::Error) -> Self {
        DutyLogError::Validation(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for DutyLogError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        DutyLogError::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupted_message_names_key() {
        let err = DutyLogError::corrupted("alp_duties", "expected value at line 1");
        let message = err.to_string();
        assert!(message.contains("alp_duties"));
        assert!(message.contains("expected value"));
    }

    #[test]
    fn test_no_records_message_is_verbatim() {
        let err = DutyLogError::NoRecords("No records found for the selected filters.".into());
        assert_eq!(err.to_string(), "No records found for the selected filters.");
    }
}
