//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use dutylog_core::DutyLogError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (record, profile)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<DutyLogError>() {
        Some(DutyLogError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(DutyLogError::InvalidInput(_)) | Some(DutyLogError::Validation(_)) => {
            exit_codes::INVALID_INPUT
        }
        Some(DutyLogError::CorruptedData { .. }) => exit_codes::CORRUPTED_DATA,
        Some(DutyLogError::NoRecords(_)) => exit_codes::NOTHING_TO_EXPORT,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_codes() {
        let err = anyhow::Error::new(CliError::not_found("Record not found", "hint"));
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
        let err = anyhow::Error::new(CliError::invalid_input("bad"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_core_error_codes() {
        let err = anyhow::Error::new(DutyLogError::corrupted("alp_duties", "eof"));
        assert_eq!(exit_code_for(&err), exit_codes::CORRUPTED_DATA);
        let err = anyhow::Error::new(DutyLogError::NoRecords("none".into()));
        assert_eq!(exit_code_for(&err), exit_codes::NOTHING_TO_EXPORT);
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Record not found", "Run `dutylog list`.");
        assert_eq!(err.to_string(), "Record not found\nRun `dutylog list`.");
    }
}
