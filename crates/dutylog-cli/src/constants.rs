//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (record, profile).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Stored data could not be decoded.
    pub const CORRUPTED_DATA: i32 = 6;

    /// Export or backup selected no records.
    pub const NOTHING_TO_EXPORT: i32 = 7;
}

/// Number of duties on the dashboard.
pub const RECENT_DUTIES: usize = 5;

/// Default number of rows for `list`.
pub const DEFAULT_LIST_LIMIT: usize = 20;

pub const LIST_HINT: &str = "Hint: Run `dutylog list` to find record IDs.";
pub const PROFILE_HINT: &str = "Run `dutylog profile set` to create your profile.";
pub const FIELDS_HINT: &str = "Hint: Run `dutylog fields <TYPE>` to see field names.";
