//! Parsing helpers for dates, field edits, duty types and output format.

use chrono::NaiveDate;

use dutylog_core::DutyType;

use crate::constants::FIELDS_HINT;
use crate::errors::CliError;

/// Output format for list/search commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse a calendar date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value)).into()
    })
}

/// Split a `--set` argument into field name and value. The value may be empty
/// (to clear a field) and may itself contain `=`.
pub fn parse_set_pair(raw: &str) -> anyhow::Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(CliError::invalid_input_with_hint(
            format!("Invalid --set value \"{}\" (expected KEY=VALUE)", raw),
            FIELDS_HINT,
        )
        .into()),
    }
}

pub fn parse_duty_type(value: &str) -> anyhow::Result<DutyType> {
    Ok(value.parse::<DutyType>()?)
}
