//! Path and record-id resolution.

use std::path::PathBuf;

use dutylog_core::{DutyRecord, DutyStore, KeyValueStore};
use uuid::Uuid;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, DutyLogConfig};
use crate::constants::LIST_HINT;
use crate::errors::CliError;

/// Resolve the config file path, checking DUTYLOG_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DUTYLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// `--data-dir` / `DUTYLOG_DATA_DIR`, then `[storage] dir`, then the XDG data dir.
pub fn resolve_data_dir(cli: &Cli, config: &DutyLogConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.storage.dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

/// Find a record by full id or by a unique id prefix (dashes optional).
pub fn resolve_record<K: KeyValueStore>(
    store: &DutyStore<K>,
    id: &str,
) -> anyhow::Result<DutyRecord> {
    let needle = id.trim();
    if let Ok(parsed) = Uuid::parse_str(needle) {
        return store.get(parsed).cloned().ok_or_else(|| {
            CliError::not_found(format!("Record not found: {}", needle), LIST_HINT).into()
        });
    }

    let prefix = needle.replace('-', "").to_lowercase();
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CliError::invalid_input_with_hint(
            format!("Invalid record ID: {}", needle),
            "Hint: Record IDs are UUIDs; the first 8 characters are enough.",
        )
        .into());
    }

    let records = store.records();
    let mut matches = records
        .iter()
        .filter(|r| r.id.simple().to_string().starts_with(&prefix));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found.clone()),
        (None, _) => {
            Err(CliError::not_found(format!("Record not found: {}", needle), LIST_HINT).into())
        }
        (Some(_), Some(_)) => Err(CliError::invalid_input_with_hint(
            format!("Record ID prefix is ambiguous: {}", needle),
            "Hint: Use more characters of the ID.",
        )
        .into()),
    }
}
