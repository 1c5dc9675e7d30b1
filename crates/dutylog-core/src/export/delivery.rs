//! Getting an exported workbook to the user: save it, or hand it to a share tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{DutyLogError, Result};
use crate::fs::write_atomic;

/// A generated file ready for delivery.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// How a file reached the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "delivery", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Downloaded { path: PathBuf },
    Shared { via: String },
    /// Sharing failed; the file was saved instead.
    FellBack { path: PathBuf, reason: String },
}

impl DeliveryOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            DeliveryOutcome::Downloaded { path } | DeliveryOutcome::FellBack { path, .. } => {
                Some(path)
            }
            DeliveryOutcome::Shared { .. } => None,
        }
    }
}

/// A way of delivering an export file.
pub trait Delivery {
    /// Deliver `file`. Only failures that leave the user without the file are errors.
    fn deliver(&self, file: &ExportFile) -> Result<DeliveryOutcome>;
}

/// Saves the file into a directory.
#[derive(Debug, Clone)]
pub struct DownloadDelivery {
    dir: PathBuf,
}

impl DownloadDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn save(&self, file: &ExportFile) -> Result<PathBuf> {
        let path = self.dir.join(&file.file_name);
        write_atomic(&path, &file.bytes).map_err(|err| {
            DutyLogError::Export(format!("Failed to save {}: {}", path.display(), err))
        })?;
        Ok(path)
    }
}

impl Delivery for DownloadDelivery {
    fn deliver(&self, file: &ExportFile) -> Result<DeliveryOutcome> {
        let path = self.save(file)?;
        info!(path = %path.display(), bytes = file.bytes.len(), "saved export");
        Ok(DeliveryOutcome::Downloaded { path })
    }
}

/// Runs an external share command on a staged copy of the file, falling
/// back to a download when the command cannot be run or fails.
#[derive(Debug, Clone)]
pub struct ShareDelivery {
    command: String,
    fallback: DownloadDelivery,
    staging_root: PathBuf,
}

impl ShareDelivery {
    /// `command` is split on whitespace; the staged file path is appended as
    /// the last argument.
    pub fn new(command: impl Into<String>, fallback: DownloadDelivery) -> Self {
        Self {
            command: command.into(),
            fallback,
            staging_root: std::env::temp_dir(),
        }
    }

    /// Stage shared files under `dir` instead of the system temp directory.
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_root = dir.into();
        self
    }

    fn try_share(&self, file: &ExportFile) -> std::result::Result<(), String> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| "share command is empty".to_string())?;
        let args: Vec<&str> = parts.collect();

        let staging = tempfile::Builder::new()
            .prefix("dutylog_share_")
            .tempdir_in(&self.staging_root)
            .map_err(|e| format!("failed to create staging dir: {}", e))?;
        let staged = staging.path().join(&file.file_name);
        write_atomic(&staged, &file.bytes)
            .map_err(|e| format!("failed to stage {}: {}", staged.display(), e))?;

        let status = Command::new(program).args(&args).arg(&staged).status();
        let staging_dir = staging.path().to_path_buf();
        if let Err(err) = staging.close() {
            warn!(dir = %staging_dir.display(), %err, "failed to clean up share staging dir");
        }

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(format!("{} exited with {}", program, status)),
            Err(err) => Err(format!("failed to launch {}: {}", program, err)),
        }
    }
}

impl Delivery for ShareDelivery {
    fn deliver(&self, file: &ExportFile) -> Result<DeliveryOutcome> {
        match self.try_share(file) {
            Ok(()) => {
                info!(command = %self.command, file = %file.file_name, "shared export");
                Ok(DeliveryOutcome::Shared {
                    via: self.command.clone(),
                })
            }
            Err(reason) => {
                warn!(%reason, "share failed, falling back to download");
                let path = self.fallback.save(file)?;
                info!(path = %path.display(), "saved export");
                Ok(DeliveryOutcome::FellBack { path, reason })
            }
        }
    }
}
