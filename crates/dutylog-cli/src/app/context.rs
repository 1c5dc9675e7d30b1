//! Application context for the DutyLog CLI.
//!
//! Bundles the parsed arguments with the config file, which is read at most
//! once and only by commands that need it.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::unsync::OnceCell;
use tracing::warn;

use dutylog_core::export::{Delivery, DownloadDelivery, ShareDelivery};
use dutylog_core::{DutyStore, FileKeyValueStore};

use crate::cli::Cli;
use crate::config::{read_config, DutyLogConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_data_dir};
use super::zone::Zone;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DutyLogConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, or defaults when there is none.
    pub fn config(&self) -> anyhow::Result<&DutyLogConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path)
            } else {
                Ok(DutyLogConfig::default())
            }
        })
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Open the duty collection, loading it from the data directory.
    pub fn open_store(&self) -> anyhow::Result<DutyStore<FileKeyValueStore>> {
        let store = DutyStore::open(FileKeyValueStore::new(self.data_dir()?))?;
        Ok(store)
    }

    pub fn zone(&self) -> anyhow::Result<Zone> {
        match self.config()?.ui.timezone.as_deref() {
            Some(name) if !name.trim().is_empty() => Zone::parse(name),
            _ => Ok(Zone::Local),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        Ok(self.zone()?.today(self.now()))
    }

    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Delivery for an export: share when asked and a share command is
    /// configured, otherwise download into `--out`, `[export] dir` or the
    /// working directory.
    pub fn delivery(&self, share: bool, out: Option<&str>) -> anyhow::Result<Box<dyn Delivery>> {
        let config = self.config()?;
        let dir = match out.or(config.export.dir.as_deref()) {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };
        let download = DownloadDelivery::new(dir);
        if !share {
            return Ok(Box::new(download));
        }
        match config.export.share_command.as_deref() {
            Some(command) if !command.trim().is_empty() => {
                Ok(Box::new(ShareDelivery::new(command, download)))
            }
            _ => {
                warn!("no share command configured, downloading instead");
                Ok(Box::new(download))
            }
        }
    }
}
