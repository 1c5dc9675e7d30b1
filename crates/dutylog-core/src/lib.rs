//! # DutyLog Core
//!
//! Core library for DutyLog - a duty logbook for railway loco crew.
//!
//! This crate provides the record model, derived fields, persistence,
//! querying and spreadsheet export, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **model**: Duty records, per-type payloads and the user profile
//! - **derive**: Leave-day counts and periodic rest durations
//! - **form**: Draft controller for creating and editing records
//! - **store**: Key-value boundary and the newest-first duty collection
//! - **query**: Free-text search and the range/category export filter
//! - **export**: `.xlsx` export with download/share delivery
//! - **photo**: Profile photo encoding

pub mod derive;
pub mod error;
pub mod export;
pub mod form;
pub mod fs;
pub mod model;
pub mod photo;
pub mod query;
pub mod store;

pub use derive::RestDuration;
pub use error::{DutyLogError, Result};
pub use form::DutyForm;
pub use model::{DutyDetails, DutyRecord, DutyType, UserProfile};
pub use query::{DateWindow, ExportFilter, RangePreset};
pub use store::{DutyStore, FileKeyValueStore, KeyValueStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
