//! Command handlers. Each takes the application context and its parsed
//! arguments and returns `anyhow::Result<()>`.

pub mod backup;
pub mod dashboard;
pub mod entries;
pub mod export;
pub mod misc;
pub mod profile;
