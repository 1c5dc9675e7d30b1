//! Application-level plumbing for the DutyLog CLI.
//!
//! - Application context bundling CLI args with the lazily loaded config
//! - Path, time zone and record-id resolution

mod context;
mod resolver;
mod zone;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_record};
pub use zone::Zone;
