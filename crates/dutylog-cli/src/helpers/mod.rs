//! Input and parsing helpers for the CLI.
//!
//! - Date, `key=value`, duty type and output format parsing (`parsing`)
//! - Interactive prompts (`input`)

mod input;
mod parsing;

pub use input::{confirm, prompt_optional, prompt_required};
pub use parsing::{parse_date, parse_duty_type, parse_output_format, parse_set_pair, OutputFormat};
