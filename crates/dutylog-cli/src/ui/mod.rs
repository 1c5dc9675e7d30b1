//! Terminal output for the DutyLog CLI.
//!
//! - **context**: TTY, width, color and unicode detection
//! - **mode**: json / plain / pretty routing
//! - **theme**: badges, styles and symbols
//! - **render**: headers, tables, receipts, hints and errors
//! - **format**: dates, times and cell text
//!
//! Every handler resolves a [`UiContext`] first, writes JSON on its own when
//! `mode.is_json()`, and otherwise goes through the render helpers.

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, header_with_context, hint, kv, print, print_error,
    receipt, section, simple_table, Column,
};

pub use format::{short_id, truncate};
