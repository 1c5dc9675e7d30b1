//! Record output for the CLI: JSON documents, detail views and list tables.

mod json;
mod text;

pub use json::{record_json, records_json};
pub use text::{print_record, print_record_list, record_row, LIST_COLUMNS};
