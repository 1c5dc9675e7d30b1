//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

const MAX_PATH_DISPLAY: usize = 50;

/// Render a header line for a command.
///
/// Pretty mode: "DutyLog · command (context)" with the data directory below
/// Plain mode: "dutylog command"
pub fn header_with_context(
    ctx: &UiContext,
    command: &str,
    context: Option<&str>,
    path: Option<&str>,
) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("DutyLog", styles::bold(), ctx.color);
            let mut out = match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            };
            if let Some(p) = path {
                let count = p.chars().count();
                let display_path = if count > MAX_PATH_DISPLAY {
                    let tail: String = p.chars().skip(count - (MAX_PATH_DISPLAY - 3)).collect();
                    format!("...{}", tail)
                } else {
                    p.to_string()
                };
                out.push_str(&format!("\n{}", kv(ctx, "Data", &display_path)));
            }
            out
        }
        OutputMode::Plain => format!("dutylog {}", command),
        OutputMode::Json => String::new(),
    }
}

pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    header_with_context(ctx, command, context, None)
}

/// Bold group title inside a detail view. Plain mode renders nothing.
pub fn section(ctx: &UiContext, title: &str) -> String {
    if ctx.mode.is_pretty() {
        styled(title, styles::bold(), ctx.color)
    } else {
        String::new()
    }
}

pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        "\u{2500}".repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }
    lines.join("\n")
}

#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a borderless table.
///
/// Pretty mode: dim headers, two spaces between columns
/// Plain mode: space-separated values, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..columns.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Print to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with "Hint: ..." on the next line
/// Plain mode: "error=message" with "hint=..."
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }
    lines.join("\n")
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_modes() {
        let h = header(&pretty_ctx(), "list", Some("Working"));
        assert!(h.starts_with("DutyLog"));
        assert!(h.contains("list (Working)"));
        assert_eq!(header(&plain_ctx(), "list", None), "dutylog list");
    }

    #[test]
    fn test_header_truncates_long_data_dir() {
        let long_path = "/home/crew/.local/share/dutylog/with/a/rather/deep/nested/folder";
        let h = header_with_context(&pretty_ctx(), "dashboard", None, Some(long_path));
        assert!(h.contains("Data:"));
        assert!(h.contains("..."));
        assert!(h.ends_with("nested/folder"));
    }

    #[test]
    fn test_kv() {
        assert_eq!(kv(&plain_ctx(), "Train Number", "12952"), "train_number=12952");
        let line = kv(&pretty_ctx(), "Loco", "WAP7 30281");
        assert_eq!(line, "Loco: WAP7 30281");
    }

    #[test]
    fn test_hint() {
        assert_eq!(hint(&plain_ctx(), "dutylog list"), "hint=dutylog list");
        assert!(hint(&pretty_ctx(), "dutylog list").starts_with("Hint:"));
    }

    #[test]
    fn test_receipt() {
        let items = [("ID", "7a2e3c0b"), ("Type", "Leave")];
        let pretty = receipt(&pretty_ctx(), "Saved duty", &items);
        assert!(pretty.contains("[\u{2713}] Saved duty"));
        assert!(pretty.contains("  ID: 7a2e3c0b"));

        let plain = receipt(&plain_ctx(), "Saved duty", &items);
        assert_eq!(plain, "status=ok\nid=7a2e3c0b\ntype=Leave");
    }

    #[test]
    fn test_simple_table() {
        let columns = [Column::new("ID"), Column::new("Type"), Column::new("Date")];
        let rows = vec![
            vec!["7a2e3c0b".into(), "Working".into(), "2024-06-15".into()],
            vec!["9b3f4d1c".into(), "Leave".into(), "2024-06-10".into()],
        ];
        let plain = simple_table(&plain_ctx(), &columns, &rows);
        assert_eq!(plain, "7a2e3c0b Working 2024-06-15\n9b3f4d1c Leave 2024-06-10");

        let pretty = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(pretty.contains("Type"));
        assert!(pretty.contains("9b3f4d1c"));
    }

    #[test]
    fn test_section_and_divider() {
        assert_eq!(section(&pretty_ctx(), "Crew"), "Crew");
        assert_eq!(section(&plain_ctx(), "Crew"), "");
        assert!(divider(&pretty_ctx()).contains('\u{2500}'));
        assert_eq!(divider(&plain_ctx()), "---");
    }

    #[test]
    fn test_error_message() {
        let e = error_message(&pretty_ctx(), "Record not found", Some("dutylog list"));
        assert!(e.contains("[\u{2717}] Record not found"));
        assert!(e.contains("Hint: dutylog list"));

        let plain = error_message(&plain_ctx(), "Record not found", None);
        assert_eq!(plain, "error=Record not found");
    }
}
