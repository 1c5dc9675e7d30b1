//! Output mode routing.

/// How a command formats its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Stable `key=value` and space-separated lines for scripts
    #[default]
    Plain,
    /// Colors, headers and tables (TTY only)
    Pretty,
}

impl OutputMode {
    /// `--json` wins outright. `--format plain` and `TERM=dumb` force plain.
    /// Otherwise pretty on a TTY and plain when piped.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb || !is_tty {
            return Self::Plain;
        }
        Self::Pretty
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_exclusive() {
        assert_eq!(
            OutputMode::resolve(true, Some("plain"), true, false),
            OutputMode::Json
        );
    }

    #[test]
    fn test_plain_overrides() {
        assert_eq!(
            OutputMode::resolve(false, Some("plain"), true, false),
            OutputMode::Plain
        );
        assert_eq!(
            OutputMode::resolve(false, None, true, true),
            OutputMode::Plain
        );
        assert_eq!(
            OutputMode::resolve(false, Some("table"), false, false),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_tty_table_is_pretty() {
        assert_eq!(
            OutputMode::resolve(false, Some("table"), true, false),
            OutputMode::Pretty
        );
    }
}
