//! Tracing setup. Logs go to stderr so stdout stays parseable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "DUTYLOG_LOG";
const DEFAULT_LEVEL: &str = "warn";

/// Filter directive: `DUTYLOG_LOG`, then the configured level, then `warn`.
pub fn filter_directive(env_value: Option<&str>, configured: Option<&str>) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or(configured.filter(|v| !v.trim().is_empty()))
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

pub fn init(configured: Option<&str>) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directive(Some("debug"), Some("info")), "debug");
        assert_eq!(filter_directive(None, Some("info")), "info");
        assert_eq!(filter_directive(Some(" "), None), "warn");
    }
}
