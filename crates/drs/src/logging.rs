//! Logging setup.
//!
//! Events go to stderr through `tracing-subscriber`, pretty or JSON, so
//! stdout carries nothing but the verdict. `RUST_LOG` wins over both the
//! config file and `--verbose`.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber with `level` as the default directive.
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal()),
            )
            .init();
    }
}

/// Level used when neither `RUST_LOG` nor a finer config level applies.
///
/// `--verbose` raises the level to at least `debug`; a configured `trace`
/// is kept.
pub fn effective_level(configured: &str, verbose: bool) -> &str {
    match (verbose, configured) {
        (true, "trace") => "trace",
        (true, _) => "debug",
        (false, level) => level,
    }
}

/// Initialize logging from the `[logging]` config section, with CLI overrides.
pub fn init_from_config(config: &drs_core::Config, verbose: bool, json_logs: bool) {
    let level = effective_level(&config.logging.level, verbose);
    let json_format = json_logs || config.logging.format == "json";
    init(level, json_format);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_used_as_is() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            assert_eq!(effective_level(level, false), level);
        }
    }

    #[test]
    fn test_verbose_raises_quiet_levels() {
        assert_eq!(effective_level("warn", true), "debug");
        assert_eq!(effective_level("error", true), "debug");
        assert_eq!(effective_level("trace", true), "trace");
    }

    #[test]
    fn test_default_config_logs_at_info() {
        let config = drs_core::Config::default();
        assert_eq!(effective_level(&config.logging.level, false), "info");
    }
}
