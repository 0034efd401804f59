//! Logger initialization.
//!
//! Logs always go to stderr; stdout carries only the JSON response.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Installs the process-wide logger.
///
/// `RUST_LOG` seeds the filter and `level` then overrides it for every
/// target, including `dig_inspect`.
///
/// What the crate logs, by level:
///
/// - `warn`: each failed PTR or ASN sub-lookup
/// - `info`: the server a lookup went to, plus a summary of incomplete
///   enrichment
/// - `debug`: every `dig` command line, empty enrichment replies, skipped
///   `+qr` query blocks
///
/// Plain output looks like:
///
/// ```text
/// ⚠️ dig_inspect::enrich::ptr [WARN] PTR lookup for 192.0.2.1 failed: Resolver unavailable: ...
/// ```
///
/// and `LogFormat::Json` writes one object per line:
///
/// ```text
/// {"ts":1760000000000,"level":"DEBUG","target":"dig_inspect::resolver::dig","msg":"Running dig -x 8.8.8.8"}
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already
/// installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);

    builder.filter_level(level);
    builder.filter_module("dig_inspect", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_plain_format() {
        // env_logger can only be initialized once per process, so a second
        // call must fail with a LoggerError rather than panic
        let first = init_logger_with(LevelFilter::Debug, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Plain);
        assert!(first.is_ok() || matches!(first, Err(InitializationError::LoggerError(_))));
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_init_logger_json_format_after_existing_logger() {
        let _ = env_logger::try_init();

        let result = init_logger_with(LevelFilter::Info, LogFormat::Json);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
