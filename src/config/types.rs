//! Configuration types.
//!
//! This module defines the library configuration and the enums shared with
//! the command-line interface.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_DIG_BINARY, DEFAULT_RECORD_TYPE, LOOKUP_TIMEOUT_SECS, MAX_DOMAIN_LENGTH,
};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which server the primary lookup (and the PTR lookups) are sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServerSelection {
    /// Whatever the system resolver configuration says.
    #[default]
    Default,
    /// A specific server address or hostname.
    Explicit(String),
    /// The first NS record of the queried name's registrable domain.
    Authoritative,
}

impl FromStr for ServerSelection {
    type Err = ConfigValidationError;

    /// `default` (or empty), `authoritative`, or anything else as an explicit
    /// server.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("default") {
            Ok(ServerSelection::Default)
        } else if trimmed.eq_ignore_ascii_case("authoritative") {
            Ok(ServerSelection::Authoritative)
        } else {
            let server = ServerSelection::Explicit(trimmed.to_string());
            server.validate()?;
            Ok(server)
        }
    }
}

impl fmt::Display for ServerSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerSelection::Default => f.write_str("default"),
            ServerSelection::Explicit(server) => f.write_str(server),
            ServerSelection::Authoritative => f.write_str("authoritative"),
        }
    }
}

impl ServerSelection {
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if let ServerSelection::Explicit(server) = self {
            if server.is_empty() || server.starts_with('-') || server.starts_with('+') {
                return Err(ConfigValidationError {
                    field: "server",
                    message: format!("'{server}' is not a server address"),
                });
            }
            if server.chars().any(char::is_whitespace) {
                return Err(ConfigValidationError {
                    field: "server",
                    message: format!("'{server}' contains whitespace"),
                });
            }
        }
        Ok(())
    }
}

/// Lookup configuration (no CLI dependencies).
///
/// Logging is set up by the binary before a `Config` exists.
///
/// # Examples
///
/// ```no_run
/// use dig_inspect::{Config, ServerSelection};
///
/// let config = Config {
///     name: "example.org".to_string(),
///     server: ServerSelection::Explicit("1.1.1.1".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Name to look up
    pub name: String,

    /// Server selection for the primary and PTR lookups
    pub server: ServerSelection,

    /// Record type of the primary lookup
    pub record_type: String,

    /// Attach PTR and ASN metadata to address records
    pub enrich: bool,

    /// Path or name of the `dig` binary
    pub dig_binary: PathBuf,

    /// Per-invocation timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::new(),
            server: ServerSelection::Default,
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            enrich: true,
            dig_binary: PathBuf::from(DEFAULT_DIG_BINARY),
            timeout_seconds: LOOKUP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Checks field-level constraints. Domain validity of `name` is checked
    /// later against the Public Suffix List by [`crate::run_lookup`].
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConfigValidationError {
                field: "name",
                message: "must not be empty".to_string(),
            });
        }
        if name.len() > MAX_DOMAIN_LENGTH {
            return Err(ConfigValidationError {
                field: "name",
                message: format!("longer than {MAX_DOMAIN_LENGTH} characters"),
            });
        }

        if self.record_type.is_empty()
            || !self.record_type.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigValidationError {
                field: "record_type",
                message: format!("'{}' is not a record type", self.record_type),
            });
        }

        self.server.validate()?;

        if self.dig_binary.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "dig_binary",
                message: "must not be empty".to_string(),
            });
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            name: "example.org".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.record_type, "ANY");
        assert_eq!(config.server, ServerSelection::Default);
        assert!(config.enrich);
        assert_eq!(config.dig_binary, PathBuf::from("dig"));
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_server_selection_from_str() {
        let parse = |s: &str| s.parse::<ServerSelection>();
        assert_eq!(parse(""), Ok(ServerSelection::Default));
        assert_eq!(parse("default"), Ok(ServerSelection::Default));
        assert_eq!(parse("Authoritative"), Ok(ServerSelection::Authoritative));
        assert_eq!(
            parse("1.1.1.1"),
            Ok(ServerSelection::Explicit("1.1.1.1".to_string()))
        );
        assert!("-b0.0.0.0".parse::<ServerSelection>().is_err());
        assert!("+tcp".parse::<ServerSelection>().is_err());
    }

    #[test]
    fn test_server_selection_display() {
        assert_eq!(ServerSelection::Authoritative.to_string(), "authoritative");
        assert_eq!(
            ServerSelection::Explicit("9.9.9.9".to_string()).to_string(),
            "9.9.9.9"
        );
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        assert_eq!(valid_config().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_validate_rejects_long_name() {
        let config = Config {
            name: format!("{}.com", "a".repeat(260)),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "name");
    }

    #[test]
    fn test_validate_rejects_bad_record_type() {
        let config = Config {
            record_type: "+short".to_string(),
            ..valid_config()
        };
        assert_eq!(config.validate().unwrap_err().field, "record_type");
    }

    #[test]
    fn test_validate_rejects_option_like_server() {
        let config = Config {
            server: ServerSelection::Explicit("-f/etc/passwd".to_string()),
            ..valid_config()
        };
        assert_eq!(config.validate().unwrap_err().field, "server");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..valid_config()
        };
        assert_eq!(config.validate().unwrap_err().field, "timeout_seconds");
    }
}
