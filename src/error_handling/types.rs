//! Error type definitions.
//!
//! This module defines all error and warning types used throughout the crate.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Errors raised while turning `dig` output into a [`crate::ParsedResponse`].
///
/// During the primary parse every variant is fatal to the call. During
/// enrichment the same errors are caught per record and only leave the
/// affected field unset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The `;; ->>HEADER<<-` line had fewer tokens than expected.
    #[error("Malformed header line: {0}")]
    MalformedHeader(String),

    /// The `;; flags:` line was truncated or a counter was not numeric.
    #[error("Malformed flags line ({reason}): {line}")]
    MalformedFlags {
        /// The offending line.
        line: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A record, question or zone-transfer line could not be split into its
    /// fields (includes MX data without a priority and short AXFR lines).
    #[error("Malformed record line ({reason}): {line}")]
    MalformedRecord {
        /// The offending line.
        line: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A content line arrived while the current section takes no content.
    #[error("Content line outside any record section: {0}")]
    UnrecognizedSection(String),

    /// End of input was reached without a `;; ->>HEADER<<-` line.
    #[error("No ->>HEADER<<- line found in dig output")]
    NoHeaderFound,
}

impl ParseError {
    pub(crate) fn record(line: &str, reason: impl Into<String>) -> Self {
        ParseError::MalformedRecord {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn flags(line: &str, reason: impl Into<String>) -> Self {
        ParseError::MalformedFlags {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by a [`crate::NameResolver`] invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// The lookup could not be completed (spawn failure, timeout, no output).
    #[error("Resolver unavailable: {0}")]
    Unavailable(String),

    /// A name or server argument would have been read as a tool option.
    #[error("Refusing resolver argument that looks like an option: {0}")]
    InvalidArgument(String),
}

/// Errors surfaced by [`crate::run_lookup`] to the boundary layer.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The lookup configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigValidationError),

    /// The queried name is not a valid domain under the Public Suffix List.
    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    /// Authoritative server discovery found no nameserver.
    #[error("No authoritative nameserver found for {0}")]
    NoAuthoritativeServer(String),

    /// The primary lookup failed.
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// The primary lookup's output could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A single enrichment lookup failed, either at the resolver or while
/// parsing its output. Caught per record; never escapes enrichment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    /// The sub-lookup could not be run.
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// The sub-lookup's output could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The configured dig binary is unusable.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// A configuration value failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the rejected `Config` field.
    pub field: &'static str,
    /// Why it was rejected.
    pub message: String,
}

/// Enrichment gaps. None of these fail a response; they are counted so a run
/// can report how much metadata is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum EnrichmentWarning {
    /// The reverse lookup failed or its output did not parse.
    PtrLookupFailed,
    /// The reverse lookup succeeded with an empty answer section.
    PtrNoAnswer,
    /// The origin TXT lookup failed or its output did not parse.
    AsnOriginFailed,
    /// The AS description TXT lookup failed or its output did not parse.
    AsnDescriptionFailed,
    /// Address data was not an IPv4 or IPv6 literal.
    NotAnIpLiteral,
}

impl std::fmt::Display for EnrichmentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnrichmentWarning {
    /// Human-readable label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichmentWarning::PtrLookupFailed => "PTR lookup failed",
            EnrichmentWarning::PtrNoAnswer => "PTR lookup returned no answer",
            EnrichmentWarning::AsnOriginFailed => "ASN origin lookup failed",
            EnrichmentWarning::AsnDescriptionFailed => "ASN description lookup failed",
            EnrichmentWarning::NotAnIpLiteral => "Address is not an IP literal",
        }
    }
}
