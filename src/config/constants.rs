//! Configuration constants.
//!
//! This module defines the defaults and fixed lookup zones used throughout
//! the crate.

/// Name of the lookup utility binary, resolved through `PATH`.
pub const DEFAULT_DIG_BINARY: &str = "dig";

/// Record type used for the primary lookup when none is given.
pub const DEFAULT_RECORD_TYPE: &str = "ANY";

/// Per-invocation timeout for the lookup utility, in seconds.
///
/// Enrichment issues up to three invocations per address record, one after
/// another, so callers serving interactive requests should also bound the
/// whole lookup.
pub const LOOKUP_TIMEOUT_SECS: u64 = 10;

// Team Cymru IP-to-ASN mapping zones
/// Zone queried (TXT) with the reversed octets of an IPv4 address.
pub const ASN_ORIGIN_V4_ZONE: &str = "origin.asn.cymru.com";
/// Zone queried (TXT) with the reversed nibbles of an IPv6 address.
pub const ASN_ORIGIN_V6_ZONE: &str = "origin6.asn.cymru.com";
/// Zone queried (TXT) as `AS<number>.<zone>` for the AS description.
pub const ASN_DESCRIPTION_ZONE: &str = "asn.cymru.com";

/// Separator between fields of a Team Cymru TXT reply.
pub const ASN_FIELD_SEPARATOR: &str = " | ";

/// Maximum length of a queried name (RFC 1035 presentation limit).
pub const MAX_DOMAIN_LENGTH: usize = 253;
