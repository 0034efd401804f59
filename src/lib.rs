//! dig_inspect library: structured `dig` output with PTR and ASN enrichment
//!
//! This library turns the human-oriented text printed by the `dig` DNS lookup
//! utility into a [`ParsedResponse`], and can enrich every A/AAAA record with
//! its reverse-DNS name and the autonomous system announcing it (via the
//! Team Cymru IP-to-ASN TXT zones).
//!
//! # Example
//!
//! ```no_run
//! use dig_inspect::initialization::init_resolver;
//! use dig_inspect::{run_lookup, Config, ServerSelection};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     name: "example.org".to_string(),
//!     server: ServerSelection::Authoritative,
//!     ..Default::default()
//! };
//!
//! let resolver = init_resolver(&config)?;
//! let response = run_lookup(&config, resolver.as_ref()).await?;
//! for record in &response.answer {
//!     println!("{} {} {:?}", record.record_type, record.data, record.ptr);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Parsing alone needs no runtime:
//!
//! ```
//! let text = ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 7\n\
//!             ;; ANSWER SECTION:\n\
//!             example.org. 300 IN A 93.184.215.34\n";
//! let response = dig_inspect::parse_dig(text).unwrap();
//! assert_eq!(response.answer[0].data, "93.184.215.34");
//! ```
//!
//! # Requirements
//!
//! Lookups and enrichment require a Tokio runtime and a `dig` binary.

#![warn(missing_docs)]

pub mod config;
mod dig;
mod enrich;
mod error_handling;
pub mod initialization;
mod lookup;
mod resolver;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ServerSelection};
pub use dig::{
    parse_axfr_record, parse_dig, parse_dig_all, parse_flags, parse_footer, parse_header,
    parse_opt_pseudosection, parse_question, parse_record, AsnInfo, AxfrRecord, EdnsInfo, Flags,
    Footer, FooterField, Header, OptPseudosection, ParsedResponse, Question, ResourceRecord,
    Section, SectionCounts,
};
pub use enrich::{
    asn_description_name, asn_origin_name, enrich_response, enrich_response_with_stats,
    expand_ipv6, ipv4_origin_name, ipv6_origin_name, lookup_asn, lookup_ptr,
};
pub use error_handling::{
    ConfigValidationError, EnrichmentError, EnrichmentStats, EnrichmentWarning,
    InitializationError, LookupError, ParseError, ResolverError,
};
pub use lookup::{normalize_domain, registrable_domain, run_lookup, select_server, validate_domain};
pub use resolver::{DigResolver, NameResolver};
