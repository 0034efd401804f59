//! Enrichment of address records.
//!
//! For every A/AAAA record in a parsed response this module:
//! - Looks up the reverse-DNS name (PTR)
//! - Looks up the announcing autonomous system and its description (ASN)
//!
//! The sub-replies are parsed with the same [`crate::parse_dig`] used for the
//! primary response. A failed sub-lookup only leaves its own field unset;
//! records are processed one at a time, in section order, and never
//! reordered.

mod asn;
mod ptr;
mod reverse;

use crate::dig::{parse_dig, ParsedResponse, ResourceRecord};
use crate::error_handling::{EnrichmentError, EnrichmentStats, ResolverError};
use crate::resolver::NameResolver;

pub use asn::lookup_asn;
pub use ptr::lookup_ptr;
pub use reverse::{
    asn_description_name, asn_origin_name, expand_ipv6, ipv4_origin_name, ipv6_origin_name,
};

/// Enriches every address record of `response` with PTR and ASN metadata.
///
/// `server` is passed to the PTR lookups only; ASN lookups always use the
/// default resolver. Never fails: lookup problems are logged and the
/// affected fields stay `None`.
pub async fn enrich_response<R>(
    resolver: &R,
    response: ParsedResponse,
    server: Option<&str>,
) -> ParsedResponse
where
    R: NameResolver + ?Sized,
{
    let stats = EnrichmentStats::new();
    let response = enrich_response_with_stats(resolver, response, server, &stats).await;
    if stats.total() > 0 {
        log::info!("Enrichment finished with {} incomplete lookups", stats.total());
        stats.log_summary();
    }
    response
}

/// Same as [`enrich_response`], counting incomplete lookups into `stats`.
pub async fn enrich_response_with_stats<R>(
    resolver: &R,
    mut response: ParsedResponse,
    server: Option<&str>,
    stats: &EnrichmentStats,
) -> ParsedResponse
where
    R: NameResolver + ?Sized,
{
    for section in [
        &mut response.answer,
        &mut response.authority,
        &mut response.additional,
    ] {
        for record in section.iter_mut() {
            enrich_record(resolver, record, server, stats).await;
        }
    }
    response
}

async fn enrich_record<R>(
    resolver: &R,
    record: &mut ResourceRecord,
    server: Option<&str>,
    stats: &EnrichmentStats,
) where
    R: NameResolver + ?Sized,
{
    if !record.is_address() {
        return;
    }

    log::debug!("Enriching {} {} {}", record.name, record.record_type, record.data);
    record.ptr = lookup_ptr(resolver, &record.data, server, stats).await;
    record.asn = lookup_asn(resolver, &record.data, stats).await;
}

/// Parses a sub-lookup reply and returns its first answer's data.
///
/// `Ok(None)` means the reply parsed but had no answers.
fn first_answer_data(
    reply: Result<String, ResolverError>,
) -> Result<Option<String>, EnrichmentError> {
    let response = parse_dig(&reply?)?;
    Ok(response.answer.into_iter().next().map(|record| record.data))
}
