//! Autonomous-system (ASN) steps.
//!
//! Two TXT lookups against the Team Cymru zones: the origin lookup maps an
//! address to its announcing AS number, the description lookup maps that
//! number to country, registry, allocation date and operator name. Both
//! replies are ` | `-separated fields.

use super::first_answer_data;
use super::reverse::{asn_description_name, asn_origin_name};
use crate::config::ASN_FIELD_SEPARATOR;
use crate::dig::AsnInfo;
use crate::error_handling::{EnrichmentStats, EnrichmentWarning};
use crate::resolver::NameResolver;

/// Resolves ASN metadata for `ip`.
///
/// Returns `None` when either lookup fails. An origin reply with no answer
/// gives an empty AS number; the description lookup is still issued (as
/// `AS.asn.cymru.com`) and its fields default to empty strings.
pub async fn lookup_asn<R>(resolver: &R, ip: &str, stats: &EnrichmentStats) -> Option<AsnInfo>
where
    R: NameResolver + ?Sized,
{
    let asn = match asn_origin_name(ip) {
        Some(origin_name) => match first_answer_data(resolver.text_lookup(&origin_name).await) {
            Ok(data) => data
                .map(|text| origin_asn(&text))
                .unwrap_or_default(),
            Err(e) => {
                log::warn!("ASN origin lookup for {} failed: {}", ip, e);
                stats.increment(EnrichmentWarning::AsnOriginFailed);
                return None;
            }
        },
        None => {
            log::debug!("{} is not an IP literal; querying an empty AS number", ip);
            stats.increment(EnrichmentWarning::NotAnIpLiteral);
            String::new()
        }
    };

    let description_name = asn_description_name(&asn);
    match first_answer_data(resolver.text_lookup(&description_name).await) {
        Ok(data) => Some(describe(asn, data.as_deref().unwrap_or_default())),
        Err(e) => {
            log::warn!("ASN description lookup for {} failed: {}", description_name, e);
            stats.increment(EnrichmentWarning::AsnDescriptionFailed);
            None
        }
    }
}

/// `15169 | 8.8.8.0/24 | US | arin | 2023-12-28` -> `15169`
pub(crate) fn origin_asn(text: &str) -> String {
    let text = text.trim().trim_matches('"');
    text.split(ASN_FIELD_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Builds [`AsnInfo`] from a description reply. The reply's first field
/// repeats the AS number and is skipped.
pub(crate) fn describe(asn: String, text: &str) -> AsnInfo {
    let text = text.trim().trim_matches('"');
    let mut fields = text.split(ASN_FIELD_SEPARATOR).skip(1).map(str::trim);
    let mut next = || fields.next().unwrap_or_default().to_string();

    AsnInfo {
        asn,
        country: next(),
        registry: next(),
        date: next(),
        description: next(),
    }
}
