//! Reverse-DNS (PTR) step.

use super::first_answer_data;
use crate::error_handling::{EnrichmentStats, EnrichmentWarning};
use crate::resolver::NameResolver;

/// Looks up the PTR name for `ip`, against `server` when one is given.
///
/// Returns the first answer's data. A failed lookup or an empty answer
/// section leaves the field unset and is counted in `stats`.
pub async fn lookup_ptr<R>(
    resolver: &R,
    ip: &str,
    server: Option<&str>,
    stats: &EnrichmentStats,
) -> Option<String>
where
    R: NameResolver + ?Sized,
{
    let reply = resolver.reverse_lookup(ip, server).await;
    match first_answer_data(reply) {
        Ok(Some(name)) => Some(name),
        Ok(None) => {
            log::debug!("PTR lookup for {} returned no answer", ip);
            stats.increment(EnrichmentWarning::PtrNoAnswer);
            None
        }
        Err(e) => {
            log::warn!("PTR lookup for {} failed: {}", ip, e);
            stats.increment(EnrichmentWarning::PtrLookupFailed);
            None
        }
    }
}
