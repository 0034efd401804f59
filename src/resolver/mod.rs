//! Name resolver capability.
//!
//! The parser and enrichment pipeline never talk to the network directly;
//! they ask a [`NameResolver`] for the raw diagnostic text of a lookup. The
//! production implementation is [`DigResolver`], which runs the `dig` binary.

mod dig;

use async_trait::async_trait;

use crate::error_handling::ResolverError;

pub use dig::DigResolver;

/// Issues lookups and returns the tool's raw textual output.
///
/// Implementations must be safe to call concurrently from independent tasks.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Forward lookup of `name` for `record_type` (e.g. `A`, `ANY`, `NS`),
    /// optionally against an explicit server.
    async fn lookup(
        &self,
        name: &str,
        record_type: &str,
        server: Option<&str>,
    ) -> Result<String, ResolverError>;

    /// PTR lookup for an IP address, optionally against an explicit server.
    async fn reverse_lookup(&self, ip: &str, server: Option<&str>)
        -> Result<String, ResolverError>;

    /// TXT lookup of `name` against the default resolver.
    async fn text_lookup(&self, name: &str) -> Result<String, ResolverError>;
}

#[cfg(test)]
pub(crate) mod fake;
