//! Lookup orchestration.
//!
//! Ties the pieces together for one query: validate the name, pick the
//! server, run the primary lookup, parse it, enrich it and report the chosen
//! server in the footer.

mod domain;

use crate::config::{Config, ServerSelection};
use crate::dig::{parse_dig, ParsedResponse};
use crate::enrich::enrich_response;
use crate::error_handling::LookupError;
use crate::resolver::NameResolver;

pub use domain::{normalize_domain, registrable_domain, validate_domain};

/// Runs the lookup described by `config` through `resolver`.
///
/// Parse failures of the primary reply are returned as
/// [`LookupError::Parse`]. Enrichment never fails the lookup.
///
/// # Errors
///
/// - [`LookupError::Config`] if `config` fails validation
/// - [`LookupError::InvalidDomain`] if the name is not a valid domain
/// - [`LookupError::NoAuthoritativeServer`] if authoritative server discovery
///   finds no nameserver
/// - [`LookupError::Resolver`] if the primary (or NS discovery) lookup fails
pub async fn run_lookup<R>(config: &Config, resolver: &R) -> Result<ParsedResponse, LookupError>
where
    R: NameResolver + ?Sized,
{
    config.validate()?;
    let name = validate_domain(&config.name)?;
    let server = select_server(&name, &config.server, resolver).await?;

    log::info!(
        "Looking up {} {} via {}",
        name,
        config.record_type,
        server.as_deref().unwrap_or("system resolver")
    );
    let output = resolver
        .lookup(&name, &config.record_type, server.as_deref())
        .await?;
    let mut response = parse_dig(&output)?;
    log::debug!(
        "{} answer, {} authority, {} additional records",
        response.answer.len(),
        response.authority.len(),
        response.additional.len()
    );

    if config.enrich {
        response = enrich_response(resolver, response, server.as_deref()).await;
    }

    if let Some(server) = server {
        response.footer.server = Some(server);
    }

    Ok(response)
}

/// Resolves a [`ServerSelection`] to the server argument for the lookups.
///
/// `None` means the system resolver configuration.
pub async fn select_server<R>(
    name: &str,
    selection: &ServerSelection,
    resolver: &R,
) -> Result<Option<String>, LookupError>
where
    R: NameResolver + ?Sized,
{
    match selection {
        ServerSelection::Default => Ok(None),
        ServerSelection::Explicit(server) => Ok(Some(server.clone())),
        ServerSelection::Authoritative => authoritative_server(name, resolver).await.map(Some),
    }
}

/// First NS record of the registrable domain of `name`.
async fn authoritative_server<R>(name: &str, resolver: &R) -> Result<String, LookupError>
where
    R: NameResolver + ?Sized,
{
    let no_server = || LookupError::NoAuthoritativeServer(name.to_string());
    let registrable = registrable_domain(name).ok_or_else(no_server)?;

    let output = resolver.lookup(&registrable, "NS", None).await?;
    let response = parse_dig(&output)?;
    let nameserver = response
        .answer
        .into_iter()
        .find(|record| record.record_type.eq_ignore_ascii_case("NS"))
        .map(|record| record.data)
        .ok_or_else(no_server)?;

    log::debug!("Authoritative server for {}: {}", registrable, nameserver);
    Ok(nameserver)
}
