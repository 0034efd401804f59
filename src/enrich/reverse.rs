//! Lookup-name derivation for the ASN queries.
//!
//! IPv4 addresses are written octet-reversed, IPv6 addresses nibble-reversed,
//! then placed under the matching Team Cymru origin zone.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::config::{ASN_DESCRIPTION_ZONE, ASN_ORIGIN_V4_ZONE, ASN_ORIGIN_V6_ZONE};

/// `1.2.3.4` -> `4.3.2.1.origin.asn.cymru.com`
///
/// Returns `None` unless `ip` is a dotted-quad IPv4 literal.
pub fn ipv4_origin_name(ip: &str) -> Option<String> {
    let addr: Ipv4Addr = ip.parse().ok()?;
    let reversed: Vec<String> = addr.octets().iter().rev().map(u8::to_string).collect();
    Some(format!("{}.{}", reversed.join("."), ASN_ORIGIN_V4_ZONE))
}

/// Expands an IPv6 literal to eight colon-separated groups of four hex digits.
///
/// Handles zero compression (`::`), uncompressed input and embedded IPv4
/// tails. Anything `Ipv6Addr` rejects (including more than one `::`) yields
/// `None`.
pub fn expand_ipv6(ip: &str) -> Option<String> {
    let addr: Ipv6Addr = ip.parse().ok()?;
    let groups: Vec<String> = addr
        .segments()
        .iter()
        .map(|segment| format!("{segment:04x}"))
        .collect();
    Some(groups.join(":"))
}

/// `2001:db8::1` -> `1.0.0.0.…8.b.d.0.1.0.0.2.origin6.asn.cymru.com`
pub fn ipv6_origin_name(ip: &str) -> Option<String> {
    let expanded = expand_ipv6(ip)?;
    let nibbles: Vec<String> = expanded
        .chars()
        .filter(|c| *c != ':')
        .rev()
        .map(String::from)
        .collect();
    Some(format!("{}.{}", nibbles.join("."), ASN_ORIGIN_V6_ZONE))
}

/// Origin query name for either address family, or `None` for anything
/// that is not an IP literal.
pub fn asn_origin_name(ip: &str) -> Option<String> {
    ipv4_origin_name(ip).or_else(|| ipv6_origin_name(ip))
}

/// `15169` -> `AS15169.asn.cymru.com`
///
/// An empty identifier gives the degenerate `AS.asn.cymru.com`.
pub fn asn_description_name(asn: &str) -> String {
    format!("AS{asn}.{ASN_DESCRIPTION_ZONE}")
}
