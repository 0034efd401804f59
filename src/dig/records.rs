//! Line-level parsers for `dig` output.
//!
//! Each function takes one non-empty line and returns one typed fragment.
//! They hold no state; the section state machine decides which one to call.

use crate::error_handling::ParseError;

use super::types::{
    AxfrRecord, EdnsInfo, Flags, FooterField, Header, OptPseudosection, Question, ResourceRecord,
    SectionCounts,
};

pub(crate) const QUERY_TIME_PREFIX: &str = ";; Query time:";
pub(crate) const SERVER_PREFIX: &str = ";; SERVER:";
pub(crate) const WHEN_PREFIX: &str = ";; WHEN:";
pub(crate) const MSG_SIZE_PREFIX: &str = ";; MSG SIZE  rcvd:";
pub(crate) const XFR_SIZE_PREFIX: &str = ";; XFR size:";
pub(crate) const QUERY_SIZE_PREFIX: &str = ";; QUERY SIZE:";

const EDNS_PREFIX: &str = "; EDNS:";
const COOKIE_PREFIX: &str = "; COOKIE:";

/// Parses `;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 4242`.
///
/// # Errors
///
/// Returns `ParseError::MalformedHeader` if the id token is missing.
pub fn parse_header(line: &str) -> Result<Header, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 8 {
        return Err(ParseError::MalformedHeader(line.to_string()));
    }

    Ok(Header {
        opcode: tokens[3].trim_end_matches(',').to_string(),
        status: tokens[5].trim_end_matches(',').to_string(),
        id: tokens[7].trim_end_matches(',').to_string(),
    })
}

/// Parses `;; flags: qr rd ra; QUERY: 1, ANSWER: 2, AUTHORITY: 0, ADDITIONAL: 1`.
///
/// The counter labels are not checked (update messages print ZONE/PREREQ/UPDATE
/// instead); only their positions are.
///
/// # Errors
///
/// Returns `ParseError::MalformedFlags` if the counters segment is missing,
/// truncated, or holds a non-numeric counter.
pub fn parse_flags(line: &str) -> Result<Flags, ParseError> {
    let body = line.trim_start_matches(';');
    let (flags_part, counts_part) = body
        .split_once(';')
        .ok_or_else(|| ParseError::flags(line, "missing counters segment"))?;

    let flags = flags_part
        .split_once(':')
        .map(|(_, rest)| rest)
        .ok_or_else(|| ParseError::flags(line, "missing flags label"))?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let tokens: Vec<&str> = counts_part.split_whitespace().collect();
    if tokens.len() < 8 {
        return Err(ParseError::flags(line, "expected four section counters"));
    }
    let counter = |index: usize| -> Result<u32, ParseError> {
        let token = tokens[index].trim_end_matches(',');
        token
            .parse::<u32>()
            .map_err(|_| ParseError::flags(line, format!("non-numeric counter '{token}'")))
    };

    Ok(Flags {
        flags,
        counts: SectionCounts {
            query: counter(1)?,
            answer: counter(3)?,
            authority: counter(5)?,
            additional: counter(7)?,
        },
    })
}

/// Parses one line of the OPT pseudosection.
///
/// Recognizes `; EDNS: version: 0, flags: do; udp: 1232` and
/// `; COOKIE: <hex> (good)`. Anything else (NSID, EDE, ...) is not a
/// pseudosection field and yields `None`.
pub fn parse_opt_pseudosection(line: &str) -> Option<OptPseudosection> {
    if line.starts_with(EDNS_PREFIX) {
        let normalized = line.replacen(',', " ", 1);
        let segments: Vec<&str> = normalized.split(';').collect();
        let first = segments.get(1)?;
        let udp_segment = segments.get(2..).and_then(|rest| rest.last())?;

        // EDNS: version: <v> flags: <flag>...
        let tokens: Vec<&str> = first.split_whitespace().collect();
        let version = tokens.get(2)?.to_string();
        let flags = if tokens.get(3).is_some_and(|t| t.starts_with("flags")) {
            tokens[4..].iter().map(|t| t.to_string()).collect()
        } else {
            Vec::new()
        };
        let udp_size = udp_segment
            .split_whitespace()
            .last()
            .unwrap_or_default()
            .to_string();

        return Some(OptPseudosection::Edns(EdnsInfo {
            version,
            flags,
            udp_size,
        }));
    }

    if line.starts_with(COOKIE_PREFIX) {
        return line
            .split_whitespace()
            .nth(2)
            .map(|cookie| OptPseudosection::Cookie(cookie.to_string()));
    }

    None
}

/// Parses a question line such as `;example.com.  IN  A`.
///
/// # Errors
///
/// Returns `ParseError::MalformedRecord` if the type token is missing.
pub fn parse_question(line: &str) -> Result<Question, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::record(line, "question needs name, class and type"));
    }

    Ok(Question {
        name: tokens[0].trim_start_matches(';').to_string(),
        record_type: tokens[2].to_string(),
    })
}

/// Parses an answer, authority or additional record line.
///
/// Layout is `name ttl class type data...`. The class is dropped, data tokens
/// are re-joined with single spaces and one enclosing pair of double quotes is
/// removed. MX data is split into priority and exchange host.
///
/// # Errors
///
/// Returns `ParseError::MalformedRecord` if fewer than four tokens are present,
/// or if MX data lacks a numeric priority.
pub fn parse_record(line: &str) -> Result<ResourceRecord, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(ParseError::record(line, "record needs name, ttl, class and type"));
    }

    let name = tokens[0].to_string();
    let ttl = tokens[1].to_string();
    let record_type = tokens[3].to_string();
    let joined = tokens[4..].join(" ");
    let data = strip_quotes(&joined);

    if record_type.eq_ignore_ascii_case("MX") {
        let (priority, host) = data
            .split_once(' ')
            .ok_or_else(|| ParseError::record(line, "MX data without priority"))?;
        let priority = priority
            .parse::<u16>()
            .map_err(|_| ParseError::record(line, format!("non-numeric MX priority '{priority}'")))?;

        return Ok(ResourceRecord {
            name,
            ttl,
            record_type,
            data: host.to_string(),
            priority: Some(priority),
            ..Default::default()
        });
    }

    Ok(ResourceRecord {
        name,
        ttl,
        record_type,
        data: data.to_string(),
        ..Default::default()
    })
}

/// Parses a zone-transfer line positionally: name, ttl, class, type, data.
///
/// Only the first five tokens are read, so data with embedded whitespace is
/// truncated to its first word.
///
/// # Errors
///
/// Returns `ParseError::MalformedRecord` for lines with fewer than five tokens
/// or a non-numeric TTL.
pub fn parse_axfr_record(line: &str) -> Result<AxfrRecord, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().take(5).collect();
    if tokens.len() < 5 {
        return Err(ParseError::record(line, "zone transfer line needs five fields"));
    }
    let ttl = tokens[1]
        .parse::<u32>()
        .map_err(|_| ParseError::record(line, format!("non-numeric TTL '{}'", tokens[1])))?;

    Ok(AxfrRecord {
        name: tokens[0].to_string(),
        ttl,
        record_type: tokens[3].to_string(),
        data: tokens[4].to_string(),
    })
}

/// Extracts the value of a footer line, or `None` if the line is not one.
pub fn parse_footer(line: &str) -> Option<FooterField> {
    let value = || {
        line.split_once(':')
            .map(|(_, rest)| rest.trim().to_string())
            .unwrap_or_default()
    };

    if line.starts_with(QUERY_TIME_PREFIX) {
        Some(FooterField::QueryTime(value()))
    } else if line.starts_with(SERVER_PREFIX) {
        Some(FooterField::Server(value()))
    } else if line.starts_with(WHEN_PREFIX) {
        Some(FooterField::When(value()))
    } else if line.starts_with(MSG_SIZE_PREFIX) {
        Some(FooterField::Rcvd(value()))
    } else if line.starts_with(XFR_SIZE_PREFIX) {
        Some(FooterField::XfrSize(value()))
    } else if line.starts_with(QUERY_SIZE_PREFIX) {
        Some(FooterField::QuerySize(value()))
    } else {
        None
    }
}

fn strip_quotes(data: &str) -> &str {
    if data.len() >= 2 && data.starts_with('"') && data.ends_with('"') {
        &data[1..data.len() - 1]
    } else {
        data
    }
}
