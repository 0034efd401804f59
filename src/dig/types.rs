//! Structured representation of one `dig` invocation's output.
//!
//! Every type here serializes with camelCase keys so the JSON handed to the
//! boundary layer matches what UI code expects.

use serde::Serialize;

/// Section of `dig` output the state machine is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Banner lines before and including `;; ->>HEADER<<-`.
    Header,
    /// The `;; flags:` line.
    Flags,
    /// `;; OPT PSEUDOSECTION:`
    OptPseudosection,
    /// `;; QUESTION SECTION:`
    Question,
    /// `;; ANSWER SECTION:`
    Answer,
    /// `;; AUTHORITY SECTION:`
    Authority,
    /// `;; ADDITIONAL SECTION:`
    Additional,
    /// Records listed by a zone transfer.
    Axfr,
    /// Trailing statistics lines.
    Footer,
}

/// Fields from the `;; ->>HEADER<<-` line.
///
/// `status` is kept verbatim (`NOERROR`, `NXDOMAIN`, ...) and is not checked
/// against the set of known response codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Message ID.
    pub id: String,
    /// `QUERY`, `NOTIFY`, ...
    pub opcode: String,
    /// Response code.
    pub status: String,
}

/// Section counters as reported on the `;; flags:` line.
///
/// These are what the tool claims, not the lengths of the parsed lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCounts {
    /// `QUERY:` count.
    pub query: u32,
    /// `ANSWER:` count.
    pub answer: u32,
    /// `AUTHORITY:` count.
    pub authority: u32,
    /// `ADDITIONAL:` count.
    pub additional: u32,
}

/// Contents of the `;; flags:` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Header flags in printed order (`qr`, `rd`, ...).
    pub flags: Vec<String>,
    /// Section counters from the same line.
    pub counts: SectionCounts,
}

/// EDNS information from the OPT pseudosection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdnsInfo {
    /// EDNS version.
    pub version: String,
    /// EDNS flags such as `do`. Empty when none are set.
    pub flags: Vec<String>,
    /// Advertised UDP payload size.
    pub udp_size: String,
}

/// One recognized line of the OPT pseudosection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptPseudosection {
    /// `; EDNS: version: 0, flags:; udp: 1232`
    Edns(EdnsInfo),
    /// `; COOKIE: <hex>`, kept verbatim.
    Cookie(String),
}

/// The question that was asked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Queried name as printed, with its trailing dot.
    pub name: String,
    /// Queried record type.
    #[serde(rename = "type")]
    pub record_type: String,
}

/// ASN metadata attached to an address record by the enrichment pipeline.
///
/// Fields are empty strings when the registry reply was absent or short.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsnInfo {
    /// Origin AS number without the `AS` prefix.
    pub asn: String,
    /// Country code of the allocation.
    pub country: String,
    /// Regional registry (`arin`, `ripencc`, ...).
    pub registry: String,
    /// Allocation date.
    pub date: String,
    /// AS name.
    pub description: String,
}

/// An answer, authority or additional record.
///
/// `ttl` stays a string: depending on whether the server is authoritative the
/// tool prints either the configured TTL or a live countdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Owner name.
    pub name: String,
    /// TTL as printed.
    pub ttl: String,
    /// Record type (`A`, `MX`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record data. TXT quotes are stripped and MX data excludes the priority.
    pub data: String,
    /// MX preference, only set for MX records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// Reverse-lookup hostname, only ever set on A/AAAA records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptr: Option<String>,
    /// Origin ASN metadata, only ever set on A/AAAA records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<AsnInfo>,
}

impl ResourceRecord {
    /// Whether this record carries an address that enrichment applies to.
    pub fn is_address(&self) -> bool {
        self.record_type.eq_ignore_ascii_case("A") || self.record_type.eq_ignore_ascii_case("AAAA")
    }
}

/// A record listed by a zone transfer.
///
/// Strictly positional: `data` is only the fifth whitespace token, so record
/// data containing spaces (SOA, TXT, MX) is truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxfrRecord {
    /// Owner name.
    pub name: String,
    /// TTL in seconds.
    pub ttl: u32,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Fifth token of the line.
    pub data: String,
}

/// Trailing statistics lines. Each is optional because not every invocation
/// prints every line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    /// `;; Query time:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_time: Option<String>,
    /// `;; SERVER:`, replaced by the selected server after a lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// `;; WHEN:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    /// `;; MSG SIZE  rcvd:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcvd: Option<String>,
    /// `;; XFR size:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xfr_size: Option<String>,
    /// `;; QUERY SIZE:`, only printed with `+qr`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_size: Option<String>,
}

/// A single footer line's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterField {
    /// See [`Footer::query_time`].
    QueryTime(String),
    /// See [`Footer::server`].
    Server(String),
    /// See [`Footer::when`].
    When(String),
    /// See [`Footer::rcvd`].
    Rcvd(String),
    /// See [`Footer::xfr_size`].
    XfrSize(String),
    /// See [`Footer::query_size`].
    QuerySize(String),
}

impl Footer {
    pub(crate) fn set(&mut self, field: FooterField) {
        match field {
            FooterField::QueryTime(v) => self.query_time = Some(v),
            FooterField::Server(v) => self.server = Some(v),
            FooterField::When(v) => self.when = Some(v),
            FooterField::Rcvd(v) => self.rcvd = Some(v),
            FooterField::XfrSize(v) => self.xfr_size = Some(v),
            FooterField::QuerySize(v) => self.query_size = Some(v),
        }
    }
}

/// The structured result of parsing one HEADER-delimited block of `dig` output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResponse {
    /// Header fields, flattened into the top-level JSON object.
    #[serde(flatten)]
    pub header: Header,
    /// Header flags.
    pub flags: Vec<String>,
    /// Section counters, when a flags line was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<SectionCounts>,
    /// EDNS line of the OPT pseudosection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edns: Option<EdnsInfo>,
    /// Cookie line of the OPT pseudosection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
    /// Question section entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    /// Answer section records.
    pub answer: Vec<ResourceRecord>,
    /// Authority section records.
    pub authority: Vec<ResourceRecord>,
    /// Additional section records.
    pub additional: Vec<ResourceRecord>,
    /// Zone transfer records.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub axfr: Vec<AxfrRecord>,
    /// Footer fields, flattened into the top-level JSON object.
    #[serde(flatten)]
    pub footer: Footer,
}
