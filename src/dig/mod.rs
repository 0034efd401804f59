//! Parsing of `dig` textual output.
//!
//! This module turns the human-oriented output of one `dig` invocation into a
//! [`ParsedResponse`]:
//! - Line parsers for the header, flags, OPT pseudosection, question,
//!   resource records, zone-transfer records and footer
//! - A section state machine that routes each line to the right parser
//!
//! Parsing is a pure fold over the input lines; nothing here performs I/O.

mod records;
mod section;
mod types;

// Re-export public API
pub use records::{
    parse_axfr_record, parse_flags, parse_footer, parse_header, parse_opt_pseudosection,
    parse_question, parse_record,
};
pub use section::{parse_dig, parse_dig_all};
pub use types::{
    AsnInfo, AxfrRecord, EdnsInfo, Flags, Footer, FooterField, Header, OptPseudosection,
    ParsedResponse, Question, ResourceRecord, Section, SectionCounts,
};
