//! Section state machine.
//!
//! Folds the non-blank lines of one `dig` invocation into parsed responses.
//! Each line is first classified into a [`Fragment`] against the current
//! section, then merged into the builder; only marker lines move the section.

use crate::error_handling::ParseError;

use super::records::{
    parse_axfr_record, parse_flags, parse_footer, parse_header, parse_opt_pseudosection,
    parse_question, parse_record,
};
use super::types::{
    AxfrRecord, Flags, FooterField, Header, OptPseudosection, ParsedResponse, Question,
    ResourceRecord, Section,
};

const HEADER_PREFIX: &str = ";; ->>HEADER<<-";
const FLAGS_PREFIX: &str = ";; flags:";
const GOT_ANSWER_PREFIX: &str = ";; Got answer:";
const BANNER_PREFIX: &str = "; <<>> ";
const COMMENT_PREFIX: char = ';';

const SECTION_MARKERS: &[(&str, Section)] = &[
    (";; OPT PSEUDOSECTION:", Section::OptPseudosection),
    (";; QUESTION SECTION:", Section::Question),
    (";; ANSWER SECTION:", Section::Answer),
    (";; AUTHORITY SECTION:", Section::Authority),
    (";; ADDITIONAL SECTION:", Section::Additional),
];

/// What a single line contributes to the response being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fragment {
    Header(Header),
    Flags(Flags),
    SectionSwitched(Section),
    RecordAppended(Section, ResourceRecord),
    AxfrAppended(AxfrRecord),
    Question(Question),
    Pseudosection(OptPseudosection),
    Footer(FooterField),
    Ignored,
}

/// Classifies one line given the section it appears in.
///
/// Content seen before any marker is read as an answer record so that
/// minimal output without section headers still parses.
pub(crate) fn classify(line: &str, section: Option<Section>) -> Result<Fragment, ParseError> {
    if line.starts_with(GOT_ANSWER_PREFIX) {
        return Ok(Fragment::Ignored);
    }
    if is_axfr_banner(line) {
        return Ok(Fragment::SectionSwitched(Section::Axfr));
    }
    if line.starts_with(HEADER_PREFIX) {
        return parse_header(line).map(Fragment::Header);
    }
    if line.starts_with(FLAGS_PREFIX) {
        return parse_flags(line).map(Fragment::Flags);
    }
    if let Some(&(_, section)) = SECTION_MARKERS
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
    {
        return Ok(Fragment::SectionSwitched(section));
    }
    if let Some(field) = parse_footer(line) {
        return Ok(Fragment::Footer(field));
    }

    classify_content(line, section.unwrap_or(Section::Answer))
}

fn classify_content(line: &str, section: Section) -> Result<Fragment, ParseError> {
    let is_comment = line.starts_with(COMMENT_PREFIX);

    match section {
        Section::Answer | Section::Authority | Section::Additional => {
            if is_comment {
                return Ok(Fragment::Ignored);
            }
            parse_record(line).map(|record| Fragment::RecordAppended(section, record))
        }
        Section::Axfr => {
            if is_comment {
                return Ok(Fragment::Ignored);
            }
            parse_axfr_record(line).map(Fragment::AxfrAppended)
        }
        // Question lines carry a single leading ';'
        Section::Question => {
            if line.starts_with(";;") {
                return Ok(Fragment::Ignored);
            }
            parse_question(line).map(Fragment::Question)
        }
        Section::OptPseudosection => Ok(parse_opt_pseudosection(line)
            .map(Fragment::Pseudosection)
            .unwrap_or(Fragment::Ignored)),
        // footer values arrive on their own marker lines
        Section::Footer => Ok(Fragment::Ignored),
        Section::Header | Section::Flags => {
            if is_comment {
                return Ok(Fragment::Ignored);
            }
            Err(ParseError::UnrecognizedSection(line.to_string()))
        }
    }
}

fn is_axfr_banner(line: &str) -> bool {
    line.starts_with(BANNER_PREFIX)
        && line
            .split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("axfr"))
}

/// One HEADER-delimited block under construction.
#[derive(Debug, Default)]
struct BlockBuilder {
    header: Option<Header>,
    response: ParsedResponse,
}

impl BlockBuilder {
    fn finish(self) -> Result<ParsedResponse, ParseError> {
        let header = self.header.ok_or(ParseError::NoHeaderFound)?;
        Ok(ParsedResponse {
            header,
            ..self.response
        })
    }
}

/// Accumulator threaded through the line fold.
#[derive(Debug, Default)]
pub(crate) struct ResponseFold {
    section: Option<Section>,
    axfr_mode: bool,
    current: BlockBuilder,
    completed: Vec<ParsedResponse>,
}

impl ResponseFold {
    pub(crate) fn section(&self) -> Option<Section> {
        self.section
    }

    pub(crate) fn apply(mut self, fragment: Fragment) -> Result<Self, ParseError> {
        let response = &mut self.current.response;
        match fragment {
            Fragment::Header(header) => {
                // a second header starts the next block; lines before the
                // first header belong to the first block
                if self.current.header.is_some() {
                    let finished = std::mem::take(&mut self.current).finish()?;
                    self.completed.push(finished);
                }
                self.current.header = Some(header);
                self.section = Some(Section::Header);
            }
            Fragment::Flags(flags) => {
                response.flags = flags.flags;
                response.counts = Some(flags.counts);
                self.section = Some(Section::Flags);
            }
            Fragment::SectionSwitched(section) => {
                match section {
                    Section::Answer => response.answer.clear(),
                    Section::Authority => response.authority.clear(),
                    Section::Additional => response.additional.clear(),
                    Section::Axfr => {
                        response.axfr.clear();
                        self.axfr_mode = true;
                    }
                    _ => {}
                }
                self.section = Some(section);
            }
            Fragment::RecordAppended(section, record) => match section {
                Section::Authority => response.authority.push(record),
                Section::Additional => response.additional.push(record),
                _ => response.answer.push(record),
            },
            Fragment::AxfrAppended(record) => response.axfr.push(record),
            Fragment::Question(question) => response.question = Some(question),
            Fragment::Pseudosection(OptPseudosection::Edns(edns)) => response.edns = Some(edns),
            Fragment::Pseudosection(OptPseudosection::Cookie(cookie)) => {
                response.cookie = Some(cookie)
            }
            Fragment::Footer(field) => {
                // with +qr the query size line closes the echoed query; in a
                // zone transfer the records follow it
                match field {
                    FooterField::QuerySize(_) if self.axfr_mode => {
                        self.section = Some(Section::Axfr)
                    }
                    FooterField::QuerySize(_) => {}
                    _ => self.section = Some(Section::Footer),
                }
                response.footer.set(field);
            }
            Fragment::Ignored => {}
        }
        Ok(self)
    }

    pub(crate) fn finish(mut self) -> Result<Vec<ParsedResponse>, ParseError> {
        let last = self.current.finish()?;
        self.completed.push(last);
        Ok(self.completed)
    }
}

/// Parses every HEADER-delimited block of `dig` output, in input order.
///
/// Output produced with `+qr` holds the query message followed by the reply;
/// both are returned.
///
/// # Errors
///
/// Returns the first fatal [`ParseError`]: a malformed header, flags or
/// record line, a content line outside any record section, or
/// `NoHeaderFound` when no `;; ->>HEADER<<-` line exists.
pub fn parse_dig_all(text: &str) -> Result<Vec<ParsedResponse>, ParseError> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .try_fold(ResponseFold::default(), |fold, line| {
            let fragment = classify(line, fold.section())?;
            fold.apply(fragment)
        })?
        .finish()
}

/// Parses the output of one `dig` invocation into a single response.
///
/// When the output holds several blocks the final one (the reply) is
/// returned; use [`parse_dig_all`] to keep the others.
///
/// # Errors
///
/// Same as [`parse_dig_all`].
pub fn parse_dig(text: &str) -> Result<ParsedResponse, ParseError> {
    let mut blocks = parse_dig_all(text)?;
    if blocks.len() > 1 {
        log::debug!(
            "dig output held {} blocks; returning the last and skipping {}",
            blocks.len(),
            blocks.len() - 1
        );
    }
    blocks.pop().ok_or(ParseError::NoHeaderFound)
}
