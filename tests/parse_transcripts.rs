//! Parsing of real dig transcripts through the public API.

mod helpers;

use dig_inspect::{parse_dig, parse_dig_all, OptPseudosection, ParseError};
use helpers::fixture;

#[test]
fn test_any_query_full_structure() {
    let response = parse_dig(&fixture("example_any.txt")).unwrap();

    assert_eq!(response.header.id, "4242");
    assert_eq!(response.header.status, "NOERROR");
    assert_eq!(response.flags, vec!["qr", "aa", "rd", "ra", "ad"]);

    let edns = response.edns.as_ref().unwrap();
    assert_eq!(edns.flags, vec!["do"]);
    assert_eq!(edns.udp_size, "1232");

    let types: Vec<&str> = response
        .answer
        .iter()
        .map(|r| r.record_type.as_str())
        .collect();
    assert_eq!(types, vec!["A", "AAAA", "MX", "TXT", "NS", "SOA"]);

    let mx = &response.answer[2];
    assert_eq!(mx.priority, Some(10));
    assert_eq!(mx.data, "mail.example.org.");
    assert_eq!(response.answer[3].data, "v=spf1 -all");

    assert_eq!(response.authority.len(), 1);
    assert_eq!(response.additional.len(), 2);
    assert_eq!(response.additional[1].data, "2001:500:8d::53");
    assert!(response.footer.server.as_deref().unwrap().starts_with("1.1.1.1"));

    // freshly parsed records never carry enrichment
    assert!(response
        .answer
        .iter()
        .all(|r| r.ptr.is_none() && r.asn.is_none()));
}

#[test]
fn test_nxdomain() {
    let response = parse_dig(&fixture("nxdomain.txt")).unwrap();

    assert_eq!(response.header.status, "NXDOMAIN");
    assert!(response.answer.is_empty());
    assert_eq!(response.authority[0].record_type, "SOA");
    assert_eq!(response.question.unwrap().name, "nothing-here.example.com.");
}

#[test]
fn test_zone_transfer_records_are_truncated() {
    let response = parse_dig(&fixture("axfr_qr.txt")).unwrap();

    assert_eq!(response.axfr.len(), 6);
    assert_eq!(response.axfr[0].record_type, "SOA");
    assert_eq!(response.axfr[0].data, "nsztm1.digi.ninja.");
    assert_eq!(response.axfr[2].data, "0");
    assert_eq!(response.axfr[3].ttl, 7200);
    assert_eq!(response.footer.query_size.as_deref(), Some("56"));
    assert!(response.footer.xfr_size.as_deref().unwrap().starts_with("6 records"));
}

#[test]
fn test_qr_output_blocks() {
    let text = fixture("qr_example_net.txt");

    let blocks = parse_dig_all(&text).unwrap();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].answer.is_empty());
    assert_eq!(blocks[0].footer.query_size.as_deref(), Some("52"));

    let reply = parse_dig(&text).unwrap();
    assert_eq!(reply, blocks[1]);
    assert_eq!(reply.answer[0].data, "93.184.215.24");
}

#[test]
fn test_cookie_and_edns_are_kept_separately() {
    let text = fixture("example_a.txt");
    let edns = text
        .lines()
        .find(|l| l.starts_with("; EDNS"))
        .and_then(dig_inspect::parse_opt_pseudosection);
    assert!(matches!(edns, Some(OptPseudosection::Edns(_))));

    let response = parse_dig(&text).unwrap();
    assert!(response.edns.is_some());
    assert!(response.cookie.is_some());
}

#[test]
fn test_error_output_is_rejected() {
    let text = "; <<>> DiG 9.18.18 <<>> example.invalid\n\
                ;; global options: +cmd\n\
                ;; connection timed out; no servers could be reached\n";
    assert_eq!(parse_dig(text), Err(ParseError::NoHeaderFound));
}

#[test]
fn test_json_shape() {
    let response = parse_dig(&fixture("example_any.txt")).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    // header and footer fields sit at the top level
    assert_eq!(json["id"], "4242");
    assert_eq!(json["status"], "NOERROR");
    assert_eq!(json["edns"]["udpSize"], "1232");
    assert_eq!(json["answer"][2]["type"], "MX");
    assert_eq!(json["answer"][2]["priority"], 10);
    assert!(json["answer"][0].get("ptr").is_none());
    assert!(json.get("axfr").is_none());
}
