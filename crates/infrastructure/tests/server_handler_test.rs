use minidns_infrastructure::dns::wire::{build_query, decode_header, encode_name, parse_response};
use std::net::{Ipv4Addr, SocketAddr};

mod helpers;
use helpers::handler_with;

const GOOGLE: [Ipv4Addr; 2] = [Ipv4Addr::new(8, 8, 8, 8), Ipv4Addr::new(8, 8, 4, 4)];

fn client() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

#[test]
fn test_known_domain_is_answered() {
    let handler = handler_with(&[("google.com", &GOOGLE[..])]);
    let query = build_query(0x1111, "google.com").unwrap();

    let response = handler.handle_datagram(&query, client()).unwrap();

    let header = decode_header(&response).unwrap();
    assert_eq!(header.id, 0x1111);
    assert_eq!(header.flags, 0x8180);
    assert_eq!(header.answer_count, 2);
    assert_eq!(parse_response(&response, query.len()).unwrap(), GOOGLE.to_vec());
}

#[test]
fn test_www_prefix_is_normalized() {
    let handler = handler_with(&[("google.com", &GOOGLE[..])]);
    let query = build_query(1, "www.google.com").unwrap();

    let response = handler.handle_datagram(&query, client()).unwrap();

    assert_eq!(decode_header(&response).unwrap().answer_count, 2);
    // The question still names what the client asked for.
    assert_eq!(&response[12..query.len()], &query[12..]);
}

#[test]
fn test_unknown_domain_gets_nxdomain() {
    let handler = handler_with(&[("google.com", &GOOGLE[..])]);
    let query = build_query(2, "nope.test").unwrap();

    let response = handler.handle_datagram(&query, client()).unwrap();

    assert_eq!(response.len(), query.len());
    assert_eq!(decode_header(&response).unwrap().flags, 0x8183);
}

#[test]
fn test_non_a_question_answered_from_table() {
    let handler = handler_with(&[("google.com", &GOOGLE[..])]);
    let mut query = build_query(3, "google.com").unwrap();
    // QTYPE = AAAA
    let qtype_at = query.len() - 4;
    query[qtype_at..qtype_at + 2].copy_from_slice(&28u16.to_be_bytes());

    let response = handler.handle_datagram(&query, client()).unwrap();

    assert_eq!(decode_header(&response).unwrap().answer_count, 2);
}

#[test]
fn test_garbage_is_dropped() {
    let handler = handler_with(&[("google.com", &GOOGLE[..])]);

    assert!(handler.handle_datagram(&[], client()).is_none());
    assert!(handler.handle_datagram(&[0xFF; 5], client()).is_none());

    let query = build_query(4, "google.com").unwrap();
    assert!(handler.handle_datagram(&query[..20], client()).is_none());
}

#[test]
fn test_responses_are_not_answered() {
    let handler = handler_with(&[("google.com", &GOOGLE[..])]);
    let query = build_query(5, "google.com").unwrap();
    let response = handler.handle_datagram(&query, client()).unwrap();

    assert!(handler.handle_datagram(&response, client()).is_none());
}

#[test]
fn test_reply_over_size_limit_is_dropped() {
    let many: Vec<Ipv4Addr> = (0..40).map(|i| Ipv4Addr::new(10, 0, 0, i)).collect();
    let handler = handler_with(&[("big.test", many.as_slice())]);
    let query = build_query(6, "big.test").unwrap();

    assert!(handler.handle_datagram(&query, client()).is_none());
}

#[test]
fn test_trailing_bytes_are_echoed() {
    let handler = handler_with(&[("google.com", &GOOGLE[..])]);
    let mut query = build_query(7, "google.com").unwrap();
    let query_len = query.len();
    query.extend_from_slice(&encode_name("extra").unwrap());

    let response = handler.handle_datagram(&query, client()).unwrap();

    assert_eq!(response.len(), query.len() + 32);
    assert_eq!(&response[query_len..query.len()], &query[query_len..]);
}
