use minidns_domain::dns_message::{
    A_RECORD_LEN, FLAGS_NAME_ERROR, FLAGS_RESPONSE_OK, FLAGS_STANDARD_QUERY,
    QUESTION_NAME_POINTER,
};
use minidns_domain::MessageHeader;

#[test]
fn test_query_header_defaults() {
    let header = MessageHeader::query(0x1234);
    assert_eq!(header.id, 0x1234);
    assert_eq!(header.flags, FLAGS_STANDARD_QUERY);
    assert_eq!(header.question_count, 1);
    assert_eq!(header.answer_count, 0);
    assert_eq!(header.authority_count, 0);
    assert_eq!(header.additional_count, 0);
    assert!(!header.is_response());
}

#[test]
fn test_response_flags_interpretation() {
    let ok = MessageHeader {
        flags: FLAGS_RESPONSE_OK,
        ..MessageHeader::default()
    };
    assert!(ok.is_response());
    assert_eq!(ok.response_code(), 0);
    assert!(!ok.is_name_error());

    let nx = MessageHeader {
        flags: FLAGS_NAME_ERROR,
        ..MessageHeader::default()
    };
    assert!(nx.is_response());
    assert_eq!(nx.response_code(), 3);
    assert!(nx.is_name_error());
}

#[test]
fn test_answer_layout_constants() {
    assert_eq!(QUESTION_NAME_POINTER, 0xC00C);
    assert_eq!(A_RECORD_LEN, 16);
}
