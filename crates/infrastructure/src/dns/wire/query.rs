use super::header::{read_header, write_header};
use super::name::{read_name, write_name};
use super::reader::WireReader;
use bytes::BufMut;
use minidns_domain::dns_message::{CLASS_IN, HEADER_LEN, TYPE_A};
use minidns_domain::{DomainError, MessageHeader, ParsedQuery};

const QUESTION_TAIL_LEN: usize = 4;

/// Builds a standard A/IN query for `domain`.
///
/// The length of the returned message is also the offset of the answer
/// section in the server's reply, which echoes the question verbatim.
pub fn build_query(id: u16, domain: &str) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(HEADER_LEN + domain.len() + 2 + QUESTION_TAIL_LEN);

    write_header(&MessageHeader::query(id), &mut buf);
    write_name(domain, &mut buf)?;
    buf.put_u16(TYPE_A);
    buf.put_u16(CLASS_IN);

    Ok(buf)
}

/// Extracts the question of an inbound query.
///
/// The question name must start right after the header and must not be
/// compressed. Counts other than the header's are not inspected.
pub fn parse_query(message: &[u8]) -> Result<ParsedQuery, DomainError> {
    let mut reader = WireReader::new(message);

    let header = read_header(&mut reader)?;
    let domain = read_name(&mut reader)?;
    let qtype = reader.read_u16()?;
    let qclass = reader.read_u16()?;

    Ok(ParsedQuery {
        id: header.id,
        flags: header.flags,
        domain,
        qtype,
        qclass,
        question_end: reader.position(),
    })
}
