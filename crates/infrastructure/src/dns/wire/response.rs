use super::header::{read_header, set_answer_count, set_flags};
use super::reader::WireReader;
use bytes::BufMut;
use minidns_domain::dns_message::{
    A_RECORD_LEN, ANSWER_TTL, CLASS_IN, FLAGS_NAME_ERROR, FLAGS_RESPONSE_OK, HEADER_LEN,
    IPV4_RDATA_LEN, MAX_UDP_MESSAGE_SIZE, QUESTION_NAME_POINTER, TYPE_A,
};
use minidns_domain::DomainError;
use std::net::Ipv4Addr;

/// Pointer, type, class and TTL: the part of an answer skipped before
/// RDLENGTH.
const RECORD_PREFIX_LEN: usize = 2 + 2 + 2 + 4;

/// Builds the reply to `query`, the full datagram as received.
///
/// * No addresses: the query echoed back with flags `0x8183` (NXDOMAIN).
/// * Otherwise: the query with flags `0x8180` and ANCOUNT set, followed by
///   one A record per address, in order, each naming the question through
///   the pointer `0xC00C`.
///
/// The pointer is only valid because the question name of a query always
/// starts at offset 12, right after the header.
pub fn build_response(query: &[u8], addresses: &[Ipv4Addr]) -> Result<Vec<u8>, DomainError> {
    if query.len() < HEADER_LEN {
        return Err(DomainError::TruncatedMessage {
            offset: 0,
            needed: HEADER_LEN,
            available: query.len(),
        });
    }

    if addresses.is_empty() {
        let mut response = query.to_vec();
        set_flags(&mut response, FLAGS_NAME_ERROR)?;
        return Ok(response);
    }

    let size = query.len() + A_RECORD_LEN * addresses.len();
    if size > MAX_UDP_MESSAGE_SIZE {
        return Err(DomainError::MessageTooLarge {
            size,
            limit: MAX_UDP_MESSAGE_SIZE,
        });
    }
    // Bounded by the size check above.
    let answer_count = addresses.len() as u16;

    let mut response = Vec::with_capacity(size);
    response.extend_from_slice(query);
    set_flags(&mut response, FLAGS_RESPONSE_OK)?;
    set_answer_count(&mut response, answer_count)?;

    for address in addresses {
        response.put_u16(QUESTION_NAME_POINTER);
        response.put_u16(TYPE_A);
        response.put_u16(CLASS_IN);
        response.put_u32(ANSWER_TTL);
        response.put_u16(IPV4_RDATA_LEN);
        response.put_slice(&address.octets());
    }

    Ok(response)
}

/// Extracts the addresses of a reply produced by [`build_response`].
///
/// `query_len` is the length of the query that was sent; the reply echoes
/// it, so the answer section starts there. Each record is expected to use
/// the 2-byte name pointer and carry a 4-byte address; this is not a general
/// resource record parser.
pub fn parse_response(message: &[u8], query_len: usize) -> Result<Vec<Ipv4Addr>, DomainError> {
    let header = read_header(&mut WireReader::new(message))?;
    if header.answer_count == 0 {
        return Ok(Vec::new());
    }

    let mut reader = WireReader::at(message, query_len)?;
    let mut addresses = Vec::with_capacity(header.answer_count as usize);

    for index in 0..header.answer_count {
        reader.skip(RECORD_PREFIX_LEN)?;

        let rdlength = reader.read_u16()?;
        if rdlength != IPV4_RDATA_LEN {
            return Err(DomainError::InvalidResponse(format!(
                "answer {} has RDLENGTH {}, expected {}",
                index, rdlength, IPV4_RDATA_LEN
            )));
        }

        addresses.push(Ipv4Addr::from(reader.read_array::<4>()?));
    }

    Ok(addresses)
}
