use super::reader::WireReader;
use bytes::BufMut;
use minidns_domain::dns_message::HEADER_LEN;
use minidns_domain::{DomainError, MessageHeader};

const FLAGS_OFFSET: usize = 2;
const ANCOUNT_OFFSET: usize = 6;

pub fn encode_header(header: &MessageHeader) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    write_header(header, &mut &mut buf[..]);
    buf
}

pub fn write_header<B: BufMut>(header: &MessageHeader, out: &mut B) {
    out.put_u16(header.id);
    out.put_u16(header.flags);
    out.put_u16(header.question_count);
    out.put_u16(header.answer_count);
    out.put_u16(header.authority_count);
    out.put_u16(header.additional_count);
}

pub fn decode_header(buf: &[u8]) -> Result<MessageHeader, DomainError> {
    read_header(&mut WireReader::new(buf))
}

pub fn read_header(reader: &mut WireReader<'_>) -> Result<MessageHeader, DomainError> {
    if reader.remaining() < HEADER_LEN {
        return Err(DomainError::TruncatedMessage {
            offset: reader.position(),
            needed: HEADER_LEN,
            available: reader.remaining(),
        });
    }

    Ok(MessageHeader {
        id: reader.read_u16()?,
        flags: reader.read_u16()?,
        question_count: reader.read_u16()?,
        answer_count: reader.read_u16()?,
        authority_count: reader.read_u16()?,
        additional_count: reader.read_u16()?,
    })
}

/// Overwrites the flags field of an encoded message in place.
pub fn set_flags(message: &mut [u8], flags: u16) -> Result<(), DomainError> {
    patch_u16(message, FLAGS_OFFSET, flags)
}

/// Overwrites the answer count of an encoded message in place.
pub fn set_answer_count(message: &mut [u8], count: u16) -> Result<(), DomainError> {
    patch_u16(message, ANCOUNT_OFFSET, count)
}

fn patch_u16(message: &mut [u8], offset: usize, value: u16) -> Result<(), DomainError> {
    if message.len() < HEADER_LEN {
        return Err(DomainError::TruncatedMessage {
            offset: 0,
            needed: HEADER_LEN,
            available: message.len(),
        });
    }
    message[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
    Ok(())
}
