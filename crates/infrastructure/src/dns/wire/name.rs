//! Domain name <-> label sequence (RFC 1035 §3.1).

use super::reader::WireReader;
use bytes::BufMut;
use minidns_domain::domain_name::MAX_DOMAIN_LEN;
use minidns_domain::{validate_domain_name, DomainError};

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_TYPE: u8 = 0xC0;

/// Encodes `domain` as `[len][label]...[0x00]`.
pub fn encode_name(domain: &str) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(domain.len() + 2);
    write_name(domain, &mut buf)?;
    Ok(buf)
}

/// Appends the encoded form of `domain` to `out`. Nothing is written when
/// the name is rejected.
pub fn write_name<B: BufMut>(domain: &str, out: &mut B) -> Result<(), DomainError> {
    let name = validate_domain_name(domain)?;

    for label in name.split('.') {
        out.put_u8(label.len() as u8);
        out.put_slice(label.as_bytes());
    }
    out.put_u8(0);

    Ok(())
}

/// Decodes the name starting at `offset`.
///
/// Returns the dotted name (no trailing dot) and the number of bytes
/// consumed, terminator included.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut reader = WireReader::at(buf, offset)?;
    let name = read_name(&mut reader)?;
    Ok((name, reader.position() - offset))
}

/// Reads an uncompressed name at the reader's position.
///
/// Compression pointers are refused with
/// [`DomainError::UnsupportedCompression`]; they never appear in the
/// question of a client-generated query.
pub fn read_name(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    let mut name = String::new();

    loop {
        let offset = reader.position();
        let len = reader.read_u8()?;

        match len & LABEL_TYPE_MASK {
            0 => {}
            POINTER_TYPE => return Err(DomainError::UnsupportedCompression { offset }),
            _ => {
                return Err(DomainError::InvalidLabel(format!(
                    "reserved label type {:#04x} at offset {}",
                    len, offset
                )))
            }
        }

        if len == 0 {
            return Ok(name);
        }

        let label = reader.read_bytes(len as usize)?;
        if !label.is_ascii() {
            return Err(DomainError::InvalidLabel(format!(
                "non-ASCII label at offset {}",
                offset
            )));
        }

        let separator = usize::from(!name.is_empty());
        if name.len() + separator + label.len() > MAX_DOMAIN_LEN {
            return Err(DomainError::InvalidLabel(format!(
                "decoded name exceeds {} bytes",
                MAX_DOMAIN_LEN
            )));
        }

        if separator == 1 {
            name.push('.');
        }
        // ASCII was checked above, so every byte is a char.
        name.extend(label.iter().map(|&b| b as char));
    }
}
