use minidns_domain::DomainError;

/// Bounds-checked cursor over a received message.
///
/// Every read either returns data from inside the buffer and advances the
/// position, or fails with [`DomainError::TruncatedMessage`] and leaves the
/// position where it was.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Starts reading at `offset`, which may not lie past the end.
    pub fn at(buf: &'a [u8], offset: usize) -> Result<Self, DomainError> {
        if offset > buf.len() {
            return Err(DomainError::TruncatedMessage {
                offset: buf.len(),
                needed: offset - buf.len(),
                available: 0,
            });
        }
        Ok(Self { buf, pos: offset })
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn peek_u8(&self) -> Result<u8, DomainError> {
        self.ensure(1)?;
        Ok(self.buf[self.pos])
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        let byte = self.peek_u8()?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DomainError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        self.ensure(len)?;
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), DomainError> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }

    fn ensure(&self, needed: usize) -> Result<(), DomainError> {
        if needed > self.remaining() {
            return Err(DomainError::TruncatedMessage {
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_position() {
        let buf = [0x12, 0x34, 0x00, 0x00, 0x00, 0x3C, 0xFF];
        let mut reader = WireReader::new(&buf);

        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 60);
        assert_eq!(reader.position(), 6);
        assert_eq!(reader.read_u8().unwrap(), 0xFF);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_short_read_fails_without_advancing() {
        let buf = [0x01, 0x02, 0x03];
        let mut reader = WireReader::new(&buf);
        reader.skip(2).unwrap();

        let err = reader.read_u16().unwrap_err();
        assert_eq!(
            err,
            DomainError::TruncatedMessage {
                offset: 2,
                needed: 2,
                available: 1,
            }
        );
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.read_u8().unwrap(), 0x03);
    }

    #[test]
    fn test_at_rejects_offset_past_end() {
        let buf = [0u8; 4];
        assert!(WireReader::at(&buf, 4).is_ok());
        assert!(WireReader::at(&buf, 5).is_err());
    }

    #[test]
    fn test_read_array() {
        let buf = [10, 0, 0, 1];
        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.read_array::<4>().unwrap(), [10, 0, 0, 1]);
        assert!(reader.read_array::<1>().is_err());
    }
}
