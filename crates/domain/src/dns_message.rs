/// Size of the fixed message header on the wire.
pub const HEADER_LEN: usize = 12;

/// Classic UDP payload limit without EDNS(0).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

/// Standard query, recursion desired.
pub const FLAGS_STANDARD_QUERY: u16 = 0x0100;
/// Response, no error.
pub const FLAGS_RESPONSE_OK: u16 = 0x8180;
/// Response, name error (NXDOMAIN).
pub const FLAGS_NAME_ERROR: u16 = 0x8183;

pub const FLAG_QR: u16 = 1 << 15;
pub const RCODE_MASK: u16 = 0x000F;
pub const RCODE_NXDOMAIN: u8 = 3;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

/// TTL stamped on every answer record.
pub const ANSWER_TTL: u32 = 60;

/// Compression pointer to the question name, which always starts right
/// after the header.
pub const QUESTION_NAME_POINTER: u16 = 0xC000 | HEADER_LEN as u16;

pub const IPV4_RDATA_LEN: u16 = 4;

/// Pointer, type, class, TTL and RDLENGTH plus a 4-byte IPv4 address.
pub const A_RECORD_LEN: usize = 2 + 2 + 2 + 4 + 2 + IPV4_RDATA_LEN as usize;

/// The 12-byte DNS message header.
///
/// `flags` is carried as an opaque 16-bit value; the helpers below only read
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MessageHeader {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl MessageHeader {
    /// Header of an outbound A query: one question, recursion desired.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: FLAGS_STANDARD_QUERY,
            question_count: 1,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn response_code(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    pub fn is_name_error(&self) -> bool {
        self.is_response() && self.response_code() == RCODE_NXDOMAIN
    }
}

/// A question decoded from an inbound query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub id: u16,
    pub flags: u16,
    /// Name exactly as the client sent it, without a trailing dot.
    pub domain: String,
    pub qtype: u16,
    pub qclass: u16,
    /// Offset just past the question's class field.
    pub question_end: usize,
}

impl ParsedQuery {
    /// Set when the datagram carries the QR bit, i.e. it is not a query.
    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn is_a_in(&self) -> bool {
        self.qtype == TYPE_A && self.qclass == CLASS_IN
    }
}
