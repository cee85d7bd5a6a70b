use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Truncated message: needed {needed} byte(s) at offset {offset}, {available} available")]
    TruncatedMessage {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    #[error("Unsupported compression pointer at offset {offset}")]
    UnsupportedCompression { offset: usize },

    #[error("Invalid DNS response: {0}")]
    InvalidResponse(String),

    #[error("Message too large: {size} bytes exceeds the {limit} byte limit")]
    MessageTooLarge { size: usize, limit: usize },

    #[error("Response ID mismatch: expected {expected:#06x}, received {received:#06x}")]
    ResponseIdMismatch { expected: u16, received: u16 },

    #[error("Domain not found (NXDOMAIN): {0}")]
    NameNotFound(String),

    #[error("Query timeout waiting for {server}")]
    Timeout { server: String },

    #[error("Transport failure: {0}")]
    TransportFailure(String),
}

impl DomainError {
    /// Errors raised while decoding or encoding a message, as opposed to
    /// lookup misses and socket-level failures.
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            DomainError::TruncatedMessage { .. }
                | DomainError::InvalidLabel(_)
                | DomainError::UnsupportedCompression { .. }
                | DomainError::InvalidResponse(_)
                | DomainError::MessageTooLarge { .. }
        )
    }
}
