pub mod udp;

use async_trait::async_trait;
use minidns_domain::DomainError;
use std::time::Duration;

pub use udp::UdpTransport;

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one message and returns the raw reply, both steps bounded by
    /// `timeout`.
    async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError>;

    /// Human-readable destination, used in logs and timeout errors.
    fn server(&self) -> String;
}
