use super::transport::udp::validate_response_id;
use super::transport::DnsTransport;
use super::wire::{build_query, decode_header, parse_response};
use async_trait::async_trait;
use minidns_application::ports::DnsResolver;
use minidns_domain::DomainError;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Stub resolver that asks a single server for A records.
///
/// One query, one reply; no retries. A reply flagged NXDOMAIN, or one with
/// no answers, resolves to an empty list.
pub struct StubResolver {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl StubResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl DnsResolver for StubResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        let query_id = fastrand::u16(..);
        let query = build_query(query_id, domain)?;

        debug!(
            domain = %domain,
            query_id = query_id,
            server = %self.transport.server(),
            "Sending A query"
        );

        let response = self.transport.send(&query, self.timeout).await?;
        validate_response_id(&query, &response)?;

        let header = decode_header(&response)?;
        if header.is_name_error() {
            debug!(domain = %domain, "Server answered NXDOMAIN");
            return Ok(Vec::new());
        }

        let addresses = parse_response(&response, query.len())?;

        debug!(
            domain = %domain,
            answers = addresses.len(),
            "A query answered"
        );

        Ok(addresses)
    }
}
