use async_trait::async_trait;
use minidns_domain::DomainError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Sends one A query and returns the addresses of the reply.
    ///
    /// A reply without answers (including NXDOMAIN) is `Ok(vec![])`, not an
    /// error.
    async fn resolve(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError>;
}
