use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One entry of the static resolution table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostRecord {
    pub domain: String,

    /// Answered in this order, every time.
    pub addresses: Vec<Ipv4Addr>,
}

impl HostRecord {
    pub fn new(domain: impl Into<String>, addresses: Vec<Ipv4Addr>) -> Self {
        Self {
            domain: domain.into(),
            addresses,
        }
    }
}

/// The outcome of a client-side lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub domain: String,
    pub addresses: Vec<Ipv4Addr>,
    pub elapsed_ms: u64,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
