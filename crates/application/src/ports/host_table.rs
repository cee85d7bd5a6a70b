use std::net::Ipv4Addr;
use std::sync::Arc;

/// Read-only name-to-address table consulted by the server.
pub trait HostTable: Send + Sync {
    /// Exact, case-sensitive match. A hit returns every configured address
    /// in insertion order.
    fn lookup(&self, domain: &str) -> Option<Arc<[Ipv4Addr]>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
