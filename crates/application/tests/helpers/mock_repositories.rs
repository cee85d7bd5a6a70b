#![allow(dead_code)]
use async_trait::async_trait;
use minidns_application::ports::{DnsResolver, HostTable};
use minidns_domain::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

pub struct MockHostTable {
    entries: HashMap<String, Arc<[Ipv4Addr]>>,
    lookups: RwLock<Vec<String>>,
}

impl MockHostTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            lookups: RwLock::new(Vec::new()),
        }
    }

    pub fn with_entry(mut self, domain: &str, addresses: &[&str]) -> Self {
        let addresses: Vec<Ipv4Addr> = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.entries.insert(domain.to_string(), addresses.into());
        self
    }

    /// Names passed to `lookup`, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.read().unwrap().clone()
    }
}

impl Default for MockHostTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTable for MockHostTable {
    fn lookup(&self, domain: &str) -> Option<Arc<[Ipv4Addr]>> {
        self.lookups.write().unwrap().push(domain.to_string());
        self.entries.get(domain).cloned()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

pub struct MockDnsResolver {
    responses: RwLock<HashMap<String, Result<Vec<Ipv4Addr>, DomainError>>>,
    calls: AtomicUsize,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, domain: &str, addresses: &[&str]) {
        let addresses = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), Ok(addresses));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.responses
            .read()
            .unwrap()
            .get(domain)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
