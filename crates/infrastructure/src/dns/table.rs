use minidns_application::ports::HostTable;
use minidns_domain::HostRecord;
use rustc_hash::FxHashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::warn;

/// Immutable table built once from the configured records.
pub struct StaticHostTable {
    entries: FxHashMap<Box<str>, Arc<[Ipv4Addr]>>,
}

impl StaticHostTable {
    /// Records are taken in order. A domain listed twice keeps its first
    /// entry; records without addresses are skipped.
    pub fn new(records: &[HostRecord]) -> Self {
        let mut entries: FxHashMap<Box<str>, Arc<[Ipv4Addr]>> =
            FxHashMap::with_capacity_and_hasher(records.len(), Default::default());

        for record in records {
            if record.addresses.is_empty() {
                warn!(domain = %record.domain, "Skipping record without addresses");
                continue;
            }
            if entries.contains_key(record.domain.as_str()) {
                warn!(domain = %record.domain, "Duplicate record ignored");
                continue;
            }
            entries.insert(
                record.domain.as_str().into(),
                Arc::from(record.addresses.as_slice()),
            );
        }

        Self { entries }
    }
}

impl HostTable for StaticHostTable {
    fn lookup(&self, domain: &str) -> Option<Arc<[Ipv4Addr]>> {
        self.entries.get(domain).cloned()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
