use crate::ports::HostTable;
use minidns_domain::{normalize_domain, DomainError};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

pub struct AnswerQueryUseCase {
    table: Arc<dyn HostTable>,
}

impl AnswerQueryUseCase {
    pub fn new(table: Arc<dyn HostTable>) -> Self {
        Self { table }
    }

    /// Resolves a requested name against the static table.
    ///
    /// The name is normalized first; a miss is reported as
    /// [`DomainError::NameNotFound`] carrying the normalized name.
    pub fn execute(&self, requested: &str) -> Result<Arc<[Ipv4Addr]>, DomainError> {
        let domain = normalize_domain(requested);

        match self.table.lookup(domain) {
            Some(addresses) => {
                debug!(
                    requested = %requested,
                    domain = %domain,
                    answers = addresses.len(),
                    "Domain resolved from static table"
                );
                Ok(addresses)
            }
            None => {
                debug!(requested = %requested, domain = %domain, "Domain not found");
                Err(DomainError::NameNotFound(domain.to_string()))
            }
        }
    }
}
