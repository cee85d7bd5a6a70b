use crate::ports::DnsResolver;
use minidns_domain::{DomainError, LookupResult};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub struct LookupDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, input: &str) -> Result<LookupResult, DomainError> {
        let domain = input.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidLabel("domain name is empty".to_string()));
        }

        let start = Instant::now();
        let addresses = self.resolver.resolve(domain).await.map_err(|e| {
            warn!(
                domain = %domain,
                error = %e,
                malformed = e.is_codec_error(),
                "Lookup failed"
            );
            e
        })?;
        let elapsed_ms = whole_millis(start.elapsed());

        debug!(
            domain = %domain,
            answers = addresses.len(),
            elapsed_ms,
            "Lookup completed"
        );

        Ok(LookupResult {
            domain: domain.to_string(),
            addresses,
            elapsed_ms,
        })
    }
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
