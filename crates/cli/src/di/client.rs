use anyhow::Context;
use minidns_application::use_cases::LookupDomainUseCase;
use minidns_domain::Config;
use minidns_infrastructure::dns::{StubResolver, UdpTransport};
use std::sync::Arc;
use tracing::debug;

pub struct ClientServices {
    pub lookup: LookupDomainUseCase,
    pub timeout_secs: u64,
}

impl ClientServices {
    /// Resolves the configured server address once; host names are allowed.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let server = tokio::net::lookup_host(config.client.server.as_str())
            .await
            .with_context(|| format!("Invalid server address '{}'", config.client.server))?
            .next()
            .with_context(|| format!("Server address '{}' did not resolve", config.client.server))?;

        debug!(server = %server, timeout_secs = config.client.query_timeout, "Client configured");

        let transport = Arc::new(UdpTransport::new(server));
        let resolver = Arc::new(StubResolver::new(transport, config.client.timeout()));

        Ok(Self {
            lookup: LookupDomainUseCase::new(resolver),
            timeout_secs: config.client.query_timeout,
        })
    }
}
