use minidns_application::ports::HostTable;
use minidns_application::use_cases::AnswerQueryUseCase;
use minidns_domain::Config;
use minidns_infrastructure::dns::{DnsServerHandler, StaticHostTable};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let table = Arc::new(StaticHostTable::new(&config.records));
        info!(records = table.len(), "Static host table loaded");

        let use_case = Arc::new(AnswerQueryUseCase::new(table));

        Self {
            handler: DnsServerHandler::new(use_case),
        }
    }
}
