#![allow(dead_code)]
use minidns_application::use_cases::AnswerQueryUseCase;
use minidns_domain::HostRecord;
use minidns_infrastructure::dns::{DnsServerHandler, StaticHostTable};
use std::net::Ipv4Addr;
use std::sync::Arc;

pub fn table_with(entries: &[(&str, &[Ipv4Addr])]) -> StaticHostTable {
    let records: Vec<HostRecord> = entries
        .iter()
        .map(|(domain, addresses)| HostRecord::new(*domain, addresses.to_vec()))
        .collect();
    StaticHostTable::new(&records)
}

pub fn handler_with(entries: &[(&str, &[Ipv4Addr])]) -> DnsServerHandler {
    let table = Arc::new(table_with(entries));
    DnsServerHandler::new(Arc::new(AnswerQueryUseCase::new(table)))
}
