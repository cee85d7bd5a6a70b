#![allow(dead_code)]
use minidns_domain::{Config, HostRecord};
use std::net::Ipv4Addr;

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn query_timeout(mut self, secs: u64) -> Self {
        self.config.client.query_timeout = secs;
        self
    }

    pub fn log_format(mut self, format: &str) -> Self {
        self.config.logging.format = format.to_string();
        self
    }

    pub fn no_records(mut self) -> Self {
        self.config.records.clear();
        self
    }

    pub fn record(mut self, domain: &str, addresses: &[&str]) -> Self {
        let addresses = addresses
            .iter()
            .map(|a| a.parse::<Ipv4Addr>().unwrap())
            .collect();
        self.config.records.push(HostRecord::new(domain, addresses));
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
