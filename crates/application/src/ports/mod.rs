mod dns_resolver;
mod host_table;

pub use dns_resolver::DnsResolver;
pub use host_table::HostTable;
