mod client;
mod dns;

pub use client::ClientServices;
pub use dns::DnsServices;
