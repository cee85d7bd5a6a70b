pub mod resolver;
pub mod server;
pub mod table;
pub mod transport;
pub mod wire;

pub use resolver::StubResolver;
pub use server::DnsServerHandler;
pub use table::StaticHostTable;
pub use transport::{DnsTransport, UdpTransport};
