pub mod client;
pub mod errors;
pub mod logging;
pub mod records;
pub mod root;
pub mod server;

pub use client::ClientConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::default_records;
pub use root::{CliOverrides, Config};
pub use server::{ServerConfig, DEFAULT_DNS_PORT};
