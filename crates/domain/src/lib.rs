//! minidns domain layer: message types, name rules, configuration and errors.
pub mod config;
pub mod dns_message;
pub mod domain_name;
pub mod errors;
pub mod host_record;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{MessageHeader, ParsedQuery};
pub use domain_name::{normalize_domain, validate_domain_name};
pub use errors::DomainError;
pub use host_record::{HostRecord, LookupResult};
