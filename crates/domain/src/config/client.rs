use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Address of the server queried by `client` and `lookup`.
    #[serde(default = "default_server")]
    pub server: String,

    /// Seconds to wait for a reply before giving up on a query.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_server() -> String {
    "127.0.0.1:8053".to_string()
}

fn default_query_timeout() -> u64 {
    5
}
