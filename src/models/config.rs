use serde::Deserialize;

/// Configuration options for the Topicboard service.
///
/// Loaded from `config.yaml` with `TOPICBOARD_`-prefixed environment
/// variables taking precedence.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8080`.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}
