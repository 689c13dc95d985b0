use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sagemaker: SageMakerConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Settings for the managed inference endpoint. Consumed as-is at startup,
/// never validated: a bad region or endpoint name surfaces on the first
/// invocation, not at boot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SageMakerConfig {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub endpoint_name: String,
    /// Overrides the regional runtime URL. Used to point at a local
    /// stand-in for the runtime API.
    #[serde(default)]
    pub base_url: Option<String>,
    /// No outbound timeout is applied when absent; a hung endpoint stalls
    /// that one request indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}
