use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    #[serde(default = "super::defaults::directory_settings")]
    pub directory: DirectorySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Where the static content directory lives and which category feeds the path table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectorySettings {
    #[serde(default = "super::defaults::directory_path")]
    pub path: String,
    #[serde(default = "super::defaults::legacy_category")]
    pub legacy_category: String,
}
