/// Default values for configuration fields

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    30
}

pub fn max_concurrent_requests() -> usize {
    1000
}

pub fn enable_compression() -> bool {
    true
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn directory_path() -> String {
    "directory.json".to_string()
}

pub fn legacy_category() -> String {
    "ui-legacy".to_string()
}

pub fn directory_settings() -> super::models::DirectorySettings {
    super::models::DirectorySettings {
        path: directory_path(),
        legacy_category: legacy_category(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# Version Switcher Configuration
# ===============================================================================

[server]
# Network
host = "0.0.0.0"                     # Server bind address (0.0.0.0 = all interfaces)
port = 8080                          # Server port
base_url = "http://localhost:8080"   # Public base URL

# Performance
tcp_nodelay = true                   # Disable Nagle's algorithm (lower latency)
timeout_secs = 30                    # Request timeout in seconds
max_concurrent_requests = 1000       # Max simultaneous connections
enable_compression = true            # HTTP compression (gzip/brotli/deflate)

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["https://docs.example.com"] for production

# ===============================================================================
# CONTENT DIRECTORY
# ===============================================================================
# The directory document maps category names to groups of entries:
#   { "ui-legacy": { "items": { "<group>": { "items": [ { "route": "...", "filters": ["react"] } ] } } } }
# Both .json and .toml documents are accepted.

[directory]
path = "directory.json"              # Content directory document (relative to working directory)
legacy_category = "ui-legacy"        # Category whose entries build the switcher path table
"#;
