use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::migration::migrate_config_if_needed;
use super::models::Config;
use std::path::Path;
use std::sync::Arc;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_file_with_events(path, None).await
    }

    /// Loads configuration from a file with optional event bus for notifications
    pub async fn from_file_with_events<P: AsRef<Path>>(
        path: P,
        events: Option<&Arc<switcher_events::EventBus>>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        // Migrate config if needed
        migrate_config_if_needed(path, events).await?;

        // Read and parse config
        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::parse(&content)?;

        Ok(config)
    }

    /// Parses and validates a TOML document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.port must be greater than 0".to_string(),
            ));
        }

        if self.server.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.server.max_concurrent_requests == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.max_concurrent_requests must be greater than 0".to_string(),
            ));
        }

        if self.directory.path.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "directory.path must not be empty".to_string(),
            ));
        }

        if self.directory.legacy_category.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "directory.legacy_category must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses() {
        let config = Config::parse(DEFAULT_CONFIG_TEMPLATE).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.directory.path, "directory.json");
        assert_eq!(config.directory.legacy_category, "ui-legacy");
        assert_eq!(config.server.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_directory_section_defaults() {
        let content = r#"
            [server]
            host = "127.0.0.1"
            port = 3000
            base_url = "http://localhost:3000"
        "#;

        let config = Config::parse(content).unwrap();

        assert_eq!(config.directory.legacy_category, "ui-legacy");
        assert_eq!(config.server.timeout_secs, 30);
        assert!(config.server.enable_compression);
    }

    #[test]
    fn test_rejects_empty_category() {
        let content = r#"
            [server]
            host = "127.0.0.1"
            port = 3000
            base_url = "http://localhost:3000"

            [directory]
            path = "directory.json"
            legacy_category = " "
        "#;

        assert!(matches!(
            Config::parse(content),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_limits() {
        let server = |timeout: u64, max_requests: usize| {
            format!(
                "[server]\nhost = \"127.0.0.1\"\nport = 3000\nbase_url = \"http://localhost:3000\"\ntimeout_secs = {}\nmax_concurrent_requests = {}\n",
                timeout, max_requests
            )
        };

        let err = Config::parse(&server(0, 100)).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"), "{}", err);

        let err = Config::parse(&server(30, 0)).unwrap_err();
        assert!(err.to_string().contains("max_concurrent_requests"), "{}", err);

        assert!(Config::parse(&server(30, 100)).is_ok());
    }

    #[tokio::test]
    async fn test_creates_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::from_file(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
