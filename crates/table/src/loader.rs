use super::errors::TableError;
use super::models::{DirectoryFormat, DirectoryLoader};
use switcher_filesystem::FileSystem;
use switcher_models::ContentDirectory;
use std::path::Path;

type Result<T> = std::result::Result<T, TableError>;

impl DirectoryFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match FileSystem::document_extension(path).as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(TableError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl DirectoryLoader {
    /// Reads and parses the content directory, picking the format from the extension
    pub async fn load(path: &Path) -> Result<ContentDirectory> {
        let format = DirectoryFormat::from_path(path)?;

        let content = FileSystem::read_document(path)
            .await
            .map_err(|e| TableError::ReadError(format!("{:#}", e)))?;

        let directory = Self::parse(&content, format)?;
        tracing::debug!(
            "Loaded content directory {} ({} categories)",
            path.display(),
            directory.len()
        );

        Ok(directory)
    }

    pub fn parse(content: &str, format: DirectoryFormat) -> Result<ContentDirectory> {
        let directory = match format {
            DirectoryFormat::Json => serde_json::from_str(content)?,
            DirectoryFormat::Toml => toml::from_str(content)?,
        };
        Ok(directory)
    }
}
