use super::models::FileSystem;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

impl FileSystem {
    /// Reads a whole text document, with the absolute path in the error context
    pub async fn read_document(path: &Path) -> Result<String> {
        let abs_path = Self::get_absolute_path(path)?;
        let content = fs::read_to_string(&abs_path)
            .await
            .with_context(|| format!("Failed to read {}", abs_path.display()))?;
        tracing::debug!("    Read:    {} ({} bytes)", abs_path.display(), content.len());
        Ok(content)
    }

    /// Lowercased file extension, if any
    pub fn document_extension(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }

    pub fn get_absolute_path_string(path: &str) -> Result<String> {
        let path_buf = PathBuf::from(path);
        let abs = Self::get_absolute_path(&path_buf)?;
        Ok(abs.to_string_lossy().to_string())
    }
}
