use super::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<switcher_events::EventBus>>,
) -> Result<(), ConfigError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;

    let added_fields = migrate_document(&mut doc)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(switcher_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

/// Fills in every missing section and key, returning the names of what was added
pub(crate) fn migrate_document(doc: &mut DocumentMut) -> Result<Vec<String>, ConfigError> {
    let mut added_fields = Vec::new();

    migrate_server_section(doc, &mut added_fields)?;
    migrate_directory_section(doc, &mut added_fields)?;

    Ok(added_fields)
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    ensure_table(doc, "server", added_fields);

    let server = doc["server"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError("[server] is not a table".to_string()))?;
    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(8080), added_fields);
    ensure_field(
        server,
        "base_url",
        Value::from("http://localhost:8080"),
        added_fields,
    );
    ensure_field(server, "tcp_nodelay", Value::from(true), added_fields);
    ensure_field(server, "timeout_secs", Value::from(30), added_fields);
    ensure_field(
        server,
        "max_concurrent_requests",
        Value::from(1000),
        added_fields,
    );
    ensure_field(
        server,
        "enable_compression",
        Value::from(true),
        added_fields,
    );

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_directory_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    ensure_table(doc, "directory", added_fields);

    let directory = doc["directory"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError("[directory] is not a table".to_string()))?;
    ensure_field(directory, "path", Value::from("directory.json"), added_fields);
    ensure_field(
        directory,
        "legacy_category",
        Value::from("ui-legacy"),
        added_fields,
    );

    Ok(())
}

fn ensure_table(doc: &mut DocumentMut, key: &str, added_fields: &mut Vec<String>) {
    if !doc.contains_key(key) {
        let mut table = Table::new();
        table.set_implicit(true);
        doc[key] = Item::Table(table);
        added_fields.push(key.to_string());
    }
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, DEFAULT_CONFIG_TEMPLATE};

    #[test]
    fn test_current_template_needs_no_migration() {
        let mut doc = DEFAULT_CONFIG_TEMPLATE.parse::<DocumentMut>().unwrap();
        let added = migrate_document(&mut doc).unwrap();
        assert!(added.is_empty(), "unexpected additions: {:?}", added);
    }

    #[test]
    fn test_adds_directory_section_and_keeps_comments() {
        let content = "# my server\n[server]\nhost = \"127.0.0.1\" # local only\nport = 9000\nbase_url = \"http://localhost:9000\"\n";
        let mut doc = content.parse::<DocumentMut>().unwrap();

        let added = migrate_document(&mut doc).unwrap();

        assert!(added.contains(&"directory".to_string()));
        assert!(added.contains(&"legacy_category".to_string()));
        assert!(!added.contains(&"port".to_string()));

        let migrated = doc.to_string();
        assert!(migrated.contains("# local only"));

        let config = Config::parse(&migrated).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.directory.legacy_category, "ui-legacy");
    }

    #[test]
    fn test_non_table_section_fails() {
        let mut doc = "server = \"localhost\"\n".parse::<DocumentMut>().unwrap();

        let err = migrate_document(&mut doc).unwrap_err();
        assert!(matches!(err, ConfigError::MigrationError(_)));
    }

    #[tokio::test]
    async fn test_malformed_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();

        let broken = dir.path().join("broken.toml");
        tokio::fs::write(&broken, "[server\nport = 1\n").await.unwrap();
        assert!(matches!(
            migrate_config_if_needed(&broken, None).await,
            Err(ConfigError::TomlEditError(_))
        ));

        assert!(matches!(
            migrate_config_if_needed(dir.path().join("missing.toml"), None).await,
            Err(ConfigError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn test_migrates_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[server]\nport = 9100\n").await.unwrap();

        migrate_config_if_needed(&path, None).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("port = 9100"));
        assert!(content.contains("legacy_category"));
    }
}
