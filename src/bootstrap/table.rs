use switcher_events::{AppEvent, EventBus};
use switcher_config::Config;
use switcher_filesystem::FileSystem;
use switcher_table::{DirectoryLoader, PathTable};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Loads the content directory and installs the process-wide path table
pub async fn initialize(config: &Config, events: &Arc<EventBus>) -> Result<Arc<PathTable>> {
    let directory_path = Path::new(&config.directory.path);
    let category = &config.directory.legacy_category;

    events.emit(AppEvent::DirectoryLoading {
        path: FileSystem::get_absolute_path_string(&config.directory.path)?,
    });

    let directory = DirectoryLoader::load(directory_path)
        .await
        .with_context(|| format!("Failed to load content directory '{}'", config.directory.path))?;

    events.emit(AppEvent::DirectoryLoaded {
        categories: directory.len(),
    });

    let table = PathTable::build(&directory, category).map_err(|e| {
        events.emit(AppEvent::Error {
            context: "Path table".to_string(),
            error: e.to_string(),
        });
        e
    })?;

    if table.is_empty() {
        events.emit(AppEvent::PathTableEmpty {
            category: category.to_string(),
        });
    } else {
        events.emit(AppEvent::PathTableBuilt {
            category: category.to_string(),
            entries: table.entry_count(),
            paths: table.len(),
        });
    }

    Ok(PathTable::install(table))
}
