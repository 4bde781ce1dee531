use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, base_url: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { directory_path: String },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },

    // Content directory
    DirectoryLoading { path: String },
    DirectoryLoaded { categories: usize },

    // Path table
    PathTableBuilt { category: String, entries: usize, paths: usize },
    PathTableEmpty { category: String },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
