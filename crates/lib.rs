// Re-export all public APIs from the workspace crates

pub use switcher_models::*;
pub use switcher_events::*;
pub use switcher_filesystem::*;
pub use switcher_config::*;
pub use switcher_table::*;
pub use switcher_resolver::*;
pub use switcher_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use switcher_models::{ContentDirectory, DirectoryEntry, OptionDescriptor, SwitcherOptions, Variant};

    // Events
    pub use switcher_events::{AppEvent, EventBus};

    // Configuration
    pub use switcher_config::Config;

    // Path table
    pub use switcher_table::{DirectoryLoader, PathTable};

    // Resolution and rendering
    pub use switcher_resolver::{resolve, render_switcher, CurrentLocation};

    // Filesystem
    pub use switcher_filesystem::FileSystem;
}
