use super::models::PathTable;
use std::sync::{Arc, OnceLock};

static PATH_TABLE: OnceLock<Arc<PathTable>> = OnceLock::new();

impl PathTable {
    /// Installs the process-wide table. The first installed table wins; later
    /// calls return it unchanged and drop their argument.
    pub fn install(table: PathTable) -> Arc<PathTable> {
        let mut candidate = Some(table);
        let installed = PATH_TABLE.get_or_init(|| Arc::new(candidate.take().unwrap_or_default()));

        if candidate.is_some() {
            tracing::debug!(
                "Path table for '{}' already installed, ignoring rebuild",
                installed.category()
            );
        }

        Arc::clone(installed)
    }

    /// The process-wide table, if one has been installed
    pub fn global() -> Option<Arc<PathTable>> {
        PATH_TABLE.get().map(Arc::clone)
    }
}
