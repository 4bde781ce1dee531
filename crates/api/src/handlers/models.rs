use switcher_table::PathTable;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) table: Arc<PathTable>,
    pub(super) built_at: Arc<String>,
}
