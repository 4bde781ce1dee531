use super::models::AppState;
use crate::errors::ApiError;
use switcher_table::PathTable;
use axum::extract::FromRef;
use axum::http::Uri;
use std::sync::Arc;

impl AppState {
    pub fn new(table: Arc<PathTable>) -> Self {
        Self {
            table,
            built_at: Arc::new(chrono::Utc::now().to_rfc3339()),
        }
    }

    pub fn table(&self) -> &PathTable {
        &self.table
    }
}

impl FromRef<AppState> for Arc<PathTable> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.table)
    }
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("No route for '{}'", uri.path());
    ApiError::NotFound(uri.path().to_string())
}
