use super::models::AppState;
use crate::models::PathsResponse;
use axum::{extract::State, response::Json};

pub async fn list_paths(State(state): State<AppState>) -> Json<PathsResponse> {
    let table = state.table();

    Json(PathsResponse {
        category: table.category().to_string(),
        count: table.len(),
        entry_count: table.entry_count(),
        legacy_paths: table.legacy_paths().to_vec(),
        current_paths: table.current_paths().to_vec(),
        built_at: state.built_at.to_string(),
    })
}
