use crate::errors::ApiError;
use crate::models::{SwitcherQuery, SwitcherResponse};
use switcher_resolver::{render_switcher, resolve};
use switcher_table::PathTable;
use axum::{
    extract::{Query, State},
    response::{Html, Json},
};
use std::sync::Arc;

pub async fn get_switcher(
    State(table): State<Arc<PathTable>>,
    Query(query): Query<SwitcherQuery>,
) -> Result<Json<SwitcherResponse>, ApiError> {
    let url = query.url.ok_or(ApiError::MissingUrl)?;
    let options = resolve(&url, &table);

    Ok(Json(SwitcherResponse {
        active: options.active(),
        left: options.left,
        right: options.right,
    }))
}

pub async fn get_switcher_html(
    State(table): State<Arc<PathTable>>,
    Query(query): Query<SwitcherQuery>,
) -> Result<Html<String>, ApiError> {
    let url = query.url.ok_or(ApiError::MissingUrl)?;
    let options = resolve(&url, &table);

    Ok(Html(render_switcher(&options)))
}
