use serde::{Deserialize, Serialize};
use switcher_models::{OptionDescriptor, Variant};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitcherQuery {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitcherResponse {
    pub active: Variant,
    pub left: OptionDescriptor,
    pub right: OptionDescriptor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsResponse {
    pub category: String,
    pub count: usize,
    pub entry_count: usize,
    pub legacy_paths: Vec<String>,
    pub current_paths: Vec<String>,
    pub built_at: String,  // ISO 8601 timestamp (RFC 3339)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
