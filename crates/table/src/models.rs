use std::collections::HashSet;

/// Known switcher destinations derived from the content directory.
///
/// Both variants share the same relative path shape, so `legacy_paths` and
/// `current_paths` hold the same sequence; the hash sets back the exact-match
/// membership checks done on every resolution.
#[derive(Debug, Clone, Default)]
pub struct PathTable {
    pub(super) category: String,
    pub(super) entry_count: usize,
    pub(super) legacy_paths: Vec<String>,
    pub(super) current_paths: Vec<String>,
    pub(super) legacy_set: HashSet<String>,
    pub(super) current_set: HashSet<String>,
}

/// Reads the static content directory document from disk
pub struct DirectoryLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryFormat {
    Json,
    Toml,
}
