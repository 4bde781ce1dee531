use super::errors::TableError;
use super::models::PathTable;
use switcher_models::{ContentDirectory, DirectoryEntry};
use std::collections::HashSet;

/// Segment inserted between an entry's route and its filter
const FRAMEWORK_SEGMENT: &str = "/q/framework/";

type Result<T> = std::result::Result<T, TableError>;

impl PathTable {
    /// Builds the table from the given category of the content directory
    pub fn build(directory: &ContentDirectory, category: &str) -> Result<Self> {
        let source = directory.get(category).ok_or_else(|| {
            let mut available: Vec<String> = directory.keys().cloned().collect();
            available.sort();
            TableError::CategoryNotFound {
                category: category.to_string(),
                available,
            }
        })?;

        let entries = source.items.iter().flat_map(|group| group.items.iter());
        let table = Self::from_entries(category, entries);

        tracing::debug!(
            "Built path table for '{}': {} entries, {} paths",
            category,
            table.entry_count,
            table.len()
        );

        Ok(table)
    }

    /// Builds the table from entries in traversal order, keeping duplicates
    pub fn from_entries<'a, I>(category: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a DirectoryEntry>,
    {
        let mut legacy_paths = Vec::new();
        let mut current_paths = Vec::new();
        let mut entry_count = 0;

        for entry in entries {
            entry_count += 1;
            for filter in &entry.filters {
                let path = Self::path_for(&entry.route, filter);
                legacy_paths.push(path.clone());
                current_paths.push(path);
            }
        }

        let legacy_set: HashSet<String> = legacy_paths.iter().cloned().collect();
        let current_set: HashSet<String> = current_paths.iter().cloned().collect();

        Self {
            category: category.to_string(),
            entry_count,
            legacy_paths,
            current_paths,
            legacy_set,
            current_set,
        }
    }

    /// `route + "/q/framework/" + filter + "/"`
    pub fn path_for(route: &str, filter: &str) -> String {
        format!("{}{}{}/", route, FRAMEWORK_SEGMENT, filter)
    }

    pub fn contains_legacy(&self, path: &str) -> bool {
        self.legacy_set.contains(path)
    }

    pub fn contains_current(&self, path: &str) -> bool {
        self.current_set.contains(path)
    }

    pub fn legacy_paths(&self) -> &[String] {
        &self.legacy_paths
    }

    pub fn current_paths(&self) -> &[String] {
        &self.current_paths
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Number of directory entries visited, including those without filters
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Number of (entry, filter) pairs
    pub fn len(&self) -> usize {
        self.legacy_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legacy_paths.is_empty()
    }
}
