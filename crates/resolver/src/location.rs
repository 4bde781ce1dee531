use http::Uri;
use serde::Serialize;
use switcher_models::Variant;

/// Marks the start of the filter part of a page path
pub const FRAMEWORK_MARKER: &str = "/framework";

/// Where the reader currently is, relative to the two variant prefixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentLocation {
    pub variant: Variant,
    /// Everything after the first `/framework`, empty when absent
    pub filter_suffix: String,
    /// Everything after the active variant's prefix, empty when absent
    pub url_remainder: String,
}

impl CurrentLocation {
    pub fn parse(url: &str) -> Self {
        let path = page_path(url);

        let filter_suffix = after_marker(&path, FRAMEWORK_MARKER);

        // The variant follows the whole URL, query and fragment included.
        // "/ui" is a prefix of "/ui-legacy", so the legacy marker is checked first
        let variant = if url.contains(Variant::Legacy.prefix()) {
            Variant::Legacy
        } else {
            Variant::Latest
        };
        let url_remainder = after_marker(&path, variant.prefix());

        Self {
            variant,
            filter_suffix,
            url_remainder,
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.variant == Variant::Legacy
    }
}

fn after_marker(path: &str, marker: &str) -> String {
    path.split_once(marker)
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_default()
}

/// Reduces a page URL to its path: drops the fragment, the query string and,
/// for absolute URLs, the scheme and authority.
fn page_path(url: &str) -> String {
    let url = url.trim();
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);

    let path = if without_fragment.contains("://") {
        match without_fragment.parse::<Uri>() {
            Ok(uri) => uri.path().to_string(),
            Err(e) => {
                tracing::debug!("Unparseable absolute URL '{}': {}", url, e);
                without_fragment.to_string()
            }
        }
    } else {
        without_fragment.to_string()
    };

    match path.split_once('?') {
        Some((head, _)) => head.to_string(),
        None => path,
    }
}
