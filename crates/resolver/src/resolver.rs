use super::location::CurrentLocation;
use switcher_models::{OptionDescriptor, SwitcherOptions, Variant};
use switcher_table::PathTable;

/// Path both variants fall back to, before the filter suffix is appended
const FALLBACK_SEGMENT: &str = "/q/framework";

/// Computes both switcher links for the page at `url`.
///
/// The counterpart of the current page is used when the table knows it;
/// otherwise each side falls back to `<prefix>/q/framework<filter suffix>`.
/// Never fails: URLs without recognizable markers still yield two links.
pub fn resolve(url: &str, table: &PathTable) -> SwitcherOptions {
    let location = CurrentLocation::parse(url);

    let left = descriptor(Variant::Latest, &location, |path| table.contains_current(path));
    let right = descriptor(Variant::Legacy, &location, |path| table.contains_legacy(path));

    tracing::trace!(
        "Resolved '{}' → latest={}, legacy={}, active={:?}",
        url,
        left.href,
        right.href,
        location.variant
    );

    SwitcherOptions { left, right }
}

fn descriptor<F>(variant: Variant, location: &CurrentLocation, is_known: F) -> OptionDescriptor
where
    F: Fn(&str) -> bool,
{
    let candidate = format!("{}{}", variant.prefix(), location.url_remainder);
    let href = if is_known(&candidate) {
        candidate
    } else {
        format!("{}{}{}", variant.prefix(), FALLBACK_SEGMENT, location.filter_suffix)
    };

    OptionDescriptor {
        title: variant.title().to_string(),
        href,
        is_active: location.variant == variant,
    }
}
