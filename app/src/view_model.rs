//! Display logic pulled out of the Leptos components so it can be unit tested.

use crate::store::Listing;
use crate::types::{District, Station};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load. Please refresh.";
pub const DEFAULT_NO_RESULTS: &str = "No results found";
pub const SEARCH_PLACEHOLDER: &str = "Search district or station";

// === District header ===

/// Station count shown in a district header. Always plural.
pub fn station_count_label(count: usize) -> String {
    format!("{count} stations")
}

/// Value for the header's `aria-expanded` attribute.
pub fn aria_expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

/// CSS class of a district's station sub-list.
pub fn stations_class(open: bool) -> &'static str {
    if open { "stations open" } else { "stations" }
}

/// DOM id of a district's station sub-list.
pub fn stations_dom_id(district: &District) -> String {
    format!("stations-{}", district.id())
}

// === Station row ===

pub fn tel_href(station: &Station) -> String {
    format!("tel:{}", station.phone)
}

pub fn call_title(station: &Station) -> String {
    format!("Call {}", station.name_romanized)
}

// === Placeholder ===

/// Text for an empty result. Quotes the query exactly as the user typed it.
pub fn no_results_message(raw_query: &str) -> String {
    format!("No results for \"{raw_query}\"")
}

/// Text of the no-results region, or `None` while it is hidden.
pub fn placeholder_message(listing: &Listing) -> Option<String> {
    match listing {
        Listing::NoMatches(query) => Some(no_results_message(query)),
        Listing::Districts(districts) if districts.is_empty() => {
            Some(DEFAULT_NO_RESULTS.to_string())
        }
        _ => None,
    }
}

/// CSS class of the no-results region.
pub fn no_results_class(visible: bool) -> &'static str {
    if visible { "no-results" } else { "no-results hidden" }
}
