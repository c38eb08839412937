//! Substring search over districts and their stations.
//!
//! A district whose own name matches keeps every station; a district that
//! only matches through its stations keeps just those stations. Results stay
//! in dataset order.

use crate::types::{District, Station};

/// Outcome of running a raw query against the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The query was blank: show the full dataset with nothing expanded.
    Reset,
    /// Filtered view; may be empty.
    Matches(Vec<District>),
}

/// Trims the query and case-folds it.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `needle` must already be normalized. The romanized name is case-folded,
/// the local-script name is compared as-is.
fn names_match(name_local: &str, name_romanized: &str, needle: &str) -> bool {
    name_romanized.to_lowercase().contains(needle) || name_local.contains(needle)
}

pub fn district_matches(district: &District, needle: &str) -> bool {
    names_match(&district.name_local, &district.name_romanized, needle)
}

pub fn station_matches(station: &Station, needle: &str) -> bool {
    names_match(&station.name_local, &station.name_romanized, needle)
}

/// Restricts `district` to what `needle` selects, or `None` if nothing in it matches.
pub fn filter_district(district: &District, needle: &str) -> Option<District> {
    if district_matches(district, needle) {
        return Some(district.clone());
    }

    let stations: Vec<Station> = district
        .stations
        .iter()
        .filter(|s| station_matches(s, needle))
        .cloned()
        .collect();

    if stations.is_empty() {
        None
    } else {
        Some(District {
            name_local: district.name_local.clone(),
            name_romanized: district.name_romanized.clone(),
            stations,
        })
    }
}

/// Linear scan of `dataset` for `query`. The dataset itself is never modified.
pub fn filter(dataset: &[District], query: &str) -> SearchResult {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return SearchResult::Reset;
    }

    SearchResult::Matches(
        dataset
            .iter()
            .filter_map(|d| filter_district(d, &needle))
            .collect(),
    )
}
