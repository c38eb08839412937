//! UI state for the directory page and the operations that move it.
//!
//! The host component owns one [`DataStore`]; every interaction goes through
//! the methods here so the transitions stay testable without a browser.

use crate::search::{self, SearchResult};
use crate::types::District;
use std::collections::HashSet;
use tracing::debug;

/// District ids whose station list is currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet(HashSet<String>);

impl ExpansionSet {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Flips `id` and returns whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    pub fn insert(&mut self, id: String) {
        self.0.insert(id);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What the list region shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Listing {
    #[default]
    Loading,
    /// Initial load failed; terminal.
    Failed,
    /// Districts in display order. An empty vector shows the placeholder.
    Districts(Vec<District>),
    /// A search matched nothing. Holds the query exactly as typed.
    NoMatches(String),
}

#[derive(Debug, Clone, Default)]
pub struct DataStore {
    dataset: Option<Vec<District>>,
    expanded: ExpansionSet,
}

impl DataStore {
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn expanded(&self) -> &ExpansionSet {
        &self.expanded
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Installs the dataset once it has been fetched and returns the full listing.
    pub fn populate(&mut self, districts: Vec<District>) -> Listing {
        self.dataset = Some(districts);
        self.full_listing()
    }

    /// Unfiltered dataset, or [`Listing::Loading`] before it arrives.
    pub fn full_listing(&self) -> Listing {
        self.dataset
            .as_ref()
            .map_or(Listing::Loading, |d| Listing::Districts(d.clone()))
    }

    /// Flips the expansion of one district. `None` until the dataset is loaded.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        if !self.is_loaded() {
            return None;
        }
        let open = self.expanded.toggle(id);
        debug!(id, open, "toggled district");
        Some(open)
    }

    /// Runs `raw_query` and returns the listing to render. `None` until the
    /// dataset is loaded.
    ///
    /// A blank query collapses everything and restores the full list. Any
    /// other query expands every district it returns.
    pub fn search(&mut self, raw_query: &str) -> Option<Listing> {
        let dataset = self.dataset.as_ref()?;

        match search::filter(dataset, raw_query) {
            SearchResult::Reset => {
                if !self.expanded.is_empty() {
                    debug!(collapsed = self.expanded.len(), "search cleared");
                }
                self.expanded.clear();
                Some(Listing::Districts(dataset.clone()))
            }
            SearchResult::Matches(districts) => {
                debug!(query = raw_query, results = districts.len(), "search");
                if districts.is_empty() {
                    return Some(Listing::NoMatches(raw_query.to_string()));
                }
                for district in &districts {
                    self.expanded.insert(district.id());
                }
                Some(Listing::Districts(districts))
            }
        }
    }
}
