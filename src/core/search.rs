use crate::core::{filters::filter_listings, sorting::sort_listings};
use crate::models::{FilterState, Property, SortOrder};

/// Result of a listing search
#[derive(Debug)]
pub struct SearchResult {
    pub listings: Vec<Property>,
    /// Matches before any limit was applied
    pub total_matches: usize,
}

/// Listing search orchestrator: filter, sort, truncate.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_limit: usize,
}

impl Searcher {
    pub fn new(max_limit: usize) -> Self {
        Self { max_limit }
    }

    /// Run a search over the full catalog slice.
    ///
    /// A requested limit is capped at the configured maximum; without a
    /// limit every match is returned.
    pub fn search(
        &self,
        properties: &[Property],
        filters: &FilterState,
        order: SortOrder,
        limit: Option<usize>,
    ) -> SearchResult {
        let matched = filter_listings(properties, filters);
        let total_matches = matched.len();

        let mut listings = sort_listings(&matched, order);
        if let Some(limit) = limit {
            listings.truncate(limit.min(self.max_limit));
        }

        SearchResult {
            listings,
            total_matches,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(100)
    }
}
