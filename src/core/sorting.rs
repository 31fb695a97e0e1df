use std::cmp::Reverse;

use crate::models::{Property, SortOrder};

/// Sort a listing collection by the named strategy.
///
/// Every strategy is stable: ties beyond the named keys retain their
/// relative input order. Returns a new vector; the input is never mutated.
pub fn sort_listings(properties: &[Property], order: SortOrder) -> Vec<Property> {
    let mut sorted = properties.to_vec();
    match order {
        SortOrder::PriceAsc => sorted.sort_by_key(|p| p.price),
        SortOrder::PriceDesc => sorted.sort_by_key(|p| Reverse(p.price)),
        // Unknown construction year counts as 0 and sinks to the bottom
        SortOrder::Newest => sorted.sort_by_key(|p| Reverse(p.year_built.unwrap_or(0))),
        // Two-key sort: featured listings first, then price descending
        // within each group
        SortOrder::Featured => sorted.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| b.price.cmp(&a.price))
        }),
    }
    sorted
}
