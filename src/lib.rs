//! Villora Listings - property listing and search service for the Villora
//! real-estate site
//!
//! Loads a static JSON property catalog at startup and serves filtered,
//! sorted listing views over HTTP. The filter, sort, and price-formatting
//! core is a plain library and is usable without the server.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    filter_listings, format_price, matches_filters, sort_listings, SearchResult, Searcher,
};
pub use crate::models::{
    FilterState, ListingsQuery, ListingsResponse, Property, PropertyType, SortOrder,
};
