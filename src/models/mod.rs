// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FilterState, Property, PropertyType, SortOrder};
pub use requests::ListingsQuery;
pub use responses::{ErrorResponse, HealthResponse, ListingCard, ListingsResponse};
