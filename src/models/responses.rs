use serde::{Deserialize, Serialize};

use crate::core::pricing::format_price;
use crate::models::domain::Property;

/// A listing as rendered to clients: the record plus its display price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingCard {
    #[serde(flatten)]
    pub property: Property,
    #[serde(rename = "displayPrice")]
    pub display_price: String,
}

impl From<Property> for ListingCard {
    fn from(property: Property) -> Self {
        let display_price = format_price(property.price, property.property_type);
        Self {
            property,
            display_price,
        }
    }
}

/// Response for the listing list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub listings: Vec<ListingCard>,
    /// Matches before any limit was applied
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
