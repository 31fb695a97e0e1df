use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{FilterState, SortOrder};

/// Query parameters accepted by the listing list view.
///
/// Field names mirror the client-side filter state. Every parameter is
/// optional; an absent or empty value imposes no constraint. Malformed
/// filter values are never rejected here -- they are neutralized during
/// matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ListingsQuery {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(alias = "property_type", rename = "propertyType", default)]
    pub property_type: Option<String>,
    #[serde(alias = "min_price", rename = "minPrice", default)]
    pub min_price: Option<String>,
    #[serde(alias = "max_price", rename = "maxPrice", default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<String>,
    #[serde(default)]
    pub bathrooms: Option<String>,
    /// Comma-separated amenity labels, e.g. `amenities=Pool,Gym`
    #[serde(default)]
    pub amenities: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListingsQuery {
    /// Build the filter criteria this query describes.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            location: self.location.clone().unwrap_or_default(),
            property_type: self.property_type.clone().unwrap_or_default(),
            min_price: self.min_price.clone().unwrap_or_default(),
            max_price: self.max_price.clone().unwrap_or_default(),
            bedrooms: self.bedrooms.clone().unwrap_or_default(),
            bathrooms: self.bathrooms.clone().unwrap_or_default(),
            amenities: self
                .amenities
                .as_deref()
                .map(split_amenities)
                .unwrap_or_default(),
        }
    }
}

/// Split the comma-separated amenities parameter into labels, dropping
/// empty segments.
fn split_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_yields_unconstrained_filters() {
        let query = ListingsQuery::default();
        let filters = query.filter_state();

        assert!(filters.location.is_empty());
        assert!(filters.property_type.is_empty());
        assert!(filters.min_price.is_empty());
        assert!(filters.amenities.is_empty());
    }

    #[test]
    fn test_amenities_split_on_commas() {
        let query = ListingsQuery {
            amenities: Some("Pool, Gym,,Garden".to_string()),
            ..Default::default()
        };

        let filters = query.filter_state();
        assert_eq!(filters.amenities, vec!["Pool", "Gym", "Garden"]);
    }

    #[test]
    fn test_query_string_deserialization() {
        let query: ListingsQuery = serde_json::from_str(
            r#"{"location":"Downtown","propertyType":"rent","minPrice":"1000","sort":"price-asc","limit":20}"#,
        )
        .unwrap();

        assert_eq!(query.location.as_deref(), Some("Downtown"));
        assert_eq!(query.property_type.as_deref(), Some("rent"));
        assert_eq!(query.sort, Some(SortOrder::PriceAsc));
        assert_eq!(query.limit, Some(20));
    }

    #[test]
    fn test_zero_limit_fails_validation() {
        let query = ListingsQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }
}
