use crate::models::{FilterState, Property};

/// Parse the leading decimal digits of a string.
///
/// Mirrors the lenient integer parsing the site's clients rely on:
/// `"3"` and `"3br"` both yield 3, while a string with no leading digits
/// yields `None`.
fn parse_leading_u32(value: &str) -> Option<u32> {
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Sanitize a raw price bound by stripping every non-digit character.
///
/// `"$250,000"` yields 250000. Returns `None` when no digits remain,
/// which disables the bound entirely.
fn parse_price_bound(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Check a property against the price bounds.
///
/// A missing or unparsable minimum contributes 0; a missing or unparsable
/// maximum contributes no upper bound.
#[inline]
pub fn matches_price(property: &Property, filters: &FilterState) -> bool {
    let min = parse_price_bound(&filters.min_price).unwrap_or(0);
    let max = parse_price_bound(&filters.max_price).unwrap_or(u64::MAX);
    property.price >= min && property.price <= max
}

/// Match a room-count criterion.
///
/// The literal `"5+"` token matches five or more. Any other value matches
/// on exact equality with its parsed leading integer, so `"5"` requires
/// exactly 5, never five-or-more. A value with no leading digits matches
/// nothing.
#[inline]
fn matches_count(actual: u32, criterion: &str) -> bool {
    if criterion == "5+" {
        return actual >= 5;
    }
    match parse_leading_u32(criterion) {
        Some(wanted) => actual == wanted,
        None => false,
    }
}

/// Check whether a property satisfies every active filter criterion.
///
/// An empty criterion imposes no constraint; active criteria are ANDed.
#[inline]
pub fn matches_filters(property: &Property, filters: &FilterState) -> bool {
    // Location is an exact label match, case-sensitive
    if !filters.location.is_empty() && property.location != filters.location {
        return false;
    }

    if !filters.property_type.is_empty()
        && property.property_type.as_str() != filters.property_type
    {
        return false;
    }

    if !matches_price(property, filters) {
        return false;
    }

    if !filters.bedrooms.is_empty() && !matches_count(property.bedrooms, &filters.bedrooms) {
        return false;
    }

    if !filters.bathrooms.is_empty() && !matches_count(property.bathrooms, &filters.bathrooms) {
        return false;
    }

    // Subset test: every requested amenity must be present on the property
    if !filters
        .amenities
        .iter()
        .all(|label| property.amenities.contains(label))
    {
        return false;
    }

    true
}

/// Filter a property collection, preserving relative order.
///
/// Returns a new vector; the input is never mutated. An empty result is a
/// valid outcome, not an error.
pub fn filter_listings(properties: &[Property], filters: &FilterState) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| matches_filters(property, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    fn create_test_property(id: u64) -> Property {
        Property {
            id,
            title: format!("Listing {}", id),
            description: String::new(),
            address: "44 Elm St".to_string(),
            location: "Downtown".to_string(),
            property_type: PropertyType::Buy,
            price: 450000,
            bedrooms: 3,
            bathrooms: 2,
            sqft: 1600,
            year_built: Some(2005),
            amenities: vec!["Garage".to_string(), "Garden".to_string()],
            images: vec![],
            featured: false,
        }
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let property = create_test_property(1);
        assert!(matches_filters(&property, &FilterState::default()));
    }

    #[test]
    fn test_empty_filters_are_identity() {
        let properties: Vec<Property> = (1..=4).map(create_test_property).collect();
        let result = filter_listings(&properties, &FilterState::default());

        assert_eq!(result.len(), properties.len());
        for (kept, original) in result.iter().zip(&properties) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_location_is_exact_and_case_sensitive() {
        let property = create_test_property(1);

        let exact = FilterState {
            location: "Downtown".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&property, &exact));

        let wrong_case = FilterState {
            location: "downtown".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&property, &wrong_case));

        let substring = FilterState {
            location: "Down".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&property, &substring));
    }

    #[test]
    fn test_property_type_equality() {
        let property = create_test_property(1);

        let buy = FilterState {
            property_type: "buy".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&property, &buy));

        let rent = FilterState {
            property_type: "rent".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&property, &rent));
    }

    #[test]
    fn test_price_bounds() {
        let property = create_test_property(1); // price 450000

        let inside = FilterState {
            min_price: "400000".to_string(),
            max_price: "500000".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&property, &inside));

        let below_min = FilterState {
            min_price: "500000".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&property, &below_min));

        let above_max = FilterState {
            max_price: "400000".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&property, &above_max));
    }

    #[test]
    fn test_price_bounds_are_sanitized() {
        let property = create_test_property(1);

        let formatted = FilterState {
            min_price: "$400,000".to_string(),
            max_price: "$500,000".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&property, &formatted));

        // A digit-free bound is disabled, not an error
        let garbage = FilterState {
            min_price: "abc".to_string(),
            max_price: "n/a".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&property, &garbage));
    }

    #[test]
    fn test_bedrooms_exact_vs_five_plus() {
        let mut property = create_test_property(1);
        property.bedrooms = 6;

        // "5" means exactly 5
        let exactly_five = FilterState {
            bedrooms: "5".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&property, &exactly_five));

        // "5+" means five or more
        let five_or_more = FilterState {
            bedrooms: "5+".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&property, &five_or_more));

        property.bedrooms = 5;
        assert!(matches_filters(&property, &exactly_five));
        assert!(matches_filters(&property, &five_or_more));

        property.bedrooms = 4;
        assert!(!matches_filters(&property, &five_or_more));
    }

    #[test]
    fn test_count_criterion_parses_leading_digits() {
        let property = create_test_property(1); // 3 bedrooms

        let with_suffix = FilterState {
            bedrooms: "3br".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&property, &with_suffix));

        // No leading digits matches nothing
        let no_digits = FilterState {
            bedrooms: "any".to_string(),
            ..Default::default()
        };
        assert!(!matches_filters(&property, &no_digits));
    }

    #[test]
    fn test_amenities_subset() {
        let property = create_test_property(1); // Garage, Garden

        let subset = FilterState {
            amenities: vec!["Garage".to_string()],
            ..Default::default()
        };
        assert!(matches_filters(&property, &subset));

        let full_set = FilterState {
            amenities: vec!["Garage".to_string(), "Garden".to_string()],
            ..Default::default()
        };
        assert!(matches_filters(&property, &full_set));

        // One missing amenity excludes the property regardless of the others
        let missing_one = FilterState {
            amenities: vec!["Garage".to_string(), "Pool".to_string()],
            ..Default::default()
        };
        assert!(!matches_filters(&property, &missing_one));
    }

    #[test]
    fn test_filter_preserves_order_and_never_grows() {
        let mut properties: Vec<Property> = (1..=6).map(create_test_property).collect();
        properties[1].location = "Uptown".to_string();
        properties[4].location = "Uptown".to_string();

        let filters = FilterState {
            location: "Uptown".to_string(),
            ..Default::default()
        };
        let result = filter_listings(&properties, &filters);

        assert!(result.len() <= properties.len());
        let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_criteria_are_anded() {
        let mut properties: Vec<Property> = (1..=3).map(create_test_property).collect();
        properties[0].bedrooms = 2;
        properties[2].location = "Uptown".to_string();

        let filters = FilterState {
            location: "Downtown".to_string(),
            bedrooms: "3".to_string(),
            ..Default::default()
        };
        let result = filter_listings(&properties, &filters);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }
}
