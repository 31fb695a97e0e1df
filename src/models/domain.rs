use serde::{Deserialize, Serialize};

/// Classification of a listing on the Villora site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Buy,
    Rent,
    Commercial,
    Land,
}

impl PropertyType {
    /// Wire name, as it appears in the catalog JSON and in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Buy => "buy",
            PropertyType::Rent => "rent",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
        }
    }
}

/// Static real-estate listing record.
///
/// Records are produced by the bundled catalog resource at load time and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub address: String,
    pub location: String,
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    #[serde(rename = "yearBuilt", default)]
    pub year_built: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Transient filter criteria, rebuilt from user input on every request.
///
/// An empty string or empty list means "no constraint". Price bounds and
/// room counts stay raw strings here; sanitizing happens at match time.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub location: String,
    pub property_type: String,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub amenities: Vec<String>,
}

/// Listing sort strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "newest")]
    Newest,
    #[default]
    #[serde(rename = "featured")]
    Featured,
}
