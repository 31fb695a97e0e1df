use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Searcher;
use crate::models::{
    ErrorResponse, HealthResponse, ListingCard, ListingsQuery, ListingsResponse, SortOrder,
};
use crate::services::PropertyCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PropertyCatalog>,
    pub searcher: Searcher,
    pub default_sort: SortOrder,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/listings", web::get().to(list_listings))
        .route("/listings/{id}", web::get().to(get_listing));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // An empty catalog means the data file never loaded
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Listing list view
///
/// GET /api/v1/listings?location=...&propertyType=...&minPrice=...&maxPrice=...
///     &bedrooms=...&bathrooms=...&amenities=Pool,Gym&sort=featured&limit=20
///
/// Every parameter is optional; malformed filter values are neutralized
/// rather than rejected.
async fn list_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for listings query: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let filters = query.filter_state();
    let sort = query.sort.unwrap_or(state.default_sort);

    let result = state
        .searcher
        .search(state.catalog.all(), &filters, sort, query.limit);

    tracing::info!(
        "Returning {} of {} matching listings (catalog: {})",
        result.listings.len(),
        result.total_matches,
        state.catalog.len()
    );

    HttpResponse::Ok().json(ListingsResponse {
        listings: result.listings.into_iter().map(ListingCard::from).collect(),
        total_matches: result.total_matches,
    })
}

/// Listing detail view
///
/// GET /api/v1/listings/{id}
///
/// The id segment is matched by numeric equality after integer parsing.
/// An id that matches no record and an id that does not parse both yield
/// the not-found response.
async fn get_listing(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let raw_id = path.into_inner();

    let property = parse_listing_id(&raw_id).and_then(|id| state.catalog.find(id));

    match property {
        Some(property) => HttpResponse::Ok().json(ListingCard::from(property.clone())),
        None => {
            tracing::info!("Listing {} not found", raw_id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "not_found".to_string(),
                message: format!("No listing with id {}", raw_id),
                status_code: 404,
            })
        }
    }
}

/// Parse a route id segment by its leading decimal digits.
fn parse_listing_id(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
