//! Property listing and ROI calculator routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use rust_decimal::Decimal;
use safal_core::listing::{Property, TenantType};
use safal_core::roi::{
    BoundedControl, CalculatorInput, EXPECTED_ROI_CONTROL, FormattedProjection,
    HOLDING_PERIOD_CONTROL, INVESTMENT_CONTROL, ProjectionResult, RawControls,
};
use safal_core::session::SessionFlags;
use safal_core::view::{HomeView, PropertyDetailView};
use safal_shared::types::{PropertyId, Rupees};
use safal_shared::{AppError, format_percent};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Creates property routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(list_properties))
        .route("/properties/{id}", get(get_property))
        .route("/properties/{id}/roi", get(calculate_roi))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing properties.
#[derive(Debug, Default, Deserialize)]
pub struct ListPropertiesQuery {
    /// Restrict to one tenant type (`bank`, `it`, `retail`).
    pub tenant_type: Option<String>,
}

/// Summary shown on a listing card.
#[derive(Debug, Serialize)]
pub struct PropertyCard {
    /// Listing identifier.
    pub id: PropertyId,
    /// Listing title.
    pub name: String,
    /// Locality and city.
    pub location: String,
    /// Tenant name.
    pub tenant: String,
    /// Tenant category.
    pub tenant_type: TenantType,
    /// Cover image URL.
    pub image: Option<String>,
    /// Carpet area in square feet.
    pub carpet_area_sqft: u32,
    /// Asking price.
    pub price: Rupees,
    /// Asking price in crore/lakh notation.
    pub price_display: String,
    /// Monthly rent in crore/lakh notation.
    pub monthly_rent_display: String,
    /// Listed ROI, e.g. `8.2%`.
    pub roi_display: String,
    /// Whole years left on the lease.
    pub lease_remaining_years: u32,
}

impl PropertyCard {
    /// Builds the card with lease figures as of `year`.
    pub fn new(property: &Property, year: i32) -> Self {
        Self {
            id: property.id.clone(),
            name: property.name.clone(),
            location: property.location.clone(),
            tenant: property.tenant.clone(),
            tenant_type: property.tenant_type,
            image: property.images.first().cloned(),
            carpet_area_sqft: property.carpet_area_sqft,
            price: property.price,
            price_display: property.price.formatted(),
            monthly_rent_display: property.monthly_rent.formatted(),
            roi_display: format_percent(property.roi),
            lease_remaining_years: property.lease_remaining_years(year),
        }
    }
}

/// Full property detail with derived figures.
#[derive(Debug, Serialize)]
pub struct PropertyDetailResponse {
    /// The listing itself.
    #[serde(flatten)]
    pub property: Property,
    /// Asking price in crore/lakh notation.
    pub price_display: String,
    /// Monthly rent in crore/lakh notation.
    pub monthly_rent_display: String,
    /// Twelve months of rent.
    pub annual_rent_display: String,
    /// Security deposit amount.
    pub security_deposit_display: String,
    /// Annual rent over price, in percent.
    pub gross_yield_percent: Decimal,
    /// Total lease length.
    pub lease_term_years: u32,
    /// Whole years left on the lease.
    pub lease_remaining_years: u32,
    /// Share of the lease already elapsed.
    pub lease_progress_percent: Decimal,
}

impl PropertyDetailResponse {
    fn new(property: Property, year: i32) -> Self {
        Self {
            price_display: property.price.formatted(),
            monthly_rent_display: property.monthly_rent.formatted(),
            annual_rent_display: property.annual_rent().formatted(),
            security_deposit_display: property.security_deposit().formatted(),
            gross_yield_percent: property.gross_yield_percent(),
            lease_term_years: property.lease_term_years(),
            lease_remaining_years: property.lease_remaining_years(year),
            lease_progress_percent: property.lease_progress_percent(year),
            property,
        }
    }
}

/// Slider bounds the client renders the calculator with.
#[derive(Debug, Serialize)]
pub struct ControlBounds {
    /// Investment amount slider.
    pub investment_amount: BoundedControl<Decimal>,
    /// Expected ROI slider.
    pub expected_roi: BoundedControl<Decimal>,
    /// Holding period slider.
    pub holding_period_years: BoundedControl<u32>,
}

const CONTROL_BOUNDS: ControlBounds = ControlBounds {
    investment_amount: INVESTMENT_CONTROL,
    expected_roi: EXPECTED_ROI_CONTROL,
    holding_period_years: HOLDING_PERIOD_CONTROL,
};

/// Calculator state and projection for one property.
#[derive(Debug, Serialize)]
pub struct RoiResponse {
    /// Property the calculator is seeded from.
    pub property_id: PropertyId,
    /// Slider bounds.
    pub controls: ControlBounds,
    /// Accepted inputs after clamping.
    pub input: CalculatorInput,
    /// Raw projected figures.
    pub projection: ProjectionResult,
    /// Display strings for the inputs and projection.
    pub formatted: FormattedProjection,
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_tenant_type(raw: Option<&str>) -> ApiResult<Option<TenantType>> {
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<TenantType>().map_err(|e| ApiError(AppError::Validation(e))))
        .transpose()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /properties?tenant_type=
async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<ListPropertiesQuery>,
) -> ApiResult<Json<Vec<PropertyCard>>> {
    let filter = parse_tenant_type(query.tenant_type.as_deref())?;
    let view = HomeView::build(SessionFlags::returning(), state.properties.as_ref(), filter);

    Ok(Json(
        view.properties
            .iter()
            .map(|p| PropertyCard::new(p, state.as_of_year))
            .collect(),
    ))
}

/// GET /properties/{id}
async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PropertyDetailResponse>> {
    let id = PropertyId::new(id);
    let property = state
        .properties
        .get_by_id(&id)
        .ok_or_else(|| ApiError::not_found("property", id.as_str()))?;

    Ok(Json(PropertyDetailResponse::new(property, state.as_of_year)))
}

/// GET /properties/{id}/roi?investment_amount=&expected_roi=&holding_period_years=
async fn calculate_roi(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(controls): Query<RawControls>,
) -> ApiResult<Json<RoiResponse>> {
    let id = PropertyId::new(id);
    let mut view = PropertyDetailView::build(
        &id,
        state.properties.as_ref(),
        state.calculator.default_holding_period_years,
    )
    .ok_or_else(|| ApiError::not_found("property", id.as_str()))?;

    if !controls.is_empty() {
        debug!(property_id = %id, ?controls, "Applying calculator controls");
        controls.apply_to(&mut view.calculator)?;
    }

    let calculator = &view.calculator;
    let response = RoiResponse {
        property_id: id,
        controls: CONTROL_BOUNDS,
        input: *calculator.input(),
        projection: calculator.projection(),
        formatted: calculator.formatted(),
    };
    info!(
        property_id = %response.property_id,
        final_value = %response.projection.final_value.amount(),
        "Projected returns"
    );

    Ok(Json(response))
}
