//! # Availability Handlers
//!
//! `GET /api/bookings/availability?date=YYYY-MM-DD&serviceId=..` answers with
//! every slot defined for that date and service, each flagged with
//! `isAvailable`. `OPTIONS` answers an empty 200 for browser preflight; any
//! other method gets a JSON 405.

use std::sync::Arc;

use alleybook_core::{
    errors::AlleyError,
    models::availability::{AvailabilityRequest, AvailabilityResponse},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

/// Raw query parameters. Missing values are reported by
/// `AvailabilityRequest::new`, not by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,

    #[serde(rename = "serviceId")]
    pub service_id: Option<String>,
}

/// Lists the slots for a date and service with their availability
///
/// # Errors
///
/// * `AlleyError::MissingParameters` - `date` or `serviceId` absent or empty
/// * `AlleyError::UpstreamUnavailable` - the record store rejected the slot lookup
/// * `AlleyError::Internal` - any other failure talking to the record store
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let request = AvailabilityRequest::new(query.date, query.service_id)?;

    let availability = state.resolver.resolve(&request).await?;

    info!(
        date = %availability.date,
        service_id = %availability.service_id,
        slots = availability.slots.len(),
        open = availability.slots.iter().filter(|slot| slot.is_available).count(),
        "resolved availability"
    );

    Ok(Json(availability.into()))
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError(AlleyError::MethodNotAllowed)
}
