use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/bookings/availability",
        get(handlers::availability::get_availability)
            .options(handlers::availability::preflight)
            .head(handlers::availability::method_not_allowed)
            .fallback(handlers::availability::method_not_allowed),
    )
}
