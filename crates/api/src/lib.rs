//! # alleybook API
//!
//! HTTP front of the bowling alley booking backend. It answers availability
//! lookups for the public site by resolving slot definitions against
//! existing bookings held in Airtable.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into resolver calls
//! - **Middleware**: Error mapping, panic recovery and fixed response headers
//! - **Config**: Environment-driven settings
//!
//! The API uses Axum as the web framework and reaches Airtable through the
//! repositories in `alleybook-store`.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling and response headers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use alleybook_core::resolver::AvailabilityResolver;
use alleybook_store::{airtable::AirtableClient, create_repositories};
use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Resolver wired to the configured slot and booking repositories
    pub resolver: AvailabilityResolver,
}

/// Builds the application router with every route and layer attached
///
/// Layers from the outside in: response headers, request tracing, panic
/// recovery, request timeout.
pub fn build_app(state: Arc<ApiState>, request_timeout: Duration) -> Router {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability lookup endpoint
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(
                    middleware::error_handling::handle_panic,
                ))
                .layer(TimeoutLayer::new(request_timeout)),
        );

    middleware::headers::cors_headers()
        .into_iter()
        .fold(app, |app, (name, value)| {
            app.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

/// Starts the API server with the provided configuration and record store client
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and Airtable settings
/// * `client` - Airtable client shared by the slot and booking repositories
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = alleybook_api::config::ApiConfig::from_env()?;
/// let client = alleybook_store::create_client(&config.airtable)?;
/// alleybook_api::start_server(config, client).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, client: AirtableClient) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (slots, bookings) = create_repositories(client, &config.airtable);
    let resolver = AvailabilityResolver::new(Arc::new(slots), Arc::new(bookings), config.slot_order);
    let state = Arc::new(ApiState { resolver });

    let app = build_app(state, config.request_timeout());

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        slot_order = %config.slot_order,
        base_id = %config.airtable.base_id,
        "Server listening on http://{}",
        addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
