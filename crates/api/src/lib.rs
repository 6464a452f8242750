//! # Lumen API
//!
//! HTTP front end for the reservation engine in `lumen-core`.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Decode requests, call the [`ReservationService`], wrap results
//! - **Middleware**: API key authentication and error mapping
//! - **Config**: Environment configuration
//!
//! The crate never touches the database directly; any
//! [`ReservationStore`] implementation can back the server.

/// Configuration module for API settings
pub mod config;
/// Request handlers for the reservation endpoints
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use lumen_core::{errors::ReservationError, service::ReservationService, store::ReservationStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::middleware::error_handling::AppError;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub service: ReservationService,
    /// Expected value of the `X-API-Key` header
    pub api_key: String,
    /// Attach internal error details to 500 responses
    pub expose_error_details: bool,
}

impl ApiState {
    pub fn new(service: ReservationService, api_key: impl Into<String>, expose_error_details: bool) -> Self {
        Self {
            service,
            api_key: api_key.into(),
            expose_error_details,
        }
    }

    /// Wraps a domain error for the response, honoring the detail setting.
    pub fn error(&self, err: ReservationError) -> AppError {
        AppError::new(err, self.expose_error_details)
    }
}

/// Builds the application router: public health routes plus the `/api`
/// routes behind the API key check.
pub fn app(state: Arc<ApiState>) -> Router {
    let protected = Router::new()
        .merge(routes::schedule::routes())
        .merge(routes::reservation::routes())
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_api_key,
        ));

    Router::new()
        .merge(routes::health::routes())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: Option<&[String]>) -> Result<CorsLayer> {
    let allow_origin = match origins {
        Some(origins) if !origins.is_empty() => AllowOrigin::list(
            origins
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .wrap_err_with(|| format!("Invalid CORS origin {:?}", origin))
                })
                .collect::<Result<Vec<_>>>()?,
        ),
        _ => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(middleware::auth::API_KEY_HEADER),
        ])
        .allow_origin(allow_origin))
}

/// Starts the API server with the provided configuration and store
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn ReservationStore>) -> Result<()> {
    let state = Arc::new(ApiState::new(
        ReservationService::new(store),
        config.api_key.clone(),
        !config.is_production(),
    ));

    let app = app(state)
        .layer(cors_layer(config.cors_origins.as_deref())?)
        .layer(TimeoutLayer::new(config.request_timeout()));

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{} ({:?})", addr, config.environment);
    axum::serve(listener, app).await?;

    Ok(())
}
