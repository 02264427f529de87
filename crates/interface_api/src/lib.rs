//! HTTP API Layer
//!
//! Exposes the analysis engine over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: full analysis, debt payoff plan, investment projection
//! - **Middleware**: request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects, checked with `validator`
//! - **Cache**: optional TTL cache of full analyses
//! - **Error Handling**: Consistent `{error, message, details}` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(ApiConfig::default())?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod cache;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use domain_analysis::{AnalysisEngine, AnalysisError};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::cache::AnalysisCache;
use crate::config::ApiConfig;
use crate::handlers::{analysis, debt, health, investment};
use crate::middleware::{request_logging, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalysisEngine>,
    pub cache: Option<Arc<AnalysisCache>>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the engine and cache described by `config`
    pub fn new(config: ApiConfig) -> Result<Self, AnalysisError> {
        let engine = AnalysisEngine::new(config.engine)?;
        let cache = config
            .cache_enabled
            .then(|| Arc::new(AnalysisCache::new(config.cache_ttl_secs, config.cache_max_entries)));
        Ok(Self {
            engine: Arc::new(engine),
            cache,
            config,
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration, including the engine policies
///
/// # Returns
///
/// Configured Axum router with all routes and middleware, or the engine
/// configuration error
pub fn create_router(config: ApiConfig) -> Result<Router, AnalysisError> {
    Ok(router_with_state(AppState::new(config)?))
}

/// Creates the router around an existing state
pub fn router_with_state(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let api_routes = Router::new()
        .route("/analysis", post(analysis::analyze))
        .route("/debts/payoff-plan", post(debt::payoff_plan))
        .route("/investments/projection", post(investment::projection))
        .layer(axum_middleware::from_fn(request_logging));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
