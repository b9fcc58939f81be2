use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod handlers {
    pub mod icon_handlers;
    pub mod onboarding_handlers;
    pub mod page_handlers;
    pub mod pwa_handlers;
}
pub mod utils {
    pub mod icon;
    pub mod svg;
}
pub mod config;
pub mod error;
pub mod onboarding;
pub mod pages;
pub mod pwa;

use config::AppConfig;
use handlers::{icon_handlers, onboarding_handlers, page_handlers, pwa_handlers};

pub struct AppState {
    pub config: AppConfig,
    landing_page: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let landing_page = pages::render_landing_page(&config);
        Self {
            config,
            landing_page,
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let worker_routes = Router::new()
        .route("/sw.js", get(pwa_handlers::service_worker))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("service-worker-allowed"),
            HeaderValue::from_static("/"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ));

    let api_routes = Router::new()
        .route("/api/health", get(page_handlers::health_check))
        .route("/api/icon", get(icon_handlers::get_icon))
        .route("/api/onboarding", get(onboarding_handlers::onboarding_events));

    Router::new()
        .route("/", get(page_handlers::landing))
        .route("/manifest.webmanifest", get(pwa_handlers::manifest))
        .merge(api_routes)
        .merge(worker_routes)
        .nest_service("/icons", ServeDir::new(&state.config.static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            // Icons and the manifest may be pulled from other origins.
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_origin(Any),
        )
        .with_state(state)
}
