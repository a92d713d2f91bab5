use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

pub mod handlers;
pub mod models;

pub use handlers::AppState;

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/seo", get(handlers::resolve_seo))
        .route("/api/flight-url", post(handlers::flight_url))
        .route("/api/airports", get(handlers::airports_search))
        .route("/api/locations", get(handlers::locations_search))
        // Server-rendered page shells
        .route("/", get(handlers::home))
        .route("/:page", get(handlers::static_page))
        .route("/:section/:slug", get(handlers::content_page))
        .with_state(state)
        // Static assets (images, css)
        .nest_service("/assets", ServeDir::new("static"))
        .layer(cors)
}
