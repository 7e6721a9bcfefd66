use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use invoicr_auth::auth_routes;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        api::{get_settings, list_invoices},
        health::livez,
        login::login_page,
        pages::{dashboard_invoices, landing, DASHBOARD_PATH},
        sitemap::sitemap_xml,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/settings", get(get_settings))
        .route("/invoices", get(list_invoices))
        .layer(cors);

    let timeout = state.config.request_timeout();

    // Main application router
    Router::new()
        .route("/", get(landing))
        .route("/login", get(login_page))
        .route(DASHBOARD_PATH, get(dashboard_invoices))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .merge(auth_routes().with_state::<AppState>(state.auth.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
