use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer for the frontend origin(s).
///
/// The API is cookie-authenticated, so credentials are allowed and the
/// origin list is explicit rather than a wildcard. The API only serves
/// GET and POST.
pub fn create_cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let origins = allowed_origins
        .into_iter()
        .filter_map(|s| s.parse::<axum::http::HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
