// CORS middleware
use tower_http::cors::{Any, CorsLayer};

/// Any origin, method and header. The dashboard may be hosted elsewhere.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
