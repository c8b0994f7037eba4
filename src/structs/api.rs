use axum::http::{header, HeaderName};

pub const NOT_AUTHORIZED: &str = "Not Authorized";
pub const NOT_FOUND: &str = "Information not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Headers attached to every response, whatever its status.
pub fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::CONTENT_TYPE, "application/json"),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "*"),
    ]
}

pub fn created_message(id: &str) -> String {
    format!("Created item with id: {}", id)
}
