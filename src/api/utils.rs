//! Shared utility functions for API handlers

use axum::http::{header, HeaderMap};

/// `Authorization` header value, if present and valid UTF-8
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
}

/// Whether the request declares a JSON body (`application/json`, parameters allowed)
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type(&with_content_type("application/json")));
        assert!(is_json_content_type(&with_content_type("application/json; charset=utf-8")));
        assert!(!is_json_content_type(&with_content_type("text/plain")));
        assert!(!is_json_content_type(&with_content_type("application/jsonp")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }
}
