//! Bearer Credentials
//!
//! Parsing of `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};

/// Extract the bearer token from request headers
///
/// The token is the second space-separated segment of the header; the
/// scheme is not checked, so `Token abc` yields `abc` and the caller's
/// verification rejects it. Returns `None` when the header is missing, is
/// not valid UTF-8, or has an empty second segment.
///
/// ## Examples
/// ```rust
/// use axum::http::{HeaderMap, HeaderValue, header};
/// use platform::bearer::extract_bearer_token;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
/// assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
/// ```
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    value.split(' ').nth(1).filter(|token| !token.is_empty())
}
