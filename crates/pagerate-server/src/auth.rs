//! Caller identity extraction.
//!
//! Authentication proper lives outside this service. Callers arrive with an
//! already-verified identity in the `X-User-ID` header and the handlers
//! treat it as an opaque token, threaded explicitly through signatures
//! rather than ambient state.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

/// Header carrying the caller-supplied user identity.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Opaque caller identity extracted from the `X-User-ID` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or_default();

        if value.is_empty() {
            return Err(AppError::Unauthorized(
                "Missing X-User-ID header".to_string(),
            ));
        }

        Ok(UserId(value.to_string()))
    }
}
