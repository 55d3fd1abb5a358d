//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::server::AppState;

/// The authenticated user id, taken from the `Authorization: Bearer` header.
///
/// Handlers that accept this extractor are auth-gated: a missing scheme, a
/// bad signature, and an expired token all short-circuit into a 401 before
/// the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::auth("No token provided"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::auth("No token provided"))?;

        let user_id = state
            .tokens
            .verify(token)
            .map_err(|_| ApiError::auth("Invalid or expired token"))?;

        Ok(AuthUser(user_id))
    }
}
