//! `AuthUser` extractor. Pulls the bearer token from the Authorization
//! header, validates it, and resolves the subject to a live user row.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use storekeep_core::error::AppError;
use storekeep_service::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Extracts the token from an Authorization header value.
///
/// Accepts exactly two whitespace-separated tokens where the first is
/// `bearer` in any casing. Anything else is malformed.
fn parse_bearer(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Not authenticated"))?;

        let token = parse_bearer(auth_header)
            .ok_or_else(|| AppError::authentication("Invalid token format"))?;

        let claims = state.jwt_decoder.decode(token)?;

        // The token subject must still resolve to a live row; a deleted
        // user's token is rejected even before expiry.
        let user = state
            .user_repo
            .find_by_email(claims.email())
            .await?
            .ok_or_else(|| AppError::authentication("User not found"))?;

        Ok(AuthUser(RequestContext::new(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bearer_accepted() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_case_insensitive() {
        assert_eq!(parse_bearer("bearer tok"), Some("tok"));
        assert_eq!(parse_bearer("BEARER tok"), Some("tok"));
        assert_eq!(parse_bearer("bEaReR tok"), Some("tok"));
    }

    #[test]
    fn test_extra_whitespace_tolerated() {
        assert_eq!(parse_bearer("Bearer   tok"), Some("tok"));
        assert_eq!(parse_bearer("  Bearer tok  "), Some("tok"));
    }

    #[test]
    fn test_wrong_token_count_rejected() {
        assert_eq!(parse_bearer("Bearer"), None);
        assert_eq!(parse_bearer("Bearer a b"), None);
        assert_eq!(parse_bearer(""), None);
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        assert_eq!(parse_bearer("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_bearer("Token abc"), None);
    }
}
