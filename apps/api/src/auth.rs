//! Identity resolution for incoming requests.
//!
//! Token verification happens upstream (the auth provider fronts this
//! service), so the bearer value is taken as the caller's stable external
//! identity. A missing or empty token means the request is not authenticated.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::errors::AppError;

/// The resolved external identity of the calling user.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub external_id: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        match token {
            Some(token) => Ok(AuthedUser {
                external_id: token.to_string(),
            }),
            None => Err(AppError::NotAuthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<AuthedUser, AppError> {
        let (mut parts, _) = request.into_parts();
        AuthedUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_bearer_token_resolves_identity() {
        let request = Request::builder()
            .header("Authorization", "Bearer user_2abc123")
            .body(())
            .unwrap();

        let user = extract(request).await.unwrap();
        assert_eq!(user.external_id, "user_2abc123");
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let request = Request::builder().body(()).unwrap();

        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, AppError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_empty_bearer_token_is_rejected() {
        let request = Request::builder()
            .header("Authorization", "Bearer   ")
            .body(())
            .unwrap();

        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, AppError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let request = Request::builder()
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(())
            .unwrap();

        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, AppError::NotAuthenticated));
    }
}
