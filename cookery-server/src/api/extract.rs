//! Request extractors and query parameter helpers

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// JSON body extractor that answers 400 for any unreadable or undecodable body
///
/// Unlike `axum::Json` it does not require a `Content-Type` header.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read body: {}", e)))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {}", e)))
    }
}

/// `?user_id=` query parameter
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

/// `?recipe_id=` query parameter
#[derive(Debug, Deserialize)]
pub struct RecipeIdQuery {
    pub recipe_id: Option<String>,
}

/// Parse a required integer id from a query parameter
pub fn required_id(value: Option<&str>, name: &str) -> Result<i64, ApiError> {
    match value {
        None | Some("") => Err(ApiError::BadRequest(format!("{} is required", name))),
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("{} must be an integer", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_id() {
        assert_eq!(required_id(Some("42"), "user_id").unwrap(), 42);
        assert!(matches!(
            required_id(None, "user_id"),
            Err(ApiError::BadRequest(msg)) if msg == "user_id is required"
        ));
        assert!(matches!(
            required_id(Some(""), "user_id"),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            required_id(Some("abc"), "recipe_id"),
            Err(ApiError::BadRequest(msg)) if msg == "recipe_id must be an integer"
        ));
    }
}
