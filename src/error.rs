use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Request-level API errors
///
/// Error payload messages are part of the external contract and must not be
/// reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// `name` query parameter missing or empty
    MissingName,
    /// `include` query parameter missing or empty
    MissingInclude,
    /// `include` query parameter not lexically true/false
    InvalidInclude,
    /// College name not present in the dataset
    NotFound,
    /// Request path not served by this API
    UnknownRoute,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "College name is required"),
            Self::MissingInclude => write!(f, "Include parameter required"),
            Self::InvalidInclude => write!(
                f,
                "Include parameter for room-and-board must be equal to true or false"
            ),
            Self::NotFound => write!(f, "College not found"),
            Self::UnknownRoute => write!(
                f,
                "This is not a implemented URL for this College Tuition Cost API."
            ),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingName | Self::MissingInclude | Self::InvalidInclude => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound | Self::UnknownRoute => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({ "Error": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::MissingName.to_string(), "College name is required");
        assert_eq!(ApiError::NotFound.to_string(), "College not found");
        assert_eq!(
            ApiError::InvalidInclude.to_string(),
            "Include parameter for room-and-board must be equal to true or false"
        );
    }

    #[tokio::test]
    async fn test_error_response_status() {
        let response = ApiError::MissingInclude.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
