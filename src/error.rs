//! Error types for the enhancement pipeline.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// User-facing failures of one enhancement request.
///
/// Every failure on the enhancement path ends up as one of these kinds. The
/// messages are fixed; the underlying cause is logged, never displayed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnhanceError {
    /// The uploaded file could not be turned into a base64 payload.
    #[error("Failed to convert file to base64 string.")]
    EncodingFailure,

    /// The service answered without any candidate.
    #[error("AI did not return any candidates. The image might be restricted.")]
    NoCandidates,

    /// A candidate came back, but none of its parts carried image data.
    #[error("No image was returned by the AI. Please try a different photo.")]
    NoImageInResponse,

    /// The API key was rejected or is missing.
    #[error("Invalid API Key. Please check your configuration.")]
    InvalidCredential,

    /// Any other transport or processing failure.
    #[error("Failed to enhance the image. The AI may be busy or the image could not be processed.")]
    GenericServiceFailure,
}

impl EnhanceError {
    /// Short machine-readable name used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EncodingFailure => "encoding_failure",
            Self::NoCandidates => "no_candidates",
            Self::NoImageInResponse => "no_image_in_response",
            Self::InvalidCredential => "invalid_credential",
            Self::GenericServiceFailure => "service_failure",
        }
    }
}

/// Raw failure of the call to the image service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// No API key was configured when the request was attempted.
    #[error("API key is not configured")]
    MissingApiKey,

    /// The service answered with a non-success status.
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Network failure or undecodable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidUpload(String),

    #[error(transparent)]
    Enhance(#[from] EnhanceError),
}

impl ApiError {
    pub const NOT_AN_IMAGE: &'static str = "Please upload a valid image file (PNG, JPG, etc.).";
    pub const NO_IMAGE: &'static str = "No image file was uploaded.";
    pub const UNREADABLE_UPLOAD: &'static str = "The upload could not be read. Please try again.";
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::InvalidUpload(_) => (StatusCode::BAD_REQUEST, "invalid_upload"),
            ApiError::Enhance(err) => {
                let status = match err {
                    EnhanceError::EncodingFailure => StatusCode::BAD_REQUEST,
                    EnhanceError::NoCandidates | EnhanceError::NoImageInResponse => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    EnhanceError::InvalidCredential => StatusCode::INTERNAL_SERVER_ERROR,
                    EnhanceError::GenericServiceFailure => StatusCode::BAD_GATEWAY,
                };
                (status, err.kind())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
