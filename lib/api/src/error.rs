use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use roadnet_core::Error;
use thiserror::Error as ThisError;
use tracing::{error, warn};

/// Everything a handler can fail with, rendered as `{"error": "..."}`.
#[derive(ThisError, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Domain(#[from] Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(e) => match e {
                Error::Validation(_) => StatusCode::BAD_REQUEST,
                Error::CityExists(_) => StatusCode::CONFLICT,
                Error::CityNotFound(_)
                | Error::RoadNotFound(_)
                | Error::RecordNotFound(_)
                | Error::Unreachable { .. } => StatusCode::NOT_FOUND,
                Error::Io(_) | Error::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, "{}", self);
        } else {
            warn!(%status, "{}", self);
        }
        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
