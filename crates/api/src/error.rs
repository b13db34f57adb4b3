use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use todo_core::error::{Code, ServiceError};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ServiceError`] for failures classified by the service and adds
/// the transport's own malformed-request case.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A classified failure from the to-do service.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The request body was not a valid message for the route.
    #[error("malformed request body-> {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// HTTP status used for each caller-visible code.
pub fn status_for(code: Code) -> StatusCode {
    match code {
        Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::Service(err) => err.code(),
            AppError::BadRequest(_) => Code::InvalidArgument,
        };
        let message = self.to_string();

        match code {
            Code::Unknown => tracing::error!(error = %message, "todo call failed"),
            _ => tracing::debug!(error = %message, code = %code, "todo call rejected"),
        }

        let body = json!({
            "error": message,
            "code": code.as_str(),
        });

        (status_for(code), axum::Json(body)).into_response()
    }
}
