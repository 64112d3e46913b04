use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    BadRequest(String),
    Kernel(Report<KernelError>),
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            ErrorStatus::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ErrorStatus::Kernel(report) => {
                let context = report.current_context();
                let status = match context {
                    KernelError::Validation(_) => StatusCode::BAD_REQUEST,
                    KernelError::NotFound => StatusCode::NOT_FOUND,
                    KernelError::NotUnique => StatusCode::CONFLICT,
                    KernelError::Timeout | KernelError::Internal => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, context.to_string())
            }
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{self:?}");
        } else {
            tracing::debug!("{self:?}");
        }
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
