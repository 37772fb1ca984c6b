use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_types::errors::ApplicationErrorResponse;
use serde::Serialize;

use crate::logger;

#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    message: String,
    code: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: ErrorDetail {
                message: self.message.clone(),
                code: format!("{}", self.status.as_u16()),
            },
        });
        (self.status, body).into_response()
    }
}

impl From<error_stack::Report<ApplicationErrorResponse>> for HttpError {
    fn from(report: error_stack::Report<ApplicationErrorResponse>) -> Self {
        logger::error!(error = ?report);
        let (status, api_error) = match report.current_context() {
            ApplicationErrorResponse::BadRequest(api_error) => {
                (StatusCode::BAD_REQUEST, api_error)
            }
            ApplicationErrorResponse::InternalServerError(api_error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, api_error)
            }
        };
        Self {
            status,
            message: api_error.error_message.clone(),
        }
    }
}
