use actix_web::http::{header::ContentType, StatusCode};
use actix_web::HttpResponse;
use log::error;
use serde::Serialize;

use crate::error::{Error, ErrorCode, ValidationErrors};
use crate::rest::ErrorRecorder;

/// Body of every non-2xx response produced by the task handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "ValidationErrors::is_empty")]
    pub validations: ValidationErrors,
}

/// Turns a failed call into a response.
///
/// `msg` is what the caller is willing to show; the status code and whether
/// field validations are exposed come only from the error's classification.
/// Unclassified errors are reported as "internal error".
pub fn render_error_response(recorder: &dyn ErrorRecorder, msg: &str, err: &Error) -> HttpResponse {
    let mut resp = ErrorResponse {
        error: msg.to_string(),
        validations: ValidationErrors::new(),
    };

    let status = match err.code() {
        None => {
            resp.error = "internal error".to_string();
            StatusCode::INTERNAL_SERVER_ERROR
        }
        Some(ErrorCode::NotFound) => StatusCode::NOT_FOUND,
        Some(ErrorCode::InvalidArgument) => {
            if let Some(validations) = err.validations() {
                resp.validations = validations.clone();
            }
            StatusCode::BAD_REQUEST
        }
        Some(ErrorCode::Unknown) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    recorder.record(err);

    render_response(&resp, status)
}

/// Serializes `res` as JSON. A value that cannot be serialized yields an
/// empty 500.
pub fn render_response<T: Serialize + ?Sized>(res: &T, status: StatusCode) -> HttpResponse {
    match serde_json::to_vec(res) {
        Ok(content) => HttpResponse::build(status)
            .insert_header(ContentType::json())
            .body(content),
        Err(e) => {
            error!("Error serializing response: {}", e);
            HttpResponse::InternalServerError()
                .insert_header(ContentType::json())
                .finish()
        }
    }
}
