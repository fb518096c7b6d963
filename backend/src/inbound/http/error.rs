//! HTTP adapter mapping for domain errors and roster rejections.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Roster rejections (unknown user, duplicate favourite, ...) are not
//! failures at this boundary: they are answered with `200 {"message": ...}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::{Error, ErrorCode, RosterError, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Body of every message-only response.
#[derive(Debug, Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Answer a roster rejection with `200 {"message"}`; propagate faults.
pub(crate) fn rejection_response(err: RosterError) -> ApiResult<HttpResponse> {
    match err {
        RosterError::Fault(fault) => Err(fault),
        rejection => {
            info!(reason = %rejection, "roster request rejected");
            Ok(HttpResponse::Ok().json(MessageResponse::new(rejection.to_string())))
        }
    }
}

/// Render a successful roster result with `respond`, or answer the rejection.
pub(crate) fn roster_response<T>(
    result: Result<T, RosterError>,
    respond: impl FnOnce(T) -> HttpResponse,
) -> ApiResult<HttpResponse> {
    result.map_or_else(rejection_response, |value| Ok(respond(value)))
}
