use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};

use crate::domain::SubmittedFields;

/// JSON answer to a form submission
#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

impl SubmissionResponse {
    /// 200 OK with a success message
    pub fn accepted(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(Self {
            success: true,
            message: message.to_owned(),
        })
    }

    /// Failure with the given status and a message safe to show to visitors
    pub fn rejected(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(Self {
            success: false,
            message: message.to_owned(),
        })
    }
}

/// Read the whole request body and normalize it into submitted fields
///
/// The body is read without a size cap, so long messages get the same JSON
/// answers as short ones. An unparsable `Content-Type` counts as absent.
pub async fn submitted_fields(
    request: &HttpRequest,
    payload: web::Payload,
) -> Result<SubmittedFields, anyhow::Error> {
    let body = payload
        .to_bytes()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read the request body: {e}"))?;
    let content_type = request.mime_type().ok().flatten();
    Ok(SubmittedFields::negotiate(content_type.as_ref(), &body)?)
}

/// Record a server-side failure with its full cause chain
pub fn log_server_error<T>(error: &T, context: &str)
where
    T: fmt::Debug + fmt::Display,
{
    tracing::error!(
        error.cause_chain = ?error,
        error.message = %error,
        "{context}"
    );
}
