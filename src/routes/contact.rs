use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use anyhow::Context;
use tracing::field::display;
use tracing::Span;

use crate::domain::{ContactSubmission, Notification, ValidationError};
use crate::email_client::{EmailClient, MailError};
use crate::routes::helpers::{log_server_error, submitted_fields, SubmissionResponse};
use crate::utils::error_chain_fmt;

const CONTACT_ACCEPTED: &str =
    "Thank you for your message! We will get back to you within 24 hours.";

/// Contact form error type
///
/// `Display` is what the visitor reads, the cause chain only goes to the logs.
#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Sorry, there was an error sending your message. Please try again later.")]
    SendError(#[source] MailError),
    #[error("An unexpected error occurred. Please try again later.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl fmt::Debug for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::SendError(_) | Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        SubmissionResponse::rejected(self.status_code(), &self.to_string())
    }
}

/// Contact form handler
#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(request, payload, email_client),
    fields(visitor_name = tracing::field::Empty, visitor_email = tracing::field::Empty)
)]
pub async fn contact(
    request: HttpRequest,
    payload: web::Payload,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    // Decode and validate the submission
    let fields = submitted_fields(&request, payload)
        .await
        .context("Failed to decode the contact form body")
        .inspect_err(|e| log_server_error(e, "Contact form error"))?;
    let submission = ContactSubmission::try_from(fields)?;
    Span::current()
        .record("visitor_name", display(&submission.name))
        .record("visitor_email", display(&submission.email));

    // Relay the submission to the mailbox
    email_client
        .send_email(&submission.subject(), &submission.text_body())
        .await
        .map_err(|e| {
            log_server_error(&e, "Email sending failed");
            ContactError::SendError(e)
        })?;

    Ok(SubmissionResponse::accepted(CONTACT_ACCEPTED))
}
