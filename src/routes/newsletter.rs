use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use anyhow::Context;
use tracing::field::display;
use tracing::Span;

use crate::domain::{NewsletterSubmission, Notification, ValidationError};
use crate::email_client::{EmailClient, MailError};
use crate::routes::helpers::{log_server_error, submitted_fields, SubmissionResponse};
use crate::utils::error_chain_fmt;

const NEWSLETTER_ACCEPTED: &str = "Thank you for subscribing! You will receive updates about our beta program and new features.";

/// Newsletter signup error type
#[derive(thiserror::Error)]
pub enum NewsletterError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Sorry, there was an error processing your subscription. Please try again later.")]
    SendError(#[source] MailError),
    #[error("An error occurred. Please try again later.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl fmt::Debug for NewsletterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for NewsletterError {
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

/// Newsletter signup handler
#[tracing::instrument(
    name = "Relaying a newsletter subscription",
    skip(request, payload, email_client),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn newsletter(
    request: HttpRequest,
    payload: web::Payload,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, NewsletterError> {
    let fields = submitted_fields(&request, payload)
        .await
        .context("Failed to decode the newsletter form body")
        .inspect_err(|e| log_server_error(e, "Newsletter error"))?;
    let submission = NewsletterSubmission::try_from(fields)?;
    Span::current().record("subscriber_email", display(&submission.email));

    email_client
        .send_email(&submission.subject(), &submission.text_body())
        .await
        .map_err(|e| {
            log_server_error(&e, "Newsletter email sending failed");
            NewsletterError::SendError(e)
        })?;

    Ok(SubmissionResponse::accepted(NEWSLETTER_ACCEPTED))
}
