mod contact_email;
mod contact_submission;
mod newsletter_submission;
mod submitted_fields;

pub use contact_email::ContactEmail;
pub use contact_submission::ContactSubmission;
pub use newsletter_submission::NewsletterSubmission;
pub use submitted_fields::SubmittedFields;

/// Name under which the product appears in emails and API responses
pub const SERVICE_NAME: &str = "Unified Cache Optimizer";

/// Reasons a submission is rejected before anything is sent
///
/// The `Display` text is shown to the visitor as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields (Name, Email, Message).")]
    MissingRequiredFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// A submission that can be relayed as a plain-text email
pub trait Notification {
    /// Email subject line
    fn subject(&self) -> String;

    /// Plain-text email body
    fn text_body(&self) -> String;
}
