use crate::domain::submitted_fields::trimmed;
use crate::domain::{ContactEmail, Notification, SubmittedFields, ValidationError, SERVICE_NAME};

/// Validated contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: ContactEmail,
    /// Empty when the visitor left it out
    pub company: String,
    pub message: String,
}

impl TryFrom<SubmittedFields> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(fields: SubmittedFields) -> Result<Self, Self::Error> {
        let name = trimmed(fields.name.as_deref());
        let email = trimmed(fields.email.as_deref());
        let company = trimmed(fields.company.as_deref());
        let message = trimmed(fields.message.as_deref());

        // Required fields are reported before the address shape
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        let email = ContactEmail::parse(&email)?;

        Ok(Self {
            name,
            email,
            company,
            message,
        })
    }
}

impl Notification for ContactSubmission {
    fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    fn text_body(&self) -> String {
        let company = if self.company.is_empty() {
            "Not provided"
        } else {
            self.company.as_str()
        };
        format!(
            "New contact form submission from the {SERVICE_NAME} website:\n\
            \n\
            Name: {name}\n\
            Email: {email}\n\
            Company: {company}\n\
            \n\
            Message:\n\
            {message}\n\
            \n\
            ---\n\
            This email was sent from the contact form on the {SERVICE_NAME} website.\n",
            name = self.name,
            email = self.email,
            message = self.message,
        )
    }
}
