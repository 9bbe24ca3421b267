use crate::domain::submitted_fields::trimmed;
use crate::domain::{ContactEmail, Notification, SubmittedFields, ValidationError, SERVICE_NAME};

/// Validated newsletter signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubmission {
    pub email: ContactEmail,
}

impl TryFrom<SubmittedFields> for NewsletterSubmission {
    type Error = ValidationError;

    fn try_from(fields: SubmittedFields) -> Result<Self, Self::Error> {
        // A blank address gets the same answer as a malformed one
        let email = ContactEmail::parse(&trimmed(fields.email.as_deref()))?;
        Ok(Self { email })
    }
}

impl Notification for NewsletterSubmission {
    fn subject(&self) -> String {
        format!("New Newsletter Subscription - {SERVICE_NAME}")
    }

    fn text_body(&self) -> String {
        format!(
            "New newsletter subscription for {SERVICE_NAME}:\n\
            \n\
            Email: {email}\n\
            \n\
            ---\n\
            This email was sent from the newsletter subscription form on the {SERVICE_NAME} website.\n",
            email = self.email,
        )
    }
}
