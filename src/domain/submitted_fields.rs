use actix_web::mime::{self, Mime};
use url::form_urlencoded;

/// Raw form fields, normalized from either a JSON or a URL-encoded body
///
/// Missing keys and JSON `null` both end up as `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SubmittedFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl SubmittedFields {
    /// Decode a request body according to its media type
    ///
    /// JSON media types are parsed strictly, everything else is read as
    /// `application/x-www-form-urlencoded`.
    pub fn negotiate(content_type: Option<&Mime>, body: &[u8]) -> Result<Self, serde_json::Error> {
        if content_type.is_some_and(is_json) {
            Self::from_json(body)
        } else {
            Ok(Self::from_form(body))
        }
    }

    /// Parse a JSON object body, a bare `null` counts as an empty submission
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: Option<Self> = serde_json::from_slice(body)?;
        Ok(fields.unwrap_or_default())
    }

    /// Parse a URL-encoded body, keeping the first value of repeated keys
    pub fn from_form(body: &[u8]) -> Self {
        let mut fields = Self::default();
        for (key, value) in form_urlencoded::parse(body) {
            let slot = match key.as_ref() {
                "name" => &mut fields.name,
                "email" => &mut fields.email,
                "company" => &mut fields.company,
                "message" => &mut fields.message,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        fields
    }
}

/// Trimmed value of an optional field, empty when absent
pub(super) fn trimmed(field: Option<&str>) -> String {
    field.map(str::trim).unwrap_or_default().to_owned()
}

/// `application/json` or any `application/*+json`
fn is_json(content_type: &Mime) -> bool {
    content_type.type_() == mime::APPLICATION
        && (content_type.subtype() == mime::JSON || content_type.suffix() == Some(mime::JSON))
}
