#[cfg(feature = "ssr")]
mod handler;
#[cfg(feature = "ssr")]
mod resend;

#[cfg(feature = "ssr")]
pub use handler::{contact_handler, contact_router, Relay};
#[cfg(feature = "ssr")]
pub use resend::ResendMailer;

use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub const CONTACT_PATH: &str = "/api/contact";
pub const SENT_MESSAGE: &str = "Email sent successfully";
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const FAILED_MESSAGE: &str = "Failed to send message";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub email: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub message: String,
}

fn empty_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl OutgoingEmail {
    /// Notification for a submitted form. Field values are embedded as given.
    pub fn for_submission(form: &ContactForm, from: &str, to: &str) -> Self {
        let ContactForm {
            name,
            email,
            message,
        } = form;
        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: format!("New message from {name}"),
            html: format!(
                "<h2>New Contact Form Submission</h2>\n\
                 <p><strong>Name:</strong> {name}</p>\n\
                 <p><strong>Email:</strong> {email}</p>\n\
                 <p><strong>Message:</strong></p>\n\
                 <p>{message}</p>\n"
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Provider rejected email with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers a single email. No retries, no queueing.
pub trait Mailer: Send + Sync + 'static {
    fn send(&self, email: OutgoingEmail) -> impl Future<Output = Result<(), MailError>> + Send;
}

/// Body of every `/api/contact` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Sent { message: String },
    Failed { error: String },
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self::Sent {
            message: SENT_MESSAGE.to_string(),
        }
    }

    pub fn failed(error: &str) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }
}

/// Submission state of the connect page form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    /// Milliseconds a finished submission stays on screen before the form resets to idle.
    pub const SETTLE_MS: u64 = 3000;

    pub fn from_status_code(status: u16) -> Self {
        if (200..300).contains(&status) {
            Self::Success
        } else {
            Self::Error
        }
    }

    pub fn can_submit(&self) -> bool {
        !matches!(self, Self::Sending)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Success => "Message Sent!",
            Self::Error => "Error! Try Again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(form("Ada", "ada@example.com", "Hi").validate().is_ok());
        assert_eq!(
            form("", "a@b.com", "hi").validate(),
            Err(ContactError::MissingFields)
        );
        // whitespace counts as content
        assert!(form("   ", "a@b.com", "hi").validate().is_ok());
        assert!(form("Ada", "  ", "hi").validate().is_ok());
        assert_eq!(
            form("Ada", "a@b.com", "").validate(),
            Err(ContactError::MissingFields)
        );
    }

    #[test]
    fn test_missing_json_fields_default_empty() {
        let parsed: ContactForm = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(parsed, form("Ada", "", ""));
        assert!(parsed.validate().is_err());

        let parsed: ContactForm =
            serde_json::from_str(r#"{"name":null,"email":"a@b.com","message":"hi"}"#).unwrap();
        assert_eq!(parsed, form("", "a@b.com", "hi"));
    }

    #[test]
    fn test_email_rendering() {
        let email = OutgoingEmail::for_submission(
            &form("Ada", "ada@example.com", "<b>Hi</b>"),
            "from@site.dev",
            "owner@site.dev",
        );
        assert_eq!(email.subject, "New message from Ada");
        assert_eq!(email.from, "from@site.dev");
        assert_eq!(email.to, "owner@site.dev");
        assert!(email.html.contains("<p><strong>Email:</strong> ada@example.com</p>"));
        // passed through untouched
        assert!(email.html.contains("<p><b>Hi</b></p>"));
    }

    #[test]
    fn test_response_shapes() {
        assert_eq!(
            serde_json::to_value(ContactResponse::sent()).unwrap(),
            serde_json::json!({ "message": "Email sent successfully" })
        );
        assert_eq!(
            serde_json::to_value(ContactResponse::failed(MISSING_FIELDS_MESSAGE)).unwrap(),
            serde_json::json!({ "error": "All fields are required" })
        );
    }

    #[test]
    fn test_form_status() {
        assert_eq!(FormStatus::from_status_code(200), FormStatus::Success);
        assert_eq!(FormStatus::from_status_code(400), FormStatus::Error);
        assert_eq!(FormStatus::from_status_code(500), FormStatus::Error);
        assert!(!FormStatus::Sending.can_submit());
        assert!(FormStatus::Error.can_submit());
        assert!(FormStatus::Success.is_settled());
        assert!(!FormStatus::Idle.is_settled());
    }
}
