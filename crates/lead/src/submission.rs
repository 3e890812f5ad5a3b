use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const EMAIL_REQUIRED: &str = "Email is required";

/// A single lead as it travels from the form to the mail relay.
///
/// Write-once: it is built at submit time, serialized, consumed by the relay
/// to compose one notification and then dropped.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct LeadSubmission {
    #[serde(default)]
    #[validate(custom(function = "not_empty"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LeadSubmission {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Turns empty optional fields into `None`. Values are otherwise kept
    /// verbatim, surrounding whitespace included.
    pub fn normalized(self) -> Self {
        Self {
            email: self.email,
            name: present(self.name),
            organization: present(self.organization),
            role: present(self.role),
            message: present(self.message),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(EMAIL_REQUIRED)));
    }

    Ok(())
}

/// JSON body returned by the mail relay for every outcome.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
