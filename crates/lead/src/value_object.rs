use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Roles offered by the contact form "I am an:" selector.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Role {
    Investor,
    #[serde(rename = "Fleet Owner")]
    #[strum(serialize = "Fleet Owner")]
    FleetOwner,
    #[serde(rename = "Technology Partner")]
    #[strum(serialize = "Technology Partner")]
    TechnologyPartner,
    Other,
}

/// Form inputs that can be marked required.
#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Email,
    Role,
    Message,
}

#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// Home page short form, email only.
    #[default]
    JoinUs,
    /// Contact page long form.
    Contact,
}

impl FormKind {
    /// Fields that must be filled before a submission leaves the browser.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            FormKind::JoinUs => &[Field::Email],
            FormKind::Contact => &[Field::Email, Field::Role, Field::Message],
        }
    }
}
