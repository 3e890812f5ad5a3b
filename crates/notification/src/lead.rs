use askama::Template;
use perksplus_lead::LeadSubmission;

use crate::OutgoingEmail;

pub const LEAD_SUBJECT: &str = "New Join Us Request - Perks Plus";

#[derive(Template)]
#[template(path = "lead.html")]
pub struct LeadHtmlTemplate<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub organization: Option<&'a str>,
    pub role: Option<&'a str>,
    pub message: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "lead.txt")]
pub struct LeadPlainTemplate<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub organization: Option<&'a str>,
    pub role: Option<&'a str>,
    pub message: Option<&'a str>,
}

/// Builds the operator notification for one lead.
pub fn compose(submission: &LeadSubmission, to: impl Into<String>) -> anyhow::Result<OutgoingEmail> {
    let html = LeadHtmlTemplate {
        email: &submission.email,
        name: submission.name.as_deref(),
        organization: submission.organization.as_deref(),
        role: submission.role.as_deref(),
        message: submission.message.as_deref(),
    }
    .render()?;

    let plain = LeadPlainTemplate {
        email: &submission.email,
        name: submission.name.as_deref(),
        organization: submission.organization.as_deref(),
        role: submission.role.as_deref(),
        message: submission.message.as_deref(),
    }
    .render()?;

    Ok(OutgoingEmail {
        to: to.into(),
        subject: LEAD_SUBJECT.to_owned(),
        plain,
        html,
    })
}
