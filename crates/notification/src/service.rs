//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Sender address, falls back to `smtp_username` when empty.
    #[serde(default)]
    pub from_address: String,
    /// Operator inbox receiving lead notifications.
    #[serde(default)]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::new(),
            contact_address: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

impl EmailConfig {
    pub fn sender(&self) -> &str {
        if self.from_address.is_empty() {
            &self.smtp_username
        } else {
            &self.from_address
        }
    }
}

/// A composed message, ready for a [`Mailer`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub plain: String,
    pub html: String,
}

/// Delivers one message or reports why it could not.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()>;
}

/// SMTP-backed mailer
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a new mailer from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.sender(),
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.sender().parse()?,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email");

        let message = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse()?)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.plain, email.html))?;

        // SmtpTransport is blocking
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_falls_back_to_username() {
        let mut config = EmailConfig {
            smtp_username: "perksplusquery@gmail.com".to_owned(),
            ..Default::default()
        };
        assert_eq!(config.sender(), "perksplusquery@gmail.com");

        config.from_address = "noreply@perksplus.in".to_owned();
        assert_eq!(config.sender(), "noreply@perksplus.in");
    }

    #[test]
    fn test_new_rejects_unparsable_sender() {
        let config = EmailConfig {
            smtp_host: "localhost".to_owned(),
            smtp_port: 1025,
            ..Default::default()
        };

        assert!(SmtpMailer::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_recipient() {
        let config = EmailConfig {
            smtp_host: "localhost".to_owned(),
            smtp_port: 1025,
            from_address: "noreply@perksplus.in".to_owned(),
            ..Default::default()
        };
        let mailer = SmtpMailer::new(&config).unwrap();

        let result = mailer
            .send(OutgoingEmail {
                to: "not an address".to_owned(),
                subject: "subject".to_owned(),
                plain: "plain".to_owned(),
                html: "<p>html</p>".to_owned(),
            })
            .await;

        assert!(result.is_err());
    }
}
