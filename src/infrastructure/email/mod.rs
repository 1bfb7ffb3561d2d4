//! Mail Delivery
//!
//! SMTP delivery for candidate notifications. Sends happen on a blocking
//! task off the async runtime; callers get an immediate result that only
//! reflects queueing, never delivery.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::MailSettings;
use crate::shared::error::AppError;

/// Outgoing mail contract: `{to, subject, html}`.
pub trait MailSender: Send + Sync {
    /// Queue a message for delivery.
    fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError>;
}

/// SMTP mailer backed by lettre.
pub struct SmtpMailer {
    settings: MailSettings,
}

impl SmtpMailer {
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }
}

impl MailSender for SmtpMailer {
    fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        let settings = self.settings.clone();
        let to = to.to_string();
        let subject = subject.to_string();
        let html = html.to_string();

        tracing::debug!(to = %to, "Queueing notification email");

        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let message = Message::builder()
                    .from(
                        format!("{} <{}>", settings.from_name, settings.from_email)
                            .parse()
                            .map_err(|e| AppError::Internal(format!("Invalid from address: {e}")))?,
                    )
                    .to(to
                        .parse()
                        .map_err(|e| AppError::Internal(format!("Invalid recipient: {e}")))?)
                    .subject(subject)
                    .header(ContentType::TEXT_HTML)
                    .body(html)
                    .map_err(|e| AppError::Internal(format!("Failed to build message: {e}")))?;

                let creds = Credentials::new(settings.smtp_user, settings.smtp_pass);

                let mailer = SmtpTransport::relay(&settings.smtp_server)
                    .map_err(|e| AppError::Internal(format!("SMTP relay error: {e}")))?
                    .credentials(creds)
                    .build();

                mailer
                    .send(&message)
                    .map_err(|e| AppError::Internal(format!("SMTP send error: {e}")))
            })
            .await;

            match result {
                Ok(Ok(_)) => tracing::debug!("Notification email sent"),
                Ok(Err(e)) => tracing::warn!("Could not send notification email: {e}"),
                Err(e) => tracing::warn!("Mail task failed to execute: {e}"),
            }
        });

        Ok(())
    }
}

/// Mailer used when no SMTP configuration is present; logs and drops.
pub struct NoopMailer;

impl MailSender for NoopMailer {
    fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), AppError> {
        tracing::debug!(to = %to, subject = %subject, "Mail disabled; dropping notification");
        Ok(())
    }
}
