//! Outbound mail with a logging fallback.
//!
//! Delivery is always best-effort from the caller's perspective: a flow
//! that sends mail (OTP issue, password-change notice) must not fail
//! because the relay is down or unconfigured.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use storekeep_core::config::mail::MailConfig;
use storekeep_core::error::AppError;
use storekeep_core::result::AppResult;

/// Sends application mail over SMTP, or logs it when no credentials are
/// configured.
#[derive(Debug, Clone)]
pub enum Mailer {
    /// Deliver through an SMTP relay with implicit TLS.
    Smtp {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        from: Mailbox,
    },
    /// No credentials configured; log the message body instead.
    Log,
}

impl Mailer {
    /// Builds a mailer from configuration.
    ///
    /// Empty SMTP credentials select the logging variant rather than an
    /// error, so development setups run without a relay.
    pub fn from_config(config: &MailConfig) -> AppResult<Self> {
        if !config.is_configured() {
            info!("SMTP credentials not configured, mail will be logged");
            return Ok(Self::Log);
        }

        let from: Mailbox = config
            .sender()
            .parse()
            .map_err(|e| AppError::configuration(format!("Invalid mail from address: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| AppError::configuration(format!("Invalid SMTP relay: {e}")))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self::Smtp { transport, from })
    }

    /// Sends a plain-text message.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        match self {
            Self::Log => {
                info!(to, subject, body, "Mail delivery skipped (logging mode)");
                Ok(())
            }
            Self::Smtp { transport, from } => {
                let to: Mailbox = to
                    .parse()
                    .map_err(|e| AppError::validation(format!("Invalid recipient address: {e}")))?;

                let message = Message::builder()
                    .from(from.clone())
                    .to(to)
                    .subject(subject)
                    .body(body.to_string())
                    .map_err(|e| AppError::internal(format!("Failed to build message: {e}")))?;

                transport
                    .send(message)
                    .await
                    .map_err(|e| AppError::external_service(format!("SMTP send failed: {e}")))?;

                Ok(())
            }
        }
    }

    /// Sends a message, logging a warning instead of propagating failure.
    pub async fn send_best_effort(&self, to: &str, subject: &str, body: &str) {
        if let Err(e) = self.send(to, subject, body).await {
            warn!(to, subject, error = %e, "Mail delivery failed");
        }
    }
}
