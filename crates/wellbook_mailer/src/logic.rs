// --- File: crates/wellbook_mailer/src/logic.rs ---
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::env;
use thiserror::Error;
use tracing::info;
use wellbook_config::SmtpConfig;

use wellbook_common::services::NotificationResult;

/// Mailer-specific error types.
#[derive(Error, Debug)]
pub enum MailerError {
    /// Missing or incomplete SMTP configuration
    #[error("SMTP configuration missing or incomplete")]
    ConfigError,

    /// A sender or recipient address failed to parse
    #[error("Invalid email address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("Failed to build email: {0}")]
    BuildError(#[from] lettre::error::Error),

    /// The SMTP conversation failed
    #[error("SMTP transport error: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),
}

/// The address confirmations are sent from.
///
/// Falls back to the SMTP username, which is the common case for Gmail style accounts.
pub fn sender_address(config: &SmtpConfig) -> &str {
    config.from.as_deref().unwrap_or(&config.username)
}

/// Build the pooled STARTTLS transport used for outgoing confirmations.
///
/// The account password is read from the `SMTP_PASSWORD` environment variable
/// so it never lives in configuration files.
pub fn build_transport(
    config: &SmtpConfig,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
    let password = env::var("SMTP_PASSWORD").map_err(|_| MailerError::ConfigError)?;
    let credentials = Credentials::new(config.username.clone(), password);

    Ok(
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(credentials)
            .build(),
    )
}

/// Assemble a single message addressed to every recipient.
pub fn build_message(
    from: &str,
    to: &[String],
    subject: &str,
    body: &str,
    is_html: bool,
) -> Result<Message, MailerError> {
    let mut builder = Message::builder()
        .from(from.parse::<Mailbox>()?)
        .subject(subject);

    for recipient in to {
        builder = builder.to(recipient.parse::<Mailbox>()?);
    }

    let content_type = if is_html {
        ContentType::TEXT_HTML
    } else {
        ContentType::TEXT_PLAIN
    };

    Ok(builder.header(content_type).body(body.to_string())?)
}

/// Send an email through the given transport and report the outcome.
pub async fn send_email(
    transport: &AsyncSmtpTransport<Tokio1Executor>,
    from: &str,
    to: &[String],
    subject: &str,
    body: &str,
    is_html: bool,
) -> Result<NotificationResult, MailerError> {
    let message = build_message(from, to, subject, body, is_html)?;

    let response = transport.send(message).await?;

    info!(
        "[Mailer Logic] Email sent to {} recipient(s), server replied: {}",
        to.len(),
        response.code()
    );

    Ok(NotificationResult {
        id: response.first_line().map(|line| line.to_string()),
        status: "sent".to_string(),
    })
}
