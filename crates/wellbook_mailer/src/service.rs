// --- File: crates/wellbook_mailer/src/service.rs ---
//! SMTP notification service implementation.
//!
//! This module provides an implementation of the NotificationService trait
//! backed by lettre's pooled async SMTP transport.

use std::sync::Arc;

use lettre::{AsyncSmtpTransport, Tokio1Executor};
use wellbook_common::services::{BoxFuture, BoxedError, NotificationResult, NotificationService};
use wellbook_config::AppConfig;

use crate::logic::{self, MailerError};

/// SMTP notification service implementation.
pub struct SmtpNotificationService {
    config: Arc<AppConfig>,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotificationService {
    /// Create a new SMTP notification service.
    ///
    /// The transport is built once and its connections are pooled across sends.
    pub fn new(config: Arc<AppConfig>) -> Result<Self, MailerError> {
        let transport = logic::build_transport(&config.smtp)?;
        Ok(Self { config, transport })
    }
}

impl NotificationService for SmtpNotificationService {
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &[String],
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_vec();
        let subject = subject.to_string();
        let body = body.to_string();

        Box::pin(async move {
            let from = logic::sender_address(&self.config.smtp);
            logic::send_email(&self.transport, from, &to, &subject, &body, is_html)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}
