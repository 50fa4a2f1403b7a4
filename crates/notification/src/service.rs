//! Email notification service using lettre

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub destination: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            destination: String::new(),
            from_address: default_from_address(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

fn default_from_address() -> String {
    "noreply@dssgroup.in".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// A formatted plain text message ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Anything that can deliver a [`Notification`] to its destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()>;
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &NotificationConfig) -> anyhow::Result<Self> {
        let from = config
            .from_address
            .parse::<Mailbox>()
            .with_context(|| format!("invalid from address `{}`", config.from_address))?;

        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            // Plain connection upgraded with STARTTLS, as expected on port 587
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer, from })
    }

    /// Builds the plain text email for `notification`.
    ///
    /// An unparsable `reply_to` is dropped rather than failing the message.
    pub fn message(&self, notification: &Notification) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(notification.to.parse()?)
            .subject(notification.subject.as_str());

        if let Some(reply_to) = notification
            .reply_to
            .as_deref()
            .and_then(|address| address.parse::<Mailbox>().ok())
        {
            builder = builder.reply_to(reply_to);
        }

        Ok(builder
            .header(header::ContentType::TEXT_PLAIN)
            .body(notification.body.clone())?)
    }
}

#[async_trait]
impl Notifier for EmailService {
    #[tracing::instrument(skip_all, fields(to = %notification.to, subject = %notification.subject))]
    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        tracing::info!("Sending email text plain");

        let message = self.message(notification)?;

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
