use std::sync::Arc;

use dssgroup_contact::ContactSubmission;

use crate::{EmailService, Notification, NotificationConfig, Notifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Skipped,
    Failed { reason: String },
}

#[derive(Clone)]
struct Route {
    notifier: Arc<dyn Notifier>,
    destination: String,
}

/// Forwards validated submissions to the operator inbox, at most once each.
///
/// A disabled dispatcher never touches the network. Delivery problems come
/// back as [`DispatchOutcome::Failed`] and are logged; they are never turned
/// into an error for the caller.
#[derive(Clone, Default)]
pub struct Dispatcher {
    route: Option<Route>,
}

impl Dispatcher {
    pub fn disabled() -> Self {
        Self { route: None }
    }

    pub fn new(notifier: Arc<dyn Notifier>, destination: impl Into<String>) -> Self {
        Self {
            route: Some(Route {
                notifier,
                destination: destination.into(),
            }),
        }
    }

    pub fn from_config(config: &NotificationConfig) -> anyhow::Result<Self> {
        if !config.enabled {
            tracing::info!("Notifications disabled, contact submissions will not be forwarded");
            return Ok(Self::disabled());
        }

        if config.destination.trim().is_empty() {
            anyhow::bail!("notification destination is required when notifications are enabled");
        }

        let service = EmailService::new(config)?;
        tracing::info!(destination = %config.destination, "Notifications enabled");

        Ok(Self::new(Arc::new(service), config.destination.trim()))
    }

    pub fn is_enabled(&self) -> bool {
        self.route.is_some()
    }

    pub async fn dispatch(&self, submission: ContactSubmission) -> DispatchOutcome {
        let Some(route) = &self.route else {
            tracing::debug!("Notification transport not configured, skipping");
            return DispatchOutcome::Skipped;
        };

        let notification = format_notification(&submission, &route.destination);

        match route.notifier.send(&notification).await {
            Ok(()) => {
                tracing::info!(
                    destination = %route.destination,
                    "Contact notification sent successfully"
                );
                DispatchOutcome::Sent
            }
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::error!(
                    error = %reason,
                    destination = %route.destination,
                    "Failed to send contact notification"
                );
                DispatchOutcome::Failed { reason }
            }
        }
    }
}

pub fn format_notification(submission: &ContactSubmission, to: &str) -> Notification {
    Notification {
        to: to.to_owned(),
        reply_to: Some(submission.email().to_owned()),
        subject: format!("New Inquiry from {}", submission.name()),
        body: format!(
            "Name: {}\nPhone: {}\nEmail: {}\nService: {}\nMessage: {}\n",
            submission.name(),
            submission.phone(),
            submission.email(),
            submission.service(),
            submission.message(),
        ),
    }
}
