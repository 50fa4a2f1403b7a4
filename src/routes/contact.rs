use std::collections::HashMap;

use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::header,
};
use dssgroup_notification::DispatchOutcome;
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState};

/// Raw contact form fields, from either a JSON object or an urlencoded body.
pub struct ContactForm(pub HashMap<String, String>);

impl<S> FromRequest<S> for ContactForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(fields) = Json::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

            return Ok(Self(fields));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

            return Ok(Self(fields));
        }

        Err(AppError::UnsupportedMediaType)
    }
}

/// POST /api/contact
///
/// Delivery problems are only logged: once the form is valid the visitor
/// always gets the same acknowledgment.
pub async fn action(
    State(app_state): State<AppState>,
    ContactForm(fields): ContactForm,
) -> Result<Json<Value>, AppError> {
    let submission = match dssgroup_contact::validate(&fields, &app_state.rules) {
        Ok(submission) => submission,
        Err(err) => {
            tracing::info!(error = %err, "Rejected contact form submission");
            return Err(err.into());
        }
    };

    tracing::info!(
        name = %submission.name(),
        service = %submission.service(),
        phone = %submission.phone(),
        "New contact form submission"
    );

    // Failed deliveries are already logged by the dispatcher
    match app_state.dispatcher.dispatch(submission).await {
        DispatchOutcome::Sent => tracing::debug!("Contact submission forwarded"),
        DispatchOutcome::Skipped => tracing::info!("Contact submission received, not forwarded"),
        DispatchOutcome::Failed { .. } => tracing::debug!("Contact submission not forwarded"),
    }

    Ok(Json(json!({ "status": "ok" })))
}
