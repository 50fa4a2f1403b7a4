use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use dssgroup_contact::ContactRules;
use dssgroup_notification::Dispatcher;
use tower_http::cors::CorsLayer;

mod contact;
mod health;
mod services;

pub use contact::ContactForm;

#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<ContactRules>,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(rules: ContactRules, dispatcher: Dispatcher) -> Self {
        Self {
            rules: Arc::new(rules),
            dispatcher,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .route("/api/services", get(services::list))
        .fallback_service(crate::assets::SpaService::new())
        .with_state(app_state)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        .layer(CorsLayer::permissive())
}
