use axum::{Json, extract::State};
use serde::Serialize;

use crate::routes::AppState;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub id: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct ServiceList {
    pub services: Vec<ServiceEntry>,
}

/// GET /api/services - the services a visitor can pick on the contact form
pub async fn list(State(app_state): State<AppState>) -> Json<ServiceList> {
    let services = app_state
        .rules
        .valid_services
        .iter()
        .map(|name| ServiceEntry {
            id: slug(name),
            name: name.trim().to_owned(),
        })
        .collect();

    Json(ServiceList { services })
}

fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
