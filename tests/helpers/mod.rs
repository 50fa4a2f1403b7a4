//! Shared router and transport fakes for HTTP tests

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use dssgroup::AppState;
use dssgroup_contact::ContactRules;
use dssgroup_notification::{Dispatcher, Notification, Notifier};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Counts send attempts and optionally fails every one of them.
#[derive(Default)]
pub struct FakeNotifier {
    attempts: AtomicUsize,
    fail: bool,
}

impl FakeNotifier {
    pub fn failing() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send(&self, _notification: &Notification) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            anyhow::bail!("554 Message rejected: throttled");
        }

        Ok(())
    }
}

pub fn app_without_notifications() -> Router {
    dssgroup::router(AppState::new(ContactRules::default(), Dispatcher::disabled()))
}

pub fn app_with(notifier: Arc<FakeNotifier>) -> Router {
    let dispatcher = Dispatcher::new(notifier, "info@dssgroup.in");
    dssgroup::router(AppState::new(ContactRules::default(), dispatcher))
}

pub fn valid_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "phone": "+91-9876543210",
        "email": "jane@example.com",
        "service": "Audit",
        "message": "Please contact me."
    })
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
