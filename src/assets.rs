use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::{convert::Infallible, future::Future, pin::Pin};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

const INDEX: &str = "index.html";

/// Serves the embedded single-page application.
///
/// Files are matched by exact path. The root and every path without a
/// matching file get `index.html` so client-side routing can take over.
#[derive(Default, Clone)]
pub struct SpaService;

impl SpaService {
    pub fn new() -> Self {
        Self
    }
}

impl Service<Request> for SpaService {
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().trim_start_matches('/').to_owned();

        Box::pin(async move { Ok(serve(&method, &path)) })
    }
}

fn serve(method: &Method, path: &str) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    if !path.is_empty() {
        if let Some(content) = Assets::get(path) {
            let mime = mime_guess::from_path(path).first_or_octet_stream();

            return (
                [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
                Body::from(content.data),
            )
                .into_response();
        }
    }

    match Assets::get(INDEX) {
        Some(content) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8".to_owned())],
            Body::from(content.data),
        )
            .into_response(),
        _ => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_embedded() {
        assert!(Assets::get(INDEX).is_some());
    }

    #[test]
    fn post_to_page_is_not_allowed() {
        let response = serve(&Method::POST, "about");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn unmatched_path_falls_back_to_index() {
        let response = serve(&Method::GET, "services/security");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }
}
