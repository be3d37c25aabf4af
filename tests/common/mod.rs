#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use api_responder::config::{AppConfig, AppState, ResponseConfig};
use api_responder::controllers::Controller;
use api_responder::models::Catalog;
use api_responder::routes::create_router;

/// Router over the seeded catalog with default response settings.
pub fn build_test_app() -> Router {
    build_test_app_with(ResponseConfig::default())
}

pub fn build_test_app_with(response_config: ResponseConfig) -> Router {
    let state = AppState::new(
        Controller::from_config(&response_config),
        Catalog::seeded(),
        AppConfig::default(),
    );
    create_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_with_headers(app, uri, &[]).await
}

pub async fn get_with_headers(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
