use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::pwa::manifest::WebManifest;
use crate::pwa::service_worker;

pub async fn manifest() -> Result<Response, AppError> {
    let body = WebManifest::new().to_json()?;
    Ok(([(header::CONTENT_TYPE, "application/manifest+json")], body).into_response())
}

/// Worker headers (`Service-Worker-Allowed`, `Cache-Control`) are attached
/// by the route layer.
pub async fn service_worker() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        service_worker::script(),
    )
        .into_response()
}
