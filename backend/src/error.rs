use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::utils::icon::IconError;
use crate::utils::svg::SvgError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error(transparent)]
    Svg(#[from] SvgError),
    #[error("Failed to encode manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Icon(IconError::InvalidSize(raw)) => {
                tracing::debug!("Rejected icon size {:?}", raw);
                (StatusCode::BAD_REQUEST, "Invalid size")
            }
            AppError::Svg(e) => {
                tracing::error!("Failed to render icon: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render icon")
            }
            AppError::Manifest(e) => {
                tracing::error!("Failed to encode manifest: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode manifest")
            }
        };
        (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
    }
}
