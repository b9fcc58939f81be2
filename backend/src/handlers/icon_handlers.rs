use axum::{
    extract::{rejection::QueryRejection, Query},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::utils::icon::{generate_icon_svg, IconError, IconSize};

pub const ICON_CACHE_CONTROL: &str = "public, max-age=31536000";

/// `GET /api/icon?size=N`. When `size` repeats, the first value wins.
pub async fn get_icon(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let raw = match query {
        Ok(Query(pairs)) => pairs
            .into_iter()
            .find(|(key, _)| key == "size")
            .map(|(_, value)| value),
        Err(e) => {
            tracing::debug!("Unreadable icon query: {}", e);
            return Err(IconError::InvalidSize(e.body_text()).into());
        }
    };

    let size = IconSize::parse(raw.as_deref())?;
    let svg = generate_icon_svg(size)?;
    tracing::debug!("Generated {}px icon ({} bytes)", size, svg.len());

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, ICON_CACHE_CONTROL),
        ],
        svg,
    )
        .into_response())
}
