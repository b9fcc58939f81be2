use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::AppState;

pub async fn landing(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.landing_page.clone())
}

pub async fn health_check() -> &'static str {
    "OK"
}
