use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{Stream, StreamExt};

use crate::onboarding::{stream::view_states, ViewState};
use crate::AppState;

/// `GET /api/onboarding`: one sequencer per connection. Closing the
/// connection drops the stream, which cancels the sequencer's timers.
pub async fn onboarding_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::debug!("Mounting onboarding sequencer");
    let events = view_states(state.config.timing).map(|view| Ok::<_, Infallible>(view_event(&view)));
    Sse::new(events).keep_alive(KeepAlive::default())
}

fn view_event(view: &ViewState) -> Event {
    match Event::default().event("view").json_data(view) {
        Ok(event) => event,
        Err(e) => {
            tracing::error!("Failed to encode view state: {}", e);
            Event::default().comment("view state unavailable")
        }
    }
}
