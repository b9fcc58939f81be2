use futures::stream::{self, Stream};
use tokio::sync::watch;

use super::sequencer::{Sequencer, SequencerHandle, TimingProfile, ViewState};

struct Cursor {
    // Held only so that dropping the stream tears the sequencer down.
    _handle: SequencerHandle,
    rx: watch::Receiver<ViewState>,
    started: bool,
}

/// Mounts a fresh sequencer and yields every view it passes through,
/// starting with the mounted state and ending with `MenuVisible`.
pub fn view_states(profile: TimingProfile) -> impl Stream<Item = ViewState> + Send + 'static {
    view_states_with_hook(profile, || tracing::debug!("Onboarding complete"))
}

/// Like [`view_states`], running `on_complete` once the menu is shown.
/// Dropping the stream early cancels the timers, so the hook never runs.
pub fn view_states_with_hook<F>(
    profile: TimingProfile,
    on_complete: F,
) -> impl Stream<Item = ViewState> + Send + 'static
where
    F: FnOnce() + Send + 'static,
{
    let handle = Sequencer::mount(profile, on_complete);
    let rx = handle.subscribe();
    let cursor = Cursor {
        _handle: handle,
        rx,
        started: false,
    };

    stream::unfold(Some(cursor), |cursor| async move {
        let mut cursor = cursor?;
        if cursor.started {
            if cursor.rx.changed().await.is_err() {
                return None;
            }
        }
        cursor.started = true;
        let view = *cursor.rx.borrow_and_update();
        let next = if view.is_complete() { None } else { Some(cursor) };
        Some((view, next))
    })
}
