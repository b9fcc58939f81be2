//! Splash/menu sequencing for a single page load.
//!
//! A mounted [`Sequencer`] owns one tokio task that walks the view through
//! `SplashOnly -> IconRevealed -> MenuVisible` on fixed delays measured from
//! mount time. The current [`ViewState`] is published on a watch channel so
//! the rendering side can follow along. Dropping or unmounting the handle
//! cancels whatever timers are still pending.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Init,
    SplashOnly,
    IconRevealed,
    MenuVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub phase: Phase,
    pub splash_visible: bool,
    pub menu_visible: bool,
    pub icon_revealed: bool,
}

impl ViewState {
    pub fn initial() -> Self {
        Self {
            phase: Phase::Init,
            splash_visible: true,
            menu_visible: false,
            icon_revealed: false,
        }
    }

    fn mounted(profile: &TimingProfile) -> Self {
        Self {
            phase: Phase::SplashOnly,
            // Without a reveal step the icon animates straight away.
            icon_revealed: profile.icon_reveal.is_none(),
            ..Self::initial()
        }
    }

    fn icon_revealed() -> Self {
        Self {
            phase: Phase::IconRevealed,
            icon_revealed: true,
            ..Self::initial()
        }
    }

    fn menu_visible() -> Self {
        Self {
            phase: Phase::MenuVisible,
            splash_visible: false,
            menu_visible: true,
            icon_revealed: true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::MenuVisible
    }
}

/// Delays driving the sequence. Both timers count from mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingProfile {
    pub icon_reveal: Option<Duration>,
    pub complete_after: Duration,
    pub menu_entrance_delay: Duration,
}

impl TimingProfile {
    /// Logo reveal at 1s, menu at 3s.
    pub fn staged() -> Self {
        Self {
            icon_reveal: Some(Duration::from_millis(1000)),
            complete_after: Duration::from_millis(3000),
            menu_entrance_delay: Duration::from_millis(800),
        }
    }

    /// Single 1.5s splash with no separate reveal step.
    pub fn classic() -> Self {
        Self {
            icon_reveal: None,
            complete_after: Duration::from_millis(1500),
            menu_entrance_delay: Duration::from_millis(800),
        }
    }
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::staged()
    }
}

pub struct Sequencer;

impl Sequencer {
    /// Starts the sequence. `on_complete` runs once, right after the view
    /// switches to `MenuVisible`, unless the handle is torn down first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<F>(profile: TimingProfile, on_complete: F) -> SequencerHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = watch::channel(ViewState::mounted(&profile));
        let started = Instant::now();

        let task = tokio::spawn(async move {
            if let Some(reveal) = profile.icon_reveal {
                sleep_until(started + reveal).await;
                tx.send_replace(ViewState::icon_revealed());
                tracing::debug!("Splash icon revealed");
            }
            sleep_until(started + profile.complete_after).await;
            tx.send_replace(ViewState::menu_visible());
            tracing::debug!("Splash finished, menu visible");
            on_complete();
        });

        SequencerHandle {
            rx,
            task: Some(task),
        }
    }
}

pub struct SequencerHandle {
    rx: watch::Receiver<ViewState>,
    task: Option<JoinHandle<()>>,
}

impl SequencerHandle {
    pub fn state(&self) -> ViewState {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.rx.clone()
    }

    /// Cancels pending timers and waits for the task to stop. Once this
    /// returns the view state is frozen and `on_complete` will not run.
    pub async fn unmount(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            match task.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => tracing::debug!("Sequencer cancelled before completion"),
                Err(e) => tracing::error!("Sequencer task failed: {}", e),
            }
        }
    }
}

impl Drop for SequencerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
