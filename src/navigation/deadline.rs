use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{CommitSource, NavEvent, TransitionId, TransitionKind};

/// Post `event` on `events` after `delay`. Dropping or aborting the handle
/// cancels the post.
pub(crate) fn schedule(delay: Duration, event: NavEvent, events: mpsc::UnboundedSender<NavEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = events.send(event);
    })
}

/// A one-shot delayed effect tagged with the id it was armed under
#[derive(Debug)]
pub struct DelayedEffect {
    id: TransitionId,
    handle: JoinHandle<()>,
}

impl DelayedEffect {
    pub(crate) fn new(id: TransitionId, handle: JoinHandle<()>) -> Self {
        Self { id, handle }
    }

    pub fn id(&self) -> TransitionId {
        self.id
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for DelayedEffect {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Commit-with-deadline for a page transition.
///
/// Two timers race: the main timer (the entrance animation length) and the
/// safety timer (the hard upper bound). Each posts a
/// [`NavEvent::Commit`] carrying the deadline's id. The controller commits on
/// the first event whose id matches its pending deadline and then cancels the
/// deadline, which aborts whichever timer has not fired yet. An explicit
/// completion signal goes through the same path without waiting for either.
#[derive(Debug)]
pub struct CommitDeadline {
    kind: TransitionKind,
    id: TransitionId,
    main: JoinHandle<()>,
    safety: JoinHandle<()>,
}

impl CommitDeadline {
    /// Arm both timers
    pub fn arm(
        kind: TransitionKind,
        id: TransitionId,
        main_delay: Duration,
        safety_delay: Duration,
        events: mpsc::UnboundedSender<NavEvent>,
    ) -> Self {
        let main = schedule(
            main_delay,
            NavEvent::Commit {
                kind,
                id,
                source: CommitSource::MainTimer,
            },
            events.clone(),
        );
        let safety = schedule(
            safety_delay,
            NavEvent::Commit {
                kind,
                id,
                source: CommitSource::SafetyTimer,
            },
            events,
        );

        Self { kind, id, main, safety }
    }

    pub fn id(&self) -> TransitionId {
        self.id
    }

    /// Whether `event` is a commit for this very deadline
    pub fn matches(&self, kind: TransitionKind, id: TransitionId) -> bool {
        self.kind == kind && self.id == id
    }

    /// Abort both timers
    pub fn cancel(self) {
        self.main.abort();
        self.safety.abort();
    }
}

impl Drop for CommitDeadline {
    fn drop(&mut self) {
        self.main.abort();
        self.safety.abort();
    }
}
