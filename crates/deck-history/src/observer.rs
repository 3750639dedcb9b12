// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Debounced bridge from scene notifications to history saves.
//!
//! Every notification (re)arms a single timer. When the timer runs out the
//! observer yields a [`Fire`] naming the slide the burst belonged to; the
//! editor then captures and saves. Bursts shorter than the window coalesce
//! into one save. The guard is consulted both when a notification arrives
//! and when the timer fires, since a timer armed before a restore began may
//! run out while it is still in flight.

use std::time::{Duration, Instant};

use deck_scene_port::SceneEvent;
use tracing::{debug, trace};

use crate::guard::RestoreGuard;
use crate::slides::SlideId;

/// A debounce timer that ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fire {
    /// Slide that was active when the burst was armed.
    pub slide: SlideId,
    /// Notifications folded into this fire.
    pub coalesced: usize,
    /// Whether every folded notification was selection-only.
    pub selection_only: bool,
}

#[derive(Clone, Copy, Debug)]
struct Armed {
    deadline: Instant,
    fire: Fire,
}

/// Debounce timer over scene notifications.
#[derive(Clone, Debug)]
pub struct ChangeObserver {
    window: Duration,
    armed: Option<Armed>,
}

impl ChangeObserver {
    /// Create an idle observer with the given quiet period.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed: None,
        }
    }

    /// Whether a save is scheduled.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// When the scheduled save will fire, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|a| a.deadline)
    }

    /// Record a notification for `slide` at `now`.
    ///
    /// Returns `false` if the notification was dropped because a restore is
    /// in flight.
    pub fn notify(
        &mut self,
        event: SceneEvent,
        slide: SlideId,
        now: Instant,
        guard: &RestoreGuard,
    ) -> bool {
        if guard.is_active() {
            trace!(%event, %slide, "notification during restore dropped");
            return false;
        }
        let deadline = now + self.window;
        let fire = match self.armed {
            Some(prev) if prev.fire.slide == slide => Fire {
                slide,
                coalesced: prev.fire.coalesced + 1,
                selection_only: prev.fire.selection_only && event.is_selection(),
            },
            _ => Fire {
                slide,
                coalesced: 1,
                selection_only: event.is_selection(),
            },
        };
        trace!(%event, %slide, coalesced = fire.coalesced, "debounce armed");
        self.armed = Some(Armed { deadline, fire });
        true
    }

    /// Fire the timer if its deadline has passed.
    ///
    /// A timer that runs out while the guard is held is discarded.
    pub fn poll(&mut self, now: Instant, guard: &RestoreGuard) -> Option<Fire> {
        let armed = self.armed?;
        if now < armed.deadline {
            return None;
        }
        self.armed = None;
        if guard.is_active() {
            debug!(slide = %armed.fire.slide, "debounced save suppressed by restore");
            return None;
        }
        Some(armed.fire)
    }

    /// Disarm and return the pending fire regardless of its deadline.
    pub fn take(&mut self) -> Option<Fire> {
        self.armed.take().map(|a| a.fire)
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        if let Some(armed) = self.armed.take() {
            trace!(slide = %armed.fire.slide, "debounce cancelled");
        }
    }
}
