// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Restore guard: marks the window in which the editor itself is loading a
//! snapshot into the scene.
//!
//! While the guard is held, scene notifications are replays, not edits, and
//! no other restore may start. The guard is released by dropping its
//! [`GuardToken`], so every exit path (completion, failure, abandonment)
//! clears it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::warn;

/// Why a restore is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreKind {
    /// Undo on the active slide.
    Undo,
    /// Redo on the active slide.
    Redo,
    /// Slide switch (including the switch after add, duplicate, or delete).
    Switch,
    /// Loading the active slide into a newly attached scene or opened document.
    Attach,
}

impl fmt::Display for RestoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Switch => "switch",
            Self::Attach => "attach",
        })
    }
}

/// Shared two-state flag. Clones observe the same state.
///
/// Single-threaded by construction: the editor runs on one event loop.
#[derive(Clone, Debug, Default)]
pub struct RestoreGuard {
    held: Rc<Cell<Option<RestoreKind>>>,
}

impl RestoreGuard {
    /// Create a released guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a restore is in flight.
    pub fn is_active(&self) -> bool {
        self.held.get().is_some()
    }

    /// Kind of the restore in flight, if any.
    pub fn holder(&self) -> Option<RestoreKind> {
        self.held.get()
    }

    /// Acquire the guard. Returns `None` if it is already held.
    pub fn try_acquire(&self, kind: RestoreKind) -> Option<GuardToken> {
        if let Some(current) = self.held.get() {
            warn!(requested = %kind, in_flight = %current, "restore already in flight");
            return None;
        }
        self.held.set(Some(kind));
        Some(GuardToken {
            held: Rc::clone(&self.held),
            kind,
        })
    }

    /// Run `f` with the guard held.
    ///
    /// The token is handed to `f`: dropping it releases the guard, keeping it
    /// (e.g. in the state of an asynchronous load) extends the guarded window
    /// until it is dropped. Returns `None` without calling `f` if the guard
    /// is already held.
    pub fn with_guard<T>(&self, kind: RestoreKind, f: impl FnOnce(GuardToken) -> T) -> Option<T> {
        self.try_acquire(kind).map(f)
    }
}

/// Proof that the guard is held. Releases it on drop.
pub struct GuardToken {
    held: Rc<Cell<Option<RestoreKind>>>,
    kind: RestoreKind,
}

impl GuardToken {
    /// Kind this token was acquired for.
    pub fn kind(&self) -> RestoreKind {
        self.kind
    }
}

impl fmt::Debug for GuardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardToken").field("kind", &self.kind).finish()
    }
}

impl Drop for GuardToken {
    fn drop(&mut self) {
        self.held.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_refused() {
        let guard = RestoreGuard::new();
        let token = guard.try_acquire(RestoreKind::Undo).unwrap();
        assert!(guard.is_active());
        assert!(guard.try_acquire(RestoreKind::Switch).is_none());
        assert_eq!(guard.holder(), Some(RestoreKind::Undo));
        drop(token);
        assert!(!guard.is_active());
    }

    #[test]
    fn with_guard_releases_when_token_is_dropped_inside() {
        let guard = RestoreGuard::new();
        let seen = guard.with_guard(RestoreKind::Redo, |token| {
            let kind = token.kind();
            drop(token);
            kind
        });
        assert_eq!(seen, Some(RestoreKind::Redo));
        assert!(!guard.is_active());
    }

    #[test]
    fn with_guard_can_hand_the_token_out() {
        let guard = RestoreGuard::new();
        let token = guard.with_guard(RestoreKind::Switch, |token| token).unwrap();
        assert!(guard.clone().is_active());
        assert!(guard.with_guard(RestoreKind::Undo, |_| ()).is_none());
        drop(token);
        assert!(guard.with_guard(RestoreKind::Undo, |_| ()).is_some());
    }

    #[test]
    fn guard_is_released_on_unwind() {
        let guard = RestoreGuard::new();
        let g = guard.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            g.with_guard(RestoreKind::Attach, |_token| panic!("load blew up"))
        }));
        assert!(result.is_err());
        assert!(!guard.is_active());
    }
}
