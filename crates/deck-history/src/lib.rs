// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-slide undo/redo and slide lifecycle for multi-slide canvas editors.
//!
//! # Architecture
//!
//! ```text
//! UI edit ─► ScenePort events ─► ChangeObserver (debounce) ─► capture ─► HistoryStack::save
//! UI undo ─► RestoreGuard ─► HistoryStack::undo ─► SnapshotCodec::restore ─► (poll) ─► guard released
//! switch  ─► flush outgoing slide ─► RestoreGuard ─► restore target (or synthesize empty)
//! ```
//!
//! [`DeckEditor`] owns all of it. Hosts forward UI gestures to its methods
//! and call [`DeckEditor::pump`] from their event loop.

mod editor;
mod error;
mod guard;
mod history;
mod observer;
mod slides;

pub use editor::DeckEditor;
pub use error::EditorError;
pub use guard::{GuardToken, RestoreGuard, RestoreKind};
pub use history::{HistoryStack, SaveOutcome};
pub use observer::{ChangeObserver, Fire};
pub use slides::{DeckDocument, SlideId, SlideMeta, SlideRecord};
