// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene port contract for Deck editors.
//!
//! This crate defines the boundary between the history engine and the
//! rendering primitive (the canvas/scene-graph library that draws a slide).
//! It contains NO snapshot logic; that lives in deck-scene-codec.
//!
//! # Design Principles
//!
//! - **The primitive is opaque**: the engine sees serialized strings and a
//!   background layer, never shapes or geometry.
//! - **Loads are asynchronous**: `begin_load` starts a load, `poll_load`
//!   reports progress. Hosts pump the editor from their event loop.
//! - **Notifications are pulled**: mutation events queue inside the
//!   primitive until the editor drains them.

use thiserror::Error;

/// Error type reported by a scene primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The raw state handed to the loader could not be parsed.
    #[error("malformed scene state: {0}")]
    Malformed(String),
    /// A load was requested while another one was still pending.
    #[error("a load is already in progress")]
    LoadInProgress,
    /// A backend-specific error occurred.
    #[error("backend error: {0}")]
    Backend(String),
}

mod event;
mod port;
mod types;

pub use event::SceneEvent;
pub use port::ScenePort;
pub use types::{BackgroundImage, LoadStatus, OBJECTS_KEY};
