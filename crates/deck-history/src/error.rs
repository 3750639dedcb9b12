// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for editor operations.
//!
//! None of these are fatal: each one means "the operation had no effect".

use thiserror::Error;

use crate::guard::RestoreKind;

/// Reasons an editor operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A restore is in flight; retry once it completes.
    #[error("{0} restore in flight")]
    RestoreInFlight(RestoreKind),
    /// The operation needs a scene and none is attached.
    #[error("no scene attached")]
    SceneDetached,
    /// The slide index does not exist.
    #[error("slide index {index} out of range (deck has {len})")]
    SlideOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides.
        len: usize,
    },
    /// Deleting would leave the deck without slides.
    #[error("cannot delete the last slide")]
    LastSlide,
    /// A document with no slides was opened.
    #[error("document has no slides")]
    EmptyDocument,
    /// A document names an active slide it does not contain.
    #[error("active index {active} out of range (document has {len})")]
    ActiveOutOfRange {
        /// Requested active index.
        active: usize,
        /// Number of slides.
        len: usize,
    },
}
