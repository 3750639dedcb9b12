// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mutation notifications emitted by the scene primitive.

use core::fmt;

/// A change notification from the live scene.
///
/// Selection events travel the same path as content events; the history
/// layer filters them out by comparing serialized content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneEvent {
    /// An object was added to the scene.
    ObjectAdded,
    /// An object was moved, resized, restyled, or edited.
    ObjectModified,
    /// An object was removed from the scene.
    ObjectRemoved,
    /// A freeform drawing path was committed.
    PathCreated,
    /// A selection was created.
    SelectionCreated,
    /// The current selection changed.
    SelectionUpdated,
    /// The selection was cleared.
    SelectionCleared,
}

impl SceneEvent {
    /// Returns `true` for events that only touch the selection.
    pub fn is_selection(self) -> bool {
        matches!(
            self,
            Self::SelectionCreated | Self::SelectionUpdated | Self::SelectionCleared
        )
    }

    /// Stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::ObjectAdded => "object:added",
            Self::ObjectModified => "object:modified",
            Self::ObjectRemoved => "object:removed",
            Self::PathCreated => "path:created",
            Self::SelectionCreated => "selection:created",
            Self::SelectionUpdated => "selection:updated",
            Self::SelectionCleared => "selection:cleared",
        }
    }
}

impl fmt::Display for SceneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
