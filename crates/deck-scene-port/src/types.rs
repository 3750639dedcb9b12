// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Plain data types shared across the port boundary.

use crate::SceneError;

/// Key of the content array inside a serialized scene.
///
/// Raw states exchanged through [`ScenePort`](crate::ScenePort) are JSON
/// objects; content objects live in an array under this key. Everything
/// else at the top level (version, background, viewport) is primitive-owned.
pub const OBJECTS_KEY: &str = "objects";

/// Reference to an image painted behind all content.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundImage {
    /// Image source (URL or asset reference).
    pub src: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl BackgroundImage {
    /// Fully opaque background image.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            opacity: 1.0,
        }
    }
}

/// Progress of an asynchronous load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been started since the last completion.
    Idle,
    /// The load is still running.
    Pending,
    /// The load finished and the scene now shows the loaded state.
    Complete,
    /// The load was abandoned; the scene keeps its previous state.
    Failed(SceneError),
}
