// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene port trait defining the rendering primitive contract.

use crate::{BackgroundImage, LoadStatus, SceneError, SceneEvent};

/// Rendering primitive port.
///
/// # Design
///
/// This trait is a hexagonal port. The history engine drives it; adapters
/// wrap a concrete canvas library. Only two content operations cross the
/// boundary: [`serialize`](Self::serialize) and the
/// [`begin_load`](Self::begin_load)/[`poll_load`](Self::poll_load) pair.
///
/// # Background asymmetry
///
/// Primitives are not required to round-trip their background layer through
/// `serialize`/`begin_load`. Callers that need lossless snapshots read and
/// write it through the direct accessors below.
pub trait ScenePort {
    /// Serialize the scene into a JSON object string.
    ///
    /// `include_fields` names extra per-object properties the primitive
    /// would not emit by default.
    fn serialize(&self, include_fields: &[String]) -> Result<String, SceneError>;

    /// Start replacing the scene with `raw`.
    ///
    /// The scene must keep showing its previous state until the load
    /// completes. An `Err` means nothing was started.
    fn begin_load(&mut self, raw: &str) -> Result<(), SceneError>;

    /// Report the progress of the load started by `begin_load`.
    fn poll_load(&mut self) -> LoadStatus;

    /// Current background color, if any.
    fn background_color(&self) -> Option<String>;

    /// Set the background color.
    fn set_background_color(&mut self, color: &str);

    /// Current background image, if any.
    fn background_image(&self) -> Option<BackgroundImage>;

    /// Set the background image.
    fn set_background_image(&mut self, image: &BackgroundImage);

    /// Take all mutation notifications queued since the last call.
    fn drain_events(&mut self) -> Vec<SceneEvent>;

    /// Ask the primitive to repaint.
    fn request_render(&mut self);
}
