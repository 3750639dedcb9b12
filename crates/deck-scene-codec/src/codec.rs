// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Capture, restore and empty-state synthesis over a [`ScenePort`].

use deck_scene_port::{LoadStatus, SceneError, ScenePort, OBJECTS_KEY};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::snapshot::{encode, BackgroundInfo, Snapshot, SIDE_CHANNEL_KEY};

/// Error type for snapshot decoding and restore start-up.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The snapshot (or the primitive's raw state) is not valid JSON.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The snapshot decoded, but not to a JSON object.
    #[error("snapshot is not a JSON object")]
    NotAnObject,
    /// The primitive refused the operation.
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Converts live scenes to [`Snapshot`]s and back.
#[derive(Clone, Debug, Default)]
pub struct SnapshotCodec {
    include_fields: Vec<String>,
}

impl SnapshotCodec {
    /// Create a codec that asks the primitive for `include_fields` on every
    /// object in addition to its defaults.
    pub fn new(include_fields: Vec<String>) -> Self {
        Self { include_fields }
    }

    /// Capture the scene into a snapshot.
    ///
    /// Returns `None` when there is no scene, or when the primitive fails to
    /// produce a JSON object (logged).
    pub fn capture<S: ScenePort + ?Sized>(&self, scene: Option<&S>) -> Option<Snapshot> {
        let scene = scene?;
        match self.payload(scene) {
            Ok(payload) => Some(encode(payload, &BackgroundInfo::read(scene))),
            Err(err) => {
                warn!(%err, "scene capture failed");
                None
            }
        }
    }

    /// Synthesize a snapshot with no content objects that keeps the scene's
    /// current background.
    ///
    /// The result uses the primitive's own top-level layout with the
    /// objects array emptied, so capturing a scene freshly loaded from it
    /// reproduces it exactly.
    pub fn empty_state<S: ScenePort + ?Sized>(&self, scene: Option<&S>) -> Option<Snapshot> {
        let scene = scene?;
        match self.payload(scene) {
            Ok(mut payload) => {
                payload.insert(OBJECTS_KEY.to_owned(), Value::Array(Vec::new()));
                Some(encode(payload, &BackgroundInfo::read(scene)))
            }
            Err(err) => {
                warn!(%err, "empty state synthesis failed");
                None
            }
        }
    }

    /// Start restoring `snapshot` into `scene`.
    ///
    /// On success the scene is loading; drive the returned [`PendingRestore`]
    /// until it settles. On error nothing was started and the scene keeps
    /// its current state.
    pub fn restore<S: ScenePort + ?Sized>(
        &self,
        scene: &mut S,
        snapshot: &Snapshot,
    ) -> Result<PendingRestore, CodecError> {
        let (payload, background) = split(snapshot)?;
        scene.begin_load(&Value::Object(payload).to_string())?;
        Ok(PendingRestore { background })
    }

    fn payload<S: ScenePort + ?Sized>(&self, scene: &S) -> Result<Map<String, Value>, CodecError> {
        let raw = scene.serialize(&self.include_fields)?;
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Err(CodecError::NotAnObject),
        }
    }
}

/// Separate the primary payload from the side-channel.
fn split(snapshot: &Snapshot) -> Result<(Map<String, Value>, BackgroundInfo), CodecError> {
    let Value::Object(mut payload) = serde_json::from_str::<Value>(snapshot.as_str())? else {
        return Err(CodecError::NotAnObject);
    };
    let background = match payload.remove(SIDE_CHANNEL_KEY) {
        Some(value) => BackgroundInfo::from_value(value)?,
        None => BackgroundInfo::default(),
    };
    Ok((payload, background))
}

/// Which background properties the completion patch re-applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackgroundPatch {
    /// The color was unset after load and was restored from the side-channel.
    pub color: bool,
    /// The image was unset after load and was restored from the side-channel.
    pub image: bool,
}

/// Result of polling a [`PendingRestore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreStatus {
    /// The primitive is still loading.
    Pending,
    /// The scene shows the snapshot.
    Complete(BackgroundPatch),
    /// The primitive gave up; the scene kept its previous state.
    Failed(SceneError),
}

/// A restore whose load has been handed to the primitive.
#[derive(Clone, Debug)]
pub struct PendingRestore {
    background: BackgroundInfo,
}

impl PendingRestore {
    /// Poll the primitive; on completion patch any background property the
    /// load left unset.
    pub fn poll<S: ScenePort + ?Sized>(&self, scene: &mut S) -> RestoreStatus {
        match scene.poll_load() {
            LoadStatus::Pending => RestoreStatus::Pending,
            LoadStatus::Failed(err) => {
                warn!(%err, "scene load failed");
                RestoreStatus::Failed(err)
            }
            LoadStatus::Complete | LoadStatus::Idle => {
                let patch = self.patch_background(scene);
                if patch != BackgroundPatch::default() {
                    debug!(color = patch.color, image = patch.image, "background patched");
                    scene.request_render();
                }
                RestoreStatus::Complete(patch)
            }
        }
    }

    fn patch_background<S: ScenePort + ?Sized>(&self, scene: &mut S) -> BackgroundPatch {
        let mut patch = BackgroundPatch::default();
        if let Some(color) = &self.background.color {
            if scene.background_color().is_none() {
                scene.set_background_color(color);
                patch.color = true;
            }
        }
        if let Some(image) = &self.background.image {
            if scene.background_image().is_none() {
                scene.set_background_image(image);
                patch.image = true;
            }
        }
        patch
    }
}
