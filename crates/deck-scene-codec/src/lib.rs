// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Snapshot codec and test harness for deck-scene-port.
//!
//! This crate provides:
//! - [`Snapshot`]: the opaque, comparable state string of one slide
//! - [`SnapshotCodec`]: capture / restore / empty-state over any `ScenePort`
//! - [`MockScene`]: a headless scene for testing the history engine
//!
//! # Design
//!
//! Snapshot logic is deliberately separated from the port contract.
//! This keeps deck-scene-port free of serde.

mod codec;
mod mock_scene;
mod snapshot;

pub use codec::{BackgroundPatch, CodecError, PendingRestore, RestoreStatus, SnapshotCodec};
pub use mock_scene::{MockObject, MockScene, MOCK_VERSION};
pub use snapshot::{BackgroundInfo, Snapshot, SIDE_CHANNEL_KEY};
