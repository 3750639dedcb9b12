// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Deck crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`scene`] - [`MockScene`](deck_scene_codec::MockScene) builders
//! - [`clock`] - Manually advanced clock for debounce timing

pub mod clock;
pub mod config;
pub mod scene;

pub use clock::ManualClock;
pub use config::InMemoryConfigStore;
pub use scene::SceneFixture;
