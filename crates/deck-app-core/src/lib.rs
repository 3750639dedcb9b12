// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Deck editors (config, prefs).
//! Keeps UI/runtime adapters thin and framework-agnostic.

pub mod config;
pub mod config_port;
pub mod prefs;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use config_port::{ConfigPort, EDITOR_PREFS_KEY};
pub use prefs::{EditorPrefs, HistoryPrefs};
