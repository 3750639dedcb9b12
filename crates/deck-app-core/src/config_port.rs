// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port shared across Deck front-ends.

use crate::config::{ConfigService, ConfigStore};
use crate::prefs::EditorPrefs;

/// Key under which editor preferences are stored.
pub const EDITOR_PREFS_KEY: &str = "editor";

/// Config-facing port for loading/saving editor preferences.
pub trait ConfigPort {
    /// Load editor preferences (returns None if missing or unreadable).
    fn load_prefs(&self) -> Option<EditorPrefs>;
    /// Persist editor preferences (best-effort; errors are logged).
    fn save_prefs(&self, prefs: &EditorPrefs);
}

impl<S: ConfigStore> ConfigPort for ConfigService<S> {
    fn load_prefs(&self) -> Option<EditorPrefs> {
        match self.load(EDITOR_PREFS_KEY) {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::warn!(%err, "failed to load editor prefs");
                None
            }
        }
    }

    fn save_prefs(&self, prefs: &EditorPrefs) {
        if let Err(err) = self.save(EDITOR_PREFS_KEY, prefs) {
            tracing::warn!(%err, "failed to save editor prefs");
        }
    }
}
