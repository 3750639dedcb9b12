// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Editor preferences that tune the history engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Saved preferences for a Deck editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorPrefs {
    /// Undo/redo capture settings.
    pub history: HistoryPrefs,
}

/// Capture settings for the per-slide history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryPrefs {
    /// Quiet period (milliseconds) after the last scene change before a
    /// snapshot is recorded.
    pub debounce_ms: u64,
    /// Extra per-object properties requested from the primitive's serializer.
    pub capture_fields: Vec<String>,
    /// Record a pending debounced edit before undo/redo navigates away from it.
    pub flush_before_navigation: bool,
}

impl HistoryPrefs {
    /// Debounce window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for HistoryPrefs {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            capture_fields: vec!["id".into(), "selectable".into(), "name".into()],
            flush_before_navigation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let prefs: EditorPrefs =
            serde_json::from_str(r#"{"history":{"debounce_ms":250}}"#).unwrap();
        assert_eq!(prefs.history.debounce(), Duration::from_millis(250));
        assert!(prefs.history.flush_before_navigation);
        assert_eq!(prefs.history.capture_fields.len(), 3);
    }

    #[test]
    fn empty_object_is_default() {
        let prefs: EditorPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, EditorPrefs::default());
    }
}
