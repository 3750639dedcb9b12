// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake for testing without filesystem I/O.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use deck_app_core::{ConfigError, ConfigStore, EditorPrefs, EDITOR_PREFS_KEY};

/// In-memory [`ConfigStore`]. Clones share state.
///
/// # Example
///
/// ```
/// use deck_app_core::{ConfigPort, ConfigService, EditorPrefs};
/// use deck_dry_tests::InMemoryConfigStore;
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
/// assert!(service.load_prefs().is_none());
///
/// service.save_prefs(&EditorPrefs::default());
/// assert_eq!(store.save_count(), 1);
/// assert!(store.contains_key("editor"));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: BTreeMap<String, Vec<u8>>,
    loads: usize,
    saves: usize,
    fail_loads: bool,
    fail_saves: bool,
}

impl InMemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `prefs` under the editor key.
    pub fn with_prefs(prefs: &EditorPrefs) -> Self {
        let store = Self::new();
        if let Ok(bytes) = serde_json::to_vec(prefs) {
            store.lock().data.insert(EDITOR_PREFS_KEY.to_owned(), bytes);
        }
        store
    }

    /// Store holding raw bytes under `key`.
    pub fn with_raw(key: &str, bytes: &[u8]) -> Self {
        let store = Self::new();
        store.lock().data.insert(key.to_owned(), bytes.to_vec());
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Make every subsequent load fail with [`ConfigError::Other`].
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_loads = fail;
    }

    /// Make every subsequent save fail with [`ConfigError::Other`].
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// Load attempts so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().loads
    }

    /// Save attempts so far, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Whether `key` holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }

    /// Raw bytes stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().data.get(key).cloned()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.loads += 1;
        if inner.fail_loads {
            return Err(ConfigError::Other("simulated load failure".into()));
        }
        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.saves += 1;
        if inner.fail_saves {
            return Err(ConfigError::Other("simulated save failure".into()));
        }
        inner.data.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}
