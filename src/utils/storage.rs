//! Persisted key-value storage backing the theme preference.

use std::collections::{ BTreeMap, HashMap };
use std::path::{ Path, PathBuf };
use std::sync::{ Arc, Mutex, PoisonError };
use crate::error::ThemeError;

/// Durable string storage addressed by key.
///
/// `read` returns `Ok(None)` when nothing is stored under the key. Whether a
/// stored string is a valid value is the caller's concern.
pub trait PreferenceStorage: Send {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Storage held in memory. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.get(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a JSON object of strings in a single file.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, ThemeError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Replacing unreadable preferences file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(&entries)?)?;
        std::fs::rename(&tmp, &self.path)?;
        log::debug!("Wrote {}={} to {}", key, value, self.path.display());
        Ok(())
    }
}

/// The browser's `window.localStorage`.
///
/// The handle is looked up on every call, so a storage that becomes available
/// later in the session is picked up.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .ok_or_else(|| ThemeError::PersistenceUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| ThemeError::PersistenceUnavailable(format!("{e:?}")))?
            .ok_or_else(|| ThemeError::PersistenceUnavailable("local storage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ThemeError::PersistenceUnavailable(format!("{e:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::PersistenceUnavailable(format!("{e:?}")))
    }
}
