use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::Arc;
use crate::error::ThemeError;
use crate::utils::{ PreferenceStorage, PresentationTarget };

/// Storage that is switched off: every read and write fails.
#[derive(Clone, Default)]
pub struct UnavailableStorage {
    pub writes_attempted: Arc<AtomicUsize>,
}

impl PreferenceStorage for UnavailableStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::PersistenceUnavailable("storage disabled".to_string()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        self.writes_attempted.fetch_add(1, Ordering::SeqCst);
        Err(ThemeError::PersistenceUnavailable("quota exceeded".to_string()))
    }
}

/// A presentation root that rejects every attribute write.
#[derive(Clone, Copy, Default)]
pub struct DetachedRoot;

impl PresentationTarget for DetachedRoot {
    fn set_attribute(&mut self, _name: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Presentation("no document element".to_string()))
    }
}
