use std::sync::{ Arc, Mutex, MutexGuard, PoisonError, Weak };
use super::presentation::{ PresentationTarget, THEME_ATTRIBUTE };
use super::storage::PreferenceStorage;
use super::theme_state::Theme;

/// Storage key the preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "lunaria-theme";

type Listener = Arc<dyn Fn(Theme) + Send + Sync>;

struct Inner {
    current: Theme,
    storage: Box<dyn PreferenceStorage>,
    target: Box<dyn PresentationTarget>,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

impl Inner {
    /// Write the current value to storage and to the presentation attribute.
    /// Failures are logged and never roll back `current`.
    fn reflect(&mut self) {
        let value = self.current.as_str();
        if let Err(e) = self.storage.write(THEME_STORAGE_KEY, value) {
            log::warn!("Could not persist theme {}: {}", value, e);
        }
        if let Err(e) = self.target.set_attribute(THEME_ATTRIBUTE, value) {
            log::error!("Could not set {} to {}: {}", THEME_ATTRIBUTE, value, e);
        }
    }
}

/// Single source of truth for the theme preference.
///
/// Construct one per session with [`ThemeStore::init`] and hand clones of it
/// to every consumer. Clones are handles to the same store.
///
/// After construction and after every [`toggle`](ThemeStore::toggle), the
/// in-memory value, the value written to storage and the presentation
/// attribute are equal (storage only when the write succeeded).
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Mutex<Inner>>,
    // Held across a whole toggle, including notification, so listeners see
    // changes in the order they were committed.
    notify: Arc<Mutex<()>>,
}

impl ThemeStore {
    /// Read the persisted preference, falling back to [`Theme::Dark`] when it
    /// is missing, invalid or unreadable, then reflect it onto storage and the
    /// presentation target.
    pub fn init<S, P>(storage: S, target: P) -> Self
        where S: PreferenceStorage + 'static, P: PresentationTarget + 'static
    {
        let current = match storage.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) =>
                match raw.parse::<Theme>() {
                    Ok(theme) => theme,
                    Err(e) => {
                        log::debug!("Ignoring stored theme: {}", e);
                        Theme::default()
                    }
                }
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Could not read stored theme, using default: {}", e);
                Theme::default()
            }
        };

        let mut inner = Inner {
            current,
            storage: Box::new(storage),
            target: Box::new(target),
            listeners: Vec::new(),
            next_listener: 0,
        };
        inner.reflect();
        log::info!("Theme initialized to {}", current);

        Self {
            inner: Arc::new(Mutex::new(inner)),
            notify: Arc::new(Mutex::new(())),
        }
    }

    /// Store backed by the platform's durable storage: `localStorage` and
    /// `<html data-theme>` in the browser, a preferences file elsewhere.
    pub fn for_platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            use super::presentation::DocumentRoot;
            use super::storage::LocalStorage;
            Self::init(LocalStorage::new(), DocumentRoot::new())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use super::presentation::MemoryAttribute;
            use super::storage::FileStorage;
            let storage = FileStorage::new(crate::configs::get_preferences_path());
            log::info!("Persisting theme to {}", storage.path().display());
            Self::init(storage, MemoryAttribute::new())
        }
    }

    pub fn current(&self) -> Theme {
        self.lock().current
    }

    /// Flip the theme, persist it, update the attribute, then notify every
    /// listener in registration order.
    ///
    /// Listeners run after the store is unlocked and may call
    /// [`current`](ThemeStore::current), but must not call `toggle`. Overlapping
    /// toggles from other threads wait until every listener has seen the
    /// previous change.
    pub fn toggle(&self) {
        let _ordering = self.notify.lock().unwrap_or_else(PoisonError::into_inner);
        let (next, listeners) = {
            let mut inner = self.lock();
            inner.current = inner.current.toggled();
            inner.reflect();
            let listeners: Vec<Listener> = inner.listeners
                .iter()
                .map(|(_, l)| Arc::clone(l))
                .collect();
            (inner.current, listeners)
        };

        log::debug!("Theme toggled to {}, notifying {} listener(s)", next, listeners.len());
        for listener in listeners {
            listener(next);
        }
    }

    /// Register `listener` to be called with the new value on every change.
    /// It stays registered until the returned [`Subscription`] is dropped or
    /// unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription where F: Fn(Theme) + Send + Sync + 'static {
        let mut inner = self.lock();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription { store: Arc::downgrade(&self.inner), id }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("ThemeStore")
            .field("current", &inner.current)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Handle to a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    store: Weak<Mutex<Inner>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
