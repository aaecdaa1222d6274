mod presentation;
mod storage;
mod theme_context;
mod theme_state;
mod theme_store;

pub use presentation::{ MemoryAttribute, PresentationTarget, THEME_ATTRIBUTE };
#[cfg(target_arch = "wasm32")]
pub use presentation::DocumentRoot;
pub use storage::{ FileStorage, MemoryStorage, PreferenceStorage };
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use theme_context::{ use_theme, ThemeContext, ThemeProvider };
pub use theme_state::Theme;
pub use theme_store::{ Subscription, ThemeStore, THEME_STORAGE_KEY };
