use std::rc::Rc;
use dioxus::prelude::*;
use dioxus::signals::SyncSignal;
use super::theme_state::Theme;
use super::theme_store::ThemeStore;

/// What consumers in the component tree get from [`use_theme`].
///
/// Reading through [`current`](ThemeContext::current) subscribes the calling
/// component, so it re-renders on every toggle.
#[derive(Clone)]
pub struct ThemeContext {
    store: ThemeStore,
    theme: SyncSignal<Theme>,
}

impl ThemeContext {
    pub fn current(&self) -> Theme {
        *self.theme.read()
    }

    pub fn toggle(&self) {
        self.store.toggle();
    }
}

/// Owns the session's [`ThemeStore`] and provides it to `children`.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let store = use_hook(ThemeStore::for_platform);
    let theme = use_signal_sync(|| store.current());
    let _subscription = use_hook(|| {
        Rc::new(
            store.subscribe(move |next| {
                let mut theme = theme;
                theme.set(next);
            })
        )
    });

    use_context_provider(|| ThemeContext { store: store.clone(), theme });

    rsx! {
        {children}
    }
}

/// The theme context of the nearest [`ThemeProvider`].
///
/// Panics when no provider is mounted above the caller: the component tree is
/// wired incorrectly and there is no sensible fallback.
pub fn use_theme() -> ThemeContext {
    require_provider(try_use_context::<ThemeContext>())
}

fn require_provider<T>(context: Option<T>) -> T {
    match context {
        Some(context) => context,
        None => panic!("use_theme must be called from a component inside a ThemeProvider"),
    }
}
