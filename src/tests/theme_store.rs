use std::sync::atomic::Ordering;
use std::sync::{ Arc, Mutex };
use std::thread;
use super::common::{ self, mocks::{ DetachedRoot, UnavailableStorage } };
use crate::utils::{
    FileStorage,
    MemoryAttribute,
    MemoryStorage,
    Theme,
    ThemeStore,
    THEME_ATTRIBUTE,
    THEME_STORAGE_KEY,
};

fn fresh() -> (ThemeStore, MemoryStorage, MemoryAttribute) {
    common::setup();
    let storage = MemoryStorage::new();
    let attribute = MemoryAttribute::new();
    let store = ThemeStore::init(storage.clone(), attribute.clone());
    (store, storage, attribute)
}

fn assert_consistent(store: &ThemeStore, storage: &MemoryStorage, attribute: &MemoryAttribute) {
    let current = store.current().as_str().to_string();
    assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some(current.as_str()));
    assert_eq!(attribute.get(THEME_ATTRIBUTE).as_deref(), Some(current.as_str()));
}

#[test]
fn test_first_run_scenario() {
    let (store, storage, attribute) = fresh();
    assert_eq!(store.current(), Theme::Dark);
    assert_eq!(attribute.get(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

    store.toggle();
    assert_eq!(store.current(), Theme::Light);
    assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(attribute.get(THEME_ATTRIBUTE).as_deref(), Some("light"));

    store.toggle();
    assert_eq!(store.current(), Theme::Dark);
    assert_consistent(&store, &storage, &attribute);
}

#[test]
fn test_every_toggle_stays_consistent() {
    let (store, storage, attribute) = fresh();
    let mut expected = Theme::Dark;
    for _ in 0..9 {
        store.toggle();
        expected = expected.toggled();
        assert_eq!(store.current(), expected);
        assert_consistent(&store, &storage, &attribute);
    }
}

#[test]
fn test_double_toggle_restores_value() {
    common::setup();
    for start in [Theme::Dark, Theme::Light] {
        let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, start.as_str());
        let store = ThemeStore::init(storage, MemoryAttribute::new());
        store.toggle();
        store.toggle();
        assert_eq!(store.current(), start);
    }
}

#[test]
fn test_invalid_stored_values_default_to_dark() {
    common::setup();
    for stored in ["blue", "", "LIGHT", "light "] {
        let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, stored);
        let attribute = MemoryAttribute::new();
        let store = ThemeStore::init(storage.clone(), attribute.clone());
        assert_eq!(store.current(), Theme::Dark, "stored {:?}", stored);
        assert_consistent(&store, &storage, &attribute);
    }
}

#[test]
fn test_stored_light_is_restored() {
    common::setup();
    let storage = MemoryStorage::new();
    let first = ThemeStore::init(storage.clone(), MemoryAttribute::new());
    first.toggle();
    drop(first);

    let attribute = MemoryAttribute::new();
    let second = ThemeStore::init(storage, attribute.clone());
    assert_eq!(second.current(), Theme::Light);
    assert_eq!(attribute.get(THEME_ATTRIBUTE).as_deref(), Some("light"));
}

#[test]
fn test_file_storage_survives_restart() {
    common::setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lunaria").join("preferences.json");

    let store = ThemeStore::init(FileStorage::new(&path), MemoryAttribute::new());
    assert_eq!(store.current(), Theme::Dark);
    store.toggle();
    drop(store);

    let restarted = ThemeStore::init(FileStorage::new(&path), MemoryAttribute::new());
    assert_eq!(restarted.current(), Theme::Light);
}

#[test]
fn test_unavailable_storage_is_tolerated() {
    common::setup();
    let storage = UnavailableStorage::default();
    let attribute = MemoryAttribute::new();
    let store = ThemeStore::init(storage.clone(), attribute.clone());
    assert_eq!(store.current(), Theme::Dark);
    assert_eq!(attribute.get(THEME_ATTRIBUTE).as_deref(), Some("dark"));

    store.toggle();
    assert_eq!(store.current(), Theme::Light);
    assert_eq!(attribute.get(THEME_ATTRIBUTE).as_deref(), Some("light"));
    assert_eq!(storage.writes_attempted.load(Ordering::SeqCst), 2);
}

#[test]
fn test_attribute_failure_keeps_value_and_persists() {
    common::setup();
    let storage = MemoryStorage::new();
    let store = ThemeStore::init(storage.clone(), DetachedRoot);
    store.toggle();
    assert_eq!(store.current(), Theme::Light);
    assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn test_listeners_run_in_registration_order() {
    let (store, _, _) = fresh();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let subs: Vec<_> = (0..3)
        .map(|n| {
            let calls = Arc::clone(&calls);
            store.subscribe(move |theme| calls.lock().unwrap().push((n, theme)))
        })
        .collect();

    store.toggle();
    assert_eq!(
        *calls.lock().unwrap(),
        vec![(0, Theme::Light), (1, Theme::Light), (2, Theme::Light)]
    );
    drop(subs);
}

#[test]
fn test_listener_sees_committed_state() {
    let (store, storage, attribute) = fresh();
    let seen = Arc::new(Mutex::new(None));

    let reader = store.clone();
    let seen_by_listener = Arc::clone(&seen);
    let _sub = store.subscribe(move |theme| {
        let persisted = storage.get(THEME_STORAGE_KEY);
        let rendered = attribute.get(THEME_ATTRIBUTE);
        *seen_by_listener.lock().unwrap() = Some((theme, reader.current(), persisted, rendered));
    });

    store.toggle();
    let light = Some("light".to_string());
    assert_eq!(
        *seen.lock().unwrap(),
        Some((Theme::Light, Theme::Light, light.clone(), light))
    );
}

#[test]
fn test_unsubscribe_stops_notifications_and_keeps_order() {
    let (store, _, _) = fresh();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let listen = |name: &'static str| {
        let calls = Arc::clone(&calls);
        store.subscribe(move |_| calls.lock().unwrap().push(name))
    };

    let first = listen("first");
    let middle = listen("middle");
    let last = listen("last");

    middle.unsubscribe();
    store.toggle();
    drop(first);
    store.toggle();

    assert_eq!(*calls.lock().unwrap(), vec!["first", "last", "last"]);
    drop(last);
}

#[test]
fn test_no_notification_without_change() {
    let (store, _, _) = fresh();
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let _sub = store.subscribe(move |_| *counter.lock().unwrap() += 1);
    let _ = store.current();
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_concurrent_toggles_end_consistent() {
    let (store, storage, attribute) = fresh();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    store.toggle();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // 200 toggles in total, an even number.
    assert_eq!(store.current(), Theme::Dark);
    assert_consistent(&store, &storage, &attribute);
}
