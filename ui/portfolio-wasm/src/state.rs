//! Browser-side state: `localStorage` persistence and the shared controllers.
//!
//! WASM is single-threaded, so controllers shared between listeners are
//! plain `Rc<RefCell<_>>`.

use pf_core::PreferenceStore;
use std::cell::RefCell;
use std::rc::Rc;

pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

// ── localStorage helpers ──

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn local_get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

pub fn local_set(key: &str, value: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(key, value);
    }
}

/// `localStorage` as a preference store. Values are stored as plain strings
/// so pages written before this script keep their saved choices. A missing
/// or blocked storage reads as empty and drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_get(key)
    }

    fn set(&self, key: &str, value: &str) {
        local_set(key, value);
    }
}
