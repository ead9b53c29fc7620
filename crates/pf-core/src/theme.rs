use pf_types::{THEME_KEY, Theme};
use tracing::debug;

use crate::store::PreferenceStore;

pub const DARK_BODY_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeController {
    current: Theme,
}

impl ThemeController {
    pub fn load(store: &impl PreferenceStore) -> Self {
        let current = Theme::from_stored(store.get(THEME_KEY).as_deref());
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self, store: &impl PreferenceStore) -> Theme {
        self.current = self.current.flipped();
        store.set(THEME_KEY, self.current.as_str());
        debug!(theme = self.current.as_str(), "theme toggled");
        self.current
    }
}
