use serde::{Deserialize, Serialize};

use crate::storefront::KeyValueStore;

/// Storage key of the persisted theme
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The persisted theme, or the system preference if none was stored.
    /// Any stored value other than `"dark"` reads as light.
    pub fn load(store: &impl KeyValueStore, system_prefers_dark: bool) -> Theme {
        match store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
