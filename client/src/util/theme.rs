//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies the
//! `dark-mode` class to `<body>`. Toggle writes the new value back and updates
//! the class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op to keep server rendering deterministic (always light).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
use crate::consts::{DARK_MODE_CLASS, THEME_STORAGE_KEY};

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value persisted under the storage key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only `"dark"` selects dark mode.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        if raw == Some("dark") { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Read the theme preference from `localStorage`; light when nothing is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Add or remove the dark-mode class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        let result = if theme.is_dark() { classes.add_1(DARK_MODE_CLASS) } else { classes.remove_1(DARK_MODE_CLASS) };
        if let Err(err) = result {
            log::warn!("theme class update failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Err(err) = storage.set_item(THEME_STORAGE_KEY, next.as_str()) {
                log::warn!("theme preference not saved: {err:?}");
            }
        }
    }
    next
}
