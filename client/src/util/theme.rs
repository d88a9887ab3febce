//! Light/dark theme initialization and toggle.
//!
//! Reads the stored choice from `localStorage` and applies it as a `light` or
//! `dark` class on the `<html>` element. The site is dark unless the visitor
//! picked light.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "wreckshop-marketing-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the stored theme, falling back to the dark default.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Swap the theme class on `<html>` and persist the choice.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(el) = window.document().and_then(|d| d.document_element()) {
            let classes = el.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(theme.as_str());
        }
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and return the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    next
}
