//! Cookie-consent preferences and banner state.
//!
//! DESIGN
//! ======
//! Preferences persist as JSON under `COOKIE_CONSENT_KEY` via
//! `util::ui_persistence`. A missing key means the visitor has not chosen
//! yet; the footer's "Cookie settings" control removes the key to ask again.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use serde::{Deserialize, Serialize};

use crate::util::ui_persistence;

/// `localStorage` key for stored preferences.
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";
/// Delay before the banner appears for undecided visitors.
pub const BANNER_DELAY_MS: u32 = 1_000;

/// Per-category cookie choices. Necessary cookies cannot be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub necessary: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
    #[serde(default)]
    pub functional: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self { necessary: true, analytics: false, marketing: false, functional: false }
    }
}

impl CookiePreferences {
    pub fn all() -> Self {
        Self { necessary: true, analytics: true, marketing: true, functional: true }
    }
}

/// Optional preference categories the visitor can toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CookieCategory {
    Analytics,
    Marketing,
    Functional,
}

/// Banner visibility plus the preferences being edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsentState {
    pub visible: bool,
    pub customizing: bool,
    pub preferences: CookiePreferences,
    /// A stored choice exists.
    pub decided: bool,
}

impl ConsentState {
    /// Build state from whatever was found in storage.
    pub fn from_stored(stored: Option<CookiePreferences>) -> Self {
        match stored {
            Some(preferences) => Self { preferences, decided: true, ..Self::default() },
            None => Self::default(),
        }
    }

    /// Whether the delayed banner should open.
    pub fn needs_prompt(&self) -> bool {
        !self.decided
    }

    pub fn toggle(&mut self, category: CookieCategory) {
        let prefs = &mut self.preferences;
        match category {
            CookieCategory::Analytics => prefs.analytics = !prefs.analytics,
            CookieCategory::Marketing => prefs.marketing = !prefs.marketing,
            CookieCategory::Functional => prefs.functional = !prefs.functional,
        }
        prefs.necessary = true;
    }

    pub fn accept_all(&mut self) -> CookiePreferences {
        self.preferences = CookiePreferences::all();
        self.close_decided()
    }

    pub fn accept_necessary(&mut self) -> CookiePreferences {
        self.preferences = CookiePreferences::default();
        self.close_decided()
    }

    /// Keep whatever was toggled in the preference panel.
    pub fn save(&mut self) -> CookiePreferences {
        self.preferences.necessary = true;
        self.close_decided()
    }

    /// Forget the stored choice and show the banner again.
    pub fn reopen(&mut self) {
        *self = Self { visible: true, ..Self::default() };
    }

    fn close_decided(&mut self) -> CookiePreferences {
        self.visible = false;
        self.customizing = false;
        self.decided = true;
        self.preferences
    }
}

/// Stored preferences, if the visitor has chosen.
pub fn load() -> Option<CookiePreferences> {
    ui_persistence::load_json(COOKIE_CONSENT_KEY)
}

pub fn save(prefs: &CookiePreferences) {
    ui_persistence::save_json(COOKIE_CONSENT_KEY, prefs);
}

/// Forget the stored choice so the banner asks again.
pub fn clear() {
    ui_persistence::remove(COOKIE_CONSENT_KEY);
}
