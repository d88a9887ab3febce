#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::consent::{COOKIE_CONSENT_KEY, CookiePreferences};

#[test]
fn load_is_none_outside_the_browser() {
    assert!(load_json::<CookiePreferences>(COOKIE_CONSENT_KEY).is_none());
}

#[test]
fn save_and_remove_are_noops_but_callable() {
    save_json(COOKIE_CONSENT_KEY, &CookiePreferences::all());
    remove(COOKIE_CONSENT_KEY);
    assert!(load_json::<CookiePreferences>(COOKIE_CONSENT_KEY).is_none());
}
