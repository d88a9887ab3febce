//! Navigation state and the host abstraction it runs against.
//!
//! DESIGN
//! ======
//! `Navigator` owns `NavigationState` and the scroll scheduler and talks to
//! the browser only through `NavigationHost`. The hydrate build plugs in
//! `BrowserHost` (`router::browser`); tests plug in a recording fake.
//!
//! INVARIANT
//! =========
//! After `on_pop_state` or a `PushState` click returns, `current_path` equals
//! the host location's pathname.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::intercept::{LinkClick, Location, NavAction, decide_action};
use super::scroll::{ScrollScheduler, ScrollToken, fragment_selector};

/// Side effects the router needs from its environment.
pub trait NavigationHost {
    /// Current document location.
    fn location(&self) -> Location;
    /// Push `url` (path + query + fragment) without reloading.
    fn push_state(&self, url: &str);
    /// Jump the window to (0, 0).
    fn scroll_to_top(&self);
    /// Smooth-scroll the element matching `selector` into view.
    /// Returns `false` when no element matches.
    fn scroll_to_fragment(&self, selector: &str) -> bool;
}

/// The active logical page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current_path: String,
}

impl NavigationState {
    pub fn new(path: impl Into<String>) -> Self {
        Self { current_path: path.into() }
    }
}

/// Result of handling one anchor click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub action: NavAction,
    /// Set when a fragment scroll must run on the next tick.
    pub deferred_scroll: Option<ScrollToken>,
}

pub struct Navigator<H> {
    host: H,
    state: NavigationState,
    scroll: ScrollScheduler,
}

impl<H: NavigationHost> Navigator<H> {
    /// Read the host's current path into fresh navigation state.
    pub fn mount(host: H) -> Self {
        let state = NavigationState::new(host.location().pathname);
        Self { host, state, scroll: ScrollScheduler::default() }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    /// Browser back/forward: the URL already changed, just re-read it.
    pub fn on_pop_state(&mut self) -> &NavigationState {
        self.scroll.invalidate();
        self.state.current_path = self.host.location().pathname;
        &self.state
    }

    /// Apply the interception rules to a click and perform the resulting push.
    pub fn on_link_click(&mut self, click: &LinkClick, resolved: Option<&Location>) -> ClickOutcome {
        let current = self.host.location();
        let action = decide_action(click, resolved, &current);

        let deferred_scroll = match &action {
            NavAction::PushState { path, hash } => {
                self.scroll.invalidate();
                if let Some(url) = action.push_url() {
                    self.host.push_state(&url);
                }
                self.state.current_path.clone_from(path);
                if fragment_selector(hash).is_some() {
                    Some(self.scroll.schedule(hash))
                } else {
                    self.host.scroll_to_top();
                    None
                }
            }
            NavAction::Ignore | NavAction::NativeScroll => None,
        };

        ClickOutcome { action, deferred_scroll }
    }

    /// Run a deferred fragment scroll. Stale tokens and missing targets are
    /// no-ops; returns whether a scroll happened.
    pub fn run_deferred_scroll(&mut self, token: ScrollToken) -> bool {
        let Some(hash) = self.scroll.take(token) else {
            return false;
        };
        fragment_selector(&hash).is_some_and(|selector| self.host.scroll_to_fragment(selector))
    }
}
