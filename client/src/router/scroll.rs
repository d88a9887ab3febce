//! Post-navigation scroll scheduling.
//!
//! A push to a URL with a fragment has to wait one tick: the destination page
//! has not rendered yet when the click handler runs. Each deferred scroll is
//! tied to a token, and any later navigation invalidates it, so a stale
//! scroll never lands on the wrong page.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Handle for one deferred scroll request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollToken(u64);

/// Tracks at most one pending fragment scroll.
#[derive(Debug, Default)]
pub struct ScrollScheduler {
    generation: u64,
    pending: Option<(u64, String)>,
}

impl ScrollScheduler {
    /// Register a deferred scroll to `hash`, replacing any pending one.
    pub fn schedule(&mut self, hash: &str) -> ScrollToken {
        self.generation += 1;
        self.pending = Some((self.generation, hash.to_owned()));
        ScrollToken(self.generation)
    }

    /// Drop whatever is pending; outstanding tokens become stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Claim the pending hash if `token` is still the current one.
    pub fn take(&mut self, token: ScrollToken) -> Option<String> {
        match self.pending.take() {
            Some((generation, hash)) if generation == token.0 => Some(hash),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// CSS selector for a URL fragment, or `None` if there is nothing to target.
///
/// Only the bare `#` check happens here; selectors the browser rejects are
/// treated as missing targets by the caller.
pub fn fragment_selector(hash: &str) -> Option<&str> {
    let hash = hash.trim();
    (hash.len() > 1 && hash.starts_with('#')).then_some(hash)
}
