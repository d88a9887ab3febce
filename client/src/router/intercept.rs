//! Link-click interception rules.
//!
//! DESIGN
//! ======
//! The document-level click listener only gathers facts about the clicked
//! anchor. Whether the router takes over the navigation is decided here by a
//! pure function, so the rules can be exercised without a DOM.

#[cfg(test)]
#[path = "intercept_test.rs"]
mod intercept_test;

/// The routing-relevant pieces of an absolute URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub origin: String,
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Location {
    /// Split an absolute `scheme://authority/path?query#fragment` URL.
    ///
    /// Returns `None` for relative or scheme-less input. Empty `?`/`#`
    /// markers normalize to empty strings, and default ports are dropped
    /// from the origin the way browsers report `location.origin`.
    pub fn parse(url: &str) -> Option<Self> {
        let (scheme, rest) = url.trim().split_once("://")?;
        if scheme.is_empty()
            || !scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return None;
        }

        let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(authority_end);
        if authority.is_empty() {
            return None;
        }

        let (before_hash, hash) = tail.find('#').map_or((tail, ""), |i| tail.split_at(i));
        let (path, search) = before_hash
            .find('?')
            .map_or((before_hash, ""), |i| before_hash.split_at(i));

        let scheme = scheme.to_ascii_lowercase();
        Some(Self {
            origin: format!("{scheme}://{}", normalize_authority(&scheme, authority)),
            pathname: if path.is_empty() { "/".to_owned() } else { path.to_owned() },
            search: non_marker(search),
            hash: non_marker(hash),
        })
    }
}

fn normalize_authority(scheme: &str, authority: &str) -> String {
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host).to_ascii_lowercase();
    let default_port = match scheme {
        "http" | "ws" => Some(":80"),
        "https" | "wss" => Some(":443"),
        _ => None,
    };
    match default_port {
        Some(port) if host.ends_with(port) => host[..host.len() - port.len()].to_owned(),
        _ => host,
    }
}

fn non_marker(part: &str) -> String {
    if part.len() <= 1 { String::new() } else { part.to_owned() }
}

/// What the listener observed about a click on (or inside) an anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkClick {
    /// Raw `href` attribute, before resolution.
    pub href: Option<String>,
    /// Raw `target` attribute.
    pub target: Option<String>,
    /// Whether the anchor carries a `download` attribute.
    pub download: bool,
    /// `MouseEvent.button`; 0 is the primary button.
    pub button: i16,
    /// Any of ctrl/meta/shift/alt held.
    pub modifier: bool,
    /// Another handler already called `preventDefault`.
    pub default_prevented: bool,
}

/// Router decision for a single click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Leave the event alone; the browser navigates (or does nothing) natively.
    Ignore,
    /// Same-page fragment jump; the browser's native anchor scroll runs.
    NativeScroll,
    /// Cancel the default navigation and push a new history entry.
    PushState { path: String, hash: String },
}

impl NavAction {
    /// Only a push takes the navigation away from the browser.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::PushState { .. })
    }

    /// URL handed to `history.pushState`: path plus fragment. The query
    /// string of the link is not carried into the pushed entry.
    pub fn push_url(&self) -> Option<String> {
        match self {
            Self::PushState { path, hash } => Some(format!("{path}{hash}")),
            Self::Ignore | Self::NativeScroll => None,
        }
    }
}

/// Decide how to handle an anchor click.
///
/// `resolved` is the anchor's href resolved against the document base (the
/// browser does this), or `None` when it could not be resolved.
pub fn decide_action(click: &LinkClick, resolved: Option<&Location>, current: &Location) -> NavAction {
    let Some(href) = click.href.as_deref().map(str::trim).filter(|h| !h.is_empty()) else {
        return NavAction::Ignore;
    };
    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("mailto:") || lowered.starts_with("tel:") {
        return NavAction::Ignore;
    }
    if click
        .target
        .as_deref()
        .is_some_and(|t| !t.is_empty() && !t.eq_ignore_ascii_case("_self"))
    {
        return NavAction::Ignore;
    }
    if click.download || click.button != 0 || click.modifier || click.default_prevented {
        return NavAction::Ignore;
    }

    let Some(link) = resolved else {
        return NavAction::Ignore;
    };
    if link.origin != current.origin {
        return NavAction::Ignore;
    }
    if !link.hash.is_empty() && link.pathname == current.pathname {
        return NavAction::NativeScroll;
    }

    NavAction::PushState {
        path: link.pathname.clone(),
        hash: link.hash.clone(),
    }
}
