//! Browser bindings for the site router (hydrate builds only).
//!
//! SYSTEM CONTEXT
//! ==============
//! One capture-phase `click` listener on `document` sees every anchor click
//! in the rendered tree, and one `popstate` listener on `window` follows
//! back/forward. Both feed a shared `Navigator<BrowserHost>` and mirror its
//! state into the `NavigationState` signal the page outlet reads.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use super::intercept::{LinkClick, Location};
use super::navigation::{NavigationHost, NavigationState, Navigator};

/// `NavigationHost` over `window.location`, `history` and scrolling.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl NavigationHost for BrowserHost {
    fn location(&self) -> Location {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .and_then(|href| Location::parse(&href))
            .unwrap_or_default()
    }

    fn push_state(&self, url: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
                log::warn!("history.pushState({url}) failed: {e:?}");
            }
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn scroll_to_fragment(&self, selector: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        // querySelector throws on selectors like `#1st`; treat as missing.
        let Ok(Some(element)) = document.query_selector(selector) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

type SharedNavigator = Rc<RefCell<Navigator<BrowserHost>>>;

struct RouterListeners {
    click: Closure<dyn FnMut(web_sys::MouseEvent)>,
    popstate: Closure<dyn FnMut(web_sys::Event)>,
}

thread_local! {
    static LISTENERS: RefCell<Option<RouterListeners>> = const { RefCell::new(None) };
}

/// Attach the document click and window popstate listeners.
///
/// Replaces any listeners from an earlier mount.
pub fn attach(nav: RwSignal<NavigationState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    detach();

    let navigator: SharedNavigator = Rc::new(RefCell::new(Navigator::mount(BrowserHost)));
    nav.set(navigator.borrow().state().clone());

    let click_nav = Rc::clone(&navigator);
    let click = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
        on_click(&click_nav, nav, &ev);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let pop_nav = Rc::clone(&navigator);
    let popstate = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        let state = pop_nav.borrow_mut().on_pop_state().clone();
        log::debug!("popstate -> {}", state.current_path);
        nav.set(state);
    }) as Box<dyn FnMut(web_sys::Event)>);

    let options = web_sys::AddEventListenerOptions::new();
    options.set_capture(true);
    if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        click.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("router click listener not attached: {e:?}");
    }
    if let Err(e) = window.add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref()) {
        log::warn!("router popstate listener not attached: {e:?}");
    }

    LISTENERS.with(|slot| *slot.borrow_mut() = Some(RouterListeners { click, popstate }));
}

/// Remove listeners installed by [`attach`]. Safe to call repeatedly.
pub fn detach() {
    let Some(listeners) = LISTENERS.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(document) = window.document() {
        let _ = document.remove_event_listener_with_callback_and_bool(
            "click",
            listeners.click.as_ref().unchecked_ref(),
            true,
        );
    }
    let _ = window.remove_event_listener_with_callback("popstate", listeners.popstate.as_ref().unchecked_ref());
}

fn on_click(navigator: &SharedNavigator, nav: RwSignal<NavigationState>, ev: &web_sys::MouseEvent) {
    let Some((click, resolved)) = read_link_click(ev) else {
        return;
    };
    let outcome = navigator.borrow_mut().on_link_click(&click, resolved.as_ref());
    log::debug!("link click {:?} -> {:?}", click.href, outcome.action);
    if !outcome.action.prevents_default() {
        return;
    }

    ev.prevent_default();
    let state = navigator.borrow().state().clone();
    nav.set(state);

    if let Some(token) = outcome.deferred_scroll {
        let deferred = Rc::clone(navigator);
        Timeout::new(0, move || {
            deferred.borrow_mut().run_deferred_scroll(token);
        })
        .forget();
    }
}

/// Describe the click if it landed inside an anchor.
fn read_link_click(ev: &web_sys::MouseEvent) -> Option<(LinkClick, Option<Location>)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = target.closest("a").ok().flatten()?;
    let href = anchor.get_attribute("href");
    let click = LinkClick {
        href: href.clone(),
        target: anchor.get_attribute("target"),
        download: anchor.has_attribute("download"),
        button: ev.button(),
        modifier: ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key(),
        default_prevented: ev.default_prevented(),
    };
    let resolved = href.as_deref().and_then(resolve_href);
    Some((click, resolved))
}

/// Resolve an href against the current document URL.
fn resolve_href(href: &str) -> Option<Location> {
    let base = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new_with_base(href, &base).ok()?;
    Location::parse(&url.href())
}
