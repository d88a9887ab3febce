use std::cell::{Cell, RefCell};

use super::*;

const ORIGIN: &str = "https://wreckshop.test";

struct FakeHost {
    location: RefCell<Location>,
    pushed: RefCell<Vec<String>>,
    top_scrolls: Cell<usize>,
    fragment_scrolls: RefCell<Vec<String>>,
    targets: Vec<&'static str>,
}

impl FakeHost {
    fn at(path: &str) -> Self {
        Self::with_targets(path, Vec::new())
    }

    fn with_targets(path: &str, targets: Vec<&'static str>) -> Self {
        Self {
            location: RefCell::new(resolve(path)),
            pushed: RefCell::new(Vec::new()),
            top_scrolls: Cell::new(0),
            fragment_scrolls: RefCell::new(Vec::new()),
            targets,
        }
    }

    fn browser_moved_to(&self, path: &str) {
        *self.location.borrow_mut() = resolve(path);
    }
}

impl NavigationHost for FakeHost {
    fn location(&self) -> Location {
        self.location.borrow().clone()
    }

    fn push_state(&self, url: &str) {
        self.pushed.borrow_mut().push(url.to_owned());
        *self.location.borrow_mut() = resolve(url);
    }

    fn scroll_to_top(&self) {
        self.top_scrolls.set(self.top_scrolls.get() + 1);
    }

    fn scroll_to_fragment(&self, selector: &str) -> bool {
        if self.targets.contains(&selector) {
            self.fragment_scrolls.borrow_mut().push(selector.to_owned());
            true
        } else {
            false
        }
    }
}

fn resolve(href: &str) -> Location {
    Location::parse(&format!("{ORIGIN}{href}")).unwrap()
}

fn click(href: &str) -> LinkClick {
    LinkClick { href: Some(href.to_owned()), ..LinkClick::default() }
}

#[test]
fn mount_reads_current_path() {
    let nav = Navigator::mount(FakeHost::at("/labels"));
    assert_eq!(nav.current_path(), "/labels");
}

#[test]
fn internal_click_pushes_and_scrolls_to_top() {
    let mut nav = Navigator::mount(FakeHost::at("/"));
    let outcome = nav.on_link_click(&click("/about"), Some(&resolve("/about")));

    assert!(outcome.action.prevents_default());
    assert!(outcome.deferred_scroll.is_none());
    assert_eq!(nav.current_path(), "/about");
    assert_eq!(*nav.host().pushed.borrow(), vec!["/about".to_owned()]);
    assert_eq!(nav.host().top_scrolls.get(), 1);
    assert_eq!(nav.current_path(), nav.host().location().pathname);
}

#[test]
fn push_drops_query_string() {
    let mut nav = Navigator::mount(FakeHost::at("/"));
    nav.on_link_click(&click("/sign-up?plan=pro"), Some(&resolve("/sign-up?plan=pro")));
    assert_eq!(*nav.host().pushed.borrow(), vec!["/sign-up".to_owned()]);
    assert_eq!(nav.current_path(), "/sign-up");
}

#[test]
fn external_click_changes_nothing() {
    let mut nav = Navigator::mount(FakeHost::at("/"));
    let external = Location::parse("https://instagram.com/wreckshop").unwrap();
    let outcome = nav.on_link_click(&click("https://instagram.com/wreckshop"), Some(&external));

    assert_eq!(outcome.action, NavAction::Ignore);
    assert_eq!(nav.current_path(), "/");
    assert!(nav.host().pushed.borrow().is_empty());
    assert_eq!(nav.host().top_scrolls.get(), 0);
}

#[test]
fn same_page_hash_leaves_scrolling_to_browser() {
    let mut nav = Navigator::mount(FakeHost::with_targets("/", vec!["#pricing"]));
    let outcome = nav.on_link_click(&click("/#pricing"), Some(&resolve("/#pricing")));

    assert_eq!(outcome.action, NavAction::NativeScroll);
    assert!(nav.host().pushed.borrow().is_empty());
    assert!(nav.host().fragment_scrolls.borrow().is_empty());
    assert_eq!(nav.current_path(), "/");
}

#[test]
fn cross_page_hash_scrolls_after_tick_when_target_exists() {
    let mut nav = Navigator::mount(FakeHost::with_targets("/artists", vec!["#pricing"]));
    let outcome = nav.on_link_click(&click("/#pricing"), Some(&resolve("/#pricing")));

    assert_eq!(nav.current_path(), "/");
    assert_eq!(*nav.host().pushed.borrow(), vec!["/#pricing".to_owned()]);
    assert_eq!(nav.host().top_scrolls.get(), 0);
    assert!(nav.host().fragment_scrolls.borrow().is_empty());

    let token = outcome.deferred_scroll.unwrap();
    assert!(nav.run_deferred_scroll(token));
    assert_eq!(*nav.host().fragment_scrolls.borrow(), vec!["#pricing".to_owned()]);
}

#[test]
fn cross_page_hash_without_target_is_silent() {
    let mut nav = Navigator::mount(FakeHost::at("/artists"));
    let outcome = nav.on_link_click(&click("/#pricing"), Some(&resolve("/#pricing")));

    assert!(!nav.run_deferred_scroll(outcome.deferred_scroll.unwrap()));
    assert!(nav.host().fragment_scrolls.borrow().is_empty());
    assert_eq!(nav.current_path(), "/");
}

#[test]
fn second_navigation_cancels_pending_fragment_scroll() {
    let mut nav = Navigator::mount(FakeHost::with_targets("/artists", vec!["#pricing"]));
    let first = nav.on_link_click(&click("/#pricing"), Some(&resolve("/#pricing")));
    nav.on_link_click(&click("/blog"), Some(&resolve("/blog")));

    assert!(!nav.run_deferred_scroll(first.deferred_scroll.unwrap()));
    assert!(nav.host().fragment_scrolls.borrow().is_empty());
    assert_eq!(nav.current_path(), "/blog");
}

#[test]
fn pop_state_syncs_path_without_side_effects() {
    let mut nav = Navigator::mount(FakeHost::at("/"));
    nav.host().browser_moved_to("/about");

    assert_eq!(nav.on_pop_state().current_path, "/about");
    assert!(nav.host().pushed.borrow().is_empty());
    assert_eq!(nav.host().top_scrolls.get(), 0);
}

#[test]
fn pop_state_cancels_pending_fragment_scroll() {
    let mut nav = Navigator::mount(FakeHost::with_targets("/labels", vec!["#faq"]));
    let outcome = nav.on_link_click(&click("/#faq"), Some(&resolve("/#faq")));
    nav.host().browser_moved_to("/labels");
    nav.on_pop_state();

    assert!(!nav.run_deferred_scroll(outcome.deferred_scroll.unwrap()));
    assert_eq!(nav.current_path(), "/labels");
}
