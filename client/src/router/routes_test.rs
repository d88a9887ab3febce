use std::collections::HashSet;

use super::*;

#[test]
fn every_table_path_resolves_to_its_page() {
    for (path, page) in ROUTES {
        assert_eq!(resolve(path), *page, "{path}");
        assert_eq!(resolve(path), resolve(path));
        assert_eq!(page.path(), *path);
    }
}

#[test]
fn table_paths_and_pages_are_unique() {
    let paths: HashSet<_> = ROUTES.iter().map(|(p, _)| *p).collect();
    let pages: HashSet<_> = ROUTES.iter().map(|(_, p)| *p).collect();
    assert_eq!(paths.len(), ROUTES.len());
    assert_eq!(pages.len(), ROUTES.len());
}

#[test]
fn marketing_table_matches_published_paths() {
    for path in [
        "/privacy-policy",
        "/terms-of-service",
        "/security",
        "/about",
        "/contact",
        "/integrations",
        "/cookie-policy",
        "/blog",
        "/case-studies",
        "/careers",
        "/status",
        "/documentation",
        "/do-not-sell",
        "/sign-in",
        "/sign-up",
        "/artists",
        "/labels",
        "/promoters",
        "/community",
        "/academy",
        "/features/discovery-engine",
        "/features/analytics-dashboard",
        "/features/geofencing-segmentation",
        "/features/campaign-orchestration",
    ] {
        assert_ne!(resolve(path), Page::Home, "{path}");
    }
    assert_eq!(resolve("/"), Page::Home);
}

#[test]
fn unknown_paths_fall_back_to_home() {
    assert_eq!(resolve("/unknown-xyz"), Page::Home);
    assert_eq!(resolve(""), Page::Home);
    assert_eq!(resolve("/features"), Page::Home);
    assert_eq!(resolve("/features/discovery-engine/extra"), Page::Home);
}

#[test]
fn matching_is_exact() {
    assert_eq!(resolve("/about/"), Page::Home);
    assert_eq!(resolve("/About"), Page::Home);
    assert_eq!(resolve("about"), Page::Home);
}

#[test]
fn every_page_has_a_title() {
    for (_, page) in ROUTES {
        assert!(!page.title().is_empty());
    }
}
