use super::*;

#[test]
fn scheduled_scroll_is_claimed_once() {
    let mut scheduler = ScrollScheduler::default();
    let token = scheduler.schedule("#pricing");
    assert!(scheduler.is_pending());
    assert_eq!(scheduler.take(token).as_deref(), Some("#pricing"));
    assert_eq!(scheduler.take(token), None);
    assert!(!scheduler.is_pending());
}

#[test]
fn invalidate_makes_token_stale() {
    let mut scheduler = ScrollScheduler::default();
    let token = scheduler.schedule("#faq");
    scheduler.invalidate();
    assert_eq!(scheduler.take(token), None);
}

#[test]
fn newer_schedule_supersedes_older_token() {
    let mut scheduler = ScrollScheduler::default();
    let first = scheduler.schedule("#pricing");
    let second = scheduler.schedule("#faq");
    assert_eq!(scheduler.take(first), None);
    assert!(scheduler.is_pending());
    assert_eq!(scheduler.take(second).as_deref(), Some("#faq"));
}

#[test]
fn fragment_selector_requires_a_name() {
    assert_eq!(fragment_selector("#pricing"), Some("#pricing"));
    assert_eq!(fragment_selector("#"), None);
    assert_eq!(fragment_selector(""), None);
    assert_eq!(fragment_selector("pricing"), None);
}
