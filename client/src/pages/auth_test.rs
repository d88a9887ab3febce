use super::*;

#[test]
fn accepts_and_trims_plain_addresses() {
    assert_eq!(validate_email("  fan@example.com "), Ok("fan@example.com".to_owned()));
}

#[test]
fn rejects_blank_and_malformed_addresses() {
    assert_eq!(validate_email("   "), Err("Enter an email first."));
    assert!(validate_email("fan").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("fan@localhost").is_err());
    assert!(validate_email("fan@example.").is_err());
}
