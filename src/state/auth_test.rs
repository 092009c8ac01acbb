use super::*;
use auth::{AuthConfig, MemoryStorage};

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new(), AuthConfig::default(), || 1_700_000_000_000)
}

// =============================================================
// Input validation
// =============================================================

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@x.com ", "pw1"),
        Ok(("a@x.com".to_owned(), "pw1".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@x.com", " pw "),
        Ok(("a@x.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw1"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@x.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(
        validate_register_input(" Alice ", "a@x.com", "pw1"),
        Ok(("Alice".to_owned(), "a@x.com".to_owned(), "pw1".to_owned()))
    );
    assert_eq!(validate_register_input("", "a@x.com", "pw1"), Err("Fill in name, email, and password."));
    assert_eq!(validate_register_input("Alice", " ", "pw1"), Err("Fill in name, email, and password."));
    assert_eq!(validate_register_input("Alice", "a@x.com", ""), Err("Fill in name, email, and password."));
}

// =============================================================
// Submit helpers
// =============================================================

#[test]
fn submit_register_then_login() {
    let store = store();
    assert_eq!(submit_register(&store, "Alice", "a@x.com", "pw1"), AuthOutcome::ok());
    store.logout();
    assert_eq!(submit_login(&store, " a@x.com ", "pw1"), AuthOutcome::ok());
    assert!(store.is_authenticated());
}

#[test]
fn submit_register_duplicate_reports_message() {
    let store = store();
    submit_register(&store, "Alice", "a@x.com", "pw1");
    let outcome = submit_register(&store, "Alice", "a@x.com", "pw1");
    assert_eq!(outcome, AuthOutcome::failed("Email already registered"));
}

#[test]
fn submit_login_bad_password_reports_generic_message() {
    let store = store();
    submit_register(&store, "Alice", "a@x.com", "pw1");
    store.logout();
    assert_eq!(submit_login(&store, "a@x.com", "wrong"), AuthOutcome::failed("Invalid email or password"));
}

#[test]
fn submit_login_blank_input_skips_store() {
    let store = store();
    assert_eq!(submit_login(&store, "", ""), AuthOutcome::failed("Enter both email and password."));
    assert!(!store.storage().contains("users"));
}
