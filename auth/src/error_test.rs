use super::*;

#[test]
fn expected_failures_render_ui_messages() {
    assert_eq!(AuthError::EmailTaken.to_string(), "Email already registered");
    assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
}

#[test]
fn corrupt_credentials_wraps_parse_error() {
    let parse = serde_json::from_str::<serde_json::Value>("not json").expect_err("invalid json");
    let err = AuthError::from(parse);
    assert!(matches!(err, AuthError::CorruptCredentials(_)));
    assert!(err.to_string().starts_with("stored credentials are unreadable"));
}

#[test]
fn outcome_from_ok_is_success_without_error() {
    let user = User { id: "1".to_owned(), email: "a@x.com".to_owned(), name: "Alice".to_owned() };
    assert_eq!(AuthOutcome::from(Ok(user)), AuthOutcome { success: true, error: None });
}

#[test]
fn outcome_from_err_carries_message() {
    let outcome = AuthOutcome::from(Err(AuthError::InvalidCredentials));
    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("Invalid email or password"));
}

#[test]
fn outcome_serializes_without_null_error() {
    let json = serde_json::to_value(AuthOutcome::ok()).expect("serialize");
    assert_eq!(json, serde_json::json!({ "success": true }));
}
