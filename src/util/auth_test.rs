use super::*;
use auth::User;

fn signed_in() -> AuthState {
    AuthState::from_user(Some(User {
        id: "u1".to_owned(),
        email: "a@x.com".to_owned(),
        name: "Alice".to_owned(),
    }))
}

#[test]
fn protected_path_redirects_when_signed_out() {
    let table = RouteTable::default();
    assert_eq!(redirect_for(&table, "/dashboard", &AuthState::default()), Some("/login"));
    assert_eq!(redirect_for(&table, "/tasks", &AuthState::default()), Some("/login"));
}

#[test]
fn protected_path_renders_when_signed_in() {
    let table = RouteTable::default();
    assert_eq!(redirect_for(&table, "/dashboard", &signed_in()), None);
}

#[test]
fn guest_path_redirects_when_signed_in() {
    let table = RouteTable::default();
    assert_eq!(redirect_for(&table, "/login", &signed_in()), Some("/dashboard"));
    assert_eq!(redirect_for(&table, "/register", &signed_in()), Some("/dashboard"));
}

#[test]
fn guest_path_renders_when_signed_out() {
    let table = RouteTable::default();
    assert_eq!(redirect_for(&table, "/login", &AuthState::default()), None);
}
