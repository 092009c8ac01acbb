use super::*;

#[test]
fn auth_config_default_uses_browser_keys() {
    let config = AuthConfig::default();
    assert_eq!(config.session_key, "auth-user");
    assert_eq!(config.users_key, "users");
}

#[test]
fn tasks_key_appends_user_id() {
    let config = AuthConfig::default();
    assert_eq!(config.tasks_key("1700000000000"), "tasks:1700000000000");
}

#[test]
fn route_config_default_paths() {
    let routes = RouteConfig::default();
    assert_eq!(routes.root, "/");
    assert_eq!(routes.login, "/login");
    assert_eq!(routes.register, "/register");
    assert_eq!(routes.dashboard, "/dashboard");
    assert_eq!(routes.tasks, "/tasks");
}
