//! Storage keys and route paths shared by the store, the guard, and the app.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SESSION_KEY: &str = "auth-user";
pub const DEFAULT_USERS_KEY: &str = "users";
pub const DEFAULT_TASKS_KEY_PREFIX: &str = "tasks:";

pub const DEFAULT_ROOT_PATH: &str = "/";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_REGISTER_PATH: &str = "/register";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
pub const DEFAULT_TASKS_PATH: &str = "/tasks";

/// Durable storage keys used by [`crate::SessionStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Key holding the JSON session user.
    pub session_key: String,
    /// Key holding the JSON credential collection.
    pub users_key: String,
    /// Prefix for per-user task lists; the user id is appended.
    pub tasks_key_prefix: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_owned(),
            users_key: DEFAULT_USERS_KEY.to_owned(),
            tasks_key_prefix: DEFAULT_TASKS_KEY_PREFIX.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Storage key for the task list owned by `user_id`.
    #[must_use]
    pub fn tasks_key(&self, user_id: &str) -> String {
        format!("{}{user_id}", self.tasks_key_prefix)
    }
}

/// Paths the guard redirects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConfig {
    pub root: &'static str,
    pub login: &'static str,
    pub register: &'static str,
    pub dashboard: &'static str,
    pub tasks: &'static str,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT_PATH,
            login: DEFAULT_LOGIN_PATH,
            register: DEFAULT_REGISTER_PATH,
            dashboard: DEFAULT_DASHBOARD_PATH,
            tasks: DEFAULT_TASKS_PATH,
        }
    }
}
