//! Navigation guard: allow or redirect a route transition by auth state.
//!
//! The guard holds no state. Each transition reads the predicate once,
//! synchronously, before the target view is built:
//!
//! 1. `requires_auth` and not authenticated: redirect to login.
//! 2. `requires_guest` and authenticated: redirect to the dashboard.
//! 3. Otherwise allow.
//!
//! The root path has no view; it is resolved fresh on every visit.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::RouteConfig;
use crate::user::AuthState;

/// Anything that can answer "is someone logged in right now".
pub trait AuthPredicate {
    fn is_authenticated(&self) -> bool;
}

impl AuthPredicate for AuthState {
    fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

impl AuthPredicate for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

/// Per-route access flags. The two flags are exclusive by convention only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false, requires_guest: false };
    pub const AUTH: Self = Self { requires_auth: true, requires_guest: false };
    pub const GUEST: Self = Self { requires_auth: false, requires_guest: true };
}

/// Outcome of checking one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide a single transition against `meta`.
#[must_use]
pub fn check(meta: RouteMeta, auth: &impl AuthPredicate, routes: &RouteConfig) -> GuardDecision {
    let authenticated = auth.is_authenticated();
    if meta.requires_auth && !authenticated {
        GuardDecision::Redirect(routes.login)
    } else if meta.requires_guest && authenticated {
        GuardDecision::Redirect(routes.dashboard)
    } else {
        GuardDecision::Allow
    }
}

/// Where `/` sends the visitor right now.
#[must_use]
pub fn resolve_root(auth: &impl AuthPredicate, routes: &RouteConfig) -> &'static str {
    if auth.is_authenticated() { routes.dashboard } else { routes.login }
}

/// A named, guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: &'static str,
    pub path: &'static str,
    pub meta: RouteMeta,
}

/// Result of resolving a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The requested route is entered as-is.
    Enter(RouteDef),
    /// The request was diverted; `to` is the route actually entered.
    Redirect { from: &'static str, to: RouteDef },
    NotFound,
}

impl Navigation {
    /// Path of the route that ends up rendered, if any.
    #[must_use]
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Enter(route) | Self::Redirect { to: route, .. } => Some(route.path),
            Self::NotFound => None,
        }
    }
}

/// The application's route declarations.
#[derive(Clone, Debug)]
pub struct RouteTable {
    config: RouteConfig,
    routes: Vec<RouteDef>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(RouteConfig::default())
    }
}

impl RouteTable {
    /// Login and register are guest-only; dashboard and tasks need a session.
    #[must_use]
    pub fn new(config: RouteConfig) -> Self {
        let routes = vec![
            RouteDef { name: "login", path: config.login, meta: RouteMeta::GUEST },
            RouteDef { name: "register", path: config.register, meta: RouteMeta::GUEST },
            RouteDef { name: "dashboard", path: config.dashboard, meta: RouteMeta::AUTH },
            RouteDef { name: "tasks", path: config.tasks, meta: RouteMeta::AUTH },
        ];
        Self { config, routes }
    }

    #[must_use]
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    #[must_use]
    pub fn find(&self, path: &str) -> Option<RouteDef> {
        let path = normalize(path);
        self.routes.iter().copied().find(|r| r.path == path)
    }

    /// Metadata for `path`; unknown paths are public.
    #[must_use]
    pub fn meta(&self, path: &str) -> RouteMeta {
        self.find(path).map_or(RouteMeta::PUBLIC, |r| r.meta)
    }

    /// Resolve a navigation to `path` under the current auth state.
    ///
    /// Redirect targets are declared routes whose own guard always allows
    /// the same auth state, so one hop is enough and the requested route is
    /// never entered.
    #[must_use]
    pub fn navigate(&self, path: &str, auth: &impl AuthPredicate) -> Navigation {
        let requested = normalize(path);
        let target = if requested == self.config.root {
            resolve_root(auth, &self.config)
        } else {
            requested
        };

        let Some(route) = self.find(target) else {
            return Navigation::NotFound;
        };
        let diverted_from_root = target != requested;
        match check(route.meta, auth, &self.config) {
            GuardDecision::Allow if diverted_from_root => Navigation::Redirect { from: self.config.root, to: route },
            GuardDecision::Allow => Navigation::Enter(route),
            GuardDecision::Redirect(to) => match self.find(to) {
                Some(to) => Navigation::Redirect { from: route.path, to },
                None => Navigation::NotFound,
            },
        }
    }
}

/// Drop any query or fragment and a trailing slash. Empty means root.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}
