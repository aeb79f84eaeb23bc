//! Route table and navigation guard.
//!
//! Routes carry independent metadata flags; the guard evaluates them in a
//! fixed order before every navigation and answers with a decision the
//! shell applies. The guard is the only component that reads another
//! store's state, and it reads only the auth store's derived views.

use crate::stores::AuthStore;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";

/// Per-route requirement flags, each independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_manager: bool,
    pub requires_admin: bool,
    pub requires_guest: bool,
}

impl RouteMeta {
    pub const fn none() -> Self {
        Self {
            requires_auth: false,
            requires_manager: false,
            requires_admin: false,
            requires_guest: false,
        }
    }

    pub const fn guest() -> Self {
        Self {
            requires_guest: true,
            ..Self::none()
        }
    }

    pub const fn auth() -> Self {
        Self {
            requires_auth: true,
            ..Self::none()
        }
    }

    pub const fn manager() -> Self {
        Self {
            requires_manager: true,
            ..Self::none()
        }
    }

    pub const fn admin() -> Self {
        Self {
            requires_admin: true,
            ..Self::none()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

/// The view routes. `/` and `/login` carry no conflicting requirements, so
/// guard redirects cannot loop.
pub const ROUTES: &[Route] = &[
    Route {
        path: HOME,
        name: "Home",
        meta: RouteMeta::none(),
    },
    Route {
        path: LOGIN,
        name: "Login",
        meta: RouteMeta::guest(),
    },
    Route {
        path: "/register",
        name: "Register",
        meta: RouteMeta::guest(),
    },
    Route {
        path: "/beach-crowd",
        name: "BeachCrowd",
        meta: RouteMeta::auth(),
    },
    Route {
        path: "/beach-crowd/:beachName",
        name: "BeachDetail",
        meta: RouteMeta::auth(),
    },
    Route {
        path: "/ai-model",
        name: "ModelControl",
        meta: RouteMeta::manager(),
    },
    Route {
        path: "/admin",
        name: "Admin",
        meta: RouteMeta::admin(),
    },
];

pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(&'static str),
}

/// Guard consulted before every navigation.
///
/// Rules, in fixed order: load the profile on demand when a token exists
/// without one (failure clears the session and sends the visitor to login);
/// then auth, manager, admin, and guest-only checks.
pub async fn before_navigation(auth: &AuthStore, meta: &RouteMeta) -> NavigationDecision {
    if auth.is_logged_in() && !auth.profile_loaded() {
        if let Err(e) = auth.load_user_profile().await {
            tracing::warn!(error = %e, "profile load failed during navigation");
            auth.clear_auth();
            return NavigationDecision::Redirect(LOGIN);
        }
    }

    if meta.requires_auth && !auth.is_logged_in() {
        return NavigationDecision::Redirect(LOGIN);
    }
    if meta.requires_manager && !auth.is_manager() {
        return NavigationDecision::Redirect(HOME);
    }
    if meta.requires_admin && !auth.is_admin() {
        return NavigationDecision::Redirect(HOME);
    }
    if meta.requires_guest && auth.is_logged_in() {
        return NavigationDecision::Redirect(HOME);
    }

    NavigationDecision::Proceed
}
