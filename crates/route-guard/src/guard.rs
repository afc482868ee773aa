//! Navigation guard enforcing token presence on protected routes.

use crate::routes;
use console_storage::TokenVault;
use serde::Serialize;
use tracing::{debug, warn};

/// Where unauthenticated navigation gets sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    /// Navigation may proceed to the named view
    Proceed {
        /// Route name
        name: String,
        /// Captured path parameters
        params: Vec<(String, String)>,
    },
    /// Navigation was substituted with a redirect
    Redirect {
        /// Redirect destination
        to: String,
    },
    /// No route matches the path
    NotFound,
}

/// Intercepts navigation and redirects unauthenticated access to `/login`.
///
/// The check is synchronous and purely presence-based: it reads the
/// durable token slot and never validates or mutates it. A stale token
/// passes; the backend is the authority that will reject it.
pub struct RouteGuard {
    vault: TokenVault,
}

impl RouteGuard {
    /// Create a guard reading token presence from the given vault.
    pub fn new(vault: TokenVault) -> Self {
        Self { vault }
    }

    /// Resolve a navigation attempt.
    pub fn resolve(&self, path: &str) -> Navigation {
        let Some(matched) = routes::find(path) else {
            debug!(%path, "no route for path");
            return Navigation::NotFound;
        };

        if matched.route.requires_auth && !self.token_present() {
            debug!(%path, route = matched.route.name, "redirecting unauthenticated navigation");
            return Navigation::Redirect {
                to: LOGIN_ROUTE.to_string(),
            };
        }

        Navigation::Proceed {
            name: matched.route.name.to_string(),
            params: matched.params,
        }
    }

    /// Probe the vault for a token. A storage failure is logged and
    /// treated as "no token": the guard must never grant access it
    /// cannot confirm.
    fn token_present(&self) -> bool {
        match self.vault.has_token() {
            Ok(present) => present,
            Err(e) => {
                warn!(error = %e, "token probe failed, treating as unauthenticated");
                false
            }
        }
    }
}
