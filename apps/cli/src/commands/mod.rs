//! CLI command implementations.

mod auth;
mod nav;

pub use auth::{login, login_google, logout, status};
pub use nav::{open, routes};

use anyhow::Result;
use console_core::{Config, Paths};
use console_storage::{create_token_vault, TokenVault};
use route_guard::RouteGuard;
use session_engine::{AuthApi, SessionStore};

/// Load paths and configuration for a command invocation.
fn load() -> Result<(Paths, Config)> {
    let paths = Paths::new()?;
    let config = Config::load(&paths)?;
    Ok((paths, config))
}

/// Open the default token vault.
fn token_vault() -> Result<TokenVault> {
    let (paths, _) = load()?;
    Ok(create_token_vault(&paths)?)
}

/// Build the session store backed by the default vault.
fn session_store() -> Result<SessionStore> {
    let (paths, config) = load()?;
    tracing::debug!(api_url = %config.api_url, "using backend");
    let api = AuthApi::new(config.api_url.clone())?;
    let vault = create_token_vault(&paths)?;
    Ok(SessionStore::new(api, vault)?)
}

/// Build the route guard over the default vault.
fn build_guard() -> Result<RouteGuard> {
    Ok(RouteGuard::new(token_vault()?))
}
