//! Session store: owns the in-memory session and its durable mirror.
//!
//! Invariant: at every quiescent point the in-memory token and the vault's
//! token slot are either both absent or both equal. Mutations write the
//! vault first, so a failed persist leaves memory untouched.

use crate::api::{AuthApi, OtpRequested, UserProfile};
use crate::{SessionError, SessionResult};
use console_storage::{SessionMeta, TokenVault};
use tracing::{info, warn};

/// Authentication state, derived from token presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No session token
    Unauthenticated,
    /// A session token is held (presence only, never validated locally)
    Authenticated,
}

/// The in-memory session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Opaque session token
    pub token: Option<String>,
    /// Profile of the signed-in user
    pub user: Option<UserProfile>,
}

/// Owns the session and mediates all credential-exchange calls.
///
/// There is exactly one of these per process, constructed at startup and
/// handed to whoever needs it — no ambient global.
pub struct SessionStore {
    api: AuthApi,
    vault: TokenVault,
    session: Session,
}

impl SessionStore {
    /// Create a store, hydrating the session from the vault.
    pub fn new(api: AuthApi, vault: TokenVault) -> SessionResult<Self> {
        let token = vault.get_token()?;
        let user = if token.is_some() {
            vault
                .get_session_meta()?
                .and_then(|meta| meta.email)
                .map(|email| UserProfile::with_email(&email))
        } else {
            None
        };

        Ok(Self {
            api,
            vault,
            session: Session { token, user },
        })
    }

    /// Request an OTP for the given credentials.
    ///
    /// Pure passthrough: the server payload is returned untouched and the
    /// session is not mutated, whatever the outcome.
    pub async fn request_otp(&self, email: &str, password: &str) -> SessionResult<OtpRequested> {
        match self.api.request_otp(email, password).await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                warn!(error = %e, "OTP request failed");
                Err(e)
            }
        }
    }

    /// Exchange an emailed code for a session.
    ///
    /// On a response carrying a token, the session is populated (the user
    /// defaults to a profile with just the email when the server omits
    /// one) and the token is persisted. Any failure leaves both the
    /// session and the vault exactly as they were.
    pub async fn verify_otp(&mut self, email: &str, otp: &str) -> SessionResult<UserProfile> {
        let response = match self.api.verify_otp(email, otp).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "OTP verification failed");
                return Err(e);
            }
        };

        let Some(token) = response.token else {
            warn!("verification response carried no token");
            return Err(SessionError::Rejected);
        };

        let user = response
            .user
            .unwrap_or_else(|| UserProfile::with_email(email));

        self.persist(token, user)
    }

    /// Exchange a Google ID token for a session.
    ///
    /// Unlike the OTP path, the profile must come from the server; a token
    /// without one is treated as a rejection and mutates nothing.
    pub async fn google_login(&mut self, credential: &str) -> SessionResult<UserProfile> {
        let response = match self.api.google_login(credential).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Google login failed");
                return Err(e);
            }
        };

        let (Some(token), Some(user)) = (response.token, response.user) else {
            warn!("Google login response missing token or profile");
            return Err(SessionError::Rejected);
        };

        self.persist(token, user)
    }

    /// Clear the session, in memory and in the vault. Idempotent.
    pub fn logout(&mut self) {
        self.vault.clear_session();
        self.session = Session::default();
        info!("signed out");
    }

    /// Current authentication state.
    pub fn state(&self) -> AuthState {
        if self.session.token.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    /// Profile of the signed-in user, if any.
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.session.user.as_ref()
    }

    /// The session token, if any.
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Write the vault first, then memory: a failed persist must leave the
    /// previous state (both absent or both equal) observable.
    fn persist(&mut self, token: String, user: UserProfile) -> SessionResult<UserProfile> {
        let meta = SessionMeta::now(user.email.clone());
        self.vault.set_session(&token, &meta)?;

        self.session.token = Some(token);
        self.session.user = Some(user.clone());

        info!(email = user.email.as_deref().unwrap_or("<unknown>"), "signed in");
        Ok(user)
    }
}
