//! Session engine for the Campus console.
//!
//! This crate provides:
//! - A typed client for the backend's auth endpoints (OTP + Google login)
//! - The session store owning the in-memory session and its durable mirror
//! - Presence-based authentication state

mod api;
mod error;
mod session;

pub use api::{AuthApi, OtpRequested, UserProfile, VerifyResponse};
pub use error::{SessionError, SessionResult};
pub use session::{AuthState, Session, SessionStore};
