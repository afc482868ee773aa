//! Typed client for the backend's auth endpoints.
//!
//! Endpoints (relative to the configured API base URL):
//! - `POST /auth/login` — request an OTP for email + password
//! - `POST /auth/verify-otp` — exchange the emailed code for a token
//! - `POST /auth/google-login` — exchange a Google ID token for a token

use crate::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Client-wide request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the auth endpoints.
#[derive(Clone)]
pub struct AuthApi {
    http_client: reqwest::Client,
    api_url: String,
}

/// User profile as returned by the backend.
///
/// Only `email` is relied upon; the rest is carried for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// User email
    #[serde(default)]
    pub email: Option<String>,
    /// Backend user id
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Role label (e.g. platform admin, school admin)
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// Build a minimal profile carrying only an email.
    pub fn with_email(email: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            id: None,
            name: None,
            role: None,
        }
    }
}

/// Response to an OTP request.
///
/// The backend owns this schema; everything beyond the two convenience
/// fields is kept verbatim in `extra` and passed through to the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct OtpRequested {
    /// Whether the code was dispatched
    #[serde(default)]
    pub sent: Option<bool>,
    /// Human-readable note from the server
    #[serde(default)]
    pub message: Option<String>,
    /// Remaining payload, untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response to a credential verification (OTP or Google).
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    /// Session token; absence means the credentials were not accepted
    #[serde(default)]
    pub token: Option<String>,
    /// Profile of the signed-in user
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpRequest<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Debug, Serialize)]
struct GoogleLoginRequest<'a> {
    credential: &'a str,
}

impl AuthApi {
    /// Create a new client for the given API base URL.
    pub fn new(api_url: impl Into<String>) -> SessionResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the full URL for an auth endpoint.
    fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/{}", self.api_url, endpoint)
    }

    /// Request an OTP for the given credentials.
    ///
    /// The response payload is opaque to this client and returned as-is.
    pub async fn request_otp(&self, email: &str, password: &str) -> SessionResult<OtpRequested> {
        let url = self.auth_url("login");
        debug!(%email, "requesting OTP");

        let response = self
            .http_client
            .post(&url)
            .json(&OtpRequest { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(%status, "OTP request failed");
            return Err(SessionError::Api { status });
        }

        Ok(response.json().await?)
    }

    /// Exchange an emailed OTP code for a session token.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> SessionResult<VerifyResponse> {
        let url = self.auth_url("verify-otp");
        debug!(%email, "verifying OTP");

        let response = self
            .http_client
            .post(&url)
            .json(&VerifyOtpRequest { email, otp })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(%status, "OTP verification failed");
            return Err(SessionError::Api { status });
        }

        Ok(response.json().await?)
    }

    /// Exchange a Google ID token for a session token.
    pub async fn google_login(&self, credential: &str) -> SessionResult<VerifyResponse> {
        let url = self.auth_url("google-login");
        debug!("exchanging Google credential");

        let response = self
            .http_client
            .post(&url)
            .json(&GoogleLoginRequest { credential })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(%status, "Google login failed");
            return Err(SessionError::Api { status });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[test]
    fn test_auth_url_shape() {
        let api = AuthApi::new("https://api.example.test").unwrap();
        assert_eq!(
            api.auth_url("verify-otp"),
            "https://api.example.test/auth/verify-otp"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = AuthApi::new("https://api.example.test/").unwrap();
        assert_eq!(api.auth_url("login"), "https://api.example.test/auth/login");
    }

    #[test]
    fn test_user_profile_with_email() {
        let profile = UserProfile::with_email("a@b.com");
        assert_eq!(profile.email.as_deref(), Some("a@b.com"));
        assert!(profile.id.is_none());
        assert!(profile.role.is_none());
    }

    #[test]
    fn test_verify_response_tolerates_missing_fields() {
        let parsed: VerifyResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.token.is_none());
        assert!(parsed.user.is_none());
    }

    #[tokio::test]
    async fn test_request_otp_passes_payload_through() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({
                "email": "a@b.com",
                "password": "pw"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sent": true,
                "expires_in": 300
            })))
            .mount(&server)
            .await;

        let api = AuthApi::new(server.uri()).unwrap();
        let result = api.request_otp("a@b.com", "pw").await.unwrap();

        assert_eq!(result.sent, Some(true));
        assert_eq!(result.extra.get("expires_in"), Some(&json!(300)));
    }

    #[tokio::test]
    async fn test_request_otp_non_success_is_api_error() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = AuthApi::new(server.uri()).unwrap();
        let err = api.request_otp("a@b.com", "wrong").await.unwrap_err();

        assert!(matches!(
            err,
            SessionError::Api {
                status: reqwest::StatusCode::UNAUTHORIZED
            }
        ));
    }

    #[tokio::test]
    async fn test_verify_otp_deserializes_token_and_user() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/verify-otp"))
            .and(body_json(json!({
                "email": "a@b.com",
                "otp": "123456"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "T1",
                "user": { "email": "a@b.com", "role": "platform-admin" }
            })))
            .mount(&server)
            .await;

        let api = AuthApi::new(server.uri()).unwrap();
        let result = api.verify_otp("a@b.com", "123456").await.unwrap();

        assert_eq!(result.token.as_deref(), Some("T1"));
        let user = result.user.unwrap();
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(user.role.as_deref(), Some("platform-admin"));
    }

    #[tokio::test]
    async fn test_google_login_sends_credential_payload() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/google-login"))
            .and(body_json(json!({ "credential": "google-jwt" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "T2",
                "user": { "email": "g@b.com" }
            })))
            .mount(&server)
            .await;

        let api = AuthApi::new(server.uri()).unwrap();
        let result = api.google_login("google-jwt").await.unwrap();

        assert_eq!(result.token.as_deref(), Some("T2"));
        assert_eq!(result.user.unwrap().email.as_deref(), Some("g@b.com"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 1 is reserved and nothing listens there.
        let api = AuthApi::new("http://127.0.0.1:1").unwrap();
        let err = api.request_otp("a@b.com", "pw").await.unwrap_err();

        assert!(matches!(err, SessionError::Transport(_)));
    }
}
