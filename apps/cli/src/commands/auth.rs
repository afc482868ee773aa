//! Authentication commands.

use super::{session_store, token_vault};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use session_engine::AuthState;
use std::io::{self, Write};

/// Login with email, password, and an emailed one-time code.
pub async fn login(format: &OutputFormat) -> Result<()> {
    let mut store = session_store()?;

    if store.state() == AuthState::Authenticated {
        let email = store
            .current_user()
            .and_then(|u| u.email.as_deref())
            .unwrap_or("unknown");
        output::print_success(&format!("Already logged in as {}", email), format);
        return Ok(());
    }

    // Prompt for email
    print!("Email: ");
    io::stdout().flush()?;
    let mut email = String::new();
    io::stdin().read_line(&mut email)?;
    let email = email.trim().to_string();

    if email.is_empty() {
        output::print_error("Email is required", format);
        return Ok(());
    }

    // Prompt for password (hidden)
    let password = rpassword::prompt_password("Password: ")?;

    if password.is_empty() {
        output::print_error("Password is required", format);
        return Ok(());
    }

    println!("Requesting login code...");

    match store.request_otp(&email, &password).await {
        Ok(payload) => match payload.message {
            Some(message) => println!("{}", message),
            None => println!("A login code was sent to {}", email),
        },
        Err(e) => {
            output::print_error(&format!("Login failed: {}", e), format);
            return Ok(());
        }
    }

    // Prompt for the emailed code
    print!("Code: ");
    io::stdout().flush()?;
    let mut code = String::new();
    io::stdin().read_line(&mut code)?;
    let code = code.trim().to_string();

    if code.is_empty() {
        output::print_error("Code is required", format);
        return Ok(());
    }

    match store.verify_otp(&email, &code).await {
        Ok(user) => {
            let email_display = user.email.as_deref().unwrap_or("user");
            output::print_success(&format!("Logged in as {}", email_display), format);
        }
        Err(e) => {
            output::print_error(&format!("Login failed: {}", e), format);
        }
    }

    Ok(())
}

/// Login with a Google ID token.
pub async fn login_google(id_token: &str, format: &OutputFormat) -> Result<()> {
    let mut store = session_store()?;

    if store.state() == AuthState::Authenticated {
        let email = store
            .current_user()
            .and_then(|u| u.email.as_deref())
            .unwrap_or("unknown");
        output::print_success(&format!("Already logged in as {}", email), format);
        return Ok(());
    }

    match store.google_login(id_token).await {
        Ok(user) => {
            let email_display = user.email.as_deref().unwrap_or("user");
            output::print_success(&format!("Logged in as {}", email_display), format);
        }
        Err(e) => {
            output::print_error(&format!("Google login failed: {}", e), format);
        }
    }

    Ok(())
}

/// Logout and clear the stored session.
pub fn logout(format: &OutputFormat) -> Result<()> {
    let mut store = session_store()?;
    store.logout();
    output::print_success("Logged out", format);
    Ok(())
}

/// Show authentication status. Reads only local state, no network call.
pub fn status(format: &OutputFormat) -> Result<()> {
    let vault = token_vault()?;
    let logged_in = vault.has_token()?;
    let meta = vault.get_session_meta()?;

    match format {
        OutputFormat::Text => {
            if logged_in {
                println!("Auth:     logged in");
                if let Some(meta) = &meta {
                    if let Some(email) = &meta.email {
                        output::print_row("Email", email);
                    }
                    output::print_row("Since", &meta.signed_in_at);
                }
            } else {
                println!("Auth:     not logged in");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "logged_in": logged_in,
                "email": meta.as_ref().and_then(|m| m.email.clone()),
                "signed_in_at": meta.as_ref().map(|m| m.signed_in_at.clone()),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
