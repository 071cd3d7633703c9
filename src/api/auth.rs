//! Auth API
//!
//! Sign-up, sign-in, session persistence, and account updates against the
//! service's auth endpoints. The session is kept in local storage and
//! refreshed through the token endpoint when the access token has expired.

use chrono::Utc;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::api::{self, error_message};
use crate::models::{Session, User, UserMetadata};

const SESSION_KEY: &str = "vitaltrack_session";

fn auth_url(path: &str) -> String {
    format!("{}/auth/v1/{}", api::get_service_url(), path)
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self
            .expires_at
            .unwrap_or_else(|| Utc::now().timestamp() + self.expires_in.unwrap_or(3600));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Create an account. The service sends a verification email; no session
/// exists until the address is confirmed and the user signs in.
pub async fn sign_up(email: &str, password: &str) -> Result<(), String> {
    let response = Request::post(&auth_url("signup"))
        .header("apikey", &api::get_service_key())
        .json(&Credentials { email, password })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Sign in with email and password, storing the session on success.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    let url = format!("{}?grant_type=password", auth_url("token"));

    let response = Request::post(&url)
        .header("apikey", &api::get_service_key())
        .json(&Credentials { email, password })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    let session = token.into_session();
    store_session(&session);
    Ok(session)
}

/// Session currently held in local storage, refreshed when stale.
/// `Ok(None)` means "not signed in"; `Err` is a failed refresh attempt.
pub async fn current_session() -> Result<Option<Session>, String> {
    let Some(stored) = load_session() else {
        return Ok(None);
    };

    if !stored.is_expired() {
        return Ok(Some(stored));
    }

    refresh(&stored.refresh_token).await.map(Some)
}

async fn refresh(refresh_token: &str) -> Result<Session, String> {
    #[derive(Serialize)]
    struct RefreshRequest<'a> {
        refresh_token: &'a str,
    }

    let url = format!("{}?grant_type=refresh_token", auth_url("token"));

    let response = Request::post(&url)
        .header("apikey", &api::get_service_key())
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        // The stored session is unusable either way
        clear_session();
        return Err(error_message(response).await);
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    let session = token.into_session();
    store_session(&session);
    Ok(session)
}

/// Tear down the remote session. The local copy is cleared regardless of
/// what the service says.
pub async fn sign_out() -> Result<(), String> {
    let session = load_session();
    clear_session();

    if let Some(session) = session {
        let response = Request::post(&auth_url("logout"))
            .header("apikey", &api::get_service_key())
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
    }

    Ok(())
}

/// Update the signed-in user's display name.
pub async fn update_profile(full_name: &str) -> Result<User, String> {
    #[derive(Serialize)]
    struct UpdateMetadata {
        data: UserMetadata,
    }

    let user = update_user(&UpdateMetadata {
        data: UserMetadata {
            full_name: Some(full_name.to_string()),
        },
    })
    .await?;

    // Keep the stored session's user in step with the service
    if let Some(mut session) = load_session() {
        session.user = user.clone();
        store_session(&session);
    }

    Ok(user)
}

/// Update the signed-in user's password.
pub async fn update_password(new_password: &str) -> Result<(), String> {
    #[derive(Serialize)]
    struct UpdatePassword<'a> {
        password: &'a str,
    }

    update_user(&UpdatePassword {
        password: new_password,
    })
    .await?;

    Ok(())
}

async fn update_user<B: Serialize>(body: &B) -> Result<User, String> {
    let session = load_session().ok_or_else(|| "Not signed in".to_string())?;

    let response = Request::put(&auth_url("user"))
        .header("apikey", &api::get_service_key())
        .header("Authorization", &format!("Bearer {}", session.access_token))
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Session as last stored, without any expiry handling.
pub(crate) fn load_session() -> Option<Session> {
    let raw = api::storage_get(SESSION_KEY)?;
    serde_json::from_str(&raw).ok()
}

fn store_session(session: &Session) {
    if let Ok(raw) = serde_json::to_string(session) {
        api::storage_set(SESSION_KEY, &raw);
    }
}

fn clear_session() {
    api::storage_remove(SESSION_KEY);
}
