//! Remote Service Client
//!
//! Functions for communicating with the hosted backend: an auth API
//! (sign-up, sign-in, session, user updates) and a row-oriented data API
//! (filtered select, insert, update-by-id, delete-by-id per collection).
//! Every call returns `Result<T, String>`: a result/error pair, never a
//! panic.

pub mod auth;
pub mod rest;

/// Default service base URL
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:54321";

const SERVICE_URL_KEY: &str = "vitaltrack_service_url";
const SERVICE_KEY_KEY: &str = "vitaltrack_service_key";

/// Get the service base URL from local storage or use the default
pub fn get_service_url() -> String {
    let url = storage_get(SERVICE_URL_KEY).unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the service base URL in local storage
pub fn set_service_url(url: &str) {
    storage_set(SERVICE_URL_KEY, url);
}

/// Get the publishable API key from local storage
pub fn get_service_key() -> String {
    storage_get(SERVICE_KEY_KEY).unwrap_or_default()
}

/// Set the publishable API key in local storage
pub fn set_service_key(key: &str) {
    storage_set(SERVICE_KEY_KEY, key);
}

pub(crate) fn storage_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

pub(crate) fn storage_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub(crate) fn storage_remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Error body as the service reports it. The auth and row APIs use
/// different field names, so all the observed shapes are accepted.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceError {
    pub fn into_message(self) -> String {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// Decode an error response body, falling back to the HTTP status.
pub(crate) async fn error_message(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.json::<ServiceError>().await {
        Ok(err) => err.into_message(),
        Err(_) => format!("Request failed with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_prefers_message() {
        let err: ServiceError =
            serde_json::from_str(r#"{"message":"row violates policy","code":"42501"}"#).unwrap();
        assert_eq!(err.into_message(), "row violates policy");
    }

    #[test]
    fn test_service_error_auth_shapes() {
        let err: ServiceError =
            serde_json::from_str(r#"{"error_description":"Invalid login credentials"}"#).unwrap();
        assert_eq!(err.into_message(), "Invalid login credentials");

        let err: ServiceError = serde_json::from_str(r#"{"msg":"Signup requires email"}"#).unwrap();
        assert_eq!(err.into_message(), "Signup requires email");
    }

    #[test]
    fn test_service_error_fallback() {
        let err: ServiceError = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(err.into_message(), "Unknown error");
    }
}
