//! Row API Client
//!
//! Filtered select / insert / update / delete against the service's
//! row-oriented endpoints, one route per collection. Filters use the
//! `column=op.value` convention (`eq`, `gte`, `order=col.desc`); every
//! request carries the API key and the session's bearer token, so the
//! service enforces per-user row visibility on top of the client's own
//! `user_id` filter.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{self, auth, error_message};

/// Collection names
pub const MEDICATIONS: &str = "medications";
pub const MEDICATION_LOGS: &str = "medication_logs";
pub const HEALTH_LOGS: &str = "health_logs";
pub const DOCTOR_ACCESS: &str = "doctor_access";

/// Build a collection URL with encoded query parameters.
pub fn table_url(base: &str, table: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}/rest/v1/{}", base, table);
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

fn authed(request: RequestBuilder) -> Result<RequestBuilder, String> {
    let session = auth::load_session().ok_or_else(|| "Not signed in".to_string())?;
    Ok(request
        .header("apikey", &api::get_service_key())
        .header("Authorization", &format!("Bearer {}", session.access_token)))
}

/// Fetch all rows matching the given filters.
pub async fn select<T: DeserializeOwned>(
    table: &str,
    params: &[(&str, String)],
) -> Result<Vec<T>, String> {
    let url = table_url(&api::get_service_url(), table, params);

    let response = authed(Request::get(&url))?
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

/// Insert a single row.
pub async fn insert<B: Serialize>(table: &str, row: &B) -> Result<(), String> {
    let url = table_url(&api::get_service_url(), table, &[]);

    let response = authed(Request::post(&url))?
        .header("Prefer", "return=minimal")
        .json(row)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Update the row with the given id.
pub async fn update_by_id<B: Serialize>(table: &str, id: &str, changes: &B) -> Result<(), String> {
    let url = table_url(
        &api::get_service_url(),
        table,
        &[("id", format!("eq.{}", id))],
    );

    let response = authed(Request::patch(&url))?
        .header("Prefer", "return=minimal")
        .json(changes)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Delete the row with the given id.
pub async fn delete_by_id(table: &str, id: &str) -> Result<(), String> {
    let url = table_url(
        &api::get_service_url(),
        table,
        &[("id", format!("eq.{}", id))],
    );

    let response = authed(Request::delete(&url))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_without_params() {
        assert_eq!(
            table_url("http://localhost:54321", MEDICATIONS, &[]),
            "http://localhost:54321/rest/v1/medications"
        );
    }

    #[test]
    fn test_table_url_with_filters() {
        let url = table_url(
            "https://svc.example.com",
            MEDICATIONS,
            &[
                ("select", "*".to_string()),
                ("user_id", "eq.abc-123".to_string()),
                ("order", "created_at.desc".to_string()),
            ],
        );
        // Values are percent-encoded; the service decodes them on arrival
        assert_eq!(
            url,
            "https://svc.example.com/rest/v1/medications?select=%2A&user_id=eq.abc-123&order=created_at.desc"
        );
    }

    #[test]
    fn test_table_url_encodes_timestamps() {
        let url = table_url(
            "https://svc.example.com",
            MEDICATION_LOGS,
            &[("taken_at", "gte.2026-08-06T00:00:00+00:00".to_string())],
        );
        assert_eq!(
            url,
            "https://svc.example.com/rest/v1/medication_logs?taken_at=gte.2026-08-06T00%3A00%3A00%2B00%3A00"
        );
    }
}
