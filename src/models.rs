//! Entity Models
//!
//! Row shapes as the client uses them. The authoritative schema lives in the
//! remote service; fields here are the subset the UI reads and writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Auth session, persisted in local storage between page loads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) after which the access token is stale
    pub expires_at: i64,
    pub user: User,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}

/// Signed-in user as returned by the auth service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form profile data stored alongside the auth record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl User {
    /// Name shown in the profile widget
    pub fn display_name(&self) -> &str {
        match self.user_metadata.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "My Account",
        }
    }

    /// Deterministic avatar image for the account
    pub fn avatar_url(&self) -> String {
        format!(
            "https://ui-avatars.com/api/?name={}&background=0b5ed7&color=fff&bold=true",
            urlencoding::encode(&self.email)
        )
    }
}

/// A tracked medication, listed newest-first.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Medication {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new medication.
#[derive(Debug, Serialize)]
pub struct NewMedication {
    pub user_id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// Update payload for an existing medication.
#[derive(Debug, Serialize)]
pub struct MedicationChanges {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// One "taken" event. Append-only; never updated or deleted by the client.
#[derive(Clone, Debug, Deserialize)]
pub struct MedicationLog {
    pub id: String,
    pub user_id: String,
    pub medication_id: String,
    pub status: String,
    pub taken_at: DateTime<Utc>,
}

/// Insert payload for marking a medication taken.
#[derive(Debug, Serialize)]
pub struct NewMedicationLog {
    pub user_id: String,
    pub medication_id: String,
    pub status: String,
    pub taken_at: DateTime<Utc>,
}

/// Insert payload for a vitals entry. All metrics are optional; the form
/// enforces that at least one primary metric is present before submitting.
#[derive(Clone, Debug, Serialize)]
pub struct NewHealthLog {
    pub user_id: String,
    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub heart_rate: Option<f64>,
    pub glucose: Option<f64>,
    pub weight: Option<f64>,
    pub glucose_context: String,
    pub notes: String,
    pub logged_at: DateTime<Utc>,
}

impl NewHealthLog {
    /// At least one of the four primary metrics must be present for the
    /// entry to be worth saving. Diastolic alone doesn't count.
    pub fn has_primary_metric(&self) -> bool {
        self.systolic_bp.is_some()
            || self.heart_rate.is_some()
            || self.glucose.is_some()
            || self.weight.is_some()
    }
}

/// A revocable doctor share link, keyed by its access code.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DoctorAccess {
    pub id: String,
    pub user_id: String,
    pub access_code: String,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DoctorAccess {
    /// Row label, defaulting when the code was generated without one
    pub fn label(&self) -> &str {
        match self.doctor_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Shared Link",
        }
    }

    /// Code masked to its last four characters for display
    pub fn masked_code(&self) -> String {
        let chars: Vec<char> = self.access_code.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("...{}", tail)
    }

    /// Full share URL a doctor would open
    pub fn share_url(&self, origin: &str) -> String {
        format!("{}/doctor/view?code={}", origin, self.access_code)
    }
}

/// Insert payload for a new share link.
#[derive(Debug, Serialize)]
pub struct NewDoctorAccess {
    pub user_id: String,
    pub access_code: String,
    pub doctor_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access(code: &str) -> DoctorAccess {
        DoctorAccess {
            id: "1".to_string(),
            user_id: "u".to_string(),
            access_code: code.to_string(),
            doctor_name: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_avatar_url_encodes_email() {
        let user = User {
            id: "u1".to_string(),
            email: "pat+test@example.com".to_string(),
            user_metadata: UserMetadata::default(),
        };
        let url = user.avatar_url();
        assert!(url.starts_with("https://ui-avatars.com/api/?name=pat%2Btest%40example.com"));
    }

    #[test]
    fn test_display_name_falls_back() {
        let mut user = User {
            id: "u1".to_string(),
            email: "pat@example.com".to_string(),
            user_metadata: UserMetadata::default(),
        };
        assert_eq!(user.display_name(), "My Account");

        user.user_metadata.full_name = Some("Pat Doe".to_string());
        assert_eq!(user.display_name(), "Pat Doe");
    }

    #[test]
    fn test_masked_code_shows_last_four() {
        assert_eq!(access("AbC123XyZ789").masked_code(), "...Z789");
    }

    #[test]
    fn test_share_url() {
        assert_eq!(
            access("AbC123XyZ789").share_url("https://vitaltrack.app"),
            "https://vitaltrack.app/doctor/view?code=AbC123XyZ789"
        );
    }

    #[test]
    fn test_label_defaults_when_empty() {
        let mut row = access("AbC123XyZ789");
        assert_eq!(row.label(), "Shared Link");
        row.doctor_name = Some("Dr. Chen".to_string());
        assert_eq!(row.label(), "Dr. Chen");
    }

    #[test]
    fn test_has_primary_metric() {
        let mut log = NewHealthLog {
            user_id: "u".to_string(),
            systolic_bp: None,
            diastolic_bp: Some(80.0),
            heart_rate: None,
            glucose: None,
            weight: None,
            glucose_context: String::new(),
            notes: String::new(),
            logged_at: Utc::now(),
        };
        // Diastolic alone is not a primary metric
        assert!(!log.has_primary_metric());

        log.weight = Some(72.5);
        assert!(log.has_primary_metric());
    }

    #[test]
    fn test_session_expiry() {
        let user = User {
            id: "u1".to_string(),
            email: String::new(),
            user_metadata: UserMetadata::default(),
        };
        let mut session = Session {
            access_token: "t".to_string(),
            refresh_token: "r".to_string(),
            expires_at: Utc::now().timestamp() + 3600,
            user,
        };
        assert!(!session.is_expired());

        session.expires_at = Utc::now().timestamp() - 1;
        assert!(session.is_expired());
    }
}
