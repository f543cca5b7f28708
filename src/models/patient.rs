use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered patient of the clinic.
///
/// The three medical text fields are unstructured free text entered at the
/// front desk. Allergy, pregnancy, and chronic-condition flags are derived
/// from them by case-insensitive substring matching, never from structured
/// codes, so they are treated as untrusted input everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub mobile_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    /// Free text, e.g. "penicillin allergy, pregnant (2nd trimester)".
    pub medical_alerts: String,
    /// Free text clinical history.
    pub medical_history: String,
    /// Free text, comma/semicolon/newline separated drug names.
    pub current_medications: String,
    pub registration_date: DateTime<Utc>,
}

impl Patient {
    /// Minimal record for a walk-in registration; medical fields start empty.
    pub fn new(name: impl Into<String>, mobile_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mobile_number: mobile_number.into(),
            date_of_birth: None,
            gender: None,
            address: None,
            medical_alerts: String::new(),
            medical_history: String::new(),
            current_medications: String::new(),
            registration_date: Utc::now(),
        }
    }
}
