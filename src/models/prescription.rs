use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ProtocolTier;

/// One line on a prescription: a drug plus its dosing directions.
///
/// `duration` may be empty where a protocol leaves it to the prescriber;
/// callers apply their own fallback via [`MedicationEntry::or_default_duration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub duration: String,
}

impl MedicationEntry {
    /// Entry carrying only a drug name (ad-hoc addition from the form).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dosage: String::new(),
            frequency: String::new(),
            duration: String::new(),
        }
    }

    /// Blank placeholder row appended by the form's "add medication" action.
    pub fn placeholder() -> Self {
        Self::named("")
    }

    /// Fill an empty duration with the caller's default.
    pub fn or_default_duration(mut self, fallback: &str) -> Self {
        if self.duration.is_empty() {
            self.duration = fallback.to_string();
        }
        self
    }
}

/// Medication input as it arrives from forms: either a bare drug name or a
/// full entry. Normalized to [`MedicationEntry`] immediately on ingestion so
/// everything downstream handles one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MedicationInput {
    Entry(MedicationEntry),
    Name(String),
}

impl From<MedicationInput> for MedicationEntry {
    fn from(input: MedicationInput) -> Self {
        match input {
            MedicationInput::Entry(entry) => entry,
            MedicationInput::Name(name) => MedicationEntry::named(name),
        }
    }
}

/// Normalize a mixed-form medication list to structured entries.
pub fn normalize_medications(inputs: Vec<MedicationInput>) -> Vec<MedicationEntry> {
    inputs.into_iter().map(MedicationEntry::from).collect()
}

/// A persisted prescription: the resolved (and possibly hand-edited)
/// medication list for one patient and condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub condition_id: String,
    pub tier: ProtocolTier,
    pub medications: Vec<MedicationEntry>,
    pub instructions: String,
    pub prescribed_at: DateTime<Utc>,
}
