use std::sync::LazyLock;

use regex::Regex;

use crate::models::Patient;

use super::keywords::{ALLERGY_KEYWORDS, CONDITION_KEYWORDS};

/// Separators accepted in the free-text current-medication field.
static MED_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;\n]").unwrap());

/// Facts derived from a patient's free-text medical fields.
///
/// Derivation is case-insensitive substring matching against fixed keyword
/// sets. False positives are an accepted tradeoff of free-text input
/// ("non-pregnant" contains "pregnant") and are preserved deliberately;
/// structured codes would change observable behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientProfile {
    pub is_pregnant: bool,
    /// Matched allergy keywords, in keyword-table order.
    pub allergies: Vec<String>,
    /// Matched condition keywords, in keyword-table order.
    pub conditions: Vec<String>,
    /// Current medications, lower-cased and trimmed; entries shorter than
    /// 3 characters are discarded as noise.
    pub current_medications: Vec<String>,
}

impl PatientProfile {
    pub fn derive(patient: &Patient) -> Self {
        let text = format!("{} {}", patient.medical_alerts, patient.medical_history)
            .to_lowercase();

        let is_pregnant = text.contains("pregnant");

        let allergies = ALLERGY_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect();

        let conditions = CONDITION_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect();

        let meds_text = patient.current_medications.to_lowercase();
        let current_medications = MED_SEPARATORS
            .split(&meds_text)
            .map(str::trim)
            .filter(|entry| entry.len() > 2)
            .map(str::to_string)
            .collect();

        Self {
            is_pregnant,
            allergies,
            conditions,
            current_medications,
        }
    }

    pub fn has_condition(&self, keyword: &str) -> bool {
        self.conditions.iter().any(|c| c == keyword)
    }

    /// Is any current medication a blood thinner?
    pub fn on_blood_thinners(&self) -> bool {
        self.current_medications
            .iter()
            .any(|med| super::keywords::is_blood_thinner(med))
    }
}
