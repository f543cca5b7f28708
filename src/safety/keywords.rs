//! Fixed keyword tables for the safety rules.
//!
//! These lists are deliberately small and embedded in code rather than
//! data-driven; they mirror the clinic's dental formulary, not a full
//! pharmacological database. All matching is case-insensitive substring
//! matching over free-text fields; callers pass lower-cased names.

/// Allergens recognized in patient alert/history text.
pub(crate) const ALLERGY_KEYWORDS: &[&str] = &[
    "penicillin",
    "amoxicillin",
    "sulfa",
    "nsaid",
    "ibuprofen",
    "aspirin",
    "codeine",
    "latex",
];

/// Chronic conditions recognized in patient alert/history text.
pub(crate) const CONDITION_KEYWORDS: &[&str] = &[
    "diabetes",
    "hypertension",
    "kidney",
    "liver",
    "heart",
    "asthma",
];

/// NSAID-class drug names (generic and local brands).
const NSAIDS: &[&str] = &[
    "ibuprofen",
    "brufen",
    "diclofenac",
    "voltaren",
    "naproxen",
    "ponstan",
    "mefenamic",
];

/// Drugs contraindicated in pregnancy beyond the NSAID class.
const TERATOGENIC: &[&str] = &["metronidazole", "tetracycline", "doxycycline"];

/// Key drug → substances it interacts with (checked against the patient's
/// current-medication list). Common dental interactions only.
const INTERACTIONS: &[(&str, &[&str])] = &[
    ("metronidazole", &["warfarin", "alcohol"]),
    ("erythromycin", &["warfarin", "theophylline"]),
    ("azithromycin", &["warfarin"]),
];

/// Penicillin-family names blocked for penicillin-allergic patients.
const PENICILLIN_FAMILY: &[&str] = &["amoxicillin", "augmentin", "ampicillin"];

/// Current medications that mark the patient as on blood thinners.
const BLOOD_THINNERS: &[&str] = &["warfarin", "aspirin"];

pub(crate) fn is_nsaid(med_name: &str) -> bool {
    NSAIDS.iter().any(|nsaid| med_name.contains(nsaid))
}

pub(crate) fn is_teratogenic(med_name: &str) -> bool {
    TERATOGENIC.iter().any(|drug| med_name.contains(drug))
}

/// Cross-allergy rules: an allergy to one substance implies risk from a
/// related class. Penicillin allergy blocks the penicillin family;
/// NSAID or ibuprofen allergy blocks the whole NSAID class.
pub(crate) fn is_cross_allergy(med_name: &str, allergy: &str) -> bool {
    if allergy.contains("penicillin") {
        return PENICILLIN_FAMILY.iter().any(|drug| med_name.contains(drug));
    }
    if allergy.contains("nsaid") || allergy.contains("ibuprofen") {
        return is_nsaid(med_name);
    }
    false
}

/// Does the candidate interact with one of the patient's current medications?
pub(crate) fn has_interaction(med_name: &str, current_med: &str) -> bool {
    INTERACTIONS.iter().any(|(drug, interacts_with)| {
        med_name.contains(drug) && interacts_with.iter().any(|i| current_med.contains(i))
    })
}

pub(crate) fn affects_blood_sugar(med_name: &str) -> bool {
    med_name.contains("steroid") || med_name.contains("prednisolone")
}

pub(crate) fn affects_blood_pressure(med_name: &str) -> bool {
    med_name.contains("epinephrine") || med_name.contains("adrenaline")
}

pub(crate) fn is_nephrotoxic(med_name: &str) -> bool {
    is_nsaid(med_name) || med_name.contains("aminoglycoside")
}

pub(crate) fn is_hepatotoxic(med_name: &str) -> bool {
    med_name.contains("paracetamol") || med_name.contains("acetaminophen")
}

pub(crate) fn is_blood_thinner(current_med: &str) -> bool {
    BLOOD_THINNERS.iter().any(|drug| current_med.contains(drug))
}
