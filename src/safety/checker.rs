use crate::models::{MedicationEntry, Patient};

use super::keywords;
use super::messages::FindingMessages;
use super::profile::PatientProfile;
use super::types::SafetyVerdict;

/// Check a candidate medication list against a patient's medical profile.
///
/// Every medication is evaluated against every rule independently, with no
/// short-circuiting, so one medication can contribute several findings.
/// Finding order follows medication-list order, then rule order. The
/// function is total: no patient or an empty list yields a clear verdict,
/// and malformed free-text fields degrade to "no finding", never a panic.
pub fn check_safety(patient: Option<&Patient>, medications: &[MedicationEntry]) -> SafetyVerdict {
    let Some(patient) = patient else {
        return SafetyVerdict::clear();
    };
    if medications.is_empty() {
        return SafetyVerdict::clear();
    }

    let profile = PatientProfile::derive(patient);

    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for med in medications {
        let med_name = med.name.to_lowercase();

        // Pregnancy
        if profile.is_pregnant {
            if keywords::is_nsaid(&med_name) {
                errors.push(FindingMessages::pregnancy_nsaid(&med.name));
            }
            if keywords::is_teratogenic(&med_name) {
                errors.push(FindingMessages::pregnancy_teratogen(&med.name));
            }
        }

        // Allergies, including cross-allergy rules
        for allergy in &profile.allergies {
            if med_name.contains(allergy.as_str())
                || keywords::is_cross_allergy(&med_name, allergy)
            {
                errors.push(FindingMessages::allergy(&med.name, allergy));
            }
        }

        // Interactions with current medications
        for current_med in &profile.current_medications {
            if keywords::has_interaction(&med_name, current_med) {
                warnings.push(FindingMessages::interaction(&med.name, current_med));
            }
        }

        // Condition-specific monitoring
        if profile.has_condition("diabetes") && keywords::affects_blood_sugar(&med_name) {
            warnings.push(FindingMessages::monitor_blood_sugar(&med.name));
        }
        if profile.has_condition("hypertension") && keywords::affects_blood_pressure(&med_name) {
            warnings.push(FindingMessages::monitor_blood_pressure(&med.name));
        }
        if profile.has_condition("kidney") && keywords::is_nephrotoxic(&med_name) {
            warnings.push(FindingMessages::kidney_caution(&med.name));
        }
        if profile.has_condition("liver") && keywords::is_hepatotoxic(&med_name) {
            warnings.push(FindingMessages::liver_caution(&med.name));
        }

        // Bleeding risk on blood thinners; additive to the checks above
        if profile.on_blood_thinners() && keywords::is_nsaid(&med_name) {
            warnings.push(FindingMessages::bleeding_risk(&med.name));
        }
    }

    let verdict = SafetyVerdict::from_findings(warnings, errors);
    tracing::debug!(
        medications = medications.len(),
        errors = verdict.errors.len(),
        warnings = verdict.warnings.len(),
        "Safety check complete"
    );
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceCatalog;
    use crate::models::enums::ProtocolTier;

    fn patient_with(alerts: &str, history: &str, meds: &str) -> Patient {
        Patient {
            medical_alerts: alerts.into(),
            medical_history: history.into(),
            current_medications: meds.into(),
            ..Patient::new("Test Patient", "0300-0000000")
        }
    }

    fn meds(names: &[&str]) -> Vec<MedicationEntry> {
        names.iter().map(|name| MedicationEntry::named(*name)).collect()
    }

    #[test]
    fn no_patient_is_trivially_safe() {
        let verdict = check_safety(None, &meds(&["Ibuprofen"]));
        assert_eq!(verdict, SafetyVerdict::clear());
    }

    #[test]
    fn empty_medication_list_is_trivially_safe() {
        let patient = patient_with("penicillin allergy", "pregnant", "warfarin");
        let verdict = check_safety(Some(&patient), &[]);
        assert_eq!(verdict, SafetyVerdict::clear());
    }

    #[test]
    fn pregnancy_blocks_nsaid() {
        let patient = patient_with("", "patient is pregnant", "");
        let verdict = check_safety(Some(&patient), &meds(&["Ibuprofen"]));

        assert!(!verdict.safe);
        assert!(verdict.errors.iter().any(|e| e.contains("pregnancy")));
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn pregnancy_blocks_teratogen() {
        let patient = patient_with("pregnant", "", "");
        let verdict = check_safety(Some(&patient), &meds(&["Metronidazole"]));

        assert!(!verdict.safe);
        assert_eq!(
            verdict.errors,
            vec!["Metronidazole: CONTRAINDICATED in pregnancy"]
        );
    }

    #[test]
    fn penicillin_allergy_blocks_amoxicillin_cross_allergy() {
        let patient = patient_with("penicillin allergy", "", "");
        let verdict = check_safety(Some(&patient), &meds(&["Amoxicillin"]));

        assert!(!verdict.safe);
        assert_eq!(
            verdict.errors,
            vec!["Amoxicillin: Patient is ALLERGIC to penicillin"]
        );
    }

    #[test]
    fn direct_allergy_substring_blocks() {
        let patient = patient_with("allergic to codeine", "", "");
        let verdict = check_safety(Some(&patient), &meds(&["Codeine Phosphate"]));

        assert!(!verdict.safe);
        assert!(verdict.errors[0].contains("ALLERGIC to codeine"));
    }

    #[test]
    fn warfarin_interaction_warns_but_stays_safe() {
        let patient = patient_with("", "", "warfarin");
        let verdict = check_safety(Some(&patient), &meds(&["Metronidazole"]));

        assert!(verdict.safe);
        assert!(verdict.errors.is_empty());
        assert_eq!(
            verdict.warnings,
            vec!["Metronidazole: May interact with warfarin"]
        );
    }

    #[test]
    fn diabetic_on_prednisolone_gets_monitoring_warning() {
        let patient = patient_with("diabetes", "", "");
        let verdict = check_safety(Some(&patient), &meds(&["Prednisolone"]));

        assert!(verdict.safe);
        assert_eq!(
            verdict.warnings,
            vec!["Prednisolone: Monitor blood sugar (patient has diabetes)"]
        );
    }

    #[test]
    fn hypertensive_on_adrenaline_gets_monitoring_warning() {
        let patient = patient_with("hypertension", "", "");
        let verdict = check_safety(Some(&patient), &meds(&["Epinephrine"]));

        assert!(verdict.safe);
        assert!(verdict.warnings[0].contains("blood pressure"));
    }

    #[test]
    fn kidney_disease_cautions_nsaid() {
        let patient = patient_with("", "chronic kidney disease", "");
        let verdict = check_safety(Some(&patient), &meds(&["Brufen"]));

        assert!(verdict.safe);
        assert_eq!(
            verdict.warnings,
            vec!["Brufen: Use with caution (kidney disease)"]
        );
    }

    #[test]
    fn liver_disease_cautions_paracetamol() {
        let patient = patient_with("", "liver cirrhosis", "");
        let verdict = check_safety(Some(&patient), &meds(&["Paracetamol"]));

        assert!(verdict.safe);
        assert_eq!(
            verdict.warnings,
            vec!["Paracetamol: Use with caution (liver disease)"]
        );
    }

    #[test]
    fn blood_thinner_adds_bleeding_risk_for_nsaid() {
        let patient = patient_with("", "", "aspirin 75mg");
        let verdict = check_safety(Some(&patient), &meds(&["Voltaren"]));

        assert!(verdict.safe);
        assert_eq!(
            verdict.warnings,
            vec!["Voltaren: Increased bleeding risk (patient on blood thinners)"]
        );
    }

    #[test]
    fn one_medication_can_produce_multiple_findings() {
        // NSAID + ibuprofen allergy keywords both match, plus the bleeding
        // risk on warfarin: three findings from one candidate.
        let patient = patient_with("nsaid and ibuprofen allergy", "", "warfarin");
        let verdict = check_safety(Some(&patient), &meds(&["Ibuprofen"]));

        assert!(!verdict.safe);
        assert_eq!(verdict.errors.len(), 2);
        assert_eq!(
            verdict.warnings,
            vec!["Ibuprofen: Increased bleeding risk (patient on blood thinners)"]
        );
    }

    #[test]
    fn findings_preserve_medication_list_order() {
        let patient = patient_with("pregnant, penicillin allergy", "", "");
        let verdict = check_safety(
            Some(&patient),
            &meds(&["Ibuprofen", "Amoxicillin", "Flagyl"]),
        );

        // "Flagyl" does not substring-match the teratogen list (generic
        // names only), so it contributes no finding.
        assert_eq!(
            verdict.errors,
            vec![
                "Ibuprofen: NOT SAFE during pregnancy (NSAID)",
                "Amoxicillin: Patient is ALLERGIC to penicillin",
            ]
        );
        assert!(!verdict.safe);
    }

    #[test]
    fn blank_placeholder_rows_produce_no_findings() {
        let patient = patient_with("penicillin allergy, pregnant", "", "warfarin");
        let verdict = check_safety(Some(&patient), &meds(&[""]));

        assert!(verdict.safe);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn standard_pulpitis_protocol_is_clear_for_healthy_patient() {
        let catalog = ReferenceCatalog::bundled();
        let resolved = catalog.resolve_protocol("C002", &ProtocolTier::Standard);
        assert!(!resolved.medications.is_empty());

        let patient = patient_with("", "", "");
        let verdict = check_safety(Some(&patient), &resolved.medications);
        assert_eq!(verdict, SafetyVerdict::clear());
    }

    #[test]
    fn standard_pulpitis_protocol_blocks_for_pregnant_penicillin_allergic() {
        let catalog = ReferenceCatalog::bundled();
        let resolved = catalog.resolve_protocol("C002", &ProtocolTier::Standard);

        let patient = patient_with("pregnant, penicillin allergy", "", "");
        let verdict = check_safety(Some(&patient), &resolved.medications);

        // Amoxicillin trips the cross-allergy; Ibuprofen trips pregnancy.
        assert!(!verdict.safe);
        assert!(verdict.errors.len() >= 2);
    }
}
