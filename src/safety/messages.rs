/// Message templates for safety findings. One finding per line in the UI;
/// the medication name keeps its original casing from the form.
pub struct FindingMessages;

impl FindingMessages {
    /// Blocking: NSAID prescribed to a pregnant patient.
    pub fn pregnancy_nsaid(medication: &str) -> String {
        format!("{medication}: NOT SAFE during pregnancy (NSAID)")
    }

    /// Blocking: known teratogen prescribed to a pregnant patient.
    pub fn pregnancy_teratogen(medication: &str) -> String {
        format!("{medication}: CONTRAINDICATED in pregnancy")
    }

    /// Blocking: medication matches a recorded allergy or cross-allergy.
    pub fn allergy(medication: &str, allergen: &str) -> String {
        format!("{medication}: Patient is ALLERGIC to {allergen}")
    }

    /// Advisory: interaction with a current medication.
    pub fn interaction(medication: &str, current_med: &str) -> String {
        format!("{medication}: May interact with {current_med}")
    }

    /// Advisory: glycaemic effect for a diabetic patient.
    pub fn monitor_blood_sugar(medication: &str) -> String {
        format!("{medication}: Monitor blood sugar (patient has diabetes)")
    }

    /// Advisory: pressor effect for a hypertensive patient.
    pub fn monitor_blood_pressure(medication: &str) -> String {
        format!("{medication}: Monitor blood pressure (patient has hypertension)")
    }

    /// Advisory: nephrotoxic medication with kidney disease on record.
    pub fn kidney_caution(medication: &str) -> String {
        format!("{medication}: Use with caution (kidney disease)")
    }

    /// Advisory: hepatotoxic medication with liver disease on record.
    pub fn liver_caution(medication: &str) -> String {
        format!("{medication}: Use with caution (liver disease)")
    }

    /// Advisory: NSAID for a patient on blood thinners.
    pub fn bleeding_risk(medication: &str) -> String {
        format!("{medication}: Increased bleeding risk (patient on blood thinners)")
    }
}
