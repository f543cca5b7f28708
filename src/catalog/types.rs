use serde::{Deserialize, Serialize};

use crate::models::enums::{ConditionSeverity, PregnancySafety};
use crate::models::MedicationEntry;

/// A diagnosable dental condition from the bundled reference list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub name: String,
    /// Display category on the condition itself. Independently maintained
    /// from the category grouping index; the two can drift.
    pub category: String,
    pub description: String,
    pub common_symptoms: Vec<String>,
    pub severity: ConditionSeverity,
}

/// A reference entry in the medication formulary. Informational only;
/// safety checking works from its own keyword tables, not from this data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMedication {
    pub id: String,
    pub generic_name: String,
    pub brand_name: String,
    pub dosage_form: String,
    pub strengths: Vec<String>,
    pub common_dosage: String,
    pub duration: String,
    pub contraindications: Vec<String>,
    pub pregnancy: PregnancySafety,
    #[serde(rename = "class")]
    pub drug_class: String,
}

/// The formulary, grouped by drug class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationCatalog {
    pub antibiotics: Vec<CatalogMedication>,
    pub analgesics: Vec<CatalogMedication>,
    pub antifungals: Vec<CatalogMedication>,
    pub antihistamines: Vec<CatalogMedication>,
    pub gastroprotection: Vec<CatalogMedication>,
    pub mouthwashes: Vec<CatalogMedication>,
    pub topical_gels: Vec<CatalogMedication>,
    pub vitamins: Vec<CatalogMedication>,
    pub pediatric: Vec<CatalogMedication>,
}

impl MedicationCatalog {
    /// Iterate over every entry regardless of class grouping.
    pub fn all(&self) -> impl Iterator<Item = &CatalogMedication> {
        self.antibiotics
            .iter()
            .chain(&self.analgesics)
            .chain(&self.antifungals)
            .chain(&self.antihistamines)
            .chain(&self.gastroprotection)
            .chain(&self.mouthwashes)
            .chain(&self.topical_gels)
            .chain(&self.vitamins)
            .chain(&self.pediatric)
    }
}

/// One tier of a treatment protocol: recommended medications + instructions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierProtocol {
    pub medications: Vec<MedicationEntry>,
    #[serde(default)]
    pub instructions: String,
}

/// Tiered protocol bundle for a single condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionProtocol {
    pub basic: Option<TierProtocol>,
    pub standard: Option<TierProtocol>,
    pub premium: Option<TierProtocol>,
}

/// Result of protocol resolution. Empty for unknown conditions or tiers;
/// resolution is total and never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedProtocol {
    pub medications: Vec<MedicationEntry>,
    pub instructions: String,
}

/// A priced clinic treatment. `price_usd` is authoritative; rupee prices
/// are always derived through the currency service at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub code: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub price_usd: f64,
    pub fdi_notation: String,
}
