//! Bundled reference data: conditions, formulary, treatment protocols, and
//! the clinic price list. Loaded once from JSON shipped with the binary and
//! treated as read-only for the life of the process.

pub mod types;

pub use types::*;

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use thiserror::Error;

use crate::models::enums::ProtocolTier;

const CONDITIONS_JSON: &str = include_str!("../../resources/catalog/conditions.json");
const CATEGORIES_JSON: &str = include_str!("../../resources/catalog/categories.json");
const MEDICATIONS_JSON: &str = include_str!("../../resources/catalog/medications.json");
const PROTOCOLS_JSON: &str = include_str!("../../resources/catalog/protocols.json");
const TREATMENTS_JSON: &str = include_str!("../../resources/catalog/treatments.json");

/// Dosage shorthand used on printed prescriptions.
pub const DOSAGE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("OD", "Once daily"),
    ("BD", "Twice daily"),
    ("TDS", "Three times daily"),
    ("QDS", "Four times daily"),
    ("PRN", "As needed"),
    ("HS", "At bedtime"),
    ("AC", "Before meals"),
    ("PC", "After meals"),
];

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Reference data parse failed ({0}): {1}")]
    Parse(&'static str, String),
}

/// Loaded reference data for protocol resolution and catalog display.
pub struct ReferenceCatalog {
    conditions: Vec<Condition>,
    /// Display/filtering index, category name → condition ids. Maintained
    /// independently of each condition's own `category` field and may drift
    /// from it (e.g. an id listed under two groups). Never reconciled.
    condition_categories: BTreeMap<String, Vec<String>>,
    medications: MedicationCatalog,
    protocols: HashMap<String, ConditionProtocol>,
    treatments: Vec<Treatment>,
}

static BUNDLED: LazyLock<ReferenceCatalog> = LazyLock::new(|| {
    ReferenceCatalog::load_bundled().expect("bundled catalog JSON is valid")
});

impl ReferenceCatalog {
    /// Parse the bundled JSON tables.
    pub fn load_bundled() -> Result<Self, CatalogError> {
        let conditions: Vec<Condition> = serde_json::from_str(CONDITIONS_JSON)
            .map_err(|e| CatalogError::Parse("conditions.json", e.to_string()))?;
        let condition_categories: BTreeMap<String, Vec<String>> =
            serde_json::from_str(CATEGORIES_JSON)
                .map_err(|e| CatalogError::Parse("categories.json", e.to_string()))?;
        let medications: MedicationCatalog = serde_json::from_str(MEDICATIONS_JSON)
            .map_err(|e| CatalogError::Parse("medications.json", e.to_string()))?;
        let protocols: HashMap<String, ConditionProtocol> =
            serde_json::from_str(PROTOCOLS_JSON)
                .map_err(|e| CatalogError::Parse("protocols.json", e.to_string()))?;
        let treatments: Vec<Treatment> = serde_json::from_str(TREATMENTS_JSON)
            .map_err(|e| CatalogError::Parse("treatments.json", e.to_string()))?;

        Ok(Self {
            conditions,
            condition_categories,
            medications,
            protocols,
            treatments,
        })
    }

    /// Process-wide catalog instance.
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    // ── Conditions ──────────────────────────────────────────

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn condition(&self, id: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// The display grouping index. Display-only; see the field note on drift.
    pub fn categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.condition_categories
    }

    /// Conditions listed under a category group, in index order.
    /// Ids present in the index but missing from the condition list are
    /// skipped rather than treated as an error.
    pub fn conditions_in_category(&self, category: &str) -> Vec<&Condition> {
        self.condition_categories
            .get(category)
            .map(|ids| ids.iter().filter_map(|id| self.condition(id)).collect())
            .unwrap_or_default()
    }

    // ── Protocol resolution ─────────────────────────────────

    /// Resolve the recommended medication bundle for a condition and tier.
    ///
    /// Total function: an unknown condition id or a missing tier yields an
    /// empty medication list and empty instructions, never an error. The
    /// returned entries are the caller's to edit; resolving again (e.g. on
    /// a tier switch) produces a fresh bundle that replaces, not merges.
    pub fn resolve_protocol(&self, condition_id: &str, tier: &ProtocolTier) -> ResolvedProtocol {
        let Some(protocol) = self.protocols.get(condition_id) else {
            return ResolvedProtocol::default();
        };
        let tier_protocol = match tier {
            ProtocolTier::Basic => &protocol.basic,
            ProtocolTier::Standard => &protocol.standard,
            ProtocolTier::Premium => &protocol.premium,
        };
        match tier_protocol {
            Some(t) => ResolvedProtocol {
                medications: t.medications.clone(),
                instructions: t.instructions.clone(),
            },
            None => ResolvedProtocol::default(),
        }
    }

    // ── Formulary ───────────────────────────────────────────

    pub fn medications(&self) -> &MedicationCatalog {
        &self.medications
    }

    /// Case-insensitive lookup by generic or brand name.
    pub fn find_medication(&self, name: &str) -> Option<&CatalogMedication> {
        let lower = name.to_lowercase();
        self.medications.all().find(|m| {
            m.generic_name.to_lowercase() == lower
                || m.brand_name.to_lowercase().contains(&lower)
        })
    }

    /// All formulary entries of a drug class (case-insensitive).
    pub fn medications_in_class(&self, drug_class: &str) -> Vec<&CatalogMedication> {
        let lower = drug_class.to_lowercase();
        self.medications
            .all()
            .filter(|m| m.drug_class.to_lowercase() == lower)
            .collect()
    }

    // ── Treatments ──────────────────────────────────────────

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    pub fn treatment(&self, code: &str) -> Option<&Treatment> {
        self.treatments.iter().find(|t| t.code == code)
    }
}

/// Expand a dosage abbreviation ("TDS" → "Three times daily").
pub fn expand_abbreviation(abbrev: &str) -> Option<&'static str> {
    DOSAGE_ABBREVIATIONS
        .iter()
        .find(|(short, _)| abbrev.eq_ignore_ascii_case(short))
        .map(|(_, long)| *long)
}
