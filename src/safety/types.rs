use serde::{Deserialize, Serialize};

/// Outcome of checking a candidate medication list against a patient's
/// derived medical profile.
///
/// `errors` are blocking findings (the UI must stop submission);
/// `warnings` are advisory and never affect `safe`. The verdict is a
/// transient computed value: recomputed on every medication-list or
/// patient change, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub safe: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl SafetyVerdict {
    /// Verdict with no findings: nothing to check, or nothing found.
    pub fn clear() -> Self {
        Self {
            safe: true,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Build a verdict from accumulated findings. `safe` is derived:
    /// true iff there are no blocking errors.
    pub(crate) fn from_findings(warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            safe: errors.is_empty(),
            warnings,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_verdict_is_safe_and_empty() {
        let verdict = SafetyVerdict::clear();
        assert!(verdict.safe);
        assert!(verdict.warnings.is_empty());
        assert!(verdict.errors.is_empty());
    }

    #[test]
    fn safe_follows_errors_not_warnings() {
        let warned = SafetyVerdict::from_findings(vec!["watch this".into()], vec![]);
        assert!(warned.safe);

        let blocked = SafetyVerdict::from_findings(vec![], vec!["stop".into()]);
        assert!(!blocked.safe);
    }
}
