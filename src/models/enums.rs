use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde representation uses the same string as the database form.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ProtocolTier {
    Basic => "basic",
    Standard => "standard",
    Premium => "premium",
});

str_enum!(ConditionSeverity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
    Prophylactic => "prophylactic",
});

str_enum!(PregnancySafety {
    Safe => "Safe",
    Avoid => "Avoid",
    AvoidFirstTrimester => "Avoid in 1st trimester",
    NotApplicable => "N/A",
});

str_enum!(RateProvenance {
    Auto => "auto",
    Manual => "manual",
});
