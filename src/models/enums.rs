//! Fixed enumerations for requirement classification and verification.
//!
//! Both enums deserialize from the service's response strings with
//! case-insensitive matching; anything outside the enumeration is a
//! schema violation, not silently coerced.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Requirement classification per R29/R42, plus the error sentinel used
/// for terminal-per-item failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementType {
    Functional,
    Performance,
    Interface,
    Safety,
    Security,
    /// Sentinel carried by the single output row of a failed item.
    Error,
}

impl RequirementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::Performance => "Performance",
            Self::Interface => "Interface",
            Self::Safety => "Safety",
            Self::Security => "Security",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown requirement-type or verification-method string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("not in the fixed enumeration: {0:?}")]
pub struct UnknownVariant(pub String);

impl FromStr for RequirementType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "functional" => Ok(Self::Functional),
            "performance" => Ok(Self::Performance),
            "interface" => Ok(Self::Interface),
            "safety" => Ok(Self::Safety),
            "security" => Ok(Self::Security),
            "error" => Ok(Self::Error),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl Serialize for RequirementType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequirementType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// How a requirement's satisfaction is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMethod {
    Test,
    Inspection,
    Analysis,
    Demonstration,
    /// Rendered "N/A" — carried by error-sentinel requirements.
    NotApplicable,
}

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "Test",
            Self::Inspection => "Inspection",
            Self::Analysis => "Analysis",
            Self::Demonstration => "Demonstration",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "test" => Ok(Self::Test),
            "inspection" => Ok(Self::Inspection),
            "analysis" => Ok(Self::Analysis),
            "demonstration" => Ok(Self::Demonstration),
            "n/a" | "na" | "not applicable" => Ok(Self::NotApplicable),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl Serialize for VerificationMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VerificationMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_type_parses_case_insensitively() {
        assert_eq!(
            "Functional".parse::<RequirementType>().unwrap(),
            RequirementType::Functional
        );
        assert_eq!(
            "PERFORMANCE".parse::<RequirementType>().unwrap(),
            RequirementType::Performance
        );
        assert_eq!(
            " safety ".parse::<RequirementType>().unwrap(),
            RequirementType::Safety
        );
    }

    #[test]
    fn unknown_requirement_type_rejected() {
        assert!("usability".parse::<RequirementType>().is_err());
        assert!("".parse::<RequirementType>().is_err());
    }

    #[test]
    fn error_sentinel_renders_uppercase() {
        assert_eq!(RequirementType::Error.to_string(), "ERROR");
        assert_eq!("error".parse::<RequirementType>().unwrap(), RequirementType::Error);
    }

    #[test]
    fn verification_method_variants() {
        assert_eq!(
            "Test".parse::<VerificationMethod>().unwrap(),
            VerificationMethod::Test
        );
        assert_eq!(
            "demonstration".parse::<VerificationMethod>().unwrap(),
            VerificationMethod::Demonstration
        );
        assert_eq!(
            "N/A".parse::<VerificationMethod>().unwrap(),
            VerificationMethod::NotApplicable
        );
        assert!("guesswork".parse::<VerificationMethod>().is_err());
    }

    #[test]
    fn not_applicable_renders_na() {
        assert_eq!(VerificationMethod::NotApplicable.to_string(), "N/A");
    }

    #[test]
    fn serde_round_trip_via_strings() {
        let json = serde_json::to_string(&RequirementType::Interface).unwrap();
        assert_eq!(json, "\"Interface\"");
        let back: RequirementType = serde_json::from_str("\"interface\"").unwrap();
        assert_eq!(back, RequirementType::Interface);

        let json = serde_json::to_string(&VerificationMethod::NotApplicable).unwrap();
        assert_eq!(json, "\"N/A\"");
        let back: VerificationMethod = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(back, VerificationMethod::NotApplicable);
    }

    #[test]
    fn schema_violation_surfaces_through_serde() {
        let result: Result<RequirementType, _> = serde_json::from_str("\"usability\"");
        assert!(result.is_err());
    }
}
