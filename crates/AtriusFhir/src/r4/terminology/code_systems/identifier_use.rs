// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: IdentifierUse
/// Canonical URL: http://hl7.org/fhir/identifier-use
/// Version: 4.0.1
/// Title: IdentifierUse
/// Status: active
///
/// Identifies the purpose for this identifier, if known.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize
)]
pub enum IdentifierUse {
    /// Display: Usual
    /// Definition: The identifier recommended for display and use in real-world interactions.
    #[serde(rename = "usual")]
    Usual,
    /// Display: Official
    /// Definition: The identifier considered to be most trusted for the identification of this item.
    #[serde(rename = "official")]
    Official,
    /// Display: Temp
    /// Definition: A temporary identifier.
    #[serde(rename = "temp")]
    Temp,
    /// Display: Secondary
    /// Definition: An identifier that was assigned in secondary use - it serves to identify the object in a relative context, but cannot be consistently assigned to the same object again in a different context.
    #[serde(rename = "secondary")]
    Secondary,
    /// Display: Old
    /// Definition: The identifier id no longer considered valid, but may be relevant for search purposes.
    #[serde(rename = "old")]
    Old,
}
impl IdentifierUse {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: IdentifierUse::Usual,
            code: "usual",
            display: "Usual",
            definition: Some(
                "The identifier recommended for display and use in real-world interactions.",
            ),
        },
        Concept {
            value: IdentifierUse::Official,
            code: "official",
            display: "Official",
            definition: Some(
                "The identifier considered to be most trusted for the identification of this item.",
            ),
        },
        Concept {
            value: IdentifierUse::Temp,
            code: "temp",
            display: "Temp",
            definition: Some("A temporary identifier."),
        },
        Concept {
            value: IdentifierUse::Secondary,
            code: "secondary",
            display: "Secondary",
            definition: Some(
                "An identifier that was assigned in secondary use - it serves to identify the object in a relative context, but cannot be consistently assigned to the same object again in a different context.",
            ),
        },
        Concept {
            value: IdentifierUse::Old,
            code: "old",
            display: "Old",
            definition: Some(
                "The identifier id no longer considered valid, but may be relevant for search purposes.",
            ),
        },
    ];
}
impl CodeSystem for IdentifierUse {
    const URL: &'static str = "http://hl7.org/fhir/identifier-use";
    const NAME: &'static str = "IdentifierUse";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            IdentifierUse::Usual => "usual",
            IdentifierUse::Official => "official",
            IdentifierUse::Temp => "temp",
            IdentifierUse::Secondary => "secondary",
            IdentifierUse::Old => "old",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "usual" => Ok(IdentifierUse::Usual),
            "official" => Ok(IdentifierUse::Official),
            "temp" => Ok(IdentifierUse::Temp),
            "secondary" => Ok(IdentifierUse::Secondary),
            "old" => Ok(IdentifierUse::Old),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for IdentifierUse {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for IdentifierUse {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for IdentifierUse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
