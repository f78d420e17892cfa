// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: NarrativeStatus
/// Canonical URL: http://hl7.org/fhir/narrative-status
/// Version: 4.0.1
/// Title: NarrativeStatus
/// Status: active
///
/// The status of a resource narrative.
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
pub enum NarrativeStatus {
    /// Display: Generated
    /// Definition: The contents of the narrative are entirely generated from the core elements in the content.
    #[serde(rename = "generated")]
    Generated,
    /// Display: Extensions
    /// Definition: The contents of the narrative are entirely generated from the core elements in the content and some of the content is generated from extensions.
    #[serde(rename = "extensions")]
    Extensions,
    /// Display: Additional
    /// Definition: The contents of the narrative may contain additional information not found in the structured data.
    #[serde(rename = "additional")]
    Additional,
    /// Display: Empty
    /// Definition: The contents of the narrative are some equivalent of "No human-readable text provided in this case".
    #[serde(rename = "empty")]
    Empty,
}
impl NarrativeStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: NarrativeStatus::Generated,
            code: "generated",
            display: "Generated",
            definition: Some(
                "The contents of the narrative are entirely generated from the core elements in the content.",
            ),
        },
        Concept {
            value: NarrativeStatus::Extensions,
            code: "extensions",
            display: "Extensions",
            definition: Some(
                "The contents of the narrative are entirely generated from the core elements in the content and some of the content is generated from extensions.",
            ),
        },
        Concept {
            value: NarrativeStatus::Additional,
            code: "additional",
            display: "Additional",
            definition: Some(
                "The contents of the narrative may contain additional information not found in the structured data.",
            ),
        },
        Concept {
            value: NarrativeStatus::Empty,
            code: "empty",
            display: "Empty",
            definition: Some(
                "The contents of the narrative are some equivalent of \"No human-readable text provided in this case\".",
            ),
        },
    ];
}
impl CodeSystem for NarrativeStatus {
    const URL: &'static str = "http://hl7.org/fhir/narrative-status";
    const NAME: &'static str = "NarrativeStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            NarrativeStatus::Generated => "generated",
            NarrativeStatus::Extensions => "extensions",
            NarrativeStatus::Additional => "additional",
            NarrativeStatus::Empty => "empty",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "generated" => Ok(NarrativeStatus::Generated),
            "extensions" => Ok(NarrativeStatus::Extensions),
            "additional" => Ok(NarrativeStatus::Additional),
            "empty" => Ok(NarrativeStatus::Empty),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for NarrativeStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for NarrativeStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for NarrativeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
