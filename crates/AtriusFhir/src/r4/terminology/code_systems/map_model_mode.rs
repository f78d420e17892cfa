// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: StructureMapModelMode
/// Canonical URL: http://hl7.org/fhir/map-model-mode
/// Version: 4.0.1
/// Title: StructureMapModelMode
/// Status: active
///
/// How the referenced structure is used in this mapping.
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
pub enum StructureMapModelMode {
    /// Display: Source Structure Definition
    /// Definition: This structure describes an instance passed to the mapping engine that is used a source of data.
    #[serde(rename = "source")]
    Source,
    /// Display: Queried Structure Definition
    /// Definition: This structure describes an instance that the mapping engine may ask for that is used a source of data.
    #[serde(rename = "queried")]
    Queried,
    /// Display: Target Structure Definition
    /// Definition: This structure describes an instance passed to the mapping engine that is used a target of data.
    #[serde(rename = "target")]
    Target,
    /// Display: Produced Structure Definition
    /// Definition: This structure describes an instance that the mapping engine may ask to create that is used a target of data.
    #[serde(rename = "produced")]
    Produced,
}
impl StructureMapModelMode {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: StructureMapModelMode::Source,
            code: "source",
            display: "Source Structure Definition",
            definition: Some(
                "This structure describes an instance passed to the mapping engine that is used a source of data.",
            ),
        },
        Concept {
            value: StructureMapModelMode::Queried,
            code: "queried",
            display: "Queried Structure Definition",
            definition: Some(
                "This structure describes an instance that the mapping engine may ask for that is used a source of data.",
            ),
        },
        Concept {
            value: StructureMapModelMode::Target,
            code: "target",
            display: "Target Structure Definition",
            definition: Some(
                "This structure describes an instance passed to the mapping engine that is used a target of data.",
            ),
        },
        Concept {
            value: StructureMapModelMode::Produced,
            code: "produced",
            display: "Produced Structure Definition",
            definition: Some(
                "This structure describes an instance that the mapping engine may ask to create that is used a target of data.",
            ),
        },
    ];
}
impl CodeSystem for StructureMapModelMode {
    const URL: &'static str = "http://hl7.org/fhir/map-model-mode";
    const NAME: &'static str = "StructureMapModelMode";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            StructureMapModelMode::Source => "source",
            StructureMapModelMode::Queried => "queried",
            StructureMapModelMode::Target => "target",
            StructureMapModelMode::Produced => "produced",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "source" => Ok(StructureMapModelMode::Source),
            "queried" => Ok(StructureMapModelMode::Queried),
            "target" => Ok(StructureMapModelMode::Target),
            "produced" => Ok(StructureMapModelMode::Produced),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for StructureMapModelMode {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for StructureMapModelMode {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for StructureMapModelMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
