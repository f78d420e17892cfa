// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: StructureMapInputMode
/// Canonical URL: http://hl7.org/fhir/map-input-mode
/// Version: 4.0.1
/// Title: StructureMapInputMode
/// Status: active
///
/// Mode for this instance of data.
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
pub enum StructureMapInputMode {
    /// Display: Source Instance
    /// Definition: Names an input instance used a source for mapping.
    #[serde(rename = "source")]
    Source,
    /// Display: Target Instance
    /// Definition: Names an instance that is being populated.
    #[serde(rename = "target")]
    Target,
}
impl StructureMapInputMode {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: StructureMapInputMode::Source,
            code: "source",
            display: "Source Instance",
            definition: Some("Names an input instance used a source for mapping."),
        },
        Concept {
            value: StructureMapInputMode::Target,
            code: "target",
            display: "Target Instance",
            definition: Some("Names an instance that is being populated."),
        },
    ];
}
impl CodeSystem for StructureMapInputMode {
    const URL: &'static str = "http://hl7.org/fhir/map-input-mode";
    const NAME: &'static str = "StructureMapInputMode";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            StructureMapInputMode::Source => "source",
            StructureMapInputMode::Target => "target",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "source" => Ok(StructureMapInputMode::Source),
            "target" => Ok(StructureMapInputMode::Target),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for StructureMapInputMode {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for StructureMapInputMode {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for StructureMapInputMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
