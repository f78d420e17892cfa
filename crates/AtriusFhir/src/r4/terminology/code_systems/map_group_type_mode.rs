// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: StructureMapGroupTypeMode
/// Canonical URL: http://hl7.org/fhir/map-group-type-mode
/// Version: 4.0.1
/// Title: StructureMapGroupTypeMode
/// Status: active
///
/// If this is the default rule set to apply for the source type, or this combination of types.
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
pub enum StructureMapGroupTypeMode {
    /// Display: Not a Default
    /// Definition: This group is not a default group for the types.
    #[serde(rename = "none")]
    None,
    /// Display: Default for Type Combination
    /// Definition: This group is a default mapping group for the specified types and for the primary source type.
    #[serde(rename = "types")]
    Types,
    /// Display: Default for type + combination
    /// Definition: This group is a default mapping group for the specified types.
    #[serde(rename = "type-and-types")]
    TypeAndTypes,
}
impl StructureMapGroupTypeMode {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: StructureMapGroupTypeMode::None,
            code: "none",
            display: "Not a Default",
            definition: Some("This group is not a default group for the types."),
        },
        Concept {
            value: StructureMapGroupTypeMode::Types,
            code: "types",
            display: "Default for Type Combination",
            definition: Some(
                "This group is a default mapping group for the specified types and for the primary source type.",
            ),
        },
        Concept {
            value: StructureMapGroupTypeMode::TypeAndTypes,
            code: "type-and-types",
            display: "Default for type + combination",
            definition: Some(
                "This group is a default mapping group for the specified types.",
            ),
        },
    ];
}
impl CodeSystem for StructureMapGroupTypeMode {
    const URL: &'static str = "http://hl7.org/fhir/map-group-type-mode";
    const NAME: &'static str = "StructureMapGroupTypeMode";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            StructureMapGroupTypeMode::None => "none",
            StructureMapGroupTypeMode::Types => "types",
            StructureMapGroupTypeMode::TypeAndTypes => "type-and-types",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "none" => Ok(StructureMapGroupTypeMode::None),
            "types" => Ok(StructureMapGroupTypeMode::Types),
            "type-and-types" => Ok(StructureMapGroupTypeMode::TypeAndTypes),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for StructureMapGroupTypeMode {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for StructureMapGroupTypeMode {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for StructureMapGroupTypeMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
