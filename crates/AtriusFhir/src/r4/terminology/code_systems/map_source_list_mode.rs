// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: StructureMapSourceListMode
/// Canonical URL: http://hl7.org/fhir/map-source-list-mode
/// Version: 4.0.1
/// Title: StructureMapSourceListMode
/// Status: active
///
/// If field is a list, how to manage the source.
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
pub enum StructureMapSourceListMode {
    /// Display: First
    /// Definition: Only process this rule for the first in the list.
    #[serde(rename = "first")]
    First,
    /// Display: All but the first
    /// Definition: Process this rule for all but the first.
    #[serde(rename = "not_first")]
    NotFirst,
    /// Display: Last
    /// Definition: Only process this rule for the last in the list.
    #[serde(rename = "last")]
    Last,
    /// Display: All but the last
    /// Definition: Process this rule for all but the last.
    #[serde(rename = "not_last")]
    NotLast,
    /// Display: Enforce only one
    /// Definition: Only process this rule is there is only item.
    #[serde(rename = "only_one")]
    OnlyOne,
}
impl StructureMapSourceListMode {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: StructureMapSourceListMode::First,
            code: "first",
            display: "First",
            definition: Some("Only process this rule for the first in the list."),
        },
        Concept {
            value: StructureMapSourceListMode::NotFirst,
            code: "not_first",
            display: "All but the first",
            definition: Some("Process this rule for all but the first."),
        },
        Concept {
            value: StructureMapSourceListMode::Last,
            code: "last",
            display: "Last",
            definition: Some("Only process this rule for the last in the list."),
        },
        Concept {
            value: StructureMapSourceListMode::NotLast,
            code: "not_last",
            display: "All but the last",
            definition: Some("Process this rule for all but the last."),
        },
        Concept {
            value: StructureMapSourceListMode::OnlyOne,
            code: "only_one",
            display: "Enforce only one",
            definition: Some("Only process this rule is there is only item."),
        },
    ];
}
impl CodeSystem for StructureMapSourceListMode {
    const URL: &'static str = "http://hl7.org/fhir/map-source-list-mode";
    const NAME: &'static str = "StructureMapSourceListMode";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            StructureMapSourceListMode::First => "first",
            StructureMapSourceListMode::NotFirst => "not_first",
            StructureMapSourceListMode::Last => "last",
            StructureMapSourceListMode::NotLast => "not_last",
            StructureMapSourceListMode::OnlyOne => "only_one",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "first" => Ok(StructureMapSourceListMode::First),
            "not_first" => Ok(StructureMapSourceListMode::NotFirst),
            "last" => Ok(StructureMapSourceListMode::Last),
            "not_last" => Ok(StructureMapSourceListMode::NotLast),
            "only_one" => Ok(StructureMapSourceListMode::OnlyOne),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for StructureMapSourceListMode {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for StructureMapSourceListMode {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for StructureMapSourceListMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
