// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: StructureMapTargetListMode
/// Canonical URL: http://hl7.org/fhir/map-target-list-mode
/// Version: 4.0.1
/// Title: StructureMapTargetListMode
/// Status: active
///
/// If field is a list, how to manage the production.
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
pub enum StructureMapTargetListMode {
    /// Display: First
    /// Definition: when the target list is being assembled, the items for this rule go first. If more than one rule defines a first item (for a given instance of mapping) then this is an error.
    #[serde(rename = "first")]
    First,
    /// Display: Share
    /// Definition: the target instance is shared with the target instances generated by another rule (up to the first common n items, then create new ones).
    #[serde(rename = "share")]
    Share,
    /// Display: Last
    /// Definition: when the target list is being assembled, the items for this rule go last. If more than one rule defines a last item (for a given instance of mapping) then this is an error.
    #[serde(rename = "last")]
    Last,
    /// Display: Collate
    /// Definition: re-use the first item in the list, and keep adding content to it.
    #[serde(rename = "collate")]
    Collate,
}
impl StructureMapTargetListMode {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: StructureMapTargetListMode::First,
            code: "first",
            display: "First",
            definition: Some(
                "when the target list is being assembled, the items for this rule go first. If more than one rule defines a first item (for a given instance of mapping) then this is an error.",
            ),
        },
        Concept {
            value: StructureMapTargetListMode::Share,
            code: "share",
            display: "Share",
            definition: Some(
                "the target instance is shared with the target instances generated by another rule (up to the first common n items, then create new ones).",
            ),
        },
        Concept {
            value: StructureMapTargetListMode::Last,
            code: "last",
            display: "Last",
            definition: Some(
                "when the target list is being assembled, the items for this rule go last. If more than one rule defines a last item (for a given instance of mapping) then this is an error.",
            ),
        },
        Concept {
            value: StructureMapTargetListMode::Collate,
            code: "collate",
            display: "Collate",
            definition: Some(
                "re-use the first item in the list, and keep adding content to it.",
            ),
        },
    ];
}
impl CodeSystem for StructureMapTargetListMode {
    const URL: &'static str = "http://hl7.org/fhir/map-target-list-mode";
    const NAME: &'static str = "StructureMapTargetListMode";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            StructureMapTargetListMode::First => "first",
            StructureMapTargetListMode::Share => "share",
            StructureMapTargetListMode::Last => "last",
            StructureMapTargetListMode::Collate => "collate",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "first" => Ok(StructureMapTargetListMode::First),
            "share" => Ok(StructureMapTargetListMode::Share),
            "last" => Ok(StructureMapTargetListMode::Last),
            "collate" => Ok(StructureMapTargetListMode::Collate),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for StructureMapTargetListMode {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for StructureMapTargetListMode {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for StructureMapTargetListMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
