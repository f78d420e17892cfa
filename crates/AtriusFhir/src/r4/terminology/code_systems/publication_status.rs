// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: PublicationStatus
/// Canonical URL: http://hl7.org/fhir/publication-status
/// Version: 4.0.1
/// Title: PublicationStatus
/// Status: active
///
/// The lifecycle status of an artifact.
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
pub enum PublicationStatus {
    /// Display: Draft
    /// Definition: This resource is still under development and is not yet considered to be ready for normal use.
    #[serde(rename = "draft")]
    Draft,
    /// Display: Active
    /// Definition: This resource is ready for normal use.
    #[serde(rename = "active")]
    Active,
    /// Display: Retired
    /// Definition: This resource has been withdrawn or superseded and should no longer be used.
    #[serde(rename = "retired")]
    Retired,
    /// Display: Unknown
    /// Definition: The authoring system does not know which of the status values currently applies for this resource.
    #[serde(rename = "unknown")]
    Unknown,
}
impl PublicationStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: PublicationStatus::Draft,
            code: "draft",
            display: "Draft",
            definition: Some(
                "This resource is still under development and is not yet considered to be ready for normal use.",
            ),
        },
        Concept {
            value: PublicationStatus::Active,
            code: "active",
            display: "Active",
            definition: Some("This resource is ready for normal use."),
        },
        Concept {
            value: PublicationStatus::Retired,
            code: "retired",
            display: "Retired",
            definition: Some(
                "This resource has been withdrawn or superseded and should no longer be used.",
            ),
        },
        Concept {
            value: PublicationStatus::Unknown,
            code: "unknown",
            display: "Unknown",
            definition: Some(
                "The authoring system does not know which of the status values currently applies for this resource.",
            ),
        },
    ];
}
impl CodeSystem for PublicationStatus {
    const URL: &'static str = "http://hl7.org/fhir/publication-status";
    const NAME: &'static str = "PublicationStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            PublicationStatus::Draft => "draft",
            PublicationStatus::Active => "active",
            PublicationStatus::Retired => "retired",
            PublicationStatus::Unknown => "unknown",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "draft" => Ok(PublicationStatus::Draft),
            "active" => Ok(PublicationStatus::Active),
            "retired" => Ok(PublicationStatus::Retired),
            "unknown" => Ok(PublicationStatus::Unknown),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for PublicationStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for PublicationStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
