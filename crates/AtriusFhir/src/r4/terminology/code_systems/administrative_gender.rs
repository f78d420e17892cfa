// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: AdministrativeGender
/// Canonical URL: http://hl7.org/fhir/administrative-gender
/// Version: 4.0.1
/// Title: AdministrativeGender
/// Status: active
///
/// The gender of a person used for administrative purposes.
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
pub enum AdministrativeGender {
    /// Display: Male
    /// Definition: Male.
    #[serde(rename = "male")]
    Male,
    /// Display: Female
    /// Definition: Female.
    #[serde(rename = "female")]
    Female,
    /// Display: Other
    /// Definition: Other.
    #[serde(rename = "other")]
    Other,
    /// Display: Unknown
    /// Definition: Unknown.
    #[serde(rename = "unknown")]
    Unknown,
}
impl AdministrativeGender {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: AdministrativeGender::Male,
            code: "male",
            display: "Male",
            definition: Some("Male."),
        },
        Concept {
            value: AdministrativeGender::Female,
            code: "female",
            display: "Female",
            definition: Some("Female."),
        },
        Concept {
            value: AdministrativeGender::Other,
            code: "other",
            display: "Other",
            definition: Some("Other."),
        },
        Concept {
            value: AdministrativeGender::Unknown,
            code: "unknown",
            display: "Unknown",
            definition: Some("Unknown."),
        },
    ];
}
impl CodeSystem for AdministrativeGender {
    const URL: &'static str = "http://hl7.org/fhir/administrative-gender";
    const NAME: &'static str = "AdministrativeGender";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            AdministrativeGender::Male => "male",
            AdministrativeGender::Female => "female",
            AdministrativeGender::Other => "other",
            AdministrativeGender::Unknown => "unknown",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "male" => Ok(AdministrativeGender::Male),
            "female" => Ok(AdministrativeGender::Female),
            "other" => Ok(AdministrativeGender::Other),
            "unknown" => Ok(AdministrativeGender::Unknown),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for AdministrativeGender {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for AdministrativeGender {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for AdministrativeGender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
