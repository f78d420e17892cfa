// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: ImagingStudyStatus
/// Canonical URL: http://hl7.org/fhir/imagingstudy-status
/// Version: 4.0.1
/// Title: ImagingStudyStatus
/// Status: active
///
/// The status of the ImagingStudy.
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
pub enum ImagingStudyStatus {
    /// Display: Registered
    /// Definition: The existence of the imaging study is registered, but there is nothing yet available.
    #[serde(rename = "registered")]
    Registered,
    /// Display: Available
    /// Definition: At least one instance has been associated with this imaging study.
    #[serde(rename = "available")]
    Available,
    /// Display: Cancelled
    /// Definition: The imaging study is unavailable because the imaging study was not started or not completed.
    #[serde(rename = "cancelled")]
    Cancelled,
    /// Display: Entered in Error
    /// Definition: The imaging study has been withdrawn following a previous final release.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    /// Display: Unknown
    /// Definition: The system does not know which of the status values currently applies for this request.
    #[serde(rename = "unknown")]
    Unknown,
}
impl ImagingStudyStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: ImagingStudyStatus::Registered,
            code: "registered",
            display: "Registered",
            definition: Some(
                "The existence of the imaging study is registered, but there is nothing yet available.",
            ),
        },
        Concept {
            value: ImagingStudyStatus::Available,
            code: "available",
            display: "Available",
            definition: Some(
                "At least one instance has been associated with this imaging study.",
            ),
        },
        Concept {
            value: ImagingStudyStatus::Cancelled,
            code: "cancelled",
            display: "Cancelled",
            definition: Some(
                "The imaging study is unavailable because the imaging study was not started or not completed.",
            ),
        },
        Concept {
            value: ImagingStudyStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered in Error",
            definition: Some(
                "The imaging study has been withdrawn following a previous final release.",
            ),
        },
        Concept {
            value: ImagingStudyStatus::Unknown,
            code: "unknown",
            display: "Unknown",
            definition: Some(
                "The system does not know which of the status values currently applies for this request.",
            ),
        },
    ];
}
impl CodeSystem for ImagingStudyStatus {
    const URL: &'static str = "http://hl7.org/fhir/imagingstudy-status";
    const NAME: &'static str = "ImagingStudyStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            ImagingStudyStatus::Registered => "registered",
            ImagingStudyStatus::Available => "available",
            ImagingStudyStatus::Cancelled => "cancelled",
            ImagingStudyStatus::EnteredInError => "entered-in-error",
            ImagingStudyStatus::Unknown => "unknown",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "registered" => Ok(ImagingStudyStatus::Registered),
            "available" => Ok(ImagingStudyStatus::Available),
            "cancelled" => Ok(ImagingStudyStatus::Cancelled),
            "entered-in-error" => Ok(ImagingStudyStatus::EnteredInError),
            "unknown" => Ok(ImagingStudyStatus::Unknown),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for ImagingStudyStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for ImagingStudyStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for ImagingStudyStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
