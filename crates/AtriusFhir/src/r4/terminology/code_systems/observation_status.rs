// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: ObservationStatus
/// Canonical URL: http://hl7.org/fhir/observation-status
/// Version: 4.0.1
/// Title: ObservationStatus
/// Status: active
///
/// Codes providing the status of an observation.
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
pub enum ObservationStatus {
    /// Display: Registered
    /// Definition: The existence of the observation is registered, but there is no result yet available.
    #[serde(rename = "registered")]
    Registered,
    /// Display: Preliminary
    /// Definition: This is an initial or interim observation: data may be incomplete or unverified.
    #[serde(rename = "preliminary")]
    Preliminary,
    /// Display: Final
    /// Definition: The observation is complete and there are no further actions needed.
    #[serde(rename = "final")]
    Final,
    /// Display: Amended
    /// Definition: Subsequent to being Final, the observation has been modified subsequent. This includes updates/new information and corrections.
    #[serde(rename = "amended")]
    Amended,
    /// Display: Corrected
    /// Definition: Subsequent to being Final, the observation has been modified to correct an error in the test result.
    #[serde(rename = "corrected")]
    Corrected,
    /// Display: Cancelled
    /// Definition: The observation is unavailable because the measurement was not started or not completed (also sometimes called "aborted").
    #[serde(rename = "cancelled")]
    Cancelled,
    /// Display: Entered in Error
    /// Definition: The observation has been withdrawn following previous final release.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    /// Display: Unknown
    /// Definition: The authoring/source system does not know which of the status values currently applies for this observation.
    #[serde(rename = "unknown")]
    Unknown,
}
impl ObservationStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: ObservationStatus::Registered,
            code: "registered",
            display: "Registered",
            definition: Some(
                "The existence of the observation is registered, but there is no result yet available.",
            ),
        },
        Concept {
            value: ObservationStatus::Preliminary,
            code: "preliminary",
            display: "Preliminary",
            definition: Some(
                "This is an initial or interim observation: data may be incomplete or unverified.",
            ),
        },
        Concept {
            value: ObservationStatus::Final,
            code: "final",
            display: "Final",
            definition: Some(
                "The observation is complete and there are no further actions needed.",
            ),
        },
        Concept {
            value: ObservationStatus::Amended,
            code: "amended",
            display: "Amended",
            definition: Some(
                "Subsequent to being Final, the observation has been modified subsequent. This includes updates/new information and corrections.",
            ),
        },
        Concept {
            value: ObservationStatus::Corrected,
            code: "corrected",
            display: "Corrected",
            definition: Some(
                "Subsequent to being Final, the observation has been modified to correct an error in the test result.",
            ),
        },
        Concept {
            value: ObservationStatus::Cancelled,
            code: "cancelled",
            display: "Cancelled",
            definition: Some(
                "The observation is unavailable because the measurement was not started or not completed (also sometimes called \"aborted\").",
            ),
        },
        Concept {
            value: ObservationStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered in Error",
            definition: Some(
                "The observation has been withdrawn following previous final release.",
            ),
        },
        Concept {
            value: ObservationStatus::Unknown,
            code: "unknown",
            display: "Unknown",
            definition: Some(
                "The authoring/source system does not know which of the status values currently applies for this observation.",
            ),
        },
    ];
}
impl CodeSystem for ObservationStatus {
    const URL: &'static str = "http://hl7.org/fhir/observation-status";
    const NAME: &'static str = "ObservationStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            ObservationStatus::Registered => "registered",
            ObservationStatus::Preliminary => "preliminary",
            ObservationStatus::Final => "final",
            ObservationStatus::Amended => "amended",
            ObservationStatus::Corrected => "corrected",
            ObservationStatus::Cancelled => "cancelled",
            ObservationStatus::EnteredInError => "entered-in-error",
            ObservationStatus::Unknown => "unknown",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "registered" => Ok(ObservationStatus::Registered),
            "preliminary" => Ok(ObservationStatus::Preliminary),
            "final" => Ok(ObservationStatus::Final),
            "amended" => Ok(ObservationStatus::Amended),
            "corrected" => Ok(ObservationStatus::Corrected),
            "cancelled" => Ok(ObservationStatus::Cancelled),
            "entered-in-error" => Ok(ObservationStatus::EnteredInError),
            "unknown" => Ok(ObservationStatus::Unknown),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for ObservationStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for ObservationStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for ObservationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
