// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: EncounterStatus
/// Canonical URL: http://hl7.org/fhir/encounter-status
/// Version: 4.0.1
/// Title: EncounterStatus
/// Status: draft
///
/// Current state of the encounter.
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
pub enum EncounterStatus {
    /// Display: Planned
    /// Definition: The Encounter has not yet started.
    #[serde(rename = "planned")]
    Planned,
    /// Display: Arrived
    /// Definition: The Patient is present for the encounter, however is not currently meeting with a practitioner.
    #[serde(rename = "arrived")]
    Arrived,
    /// Display: Triaged
    /// Definition: The patient has been assessed for the priority of their treatment based on the severity of their condition.
    #[serde(rename = "triaged")]
    Triaged,
    /// Display: In Progress
    /// Definition: The Encounter has begun and the patient is present / the practitioner and the patient are meeting.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Display: On Leave
    /// Definition: The Encounter has begun, but the patient is temporarily on leave.
    #[serde(rename = "onleave")]
    Onleave,
    /// Display: Finished
    /// Definition: The Encounter has ended.
    #[serde(rename = "finished")]
    Finished,
    /// Display: Cancelled
    /// Definition: The Encounter has ended before it has begun.
    #[serde(rename = "cancelled")]
    Cancelled,
    /// Display: Entered in Error
    /// Definition: This instance should not have been part of this patient's medical record.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    /// Display: Unknown
    /// Definition: The encounter status is unknown. Note that "unknown" is a value of last resort and every attempt should be made to provide a meaningful value other than "unknown".
    #[serde(rename = "unknown")]
    Unknown,
}
impl EncounterStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: EncounterStatus::Planned,
            code: "planned",
            display: "Planned",
            definition: Some("The Encounter has not yet started."),
        },
        Concept {
            value: EncounterStatus::Arrived,
            code: "arrived",
            display: "Arrived",
            definition: Some(
                "The Patient is present for the encounter, however is not currently meeting with a practitioner.",
            ),
        },
        Concept {
            value: EncounterStatus::Triaged,
            code: "triaged",
            display: "Triaged",
            definition: Some(
                "The patient has been assessed for the priority of their treatment based on the severity of their condition.",
            ),
        },
        Concept {
            value: EncounterStatus::InProgress,
            code: "in-progress",
            display: "In Progress",
            definition: Some(
                "The Encounter has begun and the patient is present / the practitioner and the patient are meeting.",
            ),
        },
        Concept {
            value: EncounterStatus::Onleave,
            code: "onleave",
            display: "On Leave",
            definition: Some(
                "The Encounter has begun, but the patient is temporarily on leave.",
            ),
        },
        Concept {
            value: EncounterStatus::Finished,
            code: "finished",
            display: "Finished",
            definition: Some("The Encounter has ended."),
        },
        Concept {
            value: EncounterStatus::Cancelled,
            code: "cancelled",
            display: "Cancelled",
            definition: Some("The Encounter has ended before it has begun."),
        },
        Concept {
            value: EncounterStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered in Error",
            definition: Some(
                "This instance should not have been part of this patient's medical record.",
            ),
        },
        Concept {
            value: EncounterStatus::Unknown,
            code: "unknown",
            display: "Unknown",
            definition: Some(
                "The encounter status is unknown. Note that \"unknown\" is a value of last resort and every attempt should be made to provide a meaningful value other than \"unknown\".",
            ),
        },
    ];
}
impl CodeSystem for EncounterStatus {
    const URL: &'static str = "http://hl7.org/fhir/encounter-status";
    const NAME: &'static str = "EncounterStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            EncounterStatus::Planned => "planned",
            EncounterStatus::Arrived => "arrived",
            EncounterStatus::Triaged => "triaged",
            EncounterStatus::InProgress => "in-progress",
            EncounterStatus::Onleave => "onleave",
            EncounterStatus::Finished => "finished",
            EncounterStatus::Cancelled => "cancelled",
            EncounterStatus::EnteredInError => "entered-in-error",
            EncounterStatus::Unknown => "unknown",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "planned" => Ok(EncounterStatus::Planned),
            "arrived" => Ok(EncounterStatus::Arrived),
            "triaged" => Ok(EncounterStatus::Triaged),
            "in-progress" => Ok(EncounterStatus::InProgress),
            "onleave" => Ok(EncounterStatus::Onleave),
            "finished" => Ok(EncounterStatus::Finished),
            "cancelled" => Ok(EncounterStatus::Cancelled),
            "entered-in-error" => Ok(EncounterStatus::EnteredInError),
            "unknown" => Ok(EncounterStatus::Unknown),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for EncounterStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for EncounterStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for EncounterStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
