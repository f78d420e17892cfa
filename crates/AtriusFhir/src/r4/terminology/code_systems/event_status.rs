// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: EventStatus
/// Canonical URL: http://hl7.org/fhir/event-status
/// Version: 4.0.1
/// Title: EventStatus
/// Status: active
///
/// Codes identifying the lifecycle stage of an event.
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
pub enum EventStatus {
    /// Display: Preparation
    /// Definition: The core event has not started yet, but some staging activities have begun (e.g. surgical suite preparation).
    #[serde(rename = "preparation")]
    Preparation,
    /// Display: In Progress
    /// Definition: The event is currently occurring.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Display: Not Done
    /// Definition: The event was terminated prior to any activity beyond preparation.
    #[serde(rename = "not-done")]
    NotDone,
    /// Display: On Hold
    /// Definition: The event has been temporarily stopped but is expected to resume in the future.
    #[serde(rename = "on-hold")]
    OnHold,
    /// Display: Stopped
    /// Definition: The event was terminated prior to the full completion of the intended activity but after at least some of the 'main' activity was performed.
    #[serde(rename = "stopped")]
    Stopped,
    /// Display: Completed
    /// Definition: The event has now concluded.
    #[serde(rename = "completed")]
    Completed,
    /// Display: Entered in Error
    /// Definition: This electronic record should never have existed, though it is possible that real-world decisions were based on it.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    /// Display: Unknown
    /// Definition: The authoring/source system does not know which of the status values currently applies for this event.
    #[serde(rename = "unknown")]
    Unknown,
}
impl EventStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: EventStatus::Preparation,
            code: "preparation",
            display: "Preparation",
            definition: Some(
                "The core event has not started yet, but some staging activities have begun (e.g. surgical suite preparation).",
            ),
        },
        Concept {
            value: EventStatus::InProgress,
            code: "in-progress",
            display: "In Progress",
            definition: Some("The event is currently occurring."),
        },
        Concept {
            value: EventStatus::NotDone,
            code: "not-done",
            display: "Not Done",
            definition: Some(
                "The event was terminated prior to any activity beyond preparation.",
            ),
        },
        Concept {
            value: EventStatus::OnHold,
            code: "on-hold",
            display: "On Hold",
            definition: Some(
                "The event has been temporarily stopped but is expected to resume in the future.",
            ),
        },
        Concept {
            value: EventStatus::Stopped,
            code: "stopped",
            display: "Stopped",
            definition: Some(
                "The event was terminated prior to the full completion of the intended activity but after at least some of the 'main' activity was performed.",
            ),
        },
        Concept {
            value: EventStatus::Completed,
            code: "completed",
            display: "Completed",
            definition: Some("The event has now concluded."),
        },
        Concept {
            value: EventStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered in Error",
            definition: Some(
                "This electronic record should never have existed, though it is possible that real-world decisions were based on it.",
            ),
        },
        Concept {
            value: EventStatus::Unknown,
            code: "unknown",
            display: "Unknown",
            definition: Some(
                "The authoring/source system does not know which of the status values currently applies for this event.",
            ),
        },
    ];
}
impl CodeSystem for EventStatus {
    const URL: &'static str = "http://hl7.org/fhir/event-status";
    const NAME: &'static str = "EventStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            EventStatus::Preparation => "preparation",
            EventStatus::InProgress => "in-progress",
            EventStatus::NotDone => "not-done",
            EventStatus::OnHold => "on-hold",
            EventStatus::Stopped => "stopped",
            EventStatus::Completed => "completed",
            EventStatus::EnteredInError => "entered-in-error",
            EventStatus::Unknown => "unknown",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "preparation" => Ok(EventStatus::Preparation),
            "in-progress" => Ok(EventStatus::InProgress),
            "not-done" => Ok(EventStatus::NotDone),
            "on-hold" => Ok(EventStatus::OnHold),
            "stopped" => Ok(EventStatus::Stopped),
            "completed" => Ok(EventStatus::Completed),
            "entered-in-error" => Ok(EventStatus::EnteredInError),
            "unknown" => Ok(EventStatus::Unknown),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for EventStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for EventStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
