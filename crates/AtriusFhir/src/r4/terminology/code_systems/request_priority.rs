// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: RequestPriority
/// Canonical URL: http://hl7.org/fhir/request-priority
/// Version: 4.0.1
/// Title: RequestPriority
/// Status: draft
///
/// The clinical priority of a diagnostic order.
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
pub enum RequestPriority {
    /// Display: Routine
    /// Definition: The request has normal priority.
    #[serde(rename = "routine")]
    Routine,
    /// Display: Urgent
    /// Definition: The request should be actioned promptly - higher priority than routine.
    #[serde(rename = "urgent")]
    Urgent,
    /// Display: ASAP
    /// Definition: The request should be actioned as soon as possible - higher priority than urgent.
    #[serde(rename = "asap")]
    Asap,
    /// Display: STAT
    /// Definition: The request should be actioned immediately - highest possible priority. E.g. an emergency.
    #[serde(rename = "stat")]
    Stat,
}
impl RequestPriority {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: RequestPriority::Routine,
            code: "routine",
            display: "Routine",
            definition: Some("The request has normal priority."),
        },
        Concept {
            value: RequestPriority::Urgent,
            code: "urgent",
            display: "Urgent",
            definition: Some(
                "The request should be actioned promptly - higher priority than routine.",
            ),
        },
        Concept {
            value: RequestPriority::Asap,
            code: "asap",
            display: "ASAP",
            definition: Some(
                "The request should be actioned as soon as possible - higher priority than urgent.",
            ),
        },
        Concept {
            value: RequestPriority::Stat,
            code: "stat",
            display: "STAT",
            definition: Some(
                "The request should be actioned immediately - highest possible priority. E.g. an emergency.",
            ),
        },
    ];
}
impl CodeSystem for RequestPriority {
    const URL: &'static str = "http://hl7.org/fhir/request-priority";
    const NAME: &'static str = "RequestPriority";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            RequestPriority::Routine => "routine",
            RequestPriority::Urgent => "urgent",
            RequestPriority::Asap => "asap",
            RequestPriority::Stat => "stat",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "routine" => Ok(RequestPriority::Routine),
            "urgent" => Ok(RequestPriority::Urgent),
            "asap" => Ok(RequestPriority::Asap),
            "stat" => Ok(RequestPriority::Stat),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for RequestPriority {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for RequestPriority {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
