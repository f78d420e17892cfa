// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: RequestStatus
/// Canonical URL: http://hl7.org/fhir/request-status
/// Version: 4.0.1
/// Title: RequestStatus
/// Status: draft
///
/// Codes identifying the lifecycle stage of a request.
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
pub enum RequestStatus {
    /// Display: Draft
    /// Definition: The request has been created but is not yet complete or ready for action.
    #[serde(rename = "draft")]
    Draft,
    /// Display: Active
    /// Definition: The request is in force and ready to be acted upon.
    #[serde(rename = "active")]
    Active,
    /// Display: On Hold
    /// Definition: The request (and any implicit authorization to act) has been temporarily withdrawn but is expected to resume in the future.
    #[serde(rename = "on-hold")]
    OnHold,
    /// Display: Revoked
    /// Definition: The request (and any implicit authorization to act) has been terminated prior to the known full completion of the intended actions.
    #[serde(rename = "revoked")]
    Revoked,
    /// Display: Completed
    /// Definition: The activity described by the request has been fully performed.
    #[serde(rename = "completed")]
    Completed,
    /// Display: Entered in Error
    /// Definition: This request should never have existed and should be considered 'void'.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    /// Display: Unknown
    /// Definition: The authoring/source system does not know which of the status values currently applies for this request.
    #[serde(rename = "unknown")]
    Unknown,
}
impl RequestStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: RequestStatus::Draft,
            code: "draft",
            display: "Draft",
            definition: Some(
                "The request has been created but is not yet complete or ready for action.",
            ),
        },
        Concept {
            value: RequestStatus::Active,
            code: "active",
            display: "Active",
            definition: Some("The request is in force and ready to be acted upon."),
        },
        Concept {
            value: RequestStatus::OnHold,
            code: "on-hold",
            display: "On Hold",
            definition: Some(
                "The request (and any implicit authorization to act) has been temporarily withdrawn but is expected to resume in the future.",
            ),
        },
        Concept {
            value: RequestStatus::Revoked,
            code: "revoked",
            display: "Revoked",
            definition: Some(
                "The request (and any implicit authorization to act) has been terminated prior to the known full completion of the intended actions.",
            ),
        },
        Concept {
            value: RequestStatus::Completed,
            code: "completed",
            display: "Completed",
            definition: Some(
                "The activity described by the request has been fully performed.",
            ),
        },
        Concept {
            value: RequestStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered in Error",
            definition: Some(
                "This request should never have existed and should be considered 'void'.",
            ),
        },
        Concept {
            value: RequestStatus::Unknown,
            code: "unknown",
            display: "Unknown",
            definition: Some(
                "The authoring/source system does not know which of the status values currently applies for this request.",
            ),
        },
    ];
}
impl CodeSystem for RequestStatus {
    const URL: &'static str = "http://hl7.org/fhir/request-status";
    const NAME: &'static str = "RequestStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            RequestStatus::Draft => "draft",
            RequestStatus::Active => "active",
            RequestStatus::OnHold => "on-hold",
            RequestStatus::Revoked => "revoked",
            RequestStatus::Completed => "completed",
            RequestStatus::EnteredInError => "entered-in-error",
            RequestStatus::Unknown => "unknown",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "draft" => Ok(RequestStatus::Draft),
            "active" => Ok(RequestStatus::Active),
            "on-hold" => Ok(RequestStatus::OnHold),
            "revoked" => Ok(RequestStatus::Revoked),
            "completed" => Ok(RequestStatus::Completed),
            "entered-in-error" => Ok(RequestStatus::EnteredInError),
            "unknown" => Ok(RequestStatus::Unknown),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for RequestStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for RequestStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
