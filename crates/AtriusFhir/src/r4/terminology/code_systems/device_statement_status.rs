// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: DeviceUseStatementStatus
/// Canonical URL: http://hl7.org/fhir/device-statement-status
/// Version: 4.0.1
/// Title: DeviceUseStatementStatus
/// Status: draft
///
/// A coded concept indicating the current status of the Device Usage.
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
pub enum DeviceUseStatementStatus {
    /// Display: Active
    /// Definition: The device is still being used.
    #[serde(rename = "active")]
    Active,
    /// Display: Completed
    /// Definition: The device is no longer being used.
    #[serde(rename = "completed")]
    Completed,
    /// Display: Entered in Error
    /// Definition: The statement was recorded incorrectly.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    /// Display: Intended
    /// Definition: The device may be used at some time in the future.
    #[serde(rename = "intended")]
    Intended,
    /// Display: Stopped
    /// Definition: Actions implied by the statement have been permanently halted, before all of them occurred.
    #[serde(rename = "stopped")]
    Stopped,
    /// Display: On Hold
    /// Definition: Actions implied by the statement have been temporarily halted, but are expected to continue later.
    #[serde(rename = "on-hold")]
    OnHold,
}
impl DeviceUseStatementStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: DeviceUseStatementStatus::Active,
            code: "active",
            display: "Active",
            definition: Some("The device is still being used."),
        },
        Concept {
            value: DeviceUseStatementStatus::Completed,
            code: "completed",
            display: "Completed",
            definition: Some("The device is no longer being used."),
        },
        Concept {
            value: DeviceUseStatementStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered in Error",
            definition: Some("The statement was recorded incorrectly."),
        },
        Concept {
            value: DeviceUseStatementStatus::Intended,
            code: "intended",
            display: "Intended",
            definition: Some("The device may be used at some time in the future."),
        },
        Concept {
            value: DeviceUseStatementStatus::Stopped,
            code: "stopped",
            display: "Stopped",
            definition: Some(
                "Actions implied by the statement have been permanently halted, before all of them occurred.",
            ),
        },
        Concept {
            value: DeviceUseStatementStatus::OnHold,
            code: "on-hold",
            display: "On Hold",
            definition: Some(
                "Actions implied by the statement have been temporarily halted, but are expected to continue later.",
            ),
        },
    ];
}
impl CodeSystem for DeviceUseStatementStatus {
    const URL: &'static str = "http://hl7.org/fhir/device-statement-status";
    const NAME: &'static str = "DeviceUseStatementStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            DeviceUseStatementStatus::Active => "active",
            DeviceUseStatementStatus::Completed => "completed",
            DeviceUseStatementStatus::EnteredInError => "entered-in-error",
            DeviceUseStatementStatus::Intended => "intended",
            DeviceUseStatementStatus::Stopped => "stopped",
            DeviceUseStatementStatus::OnHold => "on-hold",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "active" => Ok(DeviceUseStatementStatus::Active),
            "completed" => Ok(DeviceUseStatementStatus::Completed),
            "entered-in-error" => Ok(DeviceUseStatementStatus::EnteredInError),
            "intended" => Ok(DeviceUseStatementStatus::Intended),
            "stopped" => Ok(DeviceUseStatementStatus::Stopped),
            "on-hold" => Ok(DeviceUseStatementStatus::OnHold),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for DeviceUseStatementStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for DeviceUseStatementStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for DeviceUseStatementStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
