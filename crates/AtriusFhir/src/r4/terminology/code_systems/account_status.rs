// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: AccountStatus
/// Canonical URL: http://hl7.org/fhir/account-status
/// Version: 4.0.1
/// Title: AccountStatus
/// Status: active
///
/// Indicates whether the account is available to be used.
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
pub enum AccountStatus {
    /// Display: Active
    /// Definition: This account is active and may be used.
    #[serde(rename = "active")]
    Active,
    /// Display: Inactive
    /// Definition: This account is inactive and should not be used to track financial information.
    #[serde(rename = "inactive")]
    Inactive,
    /// Display: Entered in error
    /// Definition: This instance should not have been part of this patient's medical record.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    /// Display: On Hold
    /// Definition: This account is on hold.
    #[serde(rename = "on-hold")]
    OnHold,
    /// Display: Unknown
    /// Definition: The account status is unknown.
    #[serde(rename = "unknown")]
    Unknown,
}
impl AccountStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: AccountStatus::Active,
            code: "active",
            display: "Active",
            definition: Some("This account is active and may be used."),
        },
        Concept {
            value: AccountStatus::Inactive,
            code: "inactive",
            display: "Inactive",
            definition: Some(
                "This account is inactive and should not be used to track financial information.",
            ),
        },
        Concept {
            value: AccountStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered in error",
            definition: Some(
                "This instance should not have been part of this patient's medical record.",
            ),
        },
        Concept {
            value: AccountStatus::OnHold,
            code: "on-hold",
            display: "On Hold",
            definition: Some("This account is on hold."),
        },
        Concept {
            value: AccountStatus::Unknown,
            code: "unknown",
            display: "Unknown",
            definition: Some("The account status is unknown."),
        },
    ];
}
impl CodeSystem for AccountStatus {
    const URL: &'static str = "http://hl7.org/fhir/account-status";
    const NAME: &'static str = "AccountStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::EnteredInError => "entered-in-error",
            AccountStatus::OnHold => "on-hold",
            AccountStatus::Unknown => "unknown",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "active" => Ok(AccountStatus::Active),
            "inactive" => Ok(AccountStatus::Inactive),
            "entered-in-error" => Ok(AccountStatus::EnteredInError),
            "on-hold" => Ok(AccountStatus::OnHold),
            "unknown" => Ok(AccountStatus::Unknown),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for AccountStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for AccountStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
