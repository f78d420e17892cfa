// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: FinancialResourceStatusCodes
/// Canonical URL: http://hl7.org/fhir/fm-status
/// Version: 4.0.1
/// Title: Financial Resource Status Codes
/// Status: active
///
/// This value set includes Status codes.
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
pub enum FinancialResourceStatusCodes {
    /// Display: Active
    /// Definition: The instance is currently in-force.
    #[serde(rename = "active")]
    Active,
    /// Display: Cancelled
    /// Definition: The instance is withdrawn, rescinded or reversed.
    #[serde(rename = "cancelled")]
    Cancelled,
    /// Display: Draft
    /// Definition: A new instance the contents of which is not complete.
    #[serde(rename = "draft")]
    Draft,
    /// Display: Entered in Error
    /// Definition: The instance was entered in error.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
}
impl FinancialResourceStatusCodes {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: FinancialResourceStatusCodes::Active,
            code: "active",
            display: "Active",
            definition: Some("The instance is currently in-force."),
        },
        Concept {
            value: FinancialResourceStatusCodes::Cancelled,
            code: "cancelled",
            display: "Cancelled",
            definition: Some("The instance is withdrawn, rescinded or reversed."),
        },
        Concept {
            value: FinancialResourceStatusCodes::Draft,
            code: "draft",
            display: "Draft",
            definition: Some("A new instance the contents of which is not complete."),
        },
        Concept {
            value: FinancialResourceStatusCodes::EnteredInError,
            code: "entered-in-error",
            display: "Entered in Error",
            definition: Some("The instance was entered in error."),
        },
    ];
}
impl CodeSystem for FinancialResourceStatusCodes {
    const URL: &'static str = "http://hl7.org/fhir/fm-status";
    const NAME: &'static str = "FinancialResourceStatusCodes";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            FinancialResourceStatusCodes::Active => "active",
            FinancialResourceStatusCodes::Cancelled => "cancelled",
            FinancialResourceStatusCodes::Draft => "draft",
            FinancialResourceStatusCodes::EnteredInError => "entered-in-error",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "active" => Ok(FinancialResourceStatusCodes::Active),
            "cancelled" => Ok(FinancialResourceStatusCodes::Cancelled),
            "draft" => Ok(FinancialResourceStatusCodes::Draft),
            "entered-in-error" => Ok(FinancialResourceStatusCodes::EnteredInError),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for FinancialResourceStatusCodes {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for FinancialResourceStatusCodes {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for FinancialResourceStatusCodes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
