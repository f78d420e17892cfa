// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: SupplyDeliveryStatus
/// Canonical URL: http://hl7.org/fhir/supplydelivery-status
/// Version: 4.0.1
/// Title: SupplyDeliveryStatus
/// Status: draft
///
/// Status of the supply delivery.
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
pub enum SupplyDeliveryStatus {
    /// Display: In Progress
    /// Definition: Supply has been requested, but not delivered.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Display: Delivered
    /// Definition: Supply has been delivered ("completed").
    #[serde(rename = "completed")]
    Completed,
    /// Display: Abandoned
    /// Definition: Delivery was not completed.
    #[serde(rename = "abandoned")]
    Abandoned,
    /// Display: Entered In Error
    /// Definition: This electronic record should never have existed, though it is possible that real-world decisions were based on it.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
}
impl SupplyDeliveryStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: SupplyDeliveryStatus::InProgress,
            code: "in-progress",
            display: "In Progress",
            definition: Some("Supply has been requested, but not delivered."),
        },
        Concept {
            value: SupplyDeliveryStatus::Completed,
            code: "completed",
            display: "Delivered",
            definition: Some("Supply has been delivered (\"completed\")."),
        },
        Concept {
            value: SupplyDeliveryStatus::Abandoned,
            code: "abandoned",
            display: "Abandoned",
            definition: Some("Delivery was not completed."),
        },
        Concept {
            value: SupplyDeliveryStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered In Error",
            definition: Some(
                "This electronic record should never have existed, though it is possible that real-world decisions were based on it.",
            ),
        },
    ];
}
impl CodeSystem for SupplyDeliveryStatus {
    const URL: &'static str = "http://hl7.org/fhir/supplydelivery-status";
    const NAME: &'static str = "SupplyDeliveryStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            SupplyDeliveryStatus::InProgress => "in-progress",
            SupplyDeliveryStatus::Completed => "completed",
            SupplyDeliveryStatus::Abandoned => "abandoned",
            SupplyDeliveryStatus::EnteredInError => "entered-in-error",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "in-progress" => Ok(SupplyDeliveryStatus::InProgress),
            "completed" => Ok(SupplyDeliveryStatus::Completed),
            "abandoned" => Ok(SupplyDeliveryStatus::Abandoned),
            "entered-in-error" => Ok(SupplyDeliveryStatus::EnteredInError),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for SupplyDeliveryStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for SupplyDeliveryStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for SupplyDeliveryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
