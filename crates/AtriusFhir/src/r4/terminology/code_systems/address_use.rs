// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: AddressUse
/// Canonical URL: http://hl7.org/fhir/address-use
/// Version: 4.0.1
/// Title: AddressUse
/// Status: active
///
/// The use of an address.
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
pub enum AddressUse {
    /// Display: Home
    /// Definition: A communication address at a home.
    #[serde(rename = "home")]
    Home,
    /// Display: Work
    /// Definition: An office address. First choice for business related contacts during business hours.
    #[serde(rename = "work")]
    Work,
    /// Display: Temporary
    /// Definition: A temporary address. The period can provide more detailed information.
    #[serde(rename = "temp")]
    Temp,
    /// Display: Old / Incorrect
    /// Definition: This address is no longer in use (or was never correct but retained for records).
    #[serde(rename = "old")]
    Old,
    /// Display: Billing
    /// Definition: An address to be used to send bills, invoices, receipts etc.
    #[serde(rename = "billing")]
    Billing,
}
impl AddressUse {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: AddressUse::Home,
            code: "home",
            display: "Home",
            definition: Some("A communication address at a home."),
        },
        Concept {
            value: AddressUse::Work,
            code: "work",
            display: "Work",
            definition: Some(
                "An office address. First choice for business related contacts during business hours.",
            ),
        },
        Concept {
            value: AddressUse::Temp,
            code: "temp",
            display: "Temporary",
            definition: Some(
                "A temporary address. The period can provide more detailed information.",
            ),
        },
        Concept {
            value: AddressUse::Old,
            code: "old",
            display: "Old / Incorrect",
            definition: Some(
                "This address is no longer in use (or was never correct but retained for records).",
            ),
        },
        Concept {
            value: AddressUse::Billing,
            code: "billing",
            display: "Billing",
            definition: Some(
                "An address to be used to send bills, invoices, receipts etc.",
            ),
        },
    ];
}
impl CodeSystem for AddressUse {
    const URL: &'static str = "http://hl7.org/fhir/address-use";
    const NAME: &'static str = "AddressUse";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            AddressUse::Home => "home",
            AddressUse::Work => "work",
            AddressUse::Temp => "temp",
            AddressUse::Old => "old",
            AddressUse::Billing => "billing",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "home" => Ok(AddressUse::Home),
            "work" => Ok(AddressUse::Work),
            "temp" => Ok(AddressUse::Temp),
            "old" => Ok(AddressUse::Old),
            "billing" => Ok(AddressUse::Billing),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for AddressUse {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for AddressUse {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for AddressUse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
