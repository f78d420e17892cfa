// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: BiologicallyDerivedProductStatus
/// Canonical URL: http://hl7.org/fhir/product-status
/// Version: 4.0.1
/// Title: BiologicallyDerivedProductStatus
/// Status: draft
///
/// Biologically Derived Product Status.
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
pub enum BiologicallyDerivedProductStatus {
    /// Display: Available
    /// Definition: Product is currently available for use.
    #[serde(rename = "available")]
    Available,
    /// Display: Unavailable
    /// Definition: Product is not currently available for use.
    #[serde(rename = "unavailable")]
    Unavailable,
}
impl BiologicallyDerivedProductStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: BiologicallyDerivedProductStatus::Available,
            code: "available",
            display: "Available",
            definition: Some("Product is currently available for use."),
        },
        Concept {
            value: BiologicallyDerivedProductStatus::Unavailable,
            code: "unavailable",
            display: "Unavailable",
            definition: Some("Product is not currently available for use."),
        },
    ];
}
impl CodeSystem for BiologicallyDerivedProductStatus {
    const URL: &'static str = "http://hl7.org/fhir/product-status";
    const NAME: &'static str = "BiologicallyDerivedProductStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            BiologicallyDerivedProductStatus::Available => "available",
            BiologicallyDerivedProductStatus::Unavailable => "unavailable",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "available" => Ok(BiologicallyDerivedProductStatus::Available),
            "unavailable" => Ok(BiologicallyDerivedProductStatus::Unavailable),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for BiologicallyDerivedProductStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for BiologicallyDerivedProductStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for BiologicallyDerivedProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
