// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: QuantityComparator
/// Canonical URL: http://hl7.org/fhir/quantity-comparator
/// Version: 4.0.1
/// Title: QuantityComparator
/// Status: active
///
/// How the Quantity should be understood and represented.
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
pub enum QuantityComparator {
    /// Display: Less than
    /// Definition: The actual value is less than the given value.
    #[serde(rename = "<")]
    Lt,
    /// Display: Less or Equal to
    /// Definition: The actual value is less than or equal to the given value.
    #[serde(rename = "<=")]
    Le,
    /// Display: Greater or Equal to
    /// Definition: The actual value is greater than or equal to the given value.
    #[serde(rename = ">=")]
    Ge,
    /// Display: Greater than
    /// Definition: The actual value is greater than the given value.
    #[serde(rename = ">")]
    Gt,
}
impl QuantityComparator {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: QuantityComparator::Lt,
            code: "<",
            display: "Less than",
            definition: Some("The actual value is less than the given value."),
        },
        Concept {
            value: QuantityComparator::Le,
            code: "<=",
            display: "Less or Equal to",
            definition: Some(
                "The actual value is less than or equal to the given value.",
            ),
        },
        Concept {
            value: QuantityComparator::Ge,
            code: ">=",
            display: "Greater or Equal to",
            definition: Some(
                "The actual value is greater than or equal to the given value.",
            ),
        },
        Concept {
            value: QuantityComparator::Gt,
            code: ">",
            display: "Greater than",
            definition: Some("The actual value is greater than the given value."),
        },
    ];
}
impl CodeSystem for QuantityComparator {
    const URL: &'static str = "http://hl7.org/fhir/quantity-comparator";
    const NAME: &'static str = "QuantityComparator";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            QuantityComparator::Lt => "<",
            QuantityComparator::Le => "<=",
            QuantityComparator::Ge => ">=",
            QuantityComparator::Gt => ">",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "<" => Ok(QuantityComparator::Lt),
            "<=" => Ok(QuantityComparator::Le),
            ">=" => Ok(QuantityComparator::Ge),
            ">" => Ok(QuantityComparator::Gt),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for QuantityComparator {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for QuantityComparator {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for QuantityComparator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
