// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: BiologicallyDerivedProductStorageScale
/// Canonical URL: http://hl7.org/fhir/product-storage-scale
/// Version: 4.0.1
/// Title: BiologicallyDerived Product Storage Scale
/// Status: active
///
/// BiologicallyDerived Product Storage Scale.
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
pub enum BiologicallyDerivedProductStorageScale {
    /// Display: Fahrenheit
    /// Definition: Fahrenheit temperature scale.
    #[serde(rename = "farenheit")]
    Farenheit,
    /// Display: Celsius
    /// Definition: Celsius or centigrade temperature scale.
    #[serde(rename = "celsius")]
    Celsius,
    /// Display: Kelvin
    /// Definition: Kelvin absolute thermodynamic temperature scale.
    #[serde(rename = "kelvin")]
    Kelvin,
}
impl BiologicallyDerivedProductStorageScale {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: BiologicallyDerivedProductStorageScale::Farenheit,
            code: "farenheit",
            display: "Fahrenheit",
            definition: Some("Fahrenheit temperature scale."),
        },
        Concept {
            value: BiologicallyDerivedProductStorageScale::Celsius,
            code: "celsius",
            display: "Celsius",
            definition: Some("Celsius or centigrade temperature scale."),
        },
        Concept {
            value: BiologicallyDerivedProductStorageScale::Kelvin,
            code: "kelvin",
            display: "Kelvin",
            definition: Some("Kelvin absolute thermodynamic temperature scale."),
        },
    ];
}
impl CodeSystem for BiologicallyDerivedProductStorageScale {
    const URL: &'static str = "http://hl7.org/fhir/product-storage-scale";
    const NAME: &'static str = "BiologicallyDerivedProductStorageScale";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            BiologicallyDerivedProductStorageScale::Farenheit => "farenheit",
            BiologicallyDerivedProductStorageScale::Celsius => "celsius",
            BiologicallyDerivedProductStorageScale::Kelvin => "kelvin",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "farenheit" => Ok(BiologicallyDerivedProductStorageScale::Farenheit),
            "celsius" => Ok(BiologicallyDerivedProductStorageScale::Celsius),
            "kelvin" => Ok(BiologicallyDerivedProductStorageScale::Kelvin),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for BiologicallyDerivedProductStorageScale {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for BiologicallyDerivedProductStorageScale {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for BiologicallyDerivedProductStorageScale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
