// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: StructureMapContextType
/// Canonical URL: http://hl7.org/fhir/map-context-type
/// Version: 4.0.1
/// Title: StructureMapContextType
/// Status: active
///
/// How to interpret the context.
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
pub enum StructureMapContextType {
    /// Display: Type
    /// Definition: The context specifies a type.
    #[serde(rename = "type")]
    Type__,
    /// Display: Variable
    /// Definition: The context specifies a variable.
    #[serde(rename = "variable")]
    Variable,
}
impl StructureMapContextType {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: StructureMapContextType::Type__,
            code: "type",
            display: "Type",
            definition: Some("The context specifies a type."),
        },
        Concept {
            value: StructureMapContextType::Variable,
            code: "variable",
            display: "Variable",
            definition: Some("The context specifies a variable."),
        },
    ];
}
impl CodeSystem for StructureMapContextType {
    const URL: &'static str = "http://hl7.org/fhir/map-context-type";
    const NAME: &'static str = "StructureMapContextType";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            StructureMapContextType::Type__ => "type",
            StructureMapContextType::Variable => "variable",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "type" => Ok(StructureMapContextType::Type__),
            "variable" => Ok(StructureMapContextType::Variable),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for StructureMapContextType {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for StructureMapContextType {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for StructureMapContextType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
