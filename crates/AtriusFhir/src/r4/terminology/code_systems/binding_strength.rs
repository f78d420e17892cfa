// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: BindingStrength
/// Canonical URL: http://hl7.org/fhir/binding-strength
/// Version: 4.0.1
/// Title: BindingStrength
/// Status: active
///
/// Indication of the degree of conformance expectations associated with a binding.
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
pub enum BindingStrength {
    /// Display: Required
    /// Definition: To be conformant, the concept in this element SHALL be from the specified value set.
    #[serde(rename = "required")]
    Required,
    /// Display: Extensible
    /// Definition: To be conformant, the concept in this element SHALL be from the specified value set if any of the codes within the value set can apply to the concept being communicated.  If the value set does not cover the concept (based on human review), alternate codings (or, data type allowing, text) may be included instead.
    #[serde(rename = "extensible")]
    Extensible,
    /// Display: Preferred
    /// Definition: Instances are encouraged to draw from the specified codes for interoperability purposes but are not required to do so to be considered conformant.
    #[serde(rename = "preferred")]
    Preferred,
    /// Display: Example
    /// Definition: Instances are not expected or even encouraged to draw from the specified value set.  The value set merely provides examples of the types of concepts intended to be included.
    #[serde(rename = "example")]
    Example,
}
impl BindingStrength {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: BindingStrength::Required,
            code: "required",
            display: "Required",
            definition: Some(
                "To be conformant, the concept in this element SHALL be from the specified value set.",
            ),
        },
        Concept {
            value: BindingStrength::Extensible,
            code: "extensible",
            display: "Extensible",
            definition: Some(
                "To be conformant, the concept in this element SHALL be from the specified value set if any of the codes within the value set can apply to the concept being communicated.  If the value set does not cover the concept (based on human review), alternate codings (or, data type allowing, text) may be included instead.",
            ),
        },
        Concept {
            value: BindingStrength::Preferred,
            code: "preferred",
            display: "Preferred",
            definition: Some(
                "Instances are encouraged to draw from the specified codes for interoperability purposes but are not required to do so to be considered conformant.",
            ),
        },
        Concept {
            value: BindingStrength::Example,
            code: "example",
            display: "Example",
            definition: Some(
                "Instances are not expected or even encouraged to draw from the specified value set.  The value set merely provides examples of the types of concepts intended to be included.",
            ),
        },
    ];
}
impl CodeSystem for BindingStrength {
    const URL: &'static str = "http://hl7.org/fhir/binding-strength";
    const NAME: &'static str = "BindingStrength";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            BindingStrength::Required => "required",
            BindingStrength::Extensible => "extensible",
            BindingStrength::Preferred => "preferred",
            BindingStrength::Example => "example",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "required" => Ok(BindingStrength::Required),
            "extensible" => Ok(BindingStrength::Extensible),
            "preferred" => Ok(BindingStrength::Preferred),
            "example" => Ok(BindingStrength::Example),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for BindingStrength {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for BindingStrength {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for BindingStrength {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
