// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: BiologicallyDerivedProductCategory
/// Canonical URL: http://hl7.org/fhir/product-category
/// Version: 4.0.1
/// Title: BiologicallyDerivedProductCategory
/// Status: draft
///
/// Biologically Derived Product Category.
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
pub enum BiologicallyDerivedProductCategory {
    /// Display: Organ
    /// Definition: A collection of tissues joined in a structural unit to serve a common function.
    #[serde(rename = "organ")]
    Organ,
    /// Display: Tissue
    /// Definition: An ensemble of similar cells and their extracellular matrix from the same origin that together carry out a specific function.
    #[serde(rename = "tissue")]
    Tissue,
    /// Display: Fluid
    /// Definition: Body fluid.
    #[serde(rename = "fluid")]
    Fluid,
    /// Display: Cells
    /// Definition: Collection of cells.
    #[serde(rename = "cells")]
    Cells,
    /// Display: BiologicalAgent
    /// Definition: Biological agent of unspecified type.
    #[serde(rename = "biologicalAgent")]
    Biologicalagent,
}
impl BiologicallyDerivedProductCategory {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: BiologicallyDerivedProductCategory::Organ,
            code: "organ",
            display: "Organ",
            definition: Some(
                "A collection of tissues joined in a structural unit to serve a common function.",
            ),
        },
        Concept {
            value: BiologicallyDerivedProductCategory::Tissue,
            code: "tissue",
            display: "Tissue",
            definition: Some(
                "An ensemble of similar cells and their extracellular matrix from the same origin that together carry out a specific function.",
            ),
        },
        Concept {
            value: BiologicallyDerivedProductCategory::Fluid,
            code: "fluid",
            display: "Fluid",
            definition: Some("Body fluid."),
        },
        Concept {
            value: BiologicallyDerivedProductCategory::Cells,
            code: "cells",
            display: "Cells",
            definition: Some("Collection of cells."),
        },
        Concept {
            value: BiologicallyDerivedProductCategory::Biologicalagent,
            code: "biologicalAgent",
            display: "BiologicalAgent",
            definition: Some("Biological agent of unspecified type."),
        },
    ];
}
impl CodeSystem for BiologicallyDerivedProductCategory {
    const URL: &'static str = "http://hl7.org/fhir/product-category";
    const NAME: &'static str = "BiologicallyDerivedProductCategory";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            BiologicallyDerivedProductCategory::Organ => "organ",
            BiologicallyDerivedProductCategory::Tissue => "tissue",
            BiologicallyDerivedProductCategory::Fluid => "fluid",
            BiologicallyDerivedProductCategory::Cells => "cells",
            BiologicallyDerivedProductCategory::Biologicalagent => "biologicalAgent",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "organ" => Ok(BiologicallyDerivedProductCategory::Organ),
            "tissue" => Ok(BiologicallyDerivedProductCategory::Tissue),
            "fluid" => Ok(BiologicallyDerivedProductCategory::Fluid),
            "cells" => Ok(BiologicallyDerivedProductCategory::Cells),
            "biologicalAgent" => Ok(BiologicallyDerivedProductCategory::Biologicalagent),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for BiologicallyDerivedProductCategory {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for BiologicallyDerivedProductCategory {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for BiologicallyDerivedProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
