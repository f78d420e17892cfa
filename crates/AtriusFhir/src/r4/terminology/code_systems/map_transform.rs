// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: StructureMapTransform
/// Canonical URL: http://hl7.org/fhir/map-transform
/// Version: 4.0.1
/// Title: StructureMapTransform
/// Status: active
///
/// How data is copied/created.
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
pub enum StructureMapTransform {
    /// Display: create
    /// Definition: create(type : string) - type is passed through to the application on the standard API, and must be known by it.
    #[serde(rename = "create")]
    Create,
    /// Display: copy
    /// Definition: copy(source).
    #[serde(rename = "copy")]
    Copy,
    /// Display: truncate
    /// Definition: truncate(source, length) - source must be stringy type.
    #[serde(rename = "truncate")]
    Truncate,
    /// Display: escape
    /// Definition: escape(source, fmt1, fmt2) - change source from one kind of escaping to another (plain, java, xml, json). note that this is for when the string itself is escaped.
    #[serde(rename = "escape")]
    Escape,
    /// Display: cast
    /// Definition: cast(source, type?) - case source from one type to another. target type can be left as implicit if there is one and only one target type known.
    #[serde(rename = "cast")]
    Cast,
    /// Display: append
    /// Definition: append(source...) - source is element or string.
    #[serde(rename = "append")]
    Append,
    /// Display: translate
    /// Definition: translate(source, uri_of_map) - use the translate operation.
    #[serde(rename = "translate")]
    Translate,
    /// Display: reference
    /// Definition: reference(source : object) - return a string that references the provided tree properly.
    #[serde(rename = "reference")]
    Reference,
    /// Display: dateOp
    /// Definition: Perform a date operation. *Parameters to be documented*.
    #[serde(rename = "dateOp")]
    Dateop,
    /// Display: uuid
    /// Definition: Generate a random UUID (in lowercase). No Parameters.
    #[serde(rename = "uuid")]
    Uuid,
    /// Display: pointer
    /// Definition: Return the appropriate string to put in a reference that refers to the resource provided as a parameter.
    #[serde(rename = "pointer")]
    Pointer,
    /// Display: evaluate
    /// Definition: Execute the supplied FHIRPath expression and use the value returned by that.
    #[serde(rename = "evaluate")]
    Evaluate,
    /// Display: cc
    /// Definition: Create a CodeableConcept. Parameters = (text) or (system. Code[, display]).
    #[serde(rename = "cc")]
    Cc,
    /// Display: c
    /// Definition: Create a Coding. Parameters = (system. Code[, display]).
    #[serde(rename = "c")]
    C,
    /// Display: qty
    /// Definition: Create a quantity. Parameters = (text) or (value, unit, [system, code]) where text is the natural representation e.g. [comparator]value[space]unit.
    #[serde(rename = "qty")]
    Qty,
    /// Display: id
    /// Definition: Create an identifier. Parameters = (system, value[, type]) where type is a code from the identifier type value set.
    #[serde(rename = "id")]
    Id,
    /// Display: cp
    /// Definition: Create a contact details. Parameters = (value) or (system, value). If no system is provided, the system should be inferred from the content of the value.
    #[serde(rename = "cp")]
    Cp,
}
impl StructureMapTransform {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: StructureMapTransform::Create,
            code: "create",
            display: "create",
            definition: Some(
                "create(type : string) - type is passed through to the application on the standard API, and must be known by it.",
            ),
        },
        Concept {
            value: StructureMapTransform::Copy,
            code: "copy",
            display: "copy",
            definition: Some("copy(source)."),
        },
        Concept {
            value: StructureMapTransform::Truncate,
            code: "truncate",
            display: "truncate",
            definition: Some("truncate(source, length) - source must be stringy type."),
        },
        Concept {
            value: StructureMapTransform::Escape,
            code: "escape",
            display: "escape",
            definition: Some(
                "escape(source, fmt1, fmt2) - change source from one kind of escaping to another (plain, java, xml, json). note that this is for when the string itself is escaped.",
            ),
        },
        Concept {
            value: StructureMapTransform::Cast,
            code: "cast",
            display: "cast",
            definition: Some(
                "cast(source, type?) - case source from one type to another. target type can be left as implicit if there is one and only one target type known.",
            ),
        },
        Concept {
            value: StructureMapTransform::Append,
            code: "append",
            display: "append",
            definition: Some("append(source...) - source is element or string."),
        },
        Concept {
            value: StructureMapTransform::Translate,
            code: "translate",
            display: "translate",
            definition: Some(
                "translate(source, uri_of_map) - use the translate operation.",
            ),
        },
        Concept {
            value: StructureMapTransform::Reference,
            code: "reference",
            display: "reference",
            definition: Some(
                "reference(source : object) - return a string that references the provided tree properly.",
            ),
        },
        Concept {
            value: StructureMapTransform::Dateop,
            code: "dateOp",
            display: "dateOp",
            definition: Some("Perform a date operation. *Parameters to be documented*."),
        },
        Concept {
            value: StructureMapTransform::Uuid,
            code: "uuid",
            display: "uuid",
            definition: Some("Generate a random UUID (in lowercase). No Parameters."),
        },
        Concept {
            value: StructureMapTransform::Pointer,
            code: "pointer",
            display: "pointer",
            definition: Some(
                "Return the appropriate string to put in a reference that refers to the resource provided as a parameter.",
            ),
        },
        Concept {
            value: StructureMapTransform::Evaluate,
            code: "evaluate",
            display: "evaluate",
            definition: Some(
                "Execute the supplied FHIRPath expression and use the value returned by that.",
            ),
        },
        Concept {
            value: StructureMapTransform::Cc,
            code: "cc",
            display: "cc",
            definition: Some(
                "Create a CodeableConcept. Parameters = (text) or (system. Code[, display]).",
            ),
        },
        Concept {
            value: StructureMapTransform::C,
            code: "c",
            display: "c",
            definition: Some("Create a Coding. Parameters = (system. Code[, display])."),
        },
        Concept {
            value: StructureMapTransform::Qty,
            code: "qty",
            display: "qty",
            definition: Some(
                "Create a quantity. Parameters = (text) or (value, unit, [system, code]) where text is the natural representation e.g. [comparator]value[space]unit.",
            ),
        },
        Concept {
            value: StructureMapTransform::Id,
            code: "id",
            display: "id",
            definition: Some(
                "Create an identifier. Parameters = (system, value[, type]) where type is a code from the identifier type value set.",
            ),
        },
        Concept {
            value: StructureMapTransform::Cp,
            code: "cp",
            display: "cp",
            definition: Some(
                "Create a contact details. Parameters = (value) or (system, value). If no system is provided, the system should be inferred from the content of the value.",
            ),
        },
    ];
}
impl CodeSystem for StructureMapTransform {
    const URL: &'static str = "http://hl7.org/fhir/map-transform";
    const NAME: &'static str = "StructureMapTransform";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            StructureMapTransform::Create => "create",
            StructureMapTransform::Copy => "copy",
            StructureMapTransform::Truncate => "truncate",
            StructureMapTransform::Escape => "escape",
            StructureMapTransform::Cast => "cast",
            StructureMapTransform::Append => "append",
            StructureMapTransform::Translate => "translate",
            StructureMapTransform::Reference => "reference",
            StructureMapTransform::Dateop => "dateOp",
            StructureMapTransform::Uuid => "uuid",
            StructureMapTransform::Pointer => "pointer",
            StructureMapTransform::Evaluate => "evaluate",
            StructureMapTransform::Cc => "cc",
            StructureMapTransform::C => "c",
            StructureMapTransform::Qty => "qty",
            StructureMapTransform::Id => "id",
            StructureMapTransform::Cp => "cp",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "create" => Ok(StructureMapTransform::Create),
            "copy" => Ok(StructureMapTransform::Copy),
            "truncate" => Ok(StructureMapTransform::Truncate),
            "escape" => Ok(StructureMapTransform::Escape),
            "cast" => Ok(StructureMapTransform::Cast),
            "append" => Ok(StructureMapTransform::Append),
            "translate" => Ok(StructureMapTransform::Translate),
            "reference" => Ok(StructureMapTransform::Reference),
            "dateOp" => Ok(StructureMapTransform::Dateop),
            "uuid" => Ok(StructureMapTransform::Uuid),
            "pointer" => Ok(StructureMapTransform::Pointer),
            "evaluate" => Ok(StructureMapTransform::Evaluate),
            "cc" => Ok(StructureMapTransform::Cc),
            "c" => Ok(StructureMapTransform::C),
            "qty" => Ok(StructureMapTransform::Qty),
            "id" => Ok(StructureMapTransform::Id),
            "cp" => Ok(StructureMapTransform::Cp),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for StructureMapTransform {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for StructureMapTransform {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for StructureMapTransform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
