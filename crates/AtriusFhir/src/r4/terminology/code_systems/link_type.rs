// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: LinkType
/// Canonical URL: http://hl7.org/fhir/link-type
/// Version: 4.0.1
/// Title: LinkType
/// Status: active
///
/// The type of link between this patient resource and another patient resource.
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
pub enum LinkType {
    /// Display: Replaced-by
    /// Definition: The patient resource containing this link must no longer be used. The link points forward to another patient resource that must be used in lieu of the patient resource that contains this link.
    #[serde(rename = "replaced-by")]
    ReplacedBy,
    /// Display: Replaces
    /// Definition: The patient resource containing this link is the current active patient record. The link points back to an inactive patient resource that has been merged into this resource, and should be consulted to retrieve additional referenced information.
    #[serde(rename = "replaces")]
    Replaces,
    /// Display: Refer
    /// Definition: The patient resource containing this link is in use and valid but not considered the main source of information about a patient.
    #[serde(rename = "refer")]
    Refer,
    /// Display: See also
    /// Definition: The patient resource containing this link is in use and valid, but points to another patient resource that is known to contain data about the same person.
    #[serde(rename = "seealso")]
    Seealso,
}
impl LinkType {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: LinkType::ReplacedBy,
            code: "replaced-by",
            display: "Replaced-by",
            definition: Some(
                "The patient resource containing this link must no longer be used. The link points forward to another patient resource that must be used in lieu of the patient resource that contains this link.",
            ),
        },
        Concept {
            value: LinkType::Replaces,
            code: "replaces",
            display: "Replaces",
            definition: Some(
                "The patient resource containing this link is the current active patient record. The link points back to an inactive patient resource that has been merged into this resource, and should be consulted to retrieve additional referenced information.",
            ),
        },
        Concept {
            value: LinkType::Refer,
            code: "refer",
            display: "Refer",
            definition: Some(
                "The patient resource containing this link is in use and valid but not considered the main source of information about a patient.",
            ),
        },
        Concept {
            value: LinkType::Seealso,
            code: "seealso",
            display: "See also",
            definition: Some(
                "The patient resource containing this link is in use and valid, but points to another patient resource that is known to contain data about the same person.",
            ),
        },
    ];
}
impl CodeSystem for LinkType {
    const URL: &'static str = "http://hl7.org/fhir/link-type";
    const NAME: &'static str = "LinkType";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            LinkType::ReplacedBy => "replaced-by",
            LinkType::Replaces => "replaces",
            LinkType::Refer => "refer",
            LinkType::Seealso => "seealso",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "replaced-by" => Ok(LinkType::ReplacedBy),
            "replaces" => Ok(LinkType::Replaces),
            "refer" => Ok(LinkType::Refer),
            "seealso" => Ok(LinkType::Seealso),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for LinkType {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for LinkType {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for LinkType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
