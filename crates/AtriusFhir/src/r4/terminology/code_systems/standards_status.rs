// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: StandardsStatus
/// Canonical URL: http://hl7.org/fhir/standards-status
/// Version: 4.0.1
/// Title: StandardsStatus
/// Status: active
///
/// HL7 Ballot/Standards status of artifact.
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
pub enum StandardsStatus {
    /// Display: Draft
    /// Definition: This portion of the specification is not considered to be complete enough or sufficiently reviewed to be safe for implementation. It may have known issues or still be in the "in development" stage. It is included in the publication as a place-holder, to solicit feedback from the implementation community and/or to give implementers some insight as to functionality likely to be included in future versions of the specification. Content at this level should only be implemented by the brave or desperate and is very much "use at your own risk". The content that is Draft that will usually be elevated to Trial Use once review and correction is complete after it has been subjected to ballot.
    #[serde(rename = "draft")]
    Draft,
    /// Display: Normative
    /// Definition: This content has been subject to review and production implementation in a wide variety of environments. The content is considered to be stable and has been 'locked', subjecting it to FHIR Inter-version Compatibility Rules. While changes are possible, they are expected to be infrequent and are tightly constrained. Compatibility Rules.
    #[serde(rename = "normative")]
    Normative,
    /// Display: Trial-Use
    /// Definition: This content has been well reviewed and is considered by the authors to be ready for use in production systems. It has been subjected to ballot and approved as an official standard. However, it has not yet seen widespread use in production across the full spectrum of environments it is intended to be used in. In some cases, there may be documented known issues that require implementation experience to determine appropriate resolutions for. Future versions of FHIR may make significant changes to Trial Use content that are not compatible with previously published content.
    #[serde(rename = "trial-use")]
    TrialUse,
    /// Display: Informative
    /// Definition: This portion of the specification is provided for implementer assistance, and does not make rules that implementers are required to follow. Typical examples of this content in the FHIR specification are tables of contents, registries, examples, and implementer advice.
    #[serde(rename = "informative")]
    Informative,
    /// Display: Deprecated
    /// Definition: This portion of the specification is provided for implementer assistance, and does not make rules that implementers are required to follow. Typical examples of this content in the FHIR specification are tables of contents, registries, examples, and implementer advice.
    #[serde(rename = "deprecated")]
    Deprecated,
    /// Display: External
    /// Definition: This is content that is managed outside the FHIR Specification, but included for implementer convenience.
    #[serde(rename = "external")]
    External,
}
impl StandardsStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: StandardsStatus::Draft,
            code: "draft",
            display: "Draft",
            definition: Some(
                "This portion of the specification is not considered to be complete enough or sufficiently reviewed to be safe for implementation. It may have known issues or still be in the \"in development\" stage. It is included in the publication as a place-holder, to solicit feedback from the implementation community and/or to give implementers some insight as to functionality likely to be included in future versions of the specification. Content at this level should only be implemented by the brave or desperate and is very much \"use at your own risk\". The content that is Draft that will usually be elevated to Trial Use once review and correction is complete after it has been subjected to ballot.",
            ),
        },
        Concept {
            value: StandardsStatus::Normative,
            code: "normative",
            display: "Normative",
            definition: Some(
                "This content has been subject to review and production implementation in a wide variety of environments. The content is considered to be stable and has been 'locked', subjecting it to FHIR Inter-version Compatibility Rules. While changes are possible, they are expected to be infrequent and are tightly constrained. Compatibility Rules.",
            ),
        },
        Concept {
            value: StandardsStatus::TrialUse,
            code: "trial-use",
            display: "Trial-Use",
            definition: Some(
                "This content has been well reviewed and is considered by the authors to be ready for use in production systems. It has been subjected to ballot and approved as an official standard. However, it has not yet seen widespread use in production across the full spectrum of environments it is intended to be used in. In some cases, there may be documented known issues that require implementation experience to determine appropriate resolutions for. Future versions of FHIR may make significant changes to Trial Use content that are not compatible with previously published content.",
            ),
        },
        Concept {
            value: StandardsStatus::Informative,
            code: "informative",
            display: "Informative",
            definition: Some(
                "This portion of the specification is provided for implementer assistance, and does not make rules that implementers are required to follow. Typical examples of this content in the FHIR specification are tables of contents, registries, examples, and implementer advice.",
            ),
        },
        Concept {
            value: StandardsStatus::Deprecated,
            code: "deprecated",
            display: "Deprecated",
            definition: Some(
                "This portion of the specification is provided for implementer assistance, and does not make rules that implementers are required to follow. Typical examples of this content in the FHIR specification are tables of contents, registries, examples, and implementer advice.",
            ),
        },
        Concept {
            value: StandardsStatus::External,
            code: "external",
            display: "External",
            definition: Some(
                "This is content that is managed outside the FHIR Specification, but included for implementer convenience.",
            ),
        },
    ];
}
impl CodeSystem for StandardsStatus {
    const URL: &'static str = "http://hl7.org/fhir/standards-status";
    const NAME: &'static str = "StandardsStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            StandardsStatus::Draft => "draft",
            StandardsStatus::Normative => "normative",
            StandardsStatus::TrialUse => "trial-use",
            StandardsStatus::Informative => "informative",
            StandardsStatus::Deprecated => "deprecated",
            StandardsStatus::External => "external",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "draft" => Ok(StandardsStatus::Draft),
            "normative" => Ok(StandardsStatus::Normative),
            "trial-use" => Ok(StandardsStatus::TrialUse),
            "informative" => Ok(StandardsStatus::Informative),
            "deprecated" => Ok(StandardsStatus::Deprecated),
            "external" => Ok(StandardsStatus::External),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for StandardsStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for StandardsStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for StandardsStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
