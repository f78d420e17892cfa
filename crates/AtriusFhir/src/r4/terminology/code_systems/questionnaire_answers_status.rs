// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: QuestionnaireResponseStatus
/// Canonical URL: http://hl7.org/fhir/questionnaire-answers-status
/// Version: 4.0.1
/// Title: QuestionnaireResponseStatus
/// Status: draft
///
/// Lifecycle status of the questionnaire response.
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
pub enum QuestionnaireResponseStatus {
    /// Display: In Progress
    /// Definition: This QuestionnaireResponse has been partially filled out with answers but changes or additions are still expected to be made to it.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Display: Completed
    /// Definition: This QuestionnaireResponse has been filled out with answers and the current content is regarded as definitive.
    #[serde(rename = "completed")]
    Completed,
    /// Display: Amended
    /// Definition: This QuestionnaireResponse has been filled out with answers, then marked as complete, yet changes or additions have been made to it afterwards.
    #[serde(rename = "amended")]
    Amended,
    /// Display: Entered in Error
    /// Definition: This QuestionnaireResponse was entered in error and voided.
    #[serde(rename = "entered-in-error")]
    EnteredInError,
    /// Display: Stopped
    /// Definition: This QuestionnaireResponse has been partially filled out with answers but has been abandoned. It is unknown whether changes or additions are expected to be made to it.
    #[serde(rename = "stopped")]
    Stopped,
}
impl QuestionnaireResponseStatus {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: QuestionnaireResponseStatus::InProgress,
            code: "in-progress",
            display: "In Progress",
            definition: Some(
                "This QuestionnaireResponse has been partially filled out with answers but changes or additions are still expected to be made to it.",
            ),
        },
        Concept {
            value: QuestionnaireResponseStatus::Completed,
            code: "completed",
            display: "Completed",
            definition: Some(
                "This QuestionnaireResponse has been filled out with answers and the current content is regarded as definitive.",
            ),
        },
        Concept {
            value: QuestionnaireResponseStatus::Amended,
            code: "amended",
            display: "Amended",
            definition: Some(
                "This QuestionnaireResponse has been filled out with answers, then marked as complete, yet changes or additions have been made to it afterwards.",
            ),
        },
        Concept {
            value: QuestionnaireResponseStatus::EnteredInError,
            code: "entered-in-error",
            display: "Entered in Error",
            definition: Some(
                "This QuestionnaireResponse was entered in error and voided.",
            ),
        },
        Concept {
            value: QuestionnaireResponseStatus::Stopped,
            code: "stopped",
            display: "Stopped",
            definition: Some(
                "This QuestionnaireResponse has been partially filled out with answers but has been abandoned. It is unknown whether changes or additions are expected to be made to it.",
            ),
        },
    ];
}
impl CodeSystem for QuestionnaireResponseStatus {
    const URL: &'static str = "http://hl7.org/fhir/questionnaire-answers-status";
    const NAME: &'static str = "QuestionnaireResponseStatus";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            QuestionnaireResponseStatus::InProgress => "in-progress",
            QuestionnaireResponseStatus::Completed => "completed",
            QuestionnaireResponseStatus::Amended => "amended",
            QuestionnaireResponseStatus::EnteredInError => "entered-in-error",
            QuestionnaireResponseStatus::Stopped => "stopped",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "in-progress" => Ok(QuestionnaireResponseStatus::InProgress),
            "completed" => Ok(QuestionnaireResponseStatus::Completed),
            "amended" => Ok(QuestionnaireResponseStatus::Amended),
            "entered-in-error" => Ok(QuestionnaireResponseStatus::EnteredInError),
            "stopped" => Ok(QuestionnaireResponseStatus::Stopped),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for QuestionnaireResponseStatus {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for QuestionnaireResponseStatus {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for QuestionnaireResponseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
