// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: SearchEntryMode
/// Canonical URL: http://hl7.org/fhir/search-entry-mode
/// Version: 4.0.1
/// Title: SearchEntryMode
/// Status: active
///
/// Why an entry is in the result set - whether it's included as a match or because of an _include requirement, or to convey information or warning information about the search process.
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
pub enum SearchEntryMode {
    /// Display: Match
    /// Definition: This resource matched the search specification.
    #[serde(rename = "match")]
    Match,
    /// Display: Include
    /// Definition: This resource is returned because it is referred to from another resource in the search set.
    #[serde(rename = "include")]
    Include,
    /// Display: Outcome
    /// Definition: An OperationOutcome that provides additional information about the processing of a search.
    #[serde(rename = "outcome")]
    Outcome,
}
impl SearchEntryMode {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: SearchEntryMode::Match,
            code: "match",
            display: "Match",
            definition: Some("This resource matched the search specification."),
        },
        Concept {
            value: SearchEntryMode::Include,
            code: "include",
            display: "Include",
            definition: Some(
                "This resource is returned because it is referred to from another resource in the search set.",
            ),
        },
        Concept {
            value: SearchEntryMode::Outcome,
            code: "outcome",
            display: "Outcome",
            definition: Some(
                "An OperationOutcome that provides additional information about the processing of a search.",
            ),
        },
    ];
}
impl CodeSystem for SearchEntryMode {
    const URL: &'static str = "http://hl7.org/fhir/search-entry-mode";
    const NAME: &'static str = "SearchEntryMode";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            SearchEntryMode::Match => "match",
            SearchEntryMode::Include => "include",
            SearchEntryMode::Outcome => "outcome",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "match" => Ok(SearchEntryMode::Match),
            "include" => Ok(SearchEntryMode::Include),
            "outcome" => Ok(SearchEntryMode::Outcome),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for SearchEntryMode {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for SearchEntryMode {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for SearchEntryMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
