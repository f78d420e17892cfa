// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: HTTPVerb
/// Canonical URL: http://hl7.org/fhir/http-verb
/// Version: 4.0.1
/// Title: HTTPVerb
/// Status: active
///
/// HTTP verbs (in the HTTP command line). See [HTTP rfc](https://tools.ietf.org/html/rfc7231) for details.
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
pub enum HTTPVerb {
    /// Display: GET
    /// Definition: HTTP GET Command.
    #[serde(rename = "GET")]
    Get,
    /// Display: HEAD
    /// Definition: HTTP HEAD Command.
    #[serde(rename = "HEAD")]
    Head,
    /// Display: POST
    /// Definition: HTTP POST Command.
    #[serde(rename = "POST")]
    Post,
    /// Display: PUT
    /// Definition: HTTP PUT Command.
    #[serde(rename = "PUT")]
    Put,
    /// Display: DELETE
    /// Definition: HTTP DELETE Command.
    #[serde(rename = "DELETE")]
    Delete,
    /// Display: PATCH
    /// Definition: HTTP PATCH Command.
    #[serde(rename = "PATCH")]
    Patch,
}
impl HTTPVerb {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: HTTPVerb::Get,
            code: "GET",
            display: "GET",
            definition: Some("HTTP GET Command."),
        },
        Concept {
            value: HTTPVerb::Head,
            code: "HEAD",
            display: "HEAD",
            definition: Some("HTTP HEAD Command."),
        },
        Concept {
            value: HTTPVerb::Post,
            code: "POST",
            display: "POST",
            definition: Some("HTTP POST Command."),
        },
        Concept {
            value: HTTPVerb::Put,
            code: "PUT",
            display: "PUT",
            definition: Some("HTTP PUT Command."),
        },
        Concept {
            value: HTTPVerb::Delete,
            code: "DELETE",
            display: "DELETE",
            definition: Some("HTTP DELETE Command."),
        },
        Concept {
            value: HTTPVerb::Patch,
            code: "PATCH",
            display: "PATCH",
            definition: Some("HTTP PATCH Command."),
        },
    ];
}
impl CodeSystem for HTTPVerb {
    const URL: &'static str = "http://hl7.org/fhir/http-verb";
    const NAME: &'static str = "HTTPVerb";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            HTTPVerb::Get => "GET",
            HTTPVerb::Head => "HEAD",
            HTTPVerb::Post => "POST",
            HTTPVerb::Put => "PUT",
            HTTPVerb::Delete => "DELETE",
            HTTPVerb::Patch => "PATCH",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "GET" => Ok(HTTPVerb::Get),
            "HEAD" => Ok(HTTPVerb::Head),
            "POST" => Ok(HTTPVerb::Post),
            "PUT" => Ok(HTTPVerb::Put),
            "DELETE" => Ok(HTTPVerb::Delete),
            "PATCH" => Ok(HTTPVerb::Patch),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for HTTPVerb {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for HTTPVerb {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for HTTPVerb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
