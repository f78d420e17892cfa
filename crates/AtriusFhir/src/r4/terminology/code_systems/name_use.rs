// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: NameUse
/// Canonical URL: http://hl7.org/fhir/name-use
/// Version: 4.0.1
/// Title: NameUse
/// Status: active
///
/// The use of a human name.
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
pub enum NameUse {
    /// Display: Usual
    /// Definition: Known as/conventional/the one you normally use.
    #[serde(rename = "usual")]
    Usual,
    /// Display: Official
    /// Definition: The formal name as registered in an official (government) registry, but which name might not be commonly used. May be called "legal name".
    #[serde(rename = "official")]
    Official,
    /// Display: Temp
    /// Definition: A temporary name. Name.period can provide more detailed information.
    #[serde(rename = "temp")]
    Temp,
    /// Display: Nickname
    /// Definition: A name that is used to address the person in an informal manner, but is not part of their formal or usual name.
    #[serde(rename = "nickname")]
    Nickname,
    /// Display: Anonymous
    /// Definition: Anonymous assigned name, alias, or pseudonym (used to protect a person's identity for privacy reasons).
    #[serde(rename = "anonymous")]
    Anonymous,
    /// Display: Old
    /// Definition: This name is no longer in use (or was never correct, but retained for records).
    #[serde(rename = "old")]
    Old,
    /// Display: Name changed for Marriage
    /// Definition: A name used prior to changing name because of marriage. This name use is for use by applications that collect and store names that were used prior to a marriage.
    #[serde(rename = "maiden")]
    Maiden,
}
impl NameUse {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: NameUse::Usual,
            code: "usual",
            display: "Usual",
            definition: Some("Known as/conventional/the one you normally use."),
        },
        Concept {
            value: NameUse::Official,
            code: "official",
            display: "Official",
            definition: Some(
                "The formal name as registered in an official (government) registry, but which name might not be commonly used. May be called \"legal name\".",
            ),
        },
        Concept {
            value: NameUse::Temp,
            code: "temp",
            display: "Temp",
            definition: Some(
                "A temporary name. Name.period can provide more detailed information.",
            ),
        },
        Concept {
            value: NameUse::Nickname,
            code: "nickname",
            display: "Nickname",
            definition: Some(
                "A name that is used to address the person in an informal manner, but is not part of their formal or usual name.",
            ),
        },
        Concept {
            value: NameUse::Anonymous,
            code: "anonymous",
            display: "Anonymous",
            definition: Some(
                "Anonymous assigned name, alias, or pseudonym (used to protect a person's identity for privacy reasons).",
            ),
        },
        Concept {
            value: NameUse::Old,
            code: "old",
            display: "Old",
            definition: Some(
                "This name is no longer in use (or was never correct, but retained for records).",
            ),
        },
        Concept {
            value: NameUse::Maiden,
            code: "maiden",
            display: "Name changed for Marriage",
            definition: Some(
                "A name used prior to changing name because of marriage. This name use is for use by applications that collect and store names that were used prior to a marriage.",
            ),
        },
    ];
}
impl CodeSystem for NameUse {
    const URL: &'static str = "http://hl7.org/fhir/name-use";
    const NAME: &'static str = "NameUse";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            NameUse::Usual => "usual",
            NameUse::Official => "official",
            NameUse::Temp => "temp",
            NameUse::Nickname => "nickname",
            NameUse::Anonymous => "anonymous",
            NameUse::Old => "old",
            NameUse::Maiden => "maiden",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "usual" => Ok(NameUse::Usual),
            "official" => Ok(NameUse::Official),
            "temp" => Ok(NameUse::Temp),
            "nickname" => Ok(NameUse::Nickname),
            "anonymous" => Ok(NameUse::Anonymous),
            "old" => Ok(NameUse::Old),
            "maiden" => Ok(NameUse::Maiden),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for NameUse {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for NameUse {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for NameUse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
