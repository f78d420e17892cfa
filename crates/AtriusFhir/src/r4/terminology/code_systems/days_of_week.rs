// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: DaysOfWeek
/// Canonical URL: http://hl7.org/fhir/days-of-week
/// Version: 4.0.1
/// Title: DaysOfWeek
/// Status: active
///
/// The days of the week.
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
pub enum DaysOfWeek {
    /// Display: Monday
    /// Definition: Monday.
    #[serde(rename = "mon")]
    Mon,
    /// Display: Tuesday
    /// Definition: Tuesday.
    #[serde(rename = "tue")]
    Tue,
    /// Display: Wednesday
    /// Definition: Wednesday.
    #[serde(rename = "wed")]
    Wed,
    /// Display: Thursday
    /// Definition: Thursday.
    #[serde(rename = "thu")]
    Thu,
    /// Display: Friday
    /// Definition: Friday.
    #[serde(rename = "fri")]
    Fri,
    /// Display: Saturday
    /// Definition: Saturday.
    #[serde(rename = "sat")]
    Sat,
    /// Display: Sunday
    /// Definition: Sunday.
    #[serde(rename = "sun")]
    Sun,
}
impl DaysOfWeek {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: DaysOfWeek::Mon,
            code: "mon",
            display: "Monday",
            definition: Some("Monday."),
        },
        Concept {
            value: DaysOfWeek::Tue,
            code: "tue",
            display: "Tuesday",
            definition: Some("Tuesday."),
        },
        Concept {
            value: DaysOfWeek::Wed,
            code: "wed",
            display: "Wednesday",
            definition: Some("Wednesday."),
        },
        Concept {
            value: DaysOfWeek::Thu,
            code: "thu",
            display: "Thursday",
            definition: Some("Thursday."),
        },
        Concept {
            value: DaysOfWeek::Fri,
            code: "fri",
            display: "Friday",
            definition: Some("Friday."),
        },
        Concept {
            value: DaysOfWeek::Sat,
            code: "sat",
            display: "Saturday",
            definition: Some("Saturday."),
        },
        Concept {
            value: DaysOfWeek::Sun,
            code: "sun",
            display: "Sunday",
            definition: Some("Sunday."),
        },
    ];
}
impl CodeSystem for DaysOfWeek {
    const URL: &'static str = "http://hl7.org/fhir/days-of-week";
    const NAME: &'static str = "DaysOfWeek";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            DaysOfWeek::Mon => "mon",
            DaysOfWeek::Tue => "tue",
            DaysOfWeek::Wed => "wed",
            DaysOfWeek::Thu => "thu",
            DaysOfWeek::Fri => "fri",
            DaysOfWeek::Sat => "sat",
            DaysOfWeek::Sun => "sun",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "mon" => Ok(DaysOfWeek::Mon),
            "tue" => Ok(DaysOfWeek::Tue),
            "wed" => Ok(DaysOfWeek::Wed),
            "thu" => Ok(DaysOfWeek::Thu),
            "fri" => Ok(DaysOfWeek::Fri),
            "sat" => Ok(DaysOfWeek::Sat),
            "sun" => Ok(DaysOfWeek::Sun),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for DaysOfWeek {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for DaysOfWeek {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for DaysOfWeek {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
