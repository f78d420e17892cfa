// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: ContactPointSystem
/// Canonical URL: http://hl7.org/fhir/contact-point-system
/// Version: 4.0.1
/// Title: ContactPointSystem
/// Status: active
///
/// Telecommunications form for contact point.
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
pub enum ContactPointSystem {
    /// Display: Phone
    /// Definition: The value is a telephone number used for voice calls.
    #[serde(rename = "phone")]
    Phone,
    /// Display: Fax
    /// Definition: The value is a fax machine.
    #[serde(rename = "fax")]
    Fax,
    /// Display: Email
    /// Definition: The value is an email address.
    #[serde(rename = "email")]
    Email,
    /// Display: Pager
    /// Definition: The value is a pager number.
    #[serde(rename = "pager")]
    Pager,
    /// Display: URL
    /// Definition: A contact that is not a phone, fax, pager or email address and is expressed as a URL.
    #[serde(rename = "url")]
    Url,
    /// Display: SMS
    /// Definition: A contact that can be used for sending an sms message.
    #[serde(rename = "sms")]
    Sms,
    /// Display: Other
    /// Definition: A contact that is not a phone, fax, page or email address and is not expressible as a URL.
    #[serde(rename = "other")]
    Other,
}
impl ContactPointSystem {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: ContactPointSystem::Phone,
            code: "phone",
            display: "Phone",
            definition: Some("The value is a telephone number used for voice calls."),
        },
        Concept {
            value: ContactPointSystem::Fax,
            code: "fax",
            display: "Fax",
            definition: Some("The value is a fax machine."),
        },
        Concept {
            value: ContactPointSystem::Email,
            code: "email",
            display: "Email",
            definition: Some("The value is an email address."),
        },
        Concept {
            value: ContactPointSystem::Pager,
            code: "pager",
            display: "Pager",
            definition: Some("The value is a pager number."),
        },
        Concept {
            value: ContactPointSystem::Url,
            code: "url",
            display: "URL",
            definition: Some(
                "A contact that is not a phone, fax, pager or email address and is expressed as a URL.",
            ),
        },
        Concept {
            value: ContactPointSystem::Sms,
            code: "sms",
            display: "SMS",
            definition: Some("A contact that can be used for sending an sms message."),
        },
        Concept {
            value: ContactPointSystem::Other,
            code: "other",
            display: "Other",
            definition: Some(
                "A contact that is not a phone, fax, page or email address and is not expressible as a URL.",
            ),
        },
    ];
}
impl CodeSystem for ContactPointSystem {
    const URL: &'static str = "http://hl7.org/fhir/contact-point-system";
    const NAME: &'static str = "ContactPointSystem";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            ContactPointSystem::Phone => "phone",
            ContactPointSystem::Fax => "fax",
            ContactPointSystem::Email => "email",
            ContactPointSystem::Pager => "pager",
            ContactPointSystem::Url => "url",
            ContactPointSystem::Sms => "sms",
            ContactPointSystem::Other => "other",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "phone" => Ok(ContactPointSystem::Phone),
            "fax" => Ok(ContactPointSystem::Fax),
            "email" => Ok(ContactPointSystem::Email),
            "pager" => Ok(ContactPointSystem::Pager),
            "url" => Ok(ContactPointSystem::Url),
            "sms" => Ok(ContactPointSystem::Sms),
            "other" => Ok(ContactPointSystem::Other),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for ContactPointSystem {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for ContactPointSystem {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for ContactPointSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
