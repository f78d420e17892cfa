// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: RequestIntent
/// Canonical URL: http://hl7.org/fhir/request-intent
/// Version: 4.0.1
/// Title: RequestIntent
/// Status: draft
///
/// Codes indicating the degree of authority/intentionality associated with a request.
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
pub enum RequestIntent {
    /// Display: Proposal
    /// Definition: The request is a suggestion made by someone/something that does not have an intention to ensure it occurs and without providing an authorization to act.
    #[serde(rename = "proposal")]
    Proposal,
    /// Display: Plan
    /// Definition: The request represents an intention to ensure something occurs without providing an authorization for others to act.
    #[serde(rename = "plan")]
    Plan,
    /// Display: Directive
    /// Definition: The request represents a legally binding instruction authored by a Patient or RelatedPerson.
    #[serde(rename = "directive")]
    Directive,
    /// Display: Order
    /// Definition: The request represents a request/demand and authorization for action by a Practitioner.
    #[serde(rename = "order")]
    Order,
    /// Display: Original Order
    /// Definition: The request represents an original authorization for action.
    #[serde(rename = "original-order")]
    OriginalOrder,
    /// Display: Reflex Order
    /// Definition: The request represents an automatically generated supplemental authorization for action based on a parent authorization together with initial results of the action taken against that parent authorization.
    #[serde(rename = "reflex-order")]
    ReflexOrder,
    /// Display: Filler Order
    /// Definition: The request represents the view of an authorization instantiated by a fulfilling system representing the details of the fulfiller's intention to act upon a submitted order.
    #[serde(rename = "filler-order")]
    FillerOrder,
    /// Display: Instance Order
    /// Definition: An order created in fulfillment of a broader order that represents the authorization for a single activity occurrence.
    #[serde(rename = "instance-order")]
    InstanceOrder,
    /// Display: Option
    /// Definition: The request represents a component or option for a RequestGroup that establishes timing, conditionality and/or other constraints among a set of requests.
    #[serde(rename = "option")]
    Option,
}
impl RequestIntent {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: RequestIntent::Proposal,
            code: "proposal",
            display: "Proposal",
            definition: Some(
                "The request is a suggestion made by someone/something that does not have an intention to ensure it occurs and without providing an authorization to act.",
            ),
        },
        Concept {
            value: RequestIntent::Plan,
            code: "plan",
            display: "Plan",
            definition: Some(
                "The request represents an intention to ensure something occurs without providing an authorization for others to act.",
            ),
        },
        Concept {
            value: RequestIntent::Directive,
            code: "directive",
            display: "Directive",
            definition: Some(
                "The request represents a legally binding instruction authored by a Patient or RelatedPerson.",
            ),
        },
        Concept {
            value: RequestIntent::Order,
            code: "order",
            display: "Order",
            definition: Some(
                "The request represents a request/demand and authorization for action by a Practitioner.",
            ),
        },
        Concept {
            value: RequestIntent::OriginalOrder,
            code: "original-order",
            display: "Original Order",
            definition: Some(
                "The request represents an original authorization for action.",
            ),
        },
        Concept {
            value: RequestIntent::ReflexOrder,
            code: "reflex-order",
            display: "Reflex Order",
            definition: Some(
                "The request represents an automatically generated supplemental authorization for action based on a parent authorization together with initial results of the action taken against that parent authorization.",
            ),
        },
        Concept {
            value: RequestIntent::FillerOrder,
            code: "filler-order",
            display: "Filler Order",
            definition: Some(
                "The request represents the view of an authorization instantiated by a fulfilling system representing the details of the fulfiller's intention to act upon a submitted order.",
            ),
        },
        Concept {
            value: RequestIntent::InstanceOrder,
            code: "instance-order",
            display: "Instance Order",
            definition: Some(
                "An order created in fulfillment of a broader order that represents the authorization for a single activity occurrence.",
            ),
        },
        Concept {
            value: RequestIntent::Option,
            code: "option",
            display: "Option",
            definition: Some(
                "The request represents a component or option for a RequestGroup that establishes timing, conditionality and/or other constraints among a set of requests.",
            ),
        },
    ];
}
impl CodeSystem for RequestIntent {
    const URL: &'static str = "http://hl7.org/fhir/request-intent";
    const NAME: &'static str = "RequestIntent";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            RequestIntent::Proposal => "proposal",
            RequestIntent::Plan => "plan",
            RequestIntent::Directive => "directive",
            RequestIntent::Order => "order",
            RequestIntent::OriginalOrder => "original-order",
            RequestIntent::ReflexOrder => "reflex-order",
            RequestIntent::FillerOrder => "filler-order",
            RequestIntent::InstanceOrder => "instance-order",
            RequestIntent::Option => "option",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "proposal" => Ok(RequestIntent::Proposal),
            "plan" => Ok(RequestIntent::Plan),
            "directive" => Ok(RequestIntent::Directive),
            "order" => Ok(RequestIntent::Order),
            "original-order" => Ok(RequestIntent::OriginalOrder),
            "reflex-order" => Ok(RequestIntent::ReflexOrder),
            "filler-order" => Ok(RequestIntent::FillerOrder),
            "instance-order" => Ok(RequestIntent::InstanceOrder),
            "option" => Ok(RequestIntent::Option),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for RequestIntent {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for RequestIntent {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for RequestIntent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
