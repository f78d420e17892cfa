// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: BundleType
/// Canonical URL: http://hl7.org/fhir/bundle-type
/// Version: 4.0.1
/// Title: BundleType
/// Status: active
///
/// Indicates the purpose of a bundle - how it is intended to be used.
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
pub enum BundleType {
    /// Display: Document
    /// Definition: The bundle is a document. The first resource is a Composition.
    #[serde(rename = "document")]
    Document,
    /// Display: Message
    /// Definition: The bundle is a message. The first resource is a MessageHeader.
    #[serde(rename = "message")]
    Message,
    /// Display: Transaction
    /// Definition: The bundle is a transaction - intended to be processed by a server as an atomic commit.
    #[serde(rename = "transaction")]
    Transaction,
    /// Display: Transaction Response
    /// Definition: The bundle is a transaction response.
    #[serde(rename = "transaction-response")]
    TransactionResponse,
    /// Display: Batch
    /// Definition: The bundle is a set of actions - intended to be processed by a server as a group of independent actions.
    #[serde(rename = "batch")]
    Batch,
    /// Display: Batch Response
    /// Definition: The bundle is a batch response.
    #[serde(rename = "batch-response")]
    BatchResponse,
    /// Display: History List
    /// Definition: The bundle is a list of resources from a history interaction on a server.
    #[serde(rename = "history")]
    History,
    /// Display: Search Results
    /// Definition: The bundle is a list of resources returned as a result of a search/query interaction, operation, or message.
    #[serde(rename = "searchset")]
    Searchset,
    /// Display: Collection
    /// Definition: The bundle is a set of resources collected into a single package for ease of distribution.
    #[serde(rename = "collection")]
    Collection,
}
impl BundleType {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: BundleType::Document,
            code: "document",
            display: "Document",
            definition: Some(
                "The bundle is a document. The first resource is a Composition.",
            ),
        },
        Concept {
            value: BundleType::Message,
            code: "message",
            display: "Message",
            definition: Some(
                "The bundle is a message. The first resource is a MessageHeader.",
            ),
        },
        Concept {
            value: BundleType::Transaction,
            code: "transaction",
            display: "Transaction",
            definition: Some(
                "The bundle is a transaction - intended to be processed by a server as an atomic commit.",
            ),
        },
        Concept {
            value: BundleType::TransactionResponse,
            code: "transaction-response",
            display: "Transaction Response",
            definition: Some("The bundle is a transaction response."),
        },
        Concept {
            value: BundleType::Batch,
            code: "batch",
            display: "Batch",
            definition: Some(
                "The bundle is a set of actions - intended to be processed by a server as a group of independent actions.",
            ),
        },
        Concept {
            value: BundleType::BatchResponse,
            code: "batch-response",
            display: "Batch Response",
            definition: Some("The bundle is a batch response."),
        },
        Concept {
            value: BundleType::History,
            code: "history",
            display: "History List",
            definition: Some(
                "The bundle is a list of resources from a history interaction on a server.",
            ),
        },
        Concept {
            value: BundleType::Searchset,
            code: "searchset",
            display: "Search Results",
            definition: Some(
                "The bundle is a list of resources returned as a result of a search/query interaction, operation, or message.",
            ),
        },
        Concept {
            value: BundleType::Collection,
            code: "collection",
            display: "Collection",
            definition: Some(
                "The bundle is a set of resources collected into a single package for ease of distribution.",
            ),
        },
    ];
}
impl CodeSystem for BundleType {
    const URL: &'static str = "http://hl7.org/fhir/bundle-type";
    const NAME: &'static str = "BundleType";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            BundleType::Document => "document",
            BundleType::Message => "message",
            BundleType::Transaction => "transaction",
            BundleType::TransactionResponse => "transaction-response",
            BundleType::Batch => "batch",
            BundleType::BatchResponse => "batch-response",
            BundleType::History => "history",
            BundleType::Searchset => "searchset",
            BundleType::Collection => "collection",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "document" => Ok(BundleType::Document),
            "message" => Ok(BundleType::Message),
            "transaction" => Ok(BundleType::Transaction),
            "transaction-response" => Ok(BundleType::TransactionResponse),
            "batch" => Ok(BundleType::Batch),
            "batch-response" => Ok(BundleType::BatchResponse),
            "history" => Ok(BundleType::History),
            "searchset" => Ok(BundleType::Searchset),
            "collection" => Ok(BundleType::Collection),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for BundleType {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for BundleType {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for BundleType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
