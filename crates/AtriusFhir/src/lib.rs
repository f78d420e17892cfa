//! Strongly typed FHIR code systems.
//!
//! Every terminology is a closed set of string codes. The [`terminology`]
//! module holds the generic pieces shared by all of them (the
//! [`CodeSystem`](terminology::CodeSystem) trait, the
//! [`Coded`](terminology::Coded) value object, binding checks and the URL
//! registry); the per-release modules hold the generated tables.
//!
//! ```rust
//! use atrius_fhir_lib::r4::terminology::code_systems::EncounterStatus;
//! use atrius_fhir_lib::terminology::CodeSystem;
//!
//! let status = EncounterStatus::try_from_code("onleave").unwrap();
//! assert_eq!(status, EncounterStatus::Onleave);
//! assert_eq!(status.as_code(), "onleave");
//! assert!(EncounterStatus::try_from_code("on-leave").is_err());
//! ```

pub mod datatypes;
pub mod element;
pub mod fhir_version;
pub mod terminology;

#[cfg(feature = "R4")]
pub mod r4;

pub use datatypes::{Boolean, Code, CodeableConcept, Coding, Extension, FhirString, Uri};
pub use element::Element;
pub use fhir_version::FhirVersion;
