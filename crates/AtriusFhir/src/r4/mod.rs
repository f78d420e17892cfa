//! FHIR R4 (4.0.1) terminology.

pub mod terminology;
