//! Version-independent terminology core.
//!
//! Generated code-system tables live under each release module
//! (e.g. [`crate::r4::terminology::code_systems`]) and plug into the types
//! defined here.

pub mod bindings;
pub mod code_system;
pub mod coded;
pub mod error;
pub mod registry;
pub mod syntax;

pub use bindings::{Binding, BindingIssue, BindingStrength, BindingValidator, CodeSystemMembership};
pub use code_system::{CodeSystem, Concept};
pub use coded::{Coded, CodedBuilder};
pub use error::{CodeError, Result};
pub use registry::CodeSystemOps;
pub use syntax::{check_code, check_id, check_string, ValidationConfig};
