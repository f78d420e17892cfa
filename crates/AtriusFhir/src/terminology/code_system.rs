//! The `CodeSystem` trait implemented by every generated terminology enum.
//!
//! A generated code system supplies its constant metadata, its concept table and
//! the two lookups (`as_code`, `try_from_code`). Everything else a caller needs
//! (absent-input handling, enumeration, conversion into FHIR datatypes) is
//! provided here once, for all terminologies.

use std::fmt::Debug;
use std::hash::Hash;

use crate::datatypes::{Code, CodeableConcept, Coding, FhirString, Uri};
use crate::element::Element;

use super::error::{CodeError, Result};

/// One entry of a code system's concept table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Concept<S: 'static> {
    /// Symbolic value
    pub value: S,
    /// Wire-format code
    pub code: &'static str,
    /// Human-readable display text
    pub display: &'static str,
    /// Formal definition, when the CodeSystem publishes one
    pub definition: Option<&'static str>,
}

/// A closed, fixed set of codes identified by a canonical URL.
///
/// Implementations are generated by `atrius-code-system-gen`; see
/// [`crate::r4::terminology::code_systems`].
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_lib::r4::terminology::code_systems::EncounterStatus;
/// use atrius_fhir_lib::terminology::{CodeError, CodeSystem};
///
/// assert_eq!(EncounterStatus::InProgress.as_code(), "in-progress");
/// assert_eq!(EncounterStatus::try_from_code("in-progress"), Ok(EncounterStatus::InProgress));
/// assert!(matches!(
///     EncounterStatus::try_from_code("in progress"),
///     Err(CodeError::UnknownCode { .. })
/// ));
/// assert_eq!(EncounterStatus::from_optional_code(None), Ok(None));
/// ```
pub trait CodeSystem: Sized + Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Canonical URL of the code system
    const URL: &'static str;
    /// Computer-friendly name
    const NAME: &'static str;
    /// Business version of the CodeSystem resource the table was generated from
    const VERSION: Option<&'static str>;

    /// Every concept, in declaration order.
    fn concepts() -> &'static [Concept<Self>];

    /// The table entry for this value.
    fn concept(&self) -> &'static Concept<Self>;

    /// The wire-format code for this value.
    fn as_code(&self) -> &'static str;

    /// Looks up a code; fails with [`CodeError::UnknownCode`] when it is not in the table.
    fn try_from_code(code: &str) -> Result<Self>;

    /// Like [`CodeSystem::try_from_code`], but an absent input is an absent result.
    fn from_optional_code(code: Option<&str>) -> Result<Option<Self>> {
        code.map(Self::try_from_code).transpose()
    }

    fn is_valid_code(code: &str) -> bool {
        Self::try_from_code(code).is_ok()
    }

    /// Iterates the values in declaration order.
    fn all() -> impl Iterator<Item = Self> {
        Self::concepts().iter().map(|c| c.value)
    }

    /// The codes in declaration order.
    fn codes() -> Vec<&'static str> {
        Self::concepts().iter().map(|c| c.code).collect()
    }

    fn display(&self) -> &'static str {
        self.concept().display
    }

    fn definition(&self) -> Option<&'static str> {
        self.concept().definition
    }

    /// Display text for a code string, if the code is in the table.
    fn display_of(code: &str) -> Option<&'static str> {
        Self::try_from_code(code).ok().map(|v| v.display())
    }

    /// Converts into a FHIR `code` primitive.
    fn to_code(self) -> Code {
        Element::from_value(self.as_code().to_string())
    }

    /// Converts into a `Coding` with `system`, `version`, `code` and `display` set.
    fn to_coding(self) -> Coding {
        let system: Uri = Element::from_value(Self::URL.to_string());
        let display: FhirString = Element::from_value(self.display().to_string());

        Coding {
            system: Some(system),
            version: Self::VERSION.map(|v| Element::from_value(v.to_string())),
            code: Some(self.to_code()),
            display: Some(display),
            ..Default::default()
        }
    }

    /// Converts into a `CodeableConcept` with a single coding.
    fn to_codeable_concept(self) -> CodeableConcept {
        CodeableConcept {
            coding: Some(vec![self.to_coding()]),
            ..Default::default()
        }
    }

    /// Parses from a FHIR `code` primitive.
    fn try_from_code_element(code: &Code) -> Result<Self> {
        match code.value.as_deref() {
            Some(v) => Self::try_from_code(v),
            None => Err(CodeError::MissingCode { system: Self::URL }),
        }
    }

    /// Parses from a `Coding`, requiring its system to be this code system.
    fn try_from_coding(coding: &Coding) -> Result<Self> {
        match coding.system_value() {
            Some(system) if system == Self::URL => {}
            Some(other) => {
                return Err(CodeError::SystemMismatch {
                    expected: Self::URL,
                    found: other.to_string(),
                });
            }
            None => {
                return Err(CodeError::SystemMismatch {
                    expected: Self::URL,
                    found: String::new(),
                });
            }
        }

        match coding.code_value() {
            Some(code) => Self::try_from_code(code),
            None => Err(CodeError::MissingCode { system: Self::URL }),
        }
    }
}
