//! Terminology bindings: checking a bound element against a code system.

use std::marker::PhantomData;

use crate::datatypes::{has_only_data_absent_reason, Code, CodeableConcept, Coding};

use super::code_system::CodeSystem;
use super::coded::Coded;
use super::syntax::ValidationConfig;

/// Implemented by code systems to provide membership checks for the FHIR
/// datatypes a binding can sit on (`Code`, `Coding`, `CodeableConcept`, `Coded`).
pub trait CodeSystemMembership<T> {
    fn contains(v: &T, config: &ValidationConfig) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingIssue {
    /// Definitive violation (required binding not satisfied).
    Error { message: String },
    /// Non-fatal issue (extensible/preferred binding not satisfied).
    Warning { message: String },
}

impl BindingIssue {
    pub fn message(&self) -> &str {
        match self {
            BindingIssue::Error { message } | BindingIssue::Warning { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, BindingIssue::Error { .. })
    }
}

/// A binding of some element to code system `S` with a given strength.
///
/// ```rust
/// use atrius_fhir_lib::Coding;
/// use atrius_fhir_lib::r4::terminology::code_systems::AdministrativeGender;
/// use atrius_fhir_lib::terminology::{Binding, BindingValidator};
///
/// let binding = Binding::<AdministrativeGender>::required();
/// let ok = Coding::new("http://hl7.org/fhir/administrative-gender", "female");
/// let bad = Coding::new("http://hl7.org/fhir/administrative-gender", "f");
/// assert!(binding.check(&ok).is_ok());
/// assert!(binding.check(&bad).unwrap_err().is_error());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binding<S> {
    strength: BindingStrength,
    config: ValidationConfig,
    _cs: PhantomData<S>,
}

impl<S> Binding<S> {
    pub fn new(strength: BindingStrength) -> Self {
        Self {
            strength,
            config: ValidationConfig::default(),
            _cs: PhantomData,
        }
    }

    pub fn required() -> Self {
        Self::new(BindingStrength::Required)
    }

    pub fn extensible() -> Self {
        Self::new(BindingStrength::Extensible)
    }

    pub fn preferred() -> Self {
        Self::new(BindingStrength::Preferred)
    }

    pub fn example() -> Self {
        Self::new(BindingStrength::Example)
    }

    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strength(&self) -> BindingStrength {
        self.strength
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

/// Binding validator for a particular bound datatype `T`.
pub trait BindingValidator<T> {
    fn check(&self, value: &T) -> Result<(), BindingIssue>;

    /// Checks every element, stopping at the first issue.
    fn check_all(&self, values: &[T]) -> Result<(), BindingIssue> {
        values.iter().try_for_each(|v| self.check(v))
    }
}

impl<S, T> BindingValidator<T> for Binding<S>
where
    S: CodeSystem + CodeSystemMembership<T>,
{
    fn check(&self, value: &T) -> Result<(), BindingIssue> {
        if S::contains(value, &self.config) {
            return Ok(());
        }

        tracing::debug!(
            system = S::URL,
            strength = ?self.strength,
            "binding not satisfied"
        );

        match self.strength {
            BindingStrength::Required => Err(BindingIssue::Error {
                message: format!("Required binding to {} violated", S::URL),
            }),
            BindingStrength::Extensible => Err(BindingIssue::Warning {
                message: format!("Extensible binding to {} not satisfied", S::URL),
            }),
            BindingStrength::Preferred => Err(BindingIssue::Warning {
                message: format!("Preferred binding to {} not satisfied", S::URL),
            }),
            BindingStrength::Example => Ok(()),
        }
    }
}

// Without extended validation, `Code` and `Coding` bindings are not checked.

impl<S: CodeSystem> CodeSystemMembership<Code> for S {
    fn contains(v: &Code, config: &ValidationConfig) -> bool {
        if !config.extended_codeable_concept_validation || has_only_data_absent_reason(v) {
            return true;
        }
        v.value.as_deref().is_some_and(S::is_valid_code)
    }
}

impl<S: CodeSystem> CodeSystemMembership<Coding> for S {
    fn contains(v: &Coding, config: &ValidationConfig) -> bool {
        if !config.extended_codeable_concept_validation || v.has_only_data_absent_reason() {
            return true;
        }
        match (v.system_value(), v.code_value()) {
            (Some(system), Some(code)) => system == S::URL && S::is_valid_code(code),
            _ => false,
        }
    }
}

impl<S: CodeSystem> CodeSystemMembership<CodeableConcept> for S {
    fn contains(v: &CodeableConcept, config: &ValidationConfig) -> bool {
        if config.extended_codeable_concept_validation {
            return v.has_only_data_absent_reason()
                || v.codings()
                    .iter()
                    .any(|c| <S as CodeSystemMembership<Coding>>::contains(c, config));
        }

        // Text-only concepts, or ones without a complete coding, are accepted.
        if !v.has_coding_with_system_and_code() {
            return true;
        }
        v.codings().iter().any(|c| match (c.system_value(), c.code_value()) {
            (Some(system), Some(code)) => system == S::URL && S::is_valid_code(code),
            _ => false,
        })
    }
}

impl<S: CodeSystem> CodeSystemMembership<Coded<S>> for S {
    fn contains(v: &Coded<S>, _config: &ValidationConfig) -> bool {
        v.value().is_some() || v.is_data_absent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::Extension;
    use crate::element::Element;
    use crate::r4::terminology::code_systems::{AdministrativeGender, EncounterStatus};

    const GENDER: &str = "http://hl7.org/fhir/administrative-gender";

    fn code(v: &str) -> Code {
        Element::from_value(v.to_string())
    }

    #[test]
    fn strength_maps_to_issue_kind() {
        let bad = code("nope");
        assert!(matches!(
            Binding::<AdministrativeGender>::required().check(&bad),
            Err(BindingIssue::Error { .. })
        ));
        assert!(matches!(
            Binding::<AdministrativeGender>::extensible().check(&bad),
            Err(BindingIssue::Warning { .. })
        ));
        assert!(matches!(
            Binding::<AdministrativeGender>::preferred().check(&bad),
            Err(BindingIssue::Warning { .. })
        ));
        assert_eq!(Binding::<AdministrativeGender>::example().check(&bad), Ok(()));
        assert_eq!(
            Binding::<AdministrativeGender>::required().check(&code("other")),
            Ok(())
        );
    }

    #[test]
    fn coding_system_must_match() {
        let binding = Binding::<AdministrativeGender>::required();
        assert!(binding.check(&Coding::new(GENDER, "male")).is_ok());
        assert!(
            binding
                .check(&Coding::new("http://hl7.org/fhir/encounter-status", "male"))
                .is_err()
        );

        let mut no_system = Coding::new(GENDER, "male");
        no_system.system = None;
        assert!(binding.check(&no_system).is_err());
    }

    #[test]
    fn data_absent_reason_passes() {
        let binding = Binding::<EncounterStatus>::required();
        let absent_code = Code {
            extension: Some(vec![Extension::data_absent_reason("unknown")]),
            ..Default::default()
        };
        assert!(binding.check(&absent_code).is_ok());

        let absent_coding = Coding {
            extension: Some(vec![Extension::data_absent_reason("unknown")]),
            ..Default::default()
        };
        assert!(binding.check(&absent_coding).is_ok());

        let no_reason = Code::default();
        assert!(binding.check(&no_reason).is_err());
    }

    #[test]
    fn data_absent_reason_beside_other_extensions() {
        let binding = Binding::<EncounterStatus>::required();
        let extensions = vec![
            Extension::data_absent_reason("unknown"),
            Extension::new("http://example.org/note").with_value_string("asked twice"),
        ];

        let absent_code = Code {
            extension: Some(extensions.clone()),
            ..Default::default()
        };
        assert!(binding.check(&absent_code).is_ok());

        let absent_coding = Coding {
            extension: Some(extensions.clone()),
            ..Default::default()
        };
        assert!(binding.check(&absent_coding).is_ok());

        let concept = CodeableConcept {
            coding: Some(vec![
                Coding::new("http://snomed.info/sct", "248152002"),
                absent_coding,
            ]),
            ..Default::default()
        };
        assert!(binding.check(&concept).is_ok());

        // a value is still checked even with the extension present
        let wrong_value = Code {
            extension: Some(extensions),
            ..code("bogus")
        };
        assert!(binding.check(&wrong_value).is_err());
    }

    #[test]
    fn lax_mode_skips_code_and_coding() {
        let lax = ValidationConfig {
            extended_codeable_concept_validation: false,
            ..Default::default()
        };
        let binding = Binding::<EncounterStatus>::required().with_config(lax);

        assert!(binding.check(&code("bogus")).is_ok());
        assert!(binding.check(&Code::default()).is_ok());
        assert!(
            binding
                .check(&Coding::new("http://example.org/other", "x"))
                .is_ok()
        );
        assert!(binding.check(&Coding::default()).is_ok());

        let strict = Binding::<EncounterStatus>::required();
        assert!(strict.check(&code("bogus")).is_err());
        assert!(strict.check(&Coding::new("http://example.org/other", "x")).is_err());
    }

    #[test]
    fn codeable_concept_modes() {
        let text_only = CodeableConcept {
            text: Some(Element::from_value("Woman".to_string())),
            ..Default::default()
        };
        let strict = Binding::<AdministrativeGender>::required();
        let lax = strict.with_config(ValidationConfig {
            extended_codeable_concept_validation: false,
            ..Default::default()
        });
        assert!(strict.check(&text_only).is_err());
        assert!(lax.check(&text_only).is_ok());

        let mixed = CodeableConcept {
            coding: Some(vec![
                Coding::new("http://snomed.info/sct", "248152002"),
                Coding::new(GENDER, "female"),
            ]),
            ..Default::default()
        };
        assert!(strict.check(&mixed).is_ok());
        assert!(lax.check(&mixed).is_ok());

        let foreign = CodeableConcept {
            coding: Some(vec![Coding::new("http://snomed.info/sct", "248152002")]),
            ..Default::default()
        };
        assert!(strict.check(&foreign).is_err());
        assert!(lax.check(&foreign).is_err());
    }

    #[test]
    fn check_all_reports_first_issue() {
        let binding = Binding::<EncounterStatus>::extensible();
        let values = vec![code("planned"), code("bogus"), code("worse")];
        let issue = binding.check_all(&values).unwrap_err();
        assert!(matches!(issue, BindingIssue::Warning { .. }));
        assert!(issue.message().contains("encounter-status"));
        assert!(binding.check_all(&values[..1]).is_ok());
    }

    #[test]
    fn coded_values_always_satisfy_their_own_system() {
        let binding = Binding::<EncounterStatus>::required();
        assert!(binding.check(&Coded::of(EncounterStatus::Arrived)).is_ok());

        let extension_only = Coded::<EncounterStatus>::builder()
            .extension(Extension::new("http://example.org/x").with_value_string("y"))
            .build()
            .unwrap();
        assert!(binding.check(&extension_only).is_err());
    }
}
