//! `Coded<S>`: an immutable coded value bound to one code system.
//!
//! This is the one generic value object every terminology shares. It carries the
//! optional element `id` and `extension`s of a FHIR `code` primitive, and a value
//! that can only ever be a member of `S`.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::datatypes::{has_data_absent_reason, Code, Coding, Extension};
use crate::element::Element;

use super::code_system::CodeSystem;
use super::error::{CodeError, Result};
use super::syntax::check_id;

/// A FHIR `code` element whose value is constrained to code system `S`.
///
/// Equality and hashing are structural over `(id, extension, value)`.
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_lib::r4::terminology::code_systems::RequestIntent;
/// use atrius_fhir_lib::terminology::Coded;
///
/// let intent = Coded::<RequestIntent>::try_from_code("order").unwrap();
/// assert_eq!(intent, Coded::of(RequestIntent::Order));
/// assert_eq!(intent.code(), Some("order"));
/// assert!(Coded::<RequestIntent>::try_from_code("command").is_err());
/// assert_eq!(Coded::<RequestIntent>::from_optional_code(None), Ok(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coded<S: CodeSystem> {
    id: Option<String>,
    extension: Option<Vec<Extension>>,
    value: Option<S>,
}

impl<S: CodeSystem> Coded<S> {
    /// A bare coded value with no `id` or extensions.
    pub fn of(value: S) -> Self {
        Coded {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    /// Looks up `code` in `S`.
    pub fn try_from_code(code: &str) -> Result<Self> {
        S::try_from_code(code).map(Self::of)
    }

    /// An absent input yields `Ok(None)`; a present one must be a member of `S`.
    pub fn from_optional_code(code: Option<&str>) -> Result<Option<Self>> {
        Ok(S::from_optional_code(code)?.map(Self::of))
    }

    pub fn builder() -> CodedBuilder<S> {
        CodedBuilder::default()
    }

    /// A builder pre-populated with this value's fields.
    pub fn to_builder(&self) -> CodedBuilder<S> {
        CodedBuilder {
            id: self.id.clone(),
            extension: self.extension.clone().unwrap_or_default(),
            value: self.value,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        self.extension.as_deref().unwrap_or(&[])
    }

    pub fn value(&self) -> Option<S> {
        self.value
    }

    /// The wire-format code, if a value is present.
    pub fn code(&self) -> Option<&'static str> {
        self.value.map(|v| v.as_code())
    }

    pub fn system(&self) -> &'static str {
        S::URL
    }

    /// No value, and a `data-absent-reason` among the extensions.
    pub fn is_data_absent(&self) -> bool {
        self.value.is_none() && has_data_absent_reason(self.extension())
    }

    /// Converts into the untyped FHIR `code` primitive, keeping `id` and extensions.
    pub fn to_code(&self) -> Code {
        Element {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.code().map(str::to_string),
        }
    }

    /// A `Coding` for the value, or `None` when there is no value.
    pub fn to_coding(&self) -> Option<Coding> {
        self.value.map(S::to_coding)
    }

    /// Validates an untyped `code` primitive, keeping its `id` and extensions.
    pub fn try_from_code_element(code: &Code) -> Result<Self> {
        let mut builder = CodedBuilder::<S>::default();
        if let Some(id) = &code.id {
            builder = builder.id(id.clone());
        }
        builder = builder.extensions(code.extensions().iter().cloned());
        if let Some(v) = code.value.as_deref() {
            builder = builder.value_code(v)?;
        }
        builder.build()
    }
}

impl<S: CodeSystem> From<S> for Coded<S> {
    fn from(value: S) -> Self {
        Coded::of(value)
    }
}

impl<S: CodeSystem> fmt::Display for Coded<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or(""))
    }
}

/// Builder for [`Coded`].
///
/// `build` validates the element id and requires a value or at least one extension.
#[derive(Debug, Clone)]
pub struct CodedBuilder<S: CodeSystem> {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<S>,
}

impl<S: CodeSystem> Default for CodedBuilder<S> {
    fn default() -> Self {
        CodedBuilder {
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }
}

impl<S: CodeSystem> CodedBuilder<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    /// Appends every extension in `extensions`.
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn value(mut self, value: S) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the value from its wire-format code.
    pub fn value_code(mut self, code: &str) -> Result<Self> {
        self.value = Some(S::try_from_code(code)?);
        Ok(self)
    }

    pub fn build(self) -> Result<Coded<S>> {
        if let Some(id) = self.id.as_deref() {
            check_id(id)?;
        }
        if self.value.is_none() && self.extension.is_empty() {
            return Err(CodeError::MissingValueOrExtension { system: S::URL });
        }

        Ok(Coded {
            id: self.id,
            extension: if self.extension.is_empty() {
                None
            } else {
                Some(self.extension)
            },
            value: self.value,
        })
    }
}

impl<S: CodeSystem> Serialize for Coded<S> {
    fn serialize<Se>(&self, serializer: Se) -> std::result::Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        self.to_code().serialize(serializer)
    }
}

impl<'de, S: CodeSystem> Deserialize<'de> for Coded<S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Code::deserialize(deserializer)?;
        Coded::try_from_code_element(&code).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::terminology::code_systems::{AdministrativeGender, EncounterStatus};
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equal_codes_share_hash() {
        let a = Coded::of(EncounterStatus::Finished);
        let b = Coded::<EncounterStatus>::try_from_code("finished").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = Coded::of(EncounterStatus::Cancelled);
        assert_ne!(a, c);
    }

    #[test]
    fn id_and_extension_take_part_in_equality() {
        let bare = Coded::of(AdministrativeGender::Female);
        let with_id = bare.to_builder().id("g1").build().unwrap();
        assert_ne!(bare, with_id);
        assert_eq!(with_id.id(), Some("g1"));

        let with_ext = bare
            .to_builder()
            .extension(Extension::new("http://example.org/note").with_value_string("x"))
            .build()
            .unwrap();
        assert_ne!(bare, with_ext);
        assert_eq!(with_ext.extension().len(), 1);

        // the source value is untouched by its builder
        assert_eq!(bare.id(), None);
    }

    #[test]
    fn builder_rejects_bad_id_and_empty_element() {
        let err = Coded::<EncounterStatus>::builder()
            .id("not valid!")
            .value(EncounterStatus::Planned)
            .build()
            .unwrap_err();
        assert!(matches!(err, CodeError::InvalidId(_)));

        let err = Coded::<EncounterStatus>::builder().build().unwrap_err();
        assert_eq!(
            err,
            CodeError::MissingValueOrExtension {
                system: "http://hl7.org/fhir/encounter-status"
            }
        );
    }

    #[test]
    fn builder_value_code_validates() {
        assert!(Coded::<EncounterStatus>::builder().value_code("onleave").is_ok());
        let err = Coded::<EncounterStatus>::builder()
            .value_code("on-leave")
            .unwrap_err();
        assert_eq!(
            err,
            CodeError::unknown_code("http://hl7.org/fhir/encounter-status", "on-leave")
        );
    }

    #[test]
    fn data_absent_element_without_value() {
        let absent = Coded::<AdministrativeGender>::builder()
            .extension(Extension::data_absent_reason("asked-declined"))
            .build()
            .unwrap();
        assert!(absent.is_data_absent());
        assert_eq!(absent.value(), None);
        assert_eq!(absent.to_string(), "");

        let annotated = absent
            .to_builder()
            .extension(Extension::new("http://example.org/note").with_value_string("n"))
            .build()
            .unwrap();
        assert!(annotated.is_data_absent());
        assert!(!Coded::of(AdministrativeGender::Male).is_data_absent());
    }

    #[test]
    fn serde_bare_and_extended() {
        let bare = Coded::of(EncounterStatus::InProgress);
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!("in-progress"));

        let extended = bare.to_builder().id("s1").build().unwrap();
        let v = serde_json::to_value(&extended).unwrap();
        assert_eq!(v, json!({"id": "s1", "value": "in-progress"}));

        let back: Coded<EncounterStatus> = serde_json::from_value(v).unwrap();
        assert_eq!(back, extended);
    }

    #[test]
    fn serde_rejects_unknown_codes() {
        let err = serde_json::from_value::<Coded<EncounterStatus>>(json!("in_progress"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("in_progress"), "{err}");
        assert!(err.contains("http://hl7.org/fhir/encounter-status"), "{err}");
    }

    #[test]
    fn to_coding_carries_system_version_display() {
        let coding = Coded::of(AdministrativeGender::Male).to_coding().unwrap();
        assert_eq!(coding.system_value(), Some("http://hl7.org/fhir/administrative-gender"));
        assert_eq!(coding.code_value(), Some("male"));
        assert_eq!(coding.display_value(), Some("Male"));
        assert_eq!(
            coding.version.and_then(|v| v.value).as_deref(),
            Some("4.0.1")
        );
    }
}
