//! Minimal FHIR datatypes needed to carry coded values.
//!
//! These mirror the shapes of the R4 `Extension`, `Coding` and `CodeableConcept`
//! datatypes closely enough for terminology work: the generated code systems
//! convert into them, and the binding checks read from them.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// FHIR `code` primitive.
pub type Code = Element<String, Extension>;
/// FHIR `uri` primitive.
pub type Uri = Element<String, Extension>;
/// FHIR `string` primitive.
pub type FhirString = Element<String, Extension>;
/// FHIR `boolean` primitive.
pub type Boolean = Element<bool, Extension>;

/// Canonical URL of the `data-absent-reason` extension.
pub const DATA_ABSENT_REASON_EXTENSION_URL: &str =
    "http://hl7.org/fhir/StructureDefinition/data-absent-reason";

/// FHIR `Extension`.
///
/// Only the `value[x]` choices that occur on coded elements are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_integer: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_coding: Option<Box<Coding>>,
}

impl Extension {
    pub fn new(url: impl Into<String>) -> Self {
        Extension {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_value_string(mut self, value: impl Into<String>) -> Self {
        self.value_string = Some(value.into());
        self
    }

    pub fn with_value_code(mut self, value: impl Into<String>) -> Self {
        self.value_code = Some(value.into());
        self
    }

    /// A `data-absent-reason` extension with the given reason code.
    pub fn data_absent_reason(reason: impl Into<String>) -> Self {
        Extension::new(DATA_ABSENT_REASON_EXTENSION_URL).with_value_code(reason)
    }

    pub fn is_data_absent_reason(&self) -> bool {
        self.url == DATA_ABSENT_REASON_EXTENSION_URL
    }
}

/// True when any of `extensions` is a `data-absent-reason` extension.
pub fn has_data_absent_reason(extensions: &[Extension]) -> bool {
    extensions.iter().any(Extension::is_data_absent_reason)
}

/// A primitive without a value that carries a `data-absent-reason` extension
/// in its place. Other extensions may sit alongside it.
pub fn has_only_data_absent_reason<V>(element: &Element<V, Extension>) -> bool {
    element.value.is_none() && has_data_absent_reason(element.extensions())
}

/// FHIR `Coding`: a reference to a code defined by a terminology system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<Uri>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<FhirString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Code>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<FhirString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<Boolean>,
}

impl Coding {
    /// Convenience constructor for a `(system, code)` pair.
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Coding {
            system: Some(Element::from_value(system.into())),
            code: Some(Element::from_value(code.into())),
            ..Default::default()
        }
    }

    pub fn system_value(&self) -> Option<&str> {
        self.system.as_ref().and_then(|s| s.value.as_deref())
    }

    pub fn code_value(&self) -> Option<&str> {
        self.code.as_ref().and_then(|c| c.value.as_deref())
    }

    pub fn display_value(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.value.as_deref())
    }

    /// Both `system` and `code` carry a value.
    pub fn has_system_and_code(&self) -> bool {
        self.system_value().is_some() && self.code_value().is_some()
    }

    /// No `system` and no `code`, with a `data-absent-reason` extension instead.
    pub fn has_only_data_absent_reason(&self) -> bool {
        self.system.is_none()
            && self.code.is_none()
            && has_data_absent_reason(self.extension.as_deref().unwrap_or(&[]))
    }
}

/// FHIR `CodeableConcept`: a concept that may be defined by one or more codings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<Vec<Coding>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<FhirString>,
}

impl CodeableConcept {
    pub fn codings(&self) -> &[Coding] {
        self.coding.as_deref().unwrap_or(&[])
    }

    pub fn has_coding_with_system_and_code(&self) -> bool {
        self.codings().iter().any(Coding::has_system_and_code)
    }

    /// Some coding stands in for an absent value.
    pub fn has_only_data_absent_reason(&self) -> bool {
        self.codings().iter().any(Coding::has_only_data_absent_reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coding_uses_camel_case_and_primitive_shorthand() {
        let mut coding = Coding::new("http://hl7.org/fhir/encounter-status", "planned");
        coding.user_selected = Some(Element::from_value(true));

        let v = serde_json::to_value(&coding).unwrap();
        assert_eq!(
            v,
            json!({
                "system": "http://hl7.org/fhir/encounter-status",
                "code": "planned",
                "userSelected": true
            })
        );

        let back: Coding = serde_json::from_value(v).unwrap();
        assert_eq!(back, coding);
    }

    #[test]
    fn data_absent_reason_detection() {
        let dar = Extension::data_absent_reason("unknown");
        let note = Extension::new("http://example.org/note").with_value_string("asked twice");
        assert!(has_data_absent_reason(&[dar.clone()]));
        assert!(has_data_absent_reason(&[note.clone(), dar.clone()]));
        assert!(!has_data_absent_reason(&[]));
        assert!(!has_data_absent_reason(&[note.clone()]));

        let absent = Code {
            extension: Some(vec![dar.clone(), note.clone()]),
            ..Default::default()
        };
        assert!(has_only_data_absent_reason(&absent));

        let present = Code {
            extension: Some(vec![dar.clone()]),
            ..Element::from_value("planned".to_string())
        };
        assert!(!has_only_data_absent_reason(&present));

        let coding = Coding {
            extension: Some(vec![note, dar]),
            ..Default::default()
        };
        assert!(coding.has_only_data_absent_reason());
        assert!(!Coding::new("http://example.org", "x").has_only_data_absent_reason());

        let cc = CodeableConcept {
            coding: Some(vec![Coding::new("http://example.org", "x"), coding]),
            ..Default::default()
        };
        assert!(cc.has_only_data_absent_reason());
        assert!(!CodeableConcept::default().has_only_data_absent_reason());
    }

    #[test]
    fn codeable_concept_text_only() {
        let cc: CodeableConcept = serde_json::from_value(json!({"text": "free text"})).unwrap();
        assert!(cc.codings().is_empty());
        assert!(!cc.has_coding_with_system_and_code());
        assert_eq!(cc.text.and_then(|t| t.value).as_deref(), Some("free text"));
    }
}
