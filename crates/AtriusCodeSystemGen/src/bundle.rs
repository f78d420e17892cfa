//! JSON models for the input Bundle.
//!
//! Only the parts of `Bundle` and `CodeSystem` the generator reads are modelled;
//! unknown fields and non-CodeSystem entries are ignored.

use serde::Deserialize;

const CONCEPT_COMMENTS_URL: &str =
    "http://hl7.org/fhir/StructureDefinition/codesystem-concept-comments";

#[derive(Debug, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

#[derive(Debug, Deserialize)]
pub struct BundleEntry {
    #[serde(rename = "fullUrl")]
    pub full_url: Option<String>,
    pub resource: Option<Resource>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    CodeSystem(CodeSystem),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CodeSystem {
    pub id: Option<String>,
    pub url: Option<String>,
    pub version: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub concept: Vec<Concept>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Concept {
    pub code: String,
    pub display: Option<String>,
    pub definition: Option<String>,
    #[serde(default)]
    pub extension: Vec<Extension>,
    /// Child concepts (`is-a` hierarchy)
    #[serde(default)]
    pub concept: Vec<Concept>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Extension {
    pub url: String,
    #[serde(rename = "valueString")]
    pub value_string: Option<String>,
}

/// A concept after flattening, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatConcept {
    pub code: String,
    pub display: String,
    pub definition: Option<String>,
    pub comments: Vec<String>,
}

impl Bundle {
    /// All CodeSystem resources, in entry order.
    pub fn code_systems(self) -> Vec<CodeSystem> {
        self.entry
            .into_iter()
            .filter_map(|e| match e.resource {
                Some(Resource::CodeSystem(cs)) => Some(cs),
                _ => None,
            })
            .collect()
    }
}

impl Concept {
    fn comments(&self) -> Vec<String> {
        self.extension
            .iter()
            .filter(|e| e.url == CONCEPT_COMMENTS_URL)
            .filter_map(|e| e.value_string.clone())
            .collect()
    }
}

impl CodeSystem {
    /// Flattens the concept hierarchy depth-first, parent before children.
    ///
    /// A code seen twice keeps its first occurrence. A missing display falls
    /// back to the code itself.
    pub fn flat_concepts(&self) -> Vec<FlatConcept> {
        fn walk(nodes: &[Concept], out: &mut Vec<FlatConcept>) {
            for c in nodes {
                if !out.iter().any(|f| f.code == c.code) {
                    out.push(FlatConcept {
                        code: c.code.clone(),
                        display: c
                            .display
                            .clone()
                            .filter(|d| !d.trim().is_empty())
                            .unwrap_or_else(|| c.code.clone()),
                        definition: c.definition.clone().filter(|d| !d.trim().is_empty()),
                        comments: c.comments(),
                    });
                }
                walk(&c.concept, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.concept, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_code_system_entries_are_ignored() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "entry": [
                {"fullUrl": "http://hl7.org/fhir/ValueSet/x", "resource": {"resourceType": "ValueSet", "url": "x"}},
                {"resource": {"resourceType": "CodeSystem", "id": "a", "url": "http://example.org/a"}},
                {"request": {"method": "GET"}}
            ]
        }))
        .unwrap();

        let systems = bundle.code_systems();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].id.as_deref(), Some("a"));
    }

    #[test]
    fn flattening_is_depth_first_and_deduplicates() {
        let cs: CodeSystem = serde_json::from_value(json!({
            "url": "http://example.org/intent",
            "concept": [
                {"code": "plan", "display": "Plan"},
                {"code": "order", "display": "Order", "concept": [
                    {"code": "original-order"},
                    {"code": "filler-order", "concept": [{"code": "instance-order", "display": "Instance Order"}]}
                ]},
                {"code": "plan", "display": "Plan again"},
                {"code": "option", "display": " ", "definition": "",
                 "extension": [{"url": CONCEPT_COMMENTS_URL, "valueString": "rarely used"}]}
            ]
        }))
        .unwrap();

        let flat = cs.flat_concepts();
        let codes: Vec<&str> = flat.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(
            codes,
            ["plan", "order", "original-order", "filler-order", "instance-order", "option"]
        );
        assert_eq!(flat[0].display, "Plan");
        assert_eq!(flat[2].display, "original-order");
        assert_eq!(flat[5].display, "option");
        assert_eq!(flat[5].definition, None);
        assert_eq!(flat[5].comments, ["rarely used"]);
    }
}
