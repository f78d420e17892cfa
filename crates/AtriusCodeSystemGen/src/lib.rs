//! AtriusCodeSystemGen
//!
//! Generates **typed FHIR code systems** into the `AtriusFhir` crate so that every
//! enumerated CodeSystem becomes one Rust enum plus one static concept table,
//! plugged into the generic `atrius_fhir_lib::terminology::CodeSystem` trait.
//!
//! ## Inputs
//! - `resources/<version>/codesystems.json`: a FHIR Bundle whose entries include
//!   `CodeSystem` resources. Other resource types are ignored.
//!
//! ## Outputs
//! Written into `crates/AtriusFhir/src/<version>/terminology/code_systems`:
//! - `<module>.rs`: one module per enumerated CodeSystem
//! - `mod.rs`: `pub mod` + `pub use`, the `ALL` registry and `code_system_by_url`
//!
//! CodeSystems without concepts (`content = not-present`, grammar-based systems)
//! are skipped and reported in the [`GenerationSummary`].
//!
//! ## Determinism
//! Generation uses stable ordering (`BTreeMap` keyed by module name) and name
//! deconfliction so that rebuilds produce identical output.

pub mod bundle;
pub mod codegen;
pub mod naming;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use atrius_fhir_lib::FhirVersion;
use atrius_fhir_lib::terminology::check_code;
use tracing::{debug, info, warn};

use crate::bundle::{Bundle, CodeSystem, FlatConcept};
use crate::naming::{code_system_enum_name, code_system_module_name, deconflict};

/// Where to read from, where to write to, and what to generate.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub fhir_version: FhirVersion,
    /// Canonical URLs to generate; empty means every enumerated CodeSystem.
    pub include: Vec<String>,
}

/// A CodeSystem that will become one generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCodeSystem {
    pub module: String,
    pub type_name: String,
    /// `CodeSystem.name`, else the type name
    pub name: String,
    pub url: String,
    pub version: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub concepts: Vec<FlatConcept>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingUrl,
    MissingId,
    NoConcepts,
    NotIncluded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCodeSystem {
    /// Canonical URL, or the id when there is no URL
    pub reference: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Generated modules, ordered by module name
    pub modules: Vec<PlannedCodeSystem>,
    pub skipped: Vec<SkippedCodeSystem>,
}

impl GenerationSummary {
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.module.as_str()).collect()
    }
}

/// Decides which CodeSystems become modules and names them.
///
/// Pure: reads nothing from disk, so it is what the tests exercise.
pub fn plan(code_systems: Vec<CodeSystem>, include: &[String]) -> GenerationSummary {
    let include: BTreeSet<&str> = include.iter().map(String::as_str).collect();
    let mut by_module: BTreeMap<String, PlannedCodeSystem> = BTreeMap::new();
    let mut type_names: BTreeSet<String> = BTreeSet::new();
    let mut skipped = Vec::new();

    for cs in code_systems {
        let reference = cs
            .url
            .clone()
            .or_else(|| cs.id.clone())
            .unwrap_or_default();
        let mut skip = |reason: SkipReason| {
            debug!(code_system = %reference, ?reason, "skipping CodeSystem");
            skipped.push(SkippedCodeSystem {
                reference: reference.clone(),
                reason,
            });
        };

        let Some(url) = cs.url.clone() else {
            skip(SkipReason::MissingUrl);
            continue;
        };
        if !include.is_empty() && !include.contains(url.as_str()) {
            skip(SkipReason::NotIncluded);
            continue;
        }
        let (Some(base_module), Some(base_type)) =
            (code_system_module_name(&cs), code_system_enum_name(&cs))
        else {
            skip(SkipReason::MissingId);
            continue;
        };
        let concepts: Vec<FlatConcept> = cs
            .flat_concepts()
            .into_iter()
            .filter(|c| match check_code(&c.code) {
                Ok(()) => true,
                Err(e) => {
                    warn!(code_system = %url, code = %c.code, error = %e, "dropping concept");
                    false
                }
            })
            .collect();
        if concepts.is_empty() {
            skip(SkipReason::NoConcepts);
            continue;
        }

        let module = deconflict(&base_module, |m| by_module.contains_key(m));
        let type_name = deconflict(&base_type, |t| type_names.contains(t));
        type_names.insert(type_name.clone());

        by_module.insert(
            module.clone(),
            PlannedCodeSystem {
                module,
                name: cs.name.clone().unwrap_or_else(|| type_name.clone()),
                type_name,
                url,
                version: cs.version,
                title: cs.title,
                status: cs.status,
                description: cs.description,
                concepts,
            },
        );
    }

    GenerationSummary {
        modules: by_module.into_values().collect(),
        skipped,
    }
}

/// Reads and parses a Bundle from disk.
pub fn read_bundle(path: &Path) -> Result<Bundle> {
    if !path.exists() {
        return Err(anyhow!("code system bundle not found at: {}", path.display()));
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed reading {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed parsing JSON bundle {}", path.display()))
}

/// Writes every planned module and the `mod.rs` registry into `dir`.
pub fn write_modules(
    summary: &GenerationSummary,
    dir: &Path,
    fhir_version: FhirVersion,
) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output dir {}", dir.display()))?;

    for system in &summary.modules {
        let src = codegen::render_code_system(system)?;
        let path = dir.join(format!("{}.rs", system.module));
        fs::write(&path, src).with_context(|| format!("failed writing {}", path.display()))?;
        info!(
            module = %system.module,
            type_name = %system.type_name,
            concepts = system.concepts.len(),
            "generated code system"
        );
    }

    let path = dir.join("mod.rs");
    fs::write(&path, codegen::render_mod_rs(&summary.modules, fhir_version))
        .with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

/// Reads the bundle, plans the modules and writes them.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let bundle = read_bundle(&config.input)?;
    let summary = plan(bundle.code_systems(), &config.include);

    if summary.modules.is_empty() {
        return Err(anyhow!(
            "no enumerated CodeSystems found in {}",
            config.input.display()
        ));
    }

    write_modules(&summary, &config.output, config.fhir_version)?;

    info!(
        fhir_version = %config.fhir_version,
        generated = summary.modules.len(),
        skipped = summary.skipped.len(),
        output = %config.output.display(),
        "code system generation finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn code_systems(v: serde_json::Value) -> Vec<CodeSystem> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn plan_orders_by_module_and_reports_skips() {
        let summary = plan(
            code_systems(json!([
                {"id": "request-status", "url": "http://hl7.org/fhir/request-status", "name": "RequestStatus",
                 "concept": [{"code": "draft"}]},
                {"id": "ucum", "url": "http://unitsofmeasure.org", "content": "not-present"},
                {"id": "account-status", "url": "http://hl7.org/fhir/account-status", "name": "AccountStatus",
                 "concept": [{"code": "active"}]},
                {"id": "no-url", "concept": [{"code": "x"}]},
                {"id": "blank", "url": "http://example.org/blank", "concept": [{"code": " padded"}]},
                {"url": "http://example.org/no-id", "concept": [{"code": "x"}]}
            ])),
            &[],
        );

        assert_eq!(summary.module_names(), ["account_status", "request_status"]);
        assert_eq!(
            summary.skipped,
            vec![
                SkippedCodeSystem {
                    reference: "http://unitsofmeasure.org".to_string(),
                    reason: SkipReason::NoConcepts
                },
                SkippedCodeSystem {
                    reference: "no-url".to_string(),
                    reason: SkipReason::MissingUrl
                },
                SkippedCodeSystem {
                    reference: "http://example.org/blank".to_string(),
                    reason: SkipReason::NoConcepts
                },
                SkippedCodeSystem {
                    reference: "http://example.org/no-id".to_string(),
                    reason: SkipReason::MissingId
                },
            ]
        );
    }

    #[test]
    fn concepts_with_malformed_codes_are_dropped() {
        let summary = plan(
            code_systems(json!([
                {"id": "mixed", "url": "http://example.org/mixed", "name": "Mixed",
                 "concept": [{"code": "ok"}, {"code": "two  spaces"}, {"code": "trailing "}, {"code": "fine too"}]}
            ])),
            &[],
        );
        let codes: Vec<&str> = summary.modules[0]
            .concepts
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, ["ok", "fine too"]);
    }

    #[test]
    fn include_filter_and_name_conflicts() {
        let systems = json!([
            {"id": "status", "url": "http://example.org/a", "name": "Status", "concept": [{"code": "a"}]},
            {"id": "status", "url": "http://example.org/b", "name": "Status", "concept": [{"code": "b"}]},
            {"id": "other", "url": "http://example.org/c", "name": "Other", "concept": [{"code": "c"}]}
        ]);

        let all = plan(code_systems(systems.clone()), &[]);
        let names: Vec<(&str, &str)> = all
            .modules
            .iter()
            .map(|m| (m.module.as_str(), m.type_name.as_str()))
            .collect();
        assert_eq!(
            names,
            [("other", "Other"), ("status", "Status"), ("status_2", "Status_2")]
        );

        let only_b = plan(
            code_systems(systems),
            &["http://example.org/b".to_string()],
        );
        assert_eq!(only_b.module_names(), ["status"]);
        assert_eq!(only_b.modules[0].url, "http://example.org/b");
        assert_eq!(only_b.skipped.len(), 2);
        assert!(only_b.skipped.iter().all(|s| s.reason == SkipReason::NotIncluded));
    }
}
