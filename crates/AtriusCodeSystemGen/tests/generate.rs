use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use atrius_code_system_gen::codegen::{render_code_system, render_mod_rs};
use atrius_code_system_gen::{GeneratorConfig, SkipReason, generate, plan, read_bundle};
use atrius_fhir_lib::FhirVersion;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/bundle.json")
}

fn config(output: &Path, include: &[&str]) -> GeneratorConfig {
    GeneratorConfig {
        input: fixture(),
        output: output.to_path_buf(),
        fhir_version: FhirVersion::R4,
        include: include.iter().map(|s| s.to_string()).collect(),
    }
}

fn rs_files(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".rs"))
        .collect()
}

#[test]
fn writes_one_module_per_enumerated_code_system() {
    let dir = tempfile::tempdir().unwrap();
    let summary = generate(&config(dir.path(), &[])).unwrap();

    assert_eq!(
        summary.module_names(),
        ["observation_status", "quantity_comparator", "request_priority"]
    );
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].reference, "http://unitsofmeasure.org");
    assert_eq!(summary.skipped[0].reason, SkipReason::NoConcepts);

    assert_eq!(
        rs_files(dir.path()),
        BTreeSet::from([
            "mod.rs".to_string(),
            "observation_status.rs".to_string(),
            "quantity_comparator.rs".to_string(),
            "request_priority.rs".to_string(),
        ])
    );

    let comparator = fs::read_to_string(dir.path().join("quantity_comparator.rs")).unwrap();
    assert!(comparator.starts_with("// @generated by AtriusCodeSystemGen\n// DO NOT EDIT MANUALLY\n"));
    assert!(comparator.contains("use crate::terminology::{CodeError, CodeSystem, Concept};"));
    assert!(comparator.contains("QuantityComparator::Le => \"<=\""));
    assert!(comparator.contains("\"<=\" => Ok(QuantityComparator::Le)"));
    assert!(comparator.contains("/// Used for ranges."));
    assert!(!comparator.contains('\r'));
    syn::parse_file(&comparator).unwrap();

    let mod_rs = fs::read_to_string(dir.path().join("mod.rs")).unwrap();
    assert!(mod_rs.contains("pub mod request_priority;"));
    assert!(mod_rs.contains("CodeSystemOps::of::<observation_status::ObservationStatus>(),"));
    assert!(!mod_rs.contains("ucum"));
}

#[test]
fn nested_concepts_and_display_fallback() {
    let dir = tempfile::tempdir().unwrap();
    generate(&config(dir.path(), &[])).unwrap();

    let src = fs::read_to_string(dir.path().join("observation_status.rs")).unwrap();
    let final_at = src.find("ObservationStatus::Final =>").unwrap();
    let amended_at = src.find("ObservationStatus::Amended =>").unwrap();
    let corrected_at = src.find("ObservationStatus::Corrected =>").unwrap();
    assert!(final_at < amended_at && amended_at < corrected_at);

    // no display: the code stands in
    assert!(src.contains("display: \"unknown\""));
    assert!(src.contains("/// Comment: Value of last resort."));
}

#[test]
fn generation_is_deterministic() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    generate(&config(a.path(), &[])).unwrap();
    generate(&config(b.path(), &[])).unwrap();

    for name in rs_files(a.path()) {
        let left = fs::read_to_string(a.path().join(&name)).unwrap();
        let right = fs::read_to_string(b.path().join(&name)).unwrap();
        assert_eq!(left, right, "{name} differs between runs");
    }
}

#[test]
fn include_filter_limits_output() {
    let dir = tempfile::tempdir().unwrap();
    let summary = generate(&config(
        dir.path(),
        &["http://hl7.org/fhir/request-priority"],
    ))
    .unwrap();

    assert_eq!(summary.module_names(), ["request_priority"]);
    assert_eq!(
        rs_files(dir.path()),
        BTreeSet::from(["mod.rs".to_string(), "request_priority.rs".to_string()])
    );
}

#[test]
fn empty_selection_and_missing_input_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(&config(dir.path(), &["http://example.org/none"])).unwrap_err();
    assert!(err.to_string().contains("no enumerated CodeSystems"));

    let missing = GeneratorConfig {
        input: dir.path().join("nope.json"),
        ..config(dir.path(), &[])
    };
    assert!(generate(&missing).unwrap_err().to_string().contains("not found"));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    let err = read_bundle(&broken).unwrap_err();
    assert!(format!("{err:#}").contains("failed parsing JSON bundle"));
}

/// The checked-in R4 tables are exactly what the generator renders from the
/// checked-in bundle.
#[test]
fn checked_in_r4_tables_match_the_bundle() {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let bundle = read_bundle(&manifest.join("resources/R4/codesystems.json")).unwrap();
    let summary = plan(bundle.code_systems(), &[]);
    assert_eq!(summary.modules.len(), 38);

    let generated_dir = manifest.join("../AtriusFhir/src/r4/terminology/code_systems");
    let mut expected: BTreeSet<String> = summary
        .module_names()
        .iter()
        .map(|m| format!("{m}.rs"))
        .collect();
    expected.insert("mod.rs".to_string());
    assert_eq!(rs_files(&generated_dir), expected);

    for module in &summary.modules {
        let rendered = render_code_system(module).unwrap();
        let checked_in =
            fs::read_to_string(generated_dir.join(format!("{}.rs", module.module))).unwrap();
        assert_eq!(
            checked_in, rendered,
            "{}.rs is stale; rerun AtriusCodeSystemGen",
            module.module
        );
    }

    let mod_rs = fs::read_to_string(generated_dir.join("mod.rs")).unwrap();
    assert_eq!(
        mod_rs,
        render_mod_rs(&summary.modules, FhirVersion::R4),
        "mod.rs is stale; rerun AtriusCodeSystemGen"
    );
}
