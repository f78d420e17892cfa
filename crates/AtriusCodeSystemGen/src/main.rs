//! `atrius-code-system-gen`: regenerates the typed code-system modules.
//!
//! ```text
//!     --input <PATH>              FHIR Bundle of CodeSystems [env: ATRIUS_CODESYSTEMS_INPUT]
//!     --output <DIR>              Output directory [env: ATRIUS_CODESYSTEMS_OUTPUT]
//!     --fhir-version <VERSION>    FHIR version to generate for [default: R4]
//!     --include <URL>             Only generate this CodeSystem (repeatable)
//!     --log-level <LEVEL>         Log level [default: info]
//! ```
//!
//! Without `--input`/`--output`, the bundle is read from
//! `crates/AtriusCodeSystemGen/resources/<version>/codesystems.json` and the
//! modules are written into `crates/AtriusFhir/src/<version>/terminology/code_systems`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use atrius_code_system_gen::{GeneratorConfig, generate};
use atrius_fhir_lib::FhirVersion;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "atrius-code-system-gen",
    version,
    about = "Generate typed FHIR code systems from a Bundle of CodeSystem resources"
)]
struct Args {
    /// FHIR Bundle (JSON) containing CodeSystem resources
    #[arg(long, env = "ATRIUS_CODESYSTEMS_INPUT")]
    input: Option<PathBuf>,

    /// Directory the generated modules are written into
    #[arg(long, env = "ATRIUS_CODESYSTEMS_OUTPUT")]
    output: Option<PathBuf>,

    /// FHIR version to generate for
    #[arg(long, value_enum, default_value_t = FhirVersion::default())]
    fhir_version: FhirVersion,

    /// Canonical URL of a CodeSystem to generate (repeatable; default: all)
    #[arg(long = "include", value_name = "URL")]
    include: Vec<String>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = format!("atrius_code_system_gen={}", args.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .init();

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let input = args.input.unwrap_or_else(|| {
        manifest_dir
            .join("resources")
            .join(args.fhir_version.as_str())
            .join("codesystems.json")
    });

    let output = match args.output {
        Some(dir) => dir,
        None => manifest_dir
            .parent()
            .context("expected crates/AtriusCodeSystemGen to have a parent directory")?
            .join("AtriusFhir")
            .join("src")
            .join(args.fhir_version.module_name())
            .join("terminology")
            .join("code_systems"),
    };

    info!(input = %input.display(), output = %output.display(), "generating code systems");

    let summary = generate(&GeneratorConfig {
        input,
        output,
        fhir_version: args.fhir_version,
        include: args.include,
    })?;

    for skipped in &summary.skipped {
        info!(code_system = %skipped.reference, reason = ?skipped.reason, "skipped");
    }
    Ok(())
}
