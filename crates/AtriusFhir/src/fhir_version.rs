use std::str::FromStr;

/// Enumeration of FHIR specification versions that terminology can be generated for.
///
/// The generated code-system tables record the business version of the
/// CodeSystem they came from (`CodeSystem::VERSION`); this enum names the
/// specification release the tables belong to and selects the output module
/// (`r4`, `r4b`, `r5`) when running the generator.
///
/// # Version Status
///
/// - **R4** (4.0.1): Normative version, widely adopted in production
/// - **R4B** (4.3.0): Intermediate release with additional features
/// - **R5** (5.0.0): Next major release with significant changes
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_lib::fhir_version::FhirVersion;
///
/// let version = FhirVersion::R4;
/// assert_eq!(version.as_str(), "R4");
/// assert_eq!(version.to_string(), "R4");
/// assert_eq!(version.version_number(), "4.0.1");
/// assert_eq!("r4b".parse::<FhirVersion>(), Ok(FhirVersion::R4B));
/// ```
///
/// # CLI Integration
///
/// This enum implements `clap::ValueEnum` for command-line argument parsing:
///
/// ```rust,no_run
/// use clap::Parser;
/// use atrius_fhir_lib::fhir_version::FhirVersion;
///
/// #[derive(Parser)]
/// struct Args {
///     #[arg(value_enum)]
///     version: FhirVersion,
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FhirVersion {
    /// FHIR 4.0.1 (normative) - The current normative version, and the default
    #[default]
    R4,
    /// FHIR 4.3.0 - Intermediate version with additional features
    R4B,
    /// FHIR 5.0.0 - Next major version with significant changes
    R5,
}

impl FhirVersion {
    /// Every known version, oldest first.
    pub const ALL: [FhirVersion; 3] = [FhirVersion::R4, FhirVersion::R4B, FhirVersion::R5];

    /// Returns the release label as used in FHIR documentation ("R4", "R5").
    pub fn as_str(&self) -> &'static str {
        match self {
            FhirVersion::R4 => "R4",
            FhirVersion::R4B => "R4B",
            FhirVersion::R5 => "R5",
        }
    }

    /// Returns the published version number of the release.
    pub fn version_number(&self) -> &'static str {
        match self {
            FhirVersion::R4 => "4.0.1",
            FhirVersion::R4B => "4.3.0",
            FhirVersion::R5 => "5.0.0",
        }
    }

    /// Rust module name the release's generated code lives under.
    pub fn module_name(&self) -> &'static str {
        match self {
            FhirVersion::R4 => "r4",
            FhirVersion::R4B => "r4b",
            FhirVersion::R5 => "r5",
        }
    }
}

impl std::fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string names no known FHIR version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown FHIR version: {0}")]
pub struct UnknownFhirVersion(pub String);

impl FromStr for FhirVersion {
    type Err = UnknownFhirVersion;

    /// Accepts release labels case-insensitively ("r4", "R4B") and version numbers ("4.0.1").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FhirVersion::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.version_number() == s)
            .ok_or_else(|| UnknownFhirVersion(s.to_string()))
    }
}

/// Implements `clap::ValueEnum` for command-line argument parsing.
///
/// ```rust,no_run
/// use clap::Parser;
/// use atrius_fhir_lib::fhir_version::FhirVersion;
///
/// #[derive(Parser)]
/// struct Args {
///     /// FHIR specification version to use
///     #[arg(long, value_enum, default_value_t = FhirVersion::default())]
///     fhir_version: FhirVersion,
/// }
/// ```
impl clap::ValueEnum for FhirVersion {
    fn value_variants<'a>() -> &'a [Self] {
        &FhirVersion::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_numbers() {
        assert_eq!("R4".parse::<FhirVersion>(), Ok(FhirVersion::R4));
        assert_eq!("r5".parse::<FhirVersion>(), Ok(FhirVersion::R5));
        assert_eq!("4.3.0".parse::<FhirVersion>(), Ok(FhirVersion::R4B));
        assert_eq!(
            "R6".parse::<FhirVersion>(),
            Err(UnknownFhirVersion("R6".to_string()))
        );
    }

    #[test]
    fn r4_is_the_default() {
        assert_eq!(FhirVersion::default(), FhirVersion::R4);
    }

    #[test]
    fn module_names_are_lowercase_labels() {
        for v in FhirVersion::ALL {
            assert_eq!(v.module_name(), v.as_str().to_ascii_lowercase());
        }
    }
}
