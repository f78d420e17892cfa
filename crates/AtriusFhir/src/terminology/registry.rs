//! Runtime lookup of code systems by canonical URL.
//!
//! The generated `code_systems::ALL` slice holds one [`CodeSystemOps`] per
//! generated enum, so `(system, code)` pairs can be checked without knowing
//! the Rust type at compile time.

use super::code_system::CodeSystem;

/// Function pointers for one code system.
#[derive(Debug, Clone, Copy)]
pub struct CodeSystemOps {
    pub url: &'static str,
    pub name: &'static str,
    pub version: Option<&'static str>,
    pub is_valid_code: fn(&str) -> bool,
    pub codes: fn() -> Vec<&'static str>,
    pub display_of: fn(&str) -> Option<&'static str>,
}

impl CodeSystemOps {
    pub const fn of<S: CodeSystem>() -> Self {
        CodeSystemOps {
            url: S::URL,
            name: S::NAME,
            version: S::VERSION,
            is_valid_code: S::is_valid_code,
            codes: S::codes,
            display_of: S::display_of,
        }
    }
}

/// Strips a `|version` suffix from a canonical reference.
pub fn strip_version(url: &str) -> &str {
    url.split_once('|').map_or(url, |(base, _)| base)
}

/// Finds the entry whose URL matches `url`, ignoring any `|version` suffix.
pub fn find_by_url<'a>(ops: &'a [CodeSystemOps], url: &str) -> Option<&'a CodeSystemOps> {
    let url = strip_version(url);
    ops.iter().find(|o| o.url == url)
}

/// True when `url` names a known code system and `code` is one of its codes.
pub fn validate_code(ops: &[CodeSystemOps], url: &str, code: &str) -> bool {
    find_by_url(ops, url).is_some_and(|o| (o.is_valid_code)(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::terminology::code_systems::{AdministrativeGender, EncounterStatus};

    static OPS: [CodeSystemOps; 2] = [
        CodeSystemOps::of::<AdministrativeGender>(),
        CodeSystemOps::of::<EncounterStatus>(),
    ];

    #[test]
    fn lookup_ignores_version_suffix() {
        let ops = find_by_url(&OPS, "http://hl7.org/fhir/administrative-gender|4.0.1").unwrap();
        assert_eq!(ops.name, "AdministrativeGender");
        assert_eq!(ops.version, Some("4.0.1"));
        assert!(find_by_url(&OPS, "http://hl7.org/fhir/unknown").is_none());
    }

    #[test]
    fn function_pointers_dispatch_to_the_table() {
        let ops = find_by_url(&OPS, "http://hl7.org/fhir/encounter-status").unwrap();
        assert!((ops.is_valid_code)("onleave"));
        assert!(!(ops.is_valid_code)("Onleave"));
        assert_eq!((ops.display_of)("in-progress"), Some("In Progress"));
        assert_eq!((ops.codes)().first(), Some(&"planned"));

        assert!(validate_code(&OPS, "http://hl7.org/fhir/encounter-status", "finished"));
        assert!(!validate_code(&OPS, "http://hl7.org/fhir/encounter-status", "done"));
        assert!(!validate_code(&OPS, "http://example.org", "finished"));
    }
}
