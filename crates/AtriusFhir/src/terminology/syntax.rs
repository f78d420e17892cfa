//! Grammar checks for the FHIR `code`, `id` and `string` primitives.
//!
//! `code`: `[^\s]+(\s[^\s]+)*`
//! `id`: `[A-Za-z0-9\-\.]{1,64}`
//! `string`: `[ \r\n\t\S]+`, at most 1 MiB

use serde::Deserialize;

use super::error::{CodeError, Result};

const MAX_ID_LENGTH: usize = 64;
const MAX_STRING_LENGTH: usize = 1024 * 1024;

/// Switches for the terminology validation layer.
///
/// Deserializable so it can sit inside a larger application config file.
///
/// ```rust
/// use atrius_fhir_lib::terminology::ValidationConfig;
///
/// let config: ValidationConfig =
///     serde_json::from_str(r#"{"checkControlChars": false}"#).unwrap();
/// assert!(!config.check_control_chars);
/// assert!(config.extended_codeable_concept_validation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    /// Reject code points below 32 other than tab, CR and LF.
    pub check_control_chars: bool,
    /// Validate `Code` and `Coding` bindings, and every `Coding` of a
    /// `CodeableConcept`. When off, only concepts that carry a
    /// `(system, code)` pair are checked.
    pub extended_codeable_concept_validation: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            check_control_chars: true,
            extended_codeable_concept_validation: true,
        }
    }
}

impl ValidationConfig {
    /// `code` grammar: no leading/trailing whitespace, single spaces only.
    pub fn check_code(&self, s: &str) -> Result<()> {
        let (Some(first), Some(last)) = (s.chars().next(), s.chars().last()) else {
            return Err(CodeError::InvalidSyntax(
                "code value must not be empty".to_string(),
            ));
        };
        if first.is_whitespace() {
            return Err(CodeError::InvalidSyntax(format!(
                "code value '{s}' must begin with a non-whitespace character"
            )));
        }
        if last.is_whitespace() {
            return Err(CodeError::InvalidSyntax(format!(
                "code value '{s}' must end with a non-whitespace character"
            )));
        }

        let mut previous_is_space = false;
        for ch in s.chars() {
            if ch.is_whitespace() {
                if ch != ' ' {
                    return Err(CodeError::InvalidSyntax(format!(
                        "code value '{s}' must not contain whitespace other than a single space"
                    )));
                }
                if previous_is_space {
                    return Err(CodeError::InvalidSyntax(format!(
                        "code value '{s}' must not contain consecutive spaces"
                    )));
                }
                previous_is_space = true;
            } else {
                self.check_control_char(s, ch)?;
                previous_is_space = false;
            }
        }
        Ok(())
    }

    /// `string` grammar: at least one non-whitespace character.
    pub fn check_string(&self, s: &str) -> Result<()> {
        if s.len() > MAX_STRING_LENGTH {
            return Err(CodeError::InvalidSyntax(format!(
                "string value length {} is greater than maximum allowed length {MAX_STRING_LENGTH}",
                s.len()
            )));
        }

        let mut visible = 0usize;
        for ch in s.chars() {
            if !ch.is_whitespace() {
                self.check_control_char(s, ch)?;
                visible += 1;
            } else if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
                return Err(CodeError::InvalidSyntax(format!(
                    "string value '{s}' is not valid with respect to pattern [ \\r\\n\\t\\S]+"
                )));
            }
        }
        if visible == 0 {
            return Err(CodeError::InvalidSyntax(
                "string value must contain at least one non-whitespace character".to_string(),
            ));
        }
        Ok(())
    }

    fn check_control_char(&self, s: &str, ch: char) -> Result<()> {
        if self.check_control_chars && is_unsupported_control_char(ch) {
            return Err(CodeError::InvalidSyntax(format!(
                "value contains unsupported control characters: {s:?}"
            )));
        }
        Ok(())
    }
}

fn is_unsupported_control_char(ch: char) -> bool {
    (ch as u32) < 32 && !matches!(ch, '\t' | '\n' | '\r')
}

/// Checks `s` against the `code` grammar with the default configuration.
pub fn check_code(s: &str) -> Result<()> {
    ValidationConfig::default().check_code(s)
}

/// Checks `s` against the `string` grammar with the default configuration.
pub fn check_string(s: &str) -> Result<()> {
    ValidationConfig::default().check_string(s)
}

/// Checks an element id.
pub fn check_id(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(CodeError::InvalidId("id value must not be empty".to_string()));
    }
    if s.len() > MAX_ID_LENGTH {
        return Err(CodeError::InvalidId(format!(
            "id value length {} is greater than maximum allowed length {MAX_ID_LENGTH}",
            s.len()
        )));
    }
    if let Some(bad) = s
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.'))
    {
        return Err(CodeError::InvalidId(format!(
            "id value '{s}' contains invalid character {bad:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert!(check_code("in-progress").is_ok());
        assert!(check_code("entered in error").is_ok());
        assert!(check_code("<=").is_ok());

        for bad in ["", " a", "a ", "a  b", "a\tb", "a\u{1}b"] {
            assert!(
                matches!(check_code(bad), Err(CodeError::InvalidSyntax(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn control_chars_can_be_allowed() {
        let lax = ValidationConfig {
            check_control_chars: false,
            ..Default::default()
        };
        assert!(lax.check_code("a\u{1}b").is_ok());
        assert!(lax.check_string("x\u{7}").is_ok());
        assert!(check_string("x\u{7}").is_err());
    }

    #[test]
    fn ids() {
        assert!(check_id("a-1.B").is_ok());
        assert!(check_id(&"a".repeat(64)).is_ok());
        assert!(check_id(&"a".repeat(65)).is_err());
        assert!(check_id("").is_err());
        assert!(check_id("a_b").is_err());
        assert!(check_id("a/b").is_err());
    }

    #[test]
    fn strings() {
        assert!(check_string("hello\r\n\tworld").is_ok());
        assert!(check_string(" x ").is_ok());
        assert!(check_string(" \t").is_err());
        assert!(check_string("a\u{a0}b").is_err());
    }

    #[test]
    fn config_defaults_when_fields_missing() {
        let config: ValidationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }
}
