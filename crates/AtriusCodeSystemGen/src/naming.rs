//! Rust identifiers for generated modules, enums and variants.

use crate::bundle::CodeSystem;

/// Identifiers that cannot (or should not) be used as a type or variant name.
const RESERVED: &[&str] = &["Self", "Type", "Super", "Crate", "Mod", "Move"];

/// Type name used when a CodeSystem offers nothing to derive one from.
const UNNAMED: &str = "UnnamedCodeSystem";

/// Names every generated module already has in scope, through its imports
/// or the prelude types its signatures use.
const IN_SCOPE: &[&str] = &[
    "CodeSystem",
    "Concept",
    "CodeError",
    "CodeSystemOps",
    "Serialize",
    "Deserialize",
    "Option",
    "Result",
];

/// Strict and reserved keywords; none of them can name a module.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn avoid_reserved(ident: String) -> String {
    if RESERVED.contains(&ident.as_str()) {
        format!("{ident}__")
    } else {
        ident
    }
}

/// Like [`avoid_reserved`], and also steers clear of the names imported into
/// every generated module.
fn avoid_reserved_type(ident: String) -> String {
    let ident = avoid_reserved(ident);
    if IN_SCOPE.contains(&ident.as_str()) {
        format!("{ident}__")
    } else {
        ident
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Every run of non-alphanumerics becomes a word break.
fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Capitalizes the first letter and lowercases the rest.
fn capitalize(w: &str) -> String {
    let mut chars = w.chars();
    let mut out = String::with_capacity(w.len());
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    out
}

/// Type name from a FHIR `name`, which is already PascalCase and often holds
/// acronyms (`HTTPVerb`); case is preserved and separators are dropped.
pub fn rust_type_from_fhir_name(name: &str) -> String {
    let mut out = String::new();
    for w in words(name) {
        if starts_with_digit(w) {
            out.push('N');
        }
        out.push_str(w);
    }

    if out.is_empty() {
        out.push_str(UNNAMED);
    }
    avoid_reserved_type(out)
}

/// Type name from free text (titles, ids), normalized to PascalCase.
pub fn rust_type_from_title(title: &str, fallback: &str) -> String {
    let out: String = words(title).map(capitalize).collect();
    if out.is_empty() {
        return avoid_reserved_type(fallback.to_string());
    }
    if starts_with_digit(&out) {
        return avoid_reserved_type(format!("N{out}"));
    }
    avoid_reserved_type(out)
}

/// Enum name: `name`, else `title`, else `id`.
pub fn code_system_enum_name(cs: &CodeSystem) -> Option<String> {
    if let Some(n) = cs.name.as_deref().filter(|n| !n.trim().is_empty()) {
        return Some(rust_type_from_fhir_name(n));
    }
    if let Some(t) = cs.title.as_deref().filter(|t| !t.trim().is_empty()) {
        return Some(rust_type_from_title(t, UNNAMED));
    }
    cs.id
        .as_deref()
        .map(|id| rust_type_from_title(id, UNNAMED))
}

/// Module (file) name from `CodeSystem.id`, in snake_case.
pub fn code_system_module_name(cs: &CodeSystem) -> Option<String> {
    let id = cs.id.as_deref()?;

    let s: String = id
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if s.is_empty() {
        None
    } else if starts_with_digit(&s) {
        Some(format!("cs_{s}"))
    } else if KEYWORDS.contains(&s.as_str()) {
        Some(format!("{s}_"))
    } else {
        Some(s)
    }
}

/// Variant name for a code.
///
/// ```
/// use atrius_code_system_gen::naming::to_rust_ident_pascal;
///
/// assert_eq!(to_rust_ident_pascal("entered-in-error"), "EnteredInError");
/// assert_eq!(to_rust_ident_pascal("<="), "Le");
/// assert_eq!(to_rust_ident_pascal("GET"), "Get");
/// ```
pub fn to_rust_ident_pascal(code: &str) -> String {
    // Comparators (QuantityComparator)
    match code {
        "<" => return "Lt".to_string(),
        "<=" => return "Le".to_string(),
        ">" => return "Gt".to_string(),
        ">=" => return "Ge".to_string(),
        "=" => return "Eq".to_string(),
        "!=" => return "Ne".to_string(),
        _ => {}
    }

    let mut out: String = words(code).map(capitalize).collect();

    // Pure symbols: "~" -> Sym_7e
    if out.is_empty() {
        out = String::from("Sym");
        for b in code.as_bytes() {
            out.push_str(&format!("_{b:02x}"));
        }
    }

    if starts_with_digit(&out) {
        out = format!("N{out}");
    }

    avoid_reserved(out)
}

/// Appends `_2`, `_3`, ... to `base` until `taken` reports it free.
pub fn deconflict(base: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut name = base.to_string();
    let mut suffix: usize = 2;
    while taken(&name) {
        name = format!("{base}_{suffix}");
        suffix += 1;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cs(v: serde_json::Value) -> CodeSystem {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn variant_names() {
        assert_eq!(to_rust_ident_pascal("in-progress"), "InProgress");
        assert_eq!(to_rust_ident_pascal("onleave"), "Onleave");
        assert_eq!(to_rust_ident_pascal("dateOp"), "Dateop");
        assert_eq!(to_rust_ident_pascal(">="), "Ge");
        assert_eq!(to_rust_ident_pascal("~"), "Sym_7e");
        assert_eq!(to_rust_ident_pascal("<>"), "Sym_3c_3e");
        assert_eq!(to_rust_ident_pascal("1.2"), "N12");
        assert_eq!(to_rust_ident_pascal("self"), "Self__");
        assert_eq!(to_rust_ident_pascal("type"), "Type__");
    }

    #[test]
    fn enum_names_prefer_name_then_title_then_id() {
        let by_name = cs(json!({"id": "http-verb", "name": "HTTPVerb", "title": "HTTP Verb"}));
        assert_eq!(code_system_enum_name(&by_name).as_deref(), Some("HTTPVerb"));

        let by_title = cs(json!({"id": "x", "title": "request priority"}));
        assert_eq!(code_system_enum_name(&by_title).as_deref(), Some("RequestPriority"));

        let by_id = cs(json!({"id": "fm-status"}));
        assert_eq!(code_system_enum_name(&by_id).as_deref(), Some("FmStatus"));

        assert_eq!(code_system_enum_name(&cs(json!({}))), None);
        assert_eq!(rust_type_from_fhir_name("v3 Act Code"), "v3ActCode");
        assert_eq!(rust_type_from_fhir_name("2ndOpinion"), "N2ndOpinion");
    }

    #[test]
    fn module_names() {
        let m = |id: &str| code_system_module_name(&cs(json!({"id": id})));
        assert_eq!(m("encounter-status").as_deref(), Some("encounter_status"));
        assert_eq!(m("v3-ActCode").as_deref(), Some("v3_actcode"));
        assert_eq!(m("2.16.840").as_deref(), Some("cs_2_16_840"));
        assert_eq!(code_system_module_name(&cs(json!({}))), None);
    }

    #[test]
    fn keywords_never_name_a_module() {
        let m = |id: &str| code_system_module_name(&cs(json!({"id": id}))).unwrap();
        assert_eq!(m("type"), "type_");
        assert_eq!(m("match"), "match_");
        assert_eq!(m("Mod"), "mod_");
        assert_eq!(m("self"), "self_");
        assert_eq!(m("types"), "types");
    }

    #[test]
    fn type_names_avoid_the_generated_imports() {
        assert_eq!(rust_type_from_fhir_name("CodeSystem"), "CodeSystem__");
        assert_eq!(rust_type_from_fhir_name("Concept"), "Concept__");
        assert_eq!(rust_type_from_fhir_name("CodeError"), "CodeError__");
        assert_eq!(rust_type_from_fhir_name("Serialize"), "Serialize__");
        assert_eq!(rust_type_from_fhir_name("Deserialize"), "Deserialize__");
        assert_eq!(rust_type_from_fhir_name("Result"), "Result__");
        assert_eq!(rust_type_from_fhir_name("Self"), "Self__");
        assert_eq!(rust_type_from_title("code system", "X"), "CodeSystem__");
        assert_eq!(rust_type_from_fhir_name("CodeSystemType"), "CodeSystemType");

        // nothing usable: the fallback must not shadow the trait either
        assert_eq!(rust_type_from_fhir_name("--"), "UnnamedCodeSystem");
        let blank = cs(json!({"title": "  ", "id": "--"}));
        assert_eq!(code_system_enum_name(&blank).as_deref(), Some("UnnamedCodeSystem"));
    }

    #[test]
    fn deconflicting() {
        let taken = ["a", "a_2"];
        assert_eq!(deconflict("a", |n| taken.contains(&n)), "a_3");
        assert_eq!(deconflict("b", |n| taken.contains(&n)), "b");
    }
}
