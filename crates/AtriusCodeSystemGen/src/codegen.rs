//! Token generation and rendering of the generated Rust sources.

use anyhow::{Context, Result};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::PlannedCodeSystem;
use crate::naming::{deconflict, to_rust_ident_pascal};
use atrius_fhir_lib::FhirVersion;

const HEADER: &str = "// @generated by AtriusCodeSystemGen\n// DO NOT EDIT MANUALLY\n\n";

/// One `#[doc]` attribute per line; CR/LF never reach the generated source.
fn doc_attrs(lines: &[String]) -> TokenStream {
    let mut out: Vec<TokenStream> = Vec::new();

    for l in lines {
        let normalized = l.replace("\r\n", "\n").replace('\r', "\n");
        for part in normalized.split('\n') {
            if part.trim().is_empty() {
                out.push(quote!(#[doc = ""]));
            } else {
                let s = format!(" {}", part.trim());
                out.push(quote!(#[doc = #s]));
            }
        }
    }

    quote!(#(#out)*)
}

fn option_str(v: Option<&str>) -> TokenStream {
    match v {
        Some(s) => quote!(Some(#s)),
        None => quote!(None),
    }
}

/// Variant identifiers for the concepts, unique within the enum.
pub fn variant_idents(system: &PlannedCodeSystem) -> Vec<Ident> {
    let mut names: Vec<String> = Vec::with_capacity(system.concepts.len());
    for c in &system.concepts {
        let name = deconflict(&to_rust_ident_pascal(&c.code), |n| {
            names.iter().any(|existing| existing == n)
        });
        names.push(name);
    }
    names.iter().map(|n| format_ident!("{}", n)).collect()
}

/// Enum, concept table and trait impls for one code system.
pub fn code_system_tokens(system: &PlannedCodeSystem) -> TokenStream {
    let enum_ident = format_ident!("{}", system.type_name);
    let url = &system.url;
    let name = &system.name;
    let version = option_str(system.version.as_deref());

    let mut docs = vec![
        format!("FHIR CodeSystem: {}", system.name),
        format!("Canonical URL: {}", system.url),
    ];
    if let Some(v) = &system.version {
        docs.push(format!("Version: {v}"));
    }
    if let Some(t) = &system.title {
        docs.push(format!("Title: {t}"));
    }
    if let Some(st) = &system.status {
        docs.push(format!("Status: {st}"));
    }
    if let Some(desc) = &system.description {
        docs.push(String::new());
        docs.push(desc.clone());
    }
    let enum_docs = doc_attrs(&docs);

    let idents = variant_idents(system);
    let codes: Vec<&str> = system.concepts.iter().map(|c| c.code.as_str()).collect();

    let variant_docs = system.concepts.iter().map(|c| {
        let mut vdocs = vec![format!("Display: {}", c.display)];
        if let Some(defn) = &c.definition {
            vdocs.push(format!("Definition: {defn}"));
        }
        for cm in &c.comments {
            vdocs.push(format!("Comment: {cm}"));
        }
        doc_attrs(&vdocs)
    });

    let concept_entries = idents.iter().zip(&system.concepts).map(|(ident, c)| {
        let code = &c.code;
        let display = &c.display;
        let definition = option_str(c.definition.as_deref());
        quote! {
            Concept {
                value: #enum_ident::#ident,
                code: #code,
                display: #display,
                definition: #definition,
            }
        }
    });

    let as_code_arms = idents
        .iter()
        .zip(&codes)
        .map(|(ident, code)| quote!(#enum_ident::#ident => #code));

    let try_from_arms = idents
        .iter()
        .zip(&codes)
        .map(|(ident, code)| quote!(#code => Ok(#enum_ident::#ident)));

    quote! {
        #enum_docs
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum #enum_ident {
            #(
                #variant_docs
                #[serde(rename = #codes)]
                #idents,
            )*
        }

        impl #enum_ident {
            /// Concept table, in declaration order.
            pub const CONCEPTS: &'static [Concept<Self>] = &[
                #(#concept_entries,)*
            ];
        }

        impl CodeSystem for #enum_ident {
            const URL: &'static str = #url;
            const NAME: &'static str = #name;
            const VERSION: Option<&'static str> = #version;

            fn concepts() -> &'static [Concept<Self>] {
                Self::CONCEPTS
            }

            fn concept(&self) -> &'static Concept<Self> {
                &Self::CONCEPTS[*self as usize]
            }

            fn as_code(&self) -> &'static str {
                match self {
                    #(#as_code_arms,)*
                }
            }

            fn try_from_code(code: &str) -> Result<Self, CodeError> {
                match code {
                    #(#try_from_arms,)*
                    _ => Err(CodeError::unknown_code(Self::URL, code)),
                }
            }
        }

        impl core::convert::TryFrom<&str> for #enum_ident {
            type Error = CodeError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                <Self as CodeSystem>::try_from_code(s)
            }
        }

        impl core::str::FromStr for #enum_ident {
            type Err = CodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as CodeSystem>::try_from_code(s)
            }
        }

        impl core::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_code())
            }
        }
    }
}

/// Full source of one `<module>.rs` file.
pub fn render_code_system(system: &PlannedCodeSystem) -> Result<String> {
    let tokens = code_system_tokens(system);
    let file_ast: syn::File = syn::parse2(tokens)
        .with_context(|| format!("failed parsing tokens for {}", system.type_name))?;

    let mut src = String::from(HEADER);
    src.push_str("#![allow(non_camel_case_types)]\n");
    src.push_str("#![allow(non_snake_case)]\n");
    src.push_str("#![allow(clippy::upper_case_acronyms)]\n\n");
    src.push_str("use serde::{Deserialize, Serialize};\n\n");
    src.push_str("use crate::terminology::{CodeError, CodeSystem, Concept};\n\n");
    src.push_str(&prettyplease::unparse(&file_ast));
    Ok(src)
}

/// Source of `mod.rs`: module declarations, re-exports and the URL registry.
pub fn render_mod_rs(systems: &[PlannedCodeSystem], fhir_version: FhirVersion) -> String {
    let mut src = String::from(HEADER);
    src.push_str(&format!(
        "//! FHIR {} ({}) code systems.\n\n",
        fhir_version,
        fhir_version.version_number()
    ));

    for s in systems {
        src.push_str(&format!("pub mod {};\n", s.module));
    }
    src.push('\n');
    for s in systems {
        src.push_str(&format!("pub use {}::*;\n", s.module));
    }
    src.push('\n');

    src.push_str("use crate::terminology::CodeSystemOps;\n");
    src.push_str("use crate::terminology::registry::find_by_url;\n\n");

    src.push_str("/// Every generated code system, ordered by module name.\n");
    src.push_str("pub static ALL: &[CodeSystemOps] = &[\n");
    for s in systems {
        src.push_str(&format!(
            "    CodeSystemOps::of::<{}::{}>(),\n",
            s.module, s.type_name
        ));
    }
    src.push_str("];\n\n");

    src.push_str("/// Looks up a code system by canonical URL; a `|version` suffix is ignored.\n");
    src.push_str("pub fn code_system_by_url(url: &str) -> Option<&'static CodeSystemOps> {\n");
    src.push_str("    find_by_url(ALL, url)\n");
    src.push_str("}\n");
    src
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::FlatConcept;

    fn concept(code: &str) -> FlatConcept {
        FlatConcept {
            code: code.to_string(),
            display: code.to_string(),
            definition: None,
            comments: Vec::new(),
        }
    }

    fn system(codes: &[&str]) -> PlannedCodeSystem {
        PlannedCodeSystem {
            module: "quantity_comparator".to_string(),
            type_name: "QuantityComparator".to_string(),
            name: "QuantityComparator".to_string(),
            url: "http://hl7.org/fhir/quantity-comparator".to_string(),
            version: Some("4.0.1".to_string()),
            title: None,
            status: Some("active".to_string()),
            description: Some("How the Quantity should be understood.\r\rSecond paragraph".to_string()),
            concepts: codes.iter().map(|c| concept(c)).collect(),
        }
    }

    #[test]
    fn duplicate_variant_names_get_suffixes() {
        let idents: Vec<String> = variant_idents(&system(&["a-b", "a_b", "A B", "<"]))
            .iter()
            .map(|i| i.to_string())
            .collect();
        assert_eq!(idents, ["AB", "AB_2", "AB_3", "Lt"]);
    }

    #[test]
    fn rendered_module_is_valid_rust() {
        let src = render_code_system(&system(&["<", "<=", ">=", ">"])).unwrap();
        assert!(src.starts_with("// @generated by AtriusCodeSystemGen\n"));
        assert!(src.contains("pub enum QuantityComparator"));
        assert!(src.contains("#[serde(rename = \"<=\")]"));
        assert!(src.contains("QuantityComparator::Le => \"<=\""));
        assert!(src.contains("const VERSION: Option<&'static str> = Some(\"4.0.1\");"));
        assert!(!src.contains('\r'));
        assert!(syn::parse_file(&src).is_ok());
    }

    #[test]
    fn mod_rs_lists_every_module() {
        let systems = vec![system(&["<"])];
        let src = render_mod_rs(&systems, FhirVersion::R4);
        assert!(src.contains("//! FHIR R4 (4.0.1) code systems."));
        assert!(src.contains("pub mod quantity_comparator;"));
        assert!(src.contains("pub use quantity_comparator::*;"));
        assert!(src.contains("CodeSystemOps::of::<quantity_comparator::QuantityComparator>(),"));
        assert!(syn::parse_file(&src).is_ok());
    }
}
