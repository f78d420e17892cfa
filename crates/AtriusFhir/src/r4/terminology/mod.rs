//! R4 terminology: the generated code-system tables.
//!
//! Regenerate with `cargo run -p atrius-code-system-gen`.

pub mod code_systems;

pub use code_systems::{ALL, code_system_by_url};
