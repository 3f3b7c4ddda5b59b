//! Signature records produced by the analysis.
//!
//! Everything here is a plain immutable value: one `ModuleSignature` per
//! analysis run, exclusively owning its imports, functions and classes.

use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// One name imported via a `from module import name [as alias]` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecificImport {
    pub name: String,
    pub alias: Option<String>,
}

/// One import statement
///
/// Plain imports (`import os as o`) use `name`/`alias` and leave `specified`
/// empty; from-imports put the source module in `name` and every imported
/// item in `specified`. The two forms are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSignature {
    pub name: String,
    pub alias: Option<String>,
    pub specified: Vec<SpecificImport>,
}

impl ImportSignature {
    /// Plain `import X [as Y]` record
    pub fn plain(name: impl Into<String>, alias: Option<String>) -> Self {
        ImportSignature {
            name: name.into(),
            alias,
            specified: Vec::new(),
        }
    }
}

/// One function or method definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    /// Declared positional argument names in source order
    pub args: Vec<String>,
    /// Textual return annotation, if the definition carries one
    pub return_type: Option<String>,
    /// Reconstructed source text of the whole definition
    pub source_code: String,
    /// Free names referenced by the body, never containing the function's
    /// own name or any of its argument names
    #[serde(serialize_with = "sorted_names")]
    pub dependencies: HashSet<String>,
}

/// One class definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSignature {
    pub name: String,
    /// `__init__` arguments minus the leading `self`; empty without `__init__`
    pub args: Vec<String>,
    pub methods: Vec<FunctionSignature>,
}

/// Whole-file analysis result
///
/// Only top-level definitions are surfaced: methods appear inside their
/// class, functions nested inside other functions do not appear at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSignature {
    pub imports: Vec<ImportSignature>,
    pub functions: Vec<FunctionSignature>,
    pub classes: Vec<ClassSignature>,
}

/// Serialize a name set in sorted order so JSON output is stable
fn sorted_names<S: Serializer>(names: &HashSet<String>, serializer: S) -> Result<S::Ok, S::Error> {
    let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.serialize(serializer)
}
