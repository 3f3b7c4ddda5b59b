//! Function, class and module signature extraction.
//!
//! Extraction is two-pass by necessity: functions are extracted first with
//! only per-function filtering applied. Once every import and top-level
//! definition is known, each function's dependency set is narrowed to the
//! names this module can actually account for.

use crate::analysis::builtins::Builtins;
use crate::analysis::dependencies::find_dependencies;
use crate::analysis::imports::extract_imports;
use crate::errors::SignatureError;
use crate::parser::parse_python;
use crate::signature::{ClassSignature, FunctionSignature, ModuleSignature};
use rustpython_parser::ast::{Ranged, Stmt, StmtClassDef};
use std::collections::HashSet;

/// Extract the full signature of a Python module from source text.
///
/// Fails with a parse error on syntactically invalid input; there is no
/// partial result.
pub fn extract_module(
    source: &str,
    builtins: &Builtins,
) -> Result<ModuleSignature, SignatureError> {
    let ast = parse_python(source)?;

    let imports = extract_imports(&ast);

    let mut functions: Vec<FunctionSignature> = ast
        .iter()
        .filter_map(|stmt| extract_function(source, builtins, stmt))
        .collect();

    let classes: Vec<ClassSignature> = ast
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::ClassDef(classdef) => Some(extract_class(source, builtins, classdef)),
            _ => None,
        })
        .collect();

    // Second pass: a dependency that is neither an import nor a module-level
    // definition cannot be tracked and is dropped.
    let mut known: HashSet<String> = HashSet::new();
    for import in &imports {
        known.insert(import.name.clone());
        known.extend(import.specified.iter().map(|spec| spec.name.clone()));
    }
    known.extend(functions.iter().map(|function| function.name.clone()));
    known.extend(classes.iter().map(|class| class.name.clone()));

    for function in &mut functions {
        function.dependencies.retain(|dep| known.contains(dep));
        builtins.filter(&mut function.dependencies);
    }

    Ok(ModuleSignature {
        imports,
        functions,
        classes,
    })
}

/// Extract a signature from a function-definition statement.
///
/// Returns `None` for any other statement kind. Synchronous and asynchronous
/// definitions are handled identically.
pub fn extract_function(
    source: &str,
    builtins: &Builtins,
    stmt: &Stmt,
) -> Option<FunctionSignature> {
    let (name, params, returns) = match stmt {
        Stmt::FunctionDef(fundef) => (&fundef.name, &fundef.args, fundef.returns.as_deref()),
        Stmt::AsyncFunctionDef(fundef) => (&fundef.name, &fundef.args, fundef.returns.as_deref()),
        _ => return None,
    };

    let args: Vec<String> = params
        .args
        .iter()
        .map(|arg| arg.def.arg.to_string())
        .collect();
    let return_type = returns.map(|annotation| source_slice(source, annotation).trim().to_string());
    let source_code = reconstruct(source, stmt);

    let mut dependencies = find_dependencies(stmt);
    for arg in &args {
        dependencies.remove(arg);
    }
    dependencies.remove(name.as_str());
    builtins.filter(&mut dependencies);

    Some(FunctionSignature {
        name: name.to_string(),
        args,
        return_type,
        source_code,
        dependencies,
    })
}

/// Extract a class signature: every method, plus constructor arguments taken
/// from `__init__` (minus the leading self reference) when one is present.
pub fn extract_class(
    source: &str,
    builtins: &Builtins,
    classdef: &StmtClassDef,
) -> ClassSignature {
    let mut methods = Vec::new();
    let mut init_args = Vec::new();

    for item in &classdef.body {
        if let Some(method) = extract_function(source, builtins, item) {
            if method.name == "__init__" {
                init_args = method.args.iter().skip(1).cloned().collect();
            }
            methods.push(method);
        }
    }

    ClassSignature {
        name: classdef.name.to_string(),
        args: init_args,
        methods,
    }
}

/// Slice the original source text covered by a node
fn source_slice<'a>(source: &'a str, node: &impl Ranged) -> &'a str {
    let range = node.range();
    &source[usize::from(range.start())..usize::from(range.end())]
}

/// Reconstruct a definition's source text so it stands alone.
///
/// The slice is widened to the start of the node's first line and that line's
/// indentation is stripped from every line, so a method reconstructed from
/// inside a class body re-parses as a top-level definition.
fn reconstruct(source: &str, node: &impl Ranged) -> String {
    let range = node.range();
    let start = usize::from(range.start());
    let end = usize::from(range.end());
    let line_start = source[..start].rfind('\n').map_or(0, |pos| pos + 1);

    let indent = &source[line_start..start];
    let text = &source[line_start..end];
    if indent.is_empty() || !indent.chars().all(char::is_whitespace) {
        return text.trim().to_string();
    }

    let dedented: Vec<&str> = text
        .lines()
        .map(|line| line.strip_prefix(indent).unwrap_or(line))
        .collect();
    dedented.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> ModuleSignature {
        extract_module(source, &Builtins::default()).unwrap()
    }

    #[test]
    fn test_function_signature_fields() {
        let module = extract("def add(a, b) -> int:\n    return a + b\n");
        assert_eq!(module.functions.len(), 1);
        let function = &module.functions[0];
        assert_eq!(function.name, "add");
        assert_eq!(function.args, vec!["a", "b"]);
        assert_eq!(function.return_type.as_deref(), Some("int"));
        assert!(function.source_code.contains("a + b"));
        assert!(function.dependencies.is_empty());
    }

    #[test]
    fn test_async_function_is_extracted() {
        let module = extract("async def fetch(url):\n    return url\n");
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.functions[0].name, "fetch");
        assert_eq!(module.functions[0].args, vec!["url"]);
    }

    #[test]
    fn test_dependencies_exclude_args_and_own_name() {
        let module = extract("def fact(n):\n    return n * fact(n - 1)\n");
        let function = &module.functions[0];
        assert!(!function.dependencies.contains("n"));
        assert!(!function.dependencies.contains("fact"));
    }

    #[test]
    fn test_dependencies_keep_imported_names() {
        let module = extract("import os\n\ndef cwd():\n    return os.getcwd()\n");
        let deps: Vec<&str> = module.functions[0]
            .dependencies
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(deps, vec!["os"]);
    }

    #[test]
    fn test_dependencies_keep_sibling_definitions() {
        let source = "def helper(x):\n    return x\n\ndef caller(y):\n    return helper(y)\n";
        let module = extract(source);
        assert!(module.functions[1].dependencies.contains("helper"));
    }

    #[test]
    fn test_untracked_names_are_narrowed_away() {
        // `hidden` is bound only inside another function; the raw pass sees
        // it but module narrowing must drop it.
        let source = "def first():\n    hidden = 1\n    return hidden\n\ndef second():\n    return hidden\n";
        let module = extract(source);
        assert!(module.functions[1].dependencies.is_empty());
    }

    #[test]
    fn test_class_without_init_has_no_args() {
        let module = extract("class Marker:\n    def tag(self):\n        return 1\n");
        assert_eq!(module.classes.len(), 1);
        assert!(module.classes[0].args.is_empty());
        assert_eq!(module.classes[0].methods.len(), 1);
    }

    #[test]
    fn test_class_init_args_skip_self() {
        let source =
            "class Point:\n    def __init__(self, x, y):\n        self.x = x\n        self.y = y\n";
        let module = extract(source);
        assert_eq!(module.classes[0].args, vec!["x", "y"]);
    }

    #[test]
    fn test_method_source_reconstructs_standalone() {
        let source = "class Box:\n    def volume(self, w, h, d):\n        return w * h * d\n";
        let module = extract(source);
        let method = &module.classes[0].methods[0];
        // The reconstructed text must re-parse on its own with the same
        // name and argument sequence.
        let reparsed = extract_module(&method.source_code, &Builtins::default()).unwrap();
        assert_eq!(reparsed.functions.len(), 1);
        assert_eq!(reparsed.functions[0].name, method.name);
        assert_eq!(reparsed.functions[0].args, method.args);
    }

    #[test]
    fn test_nested_functions_are_not_surfaced() {
        let source = "def outer():\n    def inner():\n        return 1\n    return inner\n";
        let module = extract(source);
        let names: Vec<&str> = module
            .functions
            .iter()
            .map(|function| function.name.as_str())
            .collect();
        assert_eq!(names, vec!["outer"]);
    }

    #[test]
    fn test_duplicate_definitions_produce_duplicate_entries() {
        let source = "def twice():\n    return 1\n\ndef twice():\n    return 2\n";
        let module = extract(source);
        assert_eq!(module.functions.len(), 2);
    }
}
