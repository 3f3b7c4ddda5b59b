//! Static Python module signature extraction.
//!
//! pysig parses a single Python source file (never executing it) and returns
//! a structured summary of its public surface: top-level imports, function
//! definitions with arguments, return annotation, reconstructed source text
//! and inferred name dependencies, and class definitions with constructor
//! arguments and methods.
//!
//! ```no_run
//! let result = pysig::analyze_source("import os\n\ndef cwd():\n    return os.getcwd()\n");
//! ```

pub mod analysis;
pub mod errors;
pub mod parser;
pub mod signature;
pub mod utils;

pub use analysis::builtins::Builtins;
pub use errors::SignatureError;
pub use signature::{
    ClassSignature, FunctionSignature, ImportSignature, ModuleSignature, SpecificImport,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Input to an analysis run: a file on disk or raw source text.
///
/// Exactly one of the two is always present, so there is no unset state to
/// defend against.
#[derive(Debug, Clone)]
pub enum Source {
    Path(PathBuf),
    Text(String),
}

impl Source {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Source::Path(path.into())
    }

    pub fn text(code: impl Into<String>) -> Self {
        Source::Text(code.into())
    }
}

/// Analysis entry point and result holder.
///
/// `name` (the file stem) and `module_name` (the parent directory name) are
/// only derived when the input was a path.
#[derive(Debug, Clone)]
pub struct PySignature {
    pub signature: ModuleSignature,
    pub name: Option<String>,
    pub module_name: Option<String>,
}

impl PySignature {
    /// Analyze a source with the default built-in deny-list
    pub fn new(source: Source) -> Result<Self, SignatureError> {
        Self::with_builtins(source, &Builtins::default())
    }

    /// Analyze a source with a caller-supplied deny-list
    pub fn with_builtins(source: Source, builtins: &Builtins) -> Result<Self, SignatureError> {
        match source {
            Source::Path(path) => {
                let code = fs::read_to_string(&path)?;
                let signature = analysis::extract_module(&code, builtins)?;
                Ok(PySignature {
                    signature,
                    name: script_name(&path),
                    module_name: script_module_name(&path),
                })
            }
            Source::Text(code) => {
                let signature = analysis::extract_module(&code, builtins)?;
                Ok(PySignature {
                    signature,
                    name: None,
                    module_name: None,
                })
            }
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, SignatureError> {
        Self::new(Source::Path(path.into()))
    }

    pub fn from_source(code: impl Into<String>) -> Result<Self, SignatureError> {
        Self::new(Source::Text(code.into()))
    }
}

/// Extract the signature of raw Python source text.
pub fn analyze_source(source: &str) -> Result<ModuleSignature, SignatureError> {
    analysis::extract_module(source, &Builtins::default())
}

/// Extract the signature of a Python file on disk.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<PySignature, SignatureError> {
    PySignature::from_path(path.as_ref())
}

/// File stem of the analyzed script
fn script_name(path: &Path) -> Option<String> {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
}

/// Name of the directory containing the analyzed script
fn script_module_name(path: &Path) -> Option<String> {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
import os
import sys

def example_function(a, b):
    return a + b

class ExampleClass:
    def __init__(self, x):
        self.x = x
    def get_x(self):
        return self.x
";

    #[test]
    fn test_analyze_example_module() {
        let result = PySignature::from_source(EXAMPLE).unwrap();
        let module = &result.signature;

        assert_eq!(module.imports.len(), 2);
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.classes.len(), 1);
        assert_eq!(module.imports[0], ImportSignature::plain("os", None));
        assert_eq!(module.imports[1], ImportSignature::plain("sys", None));

        let function = &module.functions[0];
        assert_eq!(function.name, "example_function");
        assert_eq!(function.args, vec!["a", "b"]);
        assert!(function.return_type.is_none());
        assert!(function.source_code.contains("a + b"));
        assert!(function.dependencies.is_empty());

        let class = &module.classes[0];
        assert_eq!(class.name, "ExampleClass");
        assert_eq!(class.args, vec!["x"]);
        assert_eq!(class.methods.len(), 2);

        assert!(result.name.is_none());
        assert!(result.module_name.is_none());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let first = analyze_source(EXAMPLE).unwrap();
        let second = analyze_source(EXAMPLE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_failure_aborts_without_partial_result() {
        let err = analyze_source("import os\ndef broken(:\n").unwrap_err();
        assert!(matches!(err, SignatureError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let err = analyze_file("/nonexistent/script.py").unwrap_err();
        assert!(matches!(err, SignatureError::Io(_)));
    }

    #[test]
    fn test_path_input_derives_script_and_module_name() {
        let dir = std::env::temp_dir().join("pysig_name_test").join("mypkg");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("script.py");
        std::fs::write(&file, "x = 1\n").unwrap();

        let result = analyze_file(&file).unwrap();
        assert_eq!(result.name.as_deref(), Some("script"));
        assert_eq!(result.module_name.as_deref(), Some("mypkg"));

        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_function_round_trip() {
        let module = analyze_source(EXAMPLE).unwrap();
        let reparsed = analyze_source(&module.functions[0].source_code).unwrap();
        assert_eq!(reparsed.functions.len(), 1);
        assert_eq!(reparsed.functions[0].name, module.functions[0].name);
        assert_eq!(reparsed.functions[0].args, module.functions[0].args);
    }
}
