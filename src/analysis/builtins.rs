//! Built-in name filtering.
//!
//! Names that resolve to Python built-ins are always available and therefore
//! never count as cross-reference dependencies. Membership is a curated
//! static set rather than runtime introspection, and callers can inject
//! their own deny-list.

use crate::log_debug;
use std::collections::HashSet;

/// Names globally available in CPython without any import (`dir(builtins)`)
pub const PYTHON_BUILTINS: &[&str] = &[
    // constants and module-level dunders
    "True",
    "False",
    "None",
    "NotImplemented",
    "Ellipsis",
    "__debug__",
    "__build_class__",
    "__doc__",
    "__import__",
    "__loader__",
    "__name__",
    "__package__",
    "__spec__",
    // callables and types
    "abs",
    "aiter",
    "all",
    "anext",
    "any",
    "ascii",
    "bin",
    "bool",
    "breakpoint",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "classmethod",
    "compile",
    "complex",
    "copyright",
    "credits",
    "delattr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "eval",
    "exec",
    "exit",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "globals",
    "hasattr",
    "hash",
    "help",
    "hex",
    "id",
    "input",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "license",
    "list",
    "locals",
    "map",
    "max",
    "memoryview",
    "min",
    "next",
    "object",
    "oct",
    "open",
    "ord",
    "pow",
    "print",
    "property",
    "quit",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "sorted",
    "staticmethod",
    "str",
    "sum",
    "super",
    "tuple",
    "type",
    "vars",
    "zip",
    // exceptions and warnings
    "ArithmeticError",
    "AssertionError",
    "AttributeError",
    "BaseException",
    "BaseExceptionGroup",
    "BlockingIOError",
    "BrokenPipeError",
    "BufferError",
    "BytesWarning",
    "ChildProcessError",
    "ConnectionAbortedError",
    "ConnectionError",
    "ConnectionRefusedError",
    "ConnectionResetError",
    "DeprecationWarning",
    "EOFError",
    "EncodingWarning",
    "EnvironmentError",
    "Exception",
    "ExceptionGroup",
    "FileExistsError",
    "FileNotFoundError",
    "FloatingPointError",
    "FutureWarning",
    "GeneratorExit",
    "IOError",
    "ImportError",
    "ImportWarning",
    "IndentationError",
    "IndexError",
    "InterruptedError",
    "IsADirectoryError",
    "KeyError",
    "KeyboardInterrupt",
    "LookupError",
    "MemoryError",
    "ModuleNotFoundError",
    "NameError",
    "NotADirectoryError",
    "NotImplementedError",
    "OSError",
    "OverflowError",
    "PendingDeprecationWarning",
    "PermissionError",
    "ProcessLookupError",
    "RecursionError",
    "ReferenceError",
    "ResourceWarning",
    "RuntimeError",
    "RuntimeWarning",
    "StopAsyncIteration",
    "StopIteration",
    "SyntaxError",
    "SyntaxWarning",
    "SystemError",
    "SystemExit",
    "TabError",
    "TimeoutError",
    "TypeError",
    "UnboundLocalError",
    "UnicodeDecodeError",
    "UnicodeEncodeError",
    "UnicodeError",
    "UnicodeTranslateError",
    "UnicodeWarning",
    "UserWarning",
    "ValueError",
    "Warning",
    "ZeroDivisionError",
];

/// Deny-list of always-resolvable names, injectable into the extractor
#[derive(Debug, Clone)]
pub struct Builtins {
    names: HashSet<String>,
}

impl Default for Builtins {
    fn default() -> Self {
        Builtins::from_names(PYTHON_BUILTINS.iter().copied())
    }
}

impl Builtins {
    /// Build a deny-list from an arbitrary name set
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Builtins {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` denotes a built-in identifier
    pub fn contains(&self, name: &str) -> bool {
        let found = self.names.contains(name);
        if found {
            log_debug!("dropping builtin name: {name}");
        }
        found
    }

    /// Remove every built-in name from a dependency set
    pub fn filter(&self, dependencies: &mut HashSet<String>) {
        dependencies.retain(|dep| !self.contains(dep));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_knows_core_builtins() {
        let builtins = Builtins::default();
        assert!(builtins.contains("print"));
        assert!(builtins.contains("len"));
        assert!(builtins.contains("ValueError"));
        assert!(builtins.contains("None"));
        assert!(!builtins.contains("my_helper"));
        assert!(!builtins.contains("os"));
    }

    #[test]
    fn test_filter_removes_only_builtins() {
        let builtins = Builtins::default();
        let mut deps: HashSet<String> = ["print", "helper", "range", "Config"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        builtins.filter(&mut deps);
        let mut left: Vec<&str> = deps.iter().map(String::as_str).collect();
        left.sort_unstable();
        assert_eq!(left, ["Config", "helper"]);
    }

    #[test]
    fn test_custom_deny_list() {
        let builtins = Builtins::from_names(["special"]);
        assert!(builtins.contains("special"));
        assert!(!builtins.contains("print"));
    }
}
