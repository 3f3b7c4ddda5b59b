//! Signature analysis: imports, free-name inference, function/class/module
//! extraction, and project-wide sweeps.

pub mod builtins;
pub mod dependencies;
pub mod extract;
pub mod imports;
pub mod project;

pub use builtins::Builtins;
pub use dependencies::find_dependencies;
pub use extract::{extract_class, extract_function, extract_module};
pub use imports::extract_imports;
pub use project::{analyze_project, analyze_project_with_builtins};
