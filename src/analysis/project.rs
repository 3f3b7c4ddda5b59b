//! Independent per-file analysis across a directory tree.
//!
//! Each file is a separate analysis run sharing no state with the others;
//! there is no cross-file name resolution. Files that fail to parse are
//! skipped with a warning so one broken script does not sink the sweep.

use crate::analysis::builtins::Builtins;
use crate::analysis::extract::extract_module;
use crate::errors::SignatureError;
use crate::log_warn;
use crate::signature::ModuleSignature;
use crate::utils::fs::collect_python_files;
use std::path::Path;

/// Analyze every `.py` file under `dir`, returning `(relative path,
/// signature)` pairs sorted by path.
pub fn analyze_project<P: AsRef<Path>>(
    dir: P,
) -> Result<Vec<(String, ModuleSignature)>, SignatureError> {
    analyze_project_with_builtins(dir, &Builtins::default())
}

/// `analyze_project` with a caller-supplied deny-list
pub fn analyze_project_with_builtins<P: AsRef<Path>>(
    dir: P,
    builtins: &Builtins,
) -> Result<Vec<(String, ModuleSignature)>, SignatureError> {
    let files = collect_python_files(dir.as_ref())?;

    let mut results = Vec::new();
    for (path, content) in files {
        match extract_module(&content, builtins) {
            Ok(signature) => results.push((path, signature)),
            Err(err) => log_warn!("skipping {path}: {err}"),
        }
    }

    Ok(results)
}
