//! Filesystem helpers for locating Python sources.

use crate::log_verbose;
use std::fs;
use std::path::Path;

/// Directories that never contain project sources worth analyzing
const EXCLUDE_DIRS: &[&str] = &[
    "venv",
    "env",
    ".venv",
    ".env",
    ".git",
    "__pycache__",
    "node_modules",
    "site-packages",
    "dist",
    "build",
];

/// Recursively collect `.py` files under `root` as `(relative path,
/// content)` pairs, sorted by path.
pub fn collect_python_files(root: &Path) -> std::io::Result<Vec<(String, String)>> {
    let mut files = Vec::new();
    collect_recursive(root, root, &mut files)?;
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn collect_recursive(
    root: &Path,
    current: &Path,
    files: &mut Vec<(String, String)>,
) -> std::io::Result<()> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            if let Some(dir_name) = path.file_name() {
                let dir_name = dir_name.to_string_lossy();
                if EXCLUDE_DIRS.iter().any(|&d| dir_name == d) || dir_name.starts_with('.') {
                    log_verbose!("skipping directory {}", path.display());
                    continue;
                }
            }
            collect_recursive(root, &path, files)?;
        } else if path.is_file() && path.extension().map_or(false, |ext| ext == "py") {
            let content = fs::read_to_string(&path)?;
            let rel_path = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .to_string();
            files.push((rel_path, content));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_directories_are_not_descended() {
        let dir = std::env::temp_dir().join("pysig_fs_test");
        let cache = dir.join("__pycache__");
        fs::create_dir_all(&cache).unwrap();
        fs::write(dir.join("a.py"), "x = 1\n").unwrap();
        fs::write(cache.join("cached.py"), "x = 1\n").unwrap();
        fs::write(dir.join("notes.txt"), "not python\n").unwrap();

        let files = collect_python_files(&dir).unwrap();
        let paths: Vec<&str> = files.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(paths, vec!["a.py"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
