//! Import extraction from a module's top-level statements.

use crate::signature::{ImportSignature, SpecificImport};
use rustpython_parser::ast::Stmt;

/// Extract import records from the top-level statement list, in source order.
///
/// Two statement forms are covered: `import X [as Y]` produces one record per
/// named module, `from M import A [as B], ...` produces one record per
/// statement with every imported item captured. A from-import with no source
/// module (a pure relative import) contributes nothing.
pub fn extract_imports(body: &[Stmt]) -> Vec<ImportSignature> {
    let mut imports = Vec::new();

    for stmt in body {
        match stmt {
            Stmt::Import(import) => {
                for alias in &import.names {
                    imports.push(ImportSignature::plain(
                        alias.name.to_string(),
                        alias.asname.as_ref().map(|a| a.to_string()),
                    ));
                }
            }
            Stmt::ImportFrom(import_from) => {
                let specified: Vec<SpecificImport> = import_from
                    .names
                    .iter()
                    .map(|alias| SpecificImport {
                        name: alias.name.to_string(),
                        alias: alias.asname.as_ref().map(|a| a.to_string()),
                    })
                    .collect();

                if let Some(module) = &import_from.module {
                    imports.push(ImportSignature {
                        name: module.to_string(),
                        alias: None,
                        specified,
                    });
                }
            }
            _ => {}
        }
    }

    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_python;

    fn imports_of(source: &str) -> Vec<ImportSignature> {
        extract_imports(&parse_python(source).unwrap())
    }

    #[test]
    fn test_plain_imports_preserve_source_order() {
        let imports = imports_of("import os\nimport sys\n");
        assert_eq!(
            imports,
            vec![
                ImportSignature::plain("os", None),
                ImportSignature::plain("sys", None),
            ]
        );
    }

    #[test]
    fn test_multi_module_import_yields_one_record_each() {
        let imports = imports_of("import os, sys as system\n");
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0], ImportSignature::plain("os", None));
        assert_eq!(
            imports[1],
            ImportSignature::plain("sys", Some("system".to_string()))
        );
    }

    #[test]
    fn test_from_import_captures_every_item() {
        let imports = imports_of("from collections import OrderedDict, defaultdict as dd\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].name, "collections");
        assert!(imports[0].alias.is_none());
        assert_eq!(
            imports[0].specified,
            vec![
                SpecificImport {
                    name: "OrderedDict".to_string(),
                    alias: None,
                },
                SpecificImport {
                    name: "defaultdict".to_string(),
                    alias: Some("dd".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_pure_relative_import_is_skipped() {
        let imports = imports_of("from . import sibling\nfrom .. import cousin\n");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_non_import_statements_are_ignored() {
        let imports = imports_of("x = 1\nimport json\n");
        assert_eq!(imports, vec![ImportSignature::plain("json", None)]);
    }
}
