use crate::errors::{parse_error, SignatureError};
use rustpython_parser::ast::Suite;
use rustpython_parser::Parse;

/// Parse Python source code into an AST
pub fn parse_python(source: &str) -> Result<Suite, SignatureError> {
    Suite::parse(source, "<module>").map_err(|e| parse_error(e.to_string()))
}
