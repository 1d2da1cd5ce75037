//! solkit_astjson: Build solkit trees from solc compact-JSON ASTs.
//!
//! Accepts either a single `SourceUnit` node (`solc --ast-compact-json`)
//! or a standard-JSON output object with `sources.{path}.ast` entries.
//! Loading only fails when the input is not a source unit at all; every
//! problem inside the tree is recorded as a diagnostic and the affected
//! node is replaced by a placeholder.

mod loader;

use serde_json::Value;
use solkit_ast::SourceUnit;
use solkit_core::{AstArena, StringInterner};
use solkit_diagnostics::DiagnosticCollection;
use thiserror::Error;

pub use loader::SYNTHETIC_ID_BASE;

/// A source unit built from JSON, with the problems met while building it.
#[derive(Debug)]
pub struct LoadedUnit<'a> {
    pub root: &'a SourceUnit<'a>,
    pub diagnostics: DiagnosticCollection,
}

/// Failures that prevent building any tree.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a SourceUnit node, found {0}")]
    NotASourceUnit(String),
    #[error("standard-JSON output has no `sources` object")]
    NoSources,
    #[error("source '{0}' has no `ast` entry")]
    MissingAst(String),
}

fn describe(value: &Value) -> String {
    match value {
        Value::Object(map) => match map.get("nodeType").and_then(Value::as_str) {
            Some(node_type) => format!("'{node_type}'"),
            None => "an object without nodeType".to_string(),
        },
        Value::Array(_) => "an array".to_string(),
        Value::String(_) => "a string".to_string(),
        Value::Number(_) => "a number".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Build a tree from a `SourceUnit` JSON node.
pub fn load_source_unit<'a>(
    interner: &'a StringInterner,
    arena: &'a AstArena,
    value: &Value,
) -> Result<LoadedUnit<'a>, LoadError> {
    if value.get("nodeType").and_then(Value::as_str) != Some("SourceUnit") {
        return Err(LoadError::NotASourceUnit(describe(value)));
    }
    let mut loader = loader::Loader::new(arena, interner);
    let root = loader.source_unit(value);
    let diagnostics = loader.into_diagnostics();
    tracing::debug!(
        nodes = root.nodes.len(),
        diagnostics = diagnostics.len(),
        "loaded source unit"
    );
    Ok(LoadedUnit { root, diagnostics })
}

/// Parse `text` and build a tree from the `SourceUnit` it holds.
pub fn load_str<'a>(
    interner: &'a StringInterner,
    arena: &'a AstArena,
    text: &str,
) -> Result<LoadedUnit<'a>, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    load_source_unit(interner, arena, &value)
}

/// Build one tree per entry of a standard-JSON output's `sources` object,
/// sorted by path. Diagnostics are tagged with the source path.
pub fn load_standard_json<'a>(
    interner: &'a StringInterner,
    arena: &'a AstArena,
    value: &Value,
) -> Result<Vec<(String, LoadedUnit<'a>)>, LoadError> {
    let sources = value
        .get("sources")
        .and_then(Value::as_object)
        .ok_or(LoadError::NoSources)?;
    let mut units = Vec::with_capacity(sources.len());
    for (path, source) in sources {
        let ast = source
            .get("ast")
            .filter(|ast| !ast.is_null())
            .ok_or_else(|| LoadError::MissingAst(path.clone()))?;
        let mut unit = load_source_unit(interner, arena, ast)?;
        unit.diagnostics.set_file(path);
        units.push((path.clone(), unit));
    }
    Ok(units)
}

/// Parse `text` as standard-JSON output and build every source it holds.
pub fn load_standard_json_str<'a>(
    interner: &'a StringInterner,
    arena: &'a AstArena,
    text: &str,
) -> Result<Vec<(String, LoadedUnit<'a>)>, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    load_standard_json(interner, arena, &value)
}
