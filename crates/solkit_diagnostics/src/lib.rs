//! solkit_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Defines every diagnostic the loader and the printer can report. A
//! diagnostic never aborts the work that produced it; it is collected and
//! handed back next to the (possibly partial) result.

use solkit_core::id::NodeId;
use solkit_core::text::TextSpan;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001, 2002).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span of the offending node, if known.
    pub span: Option<TextSpan>,
    /// The id of the offending node, if known.
    pub node: Option<NodeId>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            node: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic attached to a tree node.
    pub fn at_node(
        node: NodeId,
        span: Option<TextSpan>,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            node: node.is_valid().then_some(node),
            span,
            ..Self::new(message, args)
        }
    }

    /// Attach the file this diagnostic belongs to.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} SK{}: {}", self.category, self.code, self.message_text)?;
        if let Some(node) = self.node {
            write!(f, " [node {}]", node)?;
        }
        Ok(())
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while loading or printing.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Whether any diagnostic carries the given code.
    pub fn contains_code(&self, code: u32) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    /// Set the file of every diagnostic that has none yet.
    pub fn set_file(&mut self, file: &str) {
        for diagnostic in self.diagnostics.iter_mut().filter(|d| d.file.is_none()) {
            diagnostic.file = Some(file.to_string());
        }
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let file_cmp = a.file.cmp(&b.file);
            if file_cmp != std::cmp::Ordering::Equal {
                return file_cmp;
            }
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        });
    }
}

impl<'c> IntoIterator for &'c DiagnosticCollection {
    type Item = &'c Diagnostic;
    type IntoIter = std::slice::Iter<'c, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Printer (1000-1099)
    // ========================================================================
    pub const UNSUPPORTED_NODE_KIND_0_CANNOT_BE_PRINTED: DiagnosticMessage = diag!(1001, Error, "Unsupported node kind '{0}' cannot be printed.");
    pub const MISSING_REQUIRED_0_OF_1: DiagnosticMessage = diag!(1002, Error, "Missing required {0} of {1}.");
    pub const CODE_0_HAS_NO_ENTRY_IN_THE_1_TABLE: DiagnosticMessage = diag!(1003, Error, "Code '{0}' has no entry in the {1} table.");
    pub const DECLARATION_0_REFERENCED_BY_1_NOT_FOUND: DiagnosticMessage = diag!(1004, Error, "Declaration {0} referenced by type name '{1}' was not found in the tree.");
    pub const _0_EXPECTS_1_EXPRESSIONS_BUT_HAS_2: DiagnosticMessage = diag!(1005, Error, "{0} expects {1} sub-expressions but has {2}.");

    // ========================================================================
    // JSON AST loader (2000-2099)
    // ========================================================================
    pub const UNSUPPORTED_NODE_TYPE_0_IN_1: DiagnosticMessage = diag!(2001, Error, "Unsupported node type '{0}' in {1}.");
    pub const MISSING_FIELD_0_ON_1_NODE: DiagnosticMessage = diag!(2002, Error, "Missing field '{0}' on {1} node.");
    pub const INVALID_SOURCE_LOCATION_0: DiagnosticMessage = diag!(2003, Warning, "Invalid source location '{0}'.");
    pub const UNKNOWN_1_0: DiagnosticMessage = diag!(2004, Warning, "Unknown {1} '{0}'.");
    pub const NODE_TYPE_0_HAS_NO_ID: DiagnosticMessage = diag!(2005, Warning, "Node of type '{0}' has no id.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("Missing required {0} of {1}.", &["condition", "IfStatement"]);
        assert_eq!(msg, "Missing required condition of IfStatement.");
    }

    #[test]
    fn test_format_message_no_args() {
        let msg = format_message("Nothing to fill.", &[]);
        assert_eq!(msg, "Nothing to fill.");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::at_node(
            NodeId(42),
            Some(TextSpan::new(10, 5)),
            &messages::DECLARATION_0_REFERENCED_BY_1_NOT_FOUND,
            &["#7", "Position"],
        )
        .in_file("Vault.json");
        let display = format!("{}", diag);
        assert!(display.starts_with("Vault.json(10): error SK1004"));
        assert!(display.contains("Position"));
        assert!(display.ends_with("[node #42]"));
    }

    #[test]
    fn test_diagnostic_at_invalid_node_has_no_node() {
        let diag = Diagnostic::at_node(
            NodeId::INVALID,
            None,
            &messages::MISSING_REQUIRED_0_OF_1,
            &["body", "WhileStatement"],
        );
        assert!(diag.node.is_none());
        assert!(diag.is_error());
        assert_eq!(diag.code, 1002);
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(Diagnostic::new(&messages::UNKNOWN_1_0, &["sometimes", "visibility"]));
        assert!(!collection.has_errors());

        collection.add(Diagnostic::new(&messages::MISSING_FIELD_0_ON_1_NODE, &["body", "WhileStatement"]));
        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.len(), 2);
        assert!(collection.contains_code(2004));
    }

    #[test]
    fn test_diagnostic_collection_sort_and_set_file() {
        let mut collection = DiagnosticCollection::new();
        let late = Diagnostic::at_node(NodeId(1), Some(TextSpan::new(30, 1)), &messages::UNSUPPORTED_NODE_TYPE_0_IN_1, &["X", "Block"]);
        let early = Diagnostic::at_node(NodeId(2), Some(TextSpan::new(5, 1)), &messages::UNSUPPORTED_NODE_TYPE_0_IN_1, &["Y", "Block"]);
        collection.add(late);
        collection.add(early);
        collection.set_file("a.json");
        collection.sort();
        assert_eq!(collection.diagnostics()[0].node, Some(NodeId(2)));
        assert!(collection.iter().all(|d| d.file.as_deref() == Some("a.json")));
    }
}
