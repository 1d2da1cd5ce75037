//! solkit_ast: Abstract Syntax Tree definitions for Solidity.
//!
//! Defines the closed node enums, the SyntaxKind enum, flag types, generic
//! traversal and the id index used to resolve declaration references.

pub mod generated;
pub mod node;
pub mod syntax_kind;
pub mod tree;
pub mod types;
pub mod visitor;

// Re-export key types
pub use generated::NodeRef;
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use tree::{Declaration, ResolveError, SourceTree};
pub use types::*;
