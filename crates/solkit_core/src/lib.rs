//! solkit_core: Core utilities shared by every solkit crate.
//!
//! Provides the AST arena, string interning, source ranges and node ids
//! used by the tree model, the loader and the printer.

pub mod arena;
pub mod id;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::AstArena;
pub use id::NodeId;
pub use intern::{InternedString, StringInterner};
pub use text::{SourceLocation, TextRange, TextSpan};
