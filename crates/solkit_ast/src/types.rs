//! Flag types and small enumerations shared by AST nodes.

use std::fmt;

pub use solkit_core::id::NodeId;

bitflags::bitflags! {
    /// Boolean qualifiers of declarations and statements.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const NONE       = 0;
        /// `abstract contract`
        const ABSTRACT   = 1 << 0;
        /// `virtual` functions and modifiers
        const VIRTUAL    = 1 << 1;
        /// `indexed` event parameters
        const INDEXED    = 1 << 2;
        /// `anonymous` events
        const ANONYMOUS  = 1 << 3;
        /// `using ... for ... global`
        const GLOBAL     = 1 << 4;
        /// `unchecked { ... }` blocks
        const UNCHECKED  = 1 << 5;
    }
}

/// The lexical kind of a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Number,
    Bool,
    String,
    HexString,
    UnicodeString,
}

impl LiteralKind {
    /// Parse the spelling used by compiler ASTs (`number`, `hexString`, ...).
    pub fn from_name(name: &str) -> Option<LiteralKind> {
        match name {
            "number" => Some(LiteralKind::Number),
            "bool" => Some(LiteralKind::Bool),
            "string" => Some(LiteralKind::String),
            "hexString" => Some(LiteralKind::HexString),
            "unicodeString" => Some(LiteralKind::UnicodeString),
            _ => None,
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiteralKind::Number => "number",
            LiteralKind::Bool => "bool",
            LiteralKind::String => "string",
            LiteralKind::HexString => "hexString",
            LiteralKind::UnicodeString => "unicodeString",
        };
        f.write_str(name)
    }
}
