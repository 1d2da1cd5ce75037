//! Operator and keyword tables.
//!
//! Each function maps a `SyntaxKind` code to its canonical spelling.
//! `None` means the code has no entry in that table; `Some("")` is a valid
//! code whose spelling is blank (the default storage location, the
//! non-payable mutability).

use solkit_ast::SyntaxKind;

pub fn assignment_operator(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::EqualsToken => "=",
        SyntaxKind::PlusEqualsToken => "+=",
        SyntaxKind::MinusEqualsToken => "-=",
        SyntaxKind::AsteriskEqualsToken => "*=",
        SyntaxKind::SlashEqualsToken => "/=",
        SyntaxKind::PercentEqualsToken => "%=",
        SyntaxKind::AmpersandEqualsToken => "&=",
        SyntaxKind::BarEqualsToken => "|=",
        SyntaxKind::CaretEqualsToken => "^=",
        SyntaxKind::LessThanLessThanEqualsToken => "<<=",
        SyntaxKind::GreaterThanGreaterThanEqualsToken => ">>=",
        SyntaxKind::AsteriskAsteriskEqualsToken => "**=",
        _ => return None,
    })
}

pub fn binary_operator(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::PlusToken => "+",
        SyntaxKind::MinusToken => "-",
        SyntaxKind::AsteriskToken => "*",
        SyntaxKind::SlashToken => "/",
        SyntaxKind::PercentToken => "%",
        SyntaxKind::AsteriskAsteriskToken => "**",
        SyntaxKind::EqualsEqualsToken => "==",
        SyntaxKind::ExclamationEqualsToken => "!=",
        SyntaxKind::GreaterThanToken => ">",
        SyntaxKind::GreaterThanEqualsToken => ">=",
        SyntaxKind::LessThanToken => "<",
        SyntaxKind::LessThanEqualsToken => "<=",
        SyntaxKind::BarBarToken => "||",
        // Logical AND reaches the printer as a plain BinaryOperation.
        SyntaxKind::AmpersandAmpersandToken => "&&",
        SyntaxKind::AmpersandToken => "&",
        SyntaxKind::BarToken => "|",
        SyntaxKind::CaretToken => "^",
        SyntaxKind::LessThanLessThanToken => "<<",
        SyntaxKind::GreaterThanGreaterThanToken => ">>",
        _ => return None,
    })
}

pub fn unary_operator(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::ExclamationToken => "!",
        SyntaxKind::TildeToken => "~",
        SyntaxKind::MinusToken => "-",
        SyntaxKind::PlusPlusToken => "++",
        SyntaxKind::MinusMinusToken => "--",
        SyntaxKind::DeleteKeyword => "delete",
        _ => return None,
    })
}

pub fn storage_location(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::DefaultKeyword => "",
        SyntaxKind::MemoryKeyword => "memory",
        SyntaxKind::StorageKeyword => "storage",
        SyntaxKind::CalldataKeyword => "calldata",
        SyntaxKind::TransientKeyword => "transient",
        _ => return None,
    })
}

pub fn visibility(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::InternalKeyword => "internal",
        SyntaxKind::PublicKeyword => "public",
        SyntaxKind::ExternalKeyword => "external",
        SyntaxKind::PrivateKeyword => "private",
        _ => return None,
    })
}

pub fn state_mutability(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::PureKeyword => "pure",
        SyntaxKind::ViewKeyword => "view",
        SyntaxKind::PayableKeyword => "payable",
        SyntaxKind::NonpayableKeyword => "",
        _ => return None,
    })
}

pub fn variable_mutability(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::MutableKeyword => "",
        SyntaxKind::ConstantKeyword => "constant",
        SyntaxKind::ImmutableKeyword => "immutable",
        _ => return None,
    })
}

pub fn contract_kind(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::ContractKeyword => "contract",
        SyntaxKind::InterfaceKeyword => "interface",
        SyntaxKind::LibraryKeyword => "library",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_operators() {
        let cases = [
            (SyntaxKind::PlusToken, "+"),
            (SyntaxKind::AsteriskAsteriskToken, "**"),
            (SyntaxKind::ExclamationEqualsToken, "!="),
            (SyntaxKind::LessThanEqualsToken, "<="),
            (SyntaxKind::BarBarToken, "||"),
            (SyntaxKind::AmpersandAmpersandToken, "&&"),
            (SyntaxKind::GreaterThanGreaterThanToken, ">>"),
        ];
        for (kind, text) in cases {
            assert_eq!(binary_operator(kind), Some(text));
            assert_eq!(SyntaxKind::from_operator(text), Some(kind));
        }
    }

    #[test]
    fn test_assignment_operators_match_scanner_spelling() {
        for text in ["=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", "**="] {
            let kind = SyntaxKind::from_operator(text).unwrap();
            assert!(kind.is_assignment_operator());
            assert_eq!(assignment_operator(kind), Some(text));
        }
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(unary_operator(SyntaxKind::ExclamationToken), Some("!"));
        assert_eq!(unary_operator(SyntaxKind::MinusToken), Some("-"));
        assert_eq!(unary_operator(SyntaxKind::PlusPlusToken), Some("++"));
        assert_eq!(unary_operator(SyntaxKind::DeleteKeyword), Some("delete"));
    }

    #[test]
    fn test_blank_defaults_are_present() {
        assert_eq!(storage_location(SyntaxKind::DefaultKeyword), Some(""));
        assert_eq!(state_mutability(SyntaxKind::NonpayableKeyword), Some(""));
        assert_eq!(variable_mutability(SyntaxKind::MutableKeyword), Some(""));
    }

    #[test]
    fn test_unmapped_codes_are_absent() {
        assert_eq!(binary_operator(SyntaxKind::EqualsToken), None);
        assert_eq!(binary_operator(SyntaxKind::Unknown), None);
        assert_eq!(assignment_operator(SyntaxKind::PlusToken), None);
        assert_eq!(unary_operator(SyntaxKind::AsteriskToken), None);
        assert_eq!(visibility(SyntaxKind::PureKeyword), None);
        assert_eq!(state_mutability(SyntaxKind::PublicKeyword), None);
        assert_eq!(storage_location(SyntaxKind::Unknown), None);
        assert_eq!(contract_kind(SyntaxKind::FunctionKeyword), None);
    }

    #[test]
    fn test_keyword_spellings() {
        assert_eq!(visibility(SyntaxKind::ExternalKeyword), Some("external"));
        assert_eq!(state_mutability(SyntaxKind::ViewKeyword), Some("view"));
        assert_eq!(storage_location(SyntaxKind::CalldataKeyword), Some("calldata"));
        assert_eq!(variable_mutability(SyntaxKind::ImmutableKeyword), Some("immutable"));
        assert_eq!(contract_kind(SyntaxKind::LibraryKeyword), Some("library"));
    }
}
