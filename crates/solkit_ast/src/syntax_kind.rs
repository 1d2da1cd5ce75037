//! SyntaxKind enum - every token and node kind of the Solidity tree.
//!
//! Operator and keyword kinds double as the enumerated codes stored on
//! nodes (operators, visibility, mutability, storage location). Node
//! kinds tag every `NodeData`.

/// The kind of a syntax token or node in the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown = 0,

    // ========================================================================
    // Operators
    // ========================================================================
    PlusToken = 1,
    MinusToken = 2,
    AsteriskToken = 3,
    SlashToken = 4,
    PercentToken = 5,
    AsteriskAsteriskToken = 6,
    EqualsEqualsToken = 7,
    ExclamationEqualsToken = 8,
    LessThanToken = 9,
    LessThanEqualsToken = 10,
    GreaterThanToken = 11,
    GreaterThanEqualsToken = 12,
    AmpersandAmpersandToken = 13,
    BarBarToken = 14,
    AmpersandToken = 15,
    BarToken = 16,
    CaretToken = 17,
    LessThanLessThanToken = 18,
    GreaterThanGreaterThanToken = 19,
    ExclamationToken = 20,
    TildeToken = 21,
    PlusPlusToken = 22,
    MinusMinusToken = 23,

    // Assignment operators
    EqualsToken = 30,
    PlusEqualsToken = 31,
    MinusEqualsToken = 32,
    AsteriskEqualsToken = 33,
    SlashEqualsToken = 34,
    PercentEqualsToken = 35,
    AmpersandEqualsToken = 36,
    BarEqualsToken = 37,
    CaretEqualsToken = 38,
    LessThanLessThanEqualsToken = 39,
    GreaterThanGreaterThanEqualsToken = 40,
    AsteriskAsteriskEqualsToken = 41,

    // ========================================================================
    // Keywords
    // ========================================================================
    ContractKeyword = 60,
    InterfaceKeyword = 61,
    LibraryKeyword = 62,
    FunctionKeyword = 63,
    ConstructorKeyword = 64,
    FallbackKeyword = 65,
    ReceiveKeyword = 66,
    ModifierKeyword = 67,

    // Visibility
    PublicKeyword = 70,
    PrivateKeyword = 71,
    InternalKeyword = 72,
    ExternalKeyword = 73,

    // State mutability
    PureKeyword = 80,
    ViewKeyword = 81,
    PayableKeyword = 82,
    NonpayableKeyword = 83,

    // Variable mutability
    MutableKeyword = 90,
    ConstantKeyword = 91,
    ImmutableKeyword = 92,

    // Data location
    DefaultKeyword = 100,
    MemoryKeyword = 101,
    StorageKeyword = 102,
    CalldataKeyword = 103,
    TransientKeyword = 104,

    DeleteKeyword = 110,
    TrueKeyword = 111,
    FalseKeyword = 112,

    // ========================================================================
    // Source unit level
    // ========================================================================
    SourceUnit = 200,
    PragmaDirective = 201,
    ImportDirective = 202,
    ContractDefinition = 203,
    InheritanceSpecifier = 204,
    IdentifierPath = 205,
    FunctionDefinition = 206,
    ModifierDefinition = 207,
    ModifierInvocation = 208,
    OverrideSpecifier = 209,
    ParameterList = 210,
    VariableDeclaration = 211,
    StateVariableDeclaration = 212,
    StructDefinition = 213,
    EnumDefinition = 214,
    EnumValue = 215,
    EventDefinition = 216,
    ErrorDefinition = 217,
    UsingForDirective = 218,
    UserDefinedValueTypeDefinition = 219,

    // ========================================================================
    // Statements
    // ========================================================================
    Block = 300,
    UncheckedBlock = 301,
    IfStatement = 302,
    ForStatement = 303,
    WhileStatement = 304,
    DoWhileStatement = 305,
    ContinueStatement = 306,
    BreakStatement = 307,
    ReturnStatement = 308,
    EmitStatement = 309,
    RevertStatement = 310,
    VariableDeclarationStatement = 311,
    ExpressionStatement = 312,
    InlineAssembly = 313,
    TryStatement = 314,
    TryCatchClause = 315,
    PlaceholderStatement = 316,

    // ========================================================================
    // Expressions
    // ========================================================================
    Assignment = 400,
    BinaryOperation = 401,
    UnaryOperation = 402,
    Conditional = 403,
    FunctionCall = 404,
    FunctionCallOptions = 405,
    MemberAccess = 406,
    IndexAccess = 407,
    IndexRangeAccess = 408,
    TupleExpression = 409,
    NewExpression = 410,
    ElementaryTypeNameExpression = 411,
    Literal = 412,
    Identifier = 413,

    // ========================================================================
    // Type names
    // ========================================================================
    ElementaryTypeName = 500,
    UserDefinedTypeName = 501,
    Mapping = 502,
    ArrayTypeName = 503,
    FunctionTypeName = 504,

    // ========================================================================
    // Inline assembly (Yul)
    // ========================================================================
    YulBlock = 600,
    YulVariableDeclaration = 601,
    YulAssignment = 602,
    YulExpressionStatement = 603,
    YulIf = 604,
    YulForLoop = 605,
    YulSwitch = 606,
    YulCase = 607,
    YulFunctionDefinition = 608,
    YulLeave = 609,
    YulBreak = 610,
    YulContinue = 611,
    YulFunctionCall = 612,
    YulIdentifier = 613,
    YulLiteral = 614,
    YulTypedName = 615,

    /// Placeholder left by the build phase where a required node is absent
    /// or could not be built.
    Missing = 900,
}

impl SyntaxKind {
    pub const FIRST_BINARY_OPERATOR: SyntaxKind = SyntaxKind::PlusToken;
    pub const LAST_BINARY_OPERATOR: SyntaxKind = SyntaxKind::GreaterThanGreaterThanToken;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::AsteriskAsteriskEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::ContractKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::FalseKeyword;
    pub const FIRST_STATEMENT: SyntaxKind = SyntaxKind::Block;
    pub const LAST_STATEMENT: SyntaxKind = SyntaxKind::PlaceholderStatement;
    pub const FIRST_EXPRESSION: SyntaxKind = SyntaxKind::Assignment;
    pub const LAST_EXPRESSION: SyntaxKind = SyntaxKind::Identifier;
    pub const FIRST_YUL_NODE: SyntaxKind = SyntaxKind::YulBlock;
    pub const LAST_YUL_NODE: SyntaxKind = SyntaxKind::YulTypedName;
}

impl SyntaxKind {
    /// Whether this kind is an operator token.
    #[inline]
    pub fn is_operator(self) -> bool {
        self >= SyntaxKind::FIRST_BINARY_OPERATOR && self <= SyntaxKind::LAST_ASSIGNMENT
    }

    /// Whether this kind is an assignment operator (`=` or compound).
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self >= SyntaxKind::FIRST_ASSIGNMENT && self <= SyntaxKind::LAST_ASSIGNMENT
    }

    /// Whether this kind is a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= SyntaxKind::FIRST_KEYWORD && self <= SyntaxKind::LAST_KEYWORD
    }

    /// Whether this kind is a statement.
    #[inline]
    pub fn is_statement(self) -> bool {
        self >= SyntaxKind::FIRST_STATEMENT && self <= SyntaxKind::LAST_STATEMENT
    }

    /// Whether this kind is an expression.
    #[inline]
    pub fn is_expression(self) -> bool {
        self >= SyntaxKind::FIRST_EXPRESSION && self <= SyntaxKind::LAST_EXPRESSION
    }

    /// Whether this kind belongs to the inline-assembly grammar.
    #[inline]
    pub fn is_yul(self) -> bool {
        self >= SyntaxKind::FIRST_YUL_NODE && self <= SyntaxKind::LAST_YUL_NODE
    }

    /// Whether a node of this kind ends in its own brace-delimited block.
    ///
    /// Such nodes end their own line when printed and never receive a
    /// statement terminator from their container.
    #[inline]
    pub fn is_block_producing(self) -> bool {
        matches!(
            self,
            SyntaxKind::Block
                | SyntaxKind::UncheckedBlock
                | SyntaxKind::IfStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::DoWhileStatement
                | SyntaxKind::InlineAssembly
                | SyntaxKind::TryStatement
                | SyntaxKind::FunctionDefinition
                | SyntaxKind::ModifierDefinition
                | SyntaxKind::ContractDefinition
                | SyntaxKind::StructDefinition
                | SyntaxKind::EnumDefinition
                | SyntaxKind::YulBlock
                | SyntaxKind::YulIf
                | SyntaxKind::YulForLoop
                | SyntaxKind::YulSwitch
                | SyntaxKind::YulFunctionDefinition
        )
    }

    /// Whether a node of this kind writes its own terminator and line end.
    #[inline]
    pub fn is_self_terminating(self) -> bool {
        self.is_block_producing()
            || matches!(self, SyntaxKind::PragmaDirective | SyntaxKind::ImportDirective)
    }

    /// Look up an operator kind from its source text.
    pub fn from_operator(text: &str) -> Option<SyntaxKind> {
        match text {
            "+" => Some(SyntaxKind::PlusToken),
            "-" => Some(SyntaxKind::MinusToken),
            "*" => Some(SyntaxKind::AsteriskToken),
            "/" => Some(SyntaxKind::SlashToken),
            "%" => Some(SyntaxKind::PercentToken),
            "**" => Some(SyntaxKind::AsteriskAsteriskToken),
            "==" => Some(SyntaxKind::EqualsEqualsToken),
            "!=" => Some(SyntaxKind::ExclamationEqualsToken),
            "<" => Some(SyntaxKind::LessThanToken),
            "<=" => Some(SyntaxKind::LessThanEqualsToken),
            ">" => Some(SyntaxKind::GreaterThanToken),
            ">=" => Some(SyntaxKind::GreaterThanEqualsToken),
            "&&" => Some(SyntaxKind::AmpersandAmpersandToken),
            "||" => Some(SyntaxKind::BarBarToken),
            "&" => Some(SyntaxKind::AmpersandToken),
            "|" => Some(SyntaxKind::BarToken),
            "^" => Some(SyntaxKind::CaretToken),
            "<<" => Some(SyntaxKind::LessThanLessThanToken),
            ">>" => Some(SyntaxKind::GreaterThanGreaterThanToken),
            "!" => Some(SyntaxKind::ExclamationToken),
            "~" => Some(SyntaxKind::TildeToken),
            "++" => Some(SyntaxKind::PlusPlusToken),
            "--" => Some(SyntaxKind::MinusMinusToken),
            "delete" => Some(SyntaxKind::DeleteKeyword),
            "=" => Some(SyntaxKind::EqualsToken),
            "+=" => Some(SyntaxKind::PlusEqualsToken),
            "-=" => Some(SyntaxKind::MinusEqualsToken),
            "*=" => Some(SyntaxKind::AsteriskEqualsToken),
            "/=" => Some(SyntaxKind::SlashEqualsToken),
            "%=" => Some(SyntaxKind::PercentEqualsToken),
            "&=" => Some(SyntaxKind::AmpersandEqualsToken),
            "|=" => Some(SyntaxKind::BarEqualsToken),
            "^=" => Some(SyntaxKind::CaretEqualsToken),
            "<<=" => Some(SyntaxKind::LessThanLessThanEqualsToken),
            ">>=" => Some(SyntaxKind::GreaterThanGreaterThanEqualsToken),
            "**=" => Some(SyntaxKind::AsteriskAsteriskEqualsToken),
            _ => None,
        }
    }

    /// Look up a keyword kind from the spelling a compiler AST uses for
    /// enumerated attributes (visibility, mutability, location, kinds).
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "contract" => Some(SyntaxKind::ContractKeyword),
            "interface" => Some(SyntaxKind::InterfaceKeyword),
            "library" => Some(SyntaxKind::LibraryKeyword),
            "function" | "freeFunction" => Some(SyntaxKind::FunctionKeyword),
            "constructor" => Some(SyntaxKind::ConstructorKeyword),
            "fallback" => Some(SyntaxKind::FallbackKeyword),
            "receive" => Some(SyntaxKind::ReceiveKeyword),
            "modifier" => Some(SyntaxKind::ModifierKeyword),
            "public" => Some(SyntaxKind::PublicKeyword),
            "private" => Some(SyntaxKind::PrivateKeyword),
            "internal" => Some(SyntaxKind::InternalKeyword),
            "external" => Some(SyntaxKind::ExternalKeyword),
            "pure" => Some(SyntaxKind::PureKeyword),
            "view" => Some(SyntaxKind::ViewKeyword),
            "payable" => Some(SyntaxKind::PayableKeyword),
            "nonpayable" => Some(SyntaxKind::NonpayableKeyword),
            "mutable" => Some(SyntaxKind::MutableKeyword),
            "constant" => Some(SyntaxKind::ConstantKeyword),
            "immutable" => Some(SyntaxKind::ImmutableKeyword),
            "default" => Some(SyntaxKind::DefaultKeyword),
            "memory" => Some(SyntaxKind::MemoryKeyword),
            "storage" => Some(SyntaxKind::StorageKeyword),
            "calldata" => Some(SyntaxKind::CalldataKeyword),
            "transient" => Some(SyntaxKind::TransientKeyword),
            "delete" => Some(SyntaxKind::DeleteKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            _ => None,
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_ranges() {
        assert!(SyntaxKind::PlusToken.is_operator());
        assert!(SyntaxKind::AsteriskAsteriskEqualsToken.is_assignment_operator());
        assert!(!SyntaxKind::PlusToken.is_assignment_operator());
        assert!(!SyntaxKind::PublicKeyword.is_operator());
    }

    #[test]
    fn test_from_operator() {
        assert_eq!(SyntaxKind::from_operator("&&"), Some(SyntaxKind::AmpersandAmpersandToken));
        assert_eq!(SyntaxKind::from_operator(">>="), Some(SyntaxKind::GreaterThanGreaterThanEqualsToken));
        assert_eq!(SyntaxKind::from_operator("=>"), None);
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(SyntaxKind::from_keyword("calldata"), Some(SyntaxKind::CalldataKeyword));
        assert_eq!(SyntaxKind::from_keyword("freeFunction"), Some(SyntaxKind::FunctionKeyword));
        assert_eq!(SyntaxKind::from_keyword("sometimes"), None);
    }

    #[test]
    fn test_block_producing() {
        assert!(SyntaxKind::IfStatement.is_block_producing());
        assert!(SyntaxKind::ContractDefinition.is_block_producing());
        assert!(!SyntaxKind::ReturnStatement.is_block_producing());
        assert!(!SyntaxKind::EventDefinition.is_block_producing());
        assert!(SyntaxKind::ImportDirective.is_self_terminating());
        assert!(!SyntaxKind::ImportDirective.is_block_producing());
    }

    #[test]
    fn test_category_ranges() {
        assert!(SyntaxKind::TryStatement.is_statement());
        assert!(SyntaxKind::Conditional.is_expression());
        assert!(SyntaxKind::YulSwitch.is_yul());
        assert!(!SyntaxKind::Mapping.is_expression());
    }
}
