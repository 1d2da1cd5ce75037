//! AST node definitions for Solidity source units.
//!
//! Every Solidity construct has its own struct, grouped into closed
//! category enums. Nodes reference child nodes via arena-allocated
//! references and never own heap data.

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use solkit_core::intern::InternedString;
use solkit_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Copy)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Identity of the node within its tree.
    pub id: NodeId,
    /// Source position range.
    pub range: TextRange,
    /// Boolean qualifiers (abstract, virtual, indexed, ...).
    pub modifier_flags: ModifierFlags,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, id: NodeId) -> Self {
        Self {
            kind,
            id,
            range: TextRange::default(),
            modifier_flags: ModifierFlags::NONE,
        }
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_flags(mut self, flags: ModifierFlags) -> Self {
        self.modifier_flags |= flags;
        self
    }

    #[inline]
    pub fn has_flag(&self, flag: ModifierFlags) -> bool {
        self.modifier_flags.contains(flag)
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

/// Stand-in for a required node the build phase could not produce.
///
/// `expected` names the field of `parent` that should have held a node;
/// `found` is the foreign node type when an unsupported construct was met,
/// and `None` when the field was simply absent.
#[derive(Debug, Clone, Copy)]
pub struct MissingNode {
    pub data: NodeData,
    pub parent: SyntaxKind,
    pub expected: &'static str,
    pub found: Option<InternedString>,
}

// ============================================================================
// Source Unit
// ============================================================================

#[derive(Debug)]
pub struct SourceUnit<'a> {
    pub data: NodeData,
    pub absolute_path: Option<InternedString>,
    /// SPDX license identifier, printed as a header comment.
    pub license: Option<InternedString>,
    pub nodes: NodeList<'a, SourceUnitItem<'a>>,
}

#[derive(Debug)]
pub enum SourceUnitItem<'a> {
    Pragma(PragmaDirective<'a>),
    Import(ImportDirective<'a>),
    Contract(ContractDefinition<'a>),
    Function(FunctionDefinition<'a>),
    Struct(StructDefinition<'a>),
    Enum(EnumDefinition<'a>),
    Event(EventDefinition<'a>),
    Error(ErrorDefinition<'a>),
    UsingFor(UsingForDirective<'a>),
    /// File-level constant.
    Constant(StateVariableDeclaration<'a>),
    UserDefinedValueType(UserDefinedValueTypeDefinition<'a>),
    Missing(MissingNode),
}

#[derive(Debug)]
pub struct PragmaDirective<'a> {
    pub data: NodeData,
    /// Tokens after `pragma`, e.g. `solidity`, `^`, `0.8`, `.20`.
    pub literals: NodeList<'a, InternedString>,
}

#[derive(Debug)]
pub struct ImportDirective<'a> {
    pub data: NodeData,
    pub file: InternedString,
    pub unit_alias: Option<InternedString>,
    pub symbol_aliases: NodeList<'a, SymbolAlias>,
}

#[derive(Debug)]
pub struct SymbolAlias {
    pub data: NodeData,
    pub foreign: InternedString,
    pub local: Option<InternedString>,
}

// ============================================================================
// Contracts
// ============================================================================

#[derive(Debug)]
pub struct ContractDefinition<'a> {
    pub data: NodeData,
    pub name: InternedString,
    /// `ContractKeyword`, `InterfaceKeyword` or `LibraryKeyword`.
    pub contract_kind: SyntaxKind,
    pub base_contracts: NodeList<'a, InheritanceSpecifier<'a>>,
    pub nodes: NodeList<'a, ContractMember<'a>>,
}

impl ContractDefinition<'_> {
    pub fn is_abstract(&self) -> bool {
        self.data.has_flag(ModifierFlags::ABSTRACT)
    }
}

#[derive(Debug)]
pub struct InheritanceSpecifier<'a> {
    pub data: NodeData,
    pub base_name: IdentifierPath,
    pub arguments: Option<NodeList<'a, Expression<'a>>>,
}

/// A possibly dotted name (`Base`, `Lib.Item`) referring to a declaration.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierPath {
    pub data: NodeData,
    pub name: InternedString,
    pub referenced_declaration: Option<NodeId>,
}

#[derive(Debug)]
pub enum ContractMember<'a> {
    Function(FunctionDefinition<'a>),
    Modifier(ModifierDefinition<'a>),
    StateVariable(StateVariableDeclaration<'a>),
    Struct(StructDefinition<'a>),
    Enum(EnumDefinition<'a>),
    Event(EventDefinition<'a>),
    Error(ErrorDefinition<'a>),
    UsingFor(UsingForDirective<'a>),
    UserDefinedValueType(UserDefinedValueTypeDefinition<'a>),
    Missing(MissingNode),
}

// ============================================================================
// Functions and modifiers
// ============================================================================

#[derive(Debug)]
pub struct FunctionDefinition<'a> {
    pub data: NodeData,
    /// `FunctionKeyword`, `ConstructorKeyword`, `FallbackKeyword` or `ReceiveKeyword`.
    pub function_kind: SyntaxKind,
    /// Absent for constructors, fallback and receive functions.
    pub name: Option<InternedString>,
    pub parameters: ParameterList<'a>,
    pub return_parameters: ParameterList<'a>,
    pub visibility: SyntaxKind,
    pub state_mutability: SyntaxKind,
    pub overrides: Option<OverrideSpecifier<'a>>,
    pub modifiers: NodeList<'a, ModifierInvocation<'a>>,
    /// Absent for declarations without implementation.
    pub body: Option<Block<'a>>,
}

impl FunctionDefinition<'_> {
    pub fn is_virtual(&self) -> bool {
        self.data.has_flag(ModifierFlags::VIRTUAL)
    }

    pub fn is_constructor(&self) -> bool {
        self.function_kind == SyntaxKind::ConstructorKeyword
    }
}

#[derive(Debug)]
pub struct ModifierDefinition<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub parameters: ParameterList<'a>,
    pub overrides: Option<OverrideSpecifier<'a>>,
    pub body: Option<Block<'a>>,
}

impl ModifierDefinition<'_> {
    pub fn is_virtual(&self) -> bool {
        self.data.has_flag(ModifierFlags::VIRTUAL)
    }
}

#[derive(Debug)]
pub struct ModifierInvocation<'a> {
    pub data: NodeData,
    pub modifier_name: IdentifierPath,
    pub arguments: Option<NodeList<'a, Expression<'a>>>,
}

#[derive(Debug)]
pub struct OverrideSpecifier<'a> {
    pub data: NodeData,
    pub overrides: NodeList<'a, IdentifierPath>,
}

#[derive(Debug)]
pub struct ParameterList<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, VariableDeclaration<'a>>,
}

// ============================================================================
// Variables and type definitions
// ============================================================================

/// A parameter, local variable or struct member.
#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    pub name: Option<InternedString>,
    pub type_name: &'a TypeName<'a>,
    /// `DefaultKeyword` when no location was written.
    pub storage_location: SyntaxKind,
}

impl VariableDeclaration<'_> {
    pub fn is_indexed(&self) -> bool {
        self.data.has_flag(ModifierFlags::INDEXED)
    }
}

#[derive(Debug)]
pub struct StateVariableDeclaration<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub type_name: &'a TypeName<'a>,
    pub visibility: SyntaxKind,
    /// `MutableKeyword`, `ConstantKeyword` or `ImmutableKeyword`.
    pub mutability: SyntaxKind,
    pub overrides: Option<OverrideSpecifier<'a>>,
    pub value: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct StructDefinition<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub members: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug)]
pub struct EnumDefinition<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub members: NodeList<'a, EnumValue>,
}

#[derive(Debug)]
pub struct EnumValue {
    pub data: NodeData,
    pub name: InternedString,
}

#[derive(Debug)]
pub struct EventDefinition<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub parameters: ParameterList<'a>,
}

impl EventDefinition<'_> {
    pub fn is_anonymous(&self) -> bool {
        self.data.has_flag(ModifierFlags::ANONYMOUS)
    }
}

#[derive(Debug)]
pub struct ErrorDefinition<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub parameters: ParameterList<'a>,
}

#[derive(Debug)]
pub struct UsingForDirective<'a> {
    pub data: NodeData,
    pub library_name: Option<IdentifierPath>,
    pub function_list: NodeList<'a, UsingForFunction>,
    /// Absent for `using L for *`.
    pub type_name: OptionalNode<'a, TypeName<'a>>,
}

impl UsingForDirective<'_> {
    pub fn is_global(&self) -> bool {
        self.data.has_flag(ModifierFlags::GLOBAL)
    }
}

/// An entry of `using {f, g as +} for T`.
#[derive(Debug)]
pub struct UsingForFunction {
    pub function: IdentifierPath,
    pub operator: Option<SyntaxKind>,
}

#[derive(Debug)]
pub struct UserDefinedValueTypeDefinition<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub underlying_type: &'a TypeName<'a>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub enum Statement<'a> {
    Block(Block<'a>),
    UncheckedBlock(Block<'a>),
    If(IfStatement<'a>),
    For(ForStatement<'a>),
    While(WhileStatement<'a>),
    DoWhile(WhileStatement<'a>),
    Continue(NodeData),
    Break(NodeData),
    Return(ReturnStatement<'a>),
    Emit(EmitStatement<'a>),
    Revert(RevertStatement<'a>),
    VariableDeclaration(VariableDeclarationStatement<'a>),
    Expression(ExpressionStatement<'a>),
    InlineAssembly(InlineAssembly<'a>),
    Try(TryStatement<'a>),
    /// The `_` inside a modifier body.
    Placeholder(NodeData),
    Missing(MissingNode),
}

#[derive(Debug)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub true_body: &'a Statement<'a>,
    pub false_body: OptionalNode<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub initialization: OptionalNode<'a, Statement<'a>>,
    pub condition: OptionalNode<'a, Expression<'a>>,
    pub loop_expression: OptionalNode<'a, Expression<'a>>,
    pub body: &'a Statement<'a>,
}

/// Shared by `while` and `do ... while`.
#[derive(Debug)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct EmitStatement<'a> {
    pub data: NodeData,
    pub event_call: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct RevertStatement<'a> {
    pub data: NodeData,
    pub error_call: &'a Expression<'a>,
}

/// `T a = e;` or the destructuring form `(T a, , T b) = e;`.
///
/// A `None` declaration is a skipped tuple slot.
#[derive(Debug)]
pub struct VariableDeclarationStatement<'a> {
    pub data: NodeData,
    pub declarations: NodeList<'a, Option<VariableDeclaration<'a>>>,
    pub initial_value: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct InlineAssembly<'a> {
    pub data: NodeData,
    /// Written dialect such as `"evmasm"`, if any.
    pub dialect: Option<InternedString>,
    /// Assembly flags such as `"memory-safe"`.
    pub flags: NodeList<'a, InternedString>,
    pub ast: YulBlock<'a>,
}

#[derive(Debug)]
pub struct TryStatement<'a> {
    pub data: NodeData,
    pub external_call: &'a Expression<'a>,
    /// The first clause is the success clause (`returns (...)`).
    pub clauses: NodeList<'a, TryCatchClause<'a>>,
}

#[derive(Debug)]
pub struct TryCatchClause<'a> {
    pub data: NodeData,
    /// `Error`, `Panic` or absent.
    pub error_name: Option<InternedString>,
    pub parameters: Option<ParameterList<'a>>,
    pub block: Block<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Assignment(Assignment<'a>),
    BinaryOperation(BinaryOperation<'a>),
    UnaryOperation(UnaryOperation<'a>),
    Conditional(Conditional<'a>),
    FunctionCall(FunctionCall<'a>),
    FunctionCallOptions(FunctionCallOptions<'a>),
    MemberAccess(MemberAccess<'a>),
    IndexAccess(IndexAccess<'a>),
    IndexRangeAccess(IndexRangeAccess<'a>),
    Tuple(TupleExpression<'a>),
    New(NewExpression<'a>),
    ElementaryTypeName(ElementaryTypeNameExpression<'a>),
    Literal(Literal),
    Identifier(Identifier),
    Missing(MissingNode),
}

#[derive(Debug)]
pub struct Assignment<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub left_hand_side: &'a Expression<'a>,
    pub right_hand_side: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct BinaryOperation<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub left_expression: &'a Expression<'a>,
    pub right_expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct UnaryOperation<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    /// `true` for `++x`, `false` for `x++`.
    pub prefix: bool,
    pub sub_expression: &'a Expression<'a>,
}

/// `cond ? a : b`, kept as an ordered list so malformed arity survives
/// the build phase and can be reported.
#[derive(Debug)]
pub struct Conditional<'a> {
    pub data: NodeData,
    pub expressions: NodeList<'a, Expression<'a>>,
}

impl<'a> Conditional<'a> {
    pub const ARITY: usize = 3;

    pub fn condition(&self) -> Option<&'a Expression<'a>> {
        self.expressions.first()
    }

    pub fn true_expression(&self) -> Option<&'a Expression<'a>> {
        self.expressions.get(1)
    }

    pub fn false_expression(&self) -> Option<&'a Expression<'a>> {
        self.expressions.get(2)
    }
}

#[derive(Debug)]
pub struct FunctionCall<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
    /// Argument names for `f({a: 1, b: 2})`; empty for positional calls.
    pub names: NodeList<'a, InternedString>,
}

/// `f{value: v, gas: g}`
#[derive(Debug)]
pub struct FunctionCallOptions<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub names: NodeList<'a, InternedString>,
    pub options: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct MemberAccess<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub member_name: InternedString,
}

#[derive(Debug)]
pub struct IndexAccess<'a> {
    pub data: NodeData,
    pub base_expression: &'a Expression<'a>,
    /// Absent in type expressions such as `new uint256[](n)`.
    pub index_expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct IndexRangeAccess<'a> {
    pub data: NodeData,
    pub base_expression: &'a Expression<'a>,
    pub start_expression: OptionalNode<'a, Expression<'a>>,
    pub end_expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct TupleExpression<'a> {
    pub data: NodeData,
    /// `None` marks an empty slot, as in `(a, , b)`.
    pub components: NodeList<'a, Option<Expression<'a>>>,
    pub is_inline_array: bool,
}

#[derive(Debug)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub type_name: &'a TypeName<'a>,
}

#[derive(Debug)]
pub struct ElementaryTypeNameExpression<'a> {
    pub data: NodeData,
    pub type_name: &'a TypeName<'a>,
}

/// A literal leaf.
#[derive(Debug)]
pub struct Literal {
    pub data: NodeData,
    pub kind: LiteralKind,
    /// Absent for hex strings that are not valid UTF-8.
    pub value: Option<InternedString>,
    pub hex_value: Option<InternedString>,
    /// `wei`, `ether`, `days`, ...
    pub subdenomination: Option<InternedString>,
}

/// An identifier leaf.
#[derive(Debug)]
pub struct Identifier {
    pub data: NodeData,
    pub name: InternedString,
    pub referenced_declaration: Option<NodeId>,
}

// ============================================================================
// Type names
// ============================================================================

#[derive(Debug)]
pub enum TypeName<'a> {
    Elementary(ElementaryTypeName),
    UserDefined(UserDefinedTypeName),
    Mapping(Mapping<'a>),
    Array(ArrayTypeName<'a>),
    Function(FunctionTypeName<'a>),
    Missing(MissingNode),
}

#[derive(Debug)]
pub struct ElementaryTypeName {
    pub data: NodeData,
    pub name: InternedString,
    /// `PayableKeyword` for `address payable`.
    pub state_mutability: Option<SyntaxKind>,
}

/// A reference to a struct, enum, contract or value type declared
/// elsewhere in the same tree.
#[derive(Debug)]
pub struct UserDefinedTypeName {
    pub data: NodeData,
    /// The name as written at the use site.
    pub name: InternedString,
    pub referenced_declaration: NodeId,
}

#[derive(Debug)]
pub struct Mapping<'a> {
    pub data: NodeData,
    pub key_type: &'a TypeName<'a>,
    pub key_name: Option<InternedString>,
    pub value_type: &'a TypeName<'a>,
    pub value_name: Option<InternedString>,
}

#[derive(Debug)]
pub struct ArrayTypeName<'a> {
    pub data: NodeData,
    pub base_type: &'a TypeName<'a>,
    pub length: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct FunctionTypeName<'a> {
    pub data: NodeData,
    pub parameters: ParameterList<'a>,
    pub return_parameters: ParameterList<'a>,
    pub visibility: SyntaxKind,
    pub state_mutability: SyntaxKind,
}

// ============================================================================
// Inline assembly (Yul)
// ============================================================================

#[derive(Debug)]
pub struct YulBlock<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, YulStatement<'a>>,
}

#[derive(Debug)]
pub enum YulStatement<'a> {
    Block(YulBlock<'a>),
    VariableDeclaration(YulVariableDeclaration<'a>),
    Assignment(YulAssignment<'a>),
    Expression(YulExpressionStatement<'a>),
    If(YulIf<'a>),
    For(YulForLoop<'a>),
    Switch(YulSwitch<'a>),
    FunctionDefinition(YulFunctionDefinition<'a>),
    Leave(NodeData),
    Break(NodeData),
    Continue(NodeData),
    Missing(MissingNode),
}

#[derive(Debug)]
pub struct YulVariableDeclaration<'a> {
    pub data: NodeData,
    pub variables: NodeList<'a, YulTypedName>,
    pub value: OptionalNode<'a, YulExpression<'a>>,
}

#[derive(Debug)]
pub struct YulAssignment<'a> {
    pub data: NodeData,
    pub variable_names: NodeList<'a, YulIdentifier>,
    pub value: &'a YulExpression<'a>,
}

#[derive(Debug)]
pub struct YulExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a YulExpression<'a>,
}

#[derive(Debug)]
pub struct YulIf<'a> {
    pub data: NodeData,
    pub condition: &'a YulExpression<'a>,
    pub body: YulBlock<'a>,
}

#[derive(Debug)]
pub struct YulForLoop<'a> {
    pub data: NodeData,
    pub pre: YulBlock<'a>,
    pub condition: &'a YulExpression<'a>,
    pub post: YulBlock<'a>,
    pub body: YulBlock<'a>,
}

#[derive(Debug)]
pub struct YulSwitch<'a> {
    pub data: NodeData,
    pub expression: &'a YulExpression<'a>,
    pub cases: NodeList<'a, YulCase<'a>>,
}

#[derive(Debug)]
pub struct YulCase<'a> {
    pub data: NodeData,
    /// Absent for the `default` case.
    pub value: Option<YulLiteral>,
    pub body: YulBlock<'a>,
}

#[derive(Debug)]
pub struct YulFunctionDefinition<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub parameters: NodeList<'a, YulTypedName>,
    pub return_variables: NodeList<'a, YulTypedName>,
    pub body: YulBlock<'a>,
}

#[derive(Debug)]
pub enum YulExpression<'a> {
    FunctionCall(YulFunctionCall<'a>),
    Identifier(YulIdentifier),
    Literal(YulLiteral),
    Missing(MissingNode),
}

/// A builtin instruction (`add`, `sstore`, ...) or user function call.
#[derive(Debug)]
pub struct YulFunctionCall<'a> {
    pub data: NodeData,
    pub function_name: YulIdentifier,
    pub arguments: NodeList<'a, YulExpression<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct YulIdentifier {
    pub data: NodeData,
    pub name: InternedString,
}

#[derive(Debug, Clone, Copy)]
pub struct YulLiteral {
    pub data: NodeData,
    pub kind: LiteralKind,
    pub value: InternedString,
    pub hex_value: Option<InternedString>,
}

#[derive(Debug, Clone, Copy)]
pub struct YulTypedName {
    pub data: NodeData,
    pub name: InternedString,
    pub type_name: Option<InternedString>,
}
