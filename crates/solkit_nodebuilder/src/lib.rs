//! solkit_nodebuilder: Programmatic AST node construction.
//!
//! `NodeBuilder` allocates nodes in an `AstArena`, interns their names and
//! stamps each one with a fresh `NodeId`. It is the build phase used for
//! synthesized trees and for the placeholders the JSON loader inserts.

use solkit_ast::*;
use solkit_core::arena::AstArena;
use solkit_core::intern::{InternedString, StringInterner};
use std::cell::Cell;

/// Builds arena-allocated Solidity nodes.
///
/// Nodes are returned by value so they can be placed into lists; single
/// children passed by value are moved into the arena.
///
/// # Example
/// ```
/// use solkit_ast::SyntaxKind;
/// use solkit_core::{AstArena, StringInterner};
/// use solkit_nodebuilder::NodeBuilder;
///
/// let arena = AstArena::new();
/// let interner = StringInterner::new();
/// let b = NodeBuilder::new(&arena, &interner);
/// let sum = b.binary(SyntaxKind::PlusToken, b.identifier("a"), b.number("1"));
/// assert_eq!(sum.kind(), SyntaxKind::BinaryOperation);
/// ```
pub struct NodeBuilder<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    next_id: Cell<u32>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self::with_first_id(arena, interner, 1)
    }

    /// Start numbering at `first_id`, so synthesized nodes do not collide
    /// with ids assigned elsewhere.
    pub fn with_first_id(arena: &'a AstArena, interner: &'a StringInterner, first_id: u32) -> Self {
        Self {
            arena,
            interner,
            next_id: Cell::new(first_id),
        }
    }

    pub fn arena(&self) -> &'a AstArena {
        self.arena
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn intern(&self, s: &str) -> InternedString {
        self.interner.intern(s)
    }

    /// Hand out the next node id.
    pub fn next_id(&self) -> NodeId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NodeId(id)
    }

    /// Fresh `NodeData` for a node of `kind`.
    pub fn data(&self, kind: SyntaxKind) -> NodeData {
        NodeData::new(kind, self.next_id())
    }

    #[inline]
    pub fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    #[inline]
    pub fn list<T>(&self, items: Vec<T>) -> &'a [T] {
        self.arena.alloc_vec(items)
    }

    fn intern_all(&self, names: &[&str]) -> &'a [InternedString] {
        self.list(names.iter().map(|n| self.intern(n)).collect())
    }

    // ========================================================================
    // Source unit
    // ========================================================================

    pub fn source_unit(&self, items: Vec<SourceUnitItem<'a>>) -> &'a SourceUnit<'a> {
        self.alloc(SourceUnit {
            data: self.data(SyntaxKind::SourceUnit),
            absolute_path: None,
            license: None,
            nodes: self.list(items),
        })
    }

    pub fn source_unit_with_license(
        &self,
        license: &str,
        items: Vec<SourceUnitItem<'a>>,
    ) -> &'a SourceUnit<'a> {
        self.alloc(SourceUnit {
            data: self.data(SyntaxKind::SourceUnit),
            absolute_path: None,
            license: Some(self.intern(license)),
            nodes: self.list(items),
        })
    }

    /// `pragma solidity ^0.8.20;` is `pragma(&["solidity", "^", "0.8", ".20"])`.
    pub fn pragma(&self, literals: &[&str]) -> PragmaDirective<'a> {
        PragmaDirective {
            data: self.data(SyntaxKind::PragmaDirective),
            literals: self.intern_all(literals),
        }
    }

    pub fn import(&self, file: &str, unit_alias: Option<&str>) -> ImportDirective<'a> {
        ImportDirective {
            data: self.data(SyntaxKind::ImportDirective),
            file: self.intern(file),
            unit_alias: unit_alias.map(|a| self.intern(a)),
            symbol_aliases: &[],
        }
    }

    pub fn import_symbols(&self, file: &str, symbols: &[(&str, Option<&str>)]) -> ImportDirective<'a> {
        let aliases = symbols
            .iter()
            .map(|(foreign, local)| SymbolAlias {
                data: self.data(SyntaxKind::Identifier),
                foreign: self.intern(foreign),
                local: local.map(|l| self.intern(l)),
            })
            .collect();
        ImportDirective {
            data: self.data(SyntaxKind::ImportDirective),
            file: self.intern(file),
            unit_alias: None,
            symbol_aliases: self.list(aliases),
        }
    }

    // ========================================================================
    // Contracts and members
    // ========================================================================

    pub fn contract(
        &self,
        name: &str,
        contract_kind: SyntaxKind,
        base_contracts: Vec<InheritanceSpecifier<'a>>,
        members: Vec<ContractMember<'a>>,
    ) -> ContractDefinition<'a> {
        ContractDefinition {
            data: self.data(SyntaxKind::ContractDefinition),
            name: self.intern(name),
            contract_kind,
            base_contracts: self.list(base_contracts),
            nodes: self.list(members),
        }
    }

    pub fn identifier_path(&self, name: &str, referenced: Option<NodeId>) -> IdentifierPath {
        IdentifierPath {
            data: self.data(SyntaxKind::IdentifierPath),
            name: self.intern(name),
            referenced_declaration: referenced,
        }
    }

    pub fn inheritance(&self, name: &str, arguments: Option<Vec<Expression<'a>>>) -> InheritanceSpecifier<'a> {
        InheritanceSpecifier {
            data: self.data(SyntaxKind::InheritanceSpecifier),
            base_name: self.identifier_path(name, None),
            arguments: arguments.map(|a| self.list(a)),
        }
    }

    pub fn parameter(&self, type_name: TypeName<'a>, name: Option<&str>) -> VariableDeclaration<'a> {
        self.parameter_in(type_name, name, SyntaxKind::DefaultKeyword)
    }

    pub fn parameter_in(
        &self,
        type_name: TypeName<'a>,
        name: Option<&str>,
        storage_location: SyntaxKind,
    ) -> VariableDeclaration<'a> {
        VariableDeclaration {
            data: self.data(SyntaxKind::VariableDeclaration),
            name: name.map(|n| self.intern(n)),
            type_name: self.alloc(type_name),
            storage_location,
        }
    }

    pub fn parameter_list(&self, parameters: Vec<VariableDeclaration<'a>>) -> ParameterList<'a> {
        ParameterList {
            data: self.data(SyntaxKind::ParameterList),
            parameters: self.list(parameters),
        }
    }

    /// A public, non-payable function.
    pub fn function(
        &self,
        name: &str,
        parameters: Vec<VariableDeclaration<'a>>,
        return_parameters: Vec<VariableDeclaration<'a>>,
        body: Option<Block<'a>>,
    ) -> FunctionDefinition<'a> {
        FunctionDefinition {
            data: self.data(SyntaxKind::FunctionDefinition),
            function_kind: SyntaxKind::FunctionKeyword,
            name: Some(self.intern(name)),
            parameters: self.parameter_list(parameters),
            return_parameters: self.parameter_list(return_parameters),
            visibility: SyntaxKind::PublicKeyword,
            state_mutability: SyntaxKind::NonpayableKeyword,
            overrides: None,
            modifiers: &[],
            body,
        }
    }

    pub fn constructor(&self, parameters: Vec<VariableDeclaration<'a>>, body: Block<'a>) -> FunctionDefinition<'a> {
        FunctionDefinition {
            data: self.data(SyntaxKind::FunctionDefinition),
            function_kind: SyntaxKind::ConstructorKeyword,
            name: None,
            parameters: self.parameter_list(parameters),
            return_parameters: self.parameter_list(Vec::new()),
            visibility: SyntaxKind::PublicKeyword,
            state_mutability: SyntaxKind::NonpayableKeyword,
            overrides: None,
            modifiers: &[],
            body: Some(body),
        }
    }

    pub fn modifier(
        &self,
        name: &str,
        parameters: Vec<VariableDeclaration<'a>>,
        body: Option<Block<'a>>,
    ) -> ModifierDefinition<'a> {
        ModifierDefinition {
            data: self.data(SyntaxKind::ModifierDefinition),
            name: self.intern(name),
            parameters: self.parameter_list(parameters),
            overrides: None,
            body,
        }
    }

    pub fn modifier_invocation(&self, name: &str, arguments: Option<Vec<Expression<'a>>>) -> ModifierInvocation<'a> {
        ModifierInvocation {
            data: self.data(SyntaxKind::ModifierInvocation),
            modifier_name: self.identifier_path(name, None),
            arguments: arguments.map(|a| self.list(a)),
        }
    }

    pub fn override_specifier(&self, bases: &[&str]) -> OverrideSpecifier<'a> {
        let overrides = bases.iter().map(|b| self.identifier_path(b, None)).collect();
        OverrideSpecifier {
            data: self.data(SyntaxKind::OverrideSpecifier),
            overrides: self.list(overrides),
        }
    }

    /// An internal, mutable state variable without initializer.
    pub fn state_variable(&self, type_name: TypeName<'a>, name: &str) -> StateVariableDeclaration<'a> {
        StateVariableDeclaration {
            data: self.data(SyntaxKind::StateVariableDeclaration),
            name: self.intern(name),
            type_name: self.alloc(type_name),
            visibility: SyntaxKind::InternalKeyword,
            mutability: SyntaxKind::MutableKeyword,
            overrides: None,
            value: None,
        }
    }

    pub fn struct_definition(&self, name: &str, members: Vec<VariableDeclaration<'a>>) -> StructDefinition<'a> {
        StructDefinition {
            data: self.data(SyntaxKind::StructDefinition),
            name: self.intern(name),
            members: self.list(members),
        }
    }

    pub fn enum_definition(&self, name: &str, values: &[&str]) -> EnumDefinition<'a> {
        let members = values
            .iter()
            .map(|v| EnumValue {
                data: self.data(SyntaxKind::EnumValue),
                name: self.intern(v),
            })
            .collect();
        EnumDefinition {
            data: self.data(SyntaxKind::EnumDefinition),
            name: self.intern(name),
            members: self.list(members),
        }
    }

    pub fn event(&self, name: &str, parameters: Vec<VariableDeclaration<'a>>) -> EventDefinition<'a> {
        EventDefinition {
            data: self.data(SyntaxKind::EventDefinition),
            name: self.intern(name),
            parameters: self.parameter_list(parameters),
        }
    }

    pub fn error(&self, name: &str, parameters: Vec<VariableDeclaration<'a>>) -> ErrorDefinition<'a> {
        ErrorDefinition {
            data: self.data(SyntaxKind::ErrorDefinition),
            name: self.intern(name),
            parameters: self.parameter_list(parameters),
        }
    }

    /// `using <library> for <type>;`, `*` when `type_name` is `None`.
    pub fn using_for(&self, library: &str, type_name: Option<TypeName<'a>>) -> UsingForDirective<'a> {
        UsingForDirective {
            data: self.data(SyntaxKind::UsingForDirective),
            library_name: Some(self.identifier_path(library, None)),
            function_list: &[],
            type_name: type_name.map(|t| self.alloc(t)),
        }
    }

    pub fn user_defined_value_type(&self, name: &str, underlying: TypeName<'a>) -> UserDefinedValueTypeDefinition<'a> {
        UserDefinedValueTypeDefinition {
            data: self.data(SyntaxKind::UserDefinedValueTypeDefinition),
            name: self.intern(name),
            underlying_type: self.alloc(underlying),
        }
    }

    // ========================================================================
    // Type names
    // ========================================================================

    pub fn elementary(&self, name: &str) -> TypeName<'a> {
        TypeName::Elementary(ElementaryTypeName {
            data: self.data(SyntaxKind::ElementaryTypeName),
            name: self.intern(name),
            state_mutability: None,
        })
    }

    pub fn address_payable(&self) -> TypeName<'a> {
        TypeName::Elementary(ElementaryTypeName {
            data: self.data(SyntaxKind::ElementaryTypeName),
            name: self.intern("address"),
            state_mutability: Some(SyntaxKind::PayableKeyword),
        })
    }

    pub fn user_defined(&self, name: &str, referenced_declaration: NodeId) -> TypeName<'a> {
        TypeName::UserDefined(UserDefinedTypeName {
            data: self.data(SyntaxKind::UserDefinedTypeName),
            name: self.intern(name),
            referenced_declaration,
        })
    }

    pub fn mapping(&self, key: TypeName<'a>, value: TypeName<'a>) -> TypeName<'a> {
        TypeName::Mapping(Mapping {
            data: self.data(SyntaxKind::Mapping),
            key_type: self.alloc(key),
            key_name: None,
            value_type: self.alloc(value),
            value_name: None,
        })
    }

    pub fn named_mapping(
        &self,
        key: TypeName<'a>,
        key_name: &str,
        value: TypeName<'a>,
        value_name: &str,
    ) -> TypeName<'a> {
        TypeName::Mapping(Mapping {
            data: self.data(SyntaxKind::Mapping),
            key_type: self.alloc(key),
            key_name: Some(self.intern(key_name)),
            value_type: self.alloc(value),
            value_name: Some(self.intern(value_name)),
        })
    }

    pub fn array(&self, base: TypeName<'a>, length: Option<Expression<'a>>) -> TypeName<'a> {
        TypeName::Array(ArrayTypeName {
            data: self.data(SyntaxKind::ArrayTypeName),
            base_type: self.alloc(base),
            length: length.map(|l| self.alloc(l)),
        })
    }

    pub fn function_type(
        &self,
        parameters: Vec<VariableDeclaration<'a>>,
        return_parameters: Vec<VariableDeclaration<'a>>,
        visibility: SyntaxKind,
        state_mutability: SyntaxKind,
    ) -> TypeName<'a> {
        TypeName::Function(FunctionTypeName {
            data: self.data(SyntaxKind::FunctionTypeName),
            parameters: self.parameter_list(parameters),
            return_parameters: self.parameter_list(return_parameters),
            visibility,
            state_mutability,
        })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn identifier(&self, name: &str) -> Expression<'a> {
        Expression::Identifier(Identifier {
            data: self.data(SyntaxKind::Identifier),
            name: self.intern(name),
            referenced_declaration: None,
        })
    }

    fn literal(&self, kind: LiteralKind, value: Option<&str>, hex_value: Option<&str>) -> Literal {
        Literal {
            data: self.data(SyntaxKind::Literal),
            kind,
            value: value.map(|v| self.intern(v)),
            hex_value: hex_value.map(|h| self.intern(h)),
            subdenomination: None,
        }
    }

    pub fn number(&self, value: &str) -> Expression<'a> {
        Expression::Literal(self.literal(LiteralKind::Number, Some(value), None))
    }

    /// A number with a unit, e.g. `1 ether`.
    pub fn number_with_unit(&self, value: &str, unit: &str) -> Expression<'a> {
        let mut lit = self.literal(LiteralKind::Number, Some(value), None);
        lit.subdenomination = Some(self.intern(unit));
        Expression::Literal(lit)
    }

    pub fn bool_literal(&self, value: bool) -> Expression<'a> {
        let text = if value { "true" } else { "false" };
        Expression::Literal(self.literal(LiteralKind::Bool, Some(text), None))
    }

    pub fn string_literal(&self, value: &str) -> Expression<'a> {
        Expression::Literal(self.literal(LiteralKind::String, Some(value), None))
    }

    pub fn hex_string(&self, hex_value: &str) -> Expression<'a> {
        Expression::Literal(self.literal(LiteralKind::HexString, None, Some(hex_value)))
    }

    pub fn unicode_string(&self, value: &str) -> Expression<'a> {
        Expression::Literal(self.literal(LiteralKind::UnicodeString, Some(value), None))
    }

    pub fn binary(&self, operator: SyntaxKind, left: Expression<'a>, right: Expression<'a>) -> Expression<'a> {
        Expression::BinaryOperation(BinaryOperation {
            data: self.data(SyntaxKind::BinaryOperation),
            operator,
            left_expression: self.alloc(left),
            right_expression: self.alloc(right),
        })
    }

    pub fn assign(&self, operator: SyntaxKind, left: Expression<'a>, right: Expression<'a>) -> Expression<'a> {
        Expression::Assignment(Assignment {
            data: self.data(SyntaxKind::Assignment),
            operator,
            left_hand_side: self.alloc(left),
            right_hand_side: self.alloc(right),
        })
    }

    fn unary(&self, operator: SyntaxKind, prefix: bool, operand: Expression<'a>) -> Expression<'a> {
        Expression::UnaryOperation(UnaryOperation {
            data: self.data(SyntaxKind::UnaryOperation),
            operator,
            prefix,
            sub_expression: self.alloc(operand),
        })
    }

    pub fn prefix(&self, operator: SyntaxKind, operand: Expression<'a>) -> Expression<'a> {
        self.unary(operator, true, operand)
    }

    pub fn postfix(&self, operator: SyntaxKind, operand: Expression<'a>) -> Expression<'a> {
        self.unary(operator, false, operand)
    }

    pub fn conditional(&self, condition: Expression<'a>, when_true: Expression<'a>, when_false: Expression<'a>) -> Expression<'a> {
        self.conditional_from(vec![condition, when_true, when_false])
    }

    /// A conditional with an arbitrary number of sub-expressions.
    pub fn conditional_from(&self, expressions: Vec<Expression<'a>>) -> Expression<'a> {
        Expression::Conditional(Conditional {
            data: self.data(SyntaxKind::Conditional),
            expressions: self.list(expressions),
        })
    }

    pub fn call(&self, callee: Expression<'a>, arguments: Vec<Expression<'a>>) -> Expression<'a> {
        Expression::FunctionCall(FunctionCall {
            data: self.data(SyntaxKind::FunctionCall),
            expression: self.alloc(callee),
            arguments: self.list(arguments),
            names: &[],
        })
    }

    pub fn call_named(&self, callee: Expression<'a>, names: &[&str], arguments: Vec<Expression<'a>>) -> Expression<'a> {
        Expression::FunctionCall(FunctionCall {
            data: self.data(SyntaxKind::FunctionCall),
            expression: self.alloc(callee),
            arguments: self.list(arguments),
            names: self.intern_all(names),
        })
    }

    pub fn call_options(&self, callee: Expression<'a>, names: &[&str], options: Vec<Expression<'a>>) -> Expression<'a> {
        Expression::FunctionCallOptions(FunctionCallOptions {
            data: self.data(SyntaxKind::FunctionCallOptions),
            expression: self.alloc(callee),
            names: self.intern_all(names),
            options: self.list(options),
        })
    }

    pub fn member(&self, base: Expression<'a>, member: &str) -> Expression<'a> {
        Expression::MemberAccess(MemberAccess {
            data: self.data(SyntaxKind::MemberAccess),
            expression: self.alloc(base),
            member_name: self.intern(member),
        })
    }

    pub fn index(&self, base: Expression<'a>, index: Option<Expression<'a>>) -> Expression<'a> {
        Expression::IndexAccess(IndexAccess {
            data: self.data(SyntaxKind::IndexAccess),
            base_expression: self.alloc(base),
            index_expression: index.map(|i| self.alloc(i)),
        })
    }

    pub fn index_range(
        &self,
        base: Expression<'a>,
        start: Option<Expression<'a>>,
        end: Option<Expression<'a>>,
    ) -> Expression<'a> {
        Expression::IndexRangeAccess(IndexRangeAccess {
            data: self.data(SyntaxKind::IndexRangeAccess),
            base_expression: self.alloc(base),
            start_expression: start.map(|s| self.alloc(s)),
            end_expression: end.map(|e| self.alloc(e)),
        })
    }

    pub fn tuple(&self, components: Vec<Option<Expression<'a>>>) -> Expression<'a> {
        Expression::Tuple(TupleExpression {
            data: self.data(SyntaxKind::TupleExpression),
            components: self.list(components),
            is_inline_array: false,
        })
    }

    pub fn inline_array(&self, elements: Vec<Expression<'a>>) -> Expression<'a> {
        Expression::Tuple(TupleExpression {
            data: self.data(SyntaxKind::TupleExpression),
            components: self.list(elements.into_iter().map(Some).collect()),
            is_inline_array: true,
        })
    }

    pub fn new_expression(&self, type_name: TypeName<'a>) -> Expression<'a> {
        Expression::New(NewExpression {
            data: self.data(SyntaxKind::NewExpression),
            type_name: self.alloc(type_name),
        })
    }

    /// A type used as an expression, as in `uint256(x)` or `payable(a)`.
    pub fn type_expression(&self, type_name: TypeName<'a>) -> Expression<'a> {
        Expression::ElementaryTypeName(ElementaryTypeNameExpression {
            data: self.data(SyntaxKind::ElementaryTypeNameExpression),
            type_name: self.alloc(type_name),
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(&self, statements: Vec<Statement<'a>>) -> Block<'a> {
        Block {
            data: self.data(SyntaxKind::Block),
            statements: self.list(statements),
        }
    }

    pub fn block_statement(&self, statements: Vec<Statement<'a>>) -> Statement<'a> {
        Statement::Block(self.block(statements))
    }

    pub fn unchecked(&self, statements: Vec<Statement<'a>>) -> Statement<'a> {
        Statement::UncheckedBlock(Block {
            data: self.data(SyntaxKind::UncheckedBlock).with_flags(ModifierFlags::UNCHECKED),
            statements: self.list(statements),
        })
    }

    pub fn if_statement(
        &self,
        condition: Expression<'a>,
        true_body: Statement<'a>,
        false_body: Option<Statement<'a>>,
    ) -> Statement<'a> {
        Statement::If(IfStatement {
            data: self.data(SyntaxKind::IfStatement),
            condition: self.alloc(condition),
            true_body: self.alloc(true_body),
            false_body: false_body.map(|f| self.alloc(f)),
        })
    }

    pub fn for_statement(
        &self,
        initialization: Option<Statement<'a>>,
        condition: Option<Expression<'a>>,
        loop_expression: Option<Expression<'a>>,
        body: Statement<'a>,
    ) -> Statement<'a> {
        Statement::For(ForStatement {
            data: self.data(SyntaxKind::ForStatement),
            initialization: initialization.map(|i| self.alloc(i)),
            condition: condition.map(|c| self.alloc(c)),
            loop_expression: loop_expression.map(|l| self.alloc(l)),
            body: self.alloc(body),
        })
    }

    pub fn while_statement(&self, condition: Expression<'a>, body: Statement<'a>) -> Statement<'a> {
        Statement::While(WhileStatement {
            data: self.data(SyntaxKind::WhileStatement),
            condition: self.alloc(condition),
            body: self.alloc(body),
        })
    }

    pub fn do_while(&self, body: Statement<'a>, condition: Expression<'a>) -> Statement<'a> {
        Statement::DoWhile(WhileStatement {
            data: self.data(SyntaxKind::DoWhileStatement),
            condition: self.alloc(condition),
            body: self.alloc(body),
        })
    }

    pub fn continue_statement(&self) -> Statement<'a> {
        Statement::Continue(self.data(SyntaxKind::ContinueStatement))
    }

    pub fn break_statement(&self) -> Statement<'a> {
        Statement::Break(self.data(SyntaxKind::BreakStatement))
    }

    pub fn placeholder(&self) -> Statement<'a> {
        Statement::Placeholder(self.data(SyntaxKind::PlaceholderStatement))
    }

    pub fn return_statement(&self, expression: Option<Expression<'a>>) -> Statement<'a> {
        Statement::Return(ReturnStatement {
            data: self.data(SyntaxKind::ReturnStatement),
            expression: expression.map(|e| self.alloc(e)),
        })
    }

    pub fn emit(&self, event_call: Expression<'a>) -> Statement<'a> {
        Statement::Emit(EmitStatement {
            data: self.data(SyntaxKind::EmitStatement),
            event_call: self.alloc(event_call),
        })
    }

    pub fn revert(&self, error_call: Expression<'a>) -> Statement<'a> {
        Statement::Revert(RevertStatement {
            data: self.data(SyntaxKind::RevertStatement),
            error_call: self.alloc(error_call),
        })
    }

    pub fn variable_statement(
        &self,
        declarations: Vec<Option<VariableDeclaration<'a>>>,
        initial_value: Option<Expression<'a>>,
    ) -> Statement<'a> {
        Statement::VariableDeclaration(VariableDeclarationStatement {
            data: self.data(SyntaxKind::VariableDeclarationStatement),
            declarations: self.list(declarations),
            initial_value: initial_value.map(|v| self.alloc(v)),
        })
    }

    pub fn expression_statement(&self, expression: Expression<'a>) -> Statement<'a> {
        Statement::Expression(ExpressionStatement {
            data: self.data(SyntaxKind::ExpressionStatement),
            expression: self.alloc(expression),
        })
    }

    pub fn inline_assembly(&self, ast: YulBlock<'a>) -> Statement<'a> {
        Statement::InlineAssembly(InlineAssembly {
            data: self.data(SyntaxKind::InlineAssembly),
            dialect: None,
            flags: &[],
            ast,
        })
    }

    pub fn try_statement(&self, external_call: Expression<'a>, clauses: Vec<TryCatchClause<'a>>) -> Statement<'a> {
        Statement::Try(TryStatement {
            data: self.data(SyntaxKind::TryStatement),
            external_call: self.alloc(external_call),
            clauses: self.list(clauses),
        })
    }

    pub fn catch_clause(
        &self,
        error_name: Option<&str>,
        parameters: Option<Vec<VariableDeclaration<'a>>>,
        block: Block<'a>,
    ) -> TryCatchClause<'a> {
        TryCatchClause {
            data: self.data(SyntaxKind::TryCatchClause),
            error_name: error_name.map(|n| self.intern(n)),
            parameters: parameters.map(|p| self.parameter_list(p)),
            block,
        }
    }

    // ========================================================================
    // Recovery placeholders
    // ========================================================================

    /// Placeholder for a required node the build phase could not produce.
    pub fn missing(&self, parent: SyntaxKind, expected: &'static str, found: Option<&str>) -> MissingNode {
        MissingNode {
            data: self.data(SyntaxKind::Missing),
            parent,
            expected,
            found: found.map(|f| self.intern(f)),
        }
    }

    pub fn missing_statement(
        &self,
        parent: SyntaxKind,
        expected: &'static str,
        found: Option<&str>,
    ) -> Statement<'a> {
        Statement::Missing(self.missing(parent, expected, found))
    }

    pub fn missing_expression(
        &self,
        parent: SyntaxKind,
        expected: &'static str,
        found: Option<&str>,
    ) -> Expression<'a> {
        Expression::Missing(self.missing(parent, expected, found))
    }

    pub fn missing_type(
        &self,
        parent: SyntaxKind,
        expected: &'static str,
        found: Option<&str>,
    ) -> TypeName<'a> {
        TypeName::Missing(self.missing(parent, expected, found))
    }

    pub fn missing_yul_statement(
        &self,
        parent: SyntaxKind,
        expected: &'static str,
        found: Option<&str>,
    ) -> YulStatement<'a> {
        YulStatement::Missing(self.missing(parent, expected, found))
    }

    pub fn missing_yul_expression(
        &self,
        parent: SyntaxKind,
        expected: &'static str,
        found: Option<&str>,
    ) -> YulExpression<'a> {
        YulExpression::Missing(self.missing(parent, expected, found))
    }

    // ========================================================================
    // Inline assembly
    // ========================================================================

    pub fn yul_block(&self, statements: Vec<YulStatement<'a>>) -> YulBlock<'a> {
        YulBlock {
            data: self.data(SyntaxKind::YulBlock),
            statements: self.list(statements),
        }
    }

    pub fn yul_identifier(&self, name: &str) -> YulIdentifier {
        YulIdentifier {
            data: self.data(SyntaxKind::YulIdentifier),
            name: self.intern(name),
        }
    }

    pub fn yul_literal(&self, kind: LiteralKind, value: &str) -> YulLiteral {
        YulLiteral {
            data: self.data(SyntaxKind::YulLiteral),
            kind,
            value: self.intern(value),
            hex_value: None,
        }
    }

    pub fn yul_number(&self, value: &str) -> YulExpression<'a> {
        YulExpression::Literal(self.yul_literal(LiteralKind::Number, value))
    }

    pub fn yul_ident(&self, name: &str) -> YulExpression<'a> {
        YulExpression::Identifier(self.yul_identifier(name))
    }

    pub fn yul_call(&self, function_name: &str, arguments: Vec<YulExpression<'a>>) -> YulExpression<'a> {
        YulExpression::FunctionCall(YulFunctionCall {
            data: self.data(SyntaxKind::YulFunctionCall),
            function_name: self.yul_identifier(function_name),
            arguments: self.list(arguments),
        })
    }

    fn yul_typed_names(&self, names: &[&str]) -> &'a [YulTypedName] {
        self.list(
            names
                .iter()
                .map(|n| YulTypedName {
                    data: self.data(SyntaxKind::YulTypedName),
                    name: self.intern(n),
                    type_name: None,
                })
                .collect(),
        )
    }

    pub fn yul_let(&self, names: &[&str], value: Option<YulExpression<'a>>) -> YulStatement<'a> {
        YulStatement::VariableDeclaration(YulVariableDeclaration {
            data: self.data(SyntaxKind::YulVariableDeclaration),
            variables: self.yul_typed_names(names),
            value: value.map(|v| self.alloc(v)),
        })
    }

    pub fn yul_assign(&self, names: &[&str], value: YulExpression<'a>) -> YulStatement<'a> {
        let variable_names = names.iter().map(|n| self.yul_identifier(n)).collect();
        YulStatement::Assignment(YulAssignment {
            data: self.data(SyntaxKind::YulAssignment),
            variable_names: self.list(variable_names),
            value: self.alloc(value),
        })
    }

    pub fn yul_expression_statement(&self, expression: YulExpression<'a>) -> YulStatement<'a> {
        YulStatement::Expression(YulExpressionStatement {
            data: self.data(SyntaxKind::YulExpressionStatement),
            expression: self.alloc(expression),
        })
    }

    pub fn yul_if(&self, condition: YulExpression<'a>, body: YulBlock<'a>) -> YulStatement<'a> {
        YulStatement::If(YulIf {
            data: self.data(SyntaxKind::YulIf),
            condition: self.alloc(condition),
            body,
        })
    }

    pub fn yul_for(
        &self,
        pre: YulBlock<'a>,
        condition: YulExpression<'a>,
        post: YulBlock<'a>,
        body: YulBlock<'a>,
    ) -> YulStatement<'a> {
        YulStatement::For(YulForLoop {
            data: self.data(SyntaxKind::YulForLoop),
            pre,
            condition: self.alloc(condition),
            post,
            body,
        })
    }

    pub fn yul_switch(&self, expression: YulExpression<'a>, cases: Vec<YulCase<'a>>) -> YulStatement<'a> {
        YulStatement::Switch(YulSwitch {
            data: self.data(SyntaxKind::YulSwitch),
            expression: self.alloc(expression),
            cases: self.list(cases),
        })
    }

    /// A `case`, or the `default` case when `value` is `None`.
    pub fn yul_case(&self, value: Option<YulLiteral>, body: YulBlock<'a>) -> YulCase<'a> {
        YulCase {
            data: self.data(SyntaxKind::YulCase),
            value,
            body,
        }
    }

    pub fn yul_function(
        &self,
        name: &str,
        parameters: &[&str],
        return_variables: &[&str],
        body: YulBlock<'a>,
    ) -> YulStatement<'a> {
        YulStatement::FunctionDefinition(YulFunctionDefinition {
            data: self.data(SyntaxKind::YulFunctionDefinition),
            name: self.intern(name),
            parameters: self.yul_typed_names(parameters),
            return_variables: self.yul_typed_names(return_variables),
            body,
        })
    }

    pub fn yul_leave(&self) -> YulStatement<'a> {
        YulStatement::Leave(self.data(SyntaxKind::YulLeave))
    }

    pub fn yul_break(&self) -> YulStatement<'a> {
        YulStatement::Break(self.data(SyntaxKind::YulBreak))
    }

    pub fn yul_continue(&self) -> YulStatement<'a> {
        YulStatement::Continue(self.data(SyntaxKind::YulContinue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);

        let first = b.identifier("a");
        let second = b.identifier("b");
        assert_eq!(first.id(), NodeId(1));
        assert_eq!(second.id(), NodeId(2));
    }

    #[test]
    fn test_first_id_offset() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::with_first_id(&arena, &interner, 1000);

        assert_eq!(b.missing_expression(SyntaxKind::ExpressionStatement, "expression", None).id(), NodeId(1000));
    }

    #[test]
    fn test_conditional_accessors() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);

        let full = b.conditional(b.identifier("c"), b.number("1"), b.number("2"));
        let Expression::Conditional(c) = full else {
            panic!("expected a conditional");
        };
        assert!(c.false_expression().is_some());

        let short = b.conditional_from(vec![b.identifier("c")]);
        let Expression::Conditional(c) = short else {
            panic!("expected a conditional");
        };
        assert!(c.condition().is_some());
        assert!(c.true_expression().is_none());
    }

    #[test]
    fn test_source_tree_resolves_built_declarations() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);

        let e = b.enum_definition("Color", &["Red", "Green"]);
        let enum_id = e.data.id;
        let var = b.state_variable(b.user_defined("Color", enum_id), "color");
        let contract = b.contract(
            "Palette",
            SyntaxKind::ContractKeyword,
            vec![],
            vec![ContractMember::StateVariable(var), ContractMember::Enum(e)],
        );
        let root = b.source_unit(vec![SourceUnitItem::Contract(contract)]);
        let tree = SourceTree::new(root, &interner);

        let decl = tree.resolve(enum_id).unwrap();
        assert_eq!(tree.text(decl.name().unwrap()), "Color");
    }
}
