//! Conversion of solc compact-JSON nodes into arena nodes.
//!
//! Every `nodeType` the tree model knows is converted field by field.
//! Unknown node types and absent required fields never abort the load:
//! they become `Missing` placeholders and a diagnostic is recorded.

use serde_json::Value;
use solkit_ast::*;
use solkit_core::{AstArena, InternedString, SourceLocation, StringInterner};
use solkit_diagnostics::{format_message, messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use solkit_nodebuilder::NodeBuilder;

/// First id given to nodes the loader has to number itself: placeholders,
/// Yul nodes and nodes without an `id`. solc ids stay far below it.
pub const SYNTHETIC_ID_BASE: u32 = 1 << 30;

// ============================================================================
// JSON access
// ============================================================================

/// A present, non-null field.
fn child<'v>(v: &'v Value, key: &str) -> Option<&'v Value> {
    v.get(key).filter(|c| !c.is_null())
}

fn node_type(v: &Value) -> &str {
    v.get("nodeType").and_then(Value::as_str).unwrap_or("")
}

fn items<'v>(v: &'v Value, key: &str) -> &'v [Value] {
    child(v, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn flag(v: &Value, key: &str) -> bool {
    v.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// A non-empty string field. solc writes `""` for absent names.
fn text<'v>(v: &'v Value, key: &str) -> Option<&'v str> {
    child(v, key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// `referencedDeclaration`; negative ids denote builtins and resolve to nothing.
fn referenced_declaration(v: &Value) -> Option<NodeId> {
    v.get("referencedDeclaration")
        .and_then(Value::as_i64)
        .and_then(|id| u32::try_from(id).ok())
        .map(NodeId)
}

// ============================================================================
// Loader
// ============================================================================

pub(crate) struct Loader<'a> {
    b: NodeBuilder<'a>,
    diagnostics: DiagnosticCollection,
}

impl<'a> Loader<'a> {
    pub(crate) fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self {
            b: NodeBuilder::with_first_id(arena, interner, SYNTHETIC_ID_BASE),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    pub(crate) fn into_diagnostics(self) -> DiagnosticCollection {
        self.diagnostics
    }

    fn report(&mut self, data: &NodeData, message: &DiagnosticMessage, args: &[&str]) {
        tracing::warn!(
            kind = %data.kind,
            node = %data.id,
            code = message.code,
            "{}",
            format_message(message.message, args)
        );
        let span = (!data.range.is_empty()).then(|| data.range.to_span());
        self.diagnostics.add(Diagnostic::at_node(data.id, span, message, args));
    }

    /// `NodeData` from the node's `id` and `src`.
    fn data(&mut self, v: &Value, kind: SyntaxKind) -> NodeData {
        let solc_id = v
            .get("id")
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok());
        let mut data = NodeData::new(kind, solc_id.map_or_else(|| self.b.next_id(), NodeId));
        // Yul nodes never carry ids.
        if solc_id.is_none() && !kind.is_yul() {
            self.report(&data, &messages::NODE_TYPE_0_HAS_NO_ID, &[node_type(v)]);
        }
        if let Some(src) = v.get("src").and_then(Value::as_str) {
            match src.parse::<SourceLocation>() {
                Ok(location) => data.range = location.range(),
                Err(err) => {
                    tracing::debug!(%err, "unparsable src");
                    self.report(&data, &messages::INVALID_SOURCE_LOCATION_0, &[src]);
                }
            }
        }
        data
    }

    fn intern(&self, s: &str) -> InternedString {
        self.b.intern(s)
    }

    fn opt_text(&self, v: &Value, key: &str) -> Option<InternedString> {
        text(v, key).map(|s| self.intern(s))
    }

    fn report_missing_field(&mut self, data: &NodeData, field: &str) {
        let kind = data.kind.to_string();
        self.report(data, &messages::MISSING_FIELD_0_ON_1_NODE, &[field, &kind]);
    }

    fn missing_field(&mut self, parent: &NodeData, field: &'static str) -> MissingNode {
        self.report_missing_field(parent, field);
        self.b.missing(parent.kind, field, None)
    }

    fn unsupported(&mut self, v: &Value, parent: &NodeData, field: &'static str) -> MissingNode {
        let found = match node_type(v) {
            "" => "<no nodeType>",
            other => other,
        };
        let context = parent.kind.to_string();
        self.report(parent, &messages::UNSUPPORTED_NODE_TYPE_0_IN_1, &[found, &context]);
        self.b.missing(parent.kind, field, Some(found))
    }

    /// A required string field; absent values are reported and read as `""`.
    fn required_text(&mut self, v: &Value, key: &str, data: &NodeData) -> InternedString {
        match v.get(key).and_then(Value::as_str) {
            Some(s) => self.intern(s),
            None => {
                self.report_missing_field(data, key);
                self.intern("")
            }
        }
    }

    fn name(&mut self, v: &Value, data: &NodeData) -> InternedString {
        self.required_text(v, "name", data)
    }

    /// An enumerated attribute such as `visibility`. An unknown spelling is
    /// reported and read as `Unknown`, which has no table entry.
    fn keyword(&mut self, v: &Value, key: &str, data: &NodeData, default: SyntaxKind) -> SyntaxKind {
        let Some(spelling) = v.get(key).and_then(Value::as_str) else {
            return default;
        };
        match SyntaxKind::from_keyword(spelling) {
            Some(kind) => kind,
            None => {
                self.report(data, &messages::UNKNOWN_1_0, &[spelling, key]);
                SyntaxKind::Unknown
            }
        }
    }

    fn operator(&mut self, v: &Value, data: &NodeData) -> SyntaxKind {
        let Some(spelling) = v.get("operator").and_then(Value::as_str) else {
            self.report_missing_field(data, "operator");
            return SyntaxKind::Unknown;
        };
        match SyntaxKind::from_operator(spelling) {
            Some(kind) => kind,
            None => {
                self.report(data, &messages::UNKNOWN_1_0, &[spelling, "operator"]);
                SyntaxKind::Unknown
            }
        }
    }

    // ========================================================================
    // Source unit
    // ========================================================================

    pub(crate) fn source_unit(&mut self, v: &Value) -> &'a SourceUnit<'a> {
        let data = self.data(v, SyntaxKind::SourceUnit);
        let nodes: Vec<_> = items(v, "nodes").iter().map(|item| self.source_unit_item(item, &data)).collect();
        let unit = SourceUnit {
            data,
            absolute_path: self.opt_text(v, "absolutePath"),
            license: self.opt_text(v, "license"),
            nodes: self.b.list(nodes),
        };
        self.b.alloc(unit)
    }

    fn source_unit_item(&mut self, v: &Value, parent: &NodeData) -> SourceUnitItem<'a> {
        match node_type(v) {
            "PragmaDirective" => SourceUnitItem::Pragma(self.pragma(v)),
            "ImportDirective" => SourceUnitItem::Import(self.import(v)),
            "ContractDefinition" => SourceUnitItem::Contract(self.contract(v)),
            "FunctionDefinition" => SourceUnitItem::Function(self.function(v)),
            "StructDefinition" => SourceUnitItem::Struct(self.struct_definition(v)),
            "EnumDefinition" => SourceUnitItem::Enum(self.enum_definition(v)),
            "EventDefinition" => SourceUnitItem::Event(self.event(v)),
            "ErrorDefinition" => SourceUnitItem::Error(self.error(v)),
            "UsingForDirective" => SourceUnitItem::UsingFor(self.using_for(v)),
            "VariableDeclaration" => SourceUnitItem::Constant(self.state_variable(v)),
            "UserDefinedValueTypeDefinition" => {
                SourceUnitItem::UserDefinedValueType(self.user_defined_value_type(v))
            }
            _ => SourceUnitItem::Missing(self.unsupported(v, parent, "nodes")),
        }
    }

    fn pragma(&mut self, v: &Value) -> PragmaDirective<'a> {
        let data = self.data(v, SyntaxKind::PragmaDirective);
        let literals = items(v, "literals")
            .iter()
            .filter_map(Value::as_str)
            .map(|literal| self.intern(literal))
            .collect();
        PragmaDirective {
            data,
            literals: self.b.list(literals),
        }
    }

    fn import(&mut self, v: &Value) -> ImportDirective<'a> {
        let data = self.data(v, SyntaxKind::ImportDirective);
        let file = self.required_text(v, "file", &data);
        let mut symbol_aliases = Vec::new();
        for alias in items(v, "symbolAliases") {
            let Some(foreign) = child(alias, "foreign") else {
                self.report_missing_field(&data, "foreign");
                continue;
            };
            let alias_data = self.data(foreign, SyntaxKind::Identifier);
            symbol_aliases.push(SymbolAlias {
                foreign: self.name(foreign, &alias_data),
                data: alias_data,
                local: self.opt_text(alias, "local"),
            });
        }
        ImportDirective {
            data,
            file,
            unit_alias: self.opt_text(v, "unitAlias"),
            symbol_aliases: self.b.list(symbol_aliases),
        }
    }

    // ========================================================================
    // Contracts
    // ========================================================================

    fn contract(&mut self, v: &Value) -> ContractDefinition<'a> {
        let mut data = self.data(v, SyntaxKind::ContractDefinition);
        if flag(v, "abstract") {
            data.modifier_flags |= ModifierFlags::ABSTRACT;
        }
        let name = self.name(v, &data);
        let contract_kind = self.keyword(v, "contractKind", &data, SyntaxKind::ContractKeyword);
        let base_contracts: Vec<_> = items(v, "baseContracts").iter().map(|b| self.inheritance(b)).collect();
        let members: Vec<_> = items(v, "nodes").iter().map(|m| self.contract_member(m, &data)).collect();
        ContractDefinition {
            data,
            name,
            contract_kind,
            base_contracts: self.b.list(base_contracts),
            nodes: self.b.list(members),
        }
    }

    fn contract_member(&mut self, v: &Value, parent: &NodeData) -> ContractMember<'a> {
        match node_type(v) {
            "FunctionDefinition" => ContractMember::Function(self.function(v)),
            "ModifierDefinition" => ContractMember::Modifier(self.modifier(v)),
            "VariableDeclaration" => ContractMember::StateVariable(self.state_variable(v)),
            "StructDefinition" => ContractMember::Struct(self.struct_definition(v)),
            "EnumDefinition" => ContractMember::Enum(self.enum_definition(v)),
            "EventDefinition" => ContractMember::Event(self.event(v)),
            "ErrorDefinition" => ContractMember::Error(self.error(v)),
            "UsingForDirective" => ContractMember::UsingFor(self.using_for(v)),
            "UserDefinedValueTypeDefinition" => {
                ContractMember::UserDefinedValueType(self.user_defined_value_type(v))
            }
            _ => ContractMember::Missing(self.unsupported(v, parent, "nodes")),
        }
    }

    fn inheritance(&mut self, v: &Value) -> InheritanceSpecifier<'a> {
        let data = self.data(v, SyntaxKind::InheritanceSpecifier);
        let base_name = self.identifier_path_field(v, "baseName", &data);
        let arguments = self.argument_list(v, "arguments", &data);
        InheritanceSpecifier {
            data,
            base_name,
            arguments,
        }
    }

    /// An `IdentifierPath`, or a `UserDefinedTypeName` used in its place by
    /// older compilers.
    fn identifier_path(&mut self, v: &Value) -> IdentifierPath {
        let data = self.data(v, SyntaxKind::IdentifierPath);
        let name = match text(v, "name").or_else(|| child(v, "pathNode").and_then(|p| text(p, "name"))) {
            Some(name) => self.intern(name),
            None => {
                self.report_missing_field(&data, "name");
                self.intern("")
            }
        };
        IdentifierPath {
            data,
            name,
            referenced_declaration: referenced_declaration(v),
        }
    }

    fn identifier_path_field(&mut self, v: &Value, key: &str, parent: &NodeData) -> IdentifierPath {
        match child(v, key) {
            Some(path) => self.identifier_path(path),
            None => {
                self.report_missing_field(parent, key);
                self.b.identifier_path("", None)
            }
        }
    }

    // ========================================================================
    // Functions and modifiers
    // ========================================================================

    fn function(&mut self, v: &Value) -> FunctionDefinition<'a> {
        let mut data = self.data(v, SyntaxKind::FunctionDefinition);
        if flag(v, "virtual") {
            data.modifier_flags |= ModifierFlags::VIRTUAL;
        }
        let function_kind = self.keyword(v, "kind", &data, SyntaxKind::FunctionKeyword);
        let parameters = self.parameter_list_field(v, "parameters", &data);
        let return_parameters = self.parameter_list_field(v, "returnParameters", &data);
        let visibility = self.keyword(v, "visibility", &data, SyntaxKind::PublicKeyword);
        let state_mutability = self.keyword(v, "stateMutability", &data, SyntaxKind::NonpayableKeyword);
        let overrides = child(v, "overrides").map(|o| self.override_specifier(o));
        let modifiers: Vec<_> = items(v, "modifiers").iter().map(|m| self.modifier_invocation(m)).collect();
        let body = child(v, "body").map(|b| self.block(b, SyntaxKind::Block));
        FunctionDefinition {
            name: self.opt_text(v, "name"),
            data,
            function_kind,
            parameters,
            return_parameters,
            visibility,
            state_mutability,
            overrides,
            modifiers: self.b.list(modifiers),
            body,
        }
    }

    fn modifier(&mut self, v: &Value) -> ModifierDefinition<'a> {
        let mut data = self.data(v, SyntaxKind::ModifierDefinition);
        if flag(v, "virtual") {
            data.modifier_flags |= ModifierFlags::VIRTUAL;
        }
        let name = self.name(v, &data);
        let parameters = self.parameter_list_field(v, "parameters", &data);
        let overrides = child(v, "overrides").map(|o| self.override_specifier(o));
        let body = child(v, "body").map(|b| self.block(b, SyntaxKind::Block));
        ModifierDefinition {
            data,
            name,
            parameters,
            overrides,
            body,
        }
    }

    fn modifier_invocation(&mut self, v: &Value) -> ModifierInvocation<'a> {
        let data = self.data(v, SyntaxKind::ModifierInvocation);
        let modifier_name = self.identifier_path_field(v, "modifierName", &data);
        let arguments = self.argument_list(v, "arguments", &data);
        ModifierInvocation {
            data,
            modifier_name,
            arguments,
        }
    }

    fn override_specifier(&mut self, v: &Value) -> OverrideSpecifier<'a> {
        let data = self.data(v, SyntaxKind::OverrideSpecifier);
        let overrides: Vec<_> = items(v, "overrides").iter().map(|o| self.identifier_path(o)).collect();
        OverrideSpecifier {
            data,
            overrides: self.b.list(overrides),
        }
    }

    fn parameter_list(&mut self, v: &Value) -> ParameterList<'a> {
        let data = self.data(v, SyntaxKind::ParameterList);
        let parameters: Vec<_> = items(v, "parameters").iter().map(|p| self.variable_declaration(p)).collect();
        ParameterList {
            data,
            parameters: self.b.list(parameters),
        }
    }

    fn parameter_list_field(&mut self, v: &Value, key: &str, parent: &NodeData) -> ParameterList<'a> {
        match child(v, key) {
            Some(list) => self.parameter_list(list),
            None => {
                self.report_missing_field(parent, key);
                self.b.parameter_list(Vec::new())
            }
        }
    }

    // ========================================================================
    // Variables and type definitions
    // ========================================================================

    fn variable_declaration(&mut self, v: &Value) -> VariableDeclaration<'a> {
        let mut data = self.data(v, SyntaxKind::VariableDeclaration);
        if flag(v, "indexed") {
            data.modifier_flags |= ModifierFlags::INDEXED;
        }
        let type_name = self.type_name_field(v, "typeName", &data);
        let storage_location = self.keyword(v, "storageLocation", &data, SyntaxKind::DefaultKeyword);
        VariableDeclaration {
            name: self.opt_text(v, "name"),
            data,
            type_name: self.b.alloc(type_name),
            storage_location,
        }
    }

    fn state_variable(&mut self, v: &Value) -> StateVariableDeclaration<'a> {
        let data = self.data(v, SyntaxKind::StateVariableDeclaration);
        let name = self.name(v, &data);
        let type_name = self.type_name_field(v, "typeName", &data);
        let visibility = self.keyword(v, "visibility", &data, SyntaxKind::InternalKeyword);
        let default_mutability = if flag(v, "constant") {
            SyntaxKind::ConstantKeyword
        } else {
            SyntaxKind::MutableKeyword
        };
        let mutability = self.keyword(v, "mutability", &data, default_mutability);
        let overrides = child(v, "overrides").map(|o| self.override_specifier(o));
        let value = self.opt_expression(v, "value", &data);
        StateVariableDeclaration {
            data,
            name,
            type_name: self.b.alloc(type_name),
            visibility,
            mutability,
            overrides,
            value,
        }
    }

    fn struct_definition(&mut self, v: &Value) -> StructDefinition<'a> {
        let data = self.data(v, SyntaxKind::StructDefinition);
        let name = self.name(v, &data);
        let members: Vec<_> = items(v, "members").iter().map(|m| self.variable_declaration(m)).collect();
        StructDefinition {
            data,
            name,
            members: self.b.list(members),
        }
    }

    fn enum_definition(&mut self, v: &Value) -> EnumDefinition<'a> {
        let data = self.data(v, SyntaxKind::EnumDefinition);
        let name = self.name(v, &data);
        let mut members = Vec::new();
        for member in items(v, "members") {
            let member_data = self.data(member, SyntaxKind::EnumValue);
            members.push(EnumValue {
                name: self.name(member, &member_data),
                data: member_data,
            });
        }
        EnumDefinition {
            data,
            name,
            members: self.b.list(members),
        }
    }

    fn event(&mut self, v: &Value) -> EventDefinition<'a> {
        let mut data = self.data(v, SyntaxKind::EventDefinition);
        if flag(v, "anonymous") {
            data.modifier_flags |= ModifierFlags::ANONYMOUS;
        }
        let name = self.name(v, &data);
        let parameters = self.parameter_list_field(v, "parameters", &data);
        EventDefinition { data, name, parameters }
    }

    fn error(&mut self, v: &Value) -> ErrorDefinition<'a> {
        let data = self.data(v, SyntaxKind::ErrorDefinition);
        let name = self.name(v, &data);
        let parameters = self.parameter_list_field(v, "parameters", &data);
        ErrorDefinition { data, name, parameters }
    }

    fn using_for(&mut self, v: &Value) -> UsingForDirective<'a> {
        let mut data = self.data(v, SyntaxKind::UsingForDirective);
        if flag(v, "global") {
            data.modifier_flags |= ModifierFlags::GLOBAL;
        }
        let library_name = child(v, "libraryName").map(|l| self.identifier_path(l));
        let mut function_list = Vec::new();
        for entry in items(v, "functionList") {
            // Plain entries use `function`, operator bindings use `definition`.
            let Some(path) = child(entry, "function").or_else(|| child(entry, "definition")) else {
                self.report_missing_field(&data, "function");
                continue;
            };
            let function = self.identifier_path(path);
            let operator = match entry.get("operator").and_then(Value::as_str) {
                Some(spelling) => Some(SyntaxKind::from_operator(spelling).unwrap_or_else(|| {
                    self.report(&data, &messages::UNKNOWN_1_0, &[spelling, "operator"]);
                    SyntaxKind::Unknown
                })),
                None => None,
            };
            function_list.push(UsingForFunction { function, operator });
        }
        let type_name = match child(v, "typeName") {
            Some(ty) => Some(self.type_name(ty, &data, "typeName")),
            None => None,
        };
        UsingForDirective {
            data,
            library_name,
            function_list: self.b.list(function_list),
            type_name: type_name.map(|ty| self.b.alloc(ty)),
        }
    }

    fn user_defined_value_type(&mut self, v: &Value) -> UserDefinedValueTypeDefinition<'a> {
        let data = self.data(v, SyntaxKind::UserDefinedValueTypeDefinition);
        let name = self.name(v, &data);
        let underlying_type = self.type_name_field(v, "underlyingType", &data);
        UserDefinedValueTypeDefinition {
            data,
            name,
            underlying_type: self.b.alloc(underlying_type),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self, v: &Value, kind: SyntaxKind) -> Block<'a> {
        let data = self.data(v, kind);
        let statements: Vec<_> = items(v, "statements")
            .iter()
            .map(|s| self.statement(s, &data, "statements"))
            .collect();
        Block {
            data,
            statements: self.b.list(statements),
        }
    }

    fn block_field(&mut self, v: &Value, key: &str, parent: &NodeData) -> Block<'a> {
        match child(v, key) {
            Some(block) => self.block(block, SyntaxKind::Block),
            None => {
                self.report_missing_field(parent, key);
                self.b.block(Vec::new())
            }
        }
    }

    fn statement_field(&mut self, v: &Value, key: &'static str, parent: &NodeData) -> &'a Statement<'a> {
        let stmt = match child(v, key) {
            Some(stmt) => self.statement(stmt, parent, key),
            None => Statement::Missing(self.missing_field(parent, key)),
        };
        self.b.alloc(stmt)
    }

    fn opt_statement(&mut self, v: &Value, key: &'static str, parent: &NodeData) -> Option<&'a Statement<'a>> {
        let stmt = self.statement(child(v, key)?, parent, key);
        Some(self.b.alloc(stmt))
    }

    fn statement(&mut self, v: &Value, parent: &NodeData, field: &'static str) -> Statement<'a> {
        match node_type(v) {
            "Block" => Statement::Block(self.block(v, SyntaxKind::Block)),
            "UncheckedBlock" => Statement::UncheckedBlock(self.block(v, SyntaxKind::UncheckedBlock)),
            "IfStatement" => {
                let data = self.data(v, SyntaxKind::IfStatement);
                Statement::If(IfStatement {
                    condition: self.expression_field(v, "condition", &data),
                    true_body: self.statement_field(v, "trueBody", &data),
                    false_body: self.opt_statement(v, "falseBody", &data),
                    data,
                })
            }
            "ForStatement" => {
                let data = self.data(v, SyntaxKind::ForStatement);
                // The loop expression arrives wrapped in an ExpressionStatement.
                let loop_expression = match child(v, "loopExpression") {
                    Some(step) if node_type(step) == "ExpressionStatement" => {
                        self.opt_expression(step, "expression", &data)
                    }
                    Some(step) => {
                        let expr = self.expression(step, &data, "loopExpression");
                        Some(self.b.alloc(expr))
                    }
                    None => None,
                };
                Statement::For(ForStatement {
                    initialization: self.opt_statement(v, "initializationExpression", &data),
                    condition: self.opt_expression(v, "condition", &data),
                    loop_expression,
                    body: self.statement_field(v, "body", &data),
                    data,
                })
            }
            "WhileStatement" => Statement::While(self.while_statement(v, SyntaxKind::WhileStatement)),
            "DoWhileStatement" => Statement::DoWhile(self.while_statement(v, SyntaxKind::DoWhileStatement)),
            "Continue" => Statement::Continue(self.data(v, SyntaxKind::ContinueStatement)),
            "Break" => Statement::Break(self.data(v, SyntaxKind::BreakStatement)),
            "PlaceholderStatement" => Statement::Placeholder(self.data(v, SyntaxKind::PlaceholderStatement)),
            "Return" => {
                let data = self.data(v, SyntaxKind::ReturnStatement);
                Statement::Return(ReturnStatement {
                    expression: self.opt_expression(v, "expression", &data),
                    data,
                })
            }
            "EmitStatement" => {
                let data = self.data(v, SyntaxKind::EmitStatement);
                Statement::Emit(EmitStatement {
                    event_call: self.expression_field(v, "eventCall", &data),
                    data,
                })
            }
            "RevertStatement" => {
                let data = self.data(v, SyntaxKind::RevertStatement);
                Statement::Revert(RevertStatement {
                    error_call: self.expression_field(v, "errorCall", &data),
                    data,
                })
            }
            "VariableDeclarationStatement" => {
                let data = self.data(v, SyntaxKind::VariableDeclarationStatement);
                let declarations: Vec<_> = items(v, "declarations")
                    .iter()
                    .map(|d| (!d.is_null()).then(|| self.variable_declaration(d)))
                    .collect();
                Statement::VariableDeclaration(VariableDeclarationStatement {
                    declarations: self.b.list(declarations),
                    initial_value: self.opt_expression(v, "initialValue", &data),
                    data,
                })
            }
            "ExpressionStatement" => {
                let data = self.data(v, SyntaxKind::ExpressionStatement);
                Statement::Expression(ExpressionStatement {
                    expression: self.expression_field(v, "expression", &data),
                    data,
                })
            }
            "InlineAssembly" => {
                let data = self.data(v, SyntaxKind::InlineAssembly);
                let ast = match child(v, "AST") {
                    Some(ast) => self.yul_block(ast),
                    None => {
                        self.report_missing_field(&data, "AST");
                        self.b.yul_block(Vec::new())
                    }
                };
                let flags: Vec<_> = items(v, "flags")
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|f| self.intern(f))
                    .collect();
                Statement::InlineAssembly(InlineAssembly {
                    dialect: self.opt_text(v, "dialect"),
                    flags: self.b.list(flags),
                    ast,
                    data,
                })
            }
            "TryStatement" => {
                let data = self.data(v, SyntaxKind::TryStatement);
                let external_call = self.expression_field(v, "externalCall", &data);
                let clauses: Vec<_> = items(v, "clauses").iter().map(|c| self.catch_clause(c)).collect();
                Statement::Try(TryStatement {
                    data,
                    external_call,
                    clauses: self.b.list(clauses),
                })
            }
            _ => Statement::Missing(self.unsupported(v, parent, field)),
        }
    }

    fn while_statement(&mut self, v: &Value, kind: SyntaxKind) -> WhileStatement<'a> {
        let data = self.data(v, kind);
        WhileStatement {
            condition: self.expression_field(v, "condition", &data),
            body: self.statement_field(v, "body", &data),
            data,
        }
    }

    fn catch_clause(&mut self, v: &Value) -> TryCatchClause<'a> {
        let data = self.data(v, SyntaxKind::TryCatchClause);
        let parameters = child(v, "parameters").map(|p| self.parameter_list(p));
        let block = self.block_field(v, "block", &data);
        TryCatchClause {
            error_name: self.opt_text(v, "errorName"),
            data,
            parameters,
            block,
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression_field(&mut self, v: &Value, key: &'static str, parent: &NodeData) -> &'a Expression<'a> {
        let expr = match child(v, key) {
            Some(expr) => self.expression(expr, parent, key),
            None => Expression::Missing(self.missing_field(parent, key)),
        };
        self.b.alloc(expr)
    }

    fn opt_expression(&mut self, v: &Value, key: &'static str, parent: &NodeData) -> Option<&'a Expression<'a>> {
        let expr = self.expression(child(v, key)?, parent, key);
        Some(self.b.alloc(expr))
    }

    fn expression_list(&mut self, values: &[Value], parent: &NodeData, field: &'static str) -> &'a [Expression<'a>] {
        let exprs: Vec<_> = values.iter().map(|e| self.expression(e, parent, field)).collect();
        self.b.list(exprs)
    }

    /// `arguments` of an inheritance specifier or modifier invocation;
    /// `null` means no parentheses were written.
    fn argument_list(&mut self, v: &Value, key: &'static str, parent: &NodeData) -> Option<&'a [Expression<'a>]> {
        let values = child(v, key)?.as_array()?;
        Some(self.expression_list(values, parent, key))
    }

    fn names(&self, v: &Value) -> &'a [InternedString] {
        let names = items(v, "names")
            .iter()
            .filter_map(Value::as_str)
            .map(|n| self.intern(n))
            .collect();
        self.b.list(names)
    }

    fn expression(&mut self, v: &Value, parent: &NodeData, field: &'static str) -> Expression<'a> {
        match node_type(v) {
            "Assignment" => {
                let data = self.data(v, SyntaxKind::Assignment);
                Expression::Assignment(Assignment {
                    operator: self.operator(v, &data),
                    left_hand_side: self.expression_field(v, "leftHandSide", &data),
                    right_hand_side: self.expression_field(v, "rightHandSide", &data),
                    data,
                })
            }
            "BinaryOperation" => {
                let data = self.data(v, SyntaxKind::BinaryOperation);
                Expression::BinaryOperation(BinaryOperation {
                    operator: self.operator(v, &data),
                    left_expression: self.expression_field(v, "leftExpression", &data),
                    right_expression: self.expression_field(v, "rightExpression", &data),
                    data,
                })
            }
            "UnaryOperation" => {
                let data = self.data(v, SyntaxKind::UnaryOperation);
                Expression::UnaryOperation(UnaryOperation {
                    operator: self.operator(v, &data),
                    prefix: v.get("prefix").and_then(Value::as_bool).unwrap_or(true),
                    sub_expression: self.expression_field(v, "subExpression", &data),
                    data,
                })
            }
            "Conditional" => {
                let data = self.data(v, SyntaxKind::Conditional);
                // Absent parts are dropped, leaving the arity short.
                let mut expressions = Vec::with_capacity(Conditional::ARITY);
                for key in ["condition", "trueExpression", "falseExpression"] {
                    match child(v, key) {
                        Some(part) => expressions.push(self.expression(part, &data, key)),
                        None => self.report_missing_field(&data, key),
                    }
                }
                Expression::Conditional(Conditional {
                    data,
                    expressions: self.b.list(expressions),
                })
            }
            "FunctionCall" => {
                let data = self.data(v, SyntaxKind::FunctionCall);
                Expression::FunctionCall(FunctionCall {
                    expression: self.expression_field(v, "expression", &data),
                    arguments: self.expression_list(items(v, "arguments"), &data, "arguments"),
                    names: self.names(v),
                    data,
                })
            }
            "FunctionCallOptions" => {
                let data = self.data(v, SyntaxKind::FunctionCallOptions);
                Expression::FunctionCallOptions(FunctionCallOptions {
                    expression: self.expression_field(v, "expression", &data),
                    names: self.names(v),
                    options: self.expression_list(items(v, "options"), &data, "options"),
                    data,
                })
            }
            "MemberAccess" => {
                let data = self.data(v, SyntaxKind::MemberAccess);
                Expression::MemberAccess(MemberAccess {
                    expression: self.expression_field(v, "expression", &data),
                    member_name: self.required_text(v, "memberName", &data),
                    data,
                })
            }
            "IndexAccess" => {
                let data = self.data(v, SyntaxKind::IndexAccess);
                Expression::IndexAccess(IndexAccess {
                    base_expression: self.expression_field(v, "baseExpression", &data),
                    index_expression: self.opt_expression(v, "indexExpression", &data),
                    data,
                })
            }
            "IndexRangeAccess" => {
                let data = self.data(v, SyntaxKind::IndexRangeAccess);
                Expression::IndexRangeAccess(IndexRangeAccess {
                    base_expression: self.expression_field(v, "baseExpression", &data),
                    start_expression: self.opt_expression(v, "startExpression", &data),
                    end_expression: self.opt_expression(v, "endExpression", &data),
                    data,
                })
            }
            "TupleExpression" => {
                let data = self.data(v, SyntaxKind::TupleExpression);
                let components: Vec<_> = items(v, "components")
                    .iter()
                    .map(|c| (!c.is_null()).then(|| self.expression(c, &data, "components")))
                    .collect();
                Expression::Tuple(TupleExpression {
                    components: self.b.list(components),
                    is_inline_array: flag(v, "isInlineArray"),
                    data,
                })
            }
            "NewExpression" => {
                let data = self.data(v, SyntaxKind::NewExpression);
                let type_name = self.type_name_field(v, "typeName", &data);
                Expression::New(NewExpression {
                    data,
                    type_name: self.b.alloc(type_name),
                })
            }
            "ElementaryTypeNameExpression" => {
                let data = self.data(v, SyntaxKind::ElementaryTypeNameExpression);
                // Compilers before 0.6 wrote the type as a bare string.
                let type_name = match child(v, "typeName") {
                    Some(Value::String(name)) => self.b.elementary(name),
                    Some(ty) => self.type_name(ty, &data, "typeName"),
                    None => TypeName::Missing(self.missing_field(&data, "typeName")),
                };
                Expression::ElementaryTypeName(ElementaryTypeNameExpression {
                    data,
                    type_name: self.b.alloc(type_name),
                })
            }
            "Literal" => Expression::Literal(self.literal(v)),
            "Identifier" => {
                let data = self.data(v, SyntaxKind::Identifier);
                Expression::Identifier(Identifier {
                    name: self.name(v, &data),
                    referenced_declaration: referenced_declaration(v),
                    data,
                })
            }
            _ => Expression::Missing(self.unsupported(v, parent, field)),
        }
    }

    fn literal(&mut self, v: &Value) -> Literal {
        let data = self.data(v, SyntaxKind::Literal);
        let kind = match v.get("kind").and_then(Value::as_str) {
            Some(spelling) => LiteralKind::from_name(spelling).unwrap_or_else(|| {
                self.report(&data, &messages::UNKNOWN_1_0, &[spelling, "literal kind"]);
                LiteralKind::Number
            }),
            None => {
                self.report_missing_field(&data, "kind");
                LiteralKind::Number
            }
        };
        Literal {
            kind,
            // `value` is null for hex strings that are not valid UTF-8.
            value: v.get("value").and_then(Value::as_str).map(|s| self.intern(s)),
            hex_value: v.get("hexValue").and_then(Value::as_str).map(|s| self.intern(s)),
            subdenomination: self.opt_text(v, "subdenomination"),
            data,
        }
    }

    // ========================================================================
    // Type names
    // ========================================================================

    fn type_name_field(&mut self, v: &Value, key: &'static str, parent: &NodeData) -> TypeName<'a> {
        match child(v, key) {
            Some(ty) => self.type_name(ty, parent, key),
            None => TypeName::Missing(self.missing_field(parent, key)),
        }
    }

    fn type_name(&mut self, v: &Value, parent: &NodeData, field: &'static str) -> TypeName<'a> {
        match node_type(v) {
            "ElementaryTypeName" => {
                let data = self.data(v, SyntaxKind::ElementaryTypeName);
                let state_mutability = match v.get("stateMutability").and_then(Value::as_str) {
                    Some("payable") => Some(SyntaxKind::PayableKeyword),
                    _ => None,
                };
                TypeName::Elementary(ElementaryTypeName {
                    name: self.name(v, &data),
                    state_mutability,
                    data,
                })
            }
            "UserDefinedTypeName" => {
                let data = self.data(v, SyntaxKind::UserDefinedTypeName);
                let name = match text(v, "name").or_else(|| child(v, "pathNode").and_then(|p| text(p, "name"))) {
                    Some(name) => self.intern(name),
                    None => self.intern(""),
                };
                let referenced = match referenced_declaration(v) {
                    Some(id) => id,
                    None => {
                        self.report_missing_field(&data, "referencedDeclaration");
                        NodeId::INVALID
                    }
                };
                TypeName::UserDefined(UserDefinedTypeName {
                    data,
                    name,
                    referenced_declaration: referenced,
                })
            }
            "Mapping" => {
                let data = self.data(v, SyntaxKind::Mapping);
                let key_type = self.type_name_field(v, "keyType", &data);
                let value_type = self.type_name_field(v, "valueType", &data);
                TypeName::Mapping(Mapping {
                    key_type: self.b.alloc(key_type),
                    key_name: self.opt_text(v, "keyName"),
                    value_type: self.b.alloc(value_type),
                    value_name: self.opt_text(v, "valueName"),
                    data,
                })
            }
            "ArrayTypeName" => {
                let data = self.data(v, SyntaxKind::ArrayTypeName);
                let base_type = self.type_name_field(v, "baseType", &data);
                TypeName::Array(ArrayTypeName {
                    base_type: self.b.alloc(base_type),
                    length: self.opt_expression(v, "length", &data),
                    data,
                })
            }
            "FunctionTypeName" => {
                let data = self.data(v, SyntaxKind::FunctionTypeName);
                TypeName::Function(FunctionTypeName {
                    parameters: self.parameter_list_field(v, "parameterTypes", &data),
                    return_parameters: self.parameter_list_field(v, "returnParameterTypes", &data),
                    visibility: self.keyword(v, "visibility", &data, SyntaxKind::InternalKeyword),
                    state_mutability: self.keyword(v, "stateMutability", &data, SyntaxKind::NonpayableKeyword),
                    data,
                })
            }
            _ => TypeName::Missing(self.unsupported(v, parent, field)),
        }
    }

    // ========================================================================
    // Inline assembly
    // ========================================================================

    fn yul_block(&mut self, v: &Value) -> YulBlock<'a> {
        let data = self.data(v, SyntaxKind::YulBlock);
        let statements: Vec<_> = items(v, "statements")
            .iter()
            .map(|s| self.yul_statement(s, &data))
            .collect();
        YulBlock {
            data,
            statements: self.b.list(statements),
        }
    }

    fn yul_block_field(&mut self, v: &Value, key: &str, parent: &NodeData) -> YulBlock<'a> {
        match child(v, key) {
            Some(block) => self.yul_block(block),
            None => {
                self.report_missing_field(parent, key);
                self.b.yul_block(Vec::new())
            }
        }
    }

    fn yul_statement(&mut self, v: &Value, parent: &NodeData) -> YulStatement<'a> {
        match node_type(v) {
            "YulBlock" => YulStatement::Block(self.yul_block(v)),
            "YulVariableDeclaration" => {
                let data = self.data(v, SyntaxKind::YulVariableDeclaration);
                let variables: Vec<_> = items(v, "variables").iter().map(|n| self.yul_typed_name(n)).collect();
                let value = match child(v, "value") {
                    Some(value) => {
                        let expr = self.yul_expression(value, &data, "value");
                        Some(self.b.alloc(expr))
                    }
                    None => None,
                };
                YulStatement::VariableDeclaration(YulVariableDeclaration {
                    data,
                    variables: self.b.list(variables),
                    value,
                })
            }
            "YulAssignment" => {
                let data = self.data(v, SyntaxKind::YulAssignment);
                let variable_names: Vec<_> = items(v, "variableNames").iter().map(|n| self.yul_identifier(n)).collect();
                YulStatement::Assignment(YulAssignment {
                    variable_names: self.b.list(variable_names),
                    value: self.yul_expression_field(v, "value", &data),
                    data,
                })
            }
            "YulExpressionStatement" => {
                let data = self.data(v, SyntaxKind::YulExpressionStatement);
                YulStatement::Expression(YulExpressionStatement {
                    expression: self.yul_expression_field(v, "expression", &data),
                    data,
                })
            }
            "YulIf" => {
                let data = self.data(v, SyntaxKind::YulIf);
                YulStatement::If(YulIf {
                    condition: self.yul_expression_field(v, "condition", &data),
                    body: self.yul_block_field(v, "body", &data),
                    data,
                })
            }
            "YulForLoop" => {
                let data = self.data(v, SyntaxKind::YulForLoop);
                YulStatement::For(YulForLoop {
                    pre: self.yul_block_field(v, "pre", &data),
                    condition: self.yul_expression_field(v, "condition", &data),
                    post: self.yul_block_field(v, "post", &data),
                    body: self.yul_block_field(v, "body", &data),
                    data,
                })
            }
            "YulSwitch" => {
                let data = self.data(v, SyntaxKind::YulSwitch);
                let expression = self.yul_expression_field(v, "expression", &data);
                let cases: Vec<_> = items(v, "cases").iter().map(|c| self.yul_case(c)).collect();
                YulStatement::Switch(YulSwitch {
                    data,
                    expression,
                    cases: self.b.list(cases),
                })
            }
            "YulFunctionDefinition" => {
                let data = self.data(v, SyntaxKind::YulFunctionDefinition);
                let parameters: Vec<_> = items(v, "parameters").iter().map(|n| self.yul_typed_name(n)).collect();
                let return_variables: Vec<_> =
                    items(v, "returnVariables").iter().map(|n| self.yul_typed_name(n)).collect();
                YulStatement::FunctionDefinition(YulFunctionDefinition {
                    name: self.name(v, &data),
                    parameters: self.b.list(parameters),
                    return_variables: self.b.list(return_variables),
                    body: self.yul_block_field(v, "body", &data),
                    data,
                })
            }
            "YulLeave" => YulStatement::Leave(self.data(v, SyntaxKind::YulLeave)),
            "YulBreak" => YulStatement::Break(self.data(v, SyntaxKind::YulBreak)),
            "YulContinue" => YulStatement::Continue(self.data(v, SyntaxKind::YulContinue)),
            _ => YulStatement::Missing(self.unsupported(v, parent, "statements")),
        }
    }

    fn yul_case(&mut self, v: &Value) -> YulCase<'a> {
        let data = self.data(v, SyntaxKind::YulCase);
        let value = match child(v, "value") {
            Some(Value::String(default)) if default == "default" => None,
            Some(literal) => Some(self.yul_literal(literal)),
            None => {
                self.report_missing_field(&data, "value");
                None
            }
        };
        YulCase {
            body: self.yul_block_field(v, "body", &data),
            data,
            value,
        }
    }

    fn yul_expression_field(&mut self, v: &Value, key: &'static str, parent: &NodeData) -> &'a YulExpression<'a> {
        let expr = match child(v, key) {
            Some(expr) => self.yul_expression(expr, parent, key),
            None => YulExpression::Missing(self.missing_field(parent, key)),
        };
        self.b.alloc(expr)
    }

    fn yul_expression(&mut self, v: &Value, parent: &NodeData, field: &'static str) -> YulExpression<'a> {
        match node_type(v) {
            "YulFunctionCall" => {
                let data = self.data(v, SyntaxKind::YulFunctionCall);
                let function_name = match child(v, "functionName") {
                    Some(name) => self.yul_identifier(name),
                    None => {
                        self.report_missing_field(&data, "functionName");
                        self.b.yul_identifier("")
                    }
                };
                let arguments: Vec<_> = items(v, "arguments")
                    .iter()
                    .map(|a| self.yul_expression(a, &data, "arguments"))
                    .collect();
                YulExpression::FunctionCall(YulFunctionCall {
                    data,
                    function_name,
                    arguments: self.b.list(arguments),
                })
            }
            "YulIdentifier" => YulExpression::Identifier(self.yul_identifier(v)),
            "YulLiteral" => YulExpression::Literal(self.yul_literal(v)),
            _ => YulExpression::Missing(self.unsupported(v, parent, field)),
        }
    }

    fn yul_identifier(&mut self, v: &Value) -> YulIdentifier {
        let data = self.data(v, SyntaxKind::YulIdentifier);
        YulIdentifier {
            name: self.name(v, &data),
            data,
        }
    }

    fn yul_literal(&mut self, v: &Value) -> YulLiteral {
        let data = self.data(v, SyntaxKind::YulLiteral);
        let mut kind = match v.get("kind").and_then(Value::as_str) {
            Some(spelling) => LiteralKind::from_name(spelling).unwrap_or_else(|| {
                self.report(&data, &messages::UNKNOWN_1_0, &[spelling, "literal kind"]);
                LiteralKind::Number
            }),
            None => LiteralKind::Number,
        };
        let hex_value = self.opt_text(v, "hexValue");
        let value = match (v.get("value").and_then(Value::as_str), hex_value) {
            (Some(value), _) => self.intern(value),
            (None, Some(hex)) => {
                kind = LiteralKind::HexString;
                hex
            }
            (None, None) => {
                self.report_missing_field(&data, "value");
                self.intern("")
            }
        };
        YulLiteral {
            data,
            kind,
            value,
            hex_value,
        }
    }

    fn yul_typed_name(&mut self, v: &Value) -> YulTypedName {
        let data = self.data(v, SyntaxKind::YulTypedName);
        YulTypedName {
            name: self.name(v, &data),
            type_name: self.opt_text(v, "type"),
            data,
        }
    }
}
