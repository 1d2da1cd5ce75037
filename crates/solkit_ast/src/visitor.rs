//! AST visitor trait for traversing the syntax tree.
//!
//! Default implementations walk into children in source order. Nodes are
//! handed out with the tree lifetime so visitors can keep references.

use crate::node::*;

/// A visitor over a Solidity tree. Override the hooks you need and call the
/// matching `walk_*` function to keep descending.
pub trait AstVisitor<'a> {
    fn visit_source_unit(&mut self, node: &'a SourceUnit<'a>) {
        walk_source_unit(self, node);
    }

    fn visit_source_unit_item(&mut self, item: &'a SourceUnitItem<'a>) {
        walk_source_unit_item(self, item);
    }

    // -- Declarations --

    fn visit_contract(&mut self, node: &'a ContractDefinition<'a>) {
        walk_contract(self, node);
    }

    fn visit_contract_member(&mut self, member: &'a ContractMember<'a>) {
        walk_contract_member(self, member);
    }

    fn visit_function(&mut self, node: &'a FunctionDefinition<'a>) {
        walk_function(self, node);
    }

    fn visit_modifier(&mut self, node: &'a ModifierDefinition<'a>) {
        walk_modifier(self, node);
    }

    fn visit_parameter_list(&mut self, node: &'a ParameterList<'a>) {
        walk_parameter_list(self, node);
    }

    fn visit_variable_declaration(&mut self, node: &'a VariableDeclaration<'a>) {
        walk_variable_declaration(self, node);
    }

    fn visit_state_variable(&mut self, node: &'a StateVariableDeclaration<'a>) {
        walk_state_variable(self, node);
    }

    fn visit_struct(&mut self, node: &'a StructDefinition<'a>) {
        walk_struct(self, node);
    }

    fn visit_enum(&mut self, node: &'a EnumDefinition<'a>) {
        walk_enum(self, node);
    }

    fn visit_enum_value(&mut self, _node: &'a EnumValue) {}

    fn visit_event(&mut self, node: &'a EventDefinition<'a>) {
        walk_event(self, node);
    }

    fn visit_error(&mut self, node: &'a ErrorDefinition<'a>) {
        walk_error(self, node);
    }

    fn visit_using_for(&mut self, node: &'a UsingForDirective<'a>) {
        walk_using_for(self, node);
    }

    fn visit_user_defined_value_type(&mut self, node: &'a UserDefinedValueTypeDefinition<'a>) {
        walk_user_defined_value_type(self, node);
    }

    // -- Statements --

    fn visit_block(&mut self, node: &'a Block<'a>) {
        walk_block(self, node);
    }

    fn visit_statement(&mut self, stmt: &'a Statement<'a>) {
        walk_statement(self, stmt);
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &'a Expression<'a>) {
        walk_expression(self, expr);
    }

    // -- Types --

    fn visit_type_name(&mut self, ty: &'a TypeName<'a>) {
        walk_type_name(self, ty);
    }

    // -- Inline assembly --

    fn visit_yul_block(&mut self, node: &'a YulBlock<'a>) {
        walk_yul_block(self, node);
    }

    fn visit_yul_statement(&mut self, _stmt: &'a YulStatement<'a>) {}
}

pub fn walk_source_unit<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a SourceUnit<'a>) {
    for item in node.nodes.iter() {
        v.visit_source_unit_item(item);
    }
}

pub fn walk_source_unit_item<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    item: &'a SourceUnitItem<'a>,
) {
    match item {
        SourceUnitItem::Pragma(_) | SourceUnitItem::Import(_) | SourceUnitItem::Missing(_) => {}
        SourceUnitItem::Contract(n) => v.visit_contract(n),
        SourceUnitItem::Function(n) => v.visit_function(n),
        SourceUnitItem::Struct(n) => v.visit_struct(n),
        SourceUnitItem::Enum(n) => v.visit_enum(n),
        SourceUnitItem::Event(n) => v.visit_event(n),
        SourceUnitItem::Error(n) => v.visit_error(n),
        SourceUnitItem::UsingFor(n) => v.visit_using_for(n),
        SourceUnitItem::Constant(n) => v.visit_state_variable(n),
        SourceUnitItem::UserDefinedValueType(n) => v.visit_user_defined_value_type(n),
    }
}

pub fn walk_contract<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a ContractDefinition<'a>) {
    for base in node.base_contracts.iter() {
        if let Some(args) = base.arguments {
            for arg in args.iter() {
                v.visit_expression(arg);
            }
        }
    }
    for member in node.nodes.iter() {
        v.visit_contract_member(member);
    }
}

pub fn walk_contract_member<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    member: &'a ContractMember<'a>,
) {
    match member {
        ContractMember::Function(n) => v.visit_function(n),
        ContractMember::Modifier(n) => v.visit_modifier(n),
        ContractMember::StateVariable(n) => v.visit_state_variable(n),
        ContractMember::Struct(n) => v.visit_struct(n),
        ContractMember::Enum(n) => v.visit_enum(n),
        ContractMember::Event(n) => v.visit_event(n),
        ContractMember::Error(n) => v.visit_error(n),
        ContractMember::UsingFor(n) => v.visit_using_for(n),
        ContractMember::UserDefinedValueType(n) => v.visit_user_defined_value_type(n),
        ContractMember::Missing(_) => {}
    }
}

pub fn walk_function<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a FunctionDefinition<'a>) {
    v.visit_parameter_list(&node.parameters);
    for modifier in node.modifiers.iter() {
        if let Some(args) = modifier.arguments {
            for arg in args.iter() {
                v.visit_expression(arg);
            }
        }
    }
    v.visit_parameter_list(&node.return_parameters);
    if let Some(ref body) = node.body {
        v.visit_block(body);
    }
}

pub fn walk_modifier<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a ModifierDefinition<'a>) {
    v.visit_parameter_list(&node.parameters);
    if let Some(ref body) = node.body {
        v.visit_block(body);
    }
}

pub fn walk_parameter_list<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a ParameterList<'a>) {
    for param in node.parameters.iter() {
        v.visit_variable_declaration(param);
    }
}

pub fn walk_variable_declaration<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &'a VariableDeclaration<'a>,
) {
    v.visit_type_name(node.type_name);
}

pub fn walk_state_variable<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &'a StateVariableDeclaration<'a>,
) {
    v.visit_type_name(node.type_name);
    if let Some(value) = node.value {
        v.visit_expression(value);
    }
}

pub fn walk_struct<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a StructDefinition<'a>) {
    for member in node.members.iter() {
        v.visit_variable_declaration(member);
    }
}

pub fn walk_enum<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a EnumDefinition<'a>) {
    for value in node.members.iter() {
        v.visit_enum_value(value);
    }
}

pub fn walk_event<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a EventDefinition<'a>) {
    v.visit_parameter_list(&node.parameters);
}

pub fn walk_error<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a ErrorDefinition<'a>) {
    v.visit_parameter_list(&node.parameters);
}

pub fn walk_using_for<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a UsingForDirective<'a>) {
    if let Some(ty) = node.type_name {
        v.visit_type_name(ty);
    }
}

pub fn walk_user_defined_value_type<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &'a UserDefinedValueTypeDefinition<'a>,
) {
    v.visit_type_name(node.underlying_type);
}

pub fn walk_block<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a Block<'a>) {
    for stmt in node.statements.iter() {
        v.visit_statement(stmt);
    }
}

pub fn walk_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, stmt: &'a Statement<'a>) {
    match stmt {
        Statement::Block(b) | Statement::UncheckedBlock(b) => v.visit_block(b),
        Statement::If(n) => {
            v.visit_expression(n.condition);
            v.visit_statement(n.true_body);
            if let Some(f) = n.false_body {
                v.visit_statement(f);
            }
        }
        Statement::For(n) => {
            if let Some(init) = n.initialization {
                v.visit_statement(init);
            }
            if let Some(cond) = n.condition {
                v.visit_expression(cond);
            }
            if let Some(step) = n.loop_expression {
                v.visit_expression(step);
            }
            v.visit_statement(n.body);
        }
        Statement::While(n) | Statement::DoWhile(n) => {
            v.visit_expression(n.condition);
            v.visit_statement(n.body);
        }
        Statement::Continue(_)
        | Statement::Break(_)
        | Statement::Placeholder(_)
        | Statement::Missing(_) => {}
        Statement::Return(n) => {
            if let Some(e) = n.expression {
                v.visit_expression(e);
            }
        }
        Statement::Emit(n) => v.visit_expression(n.event_call),
        Statement::Revert(n) => v.visit_expression(n.error_call),
        Statement::VariableDeclaration(n) => {
            for decl in n.declarations.iter().flatten() {
                v.visit_variable_declaration(decl);
            }
            if let Some(init) = n.initial_value {
                v.visit_expression(init);
            }
        }
        Statement::Expression(n) => v.visit_expression(n.expression),
        Statement::InlineAssembly(n) => v.visit_yul_block(&n.ast),
        Statement::Try(n) => {
            v.visit_expression(n.external_call);
            for clause in n.clauses.iter() {
                if let Some(ref params) = clause.parameters {
                    v.visit_parameter_list(params);
                }
                v.visit_block(&clause.block);
            }
        }
    }
}

pub fn walk_expression<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, expr: &'a Expression<'a>) {
    match expr {
        Expression::Assignment(n) => {
            v.visit_expression(n.left_hand_side);
            v.visit_expression(n.right_hand_side);
        }
        Expression::BinaryOperation(n) => {
            v.visit_expression(n.left_expression);
            v.visit_expression(n.right_expression);
        }
        Expression::UnaryOperation(n) => v.visit_expression(n.sub_expression),
        Expression::Conditional(n) => {
            for e in n.expressions.iter() {
                v.visit_expression(e);
            }
        }
        Expression::FunctionCall(n) => {
            v.visit_expression(n.expression);
            for arg in n.arguments.iter() {
                v.visit_expression(arg);
            }
        }
        Expression::FunctionCallOptions(n) => {
            v.visit_expression(n.expression);
            for opt in n.options.iter() {
                v.visit_expression(opt);
            }
        }
        Expression::MemberAccess(n) => v.visit_expression(n.expression),
        Expression::IndexAccess(n) => {
            v.visit_expression(n.base_expression);
            if let Some(i) = n.index_expression {
                v.visit_expression(i);
            }
        }
        Expression::IndexRangeAccess(n) => {
            v.visit_expression(n.base_expression);
            if let Some(s) = n.start_expression {
                v.visit_expression(s);
            }
            if let Some(e) = n.end_expression {
                v.visit_expression(e);
            }
        }
        Expression::Tuple(n) => {
            for c in n.components.iter().flatten() {
                v.visit_expression(c);
            }
        }
        Expression::New(n) => v.visit_type_name(n.type_name),
        Expression::ElementaryTypeName(n) => v.visit_type_name(n.type_name),
        Expression::Literal(_) | Expression::Identifier(_) | Expression::Missing(_) => {}
    }
}

pub fn walk_type_name<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, ty: &'a TypeName<'a>) {
    match ty {
        TypeName::Elementary(_) | TypeName::UserDefined(_) | TypeName::Missing(_) => {}
        TypeName::Mapping(m) => {
            v.visit_type_name(m.key_type);
            v.visit_type_name(m.value_type);
        }
        TypeName::Array(a) => {
            v.visit_type_name(a.base_type);
            if let Some(len) = a.length {
                v.visit_expression(len);
            }
        }
        TypeName::Function(f) => {
            v.visit_parameter_list(&f.parameters);
            v.visit_parameter_list(&f.return_parameters);
        }
    }
}

pub fn walk_yul_block<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &'a YulBlock<'a>) {
    for stmt in node.statements.iter() {
        v.visit_yul_statement(stmt);
    }
}
