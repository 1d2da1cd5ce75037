//! Helpers over the node enums: `data()`/`kind()`/`id()` accessors and the
//! borrowed `NodeRef` handle used for generic traversal.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeId;
use solkit_core::text::TextRange;

macro_rules! impl_data_helpers {
    ($ty:ident) => {
        impl<'a> $ty<'a> {
            pub fn kind(&self) -> SyntaxKind {
                self.data().kind
            }

            pub fn id(&self) -> NodeId {
                self.data().id
            }

            pub fn range(&self) -> TextRange {
                self.data().range
            }
        }
    };
}

impl<'a> SourceUnitItem<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            SourceUnitItem::Pragma(n) => &n.data,
            SourceUnitItem::Import(n) => &n.data,
            SourceUnitItem::Contract(n) => &n.data,
            SourceUnitItem::Function(n) => &n.data,
            SourceUnitItem::Struct(n) => &n.data,
            SourceUnitItem::Enum(n) => &n.data,
            SourceUnitItem::Event(n) => &n.data,
            SourceUnitItem::Error(n) => &n.data,
            SourceUnitItem::UsingFor(n) => &n.data,
            SourceUnitItem::Constant(n) => &n.data,
            SourceUnitItem::UserDefinedValueType(n) => &n.data,
            SourceUnitItem::Missing(n) => &n.data,
        }
    }
}
impl_data_helpers!(SourceUnitItem);

impl<'a> ContractMember<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            ContractMember::Function(n) => &n.data,
            ContractMember::Modifier(n) => &n.data,
            ContractMember::StateVariable(n) => &n.data,
            ContractMember::Struct(n) => &n.data,
            ContractMember::Enum(n) => &n.data,
            ContractMember::Event(n) => &n.data,
            ContractMember::Error(n) => &n.data,
            ContractMember::UsingFor(n) => &n.data,
            ContractMember::UserDefinedValueType(n) => &n.data,
            ContractMember::Missing(n) => &n.data,
        }
    }
}
impl_data_helpers!(ContractMember);

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Block(n) | Statement::UncheckedBlock(n) => &n.data,
            Statement::If(n) => &n.data,
            Statement::For(n) => &n.data,
            Statement::While(n) | Statement::DoWhile(n) => &n.data,
            Statement::Continue(d) | Statement::Break(d) | Statement::Placeholder(d) => d,
            Statement::Return(n) => &n.data,
            Statement::Emit(n) => &n.data,
            Statement::Revert(n) => &n.data,
            Statement::VariableDeclaration(n) => &n.data,
            Statement::Expression(n) => &n.data,
            Statement::InlineAssembly(n) => &n.data,
            Statement::Try(n) => &n.data,
            Statement::Missing(n) => &n.data,
        }
    }
}
impl_data_helpers!(Statement);

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Assignment(n) => &n.data,
            Expression::BinaryOperation(n) => &n.data,
            Expression::UnaryOperation(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::FunctionCall(n) => &n.data,
            Expression::FunctionCallOptions(n) => &n.data,
            Expression::MemberAccess(n) => &n.data,
            Expression::IndexAccess(n) => &n.data,
            Expression::IndexRangeAccess(n) => &n.data,
            Expression::Tuple(n) => &n.data,
            Expression::New(n) => &n.data,
            Expression::ElementaryTypeName(n) => &n.data,
            Expression::Literal(n) => &n.data,
            Expression::Identifier(n) => &n.data,
            Expression::Missing(n) => &n.data,
        }
    }
}
impl_data_helpers!(Expression);

impl<'a> TypeName<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeName::Elementary(n) => &n.data,
            TypeName::UserDefined(n) => &n.data,
            TypeName::Mapping(n) => &n.data,
            TypeName::Array(n) => &n.data,
            TypeName::Function(n) => &n.data,
            TypeName::Missing(n) => &n.data,
        }
    }
}
impl_data_helpers!(TypeName);

impl<'a> YulStatement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            YulStatement::Block(n) => &n.data,
            YulStatement::VariableDeclaration(n) => &n.data,
            YulStatement::Assignment(n) => &n.data,
            YulStatement::Expression(n) => &n.data,
            YulStatement::If(n) => &n.data,
            YulStatement::For(n) => &n.data,
            YulStatement::Switch(n) => &n.data,
            YulStatement::FunctionDefinition(n) => &n.data,
            YulStatement::Leave(d) | YulStatement::Break(d) | YulStatement::Continue(d) => d,
            YulStatement::Missing(n) => &n.data,
        }
    }
}
impl_data_helpers!(YulStatement);

impl<'a> YulExpression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            YulExpression::FunctionCall(n) => &n.data,
            YulExpression::Identifier(n) => &n.data,
            YulExpression::Literal(n) => &n.data,
            YulExpression::Missing(n) => &n.data,
        }
    }
}
impl_data_helpers!(YulExpression);

// ============================================================================
// NodeRef
// ============================================================================

/// A borrowed handle to any node the printer can start from.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    SourceUnit(&'a SourceUnit<'a>),
    Pragma(&'a PragmaDirective<'a>),
    Import(&'a ImportDirective<'a>),
    Contract(&'a ContractDefinition<'a>),
    InheritanceSpecifier(&'a InheritanceSpecifier<'a>),
    IdentifierPath(&'a IdentifierPath),
    Function(&'a FunctionDefinition<'a>),
    Modifier(&'a ModifierDefinition<'a>),
    ModifierInvocation(&'a ModifierInvocation<'a>),
    OverrideSpecifier(&'a OverrideSpecifier<'a>),
    ParameterList(&'a ParameterList<'a>),
    VariableDeclaration(&'a VariableDeclaration<'a>),
    StateVariable(&'a StateVariableDeclaration<'a>),
    Struct(&'a StructDefinition<'a>),
    Enum(&'a EnumDefinition<'a>),
    EnumValue(&'a EnumValue),
    Event(&'a EventDefinition<'a>),
    Error(&'a ErrorDefinition<'a>),
    UsingFor(&'a UsingForDirective<'a>),
    UserDefinedValueType(&'a UserDefinedValueTypeDefinition<'a>),
    Block(&'a Block<'a>),
    Statement(&'a Statement<'a>),
    TryCatchClause(&'a TryCatchClause<'a>),
    Expression(&'a Expression<'a>),
    TypeName(&'a TypeName<'a>),
    YulBlock(&'a YulBlock<'a>),
    YulStatement(&'a YulStatement<'a>),
    YulCase(&'a YulCase<'a>),
    YulExpression(&'a YulExpression<'a>),
    YulTypedName(&'a YulTypedName),
    /// A recovery placeholder standing in for a declaration-level node.
    Missing(&'a MissingNode),
}

impl<'a> NodeRef<'a> {
    pub fn data(&self) -> &'a NodeData {
        match *self {
            NodeRef::SourceUnit(n) => &n.data,
            NodeRef::Pragma(n) => &n.data,
            NodeRef::Import(n) => &n.data,
            NodeRef::Contract(n) => &n.data,
            NodeRef::InheritanceSpecifier(n) => &n.data,
            NodeRef::IdentifierPath(n) => &n.data,
            NodeRef::Function(n) => &n.data,
            NodeRef::Modifier(n) => &n.data,
            NodeRef::ModifierInvocation(n) => &n.data,
            NodeRef::OverrideSpecifier(n) => &n.data,
            NodeRef::ParameterList(n) => &n.data,
            NodeRef::VariableDeclaration(n) => &n.data,
            NodeRef::StateVariable(n) => &n.data,
            NodeRef::Struct(n) => &n.data,
            NodeRef::Enum(n) => &n.data,
            NodeRef::EnumValue(n) => &n.data,
            NodeRef::Event(n) => &n.data,
            NodeRef::Error(n) => &n.data,
            NodeRef::UsingFor(n) => &n.data,
            NodeRef::UserDefinedValueType(n) => &n.data,
            NodeRef::Block(n) => &n.data,
            NodeRef::Statement(n) => n.data(),
            NodeRef::TryCatchClause(n) => &n.data,
            NodeRef::Expression(n) => n.data(),
            NodeRef::TypeName(n) => n.data(),
            NodeRef::YulBlock(n) => &n.data,
            NodeRef::YulStatement(n) => n.data(),
            NodeRef::YulCase(n) => &n.data,
            NodeRef::YulExpression(n) => n.data(),
            NodeRef::YulTypedName(n) => &n.data,
            NodeRef::Missing(n) => &n.data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn id(&self) -> NodeId {
        self.data().id
    }

    pub fn range(&self) -> TextRange {
        self.data().range
    }

    /// The ordered child nodes of this node.
    ///
    /// Names, operator codes and other scalar attributes are not nodes and
    /// are not returned.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        match *self {
            NodeRef::SourceUnit(n) => out.extend(n.nodes.iter().map(NodeRef::from)),
            NodeRef::Pragma(_) | NodeRef::Import(_) => {}
            NodeRef::Contract(n) => {
                out.extend(n.base_contracts.iter().map(NodeRef::InheritanceSpecifier));
                out.extend(n.nodes.iter().map(NodeRef::from));
            }
            NodeRef::InheritanceSpecifier(n) => {
                out.push(NodeRef::IdentifierPath(&n.base_name));
                if let Some(args) = n.arguments {
                    out.extend(args.iter().map(NodeRef::Expression));
                }
            }
            NodeRef::IdentifierPath(_)
            | NodeRef::EnumValue(_)
            | NodeRef::YulTypedName(_)
            | NodeRef::Missing(_) => {}
            NodeRef::Function(n) => {
                out.push(NodeRef::ParameterList(&n.parameters));
                out.extend(n.modifiers.iter().map(NodeRef::ModifierInvocation));
                if let Some(ref o) = n.overrides {
                    out.push(NodeRef::OverrideSpecifier(o));
                }
                out.push(NodeRef::ParameterList(&n.return_parameters));
                if let Some(ref body) = n.body {
                    out.push(NodeRef::Block(body));
                }
            }
            NodeRef::Modifier(n) => {
                out.push(NodeRef::ParameterList(&n.parameters));
                if let Some(ref o) = n.overrides {
                    out.push(NodeRef::OverrideSpecifier(o));
                }
                if let Some(ref body) = n.body {
                    out.push(NodeRef::Block(body));
                }
            }
            NodeRef::ModifierInvocation(n) => {
                out.push(NodeRef::IdentifierPath(&n.modifier_name));
                if let Some(args) = n.arguments {
                    out.extend(args.iter().map(NodeRef::Expression));
                }
            }
            NodeRef::OverrideSpecifier(n) => {
                out.extend(n.overrides.iter().map(NodeRef::IdentifierPath))
            }
            NodeRef::ParameterList(n) => {
                out.extend(n.parameters.iter().map(NodeRef::VariableDeclaration))
            }
            NodeRef::VariableDeclaration(n) => out.push(NodeRef::TypeName(n.type_name)),
            NodeRef::StateVariable(n) => {
                out.push(NodeRef::TypeName(n.type_name));
                if let Some(ref o) = n.overrides {
                    out.push(NodeRef::OverrideSpecifier(o));
                }
                if let Some(value) = n.value {
                    out.push(NodeRef::Expression(value));
                }
            }
            NodeRef::Struct(n) => out.extend(n.members.iter().map(NodeRef::VariableDeclaration)),
            NodeRef::Enum(n) => out.extend(n.members.iter().map(NodeRef::EnumValue)),
            NodeRef::Event(n) => out.push(NodeRef::ParameterList(&n.parameters)),
            NodeRef::Error(n) => out.push(NodeRef::ParameterList(&n.parameters)),
            NodeRef::UsingFor(n) => {
                if let Some(ref lib) = n.library_name {
                    out.push(NodeRef::IdentifierPath(lib));
                }
                out.extend(
                    n.function_list
                        .iter()
                        .map(|f| NodeRef::IdentifierPath(&f.function)),
                );
                if let Some(ty) = n.type_name {
                    out.push(NodeRef::TypeName(ty));
                }
            }
            NodeRef::UserDefinedValueType(n) => out.push(NodeRef::TypeName(n.underlying_type)),
            NodeRef::Block(n) => out.extend(n.statements.iter().map(NodeRef::Statement)),
            NodeRef::Statement(s) => statement_children(s, &mut out),
            NodeRef::TryCatchClause(n) => {
                if let Some(ref params) = n.parameters {
                    out.push(NodeRef::ParameterList(params));
                }
                out.push(NodeRef::Block(&n.block));
            }
            NodeRef::Expression(e) => expression_children(e, &mut out),
            NodeRef::TypeName(t) => match t {
                TypeName::Elementary(_) | TypeName::UserDefined(_) | TypeName::Missing(_) => {}
                TypeName::Mapping(m) => {
                    out.push(NodeRef::TypeName(m.key_type));
                    out.push(NodeRef::TypeName(m.value_type));
                }
                TypeName::Array(a) => {
                    out.push(NodeRef::TypeName(a.base_type));
                    if let Some(len) = a.length {
                        out.push(NodeRef::Expression(len));
                    }
                }
                TypeName::Function(f) => {
                    out.push(NodeRef::ParameterList(&f.parameters));
                    out.push(NodeRef::ParameterList(&f.return_parameters));
                }
            },
            NodeRef::YulBlock(n) => out.extend(n.statements.iter().map(NodeRef::YulStatement)),
            NodeRef::YulStatement(s) => yul_statement_children(s, &mut out),
            NodeRef::YulCase(n) => out.push(NodeRef::YulBlock(&n.body)),
            NodeRef::YulExpression(e) => {
                if let YulExpression::FunctionCall(call) = e {
                    out.extend(call.arguments.iter().map(NodeRef::YulExpression));
                }
            }
        }
        out
    }
}

fn statement_children<'a>(stmt: &'a Statement<'a>, out: &mut Vec<NodeRef<'a>>) {
    match stmt {
        Statement::Block(b) | Statement::UncheckedBlock(b) => {
            out.extend(b.statements.iter().map(NodeRef::Statement))
        }
        Statement::If(n) => {
            out.push(NodeRef::Expression(n.condition));
            out.push(NodeRef::Statement(n.true_body));
            if let Some(f) = n.false_body {
                out.push(NodeRef::Statement(f));
            }
        }
        Statement::For(n) => {
            if let Some(init) = n.initialization {
                out.push(NodeRef::Statement(init));
            }
            if let Some(cond) = n.condition {
                out.push(NodeRef::Expression(cond));
            }
            if let Some(step) = n.loop_expression {
                out.push(NodeRef::Expression(step));
            }
            out.push(NodeRef::Statement(n.body));
        }
        Statement::While(n) | Statement::DoWhile(n) => {
            out.push(NodeRef::Expression(n.condition));
            out.push(NodeRef::Statement(n.body));
        }
        Statement::Continue(_)
        | Statement::Break(_)
        | Statement::Placeholder(_)
        | Statement::Missing(_) => {}
        Statement::Return(n) => {
            if let Some(e) = n.expression {
                out.push(NodeRef::Expression(e));
            }
        }
        Statement::Emit(n) => out.push(NodeRef::Expression(n.event_call)),
        Statement::Revert(n) => out.push(NodeRef::Expression(n.error_call)),
        Statement::VariableDeclaration(n) => {
            out.extend(
                n.declarations
                    .iter()
                    .flatten()
                    .map(NodeRef::VariableDeclaration),
            );
            if let Some(init) = n.initial_value {
                out.push(NodeRef::Expression(init));
            }
        }
        Statement::Expression(n) => out.push(NodeRef::Expression(n.expression)),
        Statement::InlineAssembly(n) => out.push(NodeRef::YulBlock(&n.ast)),
        Statement::Try(n) => {
            out.push(NodeRef::Expression(n.external_call));
            out.extend(n.clauses.iter().map(NodeRef::TryCatchClause));
        }
    }
}

fn expression_children<'a>(expr: &'a Expression<'a>, out: &mut Vec<NodeRef<'a>>) {
    match expr {
        Expression::Assignment(n) => {
            out.push(NodeRef::Expression(n.left_hand_side));
            out.push(NodeRef::Expression(n.right_hand_side));
        }
        Expression::BinaryOperation(n) => {
            out.push(NodeRef::Expression(n.left_expression));
            out.push(NodeRef::Expression(n.right_expression));
        }
        Expression::UnaryOperation(n) => out.push(NodeRef::Expression(n.sub_expression)),
        Expression::Conditional(n) => out.extend(n.expressions.iter().map(NodeRef::Expression)),
        Expression::FunctionCall(n) => {
            out.push(NodeRef::Expression(n.expression));
            out.extend(n.arguments.iter().map(NodeRef::Expression));
        }
        Expression::FunctionCallOptions(n) => {
            out.push(NodeRef::Expression(n.expression));
            out.extend(n.options.iter().map(NodeRef::Expression));
        }
        Expression::MemberAccess(n) => out.push(NodeRef::Expression(n.expression)),
        Expression::IndexAccess(n) => {
            out.push(NodeRef::Expression(n.base_expression));
            if let Some(i) = n.index_expression {
                out.push(NodeRef::Expression(i));
            }
        }
        Expression::IndexRangeAccess(n) => {
            out.push(NodeRef::Expression(n.base_expression));
            if let Some(s) = n.start_expression {
                out.push(NodeRef::Expression(s));
            }
            if let Some(e) = n.end_expression {
                out.push(NodeRef::Expression(e));
            }
        }
        Expression::Tuple(n) => out.extend(n.components.iter().flatten().map(NodeRef::Expression)),
        Expression::New(n) => out.push(NodeRef::TypeName(n.type_name)),
        Expression::ElementaryTypeName(n) => out.push(NodeRef::TypeName(n.type_name)),
        Expression::Literal(_) | Expression::Identifier(_) | Expression::Missing(_) => {}
    }
}

fn yul_statement_children<'a>(stmt: &'a YulStatement<'a>, out: &mut Vec<NodeRef<'a>>) {
    match stmt {
        YulStatement::Block(b) => out.extend(b.statements.iter().map(NodeRef::YulStatement)),
        YulStatement::VariableDeclaration(n) => {
            out.extend(n.variables.iter().map(NodeRef::YulTypedName));
            if let Some(v) = n.value {
                out.push(NodeRef::YulExpression(v));
            }
        }
        YulStatement::Assignment(n) => out.push(NodeRef::YulExpression(n.value)),
        YulStatement::Expression(n) => out.push(NodeRef::YulExpression(n.expression)),
        YulStatement::If(n) => {
            out.push(NodeRef::YulExpression(n.condition));
            out.push(NodeRef::YulBlock(&n.body));
        }
        YulStatement::For(n) => {
            out.push(NodeRef::YulBlock(&n.pre));
            out.push(NodeRef::YulExpression(n.condition));
            out.push(NodeRef::YulBlock(&n.post));
            out.push(NodeRef::YulBlock(&n.body));
        }
        YulStatement::Switch(n) => {
            out.push(NodeRef::YulExpression(n.expression));
            out.extend(n.cases.iter().map(NodeRef::YulCase));
        }
        YulStatement::FunctionDefinition(n) => {
            out.extend(n.parameters.iter().map(NodeRef::YulTypedName));
            out.extend(n.return_variables.iter().map(NodeRef::YulTypedName));
            out.push(NodeRef::YulBlock(&n.body));
        }
        YulStatement::Leave(_)
        | YulStatement::Break(_)
        | YulStatement::Continue(_)
        | YulStatement::Missing(_) => {}
    }
}

impl<'a> From<&'a SourceUnitItem<'a>> for NodeRef<'a> {
    fn from(item: &'a SourceUnitItem<'a>) -> Self {
        match item {
            SourceUnitItem::Pragma(n) => NodeRef::Pragma(n),
            SourceUnitItem::Import(n) => NodeRef::Import(n),
            SourceUnitItem::Contract(n) => NodeRef::Contract(n),
            SourceUnitItem::Function(n) => NodeRef::Function(n),
            SourceUnitItem::Struct(n) => NodeRef::Struct(n),
            SourceUnitItem::Enum(n) => NodeRef::Enum(n),
            SourceUnitItem::Event(n) => NodeRef::Event(n),
            SourceUnitItem::Error(n) => NodeRef::Error(n),
            SourceUnitItem::UsingFor(n) => NodeRef::UsingFor(n),
            SourceUnitItem::Constant(n) => NodeRef::StateVariable(n),
            SourceUnitItem::UserDefinedValueType(n) => NodeRef::UserDefinedValueType(n),
            SourceUnitItem::Missing(n) => NodeRef::Missing(n),
        }
    }
}

impl<'a> From<&'a ContractMember<'a>> for NodeRef<'a> {
    fn from(member: &'a ContractMember<'a>) -> Self {
        match member {
            ContractMember::Function(n) => NodeRef::Function(n),
            ContractMember::Modifier(n) => NodeRef::Modifier(n),
            ContractMember::StateVariable(n) => NodeRef::StateVariable(n),
            ContractMember::Struct(n) => NodeRef::Struct(n),
            ContractMember::Enum(n) => NodeRef::Enum(n),
            ContractMember::Event(n) => NodeRef::Event(n),
            ContractMember::Error(n) => NodeRef::Error(n),
            ContractMember::UsingFor(n) => NodeRef::UsingFor(n),
            ContractMember::UserDefinedValueType(n) => NodeRef::UserDefinedValueType(n),
            ContractMember::Missing(n) => NodeRef::Missing(n),
        }
    }
}

impl<'a> From<&'a SourceUnit<'a>> for NodeRef<'a> {
    fn from(n: &'a SourceUnit<'a>) -> Self {
        NodeRef::SourceUnit(n)
    }
}

impl<'a> From<&'a Statement<'a>> for NodeRef<'a> {
    fn from(n: &'a Statement<'a>) -> Self {
        NodeRef::Statement(n)
    }
}

impl<'a> From<&'a Expression<'a>> for NodeRef<'a> {
    fn from(n: &'a Expression<'a>) -> Self {
        NodeRef::Expression(n)
    }
}

impl<'a> From<&'a TypeName<'a>> for NodeRef<'a> {
    fn from(n: &'a TypeName<'a>) -> Self {
        NodeRef::TypeName(n)
    }
}

impl<'a> From<&'a Block<'a>> for NodeRef<'a> {
    fn from(n: &'a Block<'a>) -> Self {
        NodeRef::Block(n)
    }
}
