//! The owning-tree view used to resolve id-based back-references.
//!
//! A `SourceTree` indexes every declaration of a source unit by `NodeId`
//! once, up front, so that use sites (user-defined type names, identifier
//! paths) can be resolved regardless of declaration order.

use crate::generated::NodeRef;
use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeId;
use crate::visitor::{self, AstVisitor};
use rustc_hash::FxHashMap;
use solkit_core::intern::{InternedString, StringInterner};

/// A declaration that can be the target of a referenced-declaration id.
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Contract(&'a ContractDefinition<'a>),
    Function(&'a FunctionDefinition<'a>),
    Modifier(&'a ModifierDefinition<'a>),
    StateVariable(&'a StateVariableDeclaration<'a>),
    Variable(&'a VariableDeclaration<'a>),
    Struct(&'a StructDefinition<'a>),
    Enum(&'a EnumDefinition<'a>),
    EnumValue(&'a EnumValue),
    Event(&'a EventDefinition<'a>),
    Error(&'a ErrorDefinition<'a>),
    UserDefinedValueType(&'a UserDefinedValueTypeDefinition<'a>),
}

impl<'a> Declaration<'a> {
    pub fn data(&self) -> &'a NodeData {
        self.as_node().data()
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn id(&self) -> NodeId {
        self.data().id
    }

    /// The declared name. Constructors, fallback/receive functions and
    /// unnamed parameters have none.
    pub fn name(&self) -> Option<InternedString> {
        match *self {
            Declaration::Contract(n) => Some(n.name),
            Declaration::Function(n) => n.name,
            Declaration::Modifier(n) => Some(n.name),
            Declaration::StateVariable(n) => Some(n.name),
            Declaration::Variable(n) => n.name,
            Declaration::Struct(n) => Some(n.name),
            Declaration::Enum(n) => Some(n.name),
            Declaration::EnumValue(n) => Some(n.name),
            Declaration::Event(n) => Some(n.name),
            Declaration::Error(n) => Some(n.name),
            Declaration::UserDefinedValueType(n) => Some(n.name),
        }
    }

    pub fn as_node(&self) -> NodeRef<'a> {
        match *self {
            Declaration::Contract(n) => NodeRef::Contract(n),
            Declaration::Function(n) => NodeRef::Function(n),
            Declaration::Modifier(n) => NodeRef::Modifier(n),
            Declaration::StateVariable(n) => NodeRef::StateVariable(n),
            Declaration::Variable(n) => NodeRef::VariableDeclaration(n),
            Declaration::Struct(n) => NodeRef::Struct(n),
            Declaration::Enum(n) => NodeRef::Enum(n),
            Declaration::EnumValue(n) => NodeRef::EnumValue(n),
            Declaration::Event(n) => NodeRef::Event(n),
            Declaration::Error(n) => NodeRef::Error(n),
            Declaration::UserDefinedValueType(n) => NodeRef::UserDefinedValueType(n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("declaration {0} not found in the tree")]
    NotFound(NodeId),
}

/// A source unit together with its interner and declaration index.
pub struct SourceTree<'a> {
    root: &'a SourceUnit<'a>,
    interner: StringInterner,
    index: FxHashMap<NodeId, Declaration<'a>>,
}

impl<'a> SourceTree<'a> {
    /// Builds the declaration index with a single pass over `root`.
    pub fn new(root: &'a SourceUnit<'a>, interner: &StringInterner) -> Self {
        let mut indexer = DeclarationIndexer {
            index: FxHashMap::default(),
        };
        indexer.visit_source_unit(root);
        tracing::debug!(declarations = indexer.index.len(), "indexed source tree");
        Self {
            root,
            interner: interner.clone(),
            index: indexer.index,
        }
    }

    pub fn root(&self) -> &'a SourceUnit<'a> {
        self.root
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Resolve a referenced-declaration id to its declaring node.
    pub fn resolve(&self, id: NodeId) -> Result<Declaration<'a>, ResolveError> {
        self.index.get(&id).copied().ok_or(ResolveError::NotFound(id))
    }

    /// The number of indexed declarations.
    pub fn declaration_count(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn text(&self, s: InternedString) -> &str {
        self.interner.resolve(s)
    }
}

impl std::fmt::Debug for SourceTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceTree")
            .field("root", &self.root.data.id)
            .field("declarations", &self.index.len())
            .finish()
    }
}

struct DeclarationIndexer<'a> {
    index: FxHashMap<NodeId, Declaration<'a>>,
}

impl<'a> DeclarationIndexer<'a> {
    fn record(&mut self, decl: Declaration<'a>) {
        let id = decl.id();
        if !id.is_valid() {
            return;
        }
        if let Some(existing) = self.index.get(&id) {
            tracing::warn!(
                %id,
                kept = %existing.kind(),
                ignored = %decl.kind(),
                "duplicate declaration id"
            );
            return;
        }
        self.index.insert(id, decl);
    }
}

impl<'a> AstVisitor<'a> for DeclarationIndexer<'a> {
    fn visit_contract(&mut self, node: &'a ContractDefinition<'a>) {
        self.record(Declaration::Contract(node));
        visitor::walk_contract(self, node);
    }

    fn visit_function(&mut self, node: &'a FunctionDefinition<'a>) {
        self.record(Declaration::Function(node));
        visitor::walk_function(self, node);
    }

    fn visit_modifier(&mut self, node: &'a ModifierDefinition<'a>) {
        self.record(Declaration::Modifier(node));
        visitor::walk_modifier(self, node);
    }

    fn visit_state_variable(&mut self, node: &'a StateVariableDeclaration<'a>) {
        self.record(Declaration::StateVariable(node));
        visitor::walk_state_variable(self, node);
    }

    fn visit_variable_declaration(&mut self, node: &'a VariableDeclaration<'a>) {
        self.record(Declaration::Variable(node));
        visitor::walk_variable_declaration(self, node);
    }

    fn visit_struct(&mut self, node: &'a StructDefinition<'a>) {
        self.record(Declaration::Struct(node));
        visitor::walk_struct(self, node);
    }

    fn visit_enum(&mut self, node: &'a EnumDefinition<'a>) {
        self.record(Declaration::Enum(node));
        visitor::walk_enum(self, node);
    }

    fn visit_enum_value(&mut self, node: &'a EnumValue) {
        self.record(Declaration::EnumValue(node));
    }

    fn visit_event(&mut self, node: &'a EventDefinition<'a>) {
        self.record(Declaration::Event(node));
        visitor::walk_event(self, node);
    }

    fn visit_error(&mut self, node: &'a ErrorDefinition<'a>) {
        self.record(Declaration::Error(node));
        visitor::walk_error(self, node);
    }

    fn visit_user_defined_value_type(&mut self, node: &'a UserDefinedValueTypeDefinition<'a>) {
        self.record(Declaration::UserDefinedValueType(node));
        visitor::walk_user_defined_value_type(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModifierFlags;
    use solkit_core::arena::AstArena;

    fn data(kind: SyntaxKind, id: u32) -> NodeData {
        NodeData::new(kind, NodeId(id))
    }

    fn build<'a>(arena: &'a AstArena, interner: &StringInterner) -> &'a SourceUnit<'a> {
        // contract C { S s; struct S { uint256 x; } S t; }
        // The first use site precedes the declaration.
        let uint: &'a TypeName<'a> = arena.alloc(TypeName::Elementary(ElementaryTypeName {
            data: data(SyntaxKind::ElementaryTypeName, 1),
            name: interner.intern("uint256"),
            state_mutability: None,
        }));
        let member = VariableDeclaration {
            data: data(SyntaxKind::VariableDeclaration, 2),
            name: Some(interner.intern("x")),
            type_name: uint,
            storage_location: SyntaxKind::DefaultKeyword,
        };
        let s_ref = |id| -> &'a TypeName<'a> {
            arena.alloc(TypeName::UserDefined(UserDefinedTypeName {
                data: data(SyntaxKind::UserDefinedTypeName, id),
                name: interner.intern("S"),
                referenced_declaration: NodeId(10),
            }))
        };
        let state = |id, name: &str, ty: &'a TypeName<'a>| {
            ContractMember::StateVariable(StateVariableDeclaration {
                data: data(SyntaxKind::StateVariableDeclaration, id),
                name: interner.intern(name),
                type_name: ty,
                visibility: SyntaxKind::InternalKeyword,
                mutability: SyntaxKind::MutableKeyword,
                overrides: None,
                value: None,
            })
        };
        let members = arena.alloc_vec(vec![
            state(3, "s", s_ref(4)),
            ContractMember::Struct(StructDefinition {
                data: data(SyntaxKind::StructDefinition, 10),
                name: interner.intern("S"),
                members: arena.alloc_vec(vec![member]),
            }),
            state(5, "t", s_ref(6)),
        ]);
        let contract = ContractDefinition {
            data: data(SyntaxKind::ContractDefinition, 20)
                .with_flags(ModifierFlags::ABSTRACT),
            name: interner.intern("C"),
            contract_kind: SyntaxKind::ContractKeyword,
            base_contracts: &[],
            nodes: members,
        };
        arena.alloc(SourceUnit {
            data: data(SyntaxKind::SourceUnit, 30),
            absolute_path: None,
            license: None,
            nodes: arena.alloc_vec(vec![SourceUnitItem::Contract(contract)]),
        })
    }

    #[test]
    fn test_resolve_forward_reference() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let root = build(&arena, &interner);
        let tree = SourceTree::new(root, &interner);

        let decl = tree.resolve(NodeId(10)).unwrap();
        assert_eq!(decl.kind(), SyntaxKind::StructDefinition);
        assert_eq!(tree.text(decl.name().unwrap()), "S");
    }

    #[test]
    fn test_resolve_not_found() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let tree = SourceTree::new(build(&arena, &interner), &interner);

        assert_eq!(
            tree.resolve(NodeId(99)).unwrap_err(),
            ResolveError::NotFound(NodeId(99))
        );
    }

    #[test]
    fn test_index_contains_every_declaration() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let tree = SourceTree::new(build(&arena, &interner), &interner);

        // contract, two state variables, struct, struct member
        assert_eq!(tree.declaration_count(), 5);
        assert!(matches!(
            tree.resolve(NodeId(20)),
            Ok(Declaration::Contract(c)) if c.is_abstract()
        ));
        assert!(matches!(tree.resolve(NodeId(2)), Ok(Declaration::Variable(_))));
    }

    #[test]
    fn test_children_in_source_order() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let root = build(&arena, &interner);

        let contract = NodeRef::from(root).children()[0];
        let kinds: Vec<_> = contract.children().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::StateVariableDeclaration,
                SyntaxKind::StructDefinition,
                SyntaxKind::StateVariableDeclaration,
            ]
        );
    }
}
