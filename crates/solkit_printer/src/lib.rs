//! solkit_printer: AST to Solidity source text.
//!
//! Walks a `SourceTree` and reconstructs Solidity source. Printing never
//! aborts: a node that cannot be printed contributes no text, records a
//! diagnostic and clears the success flag, while the rest of the tree is
//! still printed.

pub mod tables;

use solkit_ast::*;
use solkit_core::intern::InternedString;
use solkit_diagnostics::{
    format_message, messages, Diagnostic, DiagnosticCollection, DiagnosticMessage,
};
use std::fmt::Write as _;

/// Options for the printer.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Newline string.
    pub new_line: String,
    /// Whether to emit the `// SPDX-License-Identifier:` header.
    pub emit_license: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            new_line: "\n".to_string(),
            emit_license: true,
        }
    }
}

/// The result of one `print` call.
#[derive(Debug)]
pub struct PrintOutput {
    pub text: String,
    /// `false` if any visited node could not be printed.
    pub success: bool,
    pub diagnostics: DiagnosticCollection,
}

impl PrintOutput {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Prints nodes of one source tree.
///
/// Every `print_*` method returns whether its node (and all of its
/// children) printed cleanly. Children are always visited, so results are
/// folded with `&=` rather than short-circuiting.
pub struct Printer<'t, 'a> {
    tree: &'t SourceTree<'a>,
    options: PrinterOptions,
    output: String,
    diagnostics: DiagnosticCollection,
}

impl<'t, 'a> Printer<'t, 'a> {
    pub fn new(tree: &'t SourceTree<'a>) -> Self {
        Self::with_options(tree, PrinterOptions::default())
    }

    pub fn with_options(tree: &'t SourceTree<'a>, options: PrinterOptions) -> Self {
        Self {
            tree,
            options,
            output: String::with_capacity(4096),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Print the whole source unit of the tree.
    pub fn print_source_unit(&mut self) -> PrintOutput {
        self.print(NodeRef::SourceUnit(self.tree.root()))
    }

    /// Print any node at depth zero.
    pub fn print(&mut self, node: NodeRef<'a>) -> PrintOutput {
        self.output.clear();
        self.diagnostics.clear();
        let success = self.print_node(node, 0);
        tracing::debug!(
            kind = %node.kind(),
            success,
            diagnostics = self.diagnostics.len(),
            bytes = self.output.len(),
            "printed node"
        );
        PrintOutput {
            text: std::mem::take(&mut self.output),
            success,
            diagnostics: std::mem::take(&mut self.diagnostics),
        }
    }

    fn print_node(&mut self, node: NodeRef<'a>, depth: usize) -> bool {
        match node {
            NodeRef::SourceUnit(n) => self.print_source_unit_node(n, depth),
            NodeRef::Pragma(n) => self.print_pragma(n),
            NodeRef::Import(n) => self.print_import(n),
            NodeRef::Contract(n) => self.print_contract(n, depth),
            NodeRef::InheritanceSpecifier(n) => self.print_inheritance(n),
            NodeRef::IdentifierPath(n) => {
                self.write_name(n.name);
                true
            }
            NodeRef::Function(n) => self.print_function(n, depth, false),
            NodeRef::Modifier(n) => self.print_modifier(n, depth),
            NodeRef::ModifierInvocation(n) => self.print_modifier_invocation(n),
            NodeRef::OverrideSpecifier(n) => self.print_override(n),
            NodeRef::ParameterList(n) => self.print_parameter_list(n),
            NodeRef::VariableDeclaration(n) => self.print_variable_declaration(n),
            NodeRef::StateVariable(n) => self.print_state_variable(n, false),
            NodeRef::Struct(n) => self.print_struct(n, depth),
            NodeRef::Enum(n) => self.print_enum(n, depth),
            NodeRef::EnumValue(n) => {
                self.write_name(n.name);
                true
            }
            NodeRef::Event(n) => self.print_event(n),
            NodeRef::Error(n) => self.print_error(n),
            NodeRef::UsingFor(n) => self.print_using_for(n),
            NodeRef::UserDefinedValueType(n) => self.print_user_defined_value_type(n),
            NodeRef::Block(n) => self.print_block(n, depth, true),
            NodeRef::Statement(n) => self.print_statement(n, depth),
            NodeRef::TryCatchClause(n) => self.print_catch_clause(n, depth),
            NodeRef::Expression(n) => self.print_expression(n),
            NodeRef::TypeName(n) => self.print_type_name(n),
            NodeRef::YulBlock(n) => self.print_yul_block(n, depth),
            NodeRef::YulStatement(n) => self.print_yul_statement(n, depth),
            NodeRef::YulCase(n) => self.print_yul_case(n, depth),
            NodeRef::YulExpression(n) => self.print_yul_expression(n),
            NodeRef::YulTypedName(n) => {
                self.print_yul_typed_name(n);
                true
            }
            NodeRef::Missing(n) => self.fail_missing_node(n),
        }
    }

    // ========================================================================
    // Source unit and line-level items
    // ========================================================================

    fn print_source_unit_node(&mut self, node: &'a SourceUnit<'a>, depth: usize) -> bool {
        if self.options.emit_license {
            if let Some(license) = node.license {
                self.write_indent(depth);
                self.write("// SPDX-License-Identifier: ");
                self.write_name(license);
                self.write_newline();
            }
        }
        let mut ok = true;
        for item in node.nodes.iter() {
            ok &= self.print_line(NodeRef::from(item), depth, true);
        }
        ok
    }

    /// Print a declaration on its own line, terminating it unless it
    /// terminates itself. `file_level` marks items directly in the source
    /// unit: free functions and file-level constants.
    fn print_line(&mut self, node: NodeRef<'a>, depth: usize, file_level: bool) -> bool {
        if let NodeRef::Missing(missing) = node {
            return self.fail_missing_node(missing);
        }
        self.write_indent(depth);
        let ok = match node {
            NodeRef::Function(n) => self.print_function(n, depth, file_level),
            NodeRef::StateVariable(n) => self.print_state_variable(n, file_level),
            other => self.print_node(other, depth),
        };
        if !node.kind().is_self_terminating() {
            self.write(";");
            self.write_newline();
        }
        ok
    }

    fn print_pragma(&mut self, node: &PragmaDirective<'a>) -> bool {
        self.write("pragma");
        let ok = match node.literals.split_first() {
            Some((first, rest)) => {
                self.write(" ");
                self.write_name(*first);
                if !rest.is_empty() {
                    self.write(" ");
                    for literal in rest {
                        self.write_name(*literal);
                    }
                }
                true
            }
            None => self.fail_missing(&node.data, "literals"),
        };
        self.write(";");
        self.write_newline();
        ok
    }

    fn print_import(&mut self, node: &ImportDirective<'a>) -> bool {
        self.write("import ");
        if !node.symbol_aliases.is_empty() {
            self.write("{");
            for (i, alias) in node.symbol_aliases.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_name(alias.foreign);
                if let Some(local) = alias.local {
                    self.write(" as ");
                    self.write_name(local);
                }
            }
            self.write("} from ");
            self.write_quoted(node.file);
        } else {
            self.write_quoted(node.file);
            if let Some(alias) = node.unit_alias {
                self.write(" as ");
                self.write_name(alias);
            }
        }
        self.write(";");
        self.write_newline();
        true
    }

    // ========================================================================
    // Contracts
    // ========================================================================

    fn print_contract(&mut self, node: &'a ContractDefinition<'a>, depth: usize) -> bool {
        let mut ok = true;
        if node.is_abstract() {
            self.write("abstract ");
        }
        ok &= self.write_keyword(&node.data, tables::contract_kind(node.contract_kind), node.contract_kind, "contract kind");
        self.write(" ");
        self.write_name(node.name);
        if !node.base_contracts.is_empty() {
            self.write(" is ");
            for (i, base) in node.base_contracts.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                ok &= self.print_inheritance(base);
            }
        }
        self.write(" {");
        if node.nodes.is_empty() {
            self.write("}");
        } else {
            self.write_newline();
            for member in node.nodes.iter() {
                ok &= self.print_line(NodeRef::from(member), depth + 1, false);
            }
            self.write_indent(depth);
            self.write("}");
        }
        self.write_newline();
        ok
    }

    fn print_inheritance(&mut self, node: &InheritanceSpecifier<'a>) -> bool {
        self.write_name(node.base_name.name);
        match node.arguments {
            Some(args) => {
                self.write("(");
                let ok = self.print_expression_list(args);
                self.write(")");
                ok
            }
            None => true,
        }
    }

    /// Functions, constructors, fallback and receive functions.
    ///
    /// Free functions carry an implied `internal` visibility that cannot be
    /// written, and constructors omit the default `public`.
    fn print_function(&mut self, node: &'a FunctionDefinition<'a>, depth: usize, free: bool) -> bool {
        let mut ok = true;
        match node.function_kind {
            SyntaxKind::FunctionKeyword => {
                self.write("function");
                if let Some(name) = node.name {
                    self.write(" ");
                    self.write_name(name);
                }
            }
            SyntaxKind::ConstructorKeyword => self.write("constructor"),
            SyntaxKind::FallbackKeyword => self.write("fallback"),
            SyntaxKind::ReceiveKeyword => self.write("receive"),
            other => ok &= self.fail_code(&node.data, other, "function kind"),
        }
        self.write("(");
        ok &= self.print_parameter_list(&node.parameters);
        self.write(")");

        let implied = free || (node.is_constructor() && node.visibility == SyntaxKind::PublicKeyword);
        if !implied {
            ok &= self.write_qualifier(&node.data, tables::visibility(node.visibility), node.visibility, "visibility");
        }
        if node.is_virtual() {
            self.write(" virtual");
        }
        ok &= self.write_qualifier(
            &node.data,
            tables::state_mutability(node.state_mutability),
            node.state_mutability,
            "state mutability",
        );
        if let Some(ref overrides) = node.overrides {
            self.write(" ");
            ok &= self.print_override(overrides);
        }
        for modifier in node.modifiers.iter() {
            self.write(" ");
            ok &= self.print_modifier_invocation(modifier);
        }
        if !node.return_parameters.parameters.is_empty() {
            self.write(" returns (");
            ok &= self.print_parameter_list(&node.return_parameters);
            self.write(")");
        }
        ok &= self.print_optional_body(node.body.as_ref(), depth);
        ok
    }

    fn print_modifier(&mut self, node: &'a ModifierDefinition<'a>, depth: usize) -> bool {
        let mut ok = true;
        self.write("modifier ");
        self.write_name(node.name);
        self.write("(");
        ok &= self.print_parameter_list(&node.parameters);
        self.write(")");
        if node.is_virtual() {
            self.write(" virtual");
        }
        if let Some(ref overrides) = node.overrides {
            self.write(" ");
            ok &= self.print_override(overrides);
        }
        ok &= self.print_optional_body(node.body.as_ref(), depth);
        ok
    }

    /// ` { ... }` followed by a newline, or `;` for a declaration only.
    fn print_optional_body(&mut self, body: Option<&'a Block<'a>>, depth: usize) -> bool {
        match body {
            Some(body) => {
                self.write(" ");
                self.print_block(body, depth, true)
            }
            None => {
                self.write(";");
                self.write_newline();
                true
            }
        }
    }

    fn print_modifier_invocation(&mut self, node: &ModifierInvocation<'a>) -> bool {
        self.write_name(node.modifier_name.name);
        match node.arguments {
            Some(args) => {
                self.write("(");
                let ok = self.print_expression_list(args);
                self.write(")");
                ok
            }
            None => true,
        }
    }

    fn print_override(&mut self, node: &OverrideSpecifier<'a>) -> bool {
        self.write("override");
        if !node.overrides.is_empty() {
            self.write("(");
            for (i, path) in node.overrides.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_name(path.name);
            }
            self.write(")");
        }
        true
    }

    fn print_parameter_list(&mut self, node: &ParameterList<'a>) -> bool {
        let mut ok = true;
        for (i, param) in node.parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            ok &= self.print_variable_declaration(param);
        }
        ok
    }

    /// `<type> [location] [indexed] [name]`
    fn print_variable_declaration(&mut self, node: &VariableDeclaration<'a>) -> bool {
        let mut ok = self.print_type_name(node.type_name);
        ok &= self.write_qualifier(
            &node.data,
            tables::storage_location(node.storage_location),
            node.storage_location,
            "storage location",
        );
        if node.is_indexed() {
            self.write(" indexed");
        }
        if let Some(name) = node.name {
            self.write(" ");
            self.write_name(name);
        }
        ok
    }

    /// `<type> [visibility] [constant|immutable] [override] <name> [= value]`
    ///
    /// File-level constants have no visibility.
    fn print_state_variable(&mut self, node: &StateVariableDeclaration<'a>, file_level: bool) -> bool {
        let (type_text, mut ok) = self.capture(|p| p.print_type_name(node.type_name));
        if type_text == "addresspayable" {
            self.write("address payable");
        } else {
            self.write(&type_text);
        }
        if !file_level {
            ok &= self.write_qualifier(&node.data, tables::visibility(node.visibility), node.visibility, "visibility");
        }
        ok &= self.write_qualifier(
            &node.data,
            tables::variable_mutability(node.mutability),
            node.mutability,
            "variable mutability",
        );
        if let Some(ref overrides) = node.overrides {
            self.write(" ");
            ok &= self.print_override(overrides);
        }
        self.write(" ");
        self.write_name(node.name);
        if let Some(value) = node.value {
            self.write(" = ");
            ok &= self.print_expression(value);
        }
        ok
    }

    fn print_struct(&mut self, node: &StructDefinition<'a>, depth: usize) -> bool {
        let mut ok = true;
        self.write("struct ");
        self.write_name(node.name);
        self.write(" {");
        self.write_newline();
        for member in node.members.iter() {
            self.write_indent(depth + 1);
            ok &= self.print_variable_declaration(member);
            self.write(";");
            self.write_newline();
        }
        self.write_indent(depth);
        self.write("}");
        self.write_newline();
        ok
    }

    fn print_enum(&mut self, node: &EnumDefinition<'a>, depth: usize) -> bool {
        self.write("enum ");
        self.write_name(node.name);
        self.write(" {");
        self.write_newline();
        for (i, value) in node.members.iter().enumerate() {
            self.write_indent(depth + 1);
            self.write_name(value.name);
            if i + 1 < node.members.len() {
                self.write(",");
            }
            self.write_newline();
        }
        self.write_indent(depth);
        self.write("}");
        self.write_newline();
        true
    }

    fn print_event(&mut self, node: &EventDefinition<'a>) -> bool {
        self.write("event ");
        self.write_name(node.name);
        self.write("(");
        let ok = self.print_parameter_list(&node.parameters);
        self.write(")");
        if node.is_anonymous() {
            self.write(" anonymous");
        }
        ok
    }

    fn print_error(&mut self, node: &ErrorDefinition<'a>) -> bool {
        self.write("error ");
        self.write_name(node.name);
        self.write("(");
        let ok = self.print_parameter_list(&node.parameters);
        self.write(")");
        ok
    }

    fn print_using_for(&mut self, node: &UsingForDirective<'a>) -> bool {
        let mut ok = true;
        self.write("using ");
        if let Some(ref library) = node.library_name {
            self.write_name(library.name);
        } else {
            self.write("{");
            for (i, entry) in node.function_list.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_name(entry.function.name);
                if let Some(op) = entry.operator {
                    self.write(" as ");
                    match tables::binary_operator(op).or_else(|| tables::unary_operator(op)) {
                        Some(symbol) => self.write(symbol),
                        None => ok &= self.fail_code(&node.data, op, "operator"),
                    }
                }
            }
            self.write("}");
        }
        self.write(" for ");
        match node.type_name {
            Some(ty) => ok &= self.print_type_name(ty),
            None => self.write("*"),
        }
        if node.is_global() {
            self.write(" global");
        }
        ok
    }

    fn print_user_defined_value_type(&mut self, node: &UserDefinedValueTypeDefinition<'a>) -> bool {
        self.write("type ");
        self.write_name(node.name);
        self.write(" is ");
        self.print_type_name(node.underlying_type)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// `{`, one statement per line at `depth + 1`, then `}`.
    fn print_block(&mut self, node: &Block<'a>, depth: usize, end_line: bool) -> bool {
        let mut ok = true;
        self.write("{");
        if node.statements.is_empty() {
            self.write("}");
        } else {
            self.write_newline();
            for stmt in node.statements.iter() {
                ok &= self.print_statement_line(stmt, depth + 1);
            }
            self.write_indent(depth);
            self.write("}");
        }
        if end_line {
            self.write_newline();
        }
        ok
    }

    fn print_statement_line(&mut self, stmt: &Statement<'a>, depth: usize) -> bool {
        if let Statement::Missing(missing) = stmt {
            return self.fail_missing_node(missing);
        }
        self.write_indent(depth);
        let ok = self.print_statement(stmt, depth);
        if !stmt.kind().is_self_terminating() {
            self.write(";");
            self.write_newline();
        }
        ok
    }

    /// A statement used as the body of `if`, `for`, `while` or `do`.
    fn print_embedded(&mut self, stmt: &Statement<'a>, depth: usize, end_line: bool) -> bool {
        match stmt {
            Statement::Block(block) => self.print_block(block, depth, end_line),
            // Nothing for the placeholder itself; the line still ends.
            Statement::Missing(missing) => {
                let ok = self.fail_missing_node(missing);
                if end_line {
                    self.write_newline();
                }
                ok
            }
            other => {
                let ok = self.print_statement(other, depth);
                if !other.kind().is_self_terminating() {
                    self.write(";");
                    if end_line {
                        self.write_newline();
                    }
                }
                ok
            }
        }
    }

    fn print_statement(&mut self, stmt: &Statement<'a>, depth: usize) -> bool {
        match stmt {
            Statement::Block(n) => self.print_block(n, depth, true),
            Statement::UncheckedBlock(n) => {
                self.write("unchecked ");
                self.print_block(n, depth, true)
            }
            Statement::If(n) => self.print_if(n, depth),
            Statement::For(n) => self.print_for(n, depth),
            Statement::While(n) => {
                self.write("while (");
                let mut ok = self.print_expression(n.condition);
                self.write(") ");
                ok &= self.print_embedded(n.body, depth, true);
                ok
            }
            Statement::DoWhile(n) => {
                self.write("do ");
                let mut ok = self.print_embedded(n.body, depth, false);
                self.write(" while (");
                ok &= self.print_expression(n.condition);
                self.write(");");
                self.write_newline();
                ok
            }
            Statement::Continue(_) => {
                self.write("continue");
                true
            }
            Statement::Break(_) => {
                self.write("break");
                true
            }
            Statement::Placeholder(_) => {
                self.write("_");
                true
            }
            Statement::Return(n) => {
                self.write("return");
                match n.expression {
                    Some(expr) => {
                        self.write(" ");
                        self.print_expression(expr)
                    }
                    None => true,
                }
            }
            Statement::Emit(n) => {
                self.write("emit ");
                self.print_expression(n.event_call)
            }
            Statement::Revert(n) => {
                self.write("revert ");
                self.print_expression(n.error_call)
            }
            Statement::VariableDeclaration(n) => self.print_variable_statement(n),
            Statement::Expression(n) => self.print_expression(n.expression),
            Statement::InlineAssembly(n) => self.print_inline_assembly(n, depth),
            Statement::Try(n) => self.print_try(n, depth),
            Statement::Missing(n) => self.fail_missing_node(n),
        }
    }

    fn print_if(&mut self, node: &IfStatement<'a>, depth: usize) -> bool {
        self.write("if (");
        let mut ok = self.print_expression(node.condition);
        self.write(") ");
        match node.false_body {
            None => ok &= self.print_embedded(node.true_body, depth, true),
            Some(false_body) => {
                if let Statement::Block(block) = node.true_body {
                    ok &= self.print_block(block, depth, false);
                    self.write(" else ");
                } else {
                    ok &= self.print_embedded(node.true_body, depth, true);
                    self.write_indent(depth);
                    self.write("else ");
                }
                ok &= self.print_embedded(false_body, depth, true);
            }
        }
        ok
    }

    fn print_for(&mut self, node: &ForStatement<'a>, depth: usize) -> bool {
        let mut ok = true;
        self.write("for (");
        if let Some(init) = node.initialization {
            ok &= self.print_statement(init, depth);
        }
        self.write(";");
        if let Some(cond) = node.condition {
            self.write(" ");
            ok &= self.print_expression(cond);
        }
        self.write(";");
        if let Some(step) = node.loop_expression {
            self.write(" ");
            ok &= self.print_expression(step);
        }
        self.write(") ");
        ok &= self.print_embedded(node.body, depth, true);
        ok
    }

    /// `T a = e` or `(T a, , T b) = e`.
    ///
    /// The initializer is required; a declaration without one is printed
    /// but reported.
    fn print_variable_statement(&mut self, node: &VariableDeclarationStatement<'a>) -> bool {
        let mut ok = true;
        match node.declarations {
            [Some(single)] => ok &= self.print_variable_declaration(single),
            declarations => {
                self.write("(");
                for (i, decl) in declarations.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    if let Some(decl) = decl {
                        ok &= self.print_variable_declaration(decl);
                    }
                }
                self.write(")");
            }
        }
        match node.initial_value {
            Some(value) => {
                self.write(" = ");
                ok &= self.print_expression(value);
            }
            None => ok &= self.fail_missing(&node.data, "initial value"),
        }
        ok
    }

    fn print_inline_assembly(&mut self, node: &InlineAssembly<'a>, depth: usize) -> bool {
        self.write("assembly ");
        if let Some(dialect) = node.dialect {
            self.write_quoted(dialect);
            self.write(" ");
        }
        if !node.flags.is_empty() {
            self.write("(");
            for (i, flag) in node.flags.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_quoted(*flag);
            }
            self.write(") ");
        }
        let ok = self.print_yul_block(&node.ast, depth);
        self.write_newline();
        ok
    }

    fn print_try(&mut self, node: &TryStatement<'a>, depth: usize) -> bool {
        self.write("try ");
        let mut ok = self.print_expression(node.external_call);
        match node.clauses.split_first() {
            Some((success, catches)) => {
                if let Some(ref params) = success.parameters {
                    if !params.parameters.is_empty() {
                        self.write(" returns (");
                        ok &= self.print_parameter_list(params);
                        self.write(")");
                    }
                }
                self.write(" ");
                ok &= self.print_block(&success.block, depth, false);
                for clause in catches {
                    self.write(" ");
                    ok &= self.print_catch_clause(clause, depth);
                }
            }
            None => ok &= self.fail_missing(&node.data, "clauses"),
        }
        self.write_newline();
        ok
    }

    fn print_catch_clause(&mut self, node: &TryCatchClause<'a>, depth: usize) -> bool {
        let mut ok = true;
        self.write("catch ");
        if let Some(name) = node.error_name {
            self.write_name(name);
        }
        if let Some(ref params) = node.parameters {
            self.write("(");
            ok &= self.print_parameter_list(params);
            self.write(") ");
        } else if node.error_name.is_some() {
            self.write(" ");
        }
        ok &= self.print_block(&node.block, depth, false);
        ok
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_expression(&mut self, expr: &Expression<'a>) -> bool {
        match expr {
            Expression::Assignment(n) => {
                let mut ok = self.print_expression(n.left_hand_side);
                ok &= self.write_operator(&n.data, tables::assignment_operator(n.operator), n.operator, "assignment operator");
                ok &= self.print_expression(n.right_hand_side);
                ok
            }
            Expression::BinaryOperation(n) => {
                let mut ok = self.print_expression(n.left_expression);
                ok &= self.write_operator(&n.data, tables::binary_operator(n.operator), n.operator, "binary operator");
                ok &= self.print_expression(n.right_expression);
                ok
            }
            Expression::UnaryOperation(n) => self.print_unary(n),
            Expression::Conditional(n) => self.print_conditional(n),
            Expression::FunctionCall(n) => self.print_function_call(n),
            Expression::FunctionCallOptions(n) => {
                let mut ok = self.print_expression(n.expression);
                self.write("{");
                ok &= self.print_named_arguments(&n.data, n.names, n.options);
                self.write("}");
                ok
            }
            Expression::MemberAccess(n) => {
                let ok = self.print_expression(n.expression);
                self.write(".");
                self.write_name(n.member_name);
                ok
            }
            Expression::IndexAccess(n) => {
                let mut ok = self.print_expression(n.base_expression);
                self.write("[");
                if let Some(index) = n.index_expression {
                    ok &= self.print_expression(index);
                }
                self.write("]");
                ok
            }
            Expression::IndexRangeAccess(n) => {
                let mut ok = self.print_expression(n.base_expression);
                self.write("[");
                if let Some(start) = n.start_expression {
                    ok &= self.print_expression(start);
                }
                self.write(":");
                if let Some(end) = n.end_expression {
                    ok &= self.print_expression(end);
                }
                self.write("]");
                ok
            }
            Expression::Tuple(n) => {
                let (open, close) = if n.is_inline_array { ("[", "]") } else { ("(", ")") };
                let mut ok = true;
                self.write(open);
                for (i, component) in n.components.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    if let Some(component) = component {
                        ok &= self.print_expression(component);
                    }
                }
                self.write(close);
                ok
            }
            Expression::New(n) => {
                self.write("new ");
                self.print_type_name(n.type_name)
            }
            Expression::ElementaryTypeName(n) => self.print_type_name(n.type_name),
            Expression::Literal(n) => self.print_literal(n),
            Expression::Identifier(n) => {
                self.write_name(n.name);
                true
            }
            Expression::Missing(n) => self.fail_missing_node(n),
        }
    }

    fn print_unary(&mut self, node: &UnaryOperation<'a>) -> bool {
        let symbol = tables::unary_operator(node.operator);
        let mut ok = true;
        if node.prefix {
            match symbol {
                Some(symbol) => {
                    self.write(symbol);
                    if node.operator == SyntaxKind::DeleteKeyword {
                        self.write(" ");
                    }
                }
                None => ok &= self.fail_code(&node.data, node.operator, "unary operator"),
            }
            ok &= self.print_expression(node.sub_expression);
        } else {
            ok &= self.print_expression(node.sub_expression);
            match symbol {
                Some(symbol) => self.write(symbol),
                None => ok &= self.fail_code(&node.data, node.operator, "unary operator"),
            }
        }
        ok
    }

    /// `cond ? a : b`; any other number of sub-expressions is reported and
    /// whatever is present is still printed.
    fn print_conditional(&mut self, node: &Conditional<'a>) -> bool {
        let mut ok = true;
        if node.expressions.len() != Conditional::ARITY {
            let found = node.expressions.len().to_string();
            let expected = Conditional::ARITY.to_string();
            ok &= self.fail(&node.data, &messages::_0_EXPECTS_1_EXPRESSIONS_BUT_HAS_2, &["Conditional", &expected, &found]);
        }
        if let Some(condition) = node.condition() {
            ok &= self.print_expression(condition);
        }
        if let Some(when_true) = node.true_expression() {
            self.write(" ? ");
            ok &= self.print_expression(when_true);
        }
        if let Some(when_false) = node.false_expression() {
            self.write(" : ");
            ok &= self.print_expression(when_false);
        }
        ok
    }

    fn print_function_call(&mut self, node: &FunctionCall<'a>) -> bool {
        let mut ok = self.print_expression(node.expression);
        self.write("(");
        if node.names.is_empty() {
            ok &= self.print_expression_list(node.arguments);
        } else {
            self.write("{");
            ok &= self.print_named_arguments(&node.data, node.names, node.arguments);
            self.write("}");
        }
        self.write(")");
        ok
    }

    /// `name: value, ...`
    fn print_named_arguments(
        &mut self,
        data: &NodeData,
        names: &[InternedString],
        values: &[Expression<'a>],
    ) -> bool {
        let mut ok = true;
        if names.len() != values.len() {
            let kind = data.kind.to_string();
            let expected = names.len().to_string();
            let found = values.len().to_string();
            ok &= self.fail(data, &messages::_0_EXPECTS_1_EXPRESSIONS_BUT_HAS_2, &[&kind, &expected, &found]);
        }
        for (i, (name, value)) in names.iter().zip(values.iter()).enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write_name(*name);
            self.write(": ");
            ok &= self.print_expression(value);
        }
        ok
    }

    fn print_expression_list(&mut self, exprs: &[Expression<'a>]) -> bool {
        let mut ok = true;
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            ok &= self.print_expression(expr);
        }
        ok
    }

    fn print_literal(&mut self, node: &Literal) -> bool {
        match node.kind {
            LiteralKind::Number | LiteralKind::Bool => {
                let Some(value) = node.value else {
                    return self.fail_missing(&node.data, "value");
                };
                self.write_name(value);
                if let Some(unit) = node.subdenomination {
                    self.write(" ");
                    self.write_name(unit);
                }
                true
            }
            LiteralKind::String | LiteralKind::UnicodeString => match node.value {
                Some(value) => {
                    let tree = self.tree;
                    let text = tree.text(value);
                    if node.kind == LiteralKind::UnicodeString || !text.is_ascii() {
                        self.write("unicode");
                    }
                    self.write("\"");
                    escape_string(text, &mut self.output);
                    self.write("\"");
                    true
                }
                // Not valid UTF-8; only the hex form survives.
                None => self.print_hex_literal(node),
            },
            LiteralKind::HexString => self.print_hex_literal(node),
        }
    }

    fn print_hex_literal(&mut self, node: &Literal) -> bool {
        match node.hex_value {
            Some(hex) => {
                self.write("hex\"");
                self.write_name(hex);
                self.write("\"");
                true
            }
            None => self.fail_missing(&node.data, "hex value"),
        }
    }

    // ========================================================================
    // Type names
    // ========================================================================

    fn print_type_name(&mut self, ty: &TypeName<'a>) -> bool {
        match ty {
            TypeName::Elementary(n) => {
                self.write_name(n.name);
                if n.state_mutability == Some(SyntaxKind::PayableKeyword) && self.tree.text(n.name) == "address" {
                    self.write(" payable");
                }
                true
            }
            TypeName::UserDefined(n) => match self.tree.resolve(n.referenced_declaration) {
                Ok(decl) => match decl.name() {
                    Some(name) => {
                        self.write_name(name);
                        true
                    }
                    None => self.fail_missing(decl.data(), "name"),
                },
                Err(err) => {
                    tracing::debug!(%err, "unresolved type name");
                    let id = n.referenced_declaration.to_string();
                    let tree = self.tree;
                    let written = tree.text(n.name);
                    self.fail(&n.data, &messages::DECLARATION_0_REFERENCED_BY_1_NOT_FOUND, &[&id, written])
                }
            },
            TypeName::Mapping(n) => {
                self.write("mapping(");
                let mut ok = self.print_type_name(n.key_type);
                if let Some(name) = n.key_name {
                    self.write(" ");
                    self.write_name(name);
                }
                self.write(" => ");
                ok &= self.print_type_name(n.value_type);
                if let Some(name) = n.value_name {
                    self.write(" ");
                    self.write_name(name);
                }
                self.write(")");
                ok
            }
            TypeName::Array(n) => {
                let mut ok = self.print_type_name(n.base_type);
                self.write("[");
                if let Some(length) = n.length {
                    ok &= self.print_expression(length);
                }
                self.write("]");
                ok
            }
            TypeName::Function(n) => {
                self.write("function (");
                let mut ok = self.print_parameter_list(&n.parameters);
                self.write(")");
                ok &= self.write_qualifier(&n.data, tables::visibility(n.visibility), n.visibility, "visibility");
                ok &= self.write_qualifier(
                    &n.data,
                    tables::state_mutability(n.state_mutability),
                    n.state_mutability,
                    "state mutability",
                );
                if !n.return_parameters.parameters.is_empty() {
                    self.write(" returns (");
                    ok &= self.print_parameter_list(&n.return_parameters);
                    self.write(")");
                }
                ok
            }
            TypeName::Missing(n) => self.fail_missing_node(n),
        }
    }

    // ========================================================================
    // Inline assembly
    // ========================================================================

    fn print_yul_block(&mut self, node: &YulBlock<'a>, depth: usize) -> bool {
        let mut ok = true;
        self.write("{");
        if node.statements.is_empty() {
            self.write("}");
            return ok;
        }
        self.write_newline();
        for stmt in node.statements.iter() {
            if let YulStatement::Missing(missing) = stmt {
                ok &= self.fail_missing_node(missing);
                continue;
            }
            self.write_indent(depth + 1);
            ok &= self.print_yul_statement(stmt, depth + 1);
            self.write_newline();
        }
        self.write_indent(depth);
        self.write("}");
        ok
    }

    /// `{ a b }` on one line, as used by `for` init and post blocks.
    fn print_yul_inline_block(&mut self, node: &YulBlock<'a>, depth: usize) -> bool {
        let mut ok = true;
        self.write("{");
        for stmt in node.statements.iter() {
            if let YulStatement::Missing(missing) = stmt {
                ok &= self.fail_missing_node(missing);
                continue;
            }
            self.write(" ");
            ok &= self.print_yul_statement(stmt, depth);
        }
        self.write(" }");
        ok
    }

    fn print_yul_statement(&mut self, stmt: &YulStatement<'a>, depth: usize) -> bool {
        match stmt {
            YulStatement::Block(n) => self.print_yul_block(n, depth),
            YulStatement::VariableDeclaration(n) => {
                self.write("let ");
                for (i, var) in n.variables.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_yul_typed_name(var);
                }
                match n.value {
                    Some(value) => {
                        self.write(" := ");
                        self.print_yul_expression(value)
                    }
                    None => true,
                }
            }
            YulStatement::Assignment(n) => {
                for (i, var) in n.variable_names.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write_name(var.name);
                }
                self.write(" := ");
                self.print_yul_expression(n.value)
            }
            YulStatement::Expression(n) => self.print_yul_expression(n.expression),
            YulStatement::If(n) => {
                self.write("if ");
                let mut ok = self.print_yul_expression(n.condition);
                self.write(" ");
                ok &= self.print_yul_block(&n.body, depth);
                ok
            }
            YulStatement::For(n) => {
                self.write("for ");
                let mut ok = self.print_yul_inline_block(&n.pre, depth);
                self.write(" ");
                ok &= self.print_yul_expression(n.condition);
                self.write(" ");
                ok &= self.print_yul_inline_block(&n.post, depth);
                self.write(" ");
                ok &= self.print_yul_block(&n.body, depth);
                ok
            }
            YulStatement::Switch(n) => {
                self.write("switch ");
                let mut ok = self.print_yul_expression(n.expression);
                for case in n.cases.iter() {
                    self.write_newline();
                    self.write_indent(depth);
                    ok &= self.print_yul_case(case, depth);
                }
                ok
            }
            YulStatement::FunctionDefinition(n) => {
                self.write("function ");
                self.write_name(n.name);
                self.write("(");
                for (i, param) in n.parameters.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_yul_typed_name(param);
                }
                self.write(")");
                if !n.return_variables.is_empty() {
                    self.write(" -> ");
                    for (i, ret) in n.return_variables.iter().enumerate() {
                        if i > 0 {
                            self.write(", ");
                        }
                        self.print_yul_typed_name(ret);
                    }
                }
                self.write(" ");
                self.print_yul_block(&n.body, depth)
            }
            YulStatement::Leave(_) => {
                self.write("leave");
                true
            }
            YulStatement::Break(_) => {
                self.write("break");
                true
            }
            YulStatement::Continue(_) => {
                self.write("continue");
                true
            }
            YulStatement::Missing(n) => self.fail_missing_node(n),
        }
    }

    fn print_yul_case(&mut self, node: &YulCase<'a>, depth: usize) -> bool {
        match node.value {
            Some(ref value) => {
                self.write("case ");
                self.print_yul_literal(value);
            }
            None => self.write("default"),
        }
        self.write(" ");
        self.print_yul_block(&node.body, depth)
    }

    fn print_yul_expression(&mut self, expr: &YulExpression<'a>) -> bool {
        match expr {
            YulExpression::FunctionCall(n) => {
                self.write_name(n.function_name.name);
                self.write("(");
                let mut ok = true;
                for (i, arg) in n.arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    ok &= self.print_yul_expression(arg);
                }
                self.write(")");
                ok
            }
            YulExpression::Identifier(n) => {
                self.write_name(n.name);
                true
            }
            YulExpression::Literal(n) => {
                self.print_yul_literal(n);
                true
            }
            YulExpression::Missing(n) => self.fail_missing_node(n),
        }
    }

    fn print_yul_literal(&mut self, node: &YulLiteral) {
        match node.kind {
            LiteralKind::String | LiteralKind::UnicodeString => {
                let tree = self.tree;
                self.write("\"");
                escape_string(tree.text(node.value), &mut self.output);
                self.write("\"");
            }
            LiteralKind::HexString => {
                self.write("hex\"");
                self.write_name(node.hex_value.unwrap_or(node.value));
                self.write("\"");
            }
            LiteralKind::Number | LiteralKind::Bool => self.write_name(node.value),
        }
    }

    fn print_yul_typed_name(&mut self, node: &YulTypedName) {
        self.write_name(node.name);
        if let Some(ty) = node.type_name {
            self.write(":");
            self.write_name(ty);
        }
    }

    // ========================================================================
    // Failures
    // ========================================================================

    /// Record a failure at `data`. Always returns `false`.
    fn fail(&mut self, data: &NodeData, message: &DiagnosticMessage, args: &[&str]) -> bool {
        tracing::warn!(
            kind = %data.kind,
            node = %data.id,
            code = message.code,
            "{}",
            format_message(message.message, args)
        );
        let span = (!data.range.is_empty()).then(|| data.range.to_span());
        self.diagnostics.add(Diagnostic::at_node(data.id, span, message, args));
        false
    }

    fn fail_missing(&mut self, data: &NodeData, field: &str) -> bool {
        let kind = data.kind.to_string();
        self.fail(data, &messages::MISSING_REQUIRED_0_OF_1, &[field, &kind])
    }

    fn fail_missing_node(&mut self, node: &MissingNode) -> bool {
        match node.found {
            Some(found) => {
                let tree = self.tree;
                self.fail(&node.data, &messages::UNSUPPORTED_NODE_KIND_0_CANNOT_BE_PRINTED, &[tree.text(found)])
            }
            None => {
                let parent = node.parent.to_string();
                self.fail(&node.data, &messages::MISSING_REQUIRED_0_OF_1, &[node.expected, &parent])
            }
        }
    }

    fn fail_code(&mut self, data: &NodeData, code: SyntaxKind, table: &str) -> bool {
        let code = code.to_string();
        self.fail(data, &messages::CODE_0_HAS_NO_ENTRY_IN_THE_1_TABLE, &[&code, table])
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    /// ` <symbol> `; an unmapped code leaves the two spaces and fails.
    fn write_operator(&mut self, data: &NodeData, symbol: Option<&'static str>, code: SyntaxKind, table: &str) -> bool {
        self.write(" ");
        let ok = match symbol {
            Some(symbol) => {
                self.write(symbol);
                true
            }
            None => self.fail_code(data, code, table),
        };
        self.write(" ");
        ok
    }

    /// ` <keyword>` unless the keyword is blank.
    fn write_qualifier(&mut self, data: &NodeData, keyword: Option<&'static str>, code: SyntaxKind, table: &str) -> bool {
        match keyword {
            Some("") => true,
            Some(keyword) => {
                self.write(" ");
                self.write(keyword);
                true
            }
            None => self.fail_code(data, code, table),
        }
    }

    fn write_keyword(&mut self, data: &NodeData, keyword: Option<&'static str>, code: SyntaxKind, table: &str) -> bool {
        match keyword {
            Some(keyword) => {
                self.write(keyword);
                true
            }
            None => self.fail_code(data, code, table),
        }
    }

    /// Run `f` against an empty buffer and return what it wrote.
    fn capture(&mut self, f: impl FnOnce(&mut Self) -> bool) -> (String, bool) {
        let saved = std::mem::take(&mut self.output);
        let ok = f(self);
        let captured = std::mem::replace(&mut self.output, saved);
        (captured, ok)
    }

    #[inline]
    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_name(&mut self, s: InternedString) {
        let tree = self.tree;
        self.output.push_str(tree.text(s));
    }

    fn write_quoted(&mut self, s: InternedString) {
        let tree = self.tree;
        self.output.push('"');
        escape_string(tree.text(s), &mut self.output);
        self.output.push('"');
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth * self.options.indent_width {
            self.output.push(' ');
        }
    }
}

/// Convenience wrapper: print the whole tree with default options.
pub fn print_tree(tree: &SourceTree<'_>) -> PrintOutput {
    Printer::new(tree).print_source_unit()
}

/// Escape a string literal body for double quotes.
fn escape_string(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(s: &str) -> String {
        let mut out = String::new();
        escape_string(s, &mut out);
        out
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escaped("plain"), "plain");
        assert_eq!(escaped("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escaped("a\\b"), "a\\\\b");
        assert_eq!(escaped("line\nnext\ttab"), "line\\nnext\\ttab");
        assert_eq!(escaped("\u{1}"), "\\x01");
        assert_eq!(escaped("café"), "café");
    }

    #[test]
    fn test_default_options() {
        let options = PrinterOptions::default();
        assert_eq!(options.indent_width, 2);
        assert_eq!(options.new_line, "\n");
        assert!(options.emit_license);
    }
}
