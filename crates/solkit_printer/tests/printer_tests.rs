//! Printer behavior over trees built with `NodeBuilder`.

use indoc::indoc;
use solkit_ast::*;
use solkit_core::{AstArena, NodeId, StringInterner};
use solkit_nodebuilder::NodeBuilder;
use solkit_printer::{print_tree, tables, PrintOutput, Printer, PrinterOptions};

fn print_expression<'a>(b: &NodeBuilder<'a>, expr: Expression<'a>) -> PrintOutput {
    let expr = b.alloc(expr);
    let tree = SourceTree::new(b.source_unit(Vec::new()), b.interner());
    Printer::new(&tree).print(NodeRef::Expression(expr))
}

fn print_statement<'a>(b: &NodeBuilder<'a>, stmt: Statement<'a>) -> PrintOutput {
    let stmt = b.alloc(stmt);
    let tree = SourceTree::new(b.source_unit(Vec::new()), b.interner());
    Printer::new(&tree).print(NodeRef::Statement(stmt))
}

fn print_unit<'a>(b: &NodeBuilder<'a>, items: Vec<SourceUnitItem<'a>>) -> PrintOutput {
    let tree = SourceTree::new(b.source_unit(items), b.interner());
    print_tree(&tree)
}

fn uint<'a>(b: &NodeBuilder<'a>) -> TypeName<'a> {
    b.elementary("uint256")
}

// ============================================================================
// Expressions
// ============================================================================

/// Every operator-range code, mapped or not.
const OPERATOR_KINDS: [SyntaxKind; 35] = [
    SyntaxKind::PlusToken,
    SyntaxKind::MinusToken,
    SyntaxKind::AsteriskToken,
    SyntaxKind::SlashToken,
    SyntaxKind::PercentToken,
    SyntaxKind::AsteriskAsteriskToken,
    SyntaxKind::EqualsEqualsToken,
    SyntaxKind::ExclamationEqualsToken,
    SyntaxKind::LessThanToken,
    SyntaxKind::LessThanEqualsToken,
    SyntaxKind::GreaterThanToken,
    SyntaxKind::GreaterThanEqualsToken,
    SyntaxKind::AmpersandAmpersandToken,
    SyntaxKind::BarBarToken,
    SyntaxKind::AmpersandToken,
    SyntaxKind::BarToken,
    SyntaxKind::CaretToken,
    SyntaxKind::LessThanLessThanToken,
    SyntaxKind::GreaterThanGreaterThanToken,
    SyntaxKind::ExclamationToken,
    SyntaxKind::TildeToken,
    SyntaxKind::PlusPlusToken,
    SyntaxKind::MinusMinusToken,
    SyntaxKind::EqualsToken,
    SyntaxKind::PlusEqualsToken,
    SyntaxKind::MinusEqualsToken,
    SyntaxKind::AsteriskEqualsToken,
    SyntaxKind::SlashEqualsToken,
    SyntaxKind::PercentEqualsToken,
    SyntaxKind::AmpersandEqualsToken,
    SyntaxKind::BarEqualsToken,
    SyntaxKind::CaretEqualsToken,
    SyntaxKind::LessThanLessThanEqualsToken,
    SyntaxKind::GreaterThanGreaterThanEqualsToken,
    SyntaxKind::AsteriskAsteriskEqualsToken,
];

#[test]
fn test_binary_operator_is_space_padded() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let mut mapped = 0;
    for op in OPERATOR_KINDS {
        let Some(symbol) = tables::binary_operator(op) else {
            continue;
        };
        mapped += 1;
        let out = print_expression(&b, b.binary(op, b.identifier("a"), b.identifier("b")));
        assert!(out.success, "{op:?}");
        assert_eq!(out.text, format!("a {symbol} b"));
        assert_eq!(out.text.matches(&format!(" {symbol} ")).count(), 1, "{op:?}");
    }
    assert_eq!(mapped, 19);
}

#[test]
fn test_unmapped_operator_still_prints_operands() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let out = print_expression(&b, b.binary(SyntaxKind::Block, b.identifier("a"), b.identifier("b")));
    assert!(!out.success);
    assert_eq!(out.text, "a  b");
    assert!(out.diagnostics.contains_code(1003));
}

#[test]
fn test_assignment_operators() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let mut mapped = 0;
    for op in OPERATOR_KINDS {
        let Some(symbol) = tables::assignment_operator(op) else {
            continue;
        };
        mapped += 1;
        let out = print_expression(&b, b.assign(op, b.identifier("x"), b.identifier("y")));
        assert!(out.success, "{op:?}");
        assert_eq!(out.text, format!("x {symbol} y"));
        assert_eq!(out.text.matches(&format!(" {symbol} ")).count(), 1, "{op:?}");
    }
    assert_eq!(mapped, 12);

    let out = print_expression(&b, b.assign(SyntaxKind::PlusEqualsToken, b.identifier("total"), b.number("1")));
    assert_eq!(out.text, "total += 1");
}

#[test]
fn test_output_does_not_round_trip() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    // (a + b) * c and a + (b * c) print identically, so the text cannot
    // be parsed back into the tree it came from.
    let left_nested = b.binary(
        SyntaxKind::AsteriskToken,
        b.binary(SyntaxKind::PlusToken, b.identifier("a"), b.identifier("b")),
        b.identifier("c"),
    );
    let right_nested = b.binary(
        SyntaxKind::PlusToken,
        b.identifier("a"),
        b.binary(SyntaxKind::AsteriskToken, b.identifier("b"), b.identifier("c")),
    );
    let left = print_expression(&b, left_nested);
    let right = print_expression(&b, right_nested);
    assert!(left.success && right.success);
    assert_eq!(left.text, "a + b * c");
    assert_eq!(left.text, right.text);
}

#[test]
fn test_unary_operators() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let mut mapped = 0;
    for op in OPERATOR_KINDS.into_iter().chain([SyntaxKind::DeleteKeyword]) {
        let Some(symbol) = tables::unary_operator(op) else {
            continue;
        };
        mapped += 1;
        let separator = if op == SyntaxKind::DeleteKeyword { " " } else { "" };
        let out = print_expression(&b, b.prefix(op, b.identifier("x")));
        assert!(out.success, "{op:?}");
        assert_eq!(out.text, format!("{symbol}{separator}x"));

        let out = print_expression(&b, b.postfix(op, b.identifier("x")));
        assert!(out.success, "{op:?}");
        assert_eq!(out.text, format!("x{symbol}"));
    }
    assert_eq!(mapped, 6);

    assert_eq!(print_expression(&b, b.prefix(SyntaxKind::MinusToken, b.number("1"))).text, "-1");
    assert_eq!(print_expression(&b, b.postfix(SyntaxKind::PlusPlusToken, b.identifier("i"))).text, "i++");
}

#[test]
fn test_conditional() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let out = print_expression(&b, b.conditional(b.identifier("c"), b.identifier("a"), b.identifier("b")));
    assert!(out.success);
    assert_eq!(out.text, "c ? a : b");
}

#[test]
fn test_conditional_with_wrong_arity_fails() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let out = print_expression(&b, b.conditional_from(vec![b.identifier("c"), b.identifier("a")]));
    assert!(!out.success);
    assert_eq!(out.text, "c ? a");
    let diag = out.diagnostics.iter().next().unwrap();
    assert_eq!(diag.code, 1005);
    assert_eq!(diag.message_text, "Conditional expects 3 sub-expressions but has 2.");
}

#[test]
fn test_function_calls() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let out = print_expression(&b, b.call(b.identifier("f"), vec![b.identifier("a"), b.number("2")]));
    assert_eq!(out.text, "f(a, 2)");

    let out = print_expression(
        &b,
        b.call_named(b.identifier("f"), &["to", "amount"], vec![b.identifier("a"), b.number("1")]),
    );
    assert_eq!(out.text, "f({to: a, amount: 1})");

    let callee = b.call_options(
        b.member(b.identifier("pool"), "deposit"),
        &["value", "gas"],
        vec![b.number_with_unit("1", "ether"), b.number("5000")],
    );
    let out = print_expression(&b, b.call(callee, Vec::new()));
    assert!(out.success);
    assert_eq!(out.text, "pool.deposit{value: 1 ether, gas: 5000}()");
}

#[test]
fn test_named_arguments_mismatch_fails() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let out = print_expression(&b, b.call_named(b.identifier("f"), &["a", "b"], vec![b.number("1")]));
    assert!(!out.success);
    assert!(out.diagnostics.contains_code(1005));
    assert_eq!(out.text, "f({a: 1})");
}

#[test]
fn test_access_and_tuple_expressions() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    assert_eq!(print_expression(&b, b.index(b.identifier("xs"), Some(b.identifier("i")))).text, "xs[i]");
    assert_eq!(
        print_expression(&b, b.index_range(b.identifier("data"), Some(b.number("4")), None)).text,
        "data[4:]"
    );
    assert_eq!(
        print_expression(&b, b.tuple(vec![Some(b.identifier("a")), None, Some(b.identifier("b"))])).text,
        "(a, , b)"
    );
    assert_eq!(print_expression(&b, b.inline_array(vec![b.number("1"), b.number("2")])).text, "[1, 2]");
    assert_eq!(
        print_expression(&b, b.new_expression(b.array(uint(&b), None))).text,
        "new uint256[]"
    );
    assert_eq!(
        print_expression(&b, b.call(b.type_expression(b.address_payable()), vec![b.identifier("a")])).text,
        "address payable(a)"
    );
}

#[test]
fn test_literals() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    assert_eq!(print_expression(&b, b.bool_literal(true)).text, "true");
    assert_eq!(print_expression(&b, b.number_with_unit("2", "days")).text, "2 days");
    assert_eq!(print_expression(&b, b.string_literal("say \"hi\"\n")).text, "\"say \\\"hi\\\"\\n\"");
    assert_eq!(print_expression(&b, b.hex_string("deadbeef")).text, "hex\"deadbeef\"");
    assert_eq!(print_expression(&b, b.unicode_string("héllo")).text, "unicode\"héllo\"");
    assert_eq!(print_expression(&b, b.string_literal("naïve")).text, "unicode\"naïve\"");
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_single_return_body() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let body = b.alloc(b.block(vec![b.return_statement(None)]));
    let tree = SourceTree::new(b.source_unit(Vec::new()), &interner);
    let out = Printer::new(&tree).print(NodeRef::Block(body));
    assert!(out.success);
    assert_eq!(out.text, "{\n  return;\n}\n");
}

#[test]
fn test_if_else_chain() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let stmt = b.if_statement(
        b.identifier("a"),
        b.block_statement(vec![b.return_statement(Some(b.number("1")))]),
        Some(b.if_statement(
            b.identifier("b"),
            b.block_statement(vec![b.return_statement(Some(b.number("2")))]),
            Some(b.block_statement(vec![b.revert(b.call(b.identifier("Nope"), Vec::new()))])),
        )),
    );
    let out = print_statement(&b, stmt);
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {"
            if (a) {
              return 1;
            } else if (b) {
              return 2;
            } else {
              revert Nope();
            }
        "}
    );
}

#[test]
fn test_if_without_block_body() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let out = print_statement(&b, b.if_statement(b.identifier("done"), b.return_statement(None), None));
    assert_eq!(out.text, "if (done) return;\n");
}

#[test]
fn test_missing_loop_body_gets_no_terminator() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let body = b.missing_statement(SyntaxKind::WhileStatement, "body", None);
    let out = print_statement(&b, b.while_statement(b.identifier("busy"), body));
    assert!(!out.success);
    assert_eq!(out.text, "while (busy) \n");
    assert!(!out.text.contains(';'));
    assert!(out.diagnostics.contains_code(1002));
}

#[test]
fn test_loops() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let init = b.variable_statement(vec![Some(b.parameter(uint(&b), Some("i")))], Some(b.number("0")));
    let stmt = b.for_statement(
        Some(init),
        Some(b.binary(SyntaxKind::LessThanToken, b.identifier("i"), b.identifier("n"))),
        Some(b.postfix(SyntaxKind::PlusPlusToken, b.identifier("i"))),
        b.block_statement(vec![b.continue_statement()]),
    );
    assert_eq!(
        print_statement(&b, stmt).text,
        "for (uint256 i = 0; i < n; i++) {\n  continue;\n}\n"
    );

    let stmt = b.for_statement(None, None, None, b.block_statement(Vec::new()));
    assert_eq!(print_statement(&b, stmt).text, "for (;;) {}\n");

    let stmt = b.while_statement(b.identifier("busy"), b.block_statement(vec![b.break_statement()]));
    assert_eq!(print_statement(&b, stmt).text, "while (busy) {\n  break;\n}\n");

    let stmt = b.do_while(b.block_statement(vec![b.break_statement()]), b.identifier("busy"));
    assert_eq!(print_statement(&b, stmt).text, "do {\n  break;\n} while (busy);\n");
}

#[test]
fn test_destructuring_declaration() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let stmt = b.variable_statement(
        vec![Some(b.parameter(uint(&b), Some("a"))), None, Some(b.parameter(b.elementary("bool"), Some("ok")))],
        Some(b.call(b.identifier("f"), Vec::new())),
    );
    assert_eq!(print_statement(&b, stmt).text, "(uint256 a, , bool ok) = f()");
}

#[test]
fn test_declaration_without_initializer_is_reported() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    // `uint256 x;` is valid Solidity but cannot be reproduced from the tree.
    let body = b.alloc(b.block(vec![b.variable_statement(vec![Some(b.parameter(uint(&b), Some("x")))], None)]));
    let tree = SourceTree::new(b.source_unit(Vec::new()), &interner);
    let out = Printer::new(&tree).print(NodeRef::Block(body));
    assert!(!out.success);
    assert_eq!(out.text, "{\n  uint256 x;\n}\n");
    assert!(out.diagnostics.contains_code(1002));
}

#[test]
fn test_try_catch() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let stmt = b.try_statement(
        b.call(b.member(b.identifier("feed"), "latest"), Vec::new()),
        vec![
            b.catch_clause(None, Some(vec![b.parameter(uint(&b), Some("v"))]), b.block(Vec::new())),
            b.catch_clause(
                Some("Error"),
                Some(vec![b.parameter_in(b.elementary("string"), Some("reason"), SyntaxKind::MemoryKeyword)]),
                b.block(Vec::new()),
            ),
            b.catch_clause(None, None, b.block(Vec::new())),
        ],
    );
    let out = print_statement(&b, stmt);
    assert!(out.success);
    assert_eq!(
        out.text,
        "try feed.latest() returns (uint256 v) {} catch Error(string memory reason) {} catch {}\n"
    );
}

#[test]
fn test_missing_statement_is_skipped_and_reported() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let body = b.alloc(b.block(vec![
        b.missing_statement(SyntaxKind::Block, "statement", Some("FancyStatement")),
        b.return_statement(None),
    ]));
    let tree = SourceTree::new(b.source_unit(Vec::new()), &interner);
    let out = Printer::new(&tree).print(NodeRef::Block(body));
    assert!(!out.success);
    assert_eq!(out.text, "{\n  return;\n}\n");
    let diag = out.diagnostics.iter().next().unwrap();
    assert_eq!(diag.code, 1001);
    assert_eq!(diag.message_text, "Unsupported node kind 'FancyStatement' cannot be printed.");
}

#[test]
fn test_absent_required_expression_is_reported() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let out = print_statement(
        &b,
        b.emit(b.missing_expression(SyntaxKind::EmitStatement, "eventCall", None)),
    );
    assert!(!out.success);
    assert_eq!(out.text, "emit ");
    assert!(out.diagnostics.contains_code(1002));
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_contract() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let mut getter = b.function(
        "get",
        Vec::new(),
        vec![b.parameter(uint(&b), None)],
        Some(b.block(vec![b.return_statement(Some(b.identifier("total")))])),
    );
    getter.state_mutability = SyntaxKind::ViewKeyword;
    let mut total = b.state_variable(uint(&b), "total");
    total.visibility = SyntaxKind::PrivateKeyword;

    let contract = b.contract(
        "Counter",
        SyntaxKind::ContractKeyword,
        vec![b.inheritance("Base", Some(vec![b.number("1")])), b.inheritance("Ownable", None)],
        vec![
            ContractMember::StateVariable(total),
            ContractMember::Event(b.event("Bumped", vec![b.parameter(uint(&b), Some("by"))])),
            ContractMember::Function(b.constructor(Vec::new(), b.block(Vec::new()))),
            ContractMember::Function(getter),
        ],
    );
    let out = print_unit(&b, vec![SourceUnitItem::Contract(contract)]);
    assert!(out.success, "{:?}", out.diagnostics);
    assert_eq!(
        out.text,
        indoc! {"
            contract Counter is Base(1), Ownable {
              uint256 private total;
              event Bumped(uint256 by);
              constructor() {}
              function get() public view returns (uint256) {
                return total;
              }
            }
        "}
    );
}

#[test]
fn test_interface_functions_without_bodies() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let mut f = b.function("balanceOf", vec![b.parameter(b.elementary("address"), Some("who"))], vec![b.parameter(uint(&b), None)], None);
    f.visibility = SyntaxKind::ExternalKeyword;
    f.state_mutability = SyntaxKind::ViewKeyword;
    let iface = b.contract("IToken", SyntaxKind::InterfaceKeyword, Vec::new(), vec![ContractMember::Function(f)]);
    let empty = b.contract("Empty", SyntaxKind::LibraryKeyword, Vec::new(), Vec::new());

    let out = print_unit(&b, vec![SourceUnitItem::Contract(iface), SourceUnitItem::Contract(empty)]);
    assert_eq!(
        out.text,
        indoc! {"
            interface IToken {
              function balanceOf(address who) external view returns (uint256);
            }
            library Empty {}
        "}
    );
}

#[test]
fn test_modifier_and_overrides() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let mut guard = b.modifier(
        "onlyOwner",
        Vec::new(),
        Some(b.block(vec![
            b.expression_statement(b.call(b.identifier("require"), vec![b.identifier("ok")])),
            b.placeholder(),
        ])),
    );
    guard.data.modifier_flags |= ModifierFlags::VIRTUAL;

    let mut f = b.function("run", Vec::new(), Vec::new(), Some(b.block(Vec::new())));
    f.overrides = Some(b.override_specifier(&["A", "B"]));
    f.modifiers = b.list(vec![b.modifier_invocation("onlyOwner", None), b.modifier_invocation("limit", Some(vec![b.number("3")]))]);

    let contract = b.contract(
        "C",
        SyntaxKind::ContractKeyword,
        Vec::new(),
        vec![ContractMember::Modifier(guard), ContractMember::Function(f)],
    );
    let out = print_unit(&b, vec![SourceUnitItem::Contract(contract)]);
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {"
            contract C {
              modifier onlyOwner() virtual {
                require(ok);
                _;
              }
              function run() public override(A, B) onlyOwner limit(3) {}
            }
        "}
    );
}

#[test]
fn test_address_payable_state_variable() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let contract = b.contract(
        "Vault",
        SyntaxKind::ContractKeyword,
        Vec::new(),
        vec![
            ContractMember::StateVariable(b.state_variable(b.address_payable(), "owner")),
            ContractMember::StateVariable(b.state_variable(b.elementary("addresspayable"), "beneficiary")),
        ],
    );
    let out = print_unit(&b, vec![SourceUnitItem::Contract(contract)]);
    assert!(out.success);
    assert!(out.text.contains("address payable internal owner;"));
    assert!(out.text.contains("address payable internal beneficiary;"));
    assert!(!out.text.contains("addresspayable"));
}

#[test]
fn test_mapping_type() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let plain = b.alloc(b.mapping(b.elementary("address"), uint(&b)));
    let named = b.alloc(b.named_mapping(b.elementary("address"), "owner", b.mapping(b.elementary("address"), b.elementary("bool")), "approved"));
    let tree = SourceTree::new(b.source_unit(Vec::new()), &interner);
    let mut printer = Printer::new(&tree);
    assert_eq!(printer.print(NodeRef::TypeName(plain)).text, "mapping(address => uint256)");
    assert_eq!(
        printer.print(NodeRef::TypeName(named)).text,
        "mapping(address owner => mapping(address => bool) approved)"
    );
}

#[test]
fn test_user_defined_type_prints_declaration_name() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let color = b.enum_definition("Color", &["Red", "Green"]);
    let color_id = color.data.id;
    let contract = b.contract(
        "Paint",
        SyntaxKind::ContractKeyword,
        Vec::new(),
        vec![
            ContractMember::Enum(color),
            ContractMember::StateVariable(b.state_variable(b.user_defined("Paint.Color", color_id), "current")),
        ],
    );
    let out = print_unit(&b, vec![SourceUnitItem::Contract(contract)]);
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {"
            contract Paint {
              enum Color {
                Red,
                Green
              }
              Color internal current;
            }
        "}
    );
}

#[test]
fn test_unresolved_type_keeps_siblings() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let contract = b.contract(
        "Broken",
        SyntaxKind::ContractKeyword,
        Vec::new(),
        vec![
            ContractMember::StateVariable(b.state_variable(b.user_defined("Ghost", NodeId(9999)), "ghost")),
            ContractMember::StateVariable(b.state_variable(uint(&b), "count")),
        ],
    );
    let out = print_unit(&b, vec![SourceUnitItem::Contract(contract)]);
    assert!(!out.success);
    assert!(out.text.contains("uint256 internal count;"));
    assert!(out.text.ends_with("}\n"));
    let diag = out.diagnostics.iter().next().unwrap();
    assert_eq!(diag.code, 1004);
    assert_eq!(diag.message_text, "Declaration #9999 referenced by type name 'Ghost' was not found in the tree.");
}

#[test]
fn test_struct_error_and_value_type() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let position = b.struct_definition(
        "Position",
        vec![b.parameter(b.elementary("address"), Some("owner")), b.parameter(b.array(uint(&b), Some(b.number("3"))), Some("slots"))],
    );
    let items = vec![
        SourceUnitItem::Struct(position),
        SourceUnitItem::Error(b.error("Unauthorized", vec![b.parameter(b.elementary("address"), Some("caller"))])),
        SourceUnitItem::UserDefinedValueType(b.user_defined_value_type("Price", b.elementary("uint128"))),
    ];
    let out = print_unit(&b, items);
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {"
            struct Position {
              address owner;
              uint256[3] slots;
            }
            error Unauthorized(address caller);
            type Price is uint128;
        "}
    );
}

#[test]
fn test_free_function_and_file_level_constant() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let mut limit = b.state_variable(uint(&b), "LIMIT");
    limit.mutability = SyntaxKind::ConstantKeyword;
    limit.value = Some(b.alloc(b.number("10")));
    let mut helper = b.function(
        "twice",
        vec![b.parameter(uint(&b), Some("x"))],
        vec![b.parameter(uint(&b), None)],
        Some(b.block(vec![b.return_statement(Some(b.binary(SyntaxKind::AsteriskToken, b.identifier("x"), b.number("2"))))])),
    );
    helper.visibility = SyntaxKind::InternalKeyword;
    helper.state_mutability = SyntaxKind::PureKeyword;

    let out = print_unit(&b, vec![SourceUnitItem::Constant(limit), SourceUnitItem::Function(helper)]);
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {"
            uint256 constant LIMIT = 10;
            function twice(uint256 x) pure returns (uint256) {
              return x * 2;
            }
        "}
    );
}

#[test]
fn test_using_for() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let mut attached = b.using_for("unused", None);
    attached.library_name = None;
    attached.function_list = b.list(vec![
        UsingForFunction { function: b.identifier_path("add", None), operator: Some(SyntaxKind::PlusToken) },
        UsingForFunction { function: b.identifier_path("neg", None), operator: None },
    ]);
    attached.type_name = Some(b.alloc(b.elementary("int256")));
    attached.data.modifier_flags |= ModifierFlags::GLOBAL;

    let items = vec![
        SourceUnitItem::UsingFor(b.using_for("SafeMath", Some(uint(&b)))),
        SourceUnitItem::UsingFor(b.using_for("Strings", None)),
        SourceUnitItem::UsingFor(attached),
    ];
    let out = print_unit(&b, items);
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {"
            using SafeMath for uint256;
            using Strings for *;
            using {add as +, neg} for int256 global;
        "}
    );
}

// ============================================================================
// Source units
// ============================================================================

#[test]
fn test_license_pragma_and_imports() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let unit = b.source_unit_with_license(
        "MIT",
        vec![
            SourceUnitItem::Pragma(b.pragma(&["solidity", "^", "0.8", ".20"])),
            SourceUnitItem::Import(b.import("./A.sol", None)),
            SourceUnitItem::Import(b.import_symbols("./B.sol", &[("B", None), ("C", Some("D"))])),
            SourceUnitItem::Import(b.import("./E.sol", Some("E"))),
        ],
    );
    let tree = SourceTree::new(unit, &interner);
    let out = Printer::new(&tree).print_source_unit();
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {r#"
            // SPDX-License-Identifier: MIT
            pragma solidity ^0.8.20;
            import "./A.sol";
            import {B, C as D} from "./B.sol";
            import "./E.sol" as E;
        "#}
    );

    let options = PrinterOptions { emit_license: false, ..PrinterOptions::default() };
    let out = Printer::with_options(&tree, options).print_source_unit();
    assert!(out.text.starts_with("pragma solidity"));
}

#[test]
fn test_empty_pragma_is_reported() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let out = print_unit(&b, vec![SourceUnitItem::Pragma(b.pragma(&[]))]);
    assert!(!out.success);
    assert_eq!(out.text, "pragma;\n");
    assert!(out.diagnostics.contains_code(1002));
}

#[test]
fn test_printer_options() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let body = b.alloc(b.block(vec![b.break_statement()]));
    let tree = SourceTree::new(b.source_unit(Vec::new()), &interner);
    let options = PrinterOptions { indent_width: 4, new_line: "\r\n".to_string(), emit_license: true };
    let out = Printer::with_options(&tree, options).print(NodeRef::Block(body));
    assert_eq!(out.text, "{\r\n    break;\r\n}\r\n");
}

#[test]
fn test_printer_is_reusable() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let bad = b.alloc(b.missing_expression(SyntaxKind::Assignment, "rightHandSide", None));
    let good = b.alloc(b.identifier("fine"));
    let tree = SourceTree::new(b.source_unit(Vec::new()), &interner);
    let mut printer = Printer::new(&tree);
    assert!(!printer.print(NodeRef::Expression(bad)).success);
    let out = printer.print(NodeRef::Expression(good));
    assert!(out.success);
    assert!(out.diagnostics.is_empty());
    assert_eq!(out.text, "fine");
}

// ============================================================================
// Inline assembly
// ============================================================================

#[test]
fn test_inline_assembly() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let ast = b.yul_block(vec![
        b.yul_let(&["x"], Some(b.yul_call("add", vec![b.yul_number("1"), b.yul_ident("y")]))),
        b.yul_if(b.yul_ident("x"), b.yul_block(vec![b.yul_leave()])),
        b.yul_expression_statement(b.yul_call("sstore", vec![b.yul_number("0"), b.yul_ident("x")])),
    ]);
    let out = print_statement(&b, b.inline_assembly(ast));
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {"
            assembly {
              let x := add(1, y)
              if x {
                leave
              }
              sstore(0, x)
            }
        "}
    );
}

#[test]
fn test_yul_control_flow() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let ast = b.alloc(b.yul_block(vec![
        b.yul_for(
            b.yul_block(vec![b.yul_let(&["i"], Some(b.yul_number("0")))]),
            b.yul_call("lt", vec![b.yul_ident("i"), b.yul_ident("n")]),
            b.yul_block(vec![b.yul_assign(&["i"], b.yul_call("add", vec![b.yul_ident("i"), b.yul_number("1")]))]),
            b.yul_block(Vec::new()),
        ),
        b.yul_switch(
            b.yul_ident("x"),
            vec![
                b.yul_case(Some(b.yul_literal(LiteralKind::Number, "0")), b.yul_block(vec![b.yul_break()])),
                b.yul_case(None, b.yul_block(Vec::new())),
            ],
        ),
        b.yul_function("f", &["a"], &["r"], b.yul_block(vec![b.yul_assign(&["r"], b.yul_ident("a"))])),
    ]));
    let tree = SourceTree::new(b.source_unit(Vec::new()), &interner);
    let out = Printer::new(&tree).print(NodeRef::YulBlock(ast));
    assert!(out.success);
    assert_eq!(
        out.text,
        indoc! {"
            {
              for { let i := 0 } lt(i, n) { i := add(i, 1) } {}
              switch x
              case 0 {
                break
              }
              default {}
              function f(a) -> r {
                r := a
              }
            }"}
    );
}

#[test]
fn test_missing_yul_statement() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let ast = b.yul_block(vec![
        b.missing_yul_statement(SyntaxKind::YulBlock, "statement", Some("YulUnknown")),
        b.yul_continue(),
    ]);
    let out = print_statement(&b, b.inline_assembly(ast));
    assert!(!out.success);
    assert_eq!(out.text, "assembly {\n  continue\n}\n");
    assert!(out.diagnostics.contains_code(1001));
}

#[test]
fn test_missing_yul_statement_in_for_header() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = NodeBuilder::new(&arena, &interner);

    let ast = b.alloc(b.yul_block(vec![b.yul_for(
        b.yul_block(vec![b.missing_yul_statement(SyntaxKind::YulForLoop, "pre", None)]),
        b.yul_ident("go"),
        b.yul_block(Vec::new()),
        b.yul_block(Vec::new()),
    )]));
    let tree = SourceTree::new(b.source_unit(Vec::new()), &interner);
    let out = Printer::new(&tree).print(NodeRef::YulBlock(ast));
    assert!(!out.success);
    assert_eq!(out.text, "{\n  for { } go { } {}\n}");
    assert!(out.diagnostics.contains_code(1002));
}
