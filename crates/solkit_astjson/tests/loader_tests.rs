//! Loading solc JSON and printing the result.

#![recursion_limit = "256"]

use indoc::indoc;
use serde_json::{json, Value};
use solkit_ast::*;
use solkit_astjson::{load_source_unit, load_standard_json, LoadedUnit, SYNTHETIC_ID_BASE};
use solkit_core::{AstArena, StringInterner};
use solkit_printer::{print_tree, PrintOutput};

fn load<'a>(interner: &'a StringInterner, arena: &'a AstArena, value: &Value) -> LoadedUnit<'a> {
    load_source_unit(interner, arena, value).expect("source unit")
}

fn print(unit: &LoadedUnit<'_>, interner: &StringInterner) -> PrintOutput {
    let tree = SourceTree::new(unit.root, interner);
    print_tree(&tree)
}

fn codes(unit: &LoadedUnit<'_>) -> Vec<u32> {
    unit.diagnostics.iter().map(|d| d.code).collect()
}

fn ident(id: u32, name: &str) -> Value {
    json!({"id": id, "nodeType": "Identifier", "name": name, "src": "0:0:0"})
}

fn uint_type(id: u32) -> Value {
    json!({"id": id, "nodeType": "ElementaryTypeName", "name": "uint256", "src": "0:7:0"})
}

fn counter_unit() -> Value {
    json!({
        "id": 30,
        "nodeType": "SourceUnit",
        "src": "0:300:0",
        "absolutePath": "Counter.sol",
        "license": "MIT",
        "nodes": [
            {"id": 1, "nodeType": "PragmaDirective", "src": "32:24:0", "literals": ["solidity", "^", "0.8", ".20"]},
            {
                "id": 29,
                "nodeType": "ContractDefinition",
                "src": "58:240:0",
                "name": "Counter",
                "contractKind": "contract",
                "abstract": false,
                "baseContracts": [],
                "nodes": [
                    {
                        "id": 3,
                        "nodeType": "VariableDeclaration",
                        "src": "80:20:0",
                        "name": "count",
                        "constant": false,
                        "mutability": "mutable",
                        "stateVariable": true,
                        "storageLocation": "default",
                        "visibility": "public",
                        "typeName": uint_type(2)
                    },
                    {
                        "id": 7,
                        "nodeType": "EventDefinition",
                        "src": "104:26:0",
                        "name": "Bumped",
                        "anonymous": false,
                        "parameters": {
                            "id": 6,
                            "nodeType": "ParameterList",
                            "src": "116:12:0",
                            "parameters": [{
                                "id": 5,
                                "nodeType": "VariableDeclaration",
                                "src": "117:10:0",
                                "name": "by",
                                "indexed": false,
                                "storageLocation": "default",
                                "typeName": uint_type(4)
                            }]
                        }
                    },
                    {
                        "id": 28,
                        "nodeType": "FunctionDefinition",
                        "src": "134:160:0",
                        "name": "bump",
                        "kind": "function",
                        "implemented": true,
                        "virtual": false,
                        "visibility": "external",
                        "stateMutability": "nonpayable",
                        "modifiers": [],
                        "parameters": {
                            "id": 10,
                            "nodeType": "ParameterList",
                            "src": "147:12:0",
                            "parameters": [{
                                "id": 9,
                                "nodeType": "VariableDeclaration",
                                "src": "148:10:0",
                                "name": "by",
                                "storageLocation": "default",
                                "typeName": uint_type(8)
                            }]
                        },
                        "returnParameters": {"id": 11, "nodeType": "ParameterList", "src": "169:0:0", "parameters": []},
                        "body": {
                            "id": 27,
                            "nodeType": "Block",
                            "src": "169:125:0",
                            "statements": [
                                {
                                    "id": 15,
                                    "nodeType": "ExpressionStatement",
                                    "src": "179:12:0",
                                    "expression": {
                                        "id": 14,
                                        "nodeType": "Assignment",
                                        "src": "179:11:0",
                                        "operator": "+=",
                                        "leftHandSide": ident(12, "count"),
                                        "rightHandSide": ident(13, "by")
                                    }
                                },
                                {
                                    "id": 20,
                                    "nodeType": "EmitStatement",
                                    "src": "200:16:0",
                                    "eventCall": {
                                        "id": 19,
                                        "nodeType": "FunctionCall",
                                        "src": "205:10:0",
                                        "kind": "functionCall",
                                        "names": [],
                                        "expression": ident(17, "Bumped"),
                                        "arguments": [ident(18, "by")]
                                    }
                                }
                            ]
                        }
                    }
                ]
            }
        ]
    })
}

#[test]
fn test_contract_loads_and_prints() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let unit = load(&interner, &arena, &counter_unit());
    assert!(unit.diagnostics.is_empty(), "{:?}", unit.diagnostics);
    assert_eq!(unit.root.data.id, NodeId(30));
    assert_eq!(unit.root.nodes.len(), 2);

    let SourceUnitItem::Contract(contract) = &unit.root.nodes[1] else {
        panic!("expected a contract");
    };
    assert_eq!(contract.data.range.pos, 58);
    assert_eq!(contract.data.range.end, 298);
    assert_eq!(contract.nodes.len(), 3);

    let out = print(&unit, &interner);
    assert!(out.success, "{:?}", out.diagnostics);
    assert_eq!(
        out.text,
        indoc! {"
            // SPDX-License-Identifier: MIT
            pragma solidity ^0.8.20;
            contract Counter {
              uint256 public count;
              event Bumped(uint256 by);
              function bump(uint256 by) external {
                count += by;
                emit Bumped(by);
              }
            }
        "}
    );
}

#[test]
fn test_user_defined_types_resolve_by_solc_id() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "id": 10,
        "nodeType": "SourceUnit",
        "src": "0:100:0",
        "nodes": [
            {
                "id": 4,
                "nodeType": "EnumDefinition",
                "src": "0:30:0",
                "name": "Color",
                "members": [
                    {"id": 2, "nodeType": "EnumValue", "src": "13:3:0", "name": "Red"},
                    {"id": 3, "nodeType": "EnumValue", "src": "18:4:0", "name": "Blue"}
                ]
            },
            {
                "id": 9,
                "nodeType": "ContractDefinition",
                "src": "32:60:0",
                "name": "Palette",
                "contractKind": "contract",
                "baseContracts": [],
                "nodes": [{
                    "id": 8,
                    "nodeType": "VariableDeclaration",
                    "src": "55:20:0",
                    "name": "current",
                    "mutability": "mutable",
                    "visibility": "internal",
                    "typeName": {
                        "id": 7,
                        "nodeType": "UserDefinedTypeName",
                        "src": "55:5:0",
                        "pathNode": {"id": 6, "nodeType": "IdentifierPath", "name": "Color", "src": "55:5:0"},
                        "referencedDeclaration": 4
                    }
                }]
            }
        ]
    });
    let unit = load(&interner, &arena, &value);
    assert!(unit.diagnostics.is_empty(), "{:?}", unit.diagnostics);

    let out = print(&unit, &interner);
    assert!(out.success, "{:?}", out.diagnostics);
    assert_eq!(
        out.text,
        indoc! {"
            enum Color {
              Red,
              Blue
            }
            contract Palette {
              Color internal current;
            }
        "}
    );
}

#[test]
fn test_unknown_statement_becomes_placeholder() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "id": 5,
        "nodeType": "SourceUnit",
        "src": "0:80:0",
        "nodes": [{
            "id": 4,
            "nodeType": "FunctionDefinition",
            "src": "0:80:0",
            "name": "f",
            "kind": "freeFunction",
            "visibility": "internal",
            "stateMutability": "pure",
            "modifiers": [],
            "parameters": {"id": 1, "nodeType": "ParameterList", "src": "10:2:0", "parameters": []},
            "returnParameters": {"id": 2, "nodeType": "ParameterList", "src": "13:0:0", "parameters": []},
            "body": {
                "id": 3,
                "nodeType": "Block",
                "src": "20:60:0",
                "statements": [
                    {"nodeType": "GotoStatement", "src": "22:5:0", "label": "end"},
                    {"id": 6, "nodeType": "Break", "src": "30:6:0"}
                ]
            }
        }]
    });
    let unit = load(&interner, &arena, &value);
    assert_eq!(codes(&unit), vec![2001]);
    let diagnostic = &unit.diagnostics.diagnostics()[0];
    assert_eq!(diagnostic.message_text, "Unsupported node type 'GotoStatement' in Block.");
    assert_eq!(diagnostic.node, Some(NodeId(3)));

    let SourceUnitItem::Function(function) = &unit.root.nodes[0] else {
        panic!("expected a free function");
    };
    let body = function.body.as_ref().expect("body");
    assert!(matches!(body.statements[0], Statement::Missing(ref m) if m.data.id.0 >= SYNTHETIC_ID_BASE));

    // The printer reports the placeholder again and keeps going.
    let out = print(&unit, &interner);
    assert!(!out.success);
    assert!(out.diagnostics.contains_code(1001));
    assert_eq!(out.text, "function f() pure {\n  break;\n}\n");
}

#[test]
fn test_unknown_declarations_become_placeholders() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "id": 10,
        "nodeType": "SourceUnit",
        "src": "0:80:0",
        "nodes": [
            {"id": 1, "nodeType": "PragmaDirective", "src": "0:20:0", "literals": ["solidity", "^", "0.8"]},
            {"id": 2, "nodeType": "FutureTopLevel", "src": "21:5:0"},
            {
                "id": 4,
                "nodeType": "ContractDefinition",
                "src": "30:40:0",
                "name": "C",
                "contractKind": "contract",
                "baseContracts": [],
                "nodes": [{"id": 3, "nodeType": "FutureMemberDefinition", "src": "45:5:0"}]
            }
        ]
    });
    let unit = load(&interner, &arena, &value);
    assert_eq!(codes(&unit), vec![2001, 2001]);
    assert_eq!(
        unit.diagnostics.diagnostics()[1].message_text,
        "Unsupported node type 'FutureMemberDefinition' in ContractDefinition."
    );

    assert_eq!(unit.root.nodes.len(), 3);
    assert!(matches!(unit.root.nodes[1], SourceUnitItem::Missing(ref m) if m.data.id.0 >= SYNTHETIC_ID_BASE));
    let SourceUnitItem::Contract(contract) = &unit.root.nodes[2] else {
        panic!("expected a contract");
    };
    assert!(matches!(contract.nodes[0], ContractMember::Missing(_)));

    // Both placeholders print as nothing and mark the output partial.
    let out = print(&unit, &interner);
    assert!(!out.success);
    assert_eq!(out.diagnostics.iter().filter(|d| d.code == 1001).count(), 2);
    assert_eq!(out.text, "pragma solidity ^0.8;\ncontract C {\n}\n");
}

#[test]
fn test_missing_required_field() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "id": 3,
        "nodeType": "SourceUnit",
        "src": "0:40:0",
        "nodes": [{
            "id": 2,
            "nodeType": "ContractDefinition",
            "src": "0:40:0",
            "name": "C",
            "contractKind": "contract",
            "baseContracts": [],
            "nodes": [{
                "id": 1,
                "nodeType": "VariableDeclaration",
                "src": "14:10:0",
                "name": "x",
                "visibility": "internal",
                "mutability": "mutable"
            }]
        }]
    });
    let unit = load(&interner, &arena, &value);
    assert_eq!(codes(&unit), vec![2002]);
    assert_eq!(
        unit.diagnostics.diagnostics()[0].message_text,
        "Missing field 'typeName' on StateVariableDeclaration node."
    );

    let out = print(&unit, &interner);
    assert!(out.diagnostics.contains_code(1002));
    assert!(out.text.contains(" internal x;"));
}

#[test]
fn test_unknown_visibility_is_reported_twice() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "id": 4,
        "nodeType": "SourceUnit",
        "src": "0:40:0",
        "nodes": [{
            "id": 3,
            "nodeType": "ContractDefinition",
            "src": "0:40:0",
            "name": "C",
            "contractKind": "contract",
            "baseContracts": [],
            "nodes": [{
                "id": 2,
                "nodeType": "VariableDeclaration",
                "src": "14:10:0",
                "name": "x",
                "visibility": "protected",
                "mutability": "mutable",
                "typeName": uint_type(1)
            }]
        }]
    });
    let unit = load(&interner, &arena, &value);
    assert_eq!(codes(&unit), vec![2004]);
    assert_eq!(unit.diagnostics.diagnostics()[0].message_text, "Unknown visibility 'protected'.");

    let out = print(&unit, &interner);
    assert!(!out.success);
    assert_eq!(out.diagnostics.diagnostics()[0].code, 1003);
    assert_eq!(out.text, "contract C {\n  uint256 x;\n}\n");
}

#[test]
fn test_bad_source_location_and_missing_id() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "id": 2,
        "nodeType": "SourceUnit",
        "src": "0:20:0",
        "nodes": [
            {"nodeType": "PragmaDirective", "src": "0:23", "literals": ["abicoder", "v2"]}
        ]
    });
    let unit = load(&interner, &arena, &value);
    assert_eq!(codes(&unit), vec![2005, 2003]);
    assert!(unit.diagnostics.iter().all(|d| !d.is_error()));

    let out = print(&unit, &interner);
    assert!(out.success);
    assert_eq!(out.text, "pragma abicoder v2;\n");
}

#[test]
fn test_inline_assembly_without_yul_ids() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "id": 9,
        "nodeType": "SourceUnit",
        "src": "0:90:0",
        "nodes": [{
            "id": 8,
            "nodeType": "FunctionDefinition",
            "src": "0:90:0",
            "name": "zero",
            "kind": "freeFunction",
            "visibility": "internal",
            "stateMutability": "pure",
            "modifiers": [],
            "parameters": {"id": 1, "nodeType": "ParameterList", "src": "13:2:0", "parameters": []},
            "returnParameters": {
                "id": 3,
                "nodeType": "ParameterList",
                "src": "24:11:0",
                "parameters": [{
                    "id": 2,
                    "nodeType": "VariableDeclaration",
                    "src": "25:9:0",
                    "name": "r",
                    "storageLocation": "default",
                    "typeName": uint_type(4)
                }]
            },
            "body": {
                "id": 7,
                "nodeType": "Block",
                "src": "36:50:0",
                "statements": [{
                    "id": 6,
                    "nodeType": "InlineAssembly",
                    "src": "38:40:0",
                    "evmVersion": "paris",
                    "externalReferences": [],
                    "AST": {
                        "nodeType": "YulBlock",
                        "src": "47:31:0",
                        "statements": [{
                            "nodeType": "YulAssignment",
                            "src": "49:20:0",
                            "variableNames": [{"nodeType": "YulIdentifier", "name": "r", "src": "49:1:0"}],
                            "value": {
                                "nodeType": "YulFunctionCall",
                                "src": "54:15:0",
                                "functionName": {"nodeType": "YulIdentifier", "name": "mload", "src": "54:5:0"},
                                "arguments": [{"nodeType": "YulLiteral", "kind": "number", "value": "0x40", "src": "60:4:0"}]
                            }
                        }]
                    }
                }]
            }
        }]
    });
    let unit = load(&interner, &arena, &value);
    assert!(unit.diagnostics.is_empty(), "{:?}", unit.diagnostics);

    let out = print(&unit, &interner);
    assert!(out.success, "{:?}", out.diagnostics);
    assert_eq!(
        out.text,
        indoc! {"
            function zero() pure returns (uint256 r) {
              assembly {
                r := mload(0x40)
              }
            }
        "}
    );
}

#[test]
fn test_builtin_references_have_no_declaration() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "id": 5,
        "nodeType": "SourceUnit",
        "src": "0:20:0",
        "nodes": [{
            "id": 4,
            "nodeType": "VariableDeclaration",
            "src": "0:20:0",
            "name": "ORIGIN",
            "constant": true,
            "visibility": "internal",
            "typeName": {"id": 1, "nodeType": "ElementaryTypeName", "name": "address", "src": "0:7:0"},
            "value": {
                "id": 3,
                "nodeType": "MemberAccess",
                "src": "10:9:0",
                "memberName": "origin",
                "expression": {"id": 2, "nodeType": "Identifier", "name": "tx", "referencedDeclaration": -26, "src": "10:2:0"}
            }
        }]
    });
    let unit = load(&interner, &arena, &value);
    assert!(unit.diagnostics.is_empty(), "{:?}", unit.diagnostics);

    let SourceUnitItem::Constant(constant) = &unit.root.nodes[0] else {
        panic!("expected a file-level constant");
    };
    assert_eq!(constant.mutability, SyntaxKind::ConstantKeyword);
    let Some(Expression::MemberAccess(access)) = constant.value else {
        panic!("expected a member access");
    };
    assert!(matches!(access.expression, Expression::Identifier(id) if id.referenced_declaration.is_none()));

    let out = print(&unit, &interner);
    assert_eq!(out.text, "address constant ORIGIN = tx.origin;\n");
}

#[test]
fn test_standard_json_tags_diagnostics_with_path() {
    let interner = StringInterner::new();
    let arena = AstArena::new();
    let value = json!({
        "sources": {
            "b.sol": {"id": 1, "ast": {"id": 20, "nodeType": "SourceUnit", "src": "0:0:1", "nodes": [
                {"id": 19, "nodeType": "Teleport", "src": "0:0:1"}
            ]}},
            "a.sol": {"id": 0, "ast": counter_unit()}
        }
    });
    let units = load_standard_json(&interner, &arena, &value).expect("standard json");
    let paths: Vec<_> = units.iter().map(|(path, _)| path.as_str()).collect();
    assert_eq!(paths, ["a.sol", "b.sol"]);

    let (_, a) = &units[0];
    assert!(a.diagnostics.is_empty());
    let (_, b) = &units[1];
    assert!(b.root.nodes.is_empty());
    assert_eq!(codes(b), vec![2001]);
    assert_eq!(b.diagnostics.diagnostics()[0].file.as_deref(), Some("b.sol"));
}
