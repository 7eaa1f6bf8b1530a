//! Tests for menu validation and tree construction.
mod common;
use common::*;
use dialflow::prelude::*;

#[test]
fn test_compiler_builds_support_menu() {
    let tree = MenuCompiler::builder(create_support_menu())
        .build()
        .compile()
        .expect("Failed to compile");

    assert_eq!(tree.len(), 6);
    assert_eq!(tree.root_node().id, "start");

    // Every option target resolves to an existing node
    for node in tree.nodes() {
        for option in &node.options {
            let target = tree.node(option.target);
            assert!(tree.get(&target.id).is_some());
        }
    }

    let start = tree.get("start").unwrap();
    let keys: Vec<&str> = start.option_keys().collect();
    assert_eq!(keys, vec!["1", "2", "3"]);
    assert!(tree.get("techSupport").unwrap().is_terminal());
}

#[test]
fn test_compiler_rejects_dangling_option() {
    let mut menu = create_support_menu();
    menu.nodes[1].options[0].target = "nowhere".to_string();

    let result = MenuCompiler::builder(menu).build().compile();
    assert_eq!(
        result.err(),
        Some(CompileError::NodeNotFound {
            missing_node_id: "nowhere".to_string(),
            source_node_id: "support".to_string(),
        })
    );
}

#[test]
fn test_compiler_rejects_duplicate_ids() {
    let mut menu = create_support_menu();
    menu.nodes.push(node("sales", "A second sales node.", &[]));

    let result = MenuCompiler::builder(menu).build().compile();
    assert_eq!(result.err(), Some(CompileError::DuplicateNode("sales".to_string())));
}

#[test]
fn test_compiler_rejects_missing_root() {
    let result = MenuCompiler::builder(create_support_menu())
        .with_root("main")
        .build()
        .compile();
    assert_eq!(result.err(), Some(CompileError::RootNotFound("main".to_string())));
}

#[test]
fn test_compiler_rejects_empty_menu() {
    let result = MenuCompiler::builder(MenuDefinition::default()).build().compile();
    assert_eq!(result.err(), Some(CompileError::EmptyMenu));
}

#[test]
fn test_compiler_rejects_repeated_and_empty_keys() {
    let mut menu = create_support_menu();
    menu.nodes[0].options[1].key = "1".to_string();
    match MenuCompiler::builder(menu).build().compile() {
        Err(CompileError::InvalidOption { node_id, key, .. }) => {
            assert_eq!(node_id, "start");
            assert_eq!(key, "1");
        }
        other => panic!("Expected InvalidOption error, got {:?}", other),
    }

    for blank in ["", "  "] {
        let mut menu = create_support_menu();
        menu.nodes[1].options[0].key = blank.to_string();
        assert!(matches!(
            MenuCompiler::builder(menu).build().compile(),
            Err(CompileError::InvalidOption { .. })
        ));
    }
}

#[test]
fn test_compiler_rejects_blank_keyword() {
    let mut menu = create_keyword_menu();
    menu.nodes[0].options[2].keywords.push("   ".to_string());
    assert!(matches!(
        MenuCompiler::builder(menu).build().compile(),
        Err(CompileError::InvalidOption { .. })
    ));
}

#[test]
fn test_compiler_rejects_blank_global_keyword() {
    let result = MenuCompiler::builder(create_support_menu())
        .with_keyword("3", "   ")
        .build()
        .compile();
    match result {
        Err(CompileError::InvalidOption { node_id, key, message }) => {
            assert_eq!(node_id, "start");
            assert_eq!(key, "3");
            assert!(message.contains("keyword must not be blank"));
        }
        other => panic!("Expected InvalidOption error, got {:?}", other),
    }
}

#[test]
fn test_root_defaults_to_start() {
    let mut menu = create_support_menu();
    menu.root = None;
    menu.nodes.rotate_left(2);

    let compiler = MenuCompiler::builder(menu).build();
    assert_eq!(compiler.root_id(), "start");
    assert_eq!(compiler.compile().unwrap().root_node().id, "start");
}

#[test]
fn test_builder_root_overrides_definition() {
    let tree = MenuCompiler::builder(create_support_menu())
        .with_root("support")
        .build()
        .compile()
        .unwrap();
    assert_eq!(tree.root_node().id, "support");
}

#[test]
fn test_global_keyword_is_added_to_matching_keys() {
    let tree = MenuCompiler::builder(create_keyword_menu())
        .with_keyword("1", "Operator")
        .with_keyword("1", "help")
        .build()
        .compile()
        .unwrap();

    let start = tree.get("start").unwrap();
    // Normalized, and not duplicated when already declared
    assert_eq!(start.options[0].keywords, vec!["support", "help", "operator"]);
    let support = tree.get("support").unwrap();
    assert_eq!(support.options[0].keywords, vec!["operator", "help"]);
    assert!(support.options[1].keywords.is_empty());
}

#[test]
fn test_keywords_are_normalized() {
    let mut menu = create_support_menu();
    menu.nodes[0].options[0].keywords = vec!["  Technical Help ".to_string()];
    let tree = MenuCompiler::builder(menu).build().compile().unwrap();
    assert_eq!(tree.root_node().options[0].keywords, vec!["technical help"]);
}
