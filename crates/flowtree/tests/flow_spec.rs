//! Behavior of the flow builder over whole inputs

use flowtree::plugins::flow::{build_flow, FlowDatabase, FlowParser, InputKind};
use flowtree::{Database, DiagramError, NodeShape};

fn edges(db: &FlowDatabase) -> Vec<(String, String, Option<String>)> {
    db.edges()
        .map(|e| (e.from.clone(), e.to.clone(), e.label.clone()))
        .collect()
}

#[test]
fn test_label_and_shape_merge_is_idempotent() {
    let db = build_flow(&["a", "a[Hello]", "a", "a -> b"]).unwrap();
    let a = db.get_node("a").unwrap();
    assert_eq!(a.label, "Hello");
    assert_eq!(a.shape, NodeShape::Box);
}

#[test]
fn test_commas_inside_brackets_do_not_split() {
    let db = build_flow(&["s -> a[x, y], b"]).unwrap();
    assert_eq!(db.edge_count(), 2);
    assert_eq!(db.get_node("a").unwrap().label, "x, y");
    assert!(db.has_node("b"));
}

#[test]
fn test_fan_out_with_label() {
    let db = build_flow(&["start -> a, b | GO"]).unwrap();
    assert_eq!(
        edges(&db),
        vec![
            ("start".to_string(), "a".to_string(), Some("GO".to_string())),
            ("start".to_string(), "b".to_string(), Some("GO".to_string())),
        ]
    );
}

#[test]
fn test_entry_chain() {
    let mut db = FlowDatabase::new();
    let kind = FlowParser::new()
        .parse_lines(&["Draft", "Review", "Publish"], &mut db)
        .unwrap();
    assert_eq!(kind, InputKind::Entries);
    assert_eq!(db.node_count(), 3);
    assert_eq!(db.edge_count(), 2);
}

#[test]
fn test_single_edge_switches_whole_input_to_spec() {
    let mut db = FlowDatabase::new();
    let kind = FlowParser::new()
        .parse_lines(&["intro", "intro -> outro"], &mut db)
        .unwrap();
    assert_eq!(kind, InputKind::FlowSpec);
    assert_eq!(db.node_count(), 2);
    assert_eq!(db.edge_count(), 1);
}

#[test]
fn test_free_text_rejected_in_spec_mode() {
    let err = build_flow(&["Write the docs", "a -> b"]).unwrap_err();
    assert!(matches!(err, DiagramError::InvalidNodeId { line: 1, .. }));
}

#[test]
fn test_invalid_id_rejected() {
    let err = build_flow(&["a b[Label] -> c"]).unwrap_err();
    match err {
        DiagramError::InvalidNodeId { token, line } => {
            assert_eq!(token, "a b[Label]");
            assert_eq!(line, 1);
        }
        other => panic!("expected InvalidNodeId, got {:?}", other),
    }
}

#[test]
fn test_internal_ids_first_seen() {
    let db = build_flow(&["zeta -> alpha", "mid", "alpha -> mid"]).unwrap();
    let ids: Vec<_> = ["zeta", "alpha", "mid"]
        .iter()
        .map(|id| db.internal_id(id).unwrap())
        .collect();
    assert_eq!(ids, vec!["f0", "f1", "f2"]);
}

#[test]
fn test_duplicate_edges_kept() {
    let db = build_flow(&["a -> b", "a -> b"]).unwrap();
    assert_eq!(db.edge_count(), 2);
}
